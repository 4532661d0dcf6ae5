//! Named nodes the action catalogue operates on.
//!
//! The rig is resolved once, right after the scene graph provider signals
//! readiness. Every name below must be present; a missing node fails the
//! bind instead of surfacing later as a dangling lookup inside an action.

use kotatsu_core::errors::{KotatsuError, Result};

use crate::NodeHandle;
use crate::model::ModelTable;
use crate::scene::SceneModel;

pub const KOTATSU_ROOT: &str = "kotatsu";
pub const TABLE_TOP: &str = "tableTop";
pub const TABLE_TOP_BASE: &str = "tableTopBase";
pub const TABLE_TOP_PICTURE: &str = "tableTopPicture";
pub const TABLE_BASE: &str = "tableBase";
pub const FUTON: &str = "futon";
pub const LEGS: [&str; 4] = ["legTL", "legTR", "legBL", "legBR"];
pub const HEATER: &str = "heater";
pub const HEATER_LIGHT: &str = "heaterLight";
pub const SPOT_LIGHT: &str = "spotLight";
pub const HEMI_LIGHT: &str = "hemiLight";

pub const EMBROIDERY_ROOT: &str = "embroidery";
pub const EMBROIDERY_LIGHT: &str = "embroideryLight";
pub const EMBROIDERY_GROUPS: [&str; 3] = ["take", "oreo", "toreko"];
pub const EMBROIDERY_GLYPHS: [&str; 7] = ["o1", "cha", "no", "ma", "to", "ri", "o2"];

/// Handles for every node an action touches.
#[derive(Debug, Clone)]
pub struct Rig {
    pub kotatsu: NodeHandle,
    pub table_top: NodeHandle,
    pub table_base: NodeHandle,
    pub futon: NodeHandle,
    pub heater_light: NodeHandle,
    pub spot_light: NodeHandle,
    pub hemi_light: NodeHandle,

    pub embroidery: NodeHandle,
    pub embroidery_light: NodeHandle,
    /// Zoom sub-targets, in cycle order.
    pub zoom_targets: Vec<NodeHandle>,
}

impl Rig {
    pub fn bind(scene: &SceneModel) -> Result<Self> {
        let light = |name: &str| -> Result<NodeHandle> {
            let handle = scene.require(name)?;
            scene
                .light(handle)
                .map(|_| handle)
                .ok_or_else(|| KotatsuError::NotALight(name.to_string()))
        };

        let zoom_targets = EMBROIDERY_GROUPS
            .iter()
            .chain(EMBROIDERY_GLYPHS.iter())
            .map(|name| scene.require(name))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            kotatsu: scene.require(KOTATSU_ROOT)?,
            table_top: scene.require(TABLE_TOP)?,
            table_base: scene.require(TABLE_BASE)?,
            futon: scene.require(FUTON)?,
            heater_light: light(HEATER_LIGHT)?,
            spot_light: light(SPOT_LIGHT)?,
            hemi_light: light(HEMI_LIGHT)?,
            embroidery: scene.require(EMBROIDERY_ROOT)?,
            embroidery_light: light(EMBROIDERY_LIGHT)?,
            zoom_targets,
        })
    }

    /// Root node of each model.
    #[must_use]
    pub fn model_roots(&self) -> ModelTable<NodeHandle> {
        ModelTable {
            kotatsu: self.kotatsu,
            embroidery: self.embroidery,
        }
    }

    /// Emissive light of each model.
    #[must_use]
    pub fn model_lights(&self) -> ModelTable<NodeHandle> {
        ModelTable {
            kotatsu: self.heater_light,
            embroidery: self.embroidery_light,
        }
    }

    /// The nodes dissolve scatters and reset gathers.
    #[must_use]
    pub fn shuffle_targets(&self) -> [NodeHandle; 3] {
        [self.futon, self.table_top, self.table_base]
    }
}
