use std::fmt;

/// One entry of the action catalogue.
///
/// Actions are plain values: the router produces them, the
/// [`Choreographer`](crate::Choreographer) executes them. Every variant is
/// fire-and-forget and never blocks the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Step the background palette; the dark entry dims the ambient light
    /// and turns on the spotlight.
    ChangePalette,
    /// Tween the orbit camera to a random pose.
    MoveCamera,
    /// Flash the heater light and let it decay back to 1.
    Heat,
    /// Scatter the kotatsu parts, or gather them back with some probability.
    Dissolve,
    /// Spin the tabletop by 3π (or back to 0) with a scale pop.
    RotateTabletop,
    /// Toggle normal-debug materials on the kotatsu; with `wireframe` also
    /// toggle the embroidery wireframe.
    ChangeMaterials { wireframe: bool },
    /// Focus the next embroidery sub-target and scatter the rest.
    ZoomToSubmesh,
    /// Scale pop on the active model root.
    Bounce,
    /// Restore every transform, material, flag and the camera pose.
    Reset,
    /// Tween the active model root to a uniform scale of `1 + velocity`.
    ScaleFromVelocity(f32),
    /// Float the tabletop and table base apart; applied instantly.
    FloatFuton(f32),
    /// Swap which model is visible.
    ChangeModel,
    /// Set the camera elevation in radians; applied instantly.
    SetCameraElevation(f32),
}

impl Action {
    /// Stable identifier, used in log lines.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Action::ChangePalette => "change-palette",
            Action::MoveCamera => "move-camera",
            Action::Heat => "heat",
            Action::Dissolve => "dissolve",
            Action::RotateTabletop => "rotate-tabletop",
            Action::ChangeMaterials { .. } => "change-materials",
            Action::ZoomToSubmesh => "zoom-to-submesh",
            Action::Bounce => "bounce",
            Action::Reset => "reset",
            Action::ScaleFromVelocity(_) => "scale-from-velocity",
            Action::FloatFuton(_) => "float-futon",
            Action::ChangeModel => "change-model",
            Action::SetCameraElevation(_) => "set-camera-elevation",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::ChangeMaterials { wireframe } => {
                write!(f, "{}(wireframe={wireframe})", self.name())
            }
            Action::ScaleFromVelocity(v) | Action::FloatFuton(v) | Action::SetCameraElevation(v) => {
                write!(f, "{}({v:.3})", self.name())
            }
            _ => f.write_str(self.name()),
        }
    }
}
