/// Alternating flags owned by a model root.
///
/// Each flag makes repeated invocations of an action alternate instead of
/// drifting. The kotatsu root uses `is_shuffled`, `is_rotated` and
/// `is_normal_material`; the embroidery root uses `is_wireframe`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToggleState {
    pub is_shuffled: bool,
    pub is_rotated: bool,
    pub is_normal_material: bool,
    pub is_wireframe: bool,
}

impl ToggleState {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
