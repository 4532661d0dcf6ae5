/// Cyclic cursor over an ordered list of zoom targets.
#[derive(Debug, Clone, Default)]
pub struct ZoomCycle {
    index: usize,
}

impl ZoomCycle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the focused index and advances, wrapping at `len`.
    /// `None` when there is nothing to cycle over.
    pub fn advance(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let focused = self.index % len;
        self.index = (focused + 1) % len;
        Some(focused)
    }
}
