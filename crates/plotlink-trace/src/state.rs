use crate::series::Series;

/// Number of visualization panels the instrument tool drives.
pub const DEFAULT_SLOT_COUNT: usize = 2;

/// Current series per trace slot.
///
/// Pure data holder: single writer (the dispatcher), single reader (the
/// renderer). The slot count is fixed at construction; indices outside it
/// are a defect surfaced by the dispatcher, never a panic here.
#[derive(Debug, Clone)]
pub struct PlotState {
    slots: Vec<Series>,
}

impl PlotState {
    /// Create state for `slot_count` panels.
    pub fn new(slot_count: usize) -> Self {
        Self {
            slots: vec![Series::new(); slot_count],
        }
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn slot(&self, index: usize) -> Option<&Series> {
        self.slots.get(index)
    }

    pub fn slot_mut(&mut self, index: usize) -> Option<&mut Series> {
        self.slots.get_mut(index)
    }

    /// Iterate all slots with their indices.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Series)> {
        self.slots.iter().enumerate()
    }
}

impl Default for PlotState {
    fn default() -> Self {
        Self::new(DEFAULT_SLOT_COUNT)
    }
}
