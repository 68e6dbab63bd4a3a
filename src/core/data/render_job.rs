use std::ops::Range;

/// A contiguous half-open band of rows `[start_row, end_row)` handed to one
/// worker during a render.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RenderJob {
    pub start_row: u32,
    pub end_row: u32,
}

impl RenderJob {
    #[must_use]
    pub fn rows(&self) -> Range<u32> {
        self.start_row..self.end_row
    }

    #[must_use]
    pub fn row_count(&self) -> u32 {
        self.end_row - self.start_row
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start_row == self.end_row
    }
}
