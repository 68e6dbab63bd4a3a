/// A pixel position. Signed, because drag deltas and cursor positions
/// reported by a window can fall outside the drawable area.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}
