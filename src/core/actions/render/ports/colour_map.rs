use crate::core::data::colour::Colour;

/// Turns an escape-iteration count into a pixel colour. Implementations are
/// pure: the same count always yields the same colour.
pub trait ColourMap: Send + Sync {
    fn map(&self, iterations: u32) -> Colour;

    fn display_name(&self) -> &str;
}
