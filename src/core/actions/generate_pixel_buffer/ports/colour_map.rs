use crate::core::data::colour::Colour;
use crate::core::fractals::colour_mapping::kinds::ColourSchemeKind;

/// Maps an escape count to a pixel colour.
///
/// Implementations are total over `0..=max_iterations`; counts above the
/// budget are treated as non-escaping.
pub trait ColourMap: Send + Sync {
    fn map(&self, iterations: u32) -> Colour;

    fn kind(&self) -> ColourSchemeKind;

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}
