use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::colour_mapping::kinds::ColourSchemeKind;
use crate::core::fractals::colour_mapping::maps::escaped_colour;

/// Polynomial ramp over `t = sqrt(n / max)`.
#[derive(Debug)]
pub struct SmoothRamp {
    max_iterations: u32,
}

impl SmoothRamp {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl ColourMap for SmoothRamp {
    fn map(&self, iterations: u32) -> Colour {
        if iterations >= self.max_iterations {
            return Colour::BLACK;
        }

        let t = (f64::from(iterations) / f64::from(self.max_iterations)).sqrt();
        let u = 1.0 - t;

        escaped_colour(
            (9.0 * u * t * t * t * 255.0).floor(),
            (15.0 * u * u * t * t * 255.0).floor(),
            (8.5 * u * u * u * t * 255.0).floor(),
        )
    }

    fn kind(&self) -> ColourSchemeKind {
        ColourSchemeKind::SmoothRamp
    }
}
