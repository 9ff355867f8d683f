use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::colour_mapping::kinds::ColourSchemeKind;
use crate::core::fractals::colour_mapping::maps::escaped_colour;

const RED_GAIN: f64 = 2.0;
const GREEN_GAIN: f64 = 3.0;
const BLUE_GAIN: f64 = 5.0;

/// `t = n / max * 255`, channels `(2t, 3t, 5t)` rounded and clamped to a byte.
#[derive(Debug)]
pub struct LinearRamp {
    max_iterations: u32,
}

impl LinearRamp {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl ColourMap for LinearRamp {
    fn map(&self, iterations: u32) -> Colour {
        if iterations >= self.max_iterations {
            return Colour::BLACK;
        }

        let t = f64::from(iterations) / f64::from(self.max_iterations) * 255.0;

        escaped_colour(
            (t * RED_GAIN).round_ties_even(),
            (t * GREEN_GAIN).round_ties_even(),
            (t * BLUE_GAIN).round_ties_even(),
        )
    }

    fn kind(&self) -> ColourSchemeKind {
        ColourSchemeKind::LinearRamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_returns_black_at_max_iterations() {
        let mapper = LinearRamp::new(100);
        assert_eq!(mapper.map(100), Colour::BLACK);
    }

    #[test]
    fn test_counts_above_budget_are_interior() {
        let mapper = LinearRamp::new(100);
        assert_eq!(mapper.map(101), Colour::BLACK);
    }

    #[test]
    fn test_map_low_count() {
        let mapper = LinearRamp::new(100);
        // t = 51
        assert_eq!(mapper.map(20), Colour::opaque(102, 153, 255));
    }

    #[test]
    fn test_channels_saturate_instead_of_wrapping() {
        let mapper = LinearRamp::new(100);
        // t = 229.5, every channel would overflow a byte
        assert_eq!(mapper.map(90), Colour::opaque(255, 255, 255));
    }

    #[test]
    fn test_first_escape_is_not_black() {
        let mapper = LinearRamp::new(1500);
        // t = 0.17: (0.34, 0.51, 0.85)
        assert_eq!(mapper.map(1), Colour::opaque(0, 1, 1));
    }

    #[test]
    fn test_zero_count_is_distinguished_from_interior() {
        let mapper = LinearRamp::new(250);
        assert_eq!(mapper.map(0), Colour::opaque(0, 0, 1));
    }

    #[test]
    fn test_black_iff_max_and_opaque_everywhere() {
        for max_iterations in [1, 2, 250, 1500] {
            let mapper = LinearRamp::new(max_iterations);
            for n in 0..=max_iterations {
                let colour = mapper.map(n);
                assert_eq!(colour.a, 255);
                assert_eq!(colour == Colour::BLACK, n == max_iterations, "n = {}", n);
            }
        }
    }
}
