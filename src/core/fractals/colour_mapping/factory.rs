use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::fractals::colour_mapping::kinds::ColourSchemeKind;
use crate::core::fractals::colour_mapping::maps::linear_ramp::LinearRamp;
use crate::core::fractals::colour_mapping::maps::smooth_ramp::SmoothRamp;

#[must_use]
pub fn colour_map_factory(kind: ColourSchemeKind, max_iterations: u32) -> Box<dyn ColourMap> {
    match kind {
        ColourSchemeKind::LinearRamp => Box::new(LinearRamp::new(max_iterations)),
        ColourSchemeKind::SmoothRamp => Box::new(SmoothRamp::new(max_iterations)),
    }
}
