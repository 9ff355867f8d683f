pub mod linear_ramp;
pub mod smooth_ramp;

use crate::core::data::colour::Colour;

/// Colour for a pixel that escaped. Pure black is reserved for the interior,
/// so an escaped pixel whose ramp bottoms out is nudged to the darkest blue.
pub(crate) fn escaped_colour(r: f64, g: f64, b: f64) -> Colour {
    let to_channel = |v: f64| v.clamp(0.0, 255.0) as u8;
    let (r, g, b) = (to_channel(r), to_channel(g), to_channel(b));

    if r == 0 && g == 0 && b == 0 {
        Colour::opaque(0, 0, 1)
    } else {
        Colour::opaque(r, g, b)
    }
}
