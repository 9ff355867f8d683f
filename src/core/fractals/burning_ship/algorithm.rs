use crate::core::data::complex::Complex;

/// `(|Re z| + i|Im z|)² + c`
#[inline]
#[must_use]
pub fn burning_ship_step(z: Complex, c: Complex) -> Complex {
    let folded = z.abs_components();
    folded * folded + c
}
