use crate::core::data::complex::Complex;

/// `z² + c`
#[inline]
#[must_use]
pub fn mandelbrot_step(z: Complex, c: Complex) -> Complex {
    z * z + c
}
