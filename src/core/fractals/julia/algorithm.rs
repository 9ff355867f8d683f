use crate::core::data::complex::Complex;

pub const JULIA_C_MIN: f64 = -2.0;
pub const JULIA_C_MAX: f64 = 2.0;

/// Clamps a Julia parameter to the range the sliders can reach.
#[must_use]
pub fn clamp_julia_c(c: Complex) -> Complex {
    Complex {
        real: c.real.clamp(JULIA_C_MIN, JULIA_C_MAX),
        imag: c.imag.clamp(JULIA_C_MIN, JULIA_C_MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_keeps_values_in_range() {
        assert_eq!(
            clamp_julia_c(Complex::new(-0.7, 0.27015)),
            Complex::new(-0.7, 0.27015)
        );
        assert_eq!(
            clamp_julia_c(Complex::new(-5.0, 3.5)),
            Complex::new(-2.0, 2.0)
        );
    }
}
