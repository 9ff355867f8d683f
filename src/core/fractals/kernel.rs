use crate::core::data::complex::Complex;
use crate::core::fractals::burning_ship::algorithm::burning_ship_step;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::julia::algorithm::clamp_julia_c;
use crate::core::fractals::mandelbrot::algorithm::mandelbrot_step;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Which recurrence to iterate, with any parameters it needs.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum KernelParams {
    Mandelbrot,
    Julia { c: Complex },
    BurningShip,
}

impl KernelParams {
    /// Julia kernel with `c` clamped to `[-2, 2]²`.
    #[must_use]
    pub fn julia(c: Complex) -> Self {
        Self::Julia {
            c: clamp_julia_c(c),
        }
    }

    #[must_use]
    pub fn kind(&self) -> FractalKinds {
        match self {
            Self::Mandelbrot => FractalKinds::Mandelbrot,
            Self::Julia { .. } => FractalKinds::Julia,
            Self::BurningShip => FractalKinds::BurningShip,
        }
    }

    /// Escape count for `point`, or `max_iterations` if it never escapes.
    #[must_use]
    pub fn iterate(&self, point: Complex, max_iterations: u32) -> u32 {
        match *self {
            Self::Mandelbrot => escape_time(Complex::ZERO, point, max_iterations, mandelbrot_step),
            Self::Julia { c } => escape_time(point, c, max_iterations, mandelbrot_step),
            Self::BurningShip => {
                escape_time(Complex::ZERO, point, max_iterations, burning_ship_step)
            }
        }
    }
}

#[inline(always)]
fn escape_time(
    mut z: Complex,
    c: Complex,
    max_iterations: u32,
    step: impl Fn(Complex, Complex) -> Complex,
) -> u32 {
    let mut n = 0;

    while z.magnitude_squared() <= ESCAPE_RADIUS_SQUARED && n < max_iterations {
        z = step(z, c);
        n += 1;
    }

    n
}
