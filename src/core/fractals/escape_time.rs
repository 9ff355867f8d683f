use crate::core::actions::generate_pixel_buffer::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::kernel::KernelParams;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

/// A kernel bound to a viewport and iteration budget, evaluated per render pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct EscapeTimeAlgorithm {
    viewport: Viewport,
    kernel: KernelParams,
    max_iterations: u32,
}

impl EscapeTimeAlgorithm {
    #[must_use]
    pub fn new(viewport: Viewport, kernel: KernelParams, max_iterations: u32) -> Self {
        Self {
            viewport,
            kernel,
            max_iterations,
        }
    }
}

impl FractalAlgorithm for EscapeTimeAlgorithm {
    type Success = u32;

    #[inline]
    fn compute(&self, pixel: Point) -> u32 {
        let point = pixel_to_complex_coords(pixel, &self.viewport);
        self.kernel.iterate(point, self.max_iterations)
    }
}
