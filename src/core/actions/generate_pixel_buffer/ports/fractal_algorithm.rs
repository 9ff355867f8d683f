use crate::core::data::point::Point;

/// Per-pixel evaluation of a fractal over a render grid.
pub trait FractalAlgorithm {
    type Success;

    fn compute(&self, pixel: Point) -> Self::Success;
}
