use rayon::prelude::*;

use crate::core::actions::generate_pixel_buffer::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferError};
use crate::core::data::point::Point;

fn fill_row<Alg, CMap>(y: u32, row: &mut [u8], algorithm: &Alg, colour_map: &CMap)
where
    Alg: FractalAlgorithm<Success = u32>,
    CMap: ColourMap + ?Sized,
{
    for (x, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
        let iterations = algorithm.compute(Point { x: x as u32, y });
        pixel.copy_from_slice(&colour_map.map(iterations).to_rgba());
    }
}

/// Evaluates and colours every pixel of a `width x height` grid, one rayon
/// task per row.
///
/// The buffer is allocated once up front and each row is written in place.
pub fn generate_pixel_buffer_parallel<Alg, CMap>(
    width: u32,
    height: u32,
    algorithm: &Alg,
    colour_map: &CMap,
) -> Result<PixelBuffer, PixelBufferError>
where
    Alg: FractalAlgorithm<Success = u32> + Sync,
    CMap: ColourMap + ?Sized,
{
    let row_bytes = width as usize * BYTES_PER_PIXEL;
    let mut buffer = vec![0u8; row_bytes * height as usize];

    if row_bytes > 0 {
        buffer
            .par_chunks_exact_mut(row_bytes)
            .enumerate()
            .for_each(|(y, row)| fill_row(y as u32, row, algorithm, colour_map));
    }

    PixelBuffer::from_data(width, height, buffer)
}
