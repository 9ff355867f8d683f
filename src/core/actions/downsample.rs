use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferError};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DownsampleError {
    #[error("downsample factor must be at least 1")]
    ZeroFactor,

    #[error("{width}x{height} buffer is not divisible by factor {factor}")]
    NotDivisible { width: u32, height: u32, factor: u32 },

    #[error(transparent)]
    PixelBuffer(#[from] PixelBufferError),
}

/// Box-filters an RGBA buffer down by `factor` on each axis.
///
/// Each output channel is the rounded mean of the `factor x factor` block it
/// covers, alpha included.
pub fn downsample(source: &PixelBuffer, factor: u32) -> Result<PixelBuffer, DownsampleError> {
    if factor == 0 {
        return Err(DownsampleError::ZeroFactor);
    }

    if factor == 1 {
        return Ok(source.clone());
    }

    let (width, height) = (source.width(), source.height());

    if width % factor != 0 || height % factor != 0 {
        return Err(DownsampleError::NotDivisible {
            width,
            height,
            factor,
        });
    }

    let out_width = (width / factor) as usize;
    let out_height = (height / factor) as usize;
    let factor = factor as usize;
    let src_stride = width as usize * BYTES_PER_PIXEL;
    let block = (factor * factor) as u32;
    let src = source.buffer();
    let mut out = vec![0u8; out_width * out_height * BYTES_PER_PIXEL];

    for oy in 0..out_height {
        for ox in 0..out_width {
            let mut sums = [0u32; BYTES_PER_PIXEL];

            for dy in 0..factor {
                let row = (oy * factor + dy) * src_stride;
                for dx in 0..factor {
                    let i = row + (ox * factor + dx) * BYTES_PER_PIXEL;
                    for (sum, &byte) in sums.iter_mut().zip(&src[i..i + BYTES_PER_PIXEL]) {
                        *sum += u32::from(byte);
                    }
                }
            }

            let o = (oy * out_width + ox) * BYTES_PER_PIXEL;
            for (channel, sum) in sums.iter().enumerate() {
                out[o + channel] = ((sum + block / 2) / block) as u8;
            }
        }
    }

    Ok(PixelBuffer::from_data(
        out_width as u32,
        out_height as u32,
        out,
    )?)
}
