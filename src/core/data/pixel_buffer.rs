use crate::core::data::colour::Colour;
use crate::core::data::point::Point;

pub const BYTES_PER_PIXEL: usize = 4;

fn buffer_size(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PixelBufferError {
    #[error("pixel at x:{}, y:{} outside of {width}x{height} buffer", pixel.x, pixel.y)]
    PixelOutsideBounds {
        pixel: Point,
        width: u32,
        height: u32,
    },

    #[error("expected {expected} bytes for the pixel grid, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGBA8 image.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            buffer: vec![0; buffer_size(width, height)],
        }
    }

    pub fn from_data(
        width: u32,
        height: u32,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let expected = buffer_size(width, height);

        if expected != buffer.len() {
            return Err(PixelBufferError::SizeMismatch {
                expected,
                actual: buffer.len(),
            });
        }

        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn into_data(self) -> PixelBufferData {
        self.buffer
    }

    fn offset(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if pixel.x >= self.width || pixel.y >= self.height {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                width: self.width,
                height: self.height,
            });
        }

        Ok((pixel.x as usize + pixel.y as usize * self.width as usize) * BYTES_PER_PIXEL)
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        let i = self.offset(pixel)?;

        Ok(Colour {
            r: self.buffer[i],
            g: self.buffer[i + 1],
            b: self.buffer[i + 2],
            a: self.buffer[i + 3],
        })
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let i = self.offset(pixel)?;
        self.buffer[i..i + BYTES_PER_PIXEL].copy_from_slice(&colour.to_rgba());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let buffer = PixelBuffer::new(10, 10);

        assert_eq!(buffer.buffer_size(), 400);
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_from_data_valid() {
        let data: Vec<u8> = vec![
            255, 0, 0, 255, // (0,0) red
            0, 255, 0, 255, // (1,0) green
        ];

        let buffer = PixelBuffer::from_data(2, 1, data.clone()).unwrap();

        assert_eq!(buffer.buffer(), data.as_slice());
        assert_eq!(buffer.pixel(Point { x: 1, y: 0 }).unwrap(), Colour::opaque(0, 255, 0));
    }

    #[test]
    fn test_from_data_size_mismatch() {
        let result = PixelBuffer::from_data(2, 2, vec![0; 12]);

        assert_eq!(
            result,
            Err(PixelBufferError::SizeMismatch {
                expected: 16,
                actual: 12
            })
        );
    }

    #[test]
    fn test_set_pixel_writes_rgba_at_row_major_offset() {
        let mut buffer = PixelBuffer::new(3, 3);
        buffer
            .set_pixel(Point { x: 1, y: 1 }, Colour::opaque(255, 10, 20))
            .unwrap();

        assert_eq!(&buffer.buffer()[16..20], &[255, 10, 20, 255]);
    }

    #[test]
    fn test_set_pixel_outside_bounds() {
        let mut buffer = PixelBuffer::new(3, 3);
        let result = buffer.set_pixel(Point { x: 3, y: 0 }, Colour::BLACK);

        assert_eq!(
            result,
            Err(PixelBufferError::PixelOutsideBounds {
                pixel: Point { x: 3, y: 0 },
                width: 3,
                height: 3
            })
        );
        assert!(buffer.pixel(Point { x: 0, y: 3 }).is_err());
    }

    #[test]
    fn test_into_data_hands_over_the_bytes() {
        let buffer = PixelBuffer::from_data(1, 1, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(buffer.into_data(), vec![1, 2, 3, 4]);
    }
}
