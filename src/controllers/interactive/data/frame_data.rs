use std::time::Duration;

use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData};

/// A completed frame handed to the presenter. The scheduler keeps no
/// reference to the pixels once this is delivered.
#[derive(Debug)]
pub struct FrameData {
    pub request_id: u64,
    pub pixel_buffer: PixelBuffer,
    /// Ratio of the buffer resolution to the display resolution.
    pub supersample_factor: u32,
    pub render_duration: Duration,
    /// No younger request is queued or running.
    pub settled: bool,
}

impl FrameData {
    #[must_use]
    pub fn pixel_width(&self) -> u32 {
        self.pixel_buffer.width()
    }

    #[must_use]
    pub fn pixel_height(&self) -> u32 {
        self.pixel_buffer.height()
    }

    #[must_use]
    pub fn into_pixels(self) -> PixelBufferData {
        self.pixel_buffer.into_data()
    }
}
