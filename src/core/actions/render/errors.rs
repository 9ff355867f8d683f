use crate::core::data::pixel_buffer::PixelBufferError;
use crate::core::data::viewport::ViewportError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RenderError {
    #[error("invalid viewport: {0}")]
    InvalidViewport(#[from] ViewportError),

    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,

    #[error("render grid of {requested} pixels exceeds the limit of {limit}")]
    ResourceLimitExceeded { requested: u64, limit: u64 },

    #[error("no render worker available ({attempts} spawn attempts)")]
    WorkerUnavailable { attempts: u32 },

    #[error("render worker panicked on request {request_id}")]
    WorkerPanicked { request_id: u64 },

    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[from] PixelBufferError),
}
