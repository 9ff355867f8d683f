use crate::controllers::interactive::data::frame_data::FrameData;
use crate::core::actions::render::errors::RenderError;

#[derive(Debug, Clone, PartialEq)]
pub struct RenderFailure {
    pub request_id: u64,
    pub error: RenderError,
    pub settled: bool,
}

#[derive(Debug)]
pub enum RenderEvent {
    /// Newest frame so far. Frame ids are strictly increasing.
    Frame(FrameData),
    /// Finished after a newer frame had already been delivered; its pixels
    /// were discarded.
    Superseded { request_id: u64 },
    Failed(RenderFailure),
}

impl RenderEvent {
    #[must_use]
    pub fn request_id(&self) -> u64 {
        match self {
            Self::Frame(frame) => frame.request_id,
            Self::Superseded { request_id } => *request_id,
            Self::Failed(failure) => failure.request_id,
        }
    }
}
