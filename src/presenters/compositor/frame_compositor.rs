use std::time::Duration;

use log::debug;

use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::events::render_event::{RenderEvent, RenderFailure};
use crate::core::actions::downsample::{DownsampleError, downsample};
use crate::core::data::pixel_buffer::PixelBuffer;

/// UI-side end of the render pipeline: keeps the frame currently on screen.
///
/// Only a frame newer than the one displayed replaces it, whatever order
/// events arrive in. Supersampled frames are reduced to display resolution
/// before they are kept.
#[derive(Debug, Default)]
pub struct FrameCompositor {
    frame: Option<PixelBuffer>,
    last_displayed_request_id: u64,
    latest_requested_id: u64,
    loading: bool,
    last_error_message: Option<String>,
    last_render_duration: Option<Duration>,
}

impl FrameCompositor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Call after submitting a request; shows the loading indicator until a
    /// settled result arrives.
    pub fn mark_requested(&mut self, request_id: u64) {
        self.latest_requested_id = self.latest_requested_id.max(request_id);
        self.loading = true;
    }

    /// Applies one event. Returns `true` when the displayed frame changed.
    pub fn handle(&mut self, event: RenderEvent) -> Result<bool, DownsampleError> {
        match event {
            RenderEvent::Frame(frame) => self.composite(frame),
            RenderEvent::Superseded { request_id } => {
                debug!("discarding superseded frame {}", request_id);
                Ok(false)
            }
            RenderEvent::Failed(failure) => {
                self.record_failure(failure);
                Ok(false)
            }
        }
    }

    fn composite(&mut self, frame: FrameData) -> Result<bool, DownsampleError> {
        self.clear_loading_for(frame.request_id);

        if frame.request_id <= self.last_displayed_request_id {
            debug!(
                "ignoring frame {}, already showing {}",
                frame.request_id, self.last_displayed_request_id
            );
            return Ok(false);
        }

        let displayed = downsample(&frame.pixel_buffer, frame.supersample_factor)?;

        self.frame = Some(displayed);
        self.last_displayed_request_id = frame.request_id;
        self.last_render_duration = Some(frame.render_duration);
        self.last_error_message = None;

        Ok(true)
    }

    // `settled` was decided when the event left the worker and cannot know
    // about requests marked since, so only the newest marked id counts.
    fn clear_loading_for(&mut self, request_id: u64) {
        if request_id >= self.latest_requested_id {
            self.loading = false;
        }
    }

    fn record_failure(&mut self, failure: RenderFailure) {
        self.clear_loading_for(failure.request_id);

        if failure.request_id > self.last_displayed_request_id {
            self.last_error_message = Some(format!(
                "Error drawing fractal: {}. Please try again.",
                failure.error
            ));
        }
    }

    #[must_use]
    pub fn frame(&self) -> Option<&PixelBuffer> {
        self.frame.as_ref()
    }

    #[must_use]
    pub fn last_displayed_request_id(&self) -> u64 {
        self.last_displayed_request_id
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn last_error_message(&self) -> Option<&str> {
        self.last_error_message.as_deref()
    }

    #[must_use]
    pub fn last_render_duration(&self) -> Option<Duration> {
        self.last_render_duration
    }
}
