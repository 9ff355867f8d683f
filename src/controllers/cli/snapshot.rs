use std::path::Path;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;

use log::info;

use crate::controllers::interactive::data::engine_config::EngineConfig;
use crate::controllers::interactive::data::viewer_state::ViewerState;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::presenter_port::RenderEventPort;
use crate::controllers::interactive::RenderScheduler;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::downsample::DownsampleError;
use crate::core::actions::render::errors::RenderError;
use crate::presenters::compositor::frame_compositor::FrameCompositor;

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Downsample(#[from] DownsampleError),

    #[error("render workers stopped before request {0} was delivered")]
    Disconnected(u64),
}

/// Renders viewer states through the scheduler and writes the settled frame
/// to a file, one view at a time.
pub struct SnapshotController<P: FilePresenterPort> {
    presenter: P,
    scheduler: RenderScheduler,
    events: Receiver<RenderEvent>,
    compositor: FrameCompositor,
}

impl<P: FilePresenterPort> SnapshotController<P> {
    pub fn new(presenter: P, config: EngineConfig) -> Result<Self, RenderError> {
        let (sender, events) = mpsc::channel();
        let port = move |event: RenderEvent| {
            // The receiver only goes away with the controller itself.
            let _ = sender.send(event);
        };

        let scheduler = RenderScheduler::new(config, Arc::new(port) as Arc<dyn RenderEventPort>)?;

        Ok(Self {
            presenter,
            scheduler,
            events,
            compositor: FrameCompositor::new(),
        })
    }

    /// Submits the viewer's current view and blocks until its frame is on
    /// display.
    pub fn render(&mut self, viewer: &mut ViewerState) -> Result<u64, SnapshotError> {
        let (viewport, kernel, colour_scheme) = viewer.snapshot();
        let request_id = self
            .scheduler
            .submit_render(viewport, kernel, colour_scheme)?;

        viewer.record_submission(request_id);
        self.compositor.mark_requested(request_id);

        loop {
            let event = self
                .events
                .recv()
                .map_err(|_| SnapshotError::Disconnected(request_id))?;

            if event.request_id() != request_id {
                self.compositor.handle(event)?;
                continue;
            }

            if let RenderEvent::Failed(failure) = event {
                return Err(failure.error.into());
            }

            if let RenderEvent::Frame(frame) = &event {
                info!(
                    "{} rendered at {}x{} in {:?}",
                    viewer.preset(),
                    frame.pixel_width(),
                    frame.pixel_height(),
                    frame.render_duration
                );
            }

            self.compositor.handle(event)?;

            return Ok(request_id);
        }
    }

    #[must_use]
    pub fn compositor(&self) -> &FrameCompositor {
        &self.compositor
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(frame) = self.compositor.frame() {
            self.presenter.present(frame, filepath)?
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::PathBuf;

    use crate::controllers::interactive::data::viewer_preset::ViewerPreset;
    use crate::core::data::pixel_buffer::PixelBuffer;

    #[derive(Default)]
    struct RecordingPresenter {
        written: RefCell<Vec<(PathBuf, u32, u32)>>,
    }

    impl FilePresenterPort for &RecordingPresenter {
        fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
            self.written.borrow_mut().push((
                filepath.as_ref().to_path_buf(),
                buffer.width(),
                buffer.height(),
            ));
            Ok(())
        }
    }

    fn small_viewer(preset: ViewerPreset) -> ViewerState {
        let mut viewer = ViewerState::new(preset).unwrap();
        viewer.fit_to_window(100.0, 100.0).unwrap();
        viewer
    }

    #[test]
    fn test_write_before_render_is_a_no_op() {
        let presenter = RecordingPresenter::default();
        let controller =
            SnapshotController::new(&presenter, EngineConfig::default().with_worker_count(1))
                .unwrap();

        controller.write("unused.ppm").unwrap();

        assert!(presenter.written.borrow().is_empty());
    }

    #[test]
    fn test_renders_each_preset_at_display_resolution() {
        let presenter = RecordingPresenter::default();
        let mut controller =
            SnapshotController::new(&presenter, EngineConfig::default().with_worker_count(2))
                .unwrap();

        for preset in ViewerPreset::ALL {
            let mut viewer = small_viewer(preset);
            viewer.toggle_high_res();

            let request_id = controller.render(&mut viewer).unwrap();

            assert_eq!(viewer.latest_submitted_request_id, request_id);
            assert_eq!(controller.compositor().last_displayed_request_id(), request_id);
            assert!(!controller.compositor().is_loading());

            controller.write(format!("{}.ppm", preset.slug())).unwrap();
        }

        let written = presenter.written.borrow();
        assert_eq!(written.len(), 3);
        assert!(written.iter().all(|&(_, w, h)| (w, h) == (90, 70)));
        assert_eq!(written[2].0, PathBuf::from("burning_ship.ppm"));
    }

    #[test]
    fn test_render_error_is_returned() {
        let presenter = RecordingPresenter::default();
        let config = EngineConfig::default()
            .with_worker_count(1)
            .with_max_render_pixels(10);
        let mut controller = SnapshotController::new(&presenter, config).unwrap();

        let result = controller.render(&mut small_viewer(ViewerPreset::Mandelbrot));

        assert!(matches!(
            result,
            Err(SnapshotError::Render(RenderError::ResourceLimitExceeded { .. }))
        ));
    }
}
