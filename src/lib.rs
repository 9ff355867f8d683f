mod controllers;
mod core;
mod presenters;

pub use crate::controllers::cli::snapshot::{SnapshotController, SnapshotError};
pub use crate::controllers::interactive::data::engine_config::DEFAULT_MAX_RENDER_PIXELS;
pub use crate::controllers::interactive::{
    EngineConfig, FrameData, RenderEvent, RenderEventPort, RenderFailure, RenderRequest,
    RenderScheduler, SchedulerStats, ViewerPreset, ViewerState,
};
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::downsample::{DownsampleError, downsample};
pub use crate::core::actions::render::errors::RenderError;
pub use crate::core::actions::render::render::render;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::colour_mapping::kinds::ColourSchemeKind;
pub use crate::core::fractals::fractal_kinds::FractalKinds;
pub use crate::core::fractals::kernel::KernelParams;
pub use crate::core::util::iteration_budget::max_iterations_for_zoom;
pub use crate::core::util::pixel_to_complex_coords::{screen_to_complex_coords, zoom_about_point};
pub use crate::presenters::compositor::frame_compositor::FrameCompositor;
pub use crate::presenters::file::ppm::PpmFilePresenter;
