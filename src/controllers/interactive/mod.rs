//! Interactive render scheduling for the fractal viewer.
//!
//! The UI layer owns a `ViewerState`, turns pointer and button events into
//! viewport mutations, and submits snapshots to the `RenderScheduler`.
//! Completed frames come back through a `RenderEventPort`.
//!
//! # Architecture
//!
//! - **Input**: `ViewerState` snapshots, validated into `RenderRequest`s
//! - **Output**: `RenderEventPort` receives `RenderEvent`s on worker threads
//! - **Core**: the pure `render` action from `core/` does the computation

pub mod data;
pub mod events;
pub mod ports;
mod scheduler;

pub use data::engine_config::EngineConfig;
pub use data::frame_data::FrameData;
pub use data::render_request::RenderRequest;
pub use data::viewer_preset::ViewerPreset;
pub use data::viewer_state::ViewerState;
pub use events::render_event::{RenderEvent, RenderFailure};
pub use ports::presenter_port::RenderEventPort;
pub use scheduler::{RenderScheduler, SchedulerStats};
