pub mod engine_config;
pub mod frame_data;
pub mod render_request;
pub mod viewer_preset;
pub mod viewer_state;
