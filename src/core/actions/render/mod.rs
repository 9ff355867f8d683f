pub mod errors;
#[allow(clippy::module_inception)]
pub mod render;
