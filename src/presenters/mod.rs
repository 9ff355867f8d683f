pub mod compositor;
pub mod file;
