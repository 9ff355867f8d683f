pub mod downsample;
pub mod generate_pixel_buffer;
pub mod render;
