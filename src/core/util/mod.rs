pub mod iteration_budget;
pub mod pixel_to_complex_coords;
