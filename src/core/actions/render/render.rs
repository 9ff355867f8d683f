use log::trace;

use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer_parallel;
use crate::core::actions::render::errors::RenderError;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::colour_mapping::factory::colour_map_factory;
use crate::core::fractals::colour_mapping::kinds::ColourSchemeKind;
use crate::core::fractals::escape_time::EscapeTimeAlgorithm;
use crate::core::fractals::kernel::KernelParams;

/// Rejects a render grid larger than `max_render_pixels` before anything is
/// allocated for it.
pub fn check_pixel_limit(viewport: &Viewport, max_render_pixels: u64) -> Result<(), RenderError> {
    let requested = viewport.render_pixel_count();

    if requested > max_render_pixels {
        return Err(RenderError::ResourceLimitExceeded {
            requested,
            limit: max_render_pixels,
        });
    }

    Ok(())
}

/// Renders one frame at the viewport's render resolution.
///
/// Pure in its inputs: nothing outside the arguments is read, and the
/// returned buffer is not referenced anywhere else.
pub fn render(
    viewport: &Viewport,
    kernel: KernelParams,
    colour_scheme: ColourSchemeKind,
    max_iterations: u32,
    max_render_pixels: u64,
) -> Result<PixelBuffer, RenderError> {
    if max_iterations == 0 {
        return Err(RenderError::ZeroMaxIterations);
    }

    check_pixel_limit(viewport, max_render_pixels)?;

    let algorithm = EscapeTimeAlgorithm::new(*viewport, kernel, max_iterations);
    let colour_map = colour_map_factory(colour_scheme, max_iterations);

    trace!(
        "rendering {} at {}x{} with {}",
        kernel.kind(),
        viewport.render_width(),
        viewport.render_height(),
        colour_map.display_name()
    );

    Ok(generate_pixel_buffer_parallel(
        viewport.render_width(),
        viewport.render_height(),
        &algorithm,
        colour_map.as_ref(),
    )?)
}
