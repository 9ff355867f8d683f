use crate::core::data::complex::Complex;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::colour_mapping::kinds::ColourSchemeKind;
use crate::core::fractals::julia::algorithm::clamp_julia_c;
use crate::core::fractals::kernel::KernelParams;
use crate::core::util::pixel_to_complex_coords::zoom_about_point;

use super::viewer_preset::{DEFAULT_JULIA_C, DEFAULT_ZOOM_SPEED, PresetView, ViewerPreset};

pub const MAX_OUTPUT_WIDTH: u32 = 800;
pub const MAX_OUTPUT_HEIGHT: u32 = 600;
const WINDOW_WIDTH_SHARE: f64 = 0.9;
const WINDOW_HEIGHT_SHARE: f64 = 0.7;

/// Canvas size for a window: 90% of its width and 70% of its height, capped
/// at 800x600.
#[must_use]
pub fn fit_output_size(window_width: f64, window_height: f64) -> (u32, u32) {
    let fit = |window: f64, share: f64, max: u32| -> u32 {
        let size = (window * share).min(f64::from(max)).floor();
        if size.is_nan() || size < 1.0 { 1 } else { size as u32 }
    };

    (
        fit(window_width, WINDOW_WIDTH_SHARE, MAX_OUTPUT_WIDTH),
        fit(window_height, WINDOW_HEIGHT_SHARE, MAX_OUTPUT_HEIGHT),
    )
}

/// Everything the viewer needs to build its next render request.
///
/// Every mutation goes through `Viewport` validation; one that would leave
/// the view invalid returns the error and changes nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerState {
    preset: ViewerPreset,
    viewport: Viewport,
    kernel: KernelParams,
    colour_scheme: ColourSchemeKind,
    zoom_speed: f64,
    pub latest_submitted_request_id: u64,
}

impl ViewerState {
    pub fn new(preset: ViewerPreset) -> Result<Self, ViewportError> {
        let PresetView {
            zoom_factor,
            pan_center,
        } = preset.initial_view();

        Ok(Self {
            preset,
            viewport: Viewport::new(
                zoom_factor,
                pan_center,
                MAX_OUTPUT_WIDTH,
                MAX_OUTPUT_HEIGHT,
                false,
            )?,
            kernel: preset.kernel(),
            colour_scheme: preset.colour_scheme(),
            zoom_speed: DEFAULT_ZOOM_SPEED,
            latest_submitted_request_id: 0,
        })
    }

    #[must_use]
    pub fn preset(&self) -> ViewerPreset {
        self.preset
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn kernel(&self) -> KernelParams {
        self.kernel
    }

    #[must_use]
    pub fn colour_scheme(&self) -> ColourSchemeKind {
        self.colour_scheme
    }

    #[must_use]
    pub fn zoom_speed(&self) -> f64 {
        self.zoom_speed
    }

    #[must_use]
    pub fn is_high_res(&self) -> bool {
        self.viewport.supersample()
    }

    /// Arguments for `RenderScheduler::submit_render`.
    #[must_use]
    pub fn snapshot(&self) -> (Viewport, KernelParams, ColourSchemeKind) {
        (self.viewport, self.kernel, self.colour_scheme)
    }

    pub fn record_submission(&mut self, request_id: u64) {
        self.latest_submitted_request_id = request_id;
    }

    pub fn set_colour_scheme(&mut self, colour_scheme: ColourSchemeKind) {
        self.colour_scheme = colour_scheme;
    }

    pub fn fit_to_window(
        &mut self,
        window_width: f64,
        window_height: f64,
    ) -> Result<(), ViewportError> {
        let (width, height) = fit_output_size(window_width, window_height);
        self.viewport = self.viewport.with_output_size(width, height)?;

        Ok(())
    }

    /// Drag panning: the view follows the pointer by `(dx, dy)` display pixels.
    pub fn pan_by_pixels(&mut self, dx: f64, dy: f64) -> Result<(), ViewportError> {
        let scale = self.viewport.scale();
        let pan = self.viewport.pan_center() - Complex::new(dx, dy).scale(scale);

        self.viewport = self
            .viewport
            .with_zoom_and_pan(self.viewport.zoom_factor(), pan)?;

        Ok(())
    }

    pub fn zoom_about(
        &mut self,
        mouse_x: f64,
        mouse_y: f64,
        factor: f64,
    ) -> Result<(), ViewportError> {
        self.viewport = zoom_about_point(&self.viewport, mouse_x, mouse_y, factor)?;

        Ok(())
    }

    /// Scrolling down (positive delta) zooms out, anything else zooms in.
    pub fn wheel(
        &mut self,
        delta_y: f64,
        mouse_x: f64,
        mouse_y: f64,
    ) -> Result<(), ViewportError> {
        let factor = if delta_y > 0.0 {
            1.0 / self.zoom_speed
        } else {
            self.zoom_speed
        };

        self.zoom_about(mouse_x, mouse_y, factor)
    }

    pub fn zoom_in(&mut self) -> Result<(), ViewportError> {
        self.scale_zoom(self.zoom_speed)
    }

    pub fn zoom_out(&mut self) -> Result<(), ViewportError> {
        self.scale_zoom(1.0 / self.zoom_speed)
    }

    fn scale_zoom(&mut self, factor: f64) -> Result<(), ViewportError> {
        self.viewport = self.viewport.with_zoom_and_pan(
            self.viewport.zoom_factor() * factor,
            self.viewport.pan_center(),
        )?;

        Ok(())
    }

    /// Slider position to zoom step: `v / 100 + 1`.
    pub fn set_zoom_speed_from_slider(&mut self, value: f64) -> Result<(), ViewportError> {
        let zoom_speed = value / 100.0 + 1.0;

        if !zoom_speed.is_finite() || zoom_speed <= 0.0 {
            return Err(ViewportError::InvalidZoom(zoom_speed));
        }

        self.zoom_speed = zoom_speed;

        Ok(())
    }

    /// Only affects the Julia kernel. Components are clamped to `[-2, 2]`.
    pub fn set_julia_c(&mut self, real: f64, imag: f64) {
        if let KernelParams::Julia { .. } = self.kernel {
            let c = Complex::new(real, imag);
            if c.is_finite() {
                self.kernel = KernelParams::Julia {
                    c: clamp_julia_c(c),
                };
            }
        }
    }

    pub fn toggle_high_res(&mut self) {
        self.viewport = self.viewport.with_supersample(!self.viewport.supersample());
    }

    /// Restores the preset's reset view and Julia constant and leaves
    /// high-res mode. Canvas size and zoom speed are kept.
    pub fn reset(&mut self) -> Result<(), ViewportError> {
        let PresetView {
            zoom_factor,
            pan_center,
        } = self.preset.reset_view();

        self.viewport = self
            .viewport
            .with_zoom_and_pan(zoom_factor, pan_center)?
            .with_supersample(false);

        if let KernelParams::Julia { .. } = self.kernel {
            self.kernel = KernelParams::julia(DEFAULT_JULIA_C);
        }

        Ok(())
    }

    #[must_use]
    pub fn zoom_message(&self) -> String {
        format!("Zoom: {}%", (100.0 * self.viewport.zoom_factor()).round())
    }

    #[must_use]
    pub fn high_res_message(&self) -> String {
        let state = if self.is_high_res() { "Enabled" } else { "Disabled" };
        format!("High-Res Mode: {}", state)
    }

    #[must_use]
    pub fn reset_message(&self) -> &'static str {
        self.preset.reset_message()
    }
}
