use crate::core::data::complex::Complex;

pub const SUPERSAMPLE_FACTOR: u32 = 2;

#[derive(Debug, Copy, Clone, PartialEq, thiserror::Error)]
pub enum ViewportError {
    #[error("zoom factor must be finite and greater than zero, got {0}")]
    InvalidZoom(f64),

    #[error("pan centre must be finite, got ({real}, {imag})")]
    NonFinitePan { real: f64, imag: f64 },

    #[error("output size must be at least 1x1, got {width}x{height}")]
    EmptyOutput { width: u32, height: u32 },
}

/// Camera state for a single render: zoom, pan centre and output resolution.
///
/// Always valid once constructed. Every "mutation" builds a new value through
/// the same validation, so a render never sees a zero zoom or empty grid.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    zoom_factor: f64,
    pan_center: Complex,
    output_width: u32,
    output_height: u32,
    supersample: bool,
}

impl Viewport {
    pub fn new(
        zoom_factor: f64,
        pan_center: Complex,
        output_width: u32,
        output_height: u32,
        supersample: bool,
    ) -> Result<Self, ViewportError> {
        if !zoom_factor.is_finite() || zoom_factor <= 0.0 {
            return Err(ViewportError::InvalidZoom(zoom_factor));
        }

        if !pan_center.is_finite() {
            return Err(ViewportError::NonFinitePan {
                real: pan_center.real,
                imag: pan_center.imag,
            });
        }

        if output_width == 0 || output_height == 0 {
            return Err(ViewportError::EmptyOutput {
                width: output_width,
                height: output_height,
            });
        }

        Ok(Self {
            zoom_factor,
            pan_center,
            output_width,
            output_height,
            supersample,
        })
    }

    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    #[must_use]
    pub fn pan_center(&self) -> Complex {
        self.pan_center
    }

    #[must_use]
    pub fn output_width(&self) -> u32 {
        self.output_width
    }

    #[must_use]
    pub fn output_height(&self) -> u32 {
        self.output_height
    }

    #[must_use]
    pub fn supersample(&self) -> bool {
        self.supersample
    }

    #[must_use]
    pub fn supersample_factor(&self) -> u32 {
        if self.supersample { SUPERSAMPLE_FACTOR } else { 1 }
    }

    #[must_use]
    pub fn render_width(&self) -> u32 {
        self.output_width.saturating_mul(self.supersample_factor())
    }

    #[must_use]
    pub fn render_height(&self) -> u32 {
        self.output_height.saturating_mul(self.supersample_factor())
    }

    #[must_use]
    pub fn render_pixel_count(&self) -> u64 {
        u64::from(self.render_width()) * u64::from(self.render_height())
    }

    /// Complex-plane units per display pixel. Shared by both axes.
    #[must_use]
    pub fn scale(&self) -> f64 {
        1.0 / (f64::from(self.output_width) * self.zoom_factor)
    }

    pub fn with_zoom_and_pan(
        &self,
        zoom_factor: f64,
        pan_center: Complex,
    ) -> Result<Self, ViewportError> {
        Self::new(
            zoom_factor,
            pan_center,
            self.output_width,
            self.output_height,
            self.supersample,
        )
    }

    pub fn with_output_size(&self, width: u32, height: u32) -> Result<Self, ViewportError> {
        Self::new(
            self.zoom_factor,
            self.pan_center,
            width,
            height,
            self.supersample,
        )
    }

    #[must_use]
    pub fn with_supersample(&self, supersample: bool) -> Self {
        Self {
            supersample,
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(supersample: bool) -> Viewport {
        Viewport::new(0.4, Complex::new(-0.68, 0.0), 800, 600, supersample).unwrap()
    }

    #[test]
    fn test_valid_viewport() {
        let vp = viewport(false);

        assert_eq!(vp.zoom_factor(), 0.4);
        assert_eq!(vp.pan_center(), Complex::new(-0.68, 0.0));
        assert_eq!(vp.render_width(), 800);
        assert_eq!(vp.render_height(), 600);
        assert_eq!(vp.render_pixel_count(), 480_000);
    }

    #[test]
    fn test_supersample_doubles_render_grid() {
        let vp = viewport(true);

        assert_eq!(vp.supersample_factor(), 2);
        assert_eq!(vp.render_width(), 1600);
        assert_eq!(vp.render_height(), 1200);
        assert_eq!(vp.output_width(), 800);
    }

    #[test]
    fn test_zoom_must_be_positive() {
        assert_eq!(
            Viewport::new(0.0, Complex::ZERO, 10, 10, false),
            Err(ViewportError::InvalidZoom(0.0))
        );
        assert_eq!(
            Viewport::new(-1.0, Complex::ZERO, 10, 10, false),
            Err(ViewportError::InvalidZoom(-1.0))
        );
        assert!(Viewport::new(f64::INFINITY, Complex::ZERO, 10, 10, false).is_err());
        assert!(Viewport::new(f64::NAN, Complex::ZERO, 10, 10, false).is_err());
    }

    #[test]
    fn test_output_must_not_be_empty() {
        assert_eq!(
            Viewport::new(1.0, Complex::ZERO, 0, 10, false),
            Err(ViewportError::EmptyOutput {
                width: 0,
                height: 10
            })
        );
        assert!(Viewport::new(1.0, Complex::ZERO, 10, 0, false).is_err());
        assert!(Viewport::new(1.0, Complex::ZERO, 1, 1, false).is_ok());
    }

    #[test]
    fn test_pan_must_be_finite() {
        assert!(Viewport::new(1.0, Complex::new(f64::NAN, 0.0), 10, 10, false).is_err());
    }

    #[test]
    fn test_with_methods_revalidate() {
        let vp = viewport(false);

        assert!(vp.with_zoom_and_pan(0.0, Complex::ZERO).is_err());
        assert!(vp.with_output_size(0, 0).is_err());

        let resized = vp.with_output_size(400, 300).unwrap();
        assert_eq!(resized.output_width(), 400);
        assert_eq!(resized.zoom_factor(), vp.zoom_factor());

        assert!(vp.with_supersample(true).supersample());
    }
}
