use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::{Viewport, ViewportError};

/// Maps a pixel of the render grid onto the complex plane.
///
/// The divisor is `output_width * zoom` on both axes, even when the render
/// grid is supersampled. A supersampled grid therefore covers a wider region
/// of the plane at unchanged scale, with unchanged aspect ratio.
#[must_use]
pub fn pixel_to_complex_coords(pixel: Point, viewport: &Viewport) -> Complex {
    let scale = viewport.scale();
    let pan = viewport.pan_center();

    Complex {
        real: (f64::from(pixel.x) - f64::from(viewport.render_width()) / 2.0) * scale + pan.real,
        imag: (f64::from(pixel.y) - f64::from(viewport.render_height()) / 2.0) * scale + pan.imag,
    }
}

/// Maps a point on the displayed canvas (output resolution, fractional
/// coordinates allowed) onto the complex plane.
#[must_use]
pub fn screen_to_complex_coords(screen_x: f64, screen_y: f64, viewport: &Viewport) -> Complex {
    let scale = viewport.scale();
    let pan = viewport.pan_center();

    Complex {
        real: (screen_x - f64::from(viewport.output_width()) / 2.0) * scale + pan.real,
        imag: (screen_y - f64::from(viewport.output_height()) / 2.0) * scale + pan.imag,
    }
}

/// Multiplies the zoom by `factor` while keeping the complex coordinate under
/// the screen point `(screen_x, screen_y)` fixed.
pub fn zoom_about_point(
    viewport: &Viewport,
    screen_x: f64,
    screen_y: f64,
    factor: f64,
) -> Result<Viewport, ViewportError> {
    let fixed = screen_to_complex_coords(screen_x, screen_y, viewport);
    let zoom_factor = viewport.zoom_factor() * factor;
    let scale = 1.0 / (f64::from(viewport.output_width()) * zoom_factor);

    let offset = Complex {
        real: screen_x - f64::from(viewport.output_width()) / 2.0,
        imag: screen_y - f64::from(viewport.output_height()) / 2.0,
    };

    viewport.with_zoom_and_pan(zoom_factor, fixed - offset.scale(scale))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_viewport(supersample: bool) -> Viewport {
        Viewport::new(0.4, Complex::new(-0.68, 0.0), 800, 600, supersample).unwrap()
    }

    fn assert_close(a: Complex, b: Complex) {
        let tolerance = 1e-9 * a.real.abs().max(a.imag.abs()).max(1.0);
        assert!(
            (a.real - b.real).abs() <= tolerance && (a.imag - b.imag).abs() <= tolerance,
            "{:?} != {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_centre_pixel_maps_to_pan_centre() {
        let vp = default_viewport(false);
        let result = pixel_to_complex_coords(Point { x: 400, y: 300 }, &vp);

        assert_eq!(result, Complex::new(-0.68, 0.0));
    }

    #[test]
    fn test_top_left_pixel() {
        let vp = default_viewport(false);
        let result = pixel_to_complex_coords(Point { x: 0, y: 0 }, &vp);

        // -400 / 320 - 0.68 and -300 / 320
        assert_close(result, Complex::new(-1.93, -0.9375));
    }

    #[test]
    fn test_both_axes_use_output_width() {
        let vp = Viewport::new(1.0, Complex::ZERO, 100, 50, false).unwrap();
        let right = pixel_to_complex_coords(Point { x: 60, y: 25 }, &vp);
        let down = pixel_to_complex_coords(Point { x: 50, y: 35 }, &vp);

        assert_close(right, Complex::new(0.1, 0.0));
        assert_close(down, Complex::new(0.0, 0.1));
    }

    #[test]
    fn test_supersampling_keeps_scale_and_centre() {
        let plain = default_viewport(false);
        let supersampled = default_viewport(true);

        assert_eq!(
            pixel_to_complex_coords(Point { x: 800, y: 600 }, &supersampled),
            pixel_to_complex_coords(Point { x: 400, y: 300 }, &plain)
        );

        let step_plain = pixel_to_complex_coords(Point { x: 401, y: 300 }, &plain).real
            - pixel_to_complex_coords(Point { x: 400, y: 300 }, &plain).real;
        let step_super = pixel_to_complex_coords(Point { x: 801, y: 600 }, &supersampled).real
            - pixel_to_complex_coords(Point { x: 800, y: 600 }, &supersampled).real;

        assert!((step_plain - step_super).abs() < 1e-15);
    }

    #[test]
    fn test_screen_and_pixel_mapping_agree_without_supersampling() {
        let vp = default_viewport(false);

        assert_eq!(
            screen_to_complex_coords(123.0, 456.0, &vp),
            pixel_to_complex_coords(Point { x: 123, y: 456 }, &vp)
        );
    }

    #[test]
    fn test_zoom_about_point_keeps_cursor_anchored() {
        let cursors = [(0.0, 0.0), (400.0, 300.0), (799.0, 599.0), (123.5, 77.25)];
        let factors = [1.2, 1.0 / 1.2, 2.0, 0.5, 10.0];

        for supersample in [false, true] {
            for &(mx, my) in &cursors {
                for &k in &factors {
                    let before = default_viewport(supersample);
                    let after = zoom_about_point(&before, mx, my, k).unwrap();

                    assert!((after.zoom_factor() - before.zoom_factor() * k).abs() < 1e-12);
                    assert_close(
                        screen_to_complex_coords(mx, my, &after),
                        screen_to_complex_coords(mx, my, &before),
                    );
                }
            }
        }
    }

    #[test]
    fn test_repeated_zoom_steps_stay_anchored() {
        let mut vp = default_viewport(false);
        let anchor = screen_to_complex_coords(250.0, 180.0, &vp);

        for _ in 0..50 {
            vp = zoom_about_point(&vp, 250.0, 180.0, 1.2).unwrap();
            assert_close(screen_to_complex_coords(250.0, 180.0, &vp), anchor);
        }
    }

    #[test]
    fn test_zoom_about_centre_keeps_pan() {
        let vp = default_viewport(false);
        let zoomed = zoom_about_point(&vp, 400.0, 300.0, 3.0).unwrap();

        assert_eq!(zoomed.pan_center(), vp.pan_center());
    }

    #[test]
    fn test_zoom_to_zero_is_rejected() {
        let vp = default_viewport(false);

        assert!(matches!(
            zoom_about_point(&vp, 10.0, 10.0, 0.0),
            Err(ViewportError::InvalidZoom(_))
        ));
    }
}
