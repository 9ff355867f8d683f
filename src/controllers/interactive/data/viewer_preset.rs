use std::fmt;

use crate::core::data::complex::Complex;
use crate::core::fractals::colour_mapping::kinds::ColourSchemeKind;
use crate::core::fractals::kernel::KernelParams;

pub const DEFAULT_JULIA_C: Complex = Complex {
    real: -0.7,
    imag: 0.27015,
};
pub const DEFAULT_ZOOM_SPEED: f64 = 1.2;

/// Zoom factor and pan centre of a named view.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PresetView {
    pub zoom_factor: f64,
    pub pan_center: Complex,
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ViewerPreset {
    #[default]
    Mandelbrot,
    Julia,
    MosaicBurningShip,
}

impl ViewerPreset {
    pub const ALL: [Self; 3] = [Self::Mandelbrot, Self::Julia, Self::MosaicBurningShip];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
            Self::MosaicBurningShip => "Burning Ship",
        }
    }

    /// Lower-case name usable in file names.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Mandelbrot => "mandelbrot",
            Self::Julia => "julia",
            Self::MosaicBurningShip => "burning_ship",
        }
    }

    #[must_use]
    pub fn kernel(self) -> KernelParams {
        match self {
            Self::Mandelbrot => KernelParams::Mandelbrot,
            Self::Julia => KernelParams::julia(DEFAULT_JULIA_C),
            Self::MosaicBurningShip => KernelParams::BurningShip,
        }
    }

    #[must_use]
    pub const fn colour_scheme(self) -> ColourSchemeKind {
        match self {
            Self::Mandelbrot | Self::Julia => ColourSchemeKind::LinearRamp,
            Self::MosaicBurningShip => ColourSchemeKind::SmoothRamp,
        }
    }

    /// View shown when the viewer first opens.
    #[must_use]
    pub const fn initial_view(self) -> PresetView {
        match self {
            Self::Mandelbrot => PresetView {
                zoom_factor: 0.4,
                pan_center: Complex {
                    real: -0.68,
                    imag: 0.0,
                },
            },
            Self::Julia => PresetView {
                zoom_factor: 0.335,
                pan_center: Complex::ZERO,
            },
            Self::MosaicBurningShip => Self::MosaicBurningShip.reset_view(),
        }
    }

    /// View restored by the reset action. Differs from the initial view for
    /// the Mandelbrot and Julia viewers.
    #[must_use]
    pub const fn reset_view(self) -> PresetView {
        match self {
            Self::Mandelbrot => PresetView {
                zoom_factor: 0.5,
                pan_center: Complex {
                    real: -0.5,
                    imag: 0.0,
                },
            },
            Self::Julia => PresetView {
                zoom_factor: 0.5,
                pan_center: Complex::ZERO,
            },
            Self::MosaicBurningShip => PresetView {
                zoom_factor: 0.5,
                pan_center: Complex {
                    real: -0.5,
                    imag: -0.5,
                },
            },
        }
    }

    #[must_use]
    pub const fn reset_message(self) -> &'static str {
        match self {
            Self::Mandelbrot => "View has been reset.",
            Self::Julia => "View and C values have been reset.",
            Self::MosaicBurningShip => "Burning Ship view has been reset.",
        }
    }
}

impl fmt::Display for ViewerPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
