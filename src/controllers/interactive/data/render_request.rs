use crate::core::data::viewport::Viewport;
use crate::core::fractals::colour_mapping::kinds::ColourSchemeKind;
use crate::core::fractals::kernel::KernelParams;

/// Snapshot of everything one render needs. Immutable once the scheduler
/// has assigned its id.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    request_id: u64,
    viewport: Viewport,
    kernel: KernelParams,
    colour_scheme: ColourSchemeKind,
    max_iterations: u32,
}

impl RenderRequest {
    pub(crate) fn new(
        request_id: u64,
        viewport: Viewport,
        kernel: KernelParams,
        colour_scheme: ColourSchemeKind,
        max_iterations: u32,
    ) -> Self {
        Self {
            request_id,
            viewport,
            kernel,
            colour_scheme,
            max_iterations,
        }
    }

    #[must_use]
    pub fn request_id(&self) -> u64 {
        self.request_id
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
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
