#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColourSchemeKind {
    #[default]
    LinearRamp,
    SmoothRamp,
}

impl ColourSchemeKind {
    pub const ALL: &'static [Self] = &[Self::LinearRamp, Self::SmoothRamp];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::LinearRamp => "Linear ramp",
            Self::SmoothRamp => "Smooth ramp",
        }
    }
}

impl std::fmt::Display for ColourSchemeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
