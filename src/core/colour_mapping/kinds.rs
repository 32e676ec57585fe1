#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColourMode {
    #[default]
    Grayscale,
    FalseColour,
}

impl ColourMode {
    pub const ALL: &'static [Self] = &[Self::Grayscale, Self::FalseColour];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Grayscale => "Grayscale",
            Self::FalseColour => "False colour (jet)",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Grayscale => Self::FalseColour,
            Self::FalseColour => Self::Grayscale,
        }
    }
}

impl std::fmt::Display for ColourMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
