use crate::core::fractals::FractalKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Maps a wheel notch to a zoom direction: scrolling up zooms in.
    #[must_use]
    pub fn from_wheel(notches: f64) -> Option<Self> {
        if notches > 0.0 {
            Some(Self::In)
        } else if notches < 0.0 {
            Some(Self::Out)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedAxis {
    Real,
    Imaginary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Negative,
    Positive,
}

impl Sign {
    #[must_use]
    pub const fn apply(self, magnitude: f64) -> f64 {
        match self {
            Self::Negative => -magnitude,
            Self::Positive => magnitude,
        }
    }
}

/// A single mutation of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavigationCommand {
    /// Screen-space drag delta for this frame, in window pixels.
    Pan { dx: f64, dy: f64 },
    Zoom(ZoomDirection),
    Resize(i32),
    AdjustDepth(i64),
    ToggleColourMode,
    NudgeSeed { axis: SeedAxis, sign: Sign },
    SetFractalKind(FractalKind),
    ResetView,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_up_zooms_in_and_down_zooms_out() {
        assert_eq!(ZoomDirection::from_wheel(1.0), Some(ZoomDirection::In));
        assert_eq!(ZoomDirection::from_wheel(-1.0), Some(ZoomDirection::Out));
        assert_eq!(ZoomDirection::from_wheel(0.0), None);
    }

    #[test]
    fn sign_applies_to_magnitude() {
        assert_eq!(Sign::Positive.apply(0.02), 0.02);
        assert_eq!(Sign::Negative.apply(0.02), -0.02);
    }
}
