/// Turns primary-button drags into one pan delta per frame.
///
/// Cursor motion is accumulated between frames. The first frame after a
/// press always yields `(0, 0)` so a click without motion still pans (and
/// therefore still restarts the epoch) without jumping.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PanGesture {
    held: bool,
    fresh: bool,
    cursor: Option<(f64, f64)>,
    pending: (f64, f64),
}

impl PanGesture {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_held(&self) -> bool {
        self.held
    }

    pub fn press(&mut self) {
        self.held = true;
        self.fresh = true;
        self.pending = (0.0, 0.0);
    }

    pub fn release(&mut self) {
        self.held = false;
        self.fresh = false;
        self.pending = (0.0, 0.0);
    }

    /// Records an absolute cursor position in window pixels.
    pub fn motion(&mut self, x: f64, y: f64) {
        if self.held {
            if let Some((last_x, last_y)) = self.cursor {
                self.pending.0 += x - last_x;
                self.pending.1 += y - last_y;
            }
        }

        self.cursor = Some((x, y));
    }

    /// The delta to pan by this frame, or `None` while the button is up.
    pub fn take_frame_delta(&mut self) -> Option<(f64, f64)> {
        if !self.held {
            return None;
        }

        let delta = std::mem::take(&mut self.pending);

        if self.fresh {
            self.fresh = false;
            return Some((0.0, 0.0));
        }

        Some(delta)
    }
}
