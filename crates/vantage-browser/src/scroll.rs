//! Scroll-direction heuristic that decides whether the chrome bars hide.

/// Direction of a drag-then-decelerate gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Offset grew: content moves up, the user reads further down.
    Down,
    /// Offset shrank or stayed put.
    UpOrStationary,
}

impl ScrollDirection {
    /// Scrolling down hides the chrome; anything else reveals it.
    pub fn hides_chrome(self) -> bool {
        self == ScrollDirection::Down
    }
}

/// One-shot direction tracker, evaluated once per gesture.
///
/// A drag records the reference offset; the deceleration that follows
/// compares against it. There is no continuous tracking in between.
#[derive(Debug, Clone, Default)]
pub struct ScrollTracker {
    /// Vertical offset recorded when the last drag began.
    reference_y: f64,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the offset at which a drag began.
    pub fn begin_drag(&mut self, offset_y: f64) {
        self.reference_y = offset_y;
    }

    /// Classify the gesture at the moment deceleration begins.
    pub fn begin_deceleration(&self, offset_y: f64) -> ScrollDirection {
        if offset_y > self.reference_y {
            ScrollDirection::Down
        } else {
            ScrollDirection::UpOrStationary
        }
    }

    pub fn reference_y(&self) -> f64 {
        self.reference_y
    }
}
