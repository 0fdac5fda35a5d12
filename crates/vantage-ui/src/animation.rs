//! Tick-driven tweens for fades and bar slides.
//!
//! Nothing here owns a clock. Widgets hold at most one [`Tween`] each and
//! the screen advances them with the frame delta it gets from the host.

/// Timing curve of a tween. `apply` clamps its input to `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    /// Quadratic, slow start.
    EaseIn,
    /// Quadratic, slow finish.
    EaseOut,
    /// Quadratic, slow at both ends.
    EaseInOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut if t < 0.5 => 2.0 * t * t,
            Easing::EaseInOut => 1.0 - 2.0 * (1.0 - t) * (1.0 - t),
        }
    }
}

/// Interpolates `from` to `to` over `duration_ms`, after an optional hold
/// of `delay_ms` during which the value stays at `from`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub duration_ms: u32,
    pub elapsed_ms: u32,
    /// Hold time left before the value starts moving.
    pub delay_ms: u32,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration_ms: u32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms,
            elapsed_ms: 0,
            delay_ms: 0,
            easing,
        }
    }

    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Spend `dt_ms`, hold time first, and return the new value.
    pub fn tick(&mut self, dt_ms: u32) -> f32 {
        let held = dt_ms.min(self.delay_ms);
        self.delay_ms -= held;
        self.elapsed_ms = self
            .elapsed_ms
            .saturating_add(dt_ms - held)
            .min(self.duration_ms);
        self.value()
    }

    pub fn is_delayed(&self) -> bool {
        self.delay_ms > 0
    }

    pub fn is_finished(&self) -> bool {
        !self.is_delayed() && self.elapsed_ms >= self.duration_ms
    }

    /// Value at the current point in time.
    pub fn value(&self) -> f32 {
        let progress = match (self.duration_ms, self.is_delayed()) {
            (_, true) => 0.0,
            (0, false) => 1.0,
            (total, false) => self.elapsed_ms as f32 / total as f32,
        };
        self.from + (self.to - self.from) * self.easing.apply(progress)
    }
}
