//! ProgressBar widget state with fade in / fade out.

use crate::animation::{Easing, Tween};

/// The single fade a progress bar may be running.
#[derive(Debug, Clone)]
enum Fade {
    /// Fading toward full opacity.
    In(Tween),
    /// Waiting, then fading toward zero opacity. Hides and resets the
    /// bar once it completes.
    Out(Tween),
}

/// A loading-progress indicator.
///
/// The bar owns one animation slot. Starting a fade replaces whatever
/// fade was in flight, starting from the current opacity, so interleaved
/// show/hide requests always settle in the state of the last request.
#[derive(Debug, Clone)]
pub struct ProgressBar {
    value: f32,
    alpha: f32,
    hidden: bool,
    fade: Option<Fade>,
}

impl ProgressBar {
    /// Create a visible, empty progress bar at full opacity.
    pub fn new() -> Self {
        Self {
            value: 0.0,
            alpha: 1.0,
            hidden: false,
            fade: None,
        }
    }

    /// Progress value as supplied by the engine (0.0 to 1.0).
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Set the displayed progress. Not clamped.
    pub fn set_value(&mut self, value: f32) {
        self.value = value;
    }

    /// Current opacity.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Whether any fade is running.
    pub fn is_animating(&self) -> bool {
        self.fade.is_some()
    }

    /// Whether a fade-out (or its delay) is pending.
    pub fn is_hiding(&self) -> bool {
        matches!(self.fade, Some(Fade::Out(_)))
    }

    /// Reveal the bar. `is_hidden()` turns false immediately and the
    /// opacity moves to 1.0 over `duration_ms`. Cancels a pending hide.
    pub fn fade_in(&mut self, duration_ms: u32) {
        self.hidden = false;
        let tween = Tween::new(self.alpha, 1.0, duration_ms, Easing::EaseOut);
        self.fade = Some(Fade::In(tween));
        self.settle_if_finished();
    }

    /// After `delay_ms`, fade to zero opacity over `duration_ms`, then hide
    /// the bar and reset its value to zero.
    pub fn fade_out(&mut self, delay_ms: u32, duration_ms: u32) {
        let tween =
            Tween::new(self.alpha, 0.0, duration_ms, Easing::EaseIn).with_delay(delay_ms);
        self.fade = Some(Fade::Out(tween));
        self.settle_if_finished();
    }

    /// Advance the running fade by `dt_ms`. Returns true while still
    /// animating.
    pub fn tick(&mut self, dt_ms: u32) -> bool {
        match self.fade.as_mut() {
            Some(Fade::In(tween)) | Some(Fade::Out(tween)) => {
                self.alpha = tween.tick(dt_ms);
            },
            None => return false,
        }
        self.settle_if_finished();
        self.fade.is_some()
    }

    fn settle_if_finished(&mut self) {
        let finished = match &self.fade {
            Some(Fade::In(tween)) | Some(Fade::Out(tween)) => tween.is_finished(),
            None => false,
        };
        if !finished {
            return;
        }
        match self.fade.take() {
            Some(Fade::In(_)) => {
                self.alpha = 1.0;
            },
            Some(Fade::Out(_)) => {
                self.alpha = 0.0;
                self.hidden = true;
                self.value = 0.0;
            },
            None => {},
        }
    }
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self::new()
    }
}
