//! Navigation chrome: the navigation bar (hosting the search field) and
//! the bottom toolbar, each of which can slide out of view.

use crate::animation::{Easing, Tween};
use crate::toolbar::ToolbarItem;

/// Visibility of one bar, with an optional slide animation.
///
/// `offset` is 0.0 when fully shown and 1.0 when fully slid away.
#[derive(Debug, Clone)]
pub struct BarState {
    hidden: bool,
    offset: f32,
    slide: Option<Tween>,
}

impl BarState {
    pub fn new(hidden: bool) -> Self {
        Self {
            hidden,
            offset: if hidden { 1.0 } else { 0.0 },
            slide: None,
        }
    }

    /// Logical visibility. Flips as soon as a change is requested, even
    /// while the slide is still running.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_animating(&self) -> bool {
        self.slide.is_some()
    }

    /// Show or hide the bar. With `animated`, the bar slides from its
    /// current offset over `duration_ms`; a slide in flight is replaced.
    pub fn set_hidden(&mut self, hidden: bool, animated: bool, duration_ms: u32) {
        self.hidden = hidden;
        let target = if hidden { 1.0 } else { 0.0 };
        if animated && duration_ms > 0 && self.offset != target {
            self.slide = Some(Tween::new(
                self.offset,
                target,
                duration_ms,
                Easing::EaseInOut,
            ));
        } else {
            self.slide = None;
            self.offset = target;
        }
    }

    /// Advance the slide. Returns true while still animating.
    pub fn tick(&mut self, dt_ms: u32) -> bool {
        let Some(slide) = self.slide.as_mut() else {
            return false;
        };
        self.offset = slide.tick(dt_ms);
        if slide.is_finished() {
            self.slide = None;
            return false;
        }
        true
    }
}

/// The bars owned by the container that hosts the browser screen.
#[derive(Debug, Clone)]
pub struct NavigationChrome {
    pub navigation_bar: BarState,
    pub toolbar: BarState,
    pub toolbar_items: Vec<ToolbarItem>,
    /// Whether the search field has been placed into the navigation bar.
    pub search_field_installed: bool,
    /// Whether the search field collapses while the page scrolls.
    pub hides_search_bar_when_scrolling: bool,
    /// Slide duration for animated bar changes.
    pub slide_ms: u32,
}

impl NavigationChrome {
    /// A container in its launch state: navigation bar shown, toolbar
    /// hidden and empty.
    pub fn new(slide_ms: u32) -> Self {
        Self {
            navigation_bar: BarState::new(false),
            toolbar: BarState::new(true),
            toolbar_items: Vec::new(),
            search_field_installed: false,
            hides_search_bar_when_scrolling: true,
            slide_ms,
        }
    }

    /// Hide or show both bars together.
    pub fn set_bars_hidden(&mut self, hidden: bool, animated: bool) {
        if self.navigation_bar.is_hidden() != hidden || self.toolbar.is_hidden() != hidden {
            log::debug!("chrome bars -> {}", if hidden { "hidden" } else { "shown" });
        }
        self.navigation_bar.set_hidden(hidden, animated, self.slide_ms);
        self.toolbar.set_hidden(hidden, animated, self.slide_ms);
    }

    /// Whether both bars are logically hidden.
    pub fn bars_hidden(&self) -> bool {
        self.navigation_bar.is_hidden() && self.toolbar.is_hidden()
    }

    /// Advance both bar slides. Returns true while either is animating.
    pub fn tick(&mut self, dt_ms: u32) -> bool {
        let nav = self.navigation_bar.tick(dt_ms);
        let tool = self.toolbar.tick(dt_ms);
        nav || tool
    }
}
