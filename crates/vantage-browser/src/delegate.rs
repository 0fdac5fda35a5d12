//! The three narrow callback surfaces the browser screen answers to.
//!
//! Each collaborator only sees the capability it needs: the engine drives
//! [`NavigationDelegate`], the search field drives [`SearchBarDelegate`],
//! and the content scroll view drives [`ScrollDelegate`].

use crate::failure::NavigationError;

/// Navigation lifecycle callbacks from the rendering engine.
pub trait NavigationDelegate {
    fn on_navigation_started(&mut self);
    fn on_navigation_finished(&mut self);
    /// A committed navigation failed.
    fn on_navigation_failed(&mut self, error: &NavigationError);
    /// A navigation failed before any content arrived.
    fn on_provisional_navigation_failed(&mut self, error: &NavigationError);
}

/// Callbacks from the search field.
pub trait SearchBarDelegate {
    /// The search key was pressed with `raw_text` in the field.
    fn submit_search(&mut self, raw_text: &str);
    fn on_search_editing_began(&mut self);
}

/// Callbacks from the content scroll view.
pub trait ScrollDelegate {
    fn on_scroll_drag_began(&mut self, offset_y: f64);
    fn on_scroll_deceleration_began(&mut self, offset_y: f64);
}
