//! Platform-agnostic screen events.
//!
//! Every host maps its native callbacks (button taps, search bar
//! delegate calls, scroll view delegate calls) to these enums. The browser
//! screen never sees raw platform input.

/// A user or scroll-surface event delivered to the browser screen.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenEvent {
    /// The screen's views are loaded and it may start its first load.
    ScreenReady,
    /// The screen became visible inside its navigation container.
    ScreenAppeared,
    /// The user tapped into the search field.
    SearchEditingBegan,
    /// The user pressed the search key with the field's current text.
    SearchSubmitted(String),
    /// A toolbar button was tapped.
    ToolbarTap(ToolbarAction),
    /// The content view started a drag at this vertical offset.
    ScrollDragBegan { offset_y: f64 },
    /// The content view started decelerating at this vertical offset.
    ScrollDecelerationBegan { offset_y: f64 },
    /// The user dismissed the presented alert.
    AlertAcknowledged,
}

/// Actions exposed by the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolbarAction {
    Back,
    Forward,
    Reload,
    Stop,
}

impl ToolbarAction {
    /// Every toolbar action, in display order.
    pub const ALL: [ToolbarAction; 4] = [
        ToolbarAction::Back,
        ToolbarAction::Forward,
        ToolbarAction::Reload,
        ToolbarAction::Stop,
    ];

    /// Icon name used by the host to render the button.
    pub fn icon_name(self) -> &'static str {
        match self {
            ToolbarAction::Back => "chevron.backward",
            ToolbarAction::Forward => "chevron.forward",
            ToolbarAction::Reload => "refresh",
            ToolbarAction::Stop => "stop",
        }
    }
}
