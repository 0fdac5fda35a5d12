//! The rendering engine collaborator.
//!
//! The engine fetches, parses and displays web content. The browser
//! screen treats it as a black box: it issues navigation commands and
//! drains the notifications the engine queued since the last drain.

use url::Url;

use crate::failure::NavigationError;

/// Engine properties a screen can observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObservedProperty {
    /// Estimated load progress (0.0 to 1.0).
    EstimatedProgress,
    /// Title of the current page.
    Title,
}

/// Handle for one observer registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(pub u64);

/// Notifications delivered by the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// Only queued while `EstimatedProgress` is observed.
    ProgressChanged(f64),
    /// Only queued while `Title` is observed.
    TitleChanged(Option<String>),
    /// A provisional navigation began.
    NavigationStarted,
    NavigationFinished,
    /// A committed navigation failed.
    NavigationFailed(NavigationError),
    /// A navigation failed before any content arrived.
    ProvisionalNavigationFailed(NavigationError),
}

/// Navigation commands and state queries offered by the engine.
pub trait RenderingEngine {
    /// Start loading `url`, cancelling any load in flight.
    fn load(&mut self, url: &Url);
    fn go_back(&mut self);
    fn go_forward(&mut self);
    fn reload(&mut self);
    fn stop_loading(&mut self);

    fn can_go_back(&self) -> bool;
    fn can_go_forward(&self) -> bool;
    fn is_loading(&self) -> bool;
    /// Absolute string of the committed URL, if any.
    fn current_url(&self) -> Option<String>;

    /// Start delivering change notifications for `property`.
    fn observe(&mut self, property: ObservedProperty) -> ObserverId;
    /// Stop the registration made by `observe`. Unknown ids are ignored.
    fn unobserve(&mut self, id: ObserverId);

    /// Take every notification queued since the previous call, in order.
    fn poll_events(&mut self) -> Vec<EngineEvent>;
}
