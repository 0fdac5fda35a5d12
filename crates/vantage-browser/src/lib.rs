//! Browser screen: the controller between a rendering engine and the
//! screen's widgets.
//!
//! The crate ties together URL normalization, the scroll-direction
//! heuristic, failure classification and the widget state from
//! `vantage-ui` into [`BrowserScreen`], the component a host application
//! drives from its UI thread. The rendering engine is a collaborator
//! behind the [`RenderingEngine`] trait; [`HeadlessEngine`] serves pages
//! from memory for demos and tests.

pub mod config;
pub mod delegate;
pub mod engine;
pub mod failure;
pub mod headless;
pub mod nav;
pub mod request;
pub mod screen;
pub mod scroll;

#[cfg(test)]
pub(crate) mod test_utils;

// -----------------------------------------------------------------------
// Public re-exports
// -----------------------------------------------------------------------

pub use config::{BrowserConfig, BrowserStrings, DEFAULT_STARTING_URL};
pub use delegate::{NavigationDelegate, ScrollDelegate, SearchBarDelegate};
pub use engine::{EngineEvent, ObservedProperty, ObserverId, RenderingEngine};
pub use failure::{CANCELLED_CODE, ErrorDisposition, NavigationError};
pub use headless::HeadlessEngine;
pub use nav::{History, HistoryEntry};
pub use request::{NavigationRequest, normalize};
pub use screen::BrowserScreen;
pub use scroll::{ScrollDirection, ScrollTracker};

/// Build a browser screen over the headless engine with the default
/// configuration, ready to be placed in a navigation container.
pub fn new_browser_screen() -> BrowserScreen<HeadlessEngine> {
    BrowserScreen::new(BrowserConfig::default(), HeadlessEngine::with_demo_sites())
}
