//! vantage-ui: widget state for the browser screen.
//!
//! Every widget here is plain data plus tick-driven animations. Drawing is
//! left to the host; the host reads alpha, offsets and text from these
//! types each frame.

pub mod alert;
pub mod animation;
pub mod chrome;
pub mod progress_bar;
pub mod search_field;
pub mod toolbar;

pub use alert::Alert;
pub use animation::{Easing, Tween};
pub use chrome::{BarState, NavigationChrome};
pub use progress_bar::ProgressBar;
pub use search_field::{ClearButtonMode, SearchField, TextAlignment};
pub use toolbar::{ToolbarItem, browser_toolbar_items};
