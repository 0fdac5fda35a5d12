//! Foundation types for Vantage.
//!
//! This crate holds the pieces shared by every other Vantage crate: the
//! error type and the platform-agnostic events a host delivers to the
//! browser screen.

pub mod error;
pub mod input;

pub use error::{Result, VantageError};
pub use input::{ScreenEvent, ToolbarAction};
