//! Navigation failures reported by the rendering engine.

use std::fmt;

/// Platform code for a load that was cancelled because it was superseded
/// or deliberately stopped.
pub const CANCELLED_CODE: i64 = -999;

/// Platform code for a host name that could not be resolved.
pub const CANNOT_FIND_HOST_CODE: i64 = -1003;

/// Platform code for a URL whose scheme the engine cannot load.
pub const UNSUPPORTED_URL_CODE: i64 = -1002;

/// An engine-reported navigation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationError {
    /// Platform error code.
    pub code: i64,
    /// Human-readable message, shown to the user verbatim.
    pub message: String,
}

impl NavigationError {
    pub fn new(code: i64, message: &str) -> Self {
        Self {
            code,
            message: message.to_string(),
        }
    }

    /// The benign "load cancelled" failure.
    pub fn cancelled() -> Self {
        Self::new(CANCELLED_CODE, "cancelled")
    }

    pub fn is_cancellation(&self) -> bool {
        self.code == CANCELLED_CODE
    }
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for NavigationError {}

/// How a navigation failure reaches the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorDisposition {
    /// Never surfaced.
    Suppressed,
    /// Surfaced through a modal alert.
    UserVisible,
}

impl ErrorDisposition {
    pub fn classify(error: &NavigationError) -> Self {
        if error.is_cancellation() {
            ErrorDisposition::Suppressed
        } else {
            ErrorDisposition::UserVisible
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancellation_is_suppressed() {
        let e = NavigationError::cancelled();
        assert!(e.is_cancellation());
        assert_eq!(ErrorDisposition::classify(&e), ErrorDisposition::Suppressed);
    }

    #[test]
    fn other_codes_are_user_visible() {
        for code in [CANNOT_FIND_HOST_CODE, UNSUPPORTED_URL_CODE, -1009, 0, 999] {
            let e = NavigationError::new(code, "boom");
            assert_eq!(ErrorDisposition::classify(&e), ErrorDisposition::UserVisible);
        }
    }

    #[test]
    fn display_includes_code() {
        let e = NavigationError::new(-1009, "The Internet connection appears to be offline.");
        assert_eq!(
            e.to_string(),
            "The Internet connection appears to be offline. (code -1009)"
        );
    }
}
