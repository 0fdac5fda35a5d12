//! Modal alert with a single acknowledgement action.

/// A blocking, purely informational dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
    /// Label of the only button. Tapping it just dismisses the alert.
    pub action_label: String,
}

impl Alert {
    pub fn new(title: &str, message: &str, action_label: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            action_label: action_label.to_string(),
        }
    }
}
