//! Navigation requests: normalizing search-field input into a URL.

use url::Url;

/// Marks a string that already carries a scheme.
pub const SCHEME_SEPARATOR: &str = "://";

/// Scheme prefixed onto input that has none.
pub const DEFAULT_SCHEME_PREFIX: &str = "https://";

/// Normalize raw input: lower-case, trim whitespace, and prefix
/// `https://` when no `://` is present.
///
/// Idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(raw: &str) -> String {
    let text = raw.to_lowercase();
    let text = text.trim();
    if text.contains(SCHEME_SEPARATOR) {
        text.to_string()
    } else {
        format!("{DEFAULT_SCHEME_PREFIX}{text}")
    }
}

/// A normalized navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    /// The normalized text, before URL parsing.
    pub normalized: String,
    /// The parsed URL, or `None` when the normalized text is not a
    /// valid URL. Such requests are dropped without an error.
    pub url: Option<Url>,
}

impl NavigationRequest {
    /// Build a request from search-field text. Returns `None` for empty or
    /// whitespace-only input.
    pub fn from_input(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }
        let normalized = normalize(raw);
        let url = Url::parse(&normalized).ok();
        Some(Self { normalized, url })
    }

    /// Whether this request points at `current`, comparing both the raw
    /// normalized text and the parsed URL's canonical form.
    pub fn targets(&self, current: &str) -> bool {
        self.normalized == current || self.url.as_ref().is_some_and(|u| u.as_str() == current)
    }
}
