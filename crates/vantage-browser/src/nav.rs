//! Session history of committed pages.
//!
//! Entries live in one list with a cursor on the current page. Everything
//! before the cursor is reachable with back, everything after it with
//! forward. Committing a new page truncates the forward part.

/// A committed page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub url: String,
    /// Known once the page finished loading.
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
    /// Index of the current entry; meaningless while `entries` is empty.
    cursor: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit `url` after the current page, dropping any forward entries.
    pub fn navigate(&mut self, url: &str) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(HistoryEntry {
            url: url.to_string(),
            title: None,
        });
        self.cursor = self.entries.len() - 1;
    }

    /// Move the cursor one entry back and return the new current entry.
    pub fn go_back(&mut self) -> Option<&HistoryEntry> {
        if !self.can_go_back() {
            return None;
        }
        self.cursor -= 1;
        self.current()
    }

    /// Move the cursor one entry forward and return the new current entry.
    pub fn go_forward(&mut self) -> Option<&HistoryEntry> {
        if !self.can_go_forward() {
            return None;
        }
        self.cursor += 1;
        self.current()
    }

    pub fn current(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.cursor)
    }

    pub fn current_url(&self) -> Option<&str> {
        self.current().map(|entry| entry.url.as_str())
    }

    pub fn back_url(&self) -> Option<&str> {
        let index = self.cursor.checked_sub(1)?;
        self.entries.get(index).map(|entry| entry.url.as_str())
    }

    pub fn forward_url(&self) -> Option<&str> {
        self.entries
            .get(self.cursor + 1)
            .map(|entry| entry.url.as_str())
    }

    /// Attach a title to the current page.
    pub fn update_title(&mut self, title: &str) {
        if let Some(entry) = self.entries.get_mut(self.cursor) {
            entry.title = Some(title.to_string());
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.entries.is_empty() && self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// All committed pages, behind and ahead of the cursor included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
