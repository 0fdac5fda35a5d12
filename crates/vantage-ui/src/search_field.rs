//! SearchField widget state: the URL / search input in the navigation bar.

/// Horizontal text alignment of the search field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlignment {
    /// Idle/display state: the page title sits centered.
    Center,
    /// Editing state: text starts at the leading edge.
    Natural,
}

/// When the clear button is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearButtonMode {
    Never,
    WhileEditing,
    Always,
}

/// Text input shown in the navigation bar.
#[derive(Debug, Clone)]
pub struct SearchField {
    /// Current text content.
    pub text: String,
    /// Placeholder text shown when empty.
    pub placeholder: String,
    /// Current alignment.
    pub alignment: TextAlignment,
    /// Whether the field is being edited.
    pub editing: bool,
    pub clear_button_mode: ClearButtonMode,
    /// Whether typed text is auto-capitalized.
    pub autocapitalize: bool,
}

impl SearchField {
    /// Create an empty, centered search field.
    pub fn new(placeholder: &str) -> Self {
        Self {
            text: String::new(),
            placeholder: placeholder.to_string(),
            alignment: TextAlignment::Center,
            editing: false,
            clear_button_mode: ClearButtonMode::WhileEditing,
            autocapitalize: false,
        }
    }

    /// Text to render: the content, or the placeholder when empty.
    pub fn display_text(&self) -> &str {
        if self.text.is_empty() {
            &self.placeholder
        } else {
            &self.text
        }
    }

    /// Show a page title in the idle state.
    pub fn show_title(&mut self, title: &str) {
        self.text = title.to_string();
        self.alignment = TextAlignment::Center;
    }

    /// Enter editing so a long URL reads from its start.
    pub fn begin_editing(&mut self) {
        self.editing = true;
        self.alignment = TextAlignment::Natural;
    }

    /// Leave editing (search submitted or cancelled).
    pub fn end_editing(&mut self) {
        self.editing = false;
    }

    /// Whether the clear button is currently visible.
    pub fn clear_button_visible(&self) -> bool {
        if self.text.is_empty() {
            return false;
        }
        match self.clear_button_mode {
            ClearButtonMode::Never => false,
            ClearButtonMode::WhileEditing => self.editing,
            ClearButtonMode::Always => true,
        }
    }

    /// Tap on the clear button.
    pub fn clear(&mut self) {
        self.text.clear();
    }
}
