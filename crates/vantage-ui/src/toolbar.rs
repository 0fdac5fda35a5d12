//! Toolbar items for the browser screen.

use vantage_types::input::ToolbarAction;

/// One slot in the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarItem {
    /// Stretchable gap that spreads the buttons evenly.
    FlexibleSpace,
    Button(ToolbarAction),
}

impl ToolbarItem {
    /// The action fired when this item is tapped, if it is a button.
    pub fn action(self) -> Option<ToolbarAction> {
        match self {
            ToolbarItem::Button(action) => Some(action),
            ToolbarItem::FlexibleSpace => None,
        }
    }
}

/// The browser toolbar: back, forward, reload and stop, each surrounded by
/// flexible spaces.
pub fn browser_toolbar_items() -> Vec<ToolbarItem> {
    let mut items = vec![ToolbarItem::FlexibleSpace];
    for action in ToolbarAction::ALL {
        items.push(ToolbarItem::Button(action));
        items.push(ToolbarItem::FlexibleSpace);
    }
    items
}
