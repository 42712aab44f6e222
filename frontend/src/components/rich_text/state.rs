use common::content::EditHistory;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Editor,
    Preview,
}

/// State of the content editor.
pub struct RichTextEditor {
    /// Text in the textarea (Markdown with inline HTML).
    pub source: String,

    /// Undo/redo snapshots of `source`, capped in depth.
    pub history: EditHistory,

    pub active_tab: Tab,

    pub textarea_ref: NodeRef,

    /// HTML last sent to the parent, used to tell our own echo apart from a
    /// genuinely new value.
    pub last_emitted: String,
}

impl RichTextEditor {
    pub fn new(value: &str) -> Self {
        Self {
            source: value.to_string(),
            history: EditHistory::new(value),
            active_tab: Tab::Editor,
            textarea_ref: NodeRef::default(),
            last_emitted: value.to_string(),
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}
