//! Rich content for locations.
//!
//! Authors write Markdown; inline and block HTML pass through untouched, so
//! content saved by other editors keeps rendering as it was.

use pulldown_cmark::{Options, Parser, html};

/// Converts editor source to the HTML fragment stored in `location_content`.
pub fn render_html(source: &str) -> String {
    if source.trim().is_empty() {
        return String::new();
    }
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(source, options);
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

/// Markup inserted by each toolbar button around the selected text.
pub fn wrap_selection(style: &str, selected: &str) -> String {
    let text = if selected.is_empty() { "text" } else { selected };
    match style {
        "bold" => format!("**{text}**"),
        "italic" => format!("*{text}*"),
        "heading" => format!("\n## {text}\n"),
        "list" => format!("\n- {text}\n"),
        "link" => format!("[{text}](https://)"),
        _ => text.to_string(),
    }
}

/// Converts a UTF-8 byte index to the UTF-16 offset the browser uses for
/// `selectionStart`/`selectionEnd`.
pub fn byte_to_utf16_idx(s: &str, byte_idx: usize) -> u32 {
    s[..byte_idx.min(s.len())].encode_utf16().count() as u32
}

/// Converts a browser UTF-16 offset back to a UTF-8 byte index on a char
/// boundary. Offsets past the end clamp to `s.len()`.
pub fn utf16_to_byte_idx(s: &str, utf16_idx: usize) -> usize {
    let mut units = 0;
    for (byte_idx, ch) in s.char_indices() {
        if units >= utf16_idx {
            return byte_idx;
        }
        units += ch.len_utf16();
    }
    s.len()
}

/// Snapshots kept for undo, including the current one.
pub const HISTORY_LIMIT: usize = 100;

/// Linear undo/redo history of full source snapshots, capped at
/// [`HISTORY_LIMIT`] entries; the oldest snapshots are dropped first.
#[derive(Debug, Clone, PartialEq)]
pub struct EditHistory {
    entries: Vec<String>,
    index: usize,
}

impl EditHistory {
    pub fn new(initial: &str) -> Self {
        Self {
            entries: vec![initial.to_string()],
            index: 0,
        }
    }

    pub fn current(&self) -> &str {
        &self.entries[self.index]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records a new version, discarding anything that was undone.
    pub fn push(&mut self, source: String) {
        self.entries.truncate(self.index + 1);
        self.entries.push(source);
        if self.entries.len() > HISTORY_LIMIT {
            let excess = self.entries.len() - HISTORY_LIMIT;
            self.entries.drain(..excess);
        }
        self.index = self.entries.len() - 1;
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn undo(&mut self) -> Option<&str> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        Some(self.current())
    }

    pub fn redo(&mut self) -> Option<&str> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        Some(self.current())
    }
}
