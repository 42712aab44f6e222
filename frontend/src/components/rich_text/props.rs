use yew::prelude::*;

/// Properties for the [`RichTextEditor`](super::RichTextEditor).
#[derive(Properties, PartialEq, Clone)]
pub struct RichTextProps {
    /// Current HTML content. Markdown and HTML are both accepted as source.
    #[prop_or_default]
    pub value: String,

    /// Receives the rendered HTML after every edit.
    pub on_change: Callback<String>,
}
