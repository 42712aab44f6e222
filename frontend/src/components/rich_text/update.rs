//! Message handling for the content editor.
//!
//! Text edits go through the undo history and are re-emitted as HTML.
//! Toolbar styles wrap the current textarea selection in Markdown and put the
//! cursor back around the wrapped text.

use common::content::{byte_to_utf16_idx, render_html, utf16_to_byte_idx, wrap_selection};
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use super::messages::Msg;
use super::state::RichTextEditor;

pub fn update(editor: &mut RichTextEditor, ctx: &Context<RichTextEditor>, msg: Msg) -> bool {
    match msg {
        Msg::SetTab(tab) => {
            editor.active_tab = tab;
            true
        }
        Msg::UpdateSource(source) => {
            if editor.source == source {
                return false;
            }
            editor.history.push(source.clone());
            editor.source = source;
            emit(editor, ctx);
            true
        }
        Msg::Undo => {
            if let Some(previous) = editor.history.undo() {
                editor.source = previous.to_string();
                emit(editor, ctx);
            }
            true
        }
        Msg::Redo => {
            if let Some(next) = editor.history.redo() {
                editor.source = next.to_string();
                emit(editor, ctx);
            }
            true
        }
        Msg::ApplyStyle(style) => {
            let Some(textarea) = editor.textarea_ref.cast::<HtmlTextAreaElement>() else {
                return false;
            };
            let start_utf16 = textarea.selection_start().ok().flatten().unwrap_or(0) as usize;
            let end_utf16 = textarea.selection_end().ok().flatten().unwrap_or(0) as usize;
            let start = utf16_to_byte_idx(&editor.source, start_utf16);
            let end = utf16_to_byte_idx(&editor.source, end_utf16).max(start);

            let styled = wrap_selection(style, &editor.source[start..end]);
            let source = format!(
                "{}{}{}",
                &editor.source[..start],
                styled,
                &editor.source[end..]
            );
            textarea.set_value(&source);

            let cursor = byte_to_utf16_idx(&source, start + styled.len());
            textarea.set_selection_range(cursor, cursor).ok();
            textarea.focus().ok();

            ctx.link().send_message(Msg::UpdateSource(source));
            false
        }
    }
}

fn emit(editor: &mut RichTextEditor, ctx: &Context<RichTextEditor>) {
    let html = render_html(&editor.source);
    editor.last_emitted = html.clone();
    ctx.props().on_change.emit(html);
}
