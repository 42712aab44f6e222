//! Toolbar, tab bar and the active pane of the content editor.

use common::content::render_html;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{RichTextEditor, Tab};

pub fn view(editor: &RichTextEditor, ctx: &Context<RichTextEditor>) -> Html {
    let link = ctx.link();

    html! {
        <div class="rich-text-root">
            { build_toolbar(editor, link) }
            { build_tab_bar(editor, link) }
            {
                match editor.active_tab {
                    Tab::Editor => build_editor_tab(editor, link),
                    Tab::Preview => build_preview_tab(editor),
                }
            }
        </div>
    }
}

fn build_toolbar(editor: &RichTextEditor, link: &Scope<RichTextEditor>) -> Html {
    let style_button = |style: &'static str, label: &'static str| {
        html! {
            <button
                type="button"
                class="btn btn-sm btn-outline-secondary"
                title={label}
                disabled={editor.active_tab != Tab::Editor}
                onclick={link.callback(move |_| Msg::ApplyStyle(style))}
            >
                { label }
            </button>
        }
    };

    html! {
        <div class="btn-toolbar gap-1 mb-2" role="toolbar">
            <button type="button" class="btn btn-sm btn-outline-secondary" disabled={!editor.can_undo()}
                onclick={link.callback(|_| Msg::Undo)}>{ "Undo" }</button>
            <button type="button" class="btn btn-sm btn-outline-secondary" disabled={!editor.can_redo()}
                onclick={link.callback(|_| Msg::Redo)}>{ "Redo" }</button>
            { style_button("heading", "Heading") }
            { style_button("bold", "Bold") }
            { style_button("italic", "Italic") }
            { style_button("list", "List") }
            { style_button("link", "Link") }
        </div>
    }
}

fn build_tab_bar(editor: &RichTextEditor, link: &Scope<RichTextEditor>) -> Html {
    let tab_class = |tab: Tab| classes!("nav-link", (editor.active_tab == tab).then_some("active"));

    html! {
        <ul class="nav nav-tabs mb-2">
            <li class="nav-item">
                <button type="button" class={tab_class(Tab::Editor)}
                    onclick={link.callback(|_| Msg::SetTab(Tab::Editor))}>{ "Editor" }</button>
            </li>
            <li class="nav-item">
                <button type="button" class={tab_class(Tab::Preview)}
                    onclick={link.callback(|_| Msg::SetTab(Tab::Preview))}>{ "Preview" }</button>
            </li>
        </ul>
    }
}

fn build_editor_tab(editor: &RichTextEditor, link: &Scope<RichTextEditor>) -> Html {
    let oninput = link.callback(|e: InputEvent| {
        let textarea: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
        Msg::UpdateSource(textarea.value())
    });

    html! {
        <textarea
            ref={editor.textarea_ref.clone()}
            class="form-control rich-text-source"
            rows="8"
            value={editor.source.clone()}
            {oninput}
        />
    }
}

fn build_preview_tab(editor: &RichTextEditor) -> Html {
    let rendered = render_html(&editor.source);
    if rendered.is_empty() {
        return html! { <p class="text-muted">{ "Nothing to preview yet." }</p> };
    }
    html! {
        <div class="rich-text-preview border rounded p-2">
            { Html::from_html_unchecked(AttrValue::from(rendered)) }
        </div>
    }
}
