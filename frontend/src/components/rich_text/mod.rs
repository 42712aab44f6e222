//! Rich-text editor for location content.
//!
//! A textarea with a small Markdown toolbar, undo/redo history and an
//! editor/preview tab switch. Every edit emits the rendered HTML through
//! `on_change`; the parent stores that HTML as the location's content.
//!
//! The editor keeps its own source text. When the parent hands back the HTML
//! it was just given, nothing changes; any other value (a different location
//! opened for editing, a form reset) replaces the source.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::RichTextProps;
pub use state::{RichTextEditor, Tab};

impl Component for RichTextEditor {
    type Message = Msg;
    type Properties = RichTextProps;

    fn create(ctx: &Context<Self>) -> Self {
        RichTextEditor::new(&ctx.props().value)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        let value = &ctx.props().value;
        if *value != self.last_emitted {
            *self = RichTextEditor::new(value);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
