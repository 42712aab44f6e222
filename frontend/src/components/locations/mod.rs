//! Location editor for one project.
//!
//! Lists the project's locations in rank order and lets the author add, edit,
//! delete and reorder them. Deletes and moves are applied locally first. If
//! the server refuses the first request the snapshot comes back; if it took
//! part of the change the list is reloaded. One change is persisted at a time.

use yew::prelude::*;

mod messages;
mod props;
mod qr;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::LocationsProps;
pub use state::LocationsPage;

impl Component for LocationsPage {
    type Message = Msg;
    type Properties = LocationsProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        LocationsPage::default()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.project_id != old_props.project_id || props.api != old_props.api {
            let mut gate = std::mem::take(&mut self.gate);
            gate.abandon();
            *self = LocationsPage {
                seq: std::mem::take(&mut self.seq),
                gate,
                ..LocationsPage::default()
            };
            ctx.link().send_message(Msg::Load);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.seq.close();
    }
}
