//! Participant preview: a simulated phone that walks through a project the
//! way a participant would, keeping score for this visit only.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::PreviewProps;
pub use state::PreviewPage;

impl Component for PreviewPage {
    type Message = Msg;
    type Properties = PreviewProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        PreviewPage::default()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.project_id != old_props.project_id || props.api != old_props.api {
            self.preview = None;
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
