use uuid::Uuid;
use yew::{classes, html, Callback, Component, Context, Html, Properties};

/// Full-screen sheet that slides down over the page; hosts the editor forms
/// and the QR viewer.
pub struct TopSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub open: bool,
    pub title: String,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("sheet-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_close = props.on_close.reform(|_| ());

        html! {
            <div
                class={classes!("top-sheet", props.open.then_some("show"))}
                id={self.id.clone()}
                aria-hidden={(!props.open).to_string()}
            >
                <div class="top-sheet-panel">
                    <div class="top-sheet-header">
                        <h5 class="top-sheet-title">{ props.title.clone() }</h5>
                        <button type="button" class="btn-close" aria-label="Close" onclick={on_close}>
                            { "✕" }
                        </button>
                    </div>
                    <div class="top-sheet-body">
                        {
                            if props.open {
                                props.children.clone()
                            } else {
                                html! {}
                            }
                        }
                    </div>
                </div>
            </div>
        }
    }
}
