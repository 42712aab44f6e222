use common::forms::{FormMode, LocationForm, Submission, ValidationError};
use common::model::{Location, LocationDraft, LocationTrigger};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::rich_text::RichTextEditor;

pub enum Msg {
    SetName(String),
    SetTrigger(String),
    SetPosition(String),
    SetScorePoints(String),
    SetClue(String),
    SetContent(String),
    Submit,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub project_id: i64,
    pub mode: FormMode<Location>,
    pub on_submit: Callback<Submission<LocationDraft>>,
    pub on_cancel: Callback<()>,
}

/// Add/edit form for a location, including the rich content editor.
pub struct LocationFormComponent {
    form: LocationForm,
    error: Option<ValidationError>,
}

impl Component for LocationFormComponent {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        Self {
            form: LocationForm::new(props.project_id, &props.mode),
            error: None,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.mode != old_props.mode || props.project_id != old_props.project_id {
            self.form = LocationForm::new(props.project_id, &props.mode);
            self.error = None;
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetName(value) => self.form.location_name = value,
            Msg::SetTrigger(value) => {
                if let Some(trigger) = LocationTrigger::from_wire(&value) {
                    self.form.location_trigger = trigger;
                }
            }
            Msg::SetPosition(value) => self.form.location_position = value,
            Msg::SetScorePoints(value) => self.form.score_points = value,
            Msg::SetClue(value) => self.form.clue = value,
            Msg::SetContent(html) => self.form.location_content = html,
            Msg::Submit => match self.form.submit() {
                Ok(submission) => {
                    self.error = None;
                    ctx.props().on_submit.emit(submission);
                }
                Err(error) => {
                    gloo_console::warn!(format!("Location form rejected: {error}"));
                    self.error = Some(error);
                }
            },
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let form = &self.form;

        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });
        let text_input = |f: fn(String) -> Msg| {
            link.callback(move |e: InputEvent| f(e.target_unchecked_into::<HtmlInputElement>().value()))
        };
        let on_trigger = link.callback(|e: Event| {
            Msg::SetTrigger(e.target_unchecked_into::<HtmlSelectElement>().value())
        });
        let on_clue = link.callback(|e: InputEvent| {
            Msg::SetClue(e.target_unchecked_into::<HtmlTextAreaElement>().value())
        });
        let on_content = link.callback(Msg::SetContent);
        let on_cancel = ctx.props().on_cancel.reform(|_: MouseEvent| ());

        html! {
            <form class="location-form" {onsubmit}>
                {
                    if let Some(error) = &self.error {
                        html! { <div class="alert alert-danger" role="alert">{ error.to_string() }</div> }
                    } else {
                        html! {}
                    }
                }
                <div class="mb-3">
                    <label class="form-label" for="location-name">{ "Location name" }</label>
                    <input id="location-name" class="form-control" type="text"
                        value={form.location_name.clone()} oninput={text_input(Msg::SetName)} />
                </div>
                <div class="mb-3">
                    <label class="form-label" for="location-trigger">{ "Location trigger" }</label>
                    <select id="location-trigger" class="form-select" onchange={on_trigger}>
                        { for LocationTrigger::ALL.iter().map(|option| html! {
                            <option value={option.as_str()} selected={*option == form.location_trigger}>
                                { option.as_str() }
                            </option>
                        }) }
                    </select>
                </div>
                <div class="mb-3">
                    <label class="form-label" for="location-position">{ "Location position (lat, long)" }</label>
                    <input id="location-position" class="form-control" type="text"
                        value={form.location_position.clone()} oninput={text_input(Msg::SetPosition)} />
                    {
                        match form.position_hint() {
                            Some(hint) => html! { <div class="form-text text-warning">{ hint }</div> },
                            None => html! {},
                        }
                    }
                </div>
                <div class="mb-3">
                    <label class="form-label" for="location-points">{ "Points for reaching location" }</label>
                    <input id="location-points" class="form-control" type="number" min="0"
                        value={form.score_points.clone()} oninput={text_input(Msg::SetScorePoints)} />
                </div>
                <div class="mb-3">
                    <label class="form-label" for="location-clue">{ "Clue" }</label>
                    <textarea id="location-clue" class="form-control" rows="2"
                        value={form.clue.clone()} oninput={on_clue} />
                    <div class="form-text">{ "Hint toward the next location." }</div>
                </div>
                <div class="mb-3">
                    <label class="form-label">{ "Location content" }</label>
                    <RichTextEditor value={form.location_content.clone()} on_change={on_content} />
                </div>
                <div class="d-flex gap-2">
                    <button type="submit" class="btn btn-primary">
                        { if form.is_editing() { "Save changes" } else { "Add location" } }
                    </button>
                    <button type="button" class="btn btn-outline-secondary" onclick={on_cancel}>
                        { "Cancel" }
                    </button>
                </div>
            </form>
        }
    }
}
