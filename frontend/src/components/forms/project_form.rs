use common::forms::{FormMode, ProjectForm, Submission, ValidationError};
use common::model::{HomescreenDisplay, ParticipantScoring, Project, ProjectDraft};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

pub enum Msg {
    SetTitle(String),
    SetDescription(String),
    SetInstructions(String),
    SetInitialClue(String),
    SetHomescreenDisplay(String),
    SetParticipantScoring(String),
    SetPublished(bool),
    Submit,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub mode: FormMode<Project>,
    pub on_submit: Callback<Submission<ProjectDraft>>,
    pub on_cancel: Callback<()>,
}

/// Add/edit form for a project.
pub struct ProjectFormComponent {
    form: ProjectForm,
    error: Option<ValidationError>,
}

impl Component for ProjectFormComponent {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            form: ProjectForm::new(&ctx.props().mode),
            error: None,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().mode != old_props.mode {
            self.form = ProjectForm::new(&ctx.props().mode);
            self.error = None;
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetTitle(value) => self.form.title = value,
            Msg::SetDescription(value) => self.form.description = value,
            Msg::SetInstructions(value) => self.form.instructions = value,
            Msg::SetInitialClue(value) => self.form.initial_clue = value,
            Msg::SetHomescreenDisplay(value) => {
                if let Some(display) = HomescreenDisplay::from_wire(&value) {
                    self.form.homescreen_display = display;
                }
            }
            Msg::SetParticipantScoring(value) => {
                if let Some(scoring) = ParticipantScoring::from_wire(&value) {
                    self.form.participant_scoring = scoring;
                }
            }
            Msg::SetPublished(value) => self.form.is_published = value,
            Msg::Submit => match self.form.submit() {
                Ok(submission) => {
                    self.error = None;
                    ctx.props().on_submit.emit(submission);
                }
                Err(error) => {
                    gloo_console::warn!(format!("Project form rejected: {error}"));
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
        let text_area = |f: fn(String) -> Msg| {
            link.callback(move |e: InputEvent| {
                f(e.target_unchecked_into::<HtmlTextAreaElement>().value())
            })
        };
        let select = |f: fn(String) -> Msg| {
            link.callback(move |e: Event| f(e.target_unchecked_into::<HtmlSelectElement>().value()))
        };
        let on_published = link.callback(|e: Event| {
            Msg::SetPublished(e.target_unchecked_into::<HtmlInputElement>().checked())
        });
        let on_cancel = ctx.props().on_cancel.reform(|_: MouseEvent| ());

        html! {
            <form class="project-form" {onsubmit}>
                {
                    if let Some(error) = &self.error {
                        html! { <div class="alert alert-danger" role="alert">{ error.to_string() }</div> }
                    } else {
                        html! {}
                    }
                }
                <div class="mb-3">
                    <label class="form-label" for="project-title">{ "Title" }</label>
                    <input id="project-title" class="form-control" type="text"
                        value={form.title.clone()} oninput={text_input(Msg::SetTitle)} />
                </div>
                <div class="mb-3">
                    <label class="form-label" for="project-description">{ "Description" }</label>
                    <textarea id="project-description" class="form-control" rows="3"
                        value={form.description.clone()} oninput={text_area(Msg::SetDescription)} />
                    <div class="form-text">{ "Shown to participants before they start." }</div>
                </div>
                <div class="mb-3">
                    <label class="form-label" for="project-instructions">{ "Instructions" }</label>
                    <textarea id="project-instructions" class="form-control" rows="3"
                        value={form.instructions.clone()} oninput={text_area(Msg::SetInstructions)} />
                    <div class="form-text">{ "How participants play the experience." }</div>
                </div>
                <div class="mb-3">
                    <label class="form-label" for="project-initial-clue">{ "Initial clue" }</label>
                    <textarea id="project-initial-clue" class="form-control" rows="2"
                        value={form.initial_clue.clone()} oninput={text_area(Msg::SetInitialClue)} />
                    <div class="form-text">{ "Points participants to their first location." }</div>
                </div>
                <div class="mb-3">
                    <label class="form-label" for="project-homescreen">{ "Homescreen display" }</label>
                    <select id="project-homescreen" class="form-select"
                        onchange={select(Msg::SetHomescreenDisplay)}>
                        { for HomescreenDisplay::ALL.iter().map(|option| html! {
                            <option value={option.as_str()} selected={*option == form.homescreen_display}>
                                { option.as_str() }
                            </option>
                        }) }
                    </select>
                </div>
                <div class="mb-3">
                    <label class="form-label" for="project-scoring">{ "Participant scoring" }</label>
                    <select id="project-scoring" class="form-select"
                        onchange={select(Msg::SetParticipantScoring)}>
                        { for ParticipantScoring::ALL.iter().map(|option| html! {
                            <option value={option.as_str()} selected={*option == form.participant_scoring}>
                                { option.as_str() }
                            </option>
                        }) }
                    </select>
                </div>
                <div class="form-check mb-3">
                    <input id="project-published" class="form-check-input" type="checkbox"
                        checked={form.is_published} onchange={on_published} />
                    <label class="form-check-label" for="project-published">{ "Published" }</label>
                </div>
                <div class="d-flex gap-2">
                    <button type="submit" class="btn btn-primary">
                        { if form.is_editing() { "Save changes" } else { "Add project" } }
                    </button>
                    <button type="button" class="btn btn-outline-secondary" onclick={on_cancel}>
                        { "Cancel" }
                    </button>
                </div>
            </form>
        }
    }
}
