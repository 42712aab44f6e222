use common::preview::{HOMESCREEN_VALUE, Homescreen, Preview, ScreenContent};
use common::route::Route;
use web_sys::HtmlSelectElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::PreviewPage;

pub fn view(page: &PreviewPage, ctx: &Context<PreviewPage>) -> Html {
    let link = ctx.link();
    let project_id = ctx.props().project_id;

    let body = if page.loading {
        html! { <p class="text-muted">{ "Loading preview..." }</p> }
    } else if let Some(error) = &page.load_error {
        html! {
            <div class="alert alert-danger">
                { format!("Could not load this project: {error}") }
                <button class="btn btn-link" onclick={link.callback(|_| Msg::Load)}>{ "Retry" }</button>
            </div>
        }
    } else if let Some(preview) = &page.preview {
        build_preview(preview, link)
    } else {
        html! {}
    };

    html! {
        <section class="container py-4">
            <nav class="mb-2">
                <a href={Route::Locations { project_id }.href()}>{ "← Locations" }</a>
            </nav>
            { body }
        </section>
    }
}

fn build_preview(preview: &Preview, link: &Scope<PreviewPage>) -> Html {
    let selected = preview.selected_value();
    let onchange = link.callback(|e: Event| {
        Msg::Select(e.target_unchecked_into::<HtmlSelectElement>().value())
    });

    html! {
        <div class="row g-4">
            <div class="col-md-4">
                <h1 class="h4">{ format!("Preview: {}", preview.project().title) }</h1>
                <label class="form-label" for="preview-location">{ "Change location" }</label>
                <select id="preview-location" class="form-select mb-3" {onchange}>
                    <option value={HOMESCREEN_VALUE} selected={selected == HOMESCREEN_VALUE}>
                        { "Homescreen" }
                    </option>
                    { for preview.locations().iter().map(|location| {
                        let value = location.id.to_string();
                        let is_selected = value == selected;
                        html! {
                            <option {value} selected={is_selected}>
                                { location.location_name.clone() }
                            </option>
                        }
                    }) }
                </select>
                <button class="btn btn-outline-secondary btn-sm" onclick={link.callback(|_| Msg::Restart)}>
                    { "Restart preview" }
                </button>
            </div>
            <div class="col-md-8">
                <div class="phone-frame">
                    <div class="phone-header">{ preview.project().title.clone() }</div>
                    <div class="phone-screen">{ build_screen(preview) }</div>
                    {
                        match preview.tally() {
                            Some(tally) => html! { <div class="phone-footer">{ tally.to_string() }</div> },
                            None => html! {},
                        }
                    }
                </div>
            </div>
        </div>
    }
}

fn build_screen(preview: &Preview) -> Html {
    match preview.content() {
        ScreenContent::Home(Homescreen::AllLocations(names)) => html! {
            <div>
                <h2 class="h6">{ "Locations" }</h2>
                <ul class="list-unstyled">
                    { for names.into_iter().map(|name| html! { <li>{ name.to_string() }</li> }) }
                </ul>
            </div>
        },
        ScreenContent::Home(Homescreen::Instructions { instructions, initial_clue }) => html! {
            <div>
                <h2 class="h6">{ "Instructions" }</h2>
                <p>{ instructions.to_string() }</p>
                {
                    if initial_clue.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <>
                                <h2 class="h6">{ "Initial clue" }</h2>
                                <p>{ initial_clue.to_string() }</p>
                            </>
                        }
                    }
                }
            </div>
        },
        ScreenContent::Location { name, content, clue } => html! {
            <div>
                <h2 class="h6">{ name.to_string() }</h2>
                {
                    match content {
                        Some(content) => html! {
                            <div class="location-content">
                                { Html::from_html_unchecked(AttrValue::from(content.to_string())) }
                            </div>
                        },
                        None => html! { <p class="text-muted">{ "No content available" }</p> },
                    }
                }
                {
                    match clue {
                        Some(clue) => html! {
                            <div class="location-clue">
                                <strong>{ "Clue: " }</strong>{ clue.to_string() }
                            </div>
                        },
                        None => html! {},
                    }
                }
            </div>
        },
    }
}
