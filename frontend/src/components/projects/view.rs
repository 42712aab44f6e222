use common::forms::FormMode;
use common::model::Project;
use common::route::Route;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::ProjectsPage;
use crate::components::forms::project_form::ProjectFormComponent;
use crate::tops_sheet::top_sheet::TopSheet;

pub fn view(page: &ProjectsPage, ctx: &Context<ProjectsPage>) -> Html {
    let link = ctx.link();

    html! {
        <section class="container py-4">
            <div class="d-flex justify-content-between align-items-center mb-3">
                <h1 class="h3 mb-0">{ "Projects" }</h1>
                <button class="btn btn-primary" disabled={page.gate.is_busy()}
                    onclick={link.callback(|_| Msg::OpenCreate)}>
                    { "Add project" }
                </button>
            </div>
            { build_body(page, link) }
            { build_sheet(page, link) }
        </section>
    }
}

fn build_body(page: &ProjectsPage, link: &Scope<ProjectsPage>) -> Html {
    if page.loading {
        return html! { <p class="text-muted">{ "Loading projects..." }</p> };
    }
    if let Some(error) = &page.load_error {
        return html! {
            <div class="alert alert-danger">
                { format!("Could not load projects: {error}") }
                <button class="btn btn-link" onclick={link.callback(|_| Msg::Load)}>{ "Retry" }</button>
            </div>
        };
    }
    if page.projects.is_empty() {
        return html! { <p class="text-muted">{ "No projects yet. Add one to get started." }</p> };
    }

    html! {
        <ul class="list-group">
            { for page.projects.iter().map(|project| build_row(page, project, link)) }
        </ul>
    }
}

fn build_row(page: &ProjectsPage, project: &Project, link: &Scope<ProjectsPage>) -> Html {
    let id = project.id;
    let editable = project.clone();
    let count = page.location_count(id);
    let busy = page.gate.is_busy();

    html! {
        <li class="list-group-item d-flex justify-content-between align-items-start" key={id}>
            <div>
                <div class="fw-bold">
                    { project.title.clone() }
                    <span class={classes!("badge", "ms-2", if project.is_published { "bg-success" } else { "bg-secondary" })}>
                        { if project.is_published { "Published" } else { "Not published" } }
                    </span>
                </div>
                <div class="text-muted small">{ project.description.clone() }</div>
                <div class="small">{ format!("{count} location{}", if count == 1 { "" } else { "s" }) }</div>
            </div>
            <div class="btn-group">
                <a class="btn btn-sm btn-outline-primary" href={Route::Locations { project_id: id }.href()}>
                    { "Locations" }
                </a>
                <a class="btn btn-sm btn-outline-primary" href={Route::Preview { project_id: id }.href()}>
                    { "Preview" }
                </a>
                <button class="btn btn-sm btn-outline-secondary" disabled={busy}
                    onclick={link.callback(move |_| Msg::OpenEdit(editable.clone()))}>
                    { "Edit" }
                </button>
                <button class="btn btn-sm btn-outline-danger" disabled={busy}
                    onclick={link.callback(move |_| Msg::Delete(id))}>
                    { "Delete" }
                </button>
            </div>
        </li>
    }
}

fn build_sheet(page: &ProjectsPage, link: &Scope<ProjectsPage>) -> Html {
    let title = match &page.sheet {
        Some(FormMode::Edit(_)) => "Edit project",
        _ => "Add project",
    };
    let mode = page.sheet.clone().unwrap_or(FormMode::Create);

    html! {
        <TopSheet
            open={page.sheet.is_some()}
            title={title.to_string()}
            on_close={link.callback(|_| Msg::CloseSheet)}
        >
            <ProjectFormComponent
                {mode}
                on_submit={link.callback(Msg::Submit)}
                on_cancel={link.callback(|_| Msg::CloseSheet)}
            />
        </TopSheet>
    }
}
