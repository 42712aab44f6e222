use common::forms::FormMode;
use common::model::Location;
use common::qr::QrPayload;
use common::route::Route;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::qr::location_svg;
use super::state::LocationsPage;
use crate::components::forms::location_form::LocationFormComponent;
use crate::tops_sheet::top_sheet::TopSheet;

pub fn view(page: &LocationsPage, ctx: &Context<LocationsPage>) -> Html {
    let link = ctx.link();
    let project_id = ctx.props().project_id;
    let title = page
        .project
        .as_ref()
        .map(|p| p.title.clone())
        .unwrap_or_else(|| "Locations".to_string());

    html! {
        <section class="container py-4">
            <nav class="mb-2">
                <a href={Route::Projects.href()}>{ "← Projects" }</a>
            </nav>
            <div class="d-flex justify-content-between align-items-center mb-3">
                <h1 class="h3 mb-0">{ title }</h1>
                <div class="btn-group">
                    <a class="btn btn-outline-primary" href={Route::Preview { project_id }.href()}>
                        { "Preview" }
                    </a>
                    <button class="btn btn-primary" disabled={page.project.is_none() || page.gate.is_busy()}
                        onclick={link.callback(|_| Msg::OpenCreate)}>
                        { "Add location" }
                    </button>
                </div>
            </div>
            { build_body(page, link) }
            { build_form_sheet(page, project_id, link) }
            { build_qr_sheet(page, link) }
        </section>
    }
}

fn build_body(page: &LocationsPage, link: &Scope<LocationsPage>) -> Html {
    if page.loading {
        return html! { <p class="text-muted">{ "Loading locations..." }</p> };
    }
    if let Some(error) = &page.load_error {
        return html! {
            <div class="alert alert-danger">
                { format!("Could not load this project: {error}") }
                <button class="btn btn-link" onclick={link.callback(|_| Msg::Load)}>{ "Retry" }</button>
            </div>
        };
    }
    if page.locations.is_empty() {
        return html! { <p class="text-muted">{ "This project has no locations yet." }</p> };
    }

    html! {
        <table class="table align-middle">
            <thead>
                <tr>
                    <th>{ "#" }</th>
                    <th>{ "Name" }</th>
                    <th>{ "Trigger" }</th>
                    <th>{ "Position" }</th>
                    <th>{ "Points" }</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                { for page.locations.iter().map(|location| build_row(page, location, link)) }
            </tbody>
        </table>
    }
}

fn build_row(page: &LocationsPage, location: &Location, link: &Scope<LocationsPage>) -> Html {
    let id = location.id;
    let for_qr = location.clone();
    let busy = page.gate.is_busy();

    html! {
        <tr key={id}>
            <td>{ location.location_order + 1 }</td>
            <td>{ location.location_name.clone() }</td>
            <td class="small">{ location.location_trigger.as_str() }</td>
            <td class="small font-monospace">{ location.location_position.clone() }</td>
            <td>{ location.score_points }</td>
            <td class="text-end">
                <div class="btn-group btn-group-sm">
                    <button class="btn btn-outline-secondary" title="Move up"
                        disabled={busy || page.is_first(location)}
                        onclick={link.callback(move |_| Msg::Move(id, -1))}>{ "↑" }</button>
                    <button class="btn btn-outline-secondary" title="Move down"
                        disabled={busy || page.is_last(location)}
                        onclick={link.callback(move |_| Msg::Move(id, 1))}>{ "↓" }</button>
                    <button class="btn btn-outline-secondary"
                        onclick={link.callback(move |_| Msg::ShowQr(for_qr.clone()))}>{ "QR" }</button>
                    <button class="btn btn-outline-secondary" disabled={busy}
                        onclick={link.callback(move |_| Msg::OpenEdit(id))}>{ "Edit" }</button>
                    <button class="btn btn-outline-danger" disabled={busy}
                        onclick={link.callback(move |_| Msg::Delete(id))}>{ "Delete" }</button>
                </div>
            </td>
        </tr>
    }
}

fn build_form_sheet(page: &LocationsPage, project_id: i64, link: &Scope<LocationsPage>) -> Html {
    let title = match &page.sheet {
        Some(FormMode::Edit(_)) => "Edit location",
        _ => "Add location",
    };
    let mode = page.sheet.clone().unwrap_or(FormMode::Create);

    html! {
        <TopSheet
            open={page.sheet.is_some()}
            title={title.to_string()}
            on_close={link.callback(|_| Msg::CloseSheet)}
        >
            <LocationFormComponent
                {project_id}
                {mode}
                on_submit={link.callback(Msg::Submit)}
                on_cancel={link.callback(|_| Msg::CloseSheet)}
            />
        </TopSheet>
    }
}

fn build_qr_sheet(page: &LocationsPage, link: &Scope<LocationsPage>) -> Html {
    let body = match &page.qr_location {
        Some(location) => match location_svg(location) {
            Ok(svg) => html! {
                <div class="text-center">
                    <div class="qr-code">{ Html::from_html_unchecked(AttrValue::from(svg)) }</div>
                    <p class="small text-muted font-monospace mt-2">
                        { QrPayload::for_location(location).to_string() }
                    </p>
                    {
                        if location.location_trigger.uses_qr() {
                            html! {}
                        } else {
                            html! {
                                <p class="small text-warning">
                                    { "This location is triggered by entry only; scanning is not required." }
                                </p>
                            }
                        }
                    }
                </div>
            },
            Err(error) => {
                gloo_console::error!(format!("Could not render QR code: {error}"));
                html! { <p class="text-danger">{ "Could not render the QR code." }</p> }
            }
        },
        None => html! {},
    };
    let title = page
        .qr_location
        .as_ref()
        .map(|l| format!("QR code: {}", l.location_name))
        .unwrap_or_default();

    html! {
        <TopSheet
            open={page.qr_location.is_some()}
            {title}
            on_close={link.callback(|_| Msg::CloseQr)}
        >
            { body }
        </TopSheet>
    }
}
