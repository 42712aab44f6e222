use common::forms::{FormMode, Submission};
use common::mutation::{reconcile, Reconcile};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::ProjectsPage;
use crate::notify::{report_error, show_toast};

const BUSY_MESSAGE: &str = "Another change is still being saved.";

pub fn update(page: &mut ProjectsPage, ctx: &Context<ProjectsPage>, msg: Msg) -> bool {
    let api = ctx.props().api.clone();
    let link = ctx.link().clone();

    match msg {
        Msg::Load => {
            let ticket = page.seq.reissue();
            page.loading = true;
            page.load_error = None;
            spawn_local(async move {
                let projects = api.list_projects().await;
                link.send_message(Msg::ProjectsLoaded(ticket, projects));
                let locations = api.list_locations().await;
                link.send_message(Msg::LocationsLoaded(ticket, locations));
            });
            true
        }
        Msg::ProjectsLoaded(ticket, result) => {
            if !page.seq.accepts(ticket) {
                return false;
            }
            page.loading = false;
            match result {
                Ok(projects) => {
                    gloo_console::log!(format!("Loaded {} projects", projects.len()));
                    page.projects = projects;
                }
                Err(error) => {
                    report_error("fetching projects", &error);
                    page.load_error = Some(error.to_string());
                }
            }
            true
        }
        Msg::LocationsLoaded(ticket, result) => {
            if !page.seq.accepts(ticket) {
                return false;
            }
            match result {
                Ok(locations) => {
                    page.location_counts.clear();
                    for location in locations {
                        *page.location_counts.entry(location.project_id).or_default() += 1;
                    }
                }
                Err(error) => gloo_console::warn!(format!("Could not count locations: {error}")),
            }
            true
        }

        Msg::OpenCreate => {
            page.sheet = Some(FormMode::Create);
            true
        }
        Msg::OpenEdit(project) => {
            page.sheet = Some(FormMode::Edit(project));
            true
        }
        Msg::CloseSheet => {
            page.sheet = None;
            true
        }

        Msg::Submit(submission) => {
            let Some(mutation) = page.gate.begin() else {
                show_toast(BUSY_MESSAGE);
                return false;
            };
            let ticket = page.seq.ticket();
            page.sheet = None;
            spawn_local(async move {
                let result = match &submission {
                    Submission::Create(draft) => api.create_project(draft).await,
                    Submission::Update { id, draft } => api.update_project(*id, draft).await,
                };
                link.send_message(Msg::Saved(ticket, mutation, result));
            });
            true
        }
        Msg::Saved(ticket, mutation, result) => {
            page.gate.finish(mutation);
            if !page.seq.accepts(ticket) {
                return true;
            }
            match result {
                Ok(saved) => {
                    match page.projects.iter_mut().find(|p| p.id == saved.id) {
                        Some(slot) => *slot = saved,
                        None => page.projects.push(saved),
                    }
                    show_toast("Project saved.");
                }
                Err(error) => report_error("saving project", &error),
            }
            true
        }

        Msg::Delete(id) => {
            if page.gate.is_busy() {
                show_toast(BUSY_MESSAGE);
                return false;
            }
            let confirmed = web_sys::window()
                .and_then(|w| {
                    w.confirm_with_message("Delete this project and all of its locations?")
                        .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return false;
            }
            let Some(mutation) = page.gate.begin() else {
                return false;
            };

            let ticket = page.seq.ticket();
            let snapshot = page.projects.clone();
            page.projects.retain(|p| p.id != id);
            spawn_local(async move {
                let result = api.delete_project(id).await;
                link.send_message(Msg::DeleteSettled {
                    ticket,
                    mutation,
                    id,
                    snapshot,
                    result,
                });
            });
            true
        }
        Msg::DeleteSettled {
            ticket,
            mutation,
            id,
            snapshot,
            result,
        } => {
            page.gate.finish(mutation);
            if !page.seq.accepts(ticket) {
                return true;
            }
            match (reconcile(&result), result) {
                (Reconcile::Keep, _) => {
                    page.location_counts.remove(&id);
                    show_toast("Project deleted.");
                }
                (Reconcile::Restore, Err(failure)) => {
                    report_error("deleting project", &failure.error);
                    page.projects = snapshot;
                }
                (_, Err(failure)) => {
                    report_error(
                        "deleting project (its locations were already removed)",
                        &failure.error,
                    );
                    link.send_message(Msg::Load);
                }
                (_, Ok(())) => {}
            }
            true
        }
    }
}
