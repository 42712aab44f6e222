use common::api::ApiError;
use common::forms::{FormMode, Submission};
use common::mutation::{reconcile, Reconcile, StepError, Steps};
use common::ordering;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::LocationsPage;
use crate::notify::{report_error, show_toast};

const BUSY_MESSAGE: &str = "Another change is still being saved.";

pub fn update(page: &mut LocationsPage, ctx: &Context<LocationsPage>, msg: Msg) -> bool {
    let api = ctx.props().api.clone();
    let project_id = ctx.props().project_id;
    let link = ctx.link().clone();

    match msg {
        Msg::Load => {
            let ticket = page.seq.reissue();
            page.loading = true;
            page.load_error = None;
            spawn_local(async move {
                let result = async {
                    let project = api.get_project(project_id).await?;
                    let locations = api.list_project_locations(project_id).await?;
                    Ok::<_, ApiError>((project, locations))
                }
                .await;
                link.send_message(Msg::Loaded(ticket, result));
            });
            true
        }
        Msg::Loaded(ticket, result) => {
            if !page.seq.accepts(ticket) {
                return false;
            }
            page.loading = false;
            match result {
                Ok((project, mut locations)) => {
                    ordering::sort_by_order(&mut locations);
                    if !ordering::is_contiguous(&locations) {
                        gloo_console::warn!(format!(
                            "Locations of project {project_id} do not have contiguous ranks"
                        ));
                    }
                    page.project = Some(project);
                    page.locations = locations;
                }
                Err(error) => {
                    report_error("fetching locations", &error);
                    page.load_error = Some(error.to_string());
                }
            }
            true
        }

        Msg::OpenCreate => {
            page.sheet = Some(FormMode::Create);
            true
        }
        Msg::OpenEdit(id) => {
            let ticket = page.seq.ticket();
            spawn_local(async move {
                let result = api.get_location(id).await;
                link.send_message(Msg::EditReady(ticket, result));
            });
            false
        }
        Msg::EditReady(ticket, result) => {
            if !page.seq.accepts(ticket) {
                return false;
            }
            match result {
                Ok(location) => page.sheet = Some(FormMode::Edit(location)),
                Err(error) => report_error("fetching location", &error),
            }
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
            let submission = match submission {
                Submission::Create(mut draft) => {
                    draft.location_order = ordering::next_order(&page.locations);
                    Submission::Create(draft)
                }
                update => update,
            };
            page.sheet = None;
            spawn_local(async move {
                let result = match &submission {
                    Submission::Create(draft) => api.create_location(draft).await,
                    Submission::Update { id, draft } => api.update_location(*id, draft).await,
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
                    if page.locations.iter().any(|l| l.id == saved.id) {
                        // Only the edited row changes; its rank is carried unchanged.
                        if let Err(error) = ordering::replace(&mut page.locations, saved) {
                            gloo_console::warn!(error.to_string());
                        }
                    } else {
                        ordering::insert(&mut page.locations, saved);
                    }
                    show_toast("Location saved.");
                }
                Err(error) => report_error("saving location", &error),
            }
            true
        }

        Msg::Delete(id) => {
            if page.gate.is_busy() {
                show_toast(BUSY_MESSAGE);
                return false;
            }
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message("Delete this location?").ok())
                .unwrap_or(false);
            if !confirmed {
                return false;
            }

            let snapshot = page.locations.clone();
            let removal = match ordering::remove(&mut page.locations, id) {
                Ok(removal) => removal,
                Err(error) => {
                    gloo_console::warn!(format!("Cannot delete: {error}"));
                    return false;
                }
            };
            let Some(mutation) = page.gate.begin() else {
                page.locations = snapshot;
                return false;
            };
            let ticket = page.seq.ticket();
            spawn_local(async move {
                let result = async {
                    let mut steps = Steps::new();
                    steps.commit(api.delete_location(removal.removed.id).await)?;
                    for shifted in &removal.shifted {
                        steps.commit(
                            api.update_location_order(shifted.id, shifted.location_order)
                                .await,
                        )?;
                    }
                    Ok::<_, StepError<ApiError>>(())
                }
                .await;
                link.send_message(Msg::Settled {
                    ticket,
                    mutation,
                    action: "deleting location",
                    done: Some("Location deleted."),
                    snapshot,
                    result,
                });
            });
            true
        }

        Msg::Move(id, delta) => {
            let Some(mutation) = page.gate.begin() else {
                show_toast(BUSY_MESSAGE);
                return false;
            };
            let snapshot = page.locations.clone();
            let (moved, other) = match ordering::swap(&mut page.locations, id, delta) {
                Ok(pair) => pair,
                Err(error) => {
                    page.gate.finish(mutation);
                    gloo_console::warn!(format!("Cannot move location: {error}"));
                    return false;
                }
            };
            let ticket = page.seq.ticket();
            spawn_local(async move {
                let result = async {
                    let mut steps = Steps::new();
                    steps.commit(
                        api.update_location_order(moved.id, moved.location_order)
                            .await,
                    )?;
                    steps.commit(
                        api.update_location_order(other.id, other.location_order)
                            .await,
                    )?;
                    Ok::<_, StepError<ApiError>>(())
                }
                .await;
                link.send_message(Msg::Settled {
                    ticket,
                    mutation,
                    action: "reordering locations",
                    done: None,
                    snapshot,
                    result,
                });
            });
            true
        }

        Msg::Settled {
            ticket,
            mutation,
            action,
            done,
            snapshot,
            result,
        } => {
            page.gate.finish(mutation);
            if !page.seq.accepts(ticket) {
                return true;
            }
            match (reconcile(&result), result) {
                (Reconcile::Keep, _) => {
                    if let Some(message) = done {
                        show_toast(message);
                    }
                }
                (Reconcile::Restore, Err(failure)) => {
                    report_error(action, &failure.error);
                    page.locations = snapshot;
                }
                (_, Err(failure)) => {
                    // part of the change reached the server; show what it holds now
                    report_error(action, &failure.error);
                    link.send_message(Msg::Load);
                }
                (_, Ok(())) => {}
            }
            true
        }

        Msg::ShowQr(location) => {
            page.qr_location = Some(location);
            true
        }
        Msg::CloseQr => {
            page.qr_location = None;
            true
        }
    }
}
