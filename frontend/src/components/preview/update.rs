use common::api::ApiError;
use common::preview::Preview;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::PreviewPage;
use crate::notify::report_error;

pub fn update(page: &mut PreviewPage, ctx: &Context<PreviewPage>, msg: Msg) -> bool {
    match msg {
        Msg::Load => {
            let api = ctx.props().api.clone();
            let project_id = ctx.props().project_id;
            let link = ctx.link().clone();
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
                Ok((project, locations)) => page.preview = Some(Preview::new(project, locations)),
                Err(error) => {
                    report_error("loading preview", &error);
                    page.load_error = Some(error.to_string());
                }
            }
            true
        }
        Msg::Select(value) => {
            let Some(preview) = page.preview.as_mut() else {
                return false;
            };
            if !preview.select(&value) {
                gloo_console::warn!(format!("Ignoring unknown preview selection {value:?}"));
                return false;
            }
            true
        }
        Msg::Restart => {
            if let Some(preview) = page.preview.take() {
                page.preview = Some(Preview::new(
                    preview.project().clone(),
                    preview.locations().to_vec(),
                ));
            }
            true
        }
    }
}
