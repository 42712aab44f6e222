//! Application shell: loads the runtime configuration, follows the URL hash
//! and renders the matching page between the header and footer.

use common::config::{CONFIG_ENDPOINT, RuntimeConfig};
use common::route::Route;
use gloo_net::http::Request;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::platform::spawn_local;
use yew::{html, Component, Context, Html};

use crate::api::ApiClient;
use crate::components::home::HomePage;
use crate::components::layout::{Footer, Header};
use crate::components::locations::LocationsPage;
use crate::components::not_found::NotFoundPage;
use crate::components::preview::PreviewPage;
use crate::components::projects::ProjectsPage;

pub enum Msg {
    ConfigLoaded(Result<RuntimeConfig, String>),
    RouteChanged,
}

enum ConfigState {
    Loading,
    Ready(ApiClient),
    Failed(String),
}

pub struct App {
    config: ConfigState,
    route: Route,
    hash_listener: Option<Closure<dyn Fn()>>,
}

fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|hash| Route::from_hash(&hash))
        .unwrap_or(Route::Home)
}

async fn fetch_config() -> Result<RuntimeConfig, String> {
    let response = Request::get(CONFIG_ENDPOINT)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP error! status: {}", response.status()));
    }
    response
        .json::<RuntimeConfig>()
        .await
        .map_err(|e| e.to_string())
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::ConfigLoaded(fetch_config().await));
        });

        let link = ctx.link().clone();
        let listener = Closure::<dyn Fn()>::new(move || link.send_message(Msg::RouteChanged));
        let attached = web_sys::window().is_some_and(|w| {
            w.add_event_listener_with_callback("hashchange", listener.as_ref().unchecked_ref())
                .is_ok()
        });
        if !attached {
            gloo_console::warn!("Could not listen for navigation changes");
        }

        Self {
            config: ConfigState::Loading,
            route: current_route(),
            hash_listener: attached.then_some(listener),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ConfigLoaded(Ok(config)) => {
                gloo_console::log!(format!("Signed in as {}", config.username));
                self.config = ConfigState::Ready(ApiClient::new(config));
                true
            }
            Msg::ConfigLoaded(Err(error)) => {
                gloo_console::error!(format!("Error loading configuration: {error}"));
                self.config = ConfigState::Failed(error);
                true
            }
            Msg::RouteChanged => {
                let route = current_route();
                if route == self.route {
                    return false;
                }
                self.route = route;
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let (username, page) = match &self.config {
            ConfigState::Loading => (
                None,
                html! { <p class="container py-4 text-muted">{ "Loading..." }</p> },
            ),
            ConfigState::Failed(error) => (
                None,
                html! {
                    <div class="container py-4">
                        <div class="alert alert-danger">
                            <h1 class="h5">{ "StoryPath is not configured" }</h1>
                            <p class="mb-0">{ format!("Could not load {CONFIG_ENDPOINT}: {error}") }</p>
                        </div>
                    </div>
                },
            ),
            ConfigState::Ready(api) => (Some(api.username().to_string()), self.page(api)),
        };

        html! {
            <div class="app-root d-flex flex-column min-vh-100">
                <Header route={self.route} {username} />
                <main class="flex-grow-1">{ page }</main>
                <Footer />
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let (Some(listener), Some(window)) = (self.hash_listener.take(), web_sys::window()) {
            window
                .remove_event_listener_with_callback("hashchange", listener.as_ref().unchecked_ref())
                .ok();
        }
    }
}

impl App {
    fn page(&self, api: &ApiClient) -> Html {
        let api = api.clone();
        match self.route {
            Route::Home => html! { <HomePage /> },
            Route::Projects => html! { <ProjectsPage {api} /> },
            Route::Locations { project_id } => html! { <LocationsPage {api} {project_id} /> },
            Route::Preview { project_id } => html! { <PreviewPage {api} {project_id} /> },
            Route::NotFound => html! { <NotFoundPage /> },
        }
    }
}
