use common::route::Route;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub route: Route,
    #[prop_or_default]
    pub username: Option<String>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let link_class = |active: bool| classes!("nav-link", active.then_some("active"));
    let on_projects = matches!(
        props.route,
        Route::Projects | Route::Locations { .. } | Route::Preview { .. }
    );

    html! {
        <header class="navbar navbar-expand navbar-dark bg-dark px-3">
            <a class="navbar-brand" href={Route::Home.href()}>{ "StoryPath" }</a>
            <ul class="navbar-nav me-auto">
                <li class="nav-item">
                    <a class={link_class(props.route == Route::Home)} href={Route::Home.href()}>{ "Home" }</a>
                </li>
                <li class="nav-item">
                    <a class={link_class(on_projects)} href={Route::Projects.href()}>{ "Projects" }</a>
                </li>
            </ul>
            {
                match &props.username {
                    Some(username) => html! { <span class="navbar-text small">{ username.clone() }</span> },
                    None => html! {},
                }
            }
        </header>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();
    html! {
        <footer class="text-center text-muted small py-3 border-top">
            { format!("© {year} StoryPath") }
        </footer>
    }
}
