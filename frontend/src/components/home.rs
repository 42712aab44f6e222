use common::route::Route;
use yew::prelude::*;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <section class="container py-5">
            <h1 class="display-6">{ "Welcome to StoryPath" }</h1>
            <p class="lead">
                { "Create location-based experiences: tours, treasure hunts and stories \
                   that unfold as participants move between places." }
            </p>
            <p>
                { "Start with a project, add its locations in the order participants should \
                   visit them, then try it out in the preview." }
            </p>
            <a class="btn btn-primary" href={Route::Projects.href()}>{ "Go to projects" }</a>
        </section>
    }
}
