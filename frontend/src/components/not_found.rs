use common::route::Route;
use yew::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <section class="container py-5 text-center">
            <h1 class="h3">{ "Page not found" }</h1>
            <a href={Route::Home.href()}>{ "Back to home" }</a>
        </section>
    }
}
