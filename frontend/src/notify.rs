//! User-facing feedback: toasts plus console logging.

use std::fmt::Display;

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Shows a message at the bottom of the screen for three seconds.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    toast.set_text_content(Some(message));
    toast.set_class_name("toast-message");
    let html_toast: HtmlElement = toast.unchecked_into();

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3000).await;
            html_toast.remove();
        });
    }
}

/// Logs a failed operation and tells the user about it.
pub fn report_error(action: &str, error: impl Display) {
    gloo_console::error!(format!("Error {action}: {error}"));
    show_toast(&format!("Error {action}: {error}"));
}
