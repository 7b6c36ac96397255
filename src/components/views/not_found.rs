use crate::components::{Icon, Route};
use dioxus::prelude::*;

#[component]
pub fn MissingPanel(message: String) -> Element {
    rsx! {
        div { class: "missing",
            Icon { name: "album".to_string(), class: "icon icon-xl".to_string() }
            p { "{message}" }
            Link { class: "back-link", to: Route::Library {}, "Back to library" }
        }
    }
}

/// Fallback for paths no route matches.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        MissingPanel { message: format!("Nothing lives at /{path}") }
    }
}
