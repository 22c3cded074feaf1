use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    log::warn!("No page at /{}", segments.join("/"));

    rsx! {
        div {
            class: "not-found",
            h1 { "404" }
            Link { to: Route::Home, "CoreProfile" }
        }
    }
}
