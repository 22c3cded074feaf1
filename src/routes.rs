use dioxus::prelude::*;
use crate::views::{ Home, NotFound };

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home,
    #[route("/:..segments")] NotFound {
        segments: Vec<String>,
    },
}
