#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod catalog;
mod common;

mod components;

mod home;
use home::PortfolioHome;

mod not_found;
use not_found::NotFound;

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    PortfolioHome {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        style { "{common::style::PORTFOLIO_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
