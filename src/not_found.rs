use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;

/// Fallback view for any path outside the route table.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    {
        let path = path.clone();
        use_effect(move || {
            tracing::error!("attempted to access non-existent route: {path}");
        });
    }

    let navigator = use_navigator();

    rsx! {
        div { class: "not-found",
            div { class: "not-found-card",
                div { class: "not-found-glyph", "⚠️" }
                h1 { "404" }
                h2 { "Page Not Found" }
                p {
                    "Sorry, we couldn't find the page you're looking for. "
                    code { "{path}" }
                    " doesn't exist or may have been moved."
                }

                div { class: "not-found-actions",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| {
                            if let Some(window) = web_sys::window() {
                                if let Ok(history) = window.history() {
                                    let _ = history.back();
                                }
                            }
                        },
                        "← Go Back"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            let _ = navigator.push(Route::PortfolioHome {});
                        },
                        "Go to Homepage"
                    }
                }
            }
        }
    }
}
