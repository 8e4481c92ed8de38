use dioxus::prelude::*;

use crate::common::{self, theme};
use crate::components::{
    contact::Contact, cursor::CustomCursor, hero::Hero, navigation::NavBar, projects::Projects,
    toast::NoticeStack,
};

#[component]
pub fn PortfolioHome() -> Element {
    // Theme is resolved once at mount and shared with the navbar through
    // context; the effect below reconciles the document flag and the
    // persisted value whenever it changes.
    let theme = use_context_provider(|| Signal::new(theme::initial_theme()));

    use_effect(move || {
        theme::apply(theme());
    });

    let year = common::current_year();

    rsx! {
        div { class: "page",
            CustomCursor {}
            NavBar {}
            NoticeStack {}

            main {
                Hero {}
                Projects {}
                Contact {}
            }

            footer { class: "site-footer",
                p { "© {year} Mohammad Raza. All rights reserved." }
            }
        }
    }
}
