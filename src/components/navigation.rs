use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use gloo_events::EventListener;

use crate::common::theme::Theme;

/// Scroll-spy sections, in page order. The ids double as the anchor
/// targets for the nav links.
const SECTIONS: [(&str, &str); 3] = [
    ("home", "Home"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

/// Vertical distance from the viewport top at which a section counts as
/// being in view.
const PROBE_OFFSET: f64 = 100.0;

/// Scroll depth past which the bar switches to its compact style.
const COMPACT_THRESHOLD: f64 = 20.0;

/// First section whose bounding box straddles the probe line, given
/// `(id, top, bottom)` triples in page order.
fn section_at_probe<'a, I>(sections: I, probe: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, f64, f64)>,
{
    sections
        .into_iter()
        .find(|&(_, top, bottom)| top <= probe && bottom >= probe)
        .map(|(id, _, _)| id)
}

fn measure_sections() -> Vec<(&'static str, f64, f64)> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };

    SECTIONS
        .iter()
        .filter_map(|(id, _)| {
            let rect = document.get_element_by_id(id)?.get_bounding_client_rect();
            Some((*id, rect.top(), rect.bottom()))
        })
        .collect()
}

#[component]
pub fn NavBar() -> Element {
    let mut theme = use_context::<Signal<Theme>>();
    let mut active_section = use_signal(|| SECTIONS[0].0);
    let mut compact = use_signal(|| false);
    let mut menu_open = use_signal(|| false);

    // The listener is owned by this hook, so unmounting the bar detaches
    // the scroll handler.
    let scroll_listener: Rc<RefCell<Option<EventListener>>> =
        use_hook(|| Rc::new(RefCell::new(None)));

    use_effect({
        let scroll_listener = scroll_listener.clone();
        move || {
            let mut on_scroll = move || {
                let Some(window) = web_sys::window() else {
                    return;
                };

                let is_compact = window.scroll_y().unwrap_or(0.0) > COMPACT_THRESHOLD;
                if *compact.peek() != is_compact {
                    compact.set(is_compact);
                }

                // When no section straddles the probe, the previous one
                // stays active.
                if let Some(current) = section_at_probe(measure_sections(), PROBE_OFFSET) {
                    if *active_section.peek() != current {
                        active_section.set(current);
                    }
                }
            };

            on_scroll();

            if let Some(window) = web_sys::window() {
                let listener = EventListener::new(&window, "scroll", move |_| on_scroll());
                scroll_listener.borrow_mut().replace(listener);
            }
        }
    });

    let theme_glyph = if theme() == Theme::Dark { "☀️" } else { "🌙" };

    rsx! {
        nav { class: if compact() { "navbar compact" } else { "navbar" },
            div { class: "nav-container",
                a { class: "nav-logo", href: "#home", "Portfolio" }

                div { class: "nav-links",
                    for (id, label) in SECTIONS {
                        a {
                            class: if active_section() == id { "nav-link active" } else { "nav-link" },
                            href: "#{id}",
                            "{label}"
                        }
                    }
                }

                div { class: "nav-actions",
                    button {
                        class: "btn-icon",
                        aria_label: "Toggle theme",
                        onclick: move |_| theme.set(theme().flip()),
                        "{theme_glyph}"
                    }
                    button {
                        class: "btn-icon menu-toggle",
                        aria_label: "Toggle menu",
                        onclick: move |_| menu_open.set(!menu_open()),
                        if menu_open() { "✕" } else { "☰" }
                    }
                }
            }

            if menu_open() {
                div { class: "mobile-menu",
                    for (id, label) in SECTIONS {
                        a {
                            class: if active_section() == id { "nav-link active" } else { "nav-link" },
                            href: "#{id}",
                            onclick: move |_| menu_open.set(false),
                            "{label}"
                        }
                    }
                    button {
                        class: "btn-icon",
                        onclick: move |_| theme.set(theme().flip()),
                        if theme() == Theme::Dark { "☀️ Light mode" } else { "🌙 Dark mode" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_section_straddling_probe() {
        let sections = [
            ("home", -500.0, 80.0),
            ("projects", 80.0, 900.0),
            ("contact", 900.0, 1600.0),
        ];
        assert_eq!(section_at_probe(sections, PROBE_OFFSET), Some("projects"));
    }

    #[test]
    fn first_match_wins_when_sections_overlap() {
        let sections = [("home", 0.0, 200.0), ("projects", 50.0, 400.0)];
        assert_eq!(section_at_probe(sections, 100.0), Some("home"));
    }

    #[test]
    fn no_straddling_section_yields_none() {
        let sections = [("home", 200.0, 400.0), ("projects", 500.0, 900.0)];
        assert_eq!(section_at_probe(sections, 100.0), None);
    }

    #[test]
    fn boundary_contact_counts_as_in_view() {
        let sections = [("home", 100.0, 100.0)];
        assert_eq!(section_at_probe(sections, 100.0), Some("home"));
    }
}
