use dioxus::prelude::*;

use crate::catalog::{CategoryFilter, ProjectRecord, CATEGORY_FILTERS, SKILL_CATEGORIES};
use crate::common::open_external;

/// Skills grid, category filter row, project cards, and the detail modal
/// for whichever project is currently inspected.
#[component]
pub fn Projects() -> Element {
    let mut active_filter = use_signal(|| CategoryFilter::All);
    let selected = use_signal(|| Option::<&'static ProjectRecord>::None);

    let filtered = active_filter().apply();

    rsx! {
        section { id: "projects", class: "projects-section",
            div { class: "container",
                div { class: "section-heading",
                    h2 { "Skills & Technologies" }
                    p { "Technologies I work with to build amazing digital experiences" }
                }

                div { class: "skills-grid",
                    for category in SKILL_CATEGORIES.iter() {
                        div { class: "skill-card",
                            div { class: "card-icon", "{category.icon}" }
                            h3 { "{category.title}" }
                            div { class: "badge-row",
                                for skill in category.skills {
                                    span { class: "badge badge-secondary", "{skill}" }
                                }
                            }
                        }
                    }
                }

                div { class: "section-heading",
                    h2 { "My Projects" }
                    p { "Full-stack applications showcasing my expertise in modern web technologies" }
                }

                div { class: "filter-row",
                    for filter in CATEGORY_FILTERS {
                        button {
                            class: if active_filter() == filter { "btn btn-filter active" } else { "btn btn-filter" },
                            onclick: move |_| active_filter.set(filter),
                            {filter.label()}
                        }
                    }
                }

                div { class: "projects-grid",
                    for project in filtered {
                        ProjectCard { key: "{project.id}", project, selected }
                    }
                }
            }

            if let Some(project) = selected() {
                ProjectModal { project, selected }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ProjectCardProps {
    project: &'static ProjectRecord,
    selected: Signal<Option<&'static ProjectRecord>>,
}

#[component]
fn ProjectCard(props: ProjectCardProps) -> Element {
    let project = props.project;
    let mut selected = props.selected;

    rsx! {
        div {
            class: "project-card",
            onclick: move |_| selected.set(Some(project)),

            div { class: "project-card-top",
                span { class: "card-icon", "{project.icon}" }
                span { class: "badge badge-outline", {project.category.label()} }
            }

            h3 { class: "project-title", "{project.title}" }
            p { class: "project-desc", "{project.description}" }

            div { class: "badge-row",
                for tech in project.technologies {
                    span { class: "badge badge-secondary", "{tech}" }
                }
            }

            div { class: "project-stack",
                p {
                    span { class: "stack-label", "Frontend: " }
                    "{project.frontend}"
                }
                p {
                    span { class: "stack-label", "Backend: " }
                    "{project.backend}"
                }
            }

            div { class: "badge-row",
                for feature in project.features {
                    span { class: "badge badge-feature", "{feature}" }
                }
            }

            div { class: "project-links",
                for (label, glyph, url) in project.links.entries() {
                    button {
                        class: "btn btn-sm btn-secondary",
                        // A link click must not bubble into the card's
                        // own modal-opening handler.
                        onclick: move |evt| {
                            evt.stop_propagation();
                            open_external(url);
                        },
                        "{glyph} {label}"
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ProjectModalProps {
    project: &'static ProjectRecord,
    selected: Signal<Option<&'static ProjectRecord>>,
}

#[component]
fn ProjectModal(props: ProjectModalProps) -> Element {
    let project = props.project;
    let mut selected = props.selected;

    rsx! {
        div {
            class: "modal-overlay",
            // Clicking the overlay dismisses; clicks inside the content
            // stop before reaching it.
            onclick: move |_| selected.set(None),
            div {
                class: "modal-content",
                onclick: move |evt| evt.stop_propagation(),

                div { class: "modal-header",
                    h3 { class: "modal-title", "{project.title}" }
                    button {
                        class: "btn-close",
                        onclick: move |_| selected.set(None),
                        "✕"
                    }
                }

                p { class: "project-desc", "{project.description}" }

                div { class: "modal-detail",
                    h4 { "Frontend" }
                    p { "{project.frontend}" }
                    h4 { "Backend" }
                    p { "{project.backend}" }
                }

                div { class: "project-links",
                    for (label, glyph, url) in project.links.entries() {
                        button {
                            class: "btn btn-primary",
                            onclick: move |evt| {
                                evt.stop_propagation();
                                open_external(url);
                            },
                            "{glyph} {label}"
                        }
                    }
                }
            }
        }
    }
}
