use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

/// Tilt at the region edges, in degrees.
const MAX_TILT_DEG: f64 = 10.0;

/// Pointer offset from the region center as width/height fractions in
/// `[-0.5, 0.5]`, or `None` when the pointer is outside the region.
fn pointer_fractions(
    x: f64,
    y: f64,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
) -> Option<(f64, f64)> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    if x < left || x > left + width || y < top || y > top + height {
        return None;
    }

    Some((
        (x - left - width / 2.0) / width,
        (y - top - height / 2.0) / height,
    ))
}

fn tilt_transform(fractions: Option<(f64, f64)>) -> String {
    match fractions {
        Some((fx, fy)) => {
            let tilt_x = fy * MAX_TILT_DEG;
            let tilt_y = fx * -MAX_TILT_DEG;
            format!("perspective(1000px) rotateX({tilt_x}deg) rotateY({tilt_y}deg) scale(1.05)")
        }
        None => String::from("none"),
    }
}

#[component]
pub fn Hero() -> Element {
    let mut tilt = use_signal(|| String::from("none"));

    let listener: Rc<RefCell<Option<EventListener>>> = use_hook(|| Rc::new(RefCell::new(None)));

    use_effect({
        let listener = listener.clone();
        move || {
            let Some(window) = web_sys::window() else {
                return;
            };

            let on_move = EventListener::new(&window, "mousemove", move |event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };

                let rect = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.get_element_by_id("home"))
                    .map(|element| element.get_bounding_client_rect());
                let Some(rect) = rect else {
                    return;
                };

                let fractions = pointer_fractions(
                    event.client_x() as f64,
                    event.client_y() as f64,
                    rect.left(),
                    rect.top(),
                    rect.width(),
                    rect.height(),
                );

                let next = tilt_transform(fractions);
                if *tilt.peek() != next {
                    tilt.set(next);
                }
            });

            listener.borrow_mut().replace(on_move);
        }
    });

    rsx! {
        section { id: "home", class: "hero",
            div { class: "hero-glow hero-glow-primary" }
            div { class: "hero-glow hero-glow-accent" }

            div { class: "hero-inner",
                div { class: "hero-text",
                    p { class: "hero-kicker", "Hello, I'm" }
                    h1 { class: "hero-name", "Mohammad Raza" }
                    h2 { class: "hero-role", "Creative Developer and Java Full Stack Developer" }
                    p { class: "hero-blurb",
                        "I craft beautiful, interactive web experiences that blend cutting-edge design "
                        "with powerful functionality. Let's build something extraordinary together."
                    }
                    div { class: "hero-actions",
                        a { class: "btn btn-primary btn-lg", href: "#projects", "View Projects" }
                        a { class: "btn btn-secondary btn-lg", href: "#contact", "Get in Touch" }
                    }
                }

                div { class: "hero-portrait-frame",
                    div {
                        class: "hero-portrait",
                        style: "transform: {tilt};",
                        img {
                            src: "/assets/hero-portrait.jpg",
                            alt: "Portrait of Mohammad Raza",
                        }
                    }
                }
            }

            a { class: "hero-scroll-hint", href: "#projects", aria_label: "Scroll to projects", "↓" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_has_no_offset() {
        assert_eq!(
            pointer_fractions(150.0, 200.0, 100.0, 100.0, 100.0, 200.0),
            Some((0.0, 0.0))
        );
    }

    #[test]
    fn corners_reach_half_fractions() {
        assert_eq!(
            pointer_fractions(200.0, 300.0, 100.0, 100.0, 100.0, 200.0),
            Some((0.5, 0.5))
        );
        assert_eq!(
            pointer_fractions(100.0, 100.0, 100.0, 100.0, 100.0, 200.0),
            Some((-0.5, -0.5))
        );
    }

    #[test]
    fn outside_region_is_none() {
        assert_eq!(pointer_fractions(50.0, 50.0, 100.0, 100.0, 100.0, 200.0), None);
        assert_eq!(pointer_fractions(250.0, 150.0, 100.0, 100.0, 100.0, 200.0), None);
    }

    #[test]
    fn tilt_magnitude_at_extremes() {
        assert_eq!(
            tilt_transform(Some((0.5, -0.5))),
            "perspective(1000px) rotateX(-5deg) rotateY(-5deg) scale(1.05)"
        );
        assert_eq!(tilt_transform(None), "none");
    }
}
