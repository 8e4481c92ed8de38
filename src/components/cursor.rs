use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

/// Elements that light up the cursor ring while hovered.
const INTERACTIVE_SELECTOR: &str = "a, button, [role='button']";

fn over_interactive(event: &MouseEvent) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .is_some_and(|element| element.closest(INTERACTIVE_SELECTOR).ok().flatten().is_some())
}

/// Two-layer custom cursor: a primary ring that tracks the pointer
/// directly and a trailing dot that eases after it. Hover detection is
/// delegated to the window so elements re-rendered after mount (filtered
/// project cards, modal buttons) still count.
#[component]
pub fn CustomCursor() -> Element {
    let mut position = use_signal(|| (0.0_f64, 0.0_f64));
    let mut hovering = use_signal(|| false);

    let listeners: Rc<RefCell<Vec<EventListener>>> = use_hook(|| Rc::new(RefCell::new(Vec::new())));

    use_effect({
        let listeners = listeners.clone();
        move || {
            let Some(window) = web_sys::window() else {
                return;
            };

            let on_move = EventListener::new(&window, "mousemove", move |event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    position.set((event.client_x() as f64, event.client_y() as f64));
                }
            });

            let on_over = EventListener::new(&window, "mouseover", move |event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    if over_interactive(event) && !*hovering.peek() {
                        hovering.set(true);
                    }
                }
            });

            let on_out = EventListener::new(&window, "mouseout", move |event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    if over_interactive(event) && *hovering.peek() {
                        hovering.set(false);
                    }
                }
            });

            // Dropped with the hook state on unmount, detaching all three.
            *listeners.borrow_mut() = vec![on_move, on_over, on_out];
        }
    });

    let (x, y) = position();

    rsx! {
        div {
            class: "cursor-layer cursor-ring-layer",
            style: "transform: translate({x}px, {y}px);",
            div { class: if hovering() { "cursor-ring hovering" } else { "cursor-ring" } }
        }
        div {
            class: "cursor-layer cursor-trail-layer",
            style: "transform: translate({x}px, {y}px);",
            div { class: "cursor-dot" }
        }
    }
}
