use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use gloo_timers::callback::Timeout;

use crate::components::toast::{push_notice, NoticeKind};

/// Fixed latency of the simulated submission.
const SUBMIT_LATENCY_MS: u32 = 1_500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitError {
    MissingFields,
    InvalidEmail,
}

/// Submission lifecycle. Only `Submitting` disables the form; `Succeeded`
/// and `Failed` are recoverable resting states from which the next submit
/// starts over. A real backend would add a network-failure arm that keeps
/// the entered values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
    Succeeded,
    Failed(SubmitError),
}

/// Reject before simulating a send: every field present, email shaped
/// like `localpart@domain.tld`.
fn validate(name: &str, email: &str, message: &str) -> Result<(), SubmitError> {
    if name.trim().is_empty() || email.trim().is_empty() || message.trim().is_empty() {
        return Err(SubmitError::MissingFields);
    }

    if !email_is_valid(email) {
        return Err(SubmitError::InvalidEmail);
    }

    Ok(())
}

fn email_is_valid(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    // At least one dot strictly inside the domain.
    domain
        .split_once('.')
        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

#[component]
pub fn Contact() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut state = use_signal(|| SubmitState::Idle);

    // Holding the timeout here means unmounting mid-submission cancels
    // the simulated send instead of firing into dead state.
    let pending: Rc<RefCell<Option<Timeout>>> = use_hook(|| Rc::new(RefCell::new(None)));

    let submitting = state() == SubmitState::Submitting;
    let status = match state() {
        SubmitState::Succeeded => "Message sent!",
        SubmitState::Failed(SubmitError::MissingFields) => "Please fill in all fields",
        SubmitState::Failed(SubmitError::InvalidEmail) => "Please enter a valid email address",
        SubmitState::Submitting | SubmitState::Idle => "",
    };

    let handle_submit = {
        let pending = pending.clone();
        move |_| {
            if *state.peek() == SubmitState::Submitting {
                return;
            }

            if let Err(err) = validate(&name.peek(), &email.peek(), &message.peek()) {
                state.set(SubmitState::Failed(err));
                match err {
                    SubmitError::MissingFields => {
                        push_notice(NoticeKind::Error, "Missing fields", "Please fill in all fields")
                    }
                    SubmitError::InvalidEmail => push_notice(
                        NoticeKind::Error,
                        "Invalid email",
                        "Please enter a valid email address",
                    ),
                }
                return;
            }

            state.set(SubmitState::Submitting);

            let task = Timeout::new(SUBMIT_LATENCY_MS, move || {
                state.set(SubmitState::Succeeded);
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
                push_notice(
                    NoticeKind::Success,
                    "Message sent!",
                    "Thank you for reaching out. I'll get back to you soon!",
                );
            });
            pending.borrow_mut().replace(task);
        }
    };

    rsx! {
        section { id: "contact", class: "contact-section",
            div { class: "container",
                div { class: "section-heading",
                    h2 { "Get in Touch" }
                    p { "Have a project in mind or just want to chat? Feel free to reach out!" }
                }

                div { class: "contact-grid",
                    form { class: "contact-form", onsubmit: handle_submit,
                        div { class: "form-group",
                            label { class: "form-label", r#for: "name", "Name" }
                            input {
                                id: "name",
                                class: "form-input",
                                placeholder: "Your name",
                                disabled: submitting,
                                value: "{name}",
                                oninput: move |evt| name.set(evt.value()),
                            }
                        }

                        div { class: "form-group",
                            label { class: "form-label", r#for: "email", "Email" }
                            input {
                                id: "email",
                                class: "form-input",
                                placeholder: "your.email@example.com",
                                disabled: submitting,
                                value: "{email}",
                                oninput: move |evt| email.set(evt.value()),
                            }
                        }

                        div { class: "form-group",
                            label { class: "form-label", r#for: "message", "Message" }
                            textarea {
                                id: "message",
                                class: "form-input",
                                rows: "5",
                                placeholder: "Tell me about your project...",
                                disabled: submitting,
                                value: "{message}",
                                oninput: move |evt| message.set(evt.value()),
                            }
                        }

                        button {
                            class: "btn btn-primary btn-submit",
                            r#type: "submit",
                            disabled: submitting,
                            if submitting { "Sending..." } else { "📨 Send Message" }
                        }

                        span { class: "status-message", "{status}" }
                    }

                    div { class: "contact-aside",
                        div { class: "contact-panel",
                            h3 { "Connect with me" }
                            a { class: "contact-line", href: "mailto:mdraza7586@gmail.com",
                                "✉️ mdraza7586@gmail.com"
                            }
                            p { class: "contact-line", "📞 7050751918" }
                        }

                        div { class: "contact-panel",
                            h3 { "Social Links" }
                            div { class: "social-row",
                                a {
                                    class: "btn btn-secondary",
                                    href: "https://github.com/md-raza-75",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "GitHub"
                                }
                                a {
                                    class: "btn btn-secondary",
                                    href: "https://www.linkedin.com/in/raza75/",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "LinkedIn"
                                }
                                a {
                                    class: "btn btn-secondary",
                                    href: "https://twitter.com/yourusername",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "Twitter"
                                }
                            }
                        }

                        div { class: "contact-panel",
                            h3 { "Download Resume" }
                            a {
                                class: "btn btn-secondary",
                                href: "https://mohammad-raza.tiiny.site",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "Download CV"
                            }
                        }
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
    fn missing_fields_never_reach_submission() {
        assert_eq!(validate("", "a@b.co", "hi"), Err(SubmitError::MissingFields));
        assert_eq!(validate("A", "", "hi"), Err(SubmitError::MissingFields));
        assert_eq!(validate("A", "a@b.co", ""), Err(SubmitError::MissingFields));
        assert_eq!(validate("  ", "a@b.co", "hi"), Err(SubmitError::MissingFields));
    }

    #[test]
    fn malformed_email_is_rejected() {
        assert_eq!(validate("A", "not-an-email", "hi"), Err(SubmitError::InvalidEmail));
        assert!(!email_is_valid("a b@c.de"));
        assert!(!email_is_valid("a@b"));
        assert!(!email_is_valid("@b.co"));
        assert!(!email_is_valid("a@"));
        assert!(!email_is_valid("a@b@c.co"));
        assert!(!email_is_valid("a@.co"));
        assert!(!email_is_valid("a@b."));
    }

    #[test]
    fn well_formed_submission_passes() {
        assert_eq!(validate("A", "a@b.co", "hi"), Ok(()));
        assert!(email_is_valid("a@b.co"));
        assert!(email_is_valid("first.last@mail.example.org"));
    }
}
