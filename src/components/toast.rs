use dioxus::prelude::*;
use gloo_timers::callback::Timeout;

/// How long a notice stays up before dismissing itself.
const NOTICE_TTL_MS: u32 = 4_000;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "notice notice-success",
            NoticeKind::Error => "notice notice-error",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub kind: NoticeKind,
    pub title: &'static str,
    pub body: &'static str,
}

pub static NOTICES: GlobalSignal<Vec<Notice>> = Signal::global(Vec::new);

/// Push a notice and schedule its auto-dismissal. The stack is
/// process-global, so the forgotten timeout cannot outlive its target.
pub fn push_notice(kind: NoticeKind, title: &'static str, body: &'static str) {
    let id = next_id(&NOTICES.peek());

    NOTICES.with_mut(|notices| notices.push(Notice { id, kind, title, body }));

    Timeout::new(NOTICE_TTL_MS, move || dismiss_notice(id)).forget();
}

pub fn dismiss_notice(id: u32) {
    NOTICES.with_mut(|notices| notices.retain(|notice| notice.id != id));
}

fn next_id(notices: &[Notice]) -> u32 {
    notices.iter().map(|notice| notice.id + 1).max().unwrap_or(0)
}

#[component]
pub fn NoticeStack() -> Element {
    let notices = NOTICES.read().to_vec();

    rsx! {
        div { class: "notice-stack",
            for notice in notices {
                div {
                    key: "{notice.id}",
                    class: notice.kind.class(),
                    div { class: "notice-text",
                        p { class: "notice-title", "{notice.title}" }
                        p { class: "notice-body", "{notice.body}" }
                    }
                    button {
                        class: "btn-close",
                        onclick: move |_| dismiss_notice(notice.id),
                        "✕"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice(id: u32) -> Notice {
        Notice {
            id,
            kind: NoticeKind::Success,
            title: "t",
            body: "b",
        }
    }

    #[test]
    fn ids_grow_past_every_live_notice() {
        assert_eq!(next_id(&[]), 0);
        assert_eq!(next_id(&[notice(0)]), 1);
        assert_eq!(next_id(&[notice(0), notice(4)]), 5);
    }
}
