//! Non-blocking notice for outbound links that failed to open.

use dioxus::prelude::*;

use crate::core::outbound::{self, OutboundIntent};

/// Last outbound failure, if any, shared through context.
#[derive(Clone, Copy, PartialEq)]
pub struct NoticeSlot {
    message: Signal<Option<String>>,
}

impl NoticeSlot {
    /// Launch `intent`; on failure leave a message with the raw link so the
    /// visitor can still follow it by hand.
    pub fn launch(&self, intent: OutboundIntent) {
        let mut message = self.message;
        match outbound::launch(&intent) {
            Ok(()) => message.set(None),
            Err(err) => message.set(Some(format!(
                "Не удалось открыть ссылку ({err}). Откройте вручную: {}",
                intent.url()
            ))),
        }
    }

    pub fn dismiss(&self) {
        let mut message = self.message;
        message.set(None);
    }

    pub fn current(&self) -> Option<String> {
        self.message.read().clone()
    }
}

pub fn use_notice_provider() -> NoticeSlot {
    let message = use_signal(|| None);
    use_context_provider(|| NoticeSlot { message })
}

pub fn use_notice() -> NoticeSlot {
    use_context::<NoticeSlot>()
}

#[component]
pub fn NoticeBanner() -> Element {
    let notice = use_notice();

    rsx! {
        if let Some(text) = notice.current() {
            div { class: "notice", role: "status",
                span { class: "notice__text", "{text}" }
                button {
                    r#type: "button",
                    class: "notice__dismiss",
                    aria_label: "Закрыть",
                    onclick: move |_| notice.dismiss(),
                    "×"
                }
            }
        }
    }
}
