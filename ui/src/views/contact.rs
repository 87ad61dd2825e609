use dioxus::prelude::*;

use crate::components::use_notice;
use crate::content::contact::{
    CONTACT_EMAIL, EMAIL_PLACEHOLDER, MESSAGE_PLACEHOLDER, NAME_PLACEHOLDER, RESPONSE_PROMISE,
};
use crate::core::outbound::{self, CHAT_HANDLE};

#[component]
pub fn Contact() -> Element {
    let notice = use_notice();

    rsx! {
        section { class: "page page-contact",
            div { class: "page__header",
                h2 { class: "page__title", "Контакты" }
                p { class: "page__subtitle", "Свяжитесь с нами" }
            }

            // Fields are uncontrolled; the button only opens the chat.
            article { class: "card contact__form",
                h3 { class: "card__title", "Напишите нам" }
                p { class: "card__text", "{RESPONSE_PROMISE}" }

                label { class: "field",
                    span { class: "field__label", "Имя" }
                    input { class: "field__input", r#type: "text", placeholder: NAME_PLACEHOLDER }
                }
                label { class: "field",
                    span { class: "field__label", "Email" }
                    input { class: "field__input", r#type: "email", placeholder: EMAIL_PLACEHOLDER }
                }
                label { class: "field",
                    span { class: "field__label", "Сообщение" }
                    textarea { class: "field__input field__input--area", rows: "5", placeholder: MESSAGE_PLACEHOLDER }
                }

                button {
                    r#type: "button",
                    class: "button button--primary button--block",
                    onclick: move |_| notice.launch(outbound::contact_intent()),
                    "Написать в Telegram ✈"
                }
            }

            div { class: "card-grid card-grid--2",
                article { class: "card",
                    h3 { class: "card__title", "Email" }
                    p { class: "card__text", "{CONTACT_EMAIL}" }
                }
                article { class: "card",
                    h3 { class: "card__title", "Telegram" }
                    p { class: "card__text", "{CHAT_HANDLE}" }
                }
            }
        }
    }
}
