use dioxus::prelude::*;

use crate::content::FAQS;

#[component]
pub fn Faq() -> Element {
    rsx! {
        section { class: "page page-faq",
            div { class: "page__header",
                h2 { class: "page__title", "Часто задаваемые вопросы" }
                p { class: "page__subtitle", "Ответы на популярные вопросы" }
            }
            div { class: "faq__list",
                for (index, entry) in FAQS.iter().enumerate() {
                    details { key: "{index}", class: "faq__item",
                        summary { class: "faq__question", "{entry.question}" }
                        p { class: "faq__answer", "{entry.answer}" }
                    }
                }
            }
        }
    }
}
