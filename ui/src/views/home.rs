use dioxus::prelude::*;

use crate::core::section::{Section, SectionRouter};

#[component]
pub fn Home(mut router: Signal<SectionRouter>) -> Element {
    rsx! {
        section { class: "page page-home",
            div { class: "page-home__hero",
                h2 { class: "page-home__title", "Добро пожаловать в VoidGrief" }
                p { class: "page-home__tagline", "Майнкрафт сервер для настоящих игроков" }
                div { class: "page-home__cta",
                    button {
                        r#type: "button",
                        class: "button button--primary button--lg",
                        onclick: move |_| {
                            router.write().navigate(Section::Donate);
                        },
                        "Донат привилегии"
                    }
                    button {
                        r#type: "button",
                        class: "button button--ghost button--lg",
                        onclick: move |_| {
                            router.write().navigate(Section::About);
                        },
                        "Узнать больше"
                    }
                }
            }
        }
    }
}
