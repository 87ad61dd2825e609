use dioxus::prelude::*;

const FEATURES: &[(&str, &str, &str)] = &[
    ("⛏", "Выживание", "Классический режим с уникальными фичами"),
    ("👥", "Сообщество", "Дружное комьюнити и помощь новичкам"),
    ("⚡", "Привилегии", "Уникальные возможности для игроков"),
];

#[component]
pub fn About() -> Element {
    rsx! {
        section { class: "page page-about",
            h2 { class: "page__title", "О сервере VoidGrief" }
            div { class: "page-about__body",
                p {
                    "VoidGrief — это Minecraft сервер, созданный для настоящих игроков. "
                    "Здесь ты найдешь друзей и приключения."
                }
                p {
                    "Уникальные режимы игры, дружное сообщество и постоянные обновления. "
                    "Присоединяйся к нам прямо сейчас!"
                }
            }
            div { class: "card-grid card-grid--3",
                for (icon, title, text) in FEATURES.iter() {
                    article { key: "{title}", class: "card",
                        span { class: "card__icon", aria_hidden: "true", "{icon}" }
                        h3 { class: "card__title", "{title}" }
                        p { class: "card__text", "{text}" }
                    }
                }
            }
        }
    }
}
