use dioxus::prelude::*;

use crate::components::use_notice;
use crate::content::{Tier, PERKS, TIERS};
use crate::core::format::{format_discount, format_price};
use crate::core::outbound;

#[component]
pub fn Donate() -> Element {
    rsx! {
        section { class: "page page-donate",
            div { class: "page__header",
                h2 { class: "page__title", "Донат привилегии" }
                p { class: "page__subtitle", "Поддержите проект и получите эксклюзивные возможности" }
            }

            div { class: "card-grid card-grid--4",
                for tier in TIERS.iter() {
                    TierCard { key: "{tier.name}", tier: *tier }
                }
            }

            article { class: "card donate__perks",
                h3 { class: "card__title", "Что дают привилегии?" }
                ul { class: "donate__perk-list",
                    for perk in PERKS.iter() {
                        li { class: "donate__perk", "{perk}" }
                    }
                }
            }
        }
    }
}

#[component]
fn TierCard(tier: Tier) -> Element {
    let notice = use_notice();
    let price = format_price(tier.price);

    rsx! {
        article {
            class: if tier.featured { "card tier tier--featured" } else { "card tier" },
            if tier.featured {
                span { class: "tier__ribbon", "ХИТ" }
            }
            header { class: "tier__header tier--{tier.color}",
                h3 { class: "tier__name", "{tier.name}" }
            }
            div { class: "tier__body",
                if let Some(original) = tier.original_price {
                    div { class: "tier__discount",
                        s { class: "tier__old-price", "{format_price(original)}" }
                        span { class: "badge badge--danger", "СКИДКА" }
                        if let Some(percent) = tier.discount_percent() {
                            span { class: "tier__percent", "{format_discount(percent)}" }
                        }
                    }
                }
                div { class: "tier__price", "{price}" }
                button {
                    r#type: "button",
                    class: "button button--primary button--block",
                    onclick: move |_| notice.launch(outbound::purchase_intent(&tier)),
                    "Купить 🛒"
                }
            }
        }
    }
}
