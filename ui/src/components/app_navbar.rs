use dioxus::prelude::*;

use crate::core::section::{Section, SectionRouter};
use crate::core::theme::use_theme;

// Navbar stylesheet, inlined as well for native release builds without an asset folder.
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Brand, one button per section and the theme toggle.
///
/// Navigation is purely in-memory: clicking a link writes the section into
/// the router signal owned by the root view.
#[component]
pub fn SiteNavbar(mut router: Signal<SectionRouter>) -> Element {
    let theme_ctx = use_theme();
    let theme = theme_ctx.theme();
    let active = router.read().current();

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-spark", aria_hidden: "true" }
                    span { class: "navbar__brand-mark", "VoidGrief" }
                }

                nav { class: "navbar__links",
                    for section in Section::ALL {
                        button {
                            key: "{section.slug()}",
                            r#type: "button",
                            class: if section == active { "navbar__link navbar__link--active" } else { "navbar__link" },
                            aria_current: if section == active { "page" } else { "false" },
                            onclick: move |_| {
                                router.write().navigate(section);
                            },
                            "{section.label()}"
                        }
                    }

                    button {
                        r#type: "button",
                        class: "navbar__theme-toggle",
                        aria_label: "Переключить тему",
                        title: "Переключить тему",
                        onclick: move |_| {
                            theme_ctx.toggle();
                        },
                        if theme.is_dark() { "☀" } else { "☾" }
                    }
                }
            }
        }
    }
}
