use dioxus::prelude::*;

#[component]
pub fn SiteFooter() -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "footer__inner",
                p { class: "footer__copy", "© 2026 VoidGrief. Все права защищены." }
                div { class: "footer__links",
                    a { class: "footer__link", href: "#", "Политика конфиденциальности" }
                    a { class: "footer__link", href: "#", "Условия использования" }
                }
            }
        }
    }
}
