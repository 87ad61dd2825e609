use dioxus::prelude::*;

use crate::components::{use_notice_provider, NoticeBanner, SiteFooter, SiteNavbar};
use crate::content::Category;
use crate::core::section::{Section, SectionRouter};
use crate::core::theme::use_theme_provider;
use crate::views::{About, Blog, Contact, Donate, Faq, Home};

/// The whole single-page site: navbar, the active section, footer.
///
/// Owns the three independent state cells (section, blog category, theme)
/// and hands them down explicitly or through context.
#[component]
pub fn Site() -> Element {
    let router = use_signal(SectionRouter::new);
    let category = use_signal(Category::default);
    let theme = use_theme_provider();
    use_notice_provider();

    let active = router.read().current();
    let theme_class = theme.theme().css_class();

    rsx! {
        div { class: "site {theme_class}", "data-theme": theme.theme().as_str(),
            SiteNavbar { router }
            NoticeBanner {}

            main { class: "site__main", id: "section-{active.slug()}",
                {match active {
                    Section::Home => rsx! { Home { router } },
                    Section::About => rsx! { About {} },
                    Section::Blog => rsx! { Blog { category } },
                    Section::Faq => rsx! { Faq {} },
                    Section::Donate => rsx! { Donate {} },
                    Section::Contact => rsx! { Contact {} },
                }}
            }

            SiteFooter {}
        }
    }
}
