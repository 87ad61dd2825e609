use dioxus::prelude::*;

use crate::content::{filter_posts, Category, Post, POSTS};

#[component]
pub fn Blog(mut category: Signal<Category>) -> Element {
    let selected = category();
    let visible = filter_posts(POSTS, selected);

    rsx! {
        section { class: "page page-blog",
            div { class: "page__header",
                h2 { class: "page__title", "Блог" }
                p { class: "page__subtitle", "Новости и статьи от команды VoidGrief" }
            }

            div { class: "blog__filters", role: "group", aria_label: "Категории",
                for option in Category::ALL {
                    button {
                        key: "{option.label()}",
                        r#type: "button",
                        class: if option == selected { "chip chip--active" } else { "chip" },
                        aria_pressed: if option == selected { "true" } else { "false" },
                        onclick: move |_| category.set(option),
                        "{option.label()}"
                    }
                }
            }

            if visible.is_empty() {
                p { class: "blog__empty", "В этой категории пока нет статей." }
            } else {
                div { class: "card-grid card-grid--2",
                    for post in visible {
                        {render_post(post)}
                    }
                }
            }
        }
    }
}

fn render_post(post: &Post) -> Element {
    rsx! {
        article { key: "{post.id}", class: "card blog-post",
            div { class: "blog-post__meta",
                span { class: "badge", "{post.category.label()}" }
                span { class: "blog-post__read-time", "{post.read_time}" }
            }
            h3 { class: "card__title", "{post.title}" }
            p { class: "card__text", "{post.summary}" }
            span { class: "blog-post__date", "{post.date}" }
        }
    }
}
