//! Integrity checks over the fixed site content, through the public API.

use std::collections::HashSet;

use ui::content::{filter_posts, Category, FAQS, PERKS, POSTS, TIERS};
use ui::core::outbound::{purchase_intent, CHAT_URL};
use ui::core::section::Section;

const THEME_CSS: &str = include_str!("../assets/theme/main.css");

#[test]
fn post_ids_are_unique() {
    let ids: HashSet<_> = POSTS.iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), POSTS.len());
}

#[test]
fn no_post_uses_the_all_sentinel() {
    assert!(POSTS.iter().all(|p| p.category != Category::All));
}

#[test]
fn every_post_is_reachable_through_exactly_one_category() {
    let mut seen = 0;
    for category in Category::ALL.into_iter().filter(|c| *c != Category::All) {
        seen += filter_posts(POSTS, category).len();
    }
    assert_eq!(seen, POSTS.len());
}

#[test]
fn tier_names_are_unique() {
    let names: HashSet<_> = TIERS.iter().map(|t| t.name).collect();
    assert_eq!(names.len(), TIERS.len());
}

#[test]
fn featured_tiers_are_discounted() {
    for tier in TIERS.iter().filter(|t| t.featured) {
        assert!(
            tier.discount_percent().is_some(),
            "featured tier {} has no discount",
            tier.name
        );
    }
}

#[test]
fn every_tier_color_has_a_gradient() {
    for tier in TIERS {
        let selector = format!(".tier--{}", tier.color);
        assert!(
            THEME_CSS.contains(&selector),
            "No gradient for tier color `{}`",
            tier.color
        );
    }
}

#[test]
fn every_tier_links_to_the_chat() {
    for tier in TIERS {
        let url = purchase_intent(tier).url();
        assert!(url.starts_with(CHAT_URL), "{url}");
        assert!(url.contains(tier.name));
        assert!(url.contains(&tier.price.to_string()));
    }
}

#[test]
fn static_lists_are_populated() {
    assert_eq!(FAQS.len(), 4);
    assert_eq!(PERKS.len(), 4);
    assert_eq!(TIERS.len(), 10);
    assert!(FAQS.iter().all(|f| !f.question.is_empty() && !f.answer.is_empty()));
}

#[test]
fn navigation_starts_at_home_and_lists_blog() {
    assert_eq!(Section::ALL[0], Section::Home);
    assert!(Section::ALL.contains(&Section::Blog));
}
