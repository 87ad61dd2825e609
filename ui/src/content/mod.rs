//! Fixed page content. Nothing here changes for the lifetime of the process.

pub mod blog;
pub mod contact;
pub mod donate;
pub mod faq;

pub use blog::{filter_posts, Category, Post, POSTS};
pub use donate::{Tier, PERKS, TIERS};
pub use faq::{FaqEntry, FAQS};
