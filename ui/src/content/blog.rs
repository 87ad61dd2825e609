//! Blog posts and the category filter.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    /// Filter sentinel; no post carries it.
    #[default]
    All,
    Technology,
    Design,
    Development,
    News,
}

impl Category {
    /// Filter chip order.
    pub const ALL: [Category; 5] = [
        Category::All,
        Category::Technology,
        Category::Design,
        Category::Development,
        Category::News,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::All => "Все",
            Category::Technology => "технологии",
            Category::Design => "дизайн",
            Category::Development => "разработка",
            Category::News => "новости",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: u32,
    pub title: &'static str,
    pub summary: &'static str,
    pub category: Category,
    pub date: &'static str,
    pub read_time: &'static str,
}

pub const POSTS: &[Post] = &[
    Post {
        id: 1,
        title: "Будущее веб-разработки в 2026",
        summary: "Исследуем новые тренды и технологии, которые изменят индустрию в ближайшие годы.",
        category: Category::Technology,
        date: "15 января 2026",
        read_time: "5 мин",
    },
    Post {
        id: 2,
        title: "Минималистичный дизайн: меньше значит больше",
        summary: "Как создавать элегантные интерфейсы, фокусируясь на главном.",
        category: Category::Design,
        date: "12 января 2026",
        read_time: "7 мин",
    },
    Post {
        id: 3,
        title: "React 19: что нового?",
        summary: "Обзор ключевых изменений и улучшений в новой версии React.",
        category: Category::Development,
        date: "10 января 2026",
        read_time: "6 мин",
    },
    Post {
        id: 4,
        title: "VoidGrief запущен",
        summary: "Мы рады представить новую платформу для обмена идеями и знаниями.",
        category: Category::News,
        date: "9 января 2026",
        read_time: "3 мин",
    },
];

/// Posts visible under `category`, in source order. `All` yields every post.
pub fn filter_posts(posts: &[Post], category: Category) -> Vec<&Post> {
    match category {
        Category::All => posts.iter().collect(),
        selected => posts.iter().filter(|post| post.category == selected).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_identity() {
        let filtered = filter_posts(POSTS, Category::All);
        assert_eq!(filtered.len(), POSTS.len());
        for (kept, original) in filtered.iter().zip(POSTS) {
            assert_eq!(*kept, original);
        }
    }

    #[test]
    fn design_yields_single_post() {
        let filtered = filter_posts(POSTS, Category::Design);
        let titles: Vec<_> = filtered.iter().map(|p| p.title).collect();
        assert_eq!(titles, ["Минималистичный дизайн: меньше значит больше"]);
    }

    #[test]
    fn concrete_categories_keep_exact_subsequence() {
        for category in Category::ALL.into_iter().skip(1) {
            let expected: Vec<&Post> = POSTS.iter().filter(|p| p.category == category).collect();
            assert_eq!(filter_posts(POSTS, category), expected);
        }
    }

    #[test]
    fn filter_preserves_order_for_repeated_categories() {
        let posts = [
            Post { id: 10, category: Category::News, ..POSTS[0].clone() },
            Post { id: 11, category: Category::Design, ..POSTS[0].clone() },
            Post { id: 12, category: Category::News, ..POSTS[0].clone() },
        ];
        let ids: Vec<_> = filter_posts(&posts, Category::News).iter().map(|p| p.id).collect();
        assert_eq!(ids, [10, 12]);
    }

    #[test]
    fn filter_is_idempotent() {
        let once: Vec<Post> = filter_posts(POSTS, Category::News).into_iter().cloned().collect();
        let twice: Vec<u32> = filter_posts(&once, Category::News).iter().map(|p| p.id).collect();
        let once_ids: Vec<u32> = once.iter().map(|p| p.id).collect();
        assert_eq!(twice, once_ids);
        assert_eq!(once_ids, [4]);
    }

    #[test]
    fn empty_source_yields_empty_view() {
        assert!(filter_posts(&[], Category::Technology).is_empty());
        assert!(filter_posts(&[], Category::All).is_empty());
    }
}
