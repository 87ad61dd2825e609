//! In-memory section routing. No URLs, no history: one enum value decides
//! which static block the root view renders.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Blog,
    Faq,
    Donate,
    Contact,
}

impl Section {
    /// Navigation order.
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Blog,
        Section::Faq,
        Section::Donate,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Главная",
            Section::About => "О проекте",
            Section::Blog => "Блог",
            Section::Faq => "FAQ",
            Section::Donate => "Донат",
            Section::Contact => "Контакты",
        }
    }

    /// Stable lowercase id used for element ids and CSS modifiers.
    pub fn slug(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Blog => "blog",
            Section::Faq => "faq",
            Section::Donate => "donate",
            Section::Contact => "contact",
        }
    }
}

/// Holds the currently displayed section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionRouter {
    current: Section,
}

impl SectionRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Section {
        self.current
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.current == section
    }

    /// Switch to `section`. Returns `true` when the displayed block changes.
    pub fn navigate(&mut self, section: Section) -> bool {
        let changed = self.current != section;
        self.current = section;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_home() {
        assert_eq!(SectionRouter::new().current(), Section::Home);
    }

    #[test]
    fn navigate_reads_back_every_section() {
        let mut router = SectionRouter::new();
        for section in Section::ALL {
            router.navigate(section);
            assert_eq!(router.current(), section);
            assert!(router.is_active(section));
        }
    }

    #[test]
    fn navigate_reports_change() {
        let mut router = SectionRouter::new();
        assert!(!router.navigate(Section::Home));
        assert!(router.navigate(Section::Donate));
        assert!(!router.navigate(Section::Donate));
    }

    #[test]
    fn slugs_are_unique() {
        let mut slugs: Vec<_> = Section::ALL.iter().map(|s| s.slug()).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), Section::ALL.len());
    }
}
