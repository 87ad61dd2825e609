//! Donation tiers ("привилегии") and what they unlock.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tier {
    pub name: &'static str,
    pub price: u32,
    /// Pre-discount price, shown struck through.
    pub original_price: Option<u32>,
    pub featured: bool,
    /// Header gradient modifier, e.g. `tier--amber`.
    pub color: &'static str,
}

impl Tier {
    const fn regular(name: &'static str, price: u32, color: &'static str) -> Self {
        Self {
            name,
            price,
            original_price: None,
            featured: false,
            color,
        }
    }

    /// Whole-percent discount against `original_price`, if it is higher.
    pub fn discount_percent(&self) -> Option<u8> {
        let original = self.original_price.filter(|&o| o > self.price)?;
        let saved = u64::from(original - self.price) * 100 / u64::from(original);
        Some(saved as u8)
    }
}

pub const TIERS: &[Tier] = &[
    Tier::regular("HERO", 39, "slate"),
    Tier::regular("TITAN", 89, "blue"),
    Tier::regular("AVENGER", 129, "green"),
    Tier::regular("OVERLORD", 289, "purple"),
    Tier::regular("MAGISTER", 589, "pink"),
    Tier::regular("IMPERATOR", 999, "amber"),
    Tier::regular("DRAGON", 1899, "red"),
    Tier::regular("HELPER", 6666, "cyan"),
    Tier {
        name: "GOD",
        price: 4444,
        original_price: Some(7777),
        featured: true,
        color: "yellow",
    },
    Tier {
        name: "PEGAS",
        price: 2126,
        original_price: Some(7777),
        featured: true,
        color: "indigo",
    },
];

pub const PERKS: &[&str] = &[
    "Доступ к эксклюзивным материалам и статьям",
    "Приоритетная поддержка от команды",
    "Уникальный бейдж в профиле",
    "Участие в закрытых мероприятиях сообщества",
];

pub fn find_tier(name: &str) -> Option<&'static Tier> {
    TIERS.iter().find(|tier| tier.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discount_is_floor_percent() {
        let god = find_tier("GOD").unwrap();
        assert_eq!(god.discount_percent(), Some(42));
        let pegas = find_tier("PEGAS").unwrap();
        assert_eq!(pegas.discount_percent(), Some(72));
    }

    #[test]
    fn regular_tiers_have_no_discount() {
        assert_eq!(find_tier("HERO").unwrap().discount_percent(), None);
    }

    #[test]
    fn original_price_below_price_is_not_a_discount() {
        let odd = Tier {
            original_price: Some(10),
            ..Tier::regular("ODD", 20, "slate")
        };
        assert_eq!(odd.discount_percent(), None);
    }
}
