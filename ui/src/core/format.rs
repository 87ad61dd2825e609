//! Formatting helpers for presenting prices.

/// Ruble amount as shown on tier cards and in purchase messages.
pub fn format_price(value: u32) -> String {
    format!("{value} ₽")
}

pub fn format_discount(value: u8) -> String {
    format!("−{value}%")
}
