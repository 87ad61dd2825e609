//! Static contact details shown on the contact page.

pub const CONTACT_EMAIL: &str = "maximannenkov367@gmail.com";

pub const RESPONSE_PROMISE: &str = "Мы ответим в течение 24 часов";

pub const NAME_PLACEHOLDER: &str = "Ваше имя";
pub const EMAIL_PLACEHOLDER: &str = "your@email.com";
pub const MESSAGE_PLACEHOLDER: &str = "Ваше сообщение...";
