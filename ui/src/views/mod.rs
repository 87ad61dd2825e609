mod home;
pub use home::Home;

mod about;
pub use about::About;

mod blog;
pub use blog::Blog;

mod faq;
pub use faq::Faq;

mod donate;
pub use donate::Donate;

mod contact;
pub use contact::Contact;
