mod app_navbar;
pub use app_navbar::SiteNavbar;

mod footer;
pub use footer::SiteFooter;

mod notice;
pub use notice::{use_notice, use_notice_provider, NoticeBanner, NoticeSlot};
