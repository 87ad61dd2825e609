//! Platform-agnostic state and side-effect seams shared by every shell.

pub mod format;
pub mod outbound;
pub mod platform;
pub mod section;
pub mod storage;
pub mod theme;
