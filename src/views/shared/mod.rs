pub mod header;
pub mod notice_stack;

pub use header::Header;
pub use notice_stack::{NoticeItem, NoticeStack};
