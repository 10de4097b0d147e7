pub mod chat_view;

pub use chat_view::{ChatShell, ChatView};
