pub mod app;
pub mod landing;
pub mod chat;
pub mod shared;

pub use app::App;
