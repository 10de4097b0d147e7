pub mod landing_view;
pub mod operator_login_view;

pub use landing_view::{EntryPath, LandingView};
pub use operator_login_view::OperatorLoginView;
