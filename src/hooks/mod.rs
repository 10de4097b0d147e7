pub mod session_context;
pub mod use_history_sync;
pub mod use_landing_gate;

pub use session_context::{use_app_state, AppStateProvider, PortalContext};
pub use use_history_sync::use_history_sync;
pub use use_landing_gate::{use_landing_gate, UseLandingGateHandle};
