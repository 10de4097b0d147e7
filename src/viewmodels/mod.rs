// ============================================================================
// VIEWMODELS - UI logic. Views render, services talk HTTP, this decides.
// ============================================================================

pub mod landing_viewmodel;
pub mod handoff;
pub mod chat_guard;
pub mod chat_viewmodel;

pub use landing_viewmodel::{GatePhase, LandingViewModel, SubmitOutcome};
pub use handoff::SessionHandoff;
pub use chat_guard::{ChatAdmission, ChatGuard};
pub use chat_viewmodel::ChatViewModel;
