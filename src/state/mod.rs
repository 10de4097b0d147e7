// ============================================================================
// STATE MODULE - Rc<RefCell> state with subscriber notification
// ============================================================================

pub mod reactivity;
pub mod notice_queue;
pub mod router_state;
pub mod app_state;

pub use reactivity::*;
pub use notice_queue::*;
pub use router_state::*;
pub use app_state::*;
