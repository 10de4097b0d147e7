// ============================================================================
// INTERVIEW PORTAL - Candidate landing page (Rust + WASM, Yew)
// ============================================================================
// MVVM:
// - Views: render only
// - ViewModels: UI state + logic
// - Services: HTTP only
// - State: Rc<RefCell> with subscribers
// - Models: wire and domain types
// ============================================================================

pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod viewmodels;
pub mod hooks;
pub mod views;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;

pub use views::App;
