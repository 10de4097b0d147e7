pub mod api_client;
pub mod auth_service;

pub use api_client::{classify_rejection, ApiClient};
pub use auth_service::{CandidateAuthService, HttpCandidateAuthService};
