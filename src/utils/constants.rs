/// Landing page with the two entry paths
pub const ROUTE_LANDING: &str = "/";

/// Operator credential login surface
pub const ROUTE_OPERATOR_LOGIN: &str = "/login";

/// Candidate interview chat surface
pub const ROUTE_INTERVIEW_CHAT: &str = "/interview/chat";

/// Candidate login endpoint, relative to `CONFIG.api_base_url`
pub const CANDIDATE_LOGIN_PATH: &str = "/api/candidates/login";

pub const MSG_INVALID_PASS_KEY: &str = "Invalid pass key. Please try again.";
pub const MSG_SERVICE_UNAVAILABLE: &str = "Unable to reach the interview service. Please try again.";
pub const MSG_NO_INTERVIEW_SESSION: &str = "No interview session found.";
