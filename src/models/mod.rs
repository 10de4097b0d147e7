pub mod candidate;
pub mod session_context;
pub mod notice;
pub mod route;

pub use candidate::{CandidateLoginRequest, CandidateLoginResponse, CandidateLoginResult, PassKey};
pub use session_context::{HandoffToken, NavigationSessionContext};
pub use notice::{Notice, NoticeId, NoticeSeverity};
pub use route::Route;
