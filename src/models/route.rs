use crate::utils::constants::{ROUTE_INTERVIEW_CHAT, ROUTE_LANDING, ROUTE_OPERATOR_LOGIN};

/// Client-side routes. None of them carries parameters in the URL.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Route {
    #[default]
    Landing,
    OperatorLogin,
    InterviewChat,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => ROUTE_LANDING,
            Route::OperatorLogin => ROUTE_OPERATOR_LOGIN,
            Route::InterviewChat => ROUTE_INTERVIEW_CHAT,
        }
    }

    /// Resolves a location pathname. Unknown paths land on the landing page;
    /// query strings, fragments and a trailing slash are ignored.
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => ROUTE_LANDING,
            trimmed => trimmed,
        };

        match path {
            ROUTE_OPERATOR_LOGIN => Route::OperatorLogin,
            ROUTE_INTERVIEW_CHAT => Route::InterviewChat,
            _ => Route::Landing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for route in [Route::Landing, Route::OperatorLogin, Route::InterviewChat] {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn unknown_and_decorated_paths() {
        assert_eq!(Route::from_path(""), Route::Landing);
        assert_eq!(Route::from_path("/does-not-exist"), Route::Landing);
        assert_eq!(Route::from_path("/interview/chat/"), Route::InterviewChat);
        assert_eq!(Route::from_path("/interview/chat?candidateId=42"), Route::InterviewChat);
        assert_eq!(Route::from_path("/login#top"), Route::OperatorLogin);
    }
}
