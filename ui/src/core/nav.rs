//! Destinations the results page can send the user to.
//!
//! The shared crate does not know each platform's `Route` enum, so views emit a
//! [`NavTarget`] and the platform maps it onto a route.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    SignIn,
    StartAssessment,
    Dashboard,
}

impl NavTarget {
    pub fn path(self) -> &'static str {
        match self {
            Self::SignIn => "/auth",
            Self::StartAssessment => "/assessment",
            Self::Dashboard => "/dashboard",
        }
    }
}
