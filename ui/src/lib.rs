//! Shared UI crate for Mindcheck. Cross-platform views, the assessment model
//! and the results page live here; platform crates only add routing.

pub mod assessment;
pub mod core;
pub mod i18n;
pub mod results;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}

pub use crate::core::backend::Backend;
pub use crate::core::nav::NavTarget;
