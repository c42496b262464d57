//! Shared UI crate for Wattboard. Most cross-platform logic and views live here.

pub mod core;
pub mod dashboard;
pub mod i18n;
pub mod sessions;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}

#[cfg(test)]
mod tests;
