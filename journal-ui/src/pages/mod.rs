//! Pages
//!
//! Top-level page components for each view.

pub mod home;
pub mod settings;

pub use home::Home;
pub use settings::Settings;
