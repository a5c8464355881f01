//! Wikiquiz - a terminal client for Wikipedia quiz generation
//!
//! Paste a Wikipedia article URL, have the quiz service turn it into a
//! multiple-choice quiz grouped by article section, take the quiz and get a
//! score, or browse quizzes generated earlier.

pub mod api;
pub mod app;
pub mod config;
pub mod quiz;
pub mod session;
pub mod theme;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use theme::Theme;
