//! Quiz session: state, operations and the requests they issue
//!
//! The controller never performs I/O. Operations that need the network return
//! a [`Request`]; the owner runs it with [`perform`] on a background task and
//! hands the resulting [`Completion`] back to [`SessionController::complete`].

pub mod controller;
pub mod request;
pub mod state;
pub mod validate;

pub use controller::{SessionController, score};
pub use request::{Completion, Request, perform};
pub use state::{Notice, SessionState, Tab};
pub use validate::{InvalidArticleUrl, article_slug, validate_article_url};
