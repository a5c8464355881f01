//! Quiz API integration module
//!
//! Provides the wire models, error taxonomy and HTTP client for the quiz
//! generation backend and the Wikipedia summary endpoint.

pub mod client;
pub mod error;
pub mod memory;
pub mod models;

// Re-export commonly used types
pub use client::{HttpBackend, QuizBackend};
pub use error::ApiError;
pub use memory::InMemoryBackend;
pub use models::{ArticleSummary, Difficulty, Question, QuizDocument, QuizId, QuizSummary};
