//! Network requests issued by the session and their completions

use crate::api::{ApiError, ArticleSummary, QuizBackend, QuizDocument, QuizId, QuizSummary};

/// A network call the session wants performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Fetch the article title for a page slug
    Preview { slug: String },
    /// Generate a quiz for an article URL
    Generate { url: String },
    /// List past quizzes
    HistoryList,
    /// Fetch one past quiz
    HistoryDetail { id: QuizId },
}

/// The result of a [`Request`], posted back to the session owner
#[derive(Debug)]
pub enum Completion {
    Preview(Result<ArticleSummary, ApiError>),
    Generate(Result<QuizDocument, ApiError>),
    HistoryList(Result<Vec<QuizSummary>, ApiError>),
    HistoryDetail(Result<QuizDocument, ApiError>),
}

impl Completion {
    /// Whether the underlying call failed
    pub fn is_err(&self) -> bool {
        match self {
            Completion::Preview(r) => r.is_err(),
            Completion::Generate(r) | Completion::HistoryDetail(r) => r.is_err(),
            Completion::HistoryList(r) => r.is_err(),
        }
    }
}

/// Run one request against a backend. Exactly one call, no retry.
pub async fn perform(backend: &dyn QuizBackend, request: Request) -> Completion {
    match request {
        Request::Preview { slug } => Completion::Preview(backend.article_summary(&slug).await),
        Request::Generate { url } => Completion::Generate(backend.generate_quiz(&url).await),
        Request::HistoryList => Completion::HistoryList(backend.list_quizzes().await),
        Request::HistoryDetail { id } => Completion::HistoryDetail(backend.get_quiz(id).await),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::InMemoryBackend;

    #[tokio::test]
    async fn preview_maps_to_summary_call() {
        let backend = InMemoryBackend::new().with_article("Alan_Turing", "Alan Turing");
        let completion = perform(&backend, Request::Preview { slug: "Alan_Turing".into() }).await;
        match completion {
            Completion::Preview(Ok(summary)) => assert_eq!(summary.title, "Alan Turing"),
            other => panic!("unexpected completion: {:?}", other),
        }
        assert_eq!(backend.calls(), 1);
    }

    #[tokio::test]
    async fn failures_are_reported_not_raised() {
        let backend = InMemoryBackend::new();
        backend.fail_with(503, "unavailable");
        let completion = perform(&backend, Request::HistoryList).await;
        assert!(completion.is_err());
        assert_eq!(backend.calls(), 1);
    }
}
