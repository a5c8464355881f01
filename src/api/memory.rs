//! In-memory quiz backend for offline use and tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::client::QuizBackend;
use super::error::ApiError;
use super::models::{ArticleSummary, QuizDocument, QuizId, QuizSummary};

#[derive(Debug, Default)]
struct Inner {
    titles: HashMap<String, String>,
    quizzes: Vec<QuizDocument>,
    fail_with: Option<(u16, String)>,
    calls: usize,
}

/// A [`QuizBackend`] that serves canned articles and stores generated quizzes
/// in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBackend {
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the title returned for an article slug
    pub fn with_article(self, slug: &str, title: &str) -> Self {
        self.lock().titles.insert(slug.to_string(), title.to_string());
        self
    }

    /// Register the quiz returned when its `url` is generated
    pub fn with_quiz(self, quiz: QuizDocument) -> Self {
        self.lock().quizzes.push(quiz);
        self
    }

    /// Make every following call fail with a backend detail
    pub fn fail_with(&self, status: u16, detail: &str) {
        self.lock().fail_with = Some((status, detail.to_string()));
    }

    /// Number of calls made so far
    pub fn calls(&self) -> usize {
        self.lock().calls
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn begin(&self) -> Result<std::sync::MutexGuard<'_, Inner>, ApiError> {
        let mut inner = self.lock();
        inner.calls += 1;
        if let Some((status, detail)) = inner.fail_with.clone() {
            return Err(ApiError::Backend { status, detail });
        }
        Ok(inner)
    }
}

#[async_trait]
impl QuizBackend for InMemoryBackend {
    async fn article_summary(&self, slug: &str) -> Result<ArticleSummary, ApiError> {
        let inner = self.begin()?;
        inner
            .titles
            .get(slug)
            .map(|title| ArticleSummary { title: title.clone() })
            .ok_or(ApiError::Status { status: 404 })
    }

    async fn generate_quiz(&self, url: &str) -> Result<QuizDocument, ApiError> {
        let inner = self.begin()?;
        inner.quizzes.iter().find(|q| q.url.as_deref() == Some(url)).cloned().ok_or_else(|| {
            ApiError::Backend {
                status: 400,
                detail: "Failed to scrape URL. Please check if it's a valid Wikipedia URL."
                    .to_string(),
            }
        })
    }

    async fn list_quizzes(&self) -> Result<Vec<QuizSummary>, ApiError> {
        let inner = self.begin()?;
        Ok(inner
            .quizzes
            .iter()
            .enumerate()
            .map(|(i, q)| QuizSummary {
                id: q.id.unwrap_or(i as QuizId + 1),
                title: q.title.clone(),
                url: q.url.clone().unwrap_or_default(),
                created_at: q.created_at.clone(),
            })
            .collect())
    }

    async fn get_quiz(&self, id: QuizId) -> Result<QuizDocument, ApiError> {
        let inner = self.begin()?;
        inner
            .quizzes
            .iter()
            .enumerate()
            .find(|(i, q)| q.id.unwrap_or(*i as QuizId + 1) == id)
            .map(|(_, q)| q.clone())
            .ok_or_else(|| ApiError::Backend { status: 404, detail: "Quiz not found".to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz(id: QuizId, url: &str) -> QuizDocument {
        QuizDocument {
            id: Some(id),
            url: Some(url.to_string()),
            title: format!("Quiz {}", id),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn serves_registered_quizzes() {
        let backend = InMemoryBackend::new()
            .with_quiz(quiz(1, "https://en.wikipedia.org/wiki/A"))
            .with_quiz(quiz(2, "https://en.wikipedia.org/wiki/B"));

        let list = backend.list_quizzes().await.unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].title, "Quiz 2");

        let doc = backend.get_quiz(2).await.unwrap();
        assert_eq!(doc.url.as_deref(), Some("https://en.wikipedia.org/wiki/B"));
        assert_eq!(backend.calls(), 2);
    }

    #[tokio::test]
    async fn missing_quiz_is_backend_error() {
        let backend = InMemoryBackend::new();
        let err = backend.get_quiz(9).await.unwrap_err();
        assert_eq!(err.user_message(), "Quiz not found");
    }

    #[tokio::test]
    async fn forced_failure_applies_to_every_call() {
        let backend = InMemoryBackend::new().with_article("Alan_Turing", "Alan Turing");
        backend.fail_with(500, "boom");
        assert!(backend.article_summary("Alan_Turing").await.is_err());
        assert!(backend.list_quizzes().await.is_err());
    }
}
