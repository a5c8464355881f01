//! HTTP client for the quiz backend and the Wikipedia summary endpoint

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::models::{
    ArticleSummary, ErrorBody, GenerateQuizRequest, QuizDocument, QuizId, QuizSummary,
};
use crate::config::Config;

/// The remote operations the session depends on.
///
/// Each method performs exactly one request and never retries.
#[async_trait]
pub trait QuizBackend: Send + Sync {
    /// Fetch the Wikipedia summary for a page slug
    async fn article_summary(&self, slug: &str) -> Result<ArticleSummary, ApiError>;

    /// Ask the backend to generate (or return the stored) quiz for an article
    async fn generate_quiz(&self, url: &str) -> Result<QuizDocument, ApiError>;

    /// List every stored quiz
    async fn list_quizzes(&self) -> Result<Vec<QuizSummary>, ApiError>;

    /// Fetch one stored quiz
    async fn get_quiz(&self, id: QuizId) -> Result<QuizDocument, ApiError>;
}

/// reqwest-backed implementation of [`QuizBackend`]
pub struct HttpBackend {
    /// HTTP client
    client: Client,
    /// Quiz API base URL, without trailing slash
    api_base_url: String,
    /// Wikipedia page summary endpoint, without trailing slash
    summary_url: String,
}

impl HttpBackend {
    /// User agent sent with every request
    const USER_AGENT: &'static str = concat!("wikiquiz/", env!("CARGO_PKG_VERSION"));

    /// Create a client for the endpoints named in the configuration
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = Client::builder().user_agent(Self::USER_AGENT).build()?;

        Ok(Self {
            client,
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            summary_url: config.wikipedia_summary_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL of the quiz API
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path)
    }
}

#[async_trait]
impl QuizBackend for HttpBackend {
    async fn article_summary(&self, slug: &str) -> Result<ArticleSummary, ApiError> {
        let url = format!("{}/{}", self.summary_url, slug);
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        decode(response).await
    }

    async fn generate_quiz(&self, url: &str) -> Result<QuizDocument, ApiError> {
        let endpoint = self.endpoint("generate-quiz");
        tracing::debug!("POST {} for {}", endpoint, url);
        let response = self
            .client
            .post(&endpoint)
            .json(&GenerateQuizRequest { url: url.to_string() })
            .send()
            .await?;
        decode(response).await
    }

    async fn list_quizzes(&self) -> Result<Vec<QuizSummary>, ApiError> {
        let endpoint = self.endpoint("quizzes");
        tracing::debug!("GET {}", endpoint);
        let response = self.client.get(&endpoint).send().await?;
        decode(response).await
    }

    async fn get_quiz(&self, id: QuizId) -> Result<QuizDocument, ApiError> {
        let endpoint = self.endpoint(&format!("quiz/{}", id));
        tracing::debug!("GET {}", endpoint);
        let response = self.client.get(&endpoint).send().await?;
        decode(response).await
    }
}

/// Turn a response into the expected body or an [`ApiError`]
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(error_from_body(status.as_u16(), &body));
    }

    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

/// Build the error for a non-success response body
fn error_from_body(status: u16, body: &str) -> ApiError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(error) => ApiError::Backend { status, detail: error.detail_text() },
        Err(_) => ApiError::Status { status },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_trims_trailing_slashes() {
        let config = Config { api_base_url: "http://localhost:8000/".into(), ..Config::default() };
        let backend = HttpBackend::new(&config).unwrap();
        assert_eq!(backend.api_base_url(), "http://localhost:8000");
        assert_eq!(backend.endpoint("quizzes"), "http://localhost:8000/quizzes");
        assert_eq!(backend.endpoint("quiz/3"), "http://localhost:8000/quiz/3");
    }

    #[test]
    fn error_body_with_detail() {
        let err = error_from_body(404, r#"{"detail":"Quiz not found"}"#);
        assert!(matches!(err, ApiError::Backend { status: 404, ref detail } if detail == "Quiz not found"));
    }

    #[test]
    fn error_body_without_detail() {
        let err = error_from_body(502, "<html>Bad Gateway</html>");
        assert!(matches!(err, ApiError::Status { status: 502 }));
    }
}
