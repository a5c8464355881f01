//! The session controller: every mutation of [`SessionState`] goes through here

use crate::api::{ApiError, QuizDocument, QuizId};

use super::request::{Completion, Request};
use super::state::{Notice, SessionState, Tab};
use super::validate::{article_slug, validate_article_url};

/// Inline message shown when the article title cannot be fetched
pub const PREVIEW_FAILED: &str = "Could not fetch article title";

/// Owns the session state and applies user operations and request completions
#[derive(Debug, Default)]
pub struct SessionController {
    state: SessionState,
}

impl SessionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the session
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Store the raw URL input
    pub fn set_url(&mut self, text: impl Into<String>) {
        self.state.url = text.into();
    }

    /// Validate the URL and request the article title.
    ///
    /// Returns `None` without touching the network when the URL is invalid.
    pub fn preview_article(&mut self) -> Option<Request> {
        let slug = self.validated_url()?;
        let slug = article_slug(&slug).to_string();
        self.state.loading = true;
        tracing::debug!("Previewing article {}", slug);
        Some(Request::Preview { slug })
    }

    /// Validate the URL and request quiz generation
    pub fn generate_quiz(&mut self) -> Option<Request> {
        let url = self.validated_url()?;
        self.state.loading = true;
        tracing::debug!("Generating quiz for {}", url);
        Some(Request::Generate { url })
    }

    /// Shared validation step of preview and generate
    fn validated_url(&mut self) -> Option<String> {
        match validate_article_url(&self.state.url) {
            Ok(()) => {
                self.state.url_error = None;
                Some(self.state.url.clone())
            }
            Err(e) => {
                self.state.url_error = Some(e.to_string());
                None
            }
        }
    }

    /// Switch tabs. Entering the history tab requests the quiz list.
    pub fn set_active_tab(&mut self, tab: Tab) -> Option<Request> {
        let previous = self.state.active_tab;
        self.state.active_tab = tab;
        self.state.selected_history_quiz = None;

        if tab == Tab::History && previous != Tab::History {
            Some(self.fetch_history_list())
        } else {
            None
        }
    }

    /// Request the list of past quizzes
    pub fn fetch_history_list(&self) -> Request {
        Request::HistoryList
    }

    /// Request one past quiz
    pub fn fetch_history_detail(&self, id: QuizId) -> Request {
        Request::HistoryDetail { id }
    }

    /// Close the history detail view
    pub fn close_history_detail(&mut self) {
        self.state.selected_history_quiz = None;
    }

    /// Start taking the current quiz. Returns whether the mode changed.
    pub fn start_take_quiz(&mut self) -> bool {
        if self.state.current_quiz.is_none() || self.state.take_quiz_mode {
            return false;
        }
        self.state.take_quiz_mode = true;
        true
    }

    /// Record an answer for the question at `index`.
    ///
    /// Only allowed while taking an unsubmitted quiz, and only for one of
    /// the question's own options. Returns whether the answer was recorded.
    pub fn select_answer(&mut self, index: usize, option: &str) -> bool {
        if !self.state.accepts_answers() {
            return false;
        }
        let Some(question) = self.state.current_quiz.as_ref().and_then(|q| q.quiz.get(index))
        else {
            return false;
        };
        if !question.options.iter().any(|o| o == option) {
            return false;
        }
        self.state.answers.insert(index, option.to_string());
        true
    }

    /// Score the current attempt and mark it submitted
    pub fn submit_quiz(&mut self) -> Option<usize> {
        let quiz = self.state.current_quiz.as_ref()?;
        let correct = score(quiz, &self.state.answers);
        self.state.score = Some(correct);
        self.state.submitted = true;
        tracing::debug!("Quiz submitted: {}/{}", correct, quiz.quiz.len());
        Some(correct)
    }

    /// Flip the expansion of one section
    pub fn toggle_section(&mut self, name: &str) {
        let expanded = self.state.is_expanded(name);
        self.state.expanded_sections.insert(name.to_string(), !expanded);
    }

    /// Dismiss the pending notice
    pub fn dismiss_notice(&mut self) {
        self.state.notice = None;
    }

    /// Apply a finished request
    pub fn complete(&mut self, completion: Completion) {
        match completion {
            Completion::Preview(result) => {
                self.state.loading = false;
                match result {
                    Ok(summary) => self.state.preview_title = Some(summary.title),
                    Err(e) => {
                        tracing::warn!("Article preview failed: {}", e);
                        self.state.url_error = Some(PREVIEW_FAILED.to_string());
                    }
                }
            }
            Completion::Generate(result) => {
                self.state.loading = false;
                match result {
                    Ok(doc) => self.load_quiz(doc),
                    Err(e) => self.raise("Error generating quiz", &e),
                }
            }
            Completion::HistoryList(result) => match result {
                Ok(list) => {
                    tracing::debug!("Loaded {} past quizzes", list.len());
                    self.state.history_list = list;
                }
                Err(e) => self.raise("Error fetching quizzes", &e),
            },
            Completion::HistoryDetail(result) => match result {
                Ok(doc) if self.state.active_tab != Tab::History => {
                    tracing::debug!("Dropping quiz '{}' opened after leaving history", doc.title);
                }
                Ok(doc) => {
                    self.state.expand_all(&doc);
                    self.state.selected_history_quiz = Some(doc);
                }
                Err(e) => self.raise("Error fetching quiz details", &e),
            },
        }
    }

    /// Replace the current quiz and start a fresh attempt
    fn load_quiz(&mut self, doc: QuizDocument) {
        tracing::debug!("Loaded quiz '{}' with {} questions", doc.title, doc.quiz.len());
        self.state.reset_attempt();
        self.state.expand_all(&doc);
        self.state.current_quiz = Some(doc);
    }

    /// Surface a failed request as a blocking notice
    fn raise(&mut self, context: &str, error: &ApiError) {
        tracing::warn!("{}: {}", context, error);
        self.state.notice = Some(Notice { message: format!("{}: {}", context, error.user_message()) });
    }
}

/// Count the questions whose recorded answer equals the correct one
pub fn score(quiz: &QuizDocument, answers: &std::collections::BTreeMap<usize, String>) -> usize {
    quiz.quiz
        .iter()
        .enumerate()
        .filter(|(i, q)| answers.get(i).is_some_and(|a| q.is_correct(a)))
        .count()
}
