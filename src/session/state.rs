//! Session state definitions

use std::collections::{BTreeMap, HashMap};

use crate::api::{QuizDocument, QuizSummary};

/// Which tab is currently displayed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Generate,
    History,
}

impl Tab {
    /// Tab label
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Generate => "Generate Quiz",
            Tab::History => "Past Quizzes",
        }
    }

    /// The other tab
    pub fn next(&self) -> Self {
        match self {
            Tab::Generate => Tab::History,
            Tab::History => Tab::Generate,
        }
    }
}

/// A blocking notification shown until dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

/// Everything the user can see, owned by the session controller
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Currently displayed tab
    pub active_tab: Tab,

    /// Raw URL input
    pub url: String,
    /// Inline validation or preview error under the URL input
    pub url_error: Option<String>,
    /// Title of the previewed article
    pub preview_title: Option<String>,
    /// A preview or generate call is in flight
    pub loading: bool,

    /// The generated quiz on the Generate tab
    pub current_quiz: Option<QuizDocument>,

    /// Past quizzes
    pub history_list: Vec<QuizSummary>,
    /// Quiz opened from the history list
    pub selected_history_quiz: Option<QuizDocument>,

    /// Taking the current quiz
    pub take_quiz_mode: bool,
    /// Chosen option per question index
    pub answers: BTreeMap<usize, String>,
    /// The current attempt has been submitted
    pub submitted: bool,
    /// Correct answers in the submitted attempt
    pub score: Option<usize>,

    /// Expansion flag per section name
    pub expanded_sections: HashMap<String, bool>,

    /// Pending blocking notification
    pub notice: Option<Notice>,
}

impl SessionState {
    /// Whether a section is currently expanded (unknown sections are collapsed)
    pub fn is_expanded(&self, section: &str) -> bool {
        self.expanded_sections.get(section).copied().unwrap_or(false)
    }

    /// Expand every section of a freshly loaded document
    pub(crate) fn expand_all(&mut self, doc: &QuizDocument) {
        self.expanded_sections = doc.sections.iter().map(|s| (s.clone(), true)).collect();
    }

    /// Clear the answers, submission and score of the current attempt
    pub(crate) fn reset_attempt(&mut self) {
        self.take_quiz_mode = false;
        self.answers.clear();
        self.submitted = false;
        self.score = None;
    }

    /// Whether answers may be recorded right now
    pub fn accepts_answers(&self) -> bool {
        self.take_quiz_mode && !self.submitted
    }
}
