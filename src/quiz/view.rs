//! Quiz view model: what to draw for a document in a given session state

use std::collections::{BTreeMap, HashMap};

use super::grouping::group_by_section;
use crate::api::{Difficulty, QuizDocument};
use crate::session::SessionState;

static NO_ANSWERS: BTreeMap<usize, String> = BTreeMap::new();

/// The slice of session state that affects how a quiz is drawn
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub take_quiz_mode: bool,
    pub submitted: bool,
    pub score: Option<usize>,
    pub answers: &'a BTreeMap<usize, String>,
    pub expanded: &'a HashMap<String, bool>,
    /// Historical view: no controls, no selection
    pub read_only: bool,
}

impl<'a> RenderContext<'a> {
    /// Context for the current quiz attempt
    pub fn attempt(state: &'a SessionState) -> Self {
        Self {
            take_quiz_mode: state.take_quiz_mode,
            submitted: state.submitted,
            score: state.score,
            answers: &state.answers,
            expanded: &state.expanded_sections,
            read_only: false,
        }
    }

    /// Context for a quiz opened from history
    pub fn read_only(state: &'a SessionState) -> Self {
        Self {
            take_quiz_mode: false,
            submitted: false,
            score: None,
            answers: &NO_ANSWERS,
            expanded: &state.expanded_sections,
            read_only: true,
        }
    }

    fn is_expanded(&self, section: &str) -> bool {
        self.expanded.get(section).copied().unwrap_or(false)
    }

    fn selectable(&self) -> bool {
        !self.read_only && self.take_quiz_mode && !self.submitted
    }

    fn reveals_answers(&self) -> bool {
        !self.take_quiz_mode || self.submitted
    }
}

/// Highlight of an option after submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    Neutral,
    /// The correct answer, chosen or not
    Correct,
    /// Chosen but wrong
    Incorrect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView<'a> {
    pub text: &'a str,
    pub selected: bool,
    pub mark: OptionMark,
}

/// Correct answer and explanation shown beneath a question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal<'a> {
    pub answer: &'a str,
    pub explanation: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView<'a> {
    /// Index into the document's question list
    pub index: usize,
    pub question: &'a str,
    pub difficulty: Difficulty,
    pub options: Vec<OptionView<'a>>,
    pub reveal: Option<Reveal<'a>>,
    pub selectable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView<'a> {
    pub name: &'a str,
    pub expanded: bool,
    pub questions: Vec<QuestionView<'a>>,
}

/// The control shown in the quiz header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizControl {
    TakeQuiz,
    Submit,
    Score { score: usize, total: usize },
}

/// A row the cursor can rest on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget<'a> {
    Section(&'a str),
    Option { question: usize, option: &'a str },
}

/// Everything needed to draw one quiz document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizView<'a> {
    pub title: &'a str,
    pub summary: &'a str,
    pub control: Option<QuizControl>,
    pub sections: Vec<SectionView<'a>>,
    pub related_topics: &'a [String],
}

impl<'a> QuizView<'a> {
    /// Build the view of `doc` under `ctx`
    pub fn build(doc: &'a QuizDocument, ctx: RenderContext<'_>) -> Self {
        let sections = group_by_section(doc)
            .into_iter()
            .map(|(name, indices)| SectionView {
                name,
                expanded: ctx.is_expanded(name),
                questions: indices.into_iter().map(|i| question_view(doc, i, &ctx)).collect(),
            })
            .collect();

        Self {
            title: &doc.title,
            summary: &doc.summary,
            control: control(doc, &ctx),
            sections,
            related_topics: &doc.related_topics,
        }
    }

    /// Focusable rows in display order: each section header, then the
    /// options of its questions when expanded
    pub fn targets(&self) -> Vec<FocusTarget<'a>> {
        let mut targets = Vec::new();
        for section in &self.sections {
            targets.push(FocusTarget::Section(section.name));
            if !section.expanded {
                continue;
            }
            for question in &section.questions {
                targets.extend(
                    question
                        .options
                        .iter()
                        .map(|o| FocusTarget::Option { question: question.index, option: o.text }),
                );
            }
        }
        targets
    }
}

fn control(doc: &QuizDocument, ctx: &RenderContext<'_>) -> Option<QuizControl> {
    if ctx.read_only || doc.quiz.is_empty() {
        return None;
    }
    Some(if ctx.submitted {
        QuizControl::Score { score: ctx.score.unwrap_or(0), total: doc.quiz.len() }
    } else if ctx.take_quiz_mode {
        QuizControl::Submit
    } else {
        QuizControl::TakeQuiz
    })
}

fn question_view<'a>(doc: &'a QuizDocument, index: usize, ctx: &RenderContext<'_>) -> QuestionView<'a> {
    let question = &doc.quiz[index];
    let chosen = ctx.answers.get(&index).map(String::as_str);

    let options = question
        .options
        .iter()
        .map(|option| {
            let selected = chosen == Some(option.as_str());
            let mark = if !ctx.submitted {
                OptionMark::Neutral
            } else if question.is_correct(option) {
                OptionMark::Correct
            } else if selected {
                OptionMark::Incorrect
            } else {
                OptionMark::Neutral
            };
            OptionView { text: option, selected, mark }
        })
        .collect();

    QuestionView {
        index,
        question: &question.question,
        difficulty: question.difficulty,
        options,
        reveal: ctx
            .reveals_answers()
            .then(|| Reveal { answer: &question.answer, explanation: &question.explanation }),
        selectable: ctx.selectable(),
    }
}
