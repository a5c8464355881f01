//! Key handling: turns key presses into session operations

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::input::{Action, EditAction, edit_key_to_action, key_with_modifier_to_action};
use super::state::{AppState, Focus, ListCursor};
use crate::quiz::{FocusTarget, QuizView, RenderContext};
use crate::session::{Request, Tab};

/// What the app loop must do after a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run a request on a background task
    Dispatch(Request),
    /// Leave the application
    Quit,
}

/// Handle one key press
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> Option<Effect> {
    // A pending notice swallows the key that dismisses it
    if state.session.state().notice.is_some() {
        state.session.dismiss_notice();
        return None;
    }

    match state.session.state().active_tab {
        Tab::Generate if state.focus == Focus::UrlInput => {
            let action = edit_key_to_action(key.code, key.modifiers)?;
            handle_edit(state, action)
        }
        Tab::Generate => {
            let action = key_with_modifier_to_action(key.code, key.modifiers)?;
            handle_quiz(state, action)
        }
        Tab::History if state.session.state().selected_history_quiz.is_some() => {
            let action = key_with_modifier_to_action(key.code, key.modifiers)?;
            handle_detail(state, action)
        }
        Tab::History => {
            let action = key_with_modifier_to_action(key.code, key.modifiers)?;
            handle_history(state, action)
        }
    }
}

fn handle_edit(state: &mut AppState, action: EditAction) -> Option<Effect> {
    match action {
        EditAction::Insert(c) => state.url_input.insert_char(c),
        EditAction::Backspace => state.url_input.delete_char(),
        EditAction::Delete => state.url_input.delete_char_forward(),
        EditAction::Left => state.url_input.move_left(),
        EditAction::Right => state.url_input.move_right(),
        EditAction::Home => state.url_input.move_start(),
        EditAction::End => state.url_input.move_end(),
        EditAction::Clear => state.url_input.clear(),
        EditAction::Paste => match paste() {
            Ok(text) => state.url_input.insert_str(text.trim()),
            Err(e) => tracing::warn!("Clipboard unavailable: {}", e),
        },
        EditAction::Preview => {
            if state.session.state().loading {
                return None;
            }
            return state.session.preview_article().map(Effect::Dispatch);
        }
        EditAction::Generate => {
            if state.session.state().loading {
                return None;
            }
            let request = state.session.generate_quiz()?;
            state.editing_since_generate = false;
            return Some(Effect::Dispatch(request));
        }
        EditAction::Leave => {
            if state.session.state().current_quiz.is_some() {
                state.focus = Focus::Quiz;
            }
            return None;
        }
        EditAction::NextTab => return switch_tab(state),
        EditAction::Quit => return Some(Effect::Quit),
    }
    state.editing_since_generate = true;
    state.sync_url();
    None
}

fn paste() -> Result<String, arboard::Error> {
    arboard::Clipboard::new()?.get_text()
}

fn handle_quiz(state: &mut AppState, action: Action) -> Option<Effect> {
    match action {
        Action::Select => {
            let target = current_target(state, false)?;
            match target {
                Target::Section(name) => state.session.toggle_section(&name),
                Target::Option { question, option } => {
                    state.session.select_answer(question, &option);
                }
            }
        }
        Action::TakeQuiz => {
            if state.session.start_take_quiz() {
                state.quiz_cursor.reset();
            }
        }
        Action::Submit => {
            // The submit control is only offered during an unsubmitted attempt
            if state.session.state().accepts_answers() {
                state.session.submit_quiz();
            }
        }
        Action::EditUrl | Action::Back => state.focus = Focus::UrlInput,
        Action::NextTab => return switch_tab(state),
        Action::Quit => return Some(Effect::Quit),
        Action::Refresh => {}
        nav => {
            let len = target_count(state, false);
            navigate(&mut state.quiz_cursor, nav, len);
        }
    }
    None
}

fn handle_history(state: &mut AppState, action: Action) -> Option<Effect> {
    let len = state.session.state().history_list.len();
    match action {
        Action::Select => {
            let summary = state.session.state().history_list.get(state.history_cursor.selected)?;
            let request = state.session.fetch_history_detail(summary.id);
            return Some(Effect::Dispatch(request));
        }
        Action::Refresh => return Some(Effect::Dispatch(state.session.fetch_history_list())),
        Action::NextTab => return switch_tab(state),
        Action::Quit => return Some(Effect::Quit),
        Action::Back | Action::EditUrl | Action::TakeQuiz | Action::Submit => {}
        nav => navigate(&mut state.history_cursor, nav, len),
    }
    None
}

fn handle_detail(state: &mut AppState, action: Action) -> Option<Effect> {
    match action {
        Action::Select => {
            // Options are inert in the read-only view
            if let Some(Target::Section(name)) = current_target(state, true) {
                state.session.toggle_section(&name);
            }
        }
        Action::Back => state.session.close_history_detail(),
        Action::NextTab => return switch_tab(state),
        Action::Quit => return Some(Effect::Quit),
        Action::Refresh | Action::EditUrl | Action::TakeQuiz | Action::Submit => {}
        nav => {
            let len = target_count(state, true);
            navigate(&mut state.detail_cursor, nav, len);
        }
    }
    None
}

fn switch_tab(state: &mut AppState) -> Option<Effect> {
    let next = state.session.state().active_tab.next();
    state.session.set_active_tab(next).map(Effect::Dispatch)
}

fn navigate(cursor: &mut ListCursor, action: Action, len: usize) {
    match action {
        Action::Up => cursor.move_by(-1, len),
        Action::Down => cursor.move_by(1, len),
        Action::Top => cursor.top(),
        Action::Bottom => cursor.bottom(len),
        Action::PageUp => cursor.move_by(-cursor.page(), len),
        Action::PageDown => cursor.move_by(cursor.page(), len),
        _ => {}
    }
}

/// Owned copy of a focus target, so the session can be mutated afterwards
enum Target {
    Section(String),
    Option { question: usize, option: String },
}

fn current_target(state: &AppState, detail: bool) -> Option<Target> {
    let session = state.session.state();
    let (doc, ctx, cursor) = if detail {
        let doc = session.selected_history_quiz.as_ref()?;
        (doc, RenderContext::read_only(session), &state.detail_cursor)
    } else {
        (session.current_quiz.as_ref()?, RenderContext::attempt(session), &state.quiz_cursor)
    };
    let view = QuizView::build(doc, ctx);
    let target = view.targets().get(cursor.selected).copied()?;
    Some(match target {
        FocusTarget::Section(name) => Target::Section(name.to_string()),
        FocusTarget::Option { question, option } => {
            Target::Option { question, option: option.to_string() }
        }
    })
}

fn target_count(state: &AppState, detail: bool) -> usize {
    let session = state.session.state();
    let (doc, ctx) = if detail {
        (session.selected_history_quiz.as_ref(), RenderContext::read_only(session))
    } else {
        (session.current_quiz.as_ref(), RenderContext::attempt(session))
    };
    doc.map(|d| QuizView::build(d, ctx).targets().len()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Question, QuizDocument, QuizSummary};
    use crate::session::Completion;
    use pretty_assertions::assert_eq;

    fn press(state: &mut AppState, code: KeyCode) -> Option<Effect> {
        handle_key(state, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    fn turing() -> QuizDocument {
        QuizDocument {
            id: Some(1),
            title: "Alan Turing".into(),
            sections: vec!["Early life".into(), "Career".into()],
            quiz: vec![
                Question {
                    question: "Where did he study?".into(),
                    options: vec!["Harvard".into(), "Cambridge".into()],
                    answer: "Cambridge".into(),
                    section: Some("Early life".into()),
                    ..Default::default()
                },
                Question {
                    question: "What did he break?".into(),
                    options: vec!["Enigma".into(), "Radar".into()],
                    answer: "Enigma".into(),
                    section: Some("Career".into()),
                    ..Default::default()
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn typing_updates_session_url() {
        let mut state = AppState::default();
        type_text(&mut state, "https://en.wikipedia.org/wiki/Alan_Turing");
        assert_eq!(state.session.state().url, "https://en.wikipedia.org/wiki/Alan_Turing");

        press(&mut state, KeyCode::Backspace);
        assert_eq!(state.session.state().url, "https://en.wikipedia.org/wiki/Alan_Turin");
    }

    #[test]
    fn enter_with_invalid_url_dispatches_nothing() {
        let mut state = AppState::default();
        type_text(&mut state, "not a url");
        assert_eq!(press(&mut state, KeyCode::Enter), None);
        assert!(state.session.state().url_error.is_some());
    }

    #[test]
    fn enter_generates_and_loading_blocks_repeats() {
        let mut state = AppState::default();
        type_text(&mut state, "https://en.wikipedia.org/wiki/Alan_Turing");

        assert_eq!(
            press(&mut state, KeyCode::Enter),
            Some(Effect::Dispatch(Request::Generate {
                url: "https://en.wikipedia.org/wiki/Alan_Turing".into()
            }))
        );
        assert_eq!(press(&mut state, KeyCode::Enter), None);
        assert_eq!(
            handle_key(&mut state, KeyEvent::new(KeyCode::Char('p'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn typing_while_generating_keeps_editor_focus() {
        let mut state = AppState::default();
        type_text(&mut state, "https://en.wikipedia.org/wiki/Alan_Turing");
        press(&mut state, KeyCode::Enter);
        type_text(&mut state, "_extra");

        state.apply(Completion::Generate(Ok(turing())));
        assert_eq!(state.focus, Focus::UrlInput);

        // Still editing: `q` is text, not quit
        assert_eq!(press(&mut state, KeyCode::Char('q')), None);
        assert!(state.url_input.input.ends_with("_extraq"));
    }

    #[test]
    fn idle_editor_hands_focus_to_new_quiz() {
        let mut state = AppState::default();
        type_text(&mut state, "https://en.wikipedia.org/wiki/Alan_Turing");
        press(&mut state, KeyCode::Enter);

        state.apply(Completion::Generate(Ok(turing())));
        assert_eq!(state.focus, Focus::Quiz);
    }

    #[test]
    fn ctrl_p_previews() {
        let mut state = AppState::default();
        type_text(&mut state, "https://en.wikipedia.org/wiki/Alan_Turing");
        assert_eq!(
            handle_key(&mut state, KeyEvent::new(KeyCode::Char('p'), KeyModifiers::CONTROL)),
            Some(Effect::Dispatch(Request::Preview { slug: "Alan_Turing".into() }))
        );
    }

    #[test]
    fn quiz_navigation_toggles_and_answers() {
        let mut state = AppState::default();
        state.apply(Completion::Generate(Ok(turing())));
        assert_eq!(state.focus, Focus::Quiz);

        // Targets: [Early life, Harvard, Cambridge, Career, Enigma, Radar]
        press(&mut state, KeyCode::Enter);
        assert!(!state.session.state().is_expanded("Early life"));

        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Char('t'));
        press(&mut state, KeyCode::Char('j'));
        press(&mut state, KeyCode::Char('j'));
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.session.state().answers.get(&0).map(String::as_str), Some("Cambridge"));

        press(&mut state, KeyCode::Char('s'));
        assert_eq!(state.session.state().score, Some(1));

        // Selection is inert after submission
        press(&mut state, KeyCode::Char('k'));
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.session.state().answers.get(&0).map(String::as_str), Some("Cambridge"));
    }

    #[test]
    fn submit_requires_take_mode() {
        let mut state = AppState::default();
        state.apply(Completion::Generate(Ok(turing())));
        press(&mut state, KeyCode::Char('s'));
        assert!(!state.session.state().submitted);
    }

    #[test]
    fn tab_enters_history_and_fetches() {
        let mut state = AppState::default();
        assert_eq!(press(&mut state, KeyCode::Tab), Some(Effect::Dispatch(Request::HistoryList)));
        assert_eq!(state.session.state().active_tab, Tab::History);

        state.apply(Completion::HistoryList(Ok(vec![QuizSummary {
            id: 4,
            title: "Alan Turing".into(),
            url: "https://en.wikipedia.org/wiki/Alan_Turing".into(),
            created_at: None,
        }])));
        assert_eq!(
            press(&mut state, KeyCode::Enter),
            Some(Effect::Dispatch(Request::HistoryDetail { id: 4 }))
        );
        assert_eq!(press(&mut state, KeyCode::Char('r')), Some(Effect::Dispatch(Request::HistoryList)));
    }

    #[test]
    fn detail_is_closed_with_escape() {
        let mut state = AppState::default();
        press(&mut state, KeyCode::Tab);
        state.apply(Completion::HistoryDetail(Ok(turing())));

        press(&mut state, KeyCode::Enter);
        assert!(!state.session.state().is_expanded("Early life"));

        press(&mut state, KeyCode::Esc);
        assert!(state.session.state().selected_history_quiz.is_none());
    }

    #[test]
    fn any_key_dismisses_notice() {
        let mut state = AppState::default();
        press(&mut state, KeyCode::Tab);
        state.apply(Completion::HistoryList(Err(crate::api::ApiError::Status { status: 500 })));
        assert!(state.session.state().notice.is_some());

        assert_eq!(press(&mut state, KeyCode::Char('q')), None);
        assert!(state.session.state().notice.is_none());
        assert_eq!(press(&mut state, KeyCode::Char('q')), Some(Effect::Quit));
    }
}
