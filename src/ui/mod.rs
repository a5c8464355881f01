//! UI rendering components

pub mod generate;
pub mod history;
pub mod layout;
pub mod notice;
pub mod quiz_panel;
pub mod status_line;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Tabs},
};

use crate::app::state::AppState;
use crate::session::Tab;
use crate::theme::Theme;

/// Main draw function
pub fn draw(frame: &mut Frame, state: &mut AppState, theme: &Theme) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(theme.bg_primary)), area);

    let [tabs_area, body_area, status_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(3), Constraint::Length(1)])
            .areas(area);

    draw_tabs(frame, tabs_area, state, theme);

    match state.session.state().active_tab {
        Tab::Generate => generate::draw(frame, body_area, state, theme),
        Tab::History => {
            history::draw(frame, body_area, state, theme);
            history::draw_detail(frame, body_area, state, theme);
        }
    }

    status_line::draw(frame, status_area, state, theme);

    if let Some(notice) = state.session.state().notice.as_ref() {
        notice::draw(frame, area, notice, theme);
    }
}

fn draw_tabs(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let titles = [Tab::Generate, Tab::History].map(|t| Span::raw(format!(" {} ", t.title())));
    let selected = match state.session.state().active_tab {
        Tab::Generate => 0,
        Tab::History => 1,
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(theme.fg_muted).bg(theme.bg_secondary))
        .highlight_style(
            Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider("\u{2502}");

    frame.render_widget(tabs, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Question, QuizDocument, QuizSummary};
    use crate::session::Completion;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    fn quiz() -> QuizDocument {
        QuizDocument {
            title: "Alan Turing".into(),
            sections: vec!["Career".into()],
            quiz: vec![Question {
                question: "What did he break?".into(),
                options: vec!["Enigma".into(), "Radar".into()],
                answer: "Enigma".into(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn renders_generate_tab_with_quiz() {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let mut state = AppState::default();
        state.apply(Completion::Generate(Ok(quiz())));

        terminal.draw(|frame| draw(frame, &mut state, &Theme::default())).unwrap();

        let text = screen(&terminal);
        assert!(text.contains("Generate Quiz"));
        assert!(text.contains("Alan Turing"));
        assert!(text.contains("Enigma"));
    }

    #[test]
    fn renders_history_and_notice() {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let mut state = AppState::default();
        state.session.set_active_tab(Tab::History);
        state.apply(Completion::HistoryList(Ok(vec![QuizSummary {
            id: 1,
            title: "Alan Turing".into(),
            url: "https://en.wikipedia.org/wiki/Alan_Turing".into(),
            created_at: Some("2024-05-01T10:00:00".into()),
        }])));
        state.apply(Completion::HistoryDetail(Err(crate::api::ApiError::Status { status: 404 })));

        terminal.draw(|frame| draw(frame, &mut state, &Theme::default())).unwrap();

        let text = screen(&terminal);
        assert!(text.contains("2024-05-01"));
        assert!(text.contains("Error fetching quiz details"));
    }
}
