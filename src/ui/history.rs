//! History tab: past quizzes and the read-only detail overlay

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style, Stylize},
    text::Line,
    widgets::{Clear, Paragraph, Row, Table},
};

use super::{
    layout::{centered_rect, panel},
    quiz_panel,
};
use crate::app::state::AppState;
use crate::quiz::{QuizView, RenderContext};
use crate::theme::Theme;

/// Draw the history table
pub fn draw(frame: &mut Frame, area: Rect, state: &mut AppState, theme: &Theme) {
    let focused = state.session.state().selected_history_quiz.is_none();
    let block = panel(" Past Quizzes ", focused, theme);
    let inner = block.inner(area);
    let quizzes = &state.session.state().history_list;

    if quizzes.is_empty() {
        frame.render_widget(block, area);
        let text = vec![
            Line::from(""),
            Line::styled("No quizzes yet.", Style::default().fg(theme.fg_muted)),
            Line::styled("[r] refresh", Style::default().fg(theme.fg_muted)),
        ];
        frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);
        return;
    }

    // One line for the header row
    let cursor = &mut state.history_cursor;
    cursor.visible_height = inner.height.saturating_sub(1) as usize;
    cursor.clamp(quizzes.len());
    cursor.ensure_line_visible(cursor.selected);

    let header = Row::new(vec!["Title", "URL", "Date"])
        .style(Style::default().fg(theme.info).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = quizzes
        .iter()
        .enumerate()
        .skip(cursor.scroll_offset)
        .take(cursor.visible_height)
        .map(|(i, quiz)| {
            let row = Row::new(vec![quiz.title.clone(), quiz.url.clone(), quiz.display_date()]);
            if i == cursor.selected {
                row.bg(theme.selection).fg(theme.fg_primary).add_modifier(Modifier::BOLD)
            } else {
                row.fg(theme.fg_secondary)
            }
        })
        .collect();

    let widths = [Constraint::Percentage(35), Constraint::Min(20), Constraint::Length(10)];
    let table = Table::new(rows, widths).header(header).block(block);

    frame.render_widget(table, area);
}

/// Draw the selected past quiz as a centered overlay
pub fn draw_detail(frame: &mut Frame, area: Rect, state: &mut AppState, theme: &Theme) {
    let AppState { session, detail_cursor, .. } = state;
    let session = session.state();
    let Some(doc) = session.selected_history_quiz.as_ref() else {
        return;
    };

    let overlay_area = centered_rect(85, 85, area);
    frame.render_widget(Clear, overlay_area);

    let view = QuizView::build(doc, RenderContext::read_only(session));
    quiz_panel::draw(frame, overlay_area, &view, detail_cursor, true, theme);
}
