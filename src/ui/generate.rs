//! Generate tab: URL input, preview/validation line and the current quiz

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::{layout::panel, quiz_panel};
use crate::app::state::{AppState, Focus, UrlInputState};
use crate::quiz::{QuizView, RenderContext};
use crate::theme::Theme;

const PLACEHOLDER: &str = "https://en.wikipedia.org/wiki/...";

/// Draw the Generate tab
pub fn draw(frame: &mut Frame, area: Rect, state: &mut AppState, theme: &Theme) {
    let [input_area, status_area, quiz_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Length(1), Constraint::Min(3)])
            .areas(area);

    let AppState { session, focus, url_input, quiz_cursor, .. } = state;
    let session = session.state();

    draw_input(frame, input_area, url_input, *focus == Focus::UrlInput, theme);

    // Validation error wins over progress, progress over the preview
    let status = if let Some(ref error) = session.url_error {
        Line::styled(error.clone(), Style::default().fg(theme.error))
    } else if session.loading {
        Line::styled(
            "Loading...",
            Style::default().fg(theme.warning).add_modifier(Modifier::ITALIC),
        )
    } else if let Some(ref title) = session.preview_title {
        Line::from(vec![
            Span::styled("Article: ", Style::default().fg(theme.fg_muted)),
            Span::styled(title.clone(), Style::default().fg(theme.info).add_modifier(Modifier::BOLD)),
        ])
    } else {
        Line::from("")
    };
    frame.render_widget(Paragraph::new(status), status_area.inner(Margin::new(1, 0)));

    match session.current_quiz.as_ref() {
        Some(doc) => {
            let view = QuizView::build(doc, RenderContext::attempt(session));
            quiz_panel::draw(frame, quiz_area, &view, quiz_cursor, *focus == Focus::Quiz, theme);
        }
        None => draw_empty(frame, quiz_area, theme),
    }
}

fn draw_input(
    frame: &mut Frame,
    area: Rect,
    input: &UrlInputState,
    focused: bool,
    theme: &Theme,
) {
    let block = panel(" Wikipedia article URL ", focused, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = if focused {
        visible_with_cursor(&input.input, input.cursor, inner.width as usize, theme)
    } else if input.input.is_empty() {
        Line::styled(PLACEHOLDER, Style::default().fg(theme.fg_muted))
    } else {
        Line::styled(input.input.clone(), Style::default().fg(theme.fg_primary))
    };
    frame.render_widget(Paragraph::new(line), inner);
}

fn draw_empty(frame: &mut Frame, area: Rect, theme: &Theme) {
    let block = panel(" Quiz ", false, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = vec![
        Line::from(""),
        Line::styled(
            "Enter a Wikipedia article URL to generate a quiz.",
            Style::default().fg(theme.fg_secondary),
        ),
        Line::from(""),
        Line::styled("[Enter] generate    [Ctrl-p] preview title", Style::default().fg(theme.fg_muted)),
    ];
    let para = Paragraph::new(text).alignment(Alignment::Center).wrap(Wrap { trim: true });
    frame.render_widget(para, inner);
}

/// The part of `text` that fits in `width`, scrolled to keep the cursor visible
fn visible_with_cursor(text: &str, cursor: usize, width: usize, theme: &Theme) -> Line<'static> {
    let skip = cursor.saturating_sub(width.saturating_sub(1));
    let visible: String = text.chars().skip(skip).collect();
    build_line_with_cursor(&visible, cursor - skip, Style::default().fg(theme.fg_primary), theme)
}

/// Build a line with a visible cursor
fn build_line_with_cursor(
    text: &str,
    cursor_pos: usize,
    base_style: Style,
    theme: &Theme,
) -> Line<'static> {
    let chars: Vec<char> = text.chars().collect();
    let mut spans = Vec::new();

    if cursor_pos > 0 {
        let before: String = chars.iter().take(cursor_pos).collect();
        spans.push(Span::styled(before, base_style));
    }

    // Cursor character (or space if at end)
    let cursor_char = chars.get(cursor_pos).copied().unwrap_or(' ');
    let cursor_style = Style::default().fg(theme.bg_primary).bg(theme.cursor).add_modifier(Modifier::BOLD);
    spans.push(Span::styled(cursor_char.to_string(), cursor_style));

    if cursor_pos + 1 < chars.len() {
        let after: String = chars.iter().skip(cursor_pos + 1).collect();
        spans.push(Span::styled(after, base_style));
    }

    Line::from(spans)
}
