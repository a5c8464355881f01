//! Key hints at the bottom of the screen

use ratatui::{Frame, layout::Rect, style::Style, text::Line, widgets::Paragraph};

use super::layout::hint_line;
use crate::app::state::{AppState, Focus};
use crate::session::Tab;
use crate::theme::Theme;

/// Draw the hints for whatever currently receives keys
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let para = Paragraph::new(hints(state, theme)).style(Style::default().bg(theme.bg_tertiary));
    frame.render_widget(para, area);
}

fn hints<'a>(state: &AppState, theme: &Theme) -> Line<'a> {
    let session = state.session.state();
    if session.notice.is_some() {
        return hint_line(&[("any key", " dismiss")], theme);
    }

    match session.active_tab {
        Tab::Generate if state.focus == Focus::UrlInput => hint_line(
            &[
                ("Enter", " generate"),
                ("C-p", " preview"),
                ("C-v", " paste"),
                ("Esc", " quiz"),
                ("Tab", " history"),
                ("C-c", " quit"),
            ],
            theme,
        ),
        Tab::Generate => {
            let mut keys = vec![("j/k", " move"), ("Enter", " toggle/choose")];
            if session.current_quiz.is_some() {
                if session.accepts_answers() {
                    keys.push(("s", " submit"));
                } else {
                    keys.push(("t", " take quiz"));
                }
            }
            keys.extend([("i", " edit URL"), ("Tab", " history"), ("q", " quit")]);
            hint_line(&keys, theme)
        }
        Tab::History if session.selected_history_quiz.is_some() => hint_line(
            &[("j/k", " move"), ("Enter", " toggle section"), ("Esc", " close"), ("q", " quit")],
            theme,
        ),
        Tab::History => hint_line(
            &[("j/k", " move"), ("Enter", " open"), ("r", " refresh"), ("Tab", " generate"), ("q", " quit")],
            theme,
        ),
    }
}
