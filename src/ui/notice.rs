//! Blocking error notice overlay

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::layout::centered_rect;
use crate::session::Notice;
use crate::theme::Theme;

/// Draw the notice centered over everything else
pub fn draw(frame: &mut Frame, area: Rect, notice: &Notice, theme: &Theme) {
    let overlay_area = centered_rect(60, 30, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .title(" Error ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.error))
        .style(Style::default().bg(theme.bg_secondary));

    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let text = vec![
        Line::from(""),
        Line::styled(
            notice.message.clone(),
            Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled("Press any key to continue", Style::default().fg(theme.fg_muted)),
    ];

    let para = Paragraph::new(text).alignment(Alignment::Center).wrap(Wrap { trim: true });
    frame.render_widget(para, inner);
}
