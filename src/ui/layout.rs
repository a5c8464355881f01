//! Layout utilities and common components

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::theme::Theme;

/// Create a centered rectangle with the given percentage of width and height
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}

/// Bordered panel whose border lights up when focused
pub fn panel<'a>(title: &'a str, focused: bool, theme: &Theme) -> Block<'a> {
    let border_color = if focused { theme.border_focused } else { theme.border };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(theme.bg_primary))
}

/// Wrap `text` to `width` columns with the same indent on every line
pub fn wrap_indented(text: &str, width: usize, indent: &str) -> Vec<String> {
    wrap_hanging(text, width, indent, indent)
}

/// Wrap `text` with a distinct first-line prefix
pub fn wrap_hanging(text: &str, width: usize, first: &str, rest: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return vec![first.to_string()];
    }
    if width <= rest.chars().count() + 1 {
        return vec![format!("{first}{text}")];
    }
    let opts = textwrap::Options::new(width).initial_indent(first).subsequent_indent(rest);
    let lines: Vec<String> = textwrap::wrap(text, opts).into_iter().map(|s| s.into_owned()).collect();
    if lines.is_empty() { vec![first.to_string()] } else { lines }
}

/// A `[key] label` hint pair
pub fn hint<'a>(key: &'a str, label: &'a str, theme: &Theme) -> Vec<Span<'a>> {
    vec![
        Span::styled(key, Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD)),
        Span::styled(label, Style::default().fg(theme.fg_muted)),
    ]
}

/// Join several hint pairs into one line
pub fn hint_line<'a>(hints: &[(&'a str, &'a str)], theme: &Theme) -> Line<'a> {
    let mut spans = Vec::new();
    for &(key, label) in hints {
        spans.extend(hint(key, label, theme));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(60, 50, outer);
        assert_eq!(inner.width, 60);
        assert_eq!(inner.height, 20);
        assert_eq!(inner.x, 20);
    }

    #[test]
    fn wrap_keeps_indent() {
        let lines = wrap_indented("alpha beta gamma delta", 12, "  ");
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.starts_with("  ")));
    }

    #[test]
    fn hanging_wrap_prefixes_first_line() {
        let lines = wrap_hanging("one two three four five", 12, "  ● ", "    ");
        assert!(lines[0].starts_with("  ● one"));
        assert!(lines[1..].iter().all(|l| l.starts_with("    ")));
    }

    #[test]
    fn empty_text_still_yields_a_line() {
        assert_eq!(wrap_indented("", 20, "> "), vec!["> ".to_string()]);
    }
}
