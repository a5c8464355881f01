//! Quiz panel: draws a `QuizView` as a scrollable list of lines

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::layout::{hint_line, panel, wrap_hanging, wrap_indented};
use crate::app::state::ListCursor;
use crate::quiz::{OptionMark, OptionView, QuestionView, QuizControl, QuizView};
use crate::theme::Theme;

/// Lines of a quiz plus the line each focus target starts on
pub struct Rendered {
    pub lines: Vec<Line<'static>>,
    pub target_lines: Vec<usize>,
}

/// Draw the quiz in `area`, scrolling so the cursor stays visible
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    view: &QuizView,
    cursor: &mut ListCursor,
    focused: bool,
    theme: &Theme,
) {
    let title = format!(" {} ", view.title);
    let block = panel(&title, focused, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width.saturating_sub(1) as usize;
    let rendered = render_lines(view, focused.then_some(cursor.selected), width, theme);

    cursor.visible_height = inner.height as usize;
    cursor.clamp(rendered.target_lines.len());
    if let Some(&line) = rendered.target_lines.get(cursor.selected) {
        cursor.ensure_line_visible(line);
    }
    cursor.scroll_offset = cursor.scroll_offset.min(rendered.lines.len().saturating_sub(1));

    let para = Paragraph::new(rendered.lines).scroll((cursor.scroll_offset as u16, 0));
    frame.render_widget(para, inner);
}

/// Lay the view out as lines `width` columns wide
pub fn render_lines(
    view: &QuizView,
    selected: Option<usize>,
    width: usize,
    theme: &Theme,
) -> Rendered {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut target_lines = Vec::new();

    for text in wrap_indented(view.summary, width, "") {
        lines.push(Line::styled(text, Style::default().fg(theme.fg_secondary)));
    }
    if let Some(control) = view.control {
        lines.push(Line::from(""));
        lines.push(control_line(control, theme));
    }

    for section in &view.sections {
        lines.push(Line::from(""));
        let focused = selected == Some(target_lines.len());
        target_lines.push(lines.len());
        lines.push(section_line(section.name, section.expanded, section.questions.len(), focused, theme));

        if !section.expanded {
            continue;
        }
        for question in &section.questions {
            lines.push(Line::from(""));
            push_question(&mut lines, question, width, theme);
            for option in &question.options {
                let focused = selected == Some(target_lines.len());
                target_lines.push(lines.len());
                push_option(&mut lines, option, question.selectable, focused, width, theme);
            }
            if let Some(reveal) = question.reveal {
                let answer = format!("Answer: {}", reveal.answer);
                for text in wrap_indented(&answer, width, "      ") {
                    lines.push(Line::styled(text, Style::default().fg(theme.success)));
                }
                if !reveal.explanation.is_empty() {
                    for text in wrap_indented(reveal.explanation, width, "      ") {
                        lines.push(Line::styled(
                            text,
                            Style::default().fg(theme.fg_muted).add_modifier(Modifier::ITALIC),
                        ));
                    }
                }
            }
        }
    }

    if !view.related_topics.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            "Related topics",
            Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD),
        ));
        for topic in view.related_topics {
            for text in wrap_hanging(topic, width, "  \u{2022} ", "    ") {
                lines.push(Line::styled(text, Style::default().fg(theme.info)));
            }
        }
    }

    Rendered { lines, target_lines }
}

fn control_line(control: QuizControl, theme: &Theme) -> Line<'static> {
    match control {
        QuizControl::TakeQuiz => hint_line(&[("[t]", " Take Quiz")], theme),
        QuizControl::Submit => {
            hint_line(&[("[Enter]", " choose answer"), ("[s]", " Submit Quiz")], theme)
        }
        QuizControl::Score { score, total } => Line::from(Span::styled(
            format!("Your Score: {} / {}", score, total),
            Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
        )),
    }
}

fn section_line(
    name: &str,
    expanded: bool,
    count: usize,
    focused: bool,
    theme: &Theme,
) -> Line<'static> {
    let arrow = if expanded { "\u{25BE}" } else { "\u{25B8}" }; // ▾ or ▸
    let mut style = Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD);
    if focused {
        style = style.bg(theme.selection);
    }
    let noun = if count == 1 { "question" } else { "questions" };
    Line::from(vec![
        Span::styled(format!("{} {}", arrow, name), style),
        Span::styled(format!("  ({} {})", count, noun), Style::default().fg(theme.fg_muted)),
    ])
}

fn push_question(
    lines: &mut Vec<Line<'static>>,
    question: &QuestionView,
    width: usize,
    theme: &Theme,
) {
    let heading = format!("Q{}. {}", question.index + 1, question.question);
    let style = Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD);
    let wrapped = wrap_hanging(&heading, width, "  ", "      ");
    let last = wrapped.len() - 1;

    for (i, text) in wrapped.into_iter().enumerate() {
        let mut spans = vec![Span::styled(text, style)];
        if i == last {
            spans.push(Span::styled(
                format!(" [{}]", question.difficulty.label()),
                Style::default().fg(theme.difficulty(question.difficulty)),
            ));
        }
        lines.push(Line::from(spans));
    }
}

fn push_option(
    lines: &mut Vec<Line<'static>>,
    option: &OptionView,
    selectable: bool,
    focused: bool,
    width: usize,
    theme: &Theme,
) {
    let marker = match option.mark {
        OptionMark::Correct => "\u{2713}",   // ✓
        OptionMark::Incorrect => "\u{2717}", // ✗
        OptionMark::Neutral if option.selected => "\u{25CF}", // ●
        OptionMark::Neutral => "\u{25CB}",                    // ○
    };

    let mut style = match option.mark {
        OptionMark::Correct => Style::default().fg(theme.success).bg(theme.correct_bg),
        OptionMark::Incorrect => Style::default().fg(theme.error).bg(theme.incorrect_bg),
        OptionMark::Neutral if option.selected => {
            Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD)
        }
        OptionMark::Neutral if selectable => Style::default().fg(theme.fg_primary),
        OptionMark::Neutral => Style::default().fg(theme.fg_secondary),
    };
    if focused {
        style = style.add_modifier(Modifier::BOLD);
        if option.mark == OptionMark::Neutral {
            style = style.bg(theme.selection);
        }
    }

    let pointer = if focused { "\u{203A}" } else { " " }; // ›
    let first = format!("  {} {} ", pointer, marker);
    for text in wrap_hanging(option.text, width, &first, "      ") {
        lines.push(Line::styled(text, style));
    }
}
