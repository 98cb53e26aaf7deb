use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::ui::line_input::LineInput;
use crate::ui::theme::Theme;

/// A labelled single-line input box with an optional hint below it.
/// Expects 5 rows: label, 3-row bordered box, hint.
pub struct InputField<'a> {
    pub label: &'a str,
    pub hint: &'a str,
    pub input: &'a LineInput,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl<'a> InputField<'a> {
    pub fn new(label: &'a str, hint: &'a str, input: &'a LineInput, focused: bool, theme: &'a Theme) -> Self {
        Self {
            label,
            hint,
            input,
            focused,
            theme,
        }
    }
}

impl Widget for InputField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);

        let label_style = if self.focused {
            Style::default()
                .fg(colors.accent())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.fg())
        };
        Paragraph::new(Line::from(Span::styled(self.label, label_style))).render(rows[0], buf);

        let border = if self.focused {
            colors.border_focused()
        } else {
            colors.border()
        };
        let block = Block::bordered().border_style(Style::default().fg(border));
        let inner = block.inner(rows[1]);
        block.render(rows[1], buf);

        let (before, at, after) = self.input.render_parts();
        let mut spans = vec![Span::styled(before, Style::default().fg(colors.fg()))];
        if self.focused {
            match at {
                Some(ch) => spans.push(Span::styled(
                    ch.to_string(),
                    Style::default().fg(colors.bg()).bg(colors.accent()),
                )),
                None => spans.push(Span::styled(
                    " ",
                    Style::default().bg(colors.accent()),
                )),
            }
        } else if let Some(ch) = at {
            spans.push(Span::styled(
                ch.to_string(),
                Style::default().fg(colors.fg()),
            ));
        }
        spans.push(Span::styled(after, Style::default().fg(colors.fg())));
        Paragraph::new(Line::from(spans)).render(inner, buf);

        if !self.hint.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                self.hint,
                Style::default().fg(colors.muted()),
            )))
            .render(rows[2], buf);
        }
    }
}
