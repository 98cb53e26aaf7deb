use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget};

use crate::ui::components::input_field::InputField;
use crate::ui::line_input::LineInput;
use crate::ui::theme::Theme;

/// Feedback form state the modal renders.
pub enum FeedbackView<'a> {
    Editing {
        name: &'a LineInput,
        email: &'a LineInput,
        message: &'a LineInput,
        focus: usize,
        error: Option<&'a str>,
    },
    Sent,
}

pub struct FeedbackModal<'a> {
    pub view: FeedbackView<'a>,
    pub theme: &'a Theme,
}

impl<'a> FeedbackModal<'a> {
    pub fn new(view: FeedbackView<'a>, theme: &'a Theme) -> Self {
        Self { view, theme }
    }
}

impl Widget for FeedbackModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        Clear.render(area, buf);
        let block = Block::bordered()
            .title(" Share Your Feedback ")
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        match self.view {
            FeedbackView::Sent => {
                let layout = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(0), Constraint::Length(2), Constraint::Min(0)])
                    .split(inner);
                let lines = vec![
                    Line::from(Span::styled(
                        "✓ Thank you!",
                        Style::default()
                            .fg(colors.success())
                            .add_modifier(Modifier::BOLD),
                    ))
                    .centered(),
                    Line::from(Span::styled(
                        "Your feedback has been sent successfully!",
                        Style::default().fg(colors.fg()),
                    ))
                    .centered(),
                ];
                Paragraph::new(lines).render(layout[1], buf);
            }
            FeedbackView::Editing {
                name,
                email,
                message,
                focus,
                error,
            } => {
                let layout = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(1),
                        Constraint::Length(5),
                        Constraint::Length(5),
                        Constraint::Length(5),
                        Constraint::Length(1),
                        Constraint::Min(0),
                        Constraint::Length(1),
                    ])
                    .split(inner);

                Paragraph::new(Line::from(Span::styled(
                    " Have suggestions or found a bug? Let me know!",
                    Style::default().fg(colors.muted()),
                )))
                .render(layout[0], buf);

                InputField::new(" Name", "", name, focus == 0, self.theme).render(layout[1], buf);
                InputField::new(" Email", "", email, focus == 1, self.theme).render(layout[2], buf);
                InputField::new(" Message", "", message, focus == 2, self.theme)
                    .render(layout[3], buf);

                if let Some(error) = error {
                    Paragraph::new(Line::from(Span::styled(
                        format!(" ⚠ {error}"),
                        Style::default().fg(colors.destructive()),
                    )))
                    .render(layout[4], buf);
                }

                Paragraph::new(Line::from(Span::styled(
                    " [Tab] Next field  [Enter] Send  [Esc] Close",
                    Style::default().fg(colors.accent()),
                )))
                .render(layout[6], buf);
            }
        }
    }
}
