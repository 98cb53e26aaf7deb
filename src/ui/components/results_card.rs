use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::engine::Standing;
use crate::engine::attendance;
use crate::ui::theme::Theme;

/// The "your current attendance" card: percentage, counts, standing badge
/// and the pro tip.
pub struct ResultsCard<'a> {
    pub conducted: i64,
    pub attended: i64,
    pub theme: &'a Theme,
}

impl<'a> ResultsCard<'a> {
    pub fn new(conducted: i64, attended: i64, theme: &'a Theme) -> Self {
        Self {
            conducted,
            attended,
            theme,
        }
    }
}

impl Widget for ResultsCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Your current attendance ")
            .border_style(Style::default().fg(colors.border()));
        let inner = block.inner(area);
        block.render(area, buf);

        let percentage = attendance::attendance_percentage(self.conducted, self.attended);
        let standing = Standing::classify(percentage);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        let percent_text = match percentage {
            Some(p) => format!("  {p}%"),
            None => "  —".to_string(),
        };
        let badge_text = standing.map(Standing::badge).unwrap_or("");
        let headline = Line::from(vec![
            Span::styled(
                percent_text,
                Style::default()
                    .fg(colors.percentage(percentage))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("   ", Style::default()),
            Span::styled(badge_text, Style::default().fg(colors.percentage(percentage))),
        ]);
        Paragraph::new(headline).render(layout[0], buf);

        let counts = format!(
            "  {} / {} classes attended",
            self.attended, self.conducted
        );
        Paragraph::new(Line::from(Span::styled(
            counts,
            Style::default().fg(colors.muted()),
        )))
        .render(layout[1], buf);

        if let Some(standing) = standing {
            let tip = Line::from(vec![
                Span::styled("  Pro tip: ", Style::default().fg(colors.accent())),
                Span::styled(standing.tip(), Style::default().fg(colors.fg())),
            ]);
            Paragraph::new(tip)
                .wrap(ratatui::widgets::Wrap { trim: false })
                .render(layout[3], buf);
        }
    }
}
