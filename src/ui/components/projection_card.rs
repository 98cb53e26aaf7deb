use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::engine::projection::Projection;
use crate::ui::theme::Theme;

/// Projected percentage with the up/down delta against the current one, or
/// the validation error, or a nudge to fill the planner fields.
pub struct ProjectionCard<'a> {
    pub current: Option<i64>,
    pub projection: &'a Projection,
    pub theme: &'a Theme,
}

impl<'a> ProjectionCard<'a> {
    pub fn new(current: Option<i64>, projection: &'a Projection, theme: &'a Theme) -> Self {
        Self {
            current,
            projection,
            theme,
        }
    }
}

impl Widget for ProjectionCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        if let Some(ref error) = self.projection.error {
            Paragraph::new(Line::from(Span::styled(
                format!("  ⚠ {error}"),
                Style::default().fg(colors.destructive()),
            )))
            .render(area, buf);
            return;
        }

        let Some(projected) = self.projection.percentage else {
            Paragraph::new(Line::from(Span::styled(
                "  Fill both fields to see your projected attendance",
                Style::default().fg(colors.muted()),
            )))
            .render(area, buf);
            return;
        };

        let mut spans = vec![
            Span::styled("  Projected: ", Style::default().fg(colors.fg())),
            Span::styled(
                format!("{projected}%"),
                Style::default()
                    .fg(colors.percentage(Some(projected)))
                    .add_modifier(Modifier::BOLD),
            ),
        ];

        if let Some(current) = self.current {
            let rising = projected >= current;
            let arrow = if rising { "↑" } else { "↓" };
            let word = if rising { "increase" } else { "decrease" };
            spans.push(Span::styled(
                format!("  {arrow} {}% {word} vs current", (projected - current).abs()),
                Style::default().fg(colors.percentage(Some(projected))),
            ));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
