use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Widget};

use crate::ui::theme::Theme;

/// Horizontal bar from 0 to 100%, filled to the given percentage and colored
/// by standing. An undefined percentage renders an empty bar.
pub struct PercentBar<'a> {
    pub label: String,
    pub percentage: Option<i64>,
    pub theme: &'a Theme,
}

impl<'a> PercentBar<'a> {
    pub fn new(label: &str, percentage: Option<i64>, theme: &'a Theme) -> Self {
        Self {
            label: label.to_string(),
            percentage: percentage.map(|p| p.clamp(0, 100)),
            theme,
        }
    }
}

impl Widget for PercentBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(format!(" {} ", self.label))
            .border_style(Style::default().fg(colors.border()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let ratio = self.percentage.unwrap_or(0) as f64 / 100.0;
        let filled_width = (ratio * inner.width as f64) as u16;
        let fill = colors.percentage(self.percentage);

        for x in inner.x..inner.x + inner.width {
            let style = if x < inner.x + filled_width {
                Style::default().fg(colors.bg()).bg(fill)
            } else {
                Style::default().fg(colors.fg()).bg(colors.bar_empty())
            };
            buf[(x, inner.y)].set_style(style);
        }

        let label = match self.percentage {
            Some(p) => format!("{p}%"),
            None => "n/a".to_string(),
        };
        let label_x = inner.x + (inner.width.saturating_sub(label.len() as u16)) / 2;
        buf.set_string(label_x, inner.y, &label, Style::default().fg(colors.fg()));
    }
}
