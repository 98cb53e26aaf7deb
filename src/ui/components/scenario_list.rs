use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::engine::attendance;
use crate::engine::projection::{self, Scenario};
use crate::ui::theme::Theme;

/// The canned what-if list: each row shows a scenario, the resulting
/// percentage and the signed diff from the current one.
pub struct ScenarioList<'a> {
    pub conducted: i64,
    pub attended: i64,
    pub scenarios: Vec<Scenario>,
    pub theme: &'a Theme,
}

impl<'a> ScenarioList<'a> {
    pub fn new(conducted: i64, attended: i64, hours_per_class: i64, theme: &'a Theme) -> Self {
        Self {
            conducted,
            attended,
            scenarios: projection::scenarios(hours_per_class),
            theme,
        }
    }
}

impl Widget for ScenarioList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Quick scenarios ")
            .border_style(Style::default().fg(colors.border()));
        let inner = block.inner(area);
        block.render(area, buf);

        let current = attendance::attendance_percentage(self.conducted, self.attended);

        let mut lines: Vec<Line> = Vec::new();
        for scenario in &self.scenarios {
            let projected =
                projection::scenario_percentage(self.conducted, self.attended, scenario);
            let (percent_text, diff_text) = match (projected, current) {
                (Some(p), Some(c)) => {
                    let diff = p - c;
                    let sign = if diff >= 0 { "+" } else { "" };
                    (format!("{p}%"), format!("  ({sign}{diff}% from current)"))
                }
                (Some(p), None) => (format!("{p}%"), String::new()),
                (None, _) => ("n/a".to_string(), String::new()),
            };

            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<34}", scenario.label),
                    Style::default().fg(colors.fg()),
                ),
                Span::styled(
                    percent_text,
                    Style::default()
                        .fg(colors.percentage(projected))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(diff_text, Style::default().fg(colors.muted())),
            ]));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}
