use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Cell, Paragraph, Row, Table, Widget};

use crate::engine::Standing;
use crate::roster::Roster;
use crate::ui::theme::Theme;

/// All tracked courses plus the weighted average footer.
pub struct CourseTable<'a> {
    pub roster: &'a Roster,
    pub selected: usize,
    pub theme: &'a Theme,
}

impl<'a> CourseTable<'a> {
    pub fn new(roster: &'a Roster, selected: usize, theme: &'a Theme) -> Self {
        Self {
            roster,
            selected,
            theme,
        }
    }
}

impl Widget for CourseTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Courses ")
            .border_style(Style::default().fg(colors.border()));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.roster.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "  No courses yet. Add one above to get started.",
                Style::default().fg(colors.muted()),
            )))
            .render(inner, buf);
            return;
        }

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        let header = Row::new(["Course", "Conducted", "Attended", "Percentage", "Status"])
            .style(
                Style::default()
                    .fg(colors.muted())
                    .add_modifier(Modifier::BOLD),
            );

        let rows: Vec<Row> = self
            .roster
            .courses()
            .iter()
            .enumerate()
            .map(|(i, course)| {
                let percentage = course.percentage();
                let percent_text = match percentage {
                    Some(p) => format!("{p}%"),
                    None => "—".to_string(),
                };
                let status_text = course.standing().map(Standing::label).unwrap_or("—");

                let row_style = if i == self.selected {
                    Style::default().bg(colors.header_bg())
                } else {
                    Style::default()
                };

                Row::new(vec![
                    Cell::from(course.name.clone()).style(Style::default().fg(colors.fg())),
                    Cell::from(course.conducted.to_string())
                        .style(Style::default().fg(colors.fg())),
                    Cell::from(course.attended.to_string()).style(Style::default().fg(colors.fg())),
                    Cell::from(percent_text).style(Style::default().fg(colors.percentage(percentage))),
                    Cell::from(status_text).style(Style::default().fg(colors.percentage(percentage))),
                ])
                .style(row_style)
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Min(16),
                Constraint::Length(10),
                Constraint::Length(9),
                Constraint::Length(11),
                Constraint::Length(8),
            ],
        )
        .header(header);
        table.render(layout[0], buf);

        let average = self.roster.average();
        let average_text = match average {
            Some(p) => format!("{p}%"),
            None => "n/a".to_string(),
        };
        let footer = Line::from(vec![
            Span::styled(
                "Average attendance (weighted): ",
                Style::default().fg(colors.muted()),
            ),
            Span::styled(
                average_text,
                Style::default()
                    .fg(colors.percentage(average))
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        Paragraph::new(footer).render(layout[1], buf);
    }
}
