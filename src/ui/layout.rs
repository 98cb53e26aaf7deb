use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutTier {
    Wide,   // ≥90 cols: entry form and results side by side, like the web page
    Narrow, // <90 cols: stacked vertically
}

impl LayoutTier {
    pub fn from_area(area: Rect) -> Self {
        if area.width >= 90 {
            LayoutTier::Wide
        } else {
            LayoutTier::Narrow
        }
    }

    pub fn side_by_side(&self) -> bool {
        *self == LayoutTier::Wide
    }
}

pub struct AppLayout {
    pub header: Rect,
    pub left: Rect,
    pub right: Rect,
    pub footer: Rect,
    pub tier: LayoutTier,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let tier = LayoutTier::from_area(area);

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(1),
            ])
            .split(area);

        let (left, right) = if tier.side_by_side() {
            let halves = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
                .split(vertical[1]);
            (halves[0], halves[1])
        } else {
            let halves = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(12), Constraint::Min(0)])
                .split(vertical[1]);
            (halves[0], halves[1])
        };

        Self {
            header: vertical[0],
            left,
            right,
            footer: vertical[2],
            tier,
        }
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    const MIN_POPUP_WIDTH: u16 = 48;
    const MIN_POPUP_HEIGHT: u16 = 16;

    let requested_w = area.width.saturating_mul(percent_x.min(100)) / 100;
    let requested_h = area.height.saturating_mul(percent_y.min(100)) / 100;

    let target_w = requested_w.max(MIN_POPUP_WIDTH).min(area.width);
    let target_h = requested_h.max(MIN_POPUP_HEIGHT).min(area.height);

    let left = area
        .x
        .saturating_add((area.width.saturating_sub(target_w)) / 2);
    let top = area
        .y
        .saturating_add((area.height.saturating_sub(target_h)) / 2);

    Rect::new(left, top, target_w, target_h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(
            LayoutTier::from_area(Rect::new(0, 0, 120, 40)),
            LayoutTier::Wide
        );
        assert_eq!(
            LayoutTier::from_area(Rect::new(0, 0, 89, 40)),
            LayoutTier::Narrow
        );
    }

    #[test]
    fn test_wide_layout_splits_horizontally() {
        let layout = AppLayout::new(Rect::new(0, 0, 120, 40));
        assert!(layout.tier.side_by_side());
        assert_eq!(layout.left.y, layout.right.y);
        assert!(layout.left.x < layout.right.x);
    }

    #[test]
    fn test_narrow_layout_stacks() {
        let layout = AppLayout::new(Rect::new(0, 0, 60, 40));
        assert!(!layout.tier.side_by_side());
        assert_eq!(layout.left.x, layout.right.x);
        assert!(layout.left.y < layout.right.y);
    }

    #[test]
    fn test_centered_rect_stays_inside_area() {
        let area = Rect::new(0, 0, 200, 60);
        let rect = centered_rect(50, 50, area);
        assert!(rect.x + rect.width <= area.width);
        assert!(rect.y + rect.height <= area.height);
    }

    #[test]
    fn test_centered_rect_clamps_to_tiny_terminal() {
        let area = Rect::new(0, 0, 30, 10);
        let rect = centered_rect(50, 50, area);
        assert!(rect.width <= area.width);
        assert!(rect.height <= area.height);
    }
}
