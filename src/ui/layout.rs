use ratatui::layout::{Constraint, Direction, Layout, Rect};
use shotdeck::View;

/// Layout information for rendering
pub struct LayoutInfo {
    /// Top system info bar area
    pub system_area: Rect,
    /// Tab bar below the system bar
    pub tabs_area: Rect,
    /// Active view
    pub body_area: Rect,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect, view: View, editing: bool) -> LayoutInfo {
    let legend_height = super::legend::calculate_legend_height(terminal_size.width, view, editing);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // System info bar (border, text, border)
            Constraint::Length(1),             // Tabs
            Constraint::Min(3),                // View body
            Constraint::Length(legend_height), // Legend (exact fit for wrapped content)
        ])
        .split(terminal_size);

    LayoutInfo {
        system_area: chunks[0],
        tabs_area: chunks[1],
        body_area: chunks[2],
        legend_area: chunks[3],
    }
}

/// Rect of the given size centered in `area`, clamped to fit
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fills_terminal() {
        let size = Rect::new(0, 0, 120, 40);
        let layout = calculate_layout(size, View::Sessions, false);
        assert_eq!(layout.system_area.height, 3);
        assert_eq!(layout.tabs_area.height, 1);
        assert_eq!(
            layout.system_area.height
                + layout.tabs_area.height
                + layout.body_area.height
                + layout.legend_area.height,
            40
        );
    }

    #[test]
    fn test_centered_rect_clamps() {
        let area = Rect::new(0, 0, 20, 10);
        let rect = centered_rect(area, 60, 4);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.x, 0);
        assert_eq!(rect.y, 3);
    }
}
