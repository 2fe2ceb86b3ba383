use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use shotdeck::View;

fn key(label: &'static str, action: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(label, Style::default().fg(Color::Yellow)),
        Span::raw(action),
    ]
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(view: View, editing: bool) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    // Text input swallows everything except these
    if editing {
        let submit = if view == View::Search {
            ":Search  "
        } else {
            ":Apply  "
        };
        hotkey_spans.extend(key("Enter", submit));
        hotkey_spans.extend(key("Esc", ":Stop editing"));
        return hotkey_spans;
    }

    hotkey_spans.extend(key("Tab/1-4", ":Views  "));
    if view != View::Capture {
        hotkey_spans.extend(key("↑/↓", ":Nav  "));
    }

    match view {
        View::Sessions => {
            hotkey_spans.extend(key("Enter", ":Open  "));
            hotkey_spans.extend(key("/", ":Filter  "));
            hotkey_spans.extend(key("r", ":Reload  "));
        }
        View::SessionDetail => {
            hotkey_spans.extend(key("a", ":Analyze  "));
            hotkey_spans.extend(key("r", ":Reload  "));
            hotkey_spans.extend(key("Esc", ":Back  "));
        }
        View::Capture => {
            hotkey_spans.extend(key("Enter", ":Start/Stop  "));
        }
        View::Search => {
            hotkey_spans.extend(key("/", ":Edit query  "));
            hotkey_spans.extend(key("Enter", ":Search again  "));
        }
        View::Export => {
            hotkey_spans.extend(key("Enter", ":Export  "));
            hotkey_spans.extend(key("h", ":Hero only  "));
            hotkey_spans.extend(key("r", ":Reload  "));
        }
    }

    hotkey_spans.extend(key("c", ":Capture  "));
    hotkey_spans.extend(key("?", ":Help  "));
    hotkey_spans.extend(key("q", ":Quit"));

    hotkey_spans
}

/// Render the hotkey legend for the active view
pub fn render_legend(f: &mut Frame, area: Rect, view: View, editing: bool) {
    let legend = Paragraph::new(Line::from(build_hotkey_spans(view, editing)))
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false });
    f.render_widget(legend, area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(terminal_width: u16, view: View, editing: bool) -> u16 {
    // Count lines without the block; line_count() ignores borders
    let paragraph_for_counting = Paragraph::new(Line::from(build_hotkey_spans(view, editing)))
        .wrap(ratatui::widgets::Wrap { trim: false });

    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    (line_count as u16).saturating_add(2).max(3)
}
