// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (system bar, tabs, body, legend)
// - render: Main orchestration function that coordinates all rendering
// - system_bar: Renders top bar (recording indicator, backend stats)
// - sessions / detail / capture / search / export: One renderer per view
// - legend: Renders hotkey legend for the active view
// - dialogs: Start-capture form, stop confirmation, help overlay
// - toast: Renders toast notifications (brief pop-up messages)

pub mod capture;
pub mod detail;
pub mod dialogs;
pub mod export;
pub mod layout;
pub mod legend;
pub mod render;
pub mod search;
pub mod sessions;
pub mod system_bar;
pub mod toast;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use shotdeck::api::Screenshot;
use shotdeck::logic::relevance::{bucket, display_relevance, RelevanceBucket};

pub use render::render;

/// Fill a bordered area with a single status message
pub(crate) fn message(f: &mut Frame, area: Rect, block: Block, text: &str, color: Color) {
    let paragraph = Paragraph::new(text)
        .block(block)
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

/// Single-line text input with a cursor while active
pub(crate) fn render_text_input(f: &mut Frame, area: Rect, title: &str, text: &str, active: bool) {
    let border_color = if active { Color::Cyan } else { Color::Gray };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(border_color));

    let line = if active {
        Line::from(vec![
            Span::raw(text),
            Span::styled(
                "█",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
        ])
    } else {
        Line::from(Span::styled(text, Style::default().fg(Color::Gray)))
    };

    f.render_widget(Paragraph::new(line).block(block), area);
}

/// Relevance badge colored by bucket, or a dim marker for unanalyzed shots
pub(crate) fn relevance_span(shot: &Screenshot) -> Span<'static> {
    if !shot.analyzed {
        return Span::styled("[ -- ]", Style::default().fg(Color::DarkGray));
    }
    let display = display_relevance(shot);
    let color = match bucket(display) {
        RelevanceBucket::High => Color::Green,
        RelevanceBucket::Medium => Color::Yellow,
        RelevanceBucket::Low => Color::Red,
    };
    Span::styled(
        format!("[{:>3}%]", display),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}
