use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use shotdeck::api::Stats;
use shotdeck::logic::capture::CaptureIndicator;

/// Recording indicator spans
fn render_capture_status(indicator: &CaptureIndicator) -> Vec<Span<'_>> {
    if indicator.recording {
        vec![
            Span::styled(
                "● REC ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(indicator.label.as_str(), Style::default().fg(Color::Red)),
        ]
    } else {
        vec![Span::styled(
            format!("○ {}", indicator.label),
            Style::default().fg(Color::DarkGray),
        )]
    }
}

/// Render the system info bar at the top of the screen
pub fn render_system_bar(
    f: &mut Frame,
    area: Rect,
    base_url: &str,
    indicator: &CaptureIndicator,
    stats: Option<&Stats>,
) {
    let mut spans = render_capture_status(indicator);
    spans.push(Span::raw(" | "));

    match stats {
        Some(stats) => {
            spans.push(Span::styled("Sessions:", Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(format!(" {}", stats.total_sessions)));
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                "Screenshots:",
                Style::default().fg(Color::Yellow),
            ));
            spans.push(Span::raw(format!(
                " {} ({} analyzed)",
                stats.total_screenshots, stats.analyzed_screenshots
            )));
        }
        None => {
            spans.push(Span::styled(
                format!("No stats from {}", base_url),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    let bar = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Shotdeck"));
    f.render_widget(bar, area);
}
