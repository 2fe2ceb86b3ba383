use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use shotdeck::model::capture::CaptureModel;

/// Render the capture control panel
pub fn render_capture(f: &mut Frame, area: Rect, capture: &CaptureModel, poll_secs: u64) {
    let indicator = &capture.indicator;

    let status_line = if indicator.recording {
        Line::from(vec![
            Span::styled(
                "● RECORDING",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(indicator.label.as_str(), Style::default().fg(Color::Red)),
        ])
    } else {
        Line::from(Span::styled(
            format!("○ {}", indicator.label),
            Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        ))
    };

    let mut lines = vec![Line::default(), status_line, Line::default()];

    if capture.toggle_pending {
        lines.push(Line::from(Span::styled(
            "Checking capture status…",
            Style::default().fg(Color::Yellow),
        )));
    } else if capture.mutation_pending {
        lines.push(Line::from(Span::styled(
            "Waiting for the backend…",
            Style::default().fg(Color::Yellow),
        )));
    } else {
        lines.push(Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(format!(": {}", indicator.action.as_str())),
        ]));
    }

    let checked = match capture.last_checked {
        Some(at) => format!(
            "Status checked {}s ago (every {}s)",
            at.elapsed().as_secs(),
            poll_secs
        ),
        None => "Waiting for first status…".to_string(),
    };
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        checked,
        Style::default().fg(Color::DarkGray),
    )));

    let panel = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Capture "))
        .alignment(Alignment::Center);
    f.render_widget(panel, area);
}
