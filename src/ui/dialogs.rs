use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use shotdeck::model::capture::{FormField, StartForm};

use super::layout::centered_rect;

fn field_line<'a>(label: &'a str, value: &'a str, focused: bool) -> Line<'a> {
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let mut spans = vec![Span::styled(label, label_style), Span::raw(value)];
    if focused {
        spans.push(Span::styled(
            "█",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }
    Line::from(spans)
}

/// Render the start-capture form
pub fn render_start_form(f: &mut Frame, form: &StartForm) {
    let mut lines = vec![
        field_line("Session name: ", &form.name, form.field == FormField::Name),
        Line::default(),
        field_line(
            "Description:  ",
            &form.description,
            form.field == FormField::Description,
        ),
        Line::default(),
    ];
    if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        )));
    }
    lines.push(Line::from(Span::styled(
        "Tab: switch field  Enter: start  Esc: cancel",
        Style::default().fg(Color::DarkGray),
    )));

    let prompt_area = centered_rect(f.area(), 60, 10);
    let prompt = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Start Capture")
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, prompt_area);
    f.render_widget(prompt, prompt_area);
}

/// Render the stop confirmation dialog
pub fn render_stop_confirmation(f: &mut Frame, session: &str) {
    let prompt_text = format!(
        "Stop recording session \"{}\"?\n\n\
        Continue? (y/n)",
        session
    );

    let prompt_area = centered_rect(f.area(), 50, 7);
    let prompt = Paragraph::new(prompt_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Confirm Stop")
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, prompt_area);
    f.render_widget(prompt, prompt_area);
}

/// Render the key reference overlay
pub fn render_help(f: &mut Frame) {
    let rows = [
        ("Tab / Shift-Tab", "Next / previous view"),
        ("1-4", "Sessions, Capture, Search, Export"),
        ("↑/↓ or j/k", "Move selection"),
        ("Enter", "Open / submit"),
        ("Esc", "Back / stop editing"),
        ("/", "Filter sessions or edit search"),
        ("c", "Start or stop capture"),
        ("a", "Analyze open session"),
        ("h", "Toggle hero-only export"),
        ("r", "Reload"),
        ("q", "Quit"),
    ];
    let lines: Vec<Line> = rows
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("{:<16}", key), Style::default().fg(Color::Yellow)),
                Span::raw(*action),
            ])
        })
        .collect();

    let help_area = centered_rect(f.area(), 56, rows.len() as u16 + 2);
    let help = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Keys (? to close)"),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black));

    f.render_widget(Clear, help_area);
    f.render_widget(help, help_area);
}
