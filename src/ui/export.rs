use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use shotdeck::model::export::{ExportModel, ExportOutcome};
use shotdeck::model::types::LoadState;

use super::message;

fn status_lines(export: &ExportModel) -> Vec<Line<'_>> {
    let checkbox = if export.hero_only { "[x]" } else { "[ ]" };
    let mut lines = vec![Line::from(vec![
        Span::styled("h", Style::default().fg(Color::Yellow)),
        Span::raw(format!(" {} Hero frames only", checkbox)),
    ])];

    if export.in_flight {
        lines.push(Line::from(Span::styled(
            "Rendering video… this can take several minutes",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
    } else if let Some(validation) = &export.validation {
        lines.push(Line::from(Span::styled(
            validation.as_str(),
            Style::default().fg(Color::Yellow),
        )));
    } else {
        match &export.outcome {
            Some(ExportOutcome::Success(output)) => lines.push(Line::from(vec![
                Span::styled("✓ Exported to ", Style::default().fg(Color::Green)),
                Span::raw(output.as_str()),
            ])),
            Some(ExportOutcome::Failed(err)) => lines.push(Line::from(Span::styled(
                format!("✗ {}", err),
                Style::default().fg(Color::Red),
            ))),
            None => {}
        }
    }

    lines
}

/// Render the export selector and the state of the current export
pub fn render_export(f: &mut Frame, area: Rect, export: &ExportModel) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(4)])
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Export video: choose an analyzed session ");

    match &export.state {
        LoadState::Failed(err) => message(
            f,
            chunks[0],
            block,
            &format!("Failed to load sessions: {}", err),
            Color::Red,
        ),
        LoadState::Idle | LoadState::Loading if export.choices.is_empty() => {
            message(f, chunks[0], block, "Loading sessions…", Color::Gray)
        }
        _ if export.choices.is_empty() => message(
            f,
            chunks[0],
            block,
            "No analyzed sessions to export",
            Color::Gray,
        ),
        _ => {
            let items: Vec<ListItem> = export
                .choices
                .iter()
                .map(|s| {
                    ListItem::new(Line::from(vec![
                        Span::raw(s.name.as_str()),
                        Span::styled(
                            format!("  {} analyzed", s.analyzed_count),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ]))
                })
                .collect();
            let list = List::new(items)
                .block(block)
                .highlight_style(Style::default().bg(Color::DarkGray))
                .highlight_symbol("> ");

            let mut state = ListState::default();
            state.select(export.selected);
            f.render_stateful_widget(list, chunks[0], &mut state);
        }
    }

    let status = Paragraph::new(status_lines(export))
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(status, chunks[1]);
}
