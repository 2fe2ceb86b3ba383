use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use shotdeck::api::{Screenshot, SessionDetail};
use shotdeck::logic::formatting::{format_created_at, truncate_to_width};
use shotdeck::logic::path::ScreenshotSource;
use shotdeck::model::detail::DetailModel;
use shotdeck::model::types::LoadState;
use shotdeck::App;

use super::{message, relevance_span};

fn header_lines<'a>(detail: &'a SessionDetail, model: &DetailModel) -> Vec<Line<'a>> {
    let session = &detail.session;
    let stats = &model.stats;

    let mut lines = vec![Line::from(vec![
        Span::styled(
            session.name.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format_created_at(&session.created_at),
            Style::default().fg(Color::DarkGray),
        ),
    ])];

    if let Some(desc) = session.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(Line::from(Span::styled(desc, Style::default().fg(Color::Gray))));
    }

    lines.push(Line::from(vec![
        Span::styled("Screenshots:", Style::default().fg(Color::Yellow)),
        Span::raw(format!(" {}  ", stats.total)),
        Span::styled("Analyzed:", Style::default().fg(Color::Yellow)),
        Span::raw(format!(" {}  ", stats.analyzed_count)),
        Span::styled("Avg relevance:", Style::default().fg(Color::Yellow)),
        Span::raw(format!(" {}%", stats.avg_relevance)),
    ]));

    if model.analysis_requested {
        lines.push(Line::from(Span::styled(
            "Analysis requested. Press r to reload once it finishes.",
            Style::default().fg(Color::Cyan),
        )));
    } else if model.can_analyze() {
        lines.push(Line::from(vec![
            Span::styled("a", Style::default().fg(Color::Yellow)),
            Span::raw(": analyze this session"),
        ]));
    }

    lines
}

fn screenshot_item(shot: &Screenshot, source: ScreenshotSource, width: usize) -> ListItem<'static> {
    let name = shot
        .file_path
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(shot.file_path.as_str());
    let when = shot.timestamp.as_deref().map(format_created_at).unwrap_or_default();

    let mut first = vec![relevance_span(shot), Span::raw(" ")];
    first.push(Span::raw(truncate_to_width(name, width.saturating_sub(30))));
    if !when.is_empty() {
        first.push(Span::styled(
            format!("  {}", when),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let mut lines = vec![Line::from(first)];
    if let Some(summary) = shot.ai_summary.as_deref().filter(|s| !s.is_empty()) {
        lines.push(Line::from(Span::raw(format!(
            "    {}",
            truncate_to_width(summary, width.saturating_sub(4))
        ))));
    }
    let image = match source {
        ScreenshotSource::Served(url) => Span::styled(
            format!("    {}", truncate_to_width(&url, width.saturating_sub(4))),
            Style::default().fg(Color::Blue),
        ),
        ScreenshotSource::Placeholder => {
            Span::styled("    [broken image]", Style::default().fg(Color::DarkGray))
        }
    };
    lines.push(Line::from(image));

    ListItem::new(lines)
}

/// Render the open session: header with aggregates, then its screenshots
pub fn render_detail(f: &mut Frame, area: Rect, app: &App) {
    let model = &app.model.detail;
    let block = Block::default().borders(Borders::ALL).title(" Session ");

    let detail = match (&model.state, &model.detail) {
        (LoadState::Failed(err), _) => {
            message(
                f,
                area,
                block,
                &format!("Failed to load session: {}", err),
                Color::Red,
            );
            return;
        }
        (_, Some(detail)) => detail,
        _ => {
            message(f, area, block, "Loading session…", Color::Gray);
            return;
        }
    };

    let header = header_lines(detail, model);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header.len() as u16 + 2),
            Constraint::Min(3),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(header)
            .block(block)
            .wrap(Wrap { trim: true }),
        chunks[0],
    );

    let list_block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Screenshots ({}) ", detail.screenshots.len()));
    if detail.screenshots.is_empty() {
        message(f, chunks[1], list_block, "No screenshots in this session", Color::Gray);
        return;
    }

    let width = chunks[1].width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = detail
        .screenshots
        .iter()
        .map(|shot| screenshot_item(shot, app.screenshot_source(shot), width))
        .collect();
    let list = List::new(items)
        .block(list_block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(model.selected_screenshot);
    f.render_stateful_widget(list, chunks[1], &mut state);
}
