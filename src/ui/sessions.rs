use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};
use shotdeck::api::Session;
use shotdeck::logic::formatting::{format_created_at, truncate_to_width};
use shotdeck::logic::relevance::score_to_display;
use shotdeck::model::catalog::CatalogModel;
use shotdeck::model::types::LoadState;

use super::{message, render_text_input};

fn session_item(session: &Session, width: usize) -> ListItem<'_> {
    let header = Line::from(vec![
        Span::styled(
            truncate_to_width(&session.name, width.saturating_sub(20)),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format_created_at(&session.created_at),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let mut details = format!(
        "  {} screenshots, {} analyzed",
        session.screenshot_count, session.analyzed_count
    );
    if session.analyzed_count > 0 {
        details.push_str(&format!(
            ", avg relevance {}%",
            score_to_display(session.avg_relevance)
        ));
    }

    let mut lines = vec![header, Line::from(Span::raw(details))];
    if let Some(desc) = session.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(Line::from(Span::styled(
            format!("  {}", truncate_to_width(desc, width.saturating_sub(4))),
            Style::default().fg(Color::Gray),
        )));
    }
    ListItem::new(lines)
}

/// Render the session catalog with its filter box
pub fn render_sessions(f: &mut Frame, area: Rect, catalog: &CatalogModel) {
    let show_filter = catalog.filter_editing || !catalog.filter_query.is_empty();
    let (filter_area, list_area) = if show_filter {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3)])
            .split(area);
        (Some(chunks[0]), chunks[1])
    } else {
        (None, area)
    };

    if let Some(filter_area) = filter_area {
        let title = if catalog.filter_editing {
            " Filter - Enter to apply, Esc to clear "
        } else {
            " Filter (/ to edit) "
        };
        render_text_input(f, filter_area, title, &catalog.filter_query, catalog.filter_editing);
    }

    let visible = catalog.visible();
    let title = if catalog.filter_query.is_empty() {
        format!(" Sessions ({}) ", catalog.sessions.len())
    } else {
        format!(" Sessions ({} of {}) ", visible.len(), catalog.sessions.len())
    };
    let block = Block::default().borders(Borders::ALL).title(title);

    match &catalog.state {
        LoadState::Idle | LoadState::Loading if catalog.sessions.is_empty() => {
            message(f, list_area, block, "Loading sessions…", Color::Gray);
            return;
        }
        LoadState::Failed(err) => {
            message(
                f,
                list_area,
                block,
                &format!("Failed to load sessions: {}", err),
                Color::Red,
            );
            return;
        }
        _ => {}
    }

    if catalog.sessions.is_empty() {
        message(
            f,
            list_area,
            block,
            "No sessions yet. Press c to start capturing.",
            Color::Gray,
        );
        return;
    }
    if visible.is_empty() {
        message(f, list_area, block, "No sessions match the filter", Color::Gray);
        return;
    }

    let width = list_area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = visible.iter().map(|s| session_item(s, width)).collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(catalog.selected);
    f.render_stateful_widget(list, list_area, &mut state);
}

