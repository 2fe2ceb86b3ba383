//! Search View
//!
//! Query input box on top, outcome of the latest submitted query below.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};
use shotdeck::api::SearchResult;
use shotdeck::logic::formatting::truncate_to_width;
use shotdeck::model::search::{SearchModel, SearchState};

use super::{message, relevance_span, render_text_input};

fn result_item(result: &SearchResult, width: usize) -> ListItem<'static> {
    let shot = &result.screenshot;
    let session = result.session_name.as_deref().unwrap_or("unknown session");

    let mut lines = vec![Line::from(vec![
        relevance_span(shot),
        Span::raw(" "),
        Span::styled(session.to_string(), Style::default().fg(Color::Cyan)),
    ])];

    let summary = shot.ai_summary.as_deref().unwrap_or("(no summary)");
    lines.push(Line::from(Span::raw(format!(
        "    {}",
        truncate_to_width(summary, width.saturating_sub(4))
    ))));

    ListItem::new(lines)
}

/// Render the search input and results
pub fn render_search(f: &mut Frame, area: Rect, search: &SearchModel) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let title = if search.editing {
        " Search - Enter to submit, Esc to leave ".to_string()
    } else {
        " Search (/ to edit) ".to_string()
    };
    render_text_input(f, chunks[0], &title, &search.input, search.editing);

    let block = Block::default().borders(Borders::ALL).title(" Results ");

    if let Some(validation) = &search.validation {
        message(f, chunks[1], block, validation, Color::Yellow);
        return;
    }

    match &search.state {
        SearchState::Idle => {
            message(f, chunks[1], block, "Search screenshot summaries", Color::Gray)
        }
        SearchState::Searching => message(f, chunks[1], block, "Searching…", Color::Gray),
        SearchState::NoResults => message(
            f,
            chunks[1],
            block,
            &format!(
                "No results for \"{}\"",
                search.submitted.as_deref().unwrap_or_default()
            ),
            Color::Gray,
        ),
        SearchState::Failed(err) => message(
            f,
            chunks[1],
            block,
            &format!("Search failed: {}", err),
            Color::Red,
        ),
        SearchState::Results(results) => {
            let width = chunks[1].width.saturating_sub(4) as usize;
            let items: Vec<ListItem> = results.iter().map(|r| result_item(r, width)).collect();
            let list = List::new(items)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(format!(" Results ({}) ", results.len())),
                )
                .highlight_style(Style::default().bg(Color::DarkGray))
                .highlight_symbol("> ");

            let mut state = ListState::default();
            state.select(search.selected);
            f.render_stateful_widget(list, chunks[1], &mut state);
        }
    }
}
