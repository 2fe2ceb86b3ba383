use ratatui::{
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Tabs,
    Frame,
};
use shotdeck::logic::navigation::tab_index;
use shotdeck::{App, View};

use super::{capture, detail, dialogs, export, layout, legend, search, sessions, system_bar, toast};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &App) {
    let model = &app.model;
    let editing = model.is_editing_text();
    let layout_info = layout::calculate_layout(f.area(), model.view, editing);

    system_bar::render_system_bar(
        f,
        layout_info.system_area,
        app.client().base_url(),
        &model.capture.indicator,
        model.stats.as_ref(),
    );

    let titles: Vec<Line> = View::TABS
        .iter()
        .enumerate()
        .map(|(i, view)| Line::from(format!("{} {}", i + 1, view.as_str())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(tab_index(model.view))
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, layout_info.tabs_area);

    let body = layout_info.body_area;
    match model.view {
        View::Sessions => sessions::render_sessions(f, body, &model.catalog),
        View::SessionDetail => detail::render_detail(f, body, app),
        View::Capture => capture::render_capture(
            f,
            body,
            &model.capture,
            app.config().poll_interval().as_secs(),
        ),
        View::Search => search::render_search(f, body, &model.search),
        View::Export => export::render_export(f, body, &model.export),
    }

    legend::render_legend(f, layout_info.legend_area, model.view, editing);

    // Overlays, lowest first
    if model.ui.show_help && !model.has_modal() {
        dialogs::render_help(f);
    }
    if let Some(form) = &model.capture.start_form {
        dialogs::render_start_form(f, form);
    }
    if let Some(session) = &model.capture.confirm_stop {
        dialogs::render_stop_confirmation(f, session);
    }
    if let Some((message, _)) = &model.ui.toast_message {
        let area = f.area();
        toast::render_toast(f, area, message);
    }
}
