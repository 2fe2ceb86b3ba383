//! Keyboard Input Handler
//!
//! Translates key presses into App operations. Modal dialogs take input
//! first, then focused text fields, then global keys, then view keys.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::logic::validation::ValidationError;
use crate::{App, View};

/// Handle keyboard input
pub async fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.model.ui.should_quit = true;
        return;
    }

    // Stop confirmation
    if app.model.capture.confirm_stop.is_some() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_stop(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_stop(),
            _ => {} // Ignore other keys while prompt is showing
        }
        return;
    }

    // Start form
    if let Some(form) = app.model.capture.start_form.as_mut() {
        match key.code {
            KeyCode::Esc => app.cancel_start_form(),
            KeyCode::Enter => {
                // Validation message is stored on the form
                let _ = app.submit_start_form();
            }
            KeyCode::Tab | KeyCode::BackTab => form.toggle_field(),
            KeyCode::Backspace => {
                form.active_text_mut().pop();
            }
            KeyCode::Char(c) => {
                form.error = None;
                form.active_text_mut().push(c);
            }
            _ => {}
        }
        app.notify_changed();
        return;
    }

    if app.model.is_editing_text() {
        handle_text_input(app, key);
        return;
    }

    // Global keys
    match key.code {
        KeyCode::Char('q') => {
            app.model.ui.should_quit = true;
            return;
        }
        KeyCode::Tab => {
            app.next_view();
            return;
        }
        KeyCode::BackTab => {
            app.prev_view();
            return;
        }
        KeyCode::Char(c @ '1'..='4') => {
            let idx = c as usize - '1' as usize;
            app.switch_view(View::TABS[idx]);
            return;
        }
        KeyCode::Char('c') => {
            app.toggle_capture();
            return;
        }
        KeyCode::Char('?') => {
            app.model.ui.show_help = !app.model.ui.show_help;
            app.notify_changed();
            return;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_prev();
            return;
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next();
            return;
        }
        _ => {}
    }

    match app.model.view {
        View::Sessions => match key.code {
            KeyCode::Enter => app.open_selected_session(),
            KeyCode::Char('/') => {
                app.model.catalog.filter_editing = true;
                app.notify_changed();
            }
            KeyCode::Char('r') => app.load_sessions(),
            _ => {}
        },

        View::SessionDetail => match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => app.back(),
            KeyCode::Char('r') => app.reload_detail(),
            KeyCode::Char('a') => {
                if let Err(e) = app.analyze_current() {
                    app.model.show_toast(format!("Error: {}", e));
                    app.notify_changed();
                }
            }
            _ => {}
        },

        View::Capture => {
            if key.code == KeyCode::Enter {
                app.toggle_capture();
            }
        }

        View::Search => match key.code {
            KeyCode::Char('/') | KeyCode::Char('i') => {
                app.model.search.editing = true;
                app.notify_changed();
            }
            KeyCode::Enter => {
                let _ = app.submit_search();
            }
            _ => {}
        },

        View::Export => match key.code {
            KeyCode::Enter => {
                if let Err(ValidationError::ExportInFlight) = app.submit_export() {
                    app.model
                        .show_toast(format!("Error: {}", ValidationError::ExportInFlight));
                    app.notify_changed();
                }
            }
            KeyCode::Char('h') => app.toggle_hero_only(),
            KeyCode::Char('r') => app.load_export_choices(),
            _ => {}
        },
    }
}

/// Keystrokes for the catalog filter or the search input
fn handle_text_input(app: &mut App, key: KeyEvent) {
    // View switching stays available while typing
    match key.code {
        KeyCode::Tab => return app.next_view(),
        KeyCode::BackTab => return app.prev_view(),
        _ => {}
    }

    match app.model.view {
        View::Sessions => match key.code {
            KeyCode::Esc => {
                app.model.catalog.filter_editing = false;
                app.set_catalog_filter(String::new());
            }
            KeyCode::Enter | KeyCode::Down => {
                app.model.catalog.filter_editing = false;
                app.notify_changed();
            }
            KeyCode::Backspace => app.pop_filter_char(),
            KeyCode::Char(c) => app.push_filter_char(c),
            _ => {}
        },

        View::Search => {
            let search = &mut app.model.search;
            match key.code {
                KeyCode::Esc => search.editing = false,
                KeyCode::Enter => {
                    let _ = app.submit_search();
                }
                KeyCode::Backspace => {
                    search.input.pop();
                    search.validation = None;
                }
                KeyCode::Char(c) => {
                    search.input.push(c);
                    search.validation = None;
                }
                _ => {}
            }
            app.notify_changed();
        }

        _ => {}
    }
}
