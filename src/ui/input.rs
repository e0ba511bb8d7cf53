use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, Screen};
use crate::ui::login::LoginIntent;
use crate::ui::onboard::OnboardIntent;

/// Per-screen key routing. Printable characters go to whichever text input
/// the screen owns; everything else is navigation.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    match app.screen() {
        // The splash runs on its own timer; keys do nothing.
        Screen::Splash => {}
        Screen::Onboarding => handle_onboarding_key(app, key),
        Screen::Login => handle_login_key(app, key),
        Screen::Dashboard => handle_dashboard_key(app, key),
        Screen::Detail { .. } => handle_detail_key(app, key),
    }
}

fn handle_onboarding_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Right | KeyCode::Char(' ') => app.onboard_continue(),
        KeyCode::Left => app.dispatch_onboard(OnboardIntent::Back),
        _ => {}
    }
}

fn handle_login_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'e') {
        app.dispatch_login(LoginIntent::ToggleMask);
        return;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Up | KeyCode::Down => {
            app.dispatch_login(LoginIntent::SwitchField)
        }
        KeyCode::Enter => app.submit_login(),
        KeyCode::Backspace => app.dispatch_login(LoginIntent::Backspace),
        KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
            app.dispatch_login(LoginIntent::TypeChar(c))
        }
        _ => {}
    }
}

fn handle_dashboard_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'r') {
        app.reload_dashboard();
        return;
    }
    if is_ctrl_char(key, 'd') {
        app.logout();
        return;
    }

    match key.code {
        // Esc clears an active search and brings the idle content back.
        KeyCode::Esc => app.clear_search(),
        // Enter submits a pending query; once results (or idle content)
        // are showing it opens the selected recipe.
        KeyCode::Enter => {
            if app.search().state().is_busy() {
                app.search_submit();
            } else {
                app.open_selected_recipe();
            }
        }
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::Backspace => app.search_backspace(),
        KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
            app.search_input_char(c)
        }
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => app.close_detail(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}
