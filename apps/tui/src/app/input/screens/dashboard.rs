use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_dashboard_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('/' | 's') => app.dashboard.set_search_active(true),
        KeyCode::Char('c') => app.dashboard.clear_query(),
        KeyCode::Left | KeyCode::Right | KeyCode::Char('h') => app.dashboard.toggle_pane(),
        KeyCode::Up | KeyCode::Char('k') => app.dashboard.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.dashboard.select_next(),
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_highlight(),
        KeyCode::Esc => {
            if app.dashboard.query().is_empty() {
                app.navigate(car_market::Route::Home);
            } else {
                app.dashboard.clear_query();
            }
        }
        _ => {}
    }
}

pub fn handle_search_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Enter | KeyCode::Down => app.dashboard.set_search_active(false),
        KeyCode::Esc => {
            app.dashboard.clear_query();
            app.dashboard.set_search_active(false);
        }
        KeyCode::Backspace => app.dashboard.pop_query_char(),
        KeyCode::Char(ch) => app.dashboard.push_query_char(ch),
        _ => {}
    }
}
