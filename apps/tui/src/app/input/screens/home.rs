use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_home_input(app: &mut App, key: KeyCode) {
    if app.home.is_loading() {
        return;
    }

    match key {
        KeyCode::Up | KeyCode::Left | KeyCode::Char('k') => app.home.select_prev(),
        KeyCode::Down | KeyCode::Right | KeyCode::Char('j') => app.home.select_next(),
        KeyCode::Enter | KeyCode::Char(' ') => app.home.toggle_selected(),
        _ => {}
    }
}
