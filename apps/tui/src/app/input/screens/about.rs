use crate::app::state::App;
use car_market::Route;
use crossterm::event::KeyCode;

pub fn handle_about_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('h') | KeyCode::Esc => app.navigate(Route::Home),
        KeyCode::Char('d') => app.navigate(Route::Dashboard),
        _ => {}
    }
}
