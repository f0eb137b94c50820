use crate::app::state::App;
use car_market::Route;
use crossterm::event::KeyCode;

mod about;
mod dashboard;
mod help;
mod home;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    // Typed text belongs to the search box while it has focus.
    if app.route == Route::Dashboard && app.dashboard.search_active() && !app.show_help {
        dashboard::handle_search_input(app, key);
        return;
    }

    if help::handle_help_toggle(app, key) {
        return;
    }

    if handle_navigation(app, key) {
        return;
    }

    match app.route {
        Route::Home => home::handle_home_input(app, key),
        Route::Dashboard => dashboard::handle_dashboard_input(app, key),
        Route::About => about::handle_about_input(app, key),
    }
}

/// Keys shared by every page. Returns true when the key was consumed.
fn handle_navigation(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Tab => app.navigate(app.route.next()),
        KeyCode::BackTab => app.navigate(app.route.prev()),
        KeyCode::Char(ch @ '1'..='3') => {
            let index = ch as usize - '1' as usize;
            if let Some(route) = Route::from_index(index) {
                app.navigate(route);
            }
        }
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::JsonFileStore;
    use car_market::{CarId, CarRecord};
    use std::path::PathBuf;

    fn ready_app(name: &str) -> App {
        let dir = std::env::temp_dir().join(format!("car-market-input-{name}-{}", std::process::id()));
        let mut app = App::with_store(JsonFileStore::new(dir), Route::Home, PathBuf::new());
        app.apply_dataset(Ok(vec![
            CarRecord::new(1, "Toyota Camry", "Camry"),
            CarRecord::new(2, "Toyota Corolla", "Corolla"),
            CarRecord::new(3, "Honda Civic", "Civic"),
        ]));
        app
    }

    fn press_all(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            dispatch_input(app, *key);
        }
    }

    #[test]
    fn tab_and_digits_switch_pages() {
        let mut app = ready_app("tabs");

        press_all(&mut app, &[KeyCode::Tab]);
        assert_eq!(app.route, Route::Dashboard);
        press_all(&mut app, &[KeyCode::BackTab, KeyCode::BackTab]);
        assert_eq!(app.route, Route::About);
        press_all(&mut app, &[KeyCode::Char('2')]);
        assert_eq!(app.route, Route::Dashboard);
    }

    #[test]
    fn q_quits_outside_search() {
        let mut app = ready_app("quit");
        press_all(&mut app, &[KeyCode::Char('q')]);
        assert!(!app.running);
    }

    #[test]
    fn help_swallows_keys_until_closed() {
        let mut app = ready_app("help");

        press_all(&mut app, &[KeyCode::F(1), KeyCode::Tab]);
        assert!(app.show_help);
        assert_eq!(app.route, Route::Home);

        press_all(&mut app, &[KeyCode::Esc]);
        assert!(!app.show_help);
    }

    #[test]
    fn search_mode_captures_typed_text() {
        let mut app = ready_app("search");
        app.navigate(Route::Dashboard);

        press_all(
            &mut app,
            &[
                KeyCode::Char('/'),
                KeyCode::Char('q'),
                KeyCode::Backspace,
                KeyCode::Char('c'),
                KeyCode::Char('o'),
                KeyCode::Char('r'),
                KeyCode::Enter,
            ],
        );

        assert!(app.running);
        assert!(!app.dashboard.search_active());
        assert_eq!(app.dashboard.query(), "cor");
        assert_eq!(app.dashboard.visible_cars().len(), 1);
    }

    #[test]
    fn escape_in_search_clears_the_query() {
        let mut app = ready_app("escape");
        app.navigate(Route::Dashboard);

        press_all(&mut app, &[KeyCode::Char('/'), KeyCode::Char('h'), KeyCode::Esc]);

        assert_eq!(app.dashboard.query(), "");
        assert_eq!(app.dashboard.visible_cars().len(), 3);
    }

    #[test]
    fn enter_highlights_the_selected_listing() {
        let mut app = ready_app("enter");
        app.navigate(Route::Dashboard);

        press_all(&mut app, &[KeyCode::Down, KeyCode::Enter]);

        assert!(app.dashboard.is_highlighted(&CarId::Number(2)));
        let _ = std::fs::remove_dir_all(app.dashboard.highlights().storage().dir());
    }

    #[test]
    fn home_space_hides_the_selected_model() {
        let mut app = ready_app("legend");

        press_all(&mut app, &[KeyCode::Down, KeyCode::Down, KeyCode::Char(' ')]);

        assert!(app.home.is_hidden(2));
        assert_eq!(app.home.model_series()[2].value, 0);
    }

    #[test]
    fn about_links_back() {
        let mut app = ready_app("about");
        app.navigate(Route::About);

        press_all(&mut app, &[KeyCode::Char('d')]);

        assert_eq!(app.route, Route::Dashboard);
    }
}
