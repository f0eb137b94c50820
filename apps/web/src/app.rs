use car_market::{
    CarRecord, DashboardController, DatasetError, HighlightChange, HomeController,
    KeyValueStore, Route,
};
use ratzilla::event::KeyCode;

/// Page state shared by the draw and key callbacks.
pub struct WebApp<S> {
    pub route: Route,
    pub home: HomeController,
    pub dashboard: DashboardController<S>,
    pub status_message: String,
}

impl<S: KeyValueStore> WebApp<S> {
    pub fn new(storage: S, route: Route) -> Self {
        Self {
            route,
            home: HomeController::new(),
            dashboard: DashboardController::new(storage),
            status_message: String::new(),
        }
    }

    pub fn apply_dataset(&mut self, result: Result<Vec<CarRecord>, DatasetError>) {
        match result {
            Ok(cars) => {
                self.home.finish_loading(Ok(cars.clone()));
                self.dashboard.finish_loading(Ok(cars));
            }
            Err(error) => {
                let message = error.to_string();
                self.status_message = format!("No data available ({message})");
                self.home.finish_loading(Err(error));
                self.dashboard
                    .finish_loading(Err(DatasetError::Unavailable(message)));
            }
        }
    }

    /// Returns the new route when the key changed pages.
    pub fn handle_key(&mut self, code: KeyCode, shift: bool) -> Option<Route> {
        let before = self.route;

        if self.route == Route::Dashboard && self.dashboard.search_active() {
            self.handle_search_key(code);
            return None;
        }

        match code {
            KeyCode::Tab if shift => self.navigate(self.route.prev()),
            KeyCode::Tab => self.navigate(self.route.next()),
            KeyCode::Char(ch @ '1'..='3') => {
                if let Some(route) = Route::from_index(ch as usize - '1' as usize) {
                    self.navigate(route);
                }
            }
            _ => match self.route {
                Route::Home => self.handle_home_key(code),
                Route::Dashboard => self.handle_dashboard_key(code),
                Route::About => self.handle_about_key(code),
            },
        }

        (self.route != before).then_some(self.route)
    }

    pub fn navigate(&mut self, route: Route) {
        self.route = route;
        self.dashboard.set_search_active(false);
    }

    fn handle_home_key(&mut self, code: KeyCode) {
        if self.home.is_loading() {
            return;
        }
        match code {
            KeyCode::Up | KeyCode::Left => self.home.select_prev(),
            KeyCode::Down | KeyCode::Right => self.home.select_next(),
            KeyCode::Enter | KeyCode::Char(' ') => self.home.toggle_selected(),
            _ => {}
        }
    }

    fn handle_dashboard_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('/' | 's') => self.dashboard.set_search_active(true),
            KeyCode::Char('c') => self.dashboard.clear_query(),
            KeyCode::Left | KeyCode::Right => self.dashboard.toggle_pane(),
            KeyCode::Up => self.dashboard.select_prev(),
            KeyCode::Down => self.dashboard.select_next(),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_highlight(),
            KeyCode::Esc => {
                if self.dashboard.query().is_empty() {
                    self.navigate(Route::Home);
                } else {
                    self.dashboard.clear_query();
                }
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Down => self.dashboard.set_search_active(false),
            KeyCode::Esc => {
                self.dashboard.clear_query();
                self.dashboard.set_search_active(false);
            }
            KeyCode::Backspace => self.dashboard.pop_query_char(),
            KeyCode::Char(ch) => self.dashboard.push_query_char(ch),
            _ => {}
        }
    }

    fn handle_about_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('h') | KeyCode::Esc => self.navigate(Route::Home),
            KeyCode::Char('d') => self.navigate(Route::Dashboard),
            _ => {}
        }
    }

    fn toggle_highlight(&mut self) {
        match self.dashboard.toggle_selected() {
            Ok(HighlightChange::Added(car)) => {
                self.status_message = format!("Highlighted {}", car.display_name);
            }
            Ok(HighlightChange::Removed(car)) => {
                self.status_message = format!("Removed {} from highlights", car.display_name);
            }
            Ok(HighlightChange::Nothing) => {}
            Err(error) => {
                web_sys::console::error_1(
                    &format!("Failed to save highlighted cars: {error}").into(),
                );
                self.status_message = format!("Highlight not saved: {error}");
            }
        }
    }
}
