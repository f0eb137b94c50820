use crate::config::AppConfig;
use crate::loader::{spawn_dataset_load, DatasetResult};
use crate::store::JsonFileStore;
use car_market::{
    DashboardController, DatasetError, HighlightChange, HomeController, Route,
};
use std::path::PathBuf;
use throbber_widgets_tui::ThrobberState;
use tokio::sync::oneshot::{self, error::TryRecvError};

pub type Dashboard = DashboardController<JsonFileStore>;

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub route: Route,
    pub home: HomeController,
    pub dashboard: Dashboard,
    pub show_help: bool,
    pub status_message: String,
    pub throbber: ThrobberState,
    pub data_path: PathBuf,
    pending_dataset: Option<oneshot::Receiver<DatasetResult>>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_store(
            JsonFileStore::new(&config.store_dir),
            config.start_page,
            config.data_path.clone(),
        )
    }

    pub fn with_store(store: JsonFileStore, route: Route, data_path: PathBuf) -> Self {
        Self {
            running: true,
            route,
            home: HomeController::new(),
            dashboard: DashboardController::new(store),
            show_help: false,
            status_message: String::new(),
            throbber: ThrobberState::default(),
            data_path,
            pending_dataset: None,
        }
    }

    /// Kicks off the one-shot dataset read. Must run inside the tokio runtime.
    pub fn start_loading(&mut self) {
        tracing::info!(path = %self.data_path.display(), "loading car data");
        self.pending_dataset = Some(spawn_dataset_load(self.data_path.clone()));
    }

    /// Hands a finished dataset load to both pages, if one has arrived.
    pub fn poll_dataset(&mut self) {
        let Some(receiver) = self.pending_dataset.as_mut() else {
            return;
        };

        let result = match receiver.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Closed) => Err(DatasetError::Unavailable(
                "dataset loader stopped unexpectedly".to_string(),
            )),
        };
        self.pending_dataset = None;
        self.apply_dataset(result);
    }

    pub fn apply_dataset(&mut self, result: DatasetResult) {
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

    pub fn update(&mut self) {
        if self.home.is_loading() || self.dashboard.is_loading() {
            self.throbber.calc_next();
        }
    }

    pub fn navigate(&mut self, route: Route) {
        if self.route != route {
            tracing::debug!(from = ?self.route, to = ?route, "navigate");
            self.route = route;
            self.dashboard.set_search_active(false);
        }
    }

    /// Adds or removes the selected dashboard car and reports the outcome in
    /// the status line. A failed save keeps the change for this session.
    pub fn toggle_highlight(&mut self) {
        match self.dashboard.toggle_selected() {
            Ok(HighlightChange::Added(car)) => {
                self.status_message = format!("Highlighted {}", car.display_name);
            }
            Ok(HighlightChange::Removed(car)) => {
                self.status_message = format!("Removed {} from highlights", car.display_name);
            }
            Ok(HighlightChange::Nothing) => {}
            Err(error) => {
                tracing::error!(%error, "failed to save highlighted cars");
                self.status_message = format!("Highlight not saved: {error}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use car_market::{CarId, CarRecord, LoadState};

    fn test_app(name: &str) -> App {
        let dir = std::env::temp_dir().join(format!("car-market-app-{name}-{}", std::process::id()));
        App::with_store(JsonFileStore::new(dir), Route::Home, PathBuf::from("unused.json"))
    }

    fn cars() -> Vec<CarRecord> {
        vec![
            CarRecord::new(1, "Toyota Camry", "Camry"),
            CarRecord::new(2, "Honda Civic", "Civic"),
        ]
    }

    #[test]
    fn dataset_reaches_both_pages() {
        let mut app = test_app("both");
        app.apply_dataset(Ok(cars()));

        assert_eq!(app.home.state(), LoadState::Ready);
        assert_eq!(app.dashboard.state(), LoadState::Ready);
        assert_eq!(app.home.companies().len(), 2);
        assert_eq!(app.dashboard.visible_cars().len(), 2);
    }

    #[test]
    fn failed_load_leaves_empty_ready_pages() {
        let mut app = test_app("failed");
        app.apply_dataset(Err(DatasetError::MissingCars));

        assert_eq!(app.home.state(), LoadState::Ready);
        assert!(app.dashboard.visible_cars().is_empty());
        assert!(app.status_message.starts_with("No data available"));
    }

    #[test]
    fn navigation_leaves_search_mode() {
        let mut app = test_app("nav");
        app.dashboard.set_search_active(true);

        app.navigate(Route::About);

        assert_eq!(app.route, Route::About);
        assert!(!app.dashboard.search_active());
    }

    #[test]
    fn toggle_highlight_reports_status() {
        let mut app = test_app("toggle");
        app.apply_dataset(Ok(cars()));

        app.toggle_highlight();
        assert!(app.dashboard.is_highlighted(&CarId::Number(1)));
        assert_eq!(app.status_message, "Highlighted Toyota Camry");

        app.toggle_highlight();
        assert!(!app.dashboard.is_highlighted(&CarId::Number(1)));
        assert_eq!(app.status_message, "Removed Toyota Camry from highlights");

        let _ = std::fs::remove_dir_all(app.dashboard.highlights().storage().dir());
    }

    #[tokio::test]
    async fn polling_picks_up_the_spawned_load() {
        let mut app = test_app("poll");
        app.data_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../data/taladrod-cars.json");
        app.start_loading();

        for _ in 0..200 {
            app.poll_dataset();
            if !app.home.is_loading() {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }

        assert_eq!(app.home.state(), LoadState::Ready);
        assert_eq!(app.home.models().total(), 12);
    }
}
