// Terminal rendering for the car market pages

pub mod render;
pub mod screens;
pub mod widgets;

use crate::app::App;
use car_market::Route;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(2),
        ])
        .split(f.area());

    render::render_nav(app, f, chunks[0]);

    match app.route {
        Route::Home => screens::home::render_home(app, f, chunks[1]),
        Route::Dashboard => screens::dashboard::render_dashboard(app, f, chunks[1]),
        Route::About => screens::about::render_about(f, chunks[1]),
    }

    render::render_status(app, f, chunks[2]);

    if app.show_help {
        render::render_help(app, f);
    }
}
