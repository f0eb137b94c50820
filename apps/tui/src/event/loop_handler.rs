use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use serde::Serialize;
use std::io::Stdout;
use std::time::Duration;

use car_market::{
    count_by_company, count_by_model, filter_by_name, CarRecord, CountMapping, HighlightStore,
};

use crate::app::{handle_input, App};
use crate::config::AppConfig;
use crate::loader::load_dataset;
use crate::store::JsonFileStore;
use crate::ui;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Aggregates printed by headless runs.
#[derive(Debug, Serialize)]
pub struct HeadlessReport {
    pub total_listings: usize,
    pub by_model: CountMapping,
    pub by_company: CountMapping,
    pub highlighted: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchResult>,
}

#[derive(Debug, Serialize)]
pub struct SearchResult {
    pub query: String,
    pub matches: Vec<CarRecord>,
}

pub fn build_report(cars: &[CarRecord], highlighted: usize, search: Option<&str>) -> HeadlessReport {
    HeadlessReport {
        total_listings: cars.len(),
        by_model: count_by_model(cars),
        by_company: count_by_company(cars),
        highlighted,
        search: search.map(|query| SearchResult {
            query: query.to_string(),
            matches: filter_by_name(cars, query).into_iter().cloned().collect(),
        }),
    }
}

/// Run the application in headless mode (no UI)
pub async fn run_headless(config: &AppConfig, json: bool, search: Option<&str>) -> Result<()> {
    // A broken dataset still produces a report over zero listings.
    let cars = match load_dataset(&config.data_path).await {
        Ok(cars) => cars,
        Err(error) => {
            tracing::warn!(%error, "error loading car data, reporting empty dataset");
            Vec::new()
        }
    };
    let highlights = HighlightStore::load(JsonFileStore::new(&config.store_dir));

    let report = build_report(&cars, highlights.len(), search);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &HeadlessReport) {
    println!("\nCar Market Stats");
    println!("================");
    println!("Total listings: {}", report.total_listings);
    println!("Highlighted cars: {}", report.highlighted);

    println!("\nListings by Model:");
    for (model, count) in report.by_model.iter() {
        println!("- {model}: {count}");
    }

    println!("\nListings by Company:");
    for (company, count) in report.by_company.iter() {
        let percent = report.by_company.percent_of_total(count);
        println!("- {company}: {count} ({percent:.1}%)");
    }

    if let Some(search) = &report.search {
        println!("\nMatches for \"{}\": {}", search.query, search.matches.len());
        for car in &search.matches {
            println!(
                "- {} | {} | {} | {}",
                car.display_name,
                car.price_label(),
                car.status_label(),
                car.province_label()
            );
        }
    }
}

/// Run the main application event loop
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        app.poll_dataset();
        app.update();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(event::poll(EVENT_POLL_TIMEOUT), Ok(true)) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    handle_input(app, key.code);
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    if let Err(error) = terminal.draw(|f| ui::ui(app, f)) {
                        tracing::debug!(%error, "redraw after resize failed");
                    }
                }
                Ok(_) => {}
                Err(error) => tracing::debug!(%error, "failed to read terminal event"),
            }
        }

        // Let the dataset task make progress between frames.
        tokio::task::yield_now().await;
    }
    Ok(())
}
