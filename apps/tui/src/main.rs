use car_market_tui::cli::CliArgs;
use car_market_tui::config::init_app_config;
use car_market_tui::logging::{init_logging, LogTarget};
use car_market_tui::{event, terminal, App};
use clap::Parser;
use color_eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    args.apply_env_overrides();

    // Setup error handling
    color_eyre::install()?;

    let config = init_app_config()?;

    // Piped output gets the plain report instead of the UI.
    if args.headless || !is_terminal() {
        init_logging(LogTarget::Stderr, config.debug)?;
        return event::run_headless(&config, args.json, args.search.as_deref()).await;
    }

    init_logging(LogTarget::File(&config.log_file), config.debug)?;
    tracing::info!(
        data = %config.data_path.display(),
        store = %config.store_dir.display(),
        "starting car market dashboard"
    );

    let mut app = App::new(&config);
    app.start_loading();

    let mut terminal = terminal::setup()?;

    let result = event::run(&mut terminal, &mut app).await;

    terminal::cleanup(true, true);

    if let Err(error) = &result {
        tracing::error!(%error, "dashboard exited with an error");
    }
    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
