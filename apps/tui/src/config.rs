use car_market::dataset::DEFAULT_DATASET_FILE;
use car_market::Route;
use color_eyre::eyre::eyre;
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

pub const DATA_ENV: &str = "CAR_MARKET_DATA";
pub const STORE_DIR_ENV: &str = "CAR_MARKET_STORE_DIR";
pub const LOG_FILE_ENV: &str = "CAR_MARKET_LOG_FILE";
pub const PAGE_ENV: &str = "CAR_MARKET_PAGE";
pub const DEBUG_ENV: &str = "DEBUG";

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_STORE_DIR: &str = ".car-market";
const DEFAULT_LOG_FILE: &str = "car-market.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Listings file read once at startup
    pub data_path: PathBuf,
    /// Directory standing in for browser local storage
    pub store_dir: PathBuf,
    pub log_file: PathBuf,
    pub start_page: Route,
    pub debug: bool,
}

/// Loads `.env`, then reads the configuration from the environment.
/// Relative paths are resolved against the current directory.
pub fn init_app_config() -> color_eyre::eyre::Result<AppConfig> {
    dotenv().ok();

    let base_dir = env::current_dir()?;
    let lookup = |key: &str| env::var(key).ok();
    let mut config = config_from_lookup(lookup)?;

    for path in [
        &mut config.data_path,
        &mut config.store_dir,
        &mut config.log_file,
    ] {
        if path.is_relative() {
            *path = base_dir.join(&*path);
        }
    }

    Ok(config)
}

fn config_from_lookup(
    lookup: impl Fn(&str) -> Option<String>,
) -> color_eyre::eyre::Result<AppConfig> {
    let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    let start_page = match non_empty(PAGE_ENV) {
        Some(page) => {
            Route::parse(&page).ok_or_else(|| eyre!("Unknown page '{page}' in {PAGE_ENV}"))?
        }
        None => Route::Home,
    };

    Ok(AppConfig {
        data_path: non_empty(DATA_ENV).map_or_else(
            || PathBuf::from(DEFAULT_DATA_DIR).join(DEFAULT_DATASET_FILE),
            PathBuf::from,
        ),
        store_dir: non_empty(STORE_DIR_ENV).map_or_else(|| PathBuf::from(DEFAULT_STORE_DIR), PathBuf::from),
        log_file: non_empty(LOG_FILE_ENV).map_or_else(|| PathBuf::from(DEFAULT_LOG_FILE), PathBuf::from),
        start_page,
        debug: non_empty(DEBUG_ENV).is_some_and(|value| value != "0"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() -> color_eyre::eyre::Result<()> {
        let config = config_from_lookup(lookup_in(&[]))?;

        assert_eq!(config.data_path, PathBuf::from("data/taladrod-cars.json"));
        assert_eq!(config.store_dir, PathBuf::from(".car-market"));
        assert_eq!(config.start_page, Route::Home);
        assert!(!config.debug);
        Ok(())
    }

    #[test]
    fn environment_overrides_defaults() -> color_eyre::eyre::Result<()> {
        let config = config_from_lookup(lookup_in(&[
            (DATA_ENV, "/srv/cars.json"),
            (STORE_DIR_ENV, "state"),
            (PAGE_ENV, "dashboard"),
            (DEBUG_ENV, "1"),
        ]))?;

        assert_eq!(config.data_path, PathBuf::from("/srv/cars.json"));
        assert_eq!(config.store_dir, PathBuf::from("state"));
        assert_eq!(config.start_page, Route::Dashboard);
        assert!(config.debug);
        Ok(())
    }

    #[test]
    fn blank_values_fall_back_to_defaults() -> color_eyre::eyre::Result<()> {
        let config = config_from_lookup(lookup_in(&[(DATA_ENV, "  "), (DEBUG_ENV, "0")]))?;

        assert_eq!(config.data_path, PathBuf::from("data/taladrod-cars.json"));
        assert!(!config.debug);
        Ok(())
    }

    #[test]
    fn unknown_page_is_an_error() {
        assert!(config_from_lookup(lookup_in(&[(PAGE_ENV, "garage")])).is_err());
    }
}
