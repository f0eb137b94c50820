use clap::{CommandFactory, Parser};

#[derive(Debug, Parser)]
#[command(name = "car-market", version, about = "Car Market dashboard")]
pub struct CliArgs {
    /// Print aggregate stats and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless stats as JSON
    #[arg(long)]
    pub json: bool,

    /// In headless mode, also list cars whose name contains this text
    #[arg(long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the listings file
    #[arg(long, value_name = "PATH")]
    pub data: Option<String>,

    /// Override the directory holding highlighted cars
    #[arg(long = "store-dir", value_name = "PATH")]
    pub store_dir: Option<String>,

    /// Page to open first: home, dashboard or about
    #[arg(long, value_name = "PAGE")]
    pub page: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(data) = &self.data {
            std::env::set_var(crate::config::DATA_ENV, data);
        }
        if let Some(dir) = &self.store_dir {
            std::env::set_var(crate::config::STORE_DIR_ENV, dir);
        }
        if let Some(page) = &self.page {
            std::env::set_var(crate::config::PAGE_ENV, page);
        }
        if self.debug {
            std::env::set_var(crate::config::DEBUG_ENV, "1");
        }
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_headless_search() -> Result<(), clap::Error> {
        let args = CliArgs::try_parse_from([
            "car-market",
            "--headless",
            "--json",
            "--search",
            "toyota",
            "--data",
            "cars.json",
        ])?;

        assert!(args.headless);
        assert!(args.json);
        assert_eq!(args.search.as_deref(), Some("toyota"));
        assert_eq!(args.data.as_deref(), Some("cars.json"));
        assert!(args.store_dir.is_none());
        Ok(())
    }

    #[test]
    fn help_mentions_store_dir() {
        assert!(CliArgs::help_text().contains("--store-dir"));
    }
}
