use std::fmt;
use std::time::Duration;

use clap::Parser;
use tracing::Level;

use crate::constants::{DEFAULT_DOUBLE_CLICK_MS, DEFAULT_POLL_MS};
use crate::error::FolioError;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "term-folio",
    about = "A portfolio desktop in the terminal",
    version
)]
pub struct Cli {
    /// View to open: `/`, `/dock-demo`, anything else shows the not-found page.
    #[arg(default_value = "/")]
    pub path: String,

    /// Input poll interval in milliseconds (1-1000).
    #[arg(long, default_value_t = DEFAULT_POLL_MS)]
    pub poll_ms: u64,

    /// Maximum gap between the two clicks of a double-click (100-2000 ms).
    #[arg(long, default_value_t = DEFAULT_DOUBLE_CLICK_MS)]
    pub double_click_ms: u64,

    /// Log level for the in-memory log buffer (error, warn, info, debug, trace).
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Start without mouse capture (keyboard only).
    #[arg(long)]
    pub no_mouse: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Desktop,
    DockDemo,
    NotFound(String),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        match path.trim() {
            "" | "/" => Route::Desktop,
            "/dock-demo" => Route::DockDemo,
            other => Route::NotFound(other.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Desktop => "/",
            Route::DockDemo => "/dock-demo",
            Route::NotFound(path) => path,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub route: Route,
    pub poll_interval: Duration,
    pub double_click: Duration,
    pub log_level: Level,
    pub mouse_capture: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            route: Route::Desktop,
            poll_interval: Duration::from_millis(DEFAULT_POLL_MS),
            double_click: Duration::from_millis(DEFAULT_DOUBLE_CLICK_MS),
            log_level: Level::INFO,
            mouse_capture: true,
        }
    }
}

impl TryFrom<&Cli> for Config {
    type Error = FolioError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        if !(1..=1000).contains(&cli.poll_ms) {
            return Err(FolioError::InvalidConfig(format!(
                "--poll-ms must be between 1 and 1000, got {}",
                cli.poll_ms
            )));
        }
        if !(100..=2000).contains(&cli.double_click_ms) {
            return Err(FolioError::InvalidConfig(format!(
                "--double-click-ms must be between 100 and 2000, got {}",
                cli.double_click_ms
            )));
        }
        let log_level = cli.log_level.parse::<Level>().map_err(|_| {
            FolioError::InvalidConfig(format!("unknown log level '{}'", cli.log_level))
        })?;
        Ok(Self {
            route: Route::parse(&cli.path),
            poll_interval: Duration::from_millis(cli.poll_ms),
            double_click: Duration::from_millis(cli.double_click_ms),
            log_level,
            mouse_capture: !cli.no_mouse,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        let mut full = vec!["term-folio"];
        full.extend_from_slice(args);
        Cli::parse_from(full)
    }

    #[test]
    fn defaults_open_the_desktop() {
        let config = Config::try_from(&cli(&[])).unwrap();
        assert_eq!(config.route, Route::Desktop);
        assert_eq!(config.poll_interval, Duration::from_millis(16));
        assert_eq!(config.double_click, Duration::from_millis(500));
        assert!(config.mouse_capture);
    }

    #[test]
    fn route_and_flags_are_parsed() {
        let config = Config::try_from(&cli(&[
            "/dock-demo",
            "--poll-ms",
            "50",
            "--log-level",
            "debug",
            "--no-mouse",
        ]))
        .unwrap();
        assert_eq!(config.route, Route::DockDemo);
        assert_eq!(config.log_level, Level::DEBUG);
        assert!(!config.mouse_capture);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let err = Config::try_from(&cli(&["--poll-ms", "0"])).unwrap_err();
        assert!(matches!(err, FolioError::InvalidConfig(_)));
        let err = Config::try_from(&cli(&["--double-click-ms", "5000"])).unwrap_err();
        assert!(err.to_string().contains("double-click"));
        assert!(Config::try_from(&cli(&["--log-level", "loud"])).is_err());
    }

    #[test]
    fn unknown_paths_route_to_not_found() {
        assert_eq!(Route::parse("/nope"), Route::NotFound("/nope".into()));
        assert_eq!(Route::parse(""), Route::Desktop);
        assert_eq!(Route::NotFound("/x".into()).to_string(), "/x");
    }
}
