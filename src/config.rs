use std::path::PathBuf;

use serde::Deserialize;

/// Widget version.
#[allow(dead_code)]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// User-Agent header for outgoing requests.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Widget config.
#[derive(Deserialize)]
pub struct Config {
    /// Base URL of the race API, f.e. "https://api.sotn.io".
    ///
    /// A single trailing slash is tolerated; the endpoint path
    /// is joined with exactly one slash in between.
    pub api_base_url: String,

    /// Path of the race-status endpoint, f.e. "/current/race".
    pub race_endpoint: String,

    /// Time between two polls of the race endpoint, in milliseconds.
    ///
    /// Poll cycles are independent: a slow response does not delay
    /// or cancel the next tick.
    pub poll_interval_millis: u64,

    /// Display theme, one of "blue", "light" or "dark".
    /// Missing or unrecognized values fall back to "blue".
    pub theme: Option<String>,
}

impl Config {
    /// Read the config file listed in the `RACEGRID_CONFIG` environment variable.
    ///
    /// # Panics
    /// - when `RACEGRID_CONFIG` is not set
    /// - when `RACEGRID_CONFIG` does not point to a valid TOML config
    /// - when an assertion on one or more values fails
    pub fn read_from_env() -> Config {
        const CONFIG_ENV_VAR: &str = "RACEGRID_CONFIG";

        fn parse_file(f: PathBuf) -> anyhow::Result<Config> {
            let f_str = std::fs::read_to_string(f)?;
            let config: Config = toml::from_str(&f_str)?;
            Ok(config)
        }

        let env_file = match std::env::var(CONFIG_ENV_VAR) {
            Ok(f) => Some(PathBuf::from(f)).filter(|p| p.is_file()),
            Err(_) => None,
        };

        if let Some(f) = env_file {
            let cfg = parse_file(f).expect("failed to parse config file");
            check_config(&cfg);
            return cfg;
        }

        panic!("cannot locate config: use the '{}' env var", CONFIG_ENV_VAR)
    }

    /// The full URL of the race endpoint: base URL and endpoint path,
    /// joined with exactly one slash.
    pub fn race_url(&self) -> String {
        let base = self
            .api_base_url
            .strip_suffix('/')
            .unwrap_or(&self.api_base_url);
        if self.race_endpoint.starts_with('/') {
            format!("{}{}", base, self.race_endpoint)
        } else {
            format!("{}/{}", base, self.race_endpoint)
        }
    }
}

/// Try to catch configuration errors early.
fn check_config(config: &Config) {
    assert!(
        !config.api_base_url.is_empty(),
        "config: 'api_base_url' must not be empty!"
    );
    assert!(
        config.poll_interval_millis > 0,
        "config: 'poll_interval_millis' must be positive!"
    );
}

/// Color theme for the grid display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Blue,
    Light,
    Dark,
}

impl Theme {
    /// Select a theme from its config value. Missing or unrecognized
    /// values fall back to `Blue`.
    pub fn from_param(param: Option<&str>) -> Theme {
        match param.map(|p| p.to_lowercase()).as_deref() {
            Some("light") => Theme::Light,
            Some("dark") => Theme::Dark,
            _ => Theme::Blue,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn config_with_urls(base: &str, endpoint: &str) -> Config {
        Config {
            api_base_url: base.to_string(),
            race_endpoint: endpoint.to_string(),
            poll_interval_millis: 20_000,
            theme: None,
        }
    }

    #[test]
    fn test_race_url_joins_with_one_slash() {
        let expected = "https://api.sotn.io/current/race";
        for (base, endpoint) in &[
            ("https://api.sotn.io", "/current/race"),
            ("https://api.sotn.io/", "/current/race"),
            ("https://api.sotn.io", "current/race"),
            ("https://api.sotn.io/", "current/race"),
        ] {
            assert_eq!(expected, config_with_urls(base, endpoint).race_url());
        }
    }

    #[test]
    fn test_theme_from_param() {
        assert_eq!(Theme::Blue, Theme::from_param(None));
        assert_eq!(Theme::Blue, Theme::from_param(Some("blue")));
        assert_eq!(Theme::Blue, Theme::from_param(Some("solarized")));
        assert_eq!(Theme::Light, Theme::from_param(Some("light")));
        assert_eq!(Theme::Dark, Theme::from_param(Some("Dark")));
    }
}
