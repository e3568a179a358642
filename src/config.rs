//! Application configuration
//! Layers an optional `co2_dashboard.toml` and `CO2_DASHBOARD_*` environment
//! variables over built-in defaults.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::warn;

/// Country counts offered by the control panel.
pub const TOP_N_OPTIONS: [usize; 5] = [3, 5, 10, 20, 30];

const CONFIG_FILE: &str = "co2_dashboard";
const ENV_PREFIX: &str = "CO2_DASHBOARD";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Semicolon-delimited emissions file.
    pub co2_path: PathBuf,
    /// Comma-delimited country/continent lookup.
    pub geo_path: PathBuf,
    pub default_start_year: i64,
    pub default_end_year: i64,
    pub default_top_n: usize,
    pub export_width: u32,
    pub export_height: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            co2_path: PathBuf::from("data").join("CO2_per_capita.csv"),
            geo_path: PathBuf::from("data").join("geo_data.csv"),
            default_start_year: 2008,
            default_end_year: 2011,
            default_top_n: 10,
            export_width: 1200,
            export_height: 700,
        }
    }
}

impl AppConfig {
    /// Load from `co2_dashboard.{toml,json,...}` in the working directory (if any)
    /// and the environment.
    pub fn load() -> anyhow::Result<Self> {
        let cfg = Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;
        Self::from_config(cfg)
    }

    /// Deserialize a built configuration on top of the defaults.
    fn from_config(cfg: Config) -> anyhow::Result<Self> {
        let parsed: Self = cfg.try_deserialize()?;
        Ok(parsed.validated())
    }

    fn validated(mut self) -> Self {
        if !TOP_N_OPTIONS.contains(&self.default_top_n) {
            let fallback = Self::default().default_top_n;
            warn!(
                requested = self.default_top_n,
                fallback, "default_top_n is not one of {:?}, using fallback", TOP_N_OPTIONS
            );
            self.default_top_n = fallback;
        }
        if self.default_start_year > self.default_end_year {
            warn!(
                start = self.default_start_year,
                end = self.default_end_year,
                "default year range is inverted, swapping"
            );
            std::mem::swap(&mut self.default_start_year, &mut self.default_end_year);
        }
        if self.export_width == 0 || self.export_height == 0 {
            let defaults = Self::default();
            warn!("export dimensions must be non-zero, using defaults");
            self.export_width = defaults.export_width;
            self.export_height = defaults.export_height;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> anyhow::Result<AppConfig> {
        let cfg = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        AppConfig::from_config(cfg)
    }

    #[test]
    fn empty_document_yields_defaults() {
        let cfg = from_toml("").unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn overrides_paths_and_years() {
        let cfg = from_toml(
            r#"
            co2_path = "/tmp/co2.csv"
            default_start_year = 1990
            default_top_n = 20
            "#,
        )
        .unwrap();
        assert_eq!(cfg.co2_path, PathBuf::from("/tmp/co2.csv"));
        assert_eq!(cfg.geo_path, AppConfig::default().geo_path);
        assert_eq!(cfg.default_start_year, 1990);
        assert_eq!(cfg.default_top_n, 20);
    }

    #[test]
    fn unsupported_top_n_falls_back() {
        let cfg = from_toml("default_top_n = 7").unwrap();
        assert_eq!(cfg.default_top_n, 10);
    }

    #[test]
    fn inverted_default_years_are_swapped() {
        let cfg = from_toml("default_start_year = 2012").unwrap();
        assert_eq!((cfg.default_start_year, cfg.default_end_year), (2011, 2012));
    }
}
