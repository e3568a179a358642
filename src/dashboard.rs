//! Dashboard Controller
//! One linear render pass: memoized loads, empty-table guard, memoized merge,
//! per-chart aggregation and figure adapters.

use crate::charts::figure::{bar_figure, choropleth_figure, geo_bubble_figure};
use crate::charts::{BarFigure, ChoroplethFigure, GeoBubbleFigure, RenderError, StaticChartRenderer};
use crate::config::{AppConfig, TOP_N_OPTIONS};
use crate::data::{DataCache, DataLoader, ProcessorError};
use crate::stats::{AggregatedRecord, EmissionsAggregator};
use polars::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

pub const TOP_EMITTERS_TITLE: &str = "Top Emitters by Average CO2 per Capita";
pub const GEO_BUBBLES_TITLE: &str = "Top Emitters on Map";
pub const CONTINENT_BARS_TITLE: &str = "Top Emitters Colored by Continent";
pub const CHOROPLETH_TITLE: &str = "CO2 per Capita";

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Failed to load required data files.")]
    DataUnavailable { messages: Vec<String> },
    #[error(transparent)]
    Processing(#[from] ProcessorError),
    #[error("Aggregation failed: {0}")]
    Aggregation(#[from] PolarsError),
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// User-selected parameters of one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardParams {
    pub start_year: i64,
    pub end_year: i64,
    pub top_n: usize,
    pub show_raw: bool,
}

impl DashboardParams {
    /// Configured defaults, with years clamped into `bounds`. Bounds given in
    /// either order are accepted.
    pub fn initial(config: &AppConfig, bounds: (i64, i64)) -> Self {
        let (min, max) = (bounds.0.min(bounds.1), bounds.0.max(bounds.1));
        let top_n = if TOP_N_OPTIONS.contains(&config.default_top_n) {
            config.default_top_n
        } else {
            TOP_N_OPTIONS[2]
        };
        Self {
            start_year: config.default_start_year.clamp(min, max),
            end_year: config.default_end_year.clamp(min, max),
            top_n,
            show_raw: false,
        }
    }
}

/// Inputs that survive between render passes.
#[derive(Clone)]
pub struct PreparedData {
    pub emissions: DataFrame,
    pub merged: DataFrame,
    /// Inclusive year range present in the emissions table.
    pub year_bounds: (i64, i64),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryMetrics {
    pub years_selected: String,
    pub top_countries: usize,
    /// Row count of the raw emissions table.
    pub data_points: usize,
}

impl SummaryMetrics {
    pub fn data_points_label(&self) -> String {
        format_thousands(self.data_points)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub metrics: SummaryMetrics,
    pub top_emitters: BarFigure,
    pub geo_bubbles: GeoBubbleFigure,
    pub continent_bars: BarFigure,
    pub choropleth: ChoroplethFigure,
    pub raw_records: Option<Vec<AggregatedRecord>>,
}

/// Owns the configuration and the memoization cache.
pub struct Dashboard {
    config: AppConfig,
    cache: DataCache,
}

impl Dashboard {
    pub fn new(config: AppConfig, cache: DataCache) -> Self {
        Self { config, cache }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Load both tables and merge them. Aborts with every load message when
    /// either table is empty.
    pub fn prepare(&mut self) -> Result<PreparedData, DashboardError> {
        let co2_path = self.config.co2_path.clone();
        let geo_path = self.config.geo_path.clone();
        let mut messages = Vec::new();

        let emissions = self
            .cache
            .emissions(&co2_path)
            .unwrap_or_else(|e| Self::empty_on_error(e.to_string(), &mut messages));
        let geography = self
            .cache
            .geography(&geo_path)
            .unwrap_or_else(|e| Self::empty_on_error(e.to_string(), &mut messages));

        if emissions.is_empty() || geography.is_empty() {
            if messages.is_empty() {
                messages.push("An input table has no rows.".to_string());
            }
            return Err(DashboardError::DataUnavailable { messages });
        }

        let merged = self
            .cache
            .merged(&co2_path, &geo_path, &emissions, &geography)?;
        let year_bounds = DataLoader::year_bounds(&emissions).unwrap_or_else(|| {
            let (start, end) = (self.config.default_start_year, self.config.default_end_year);
            (start.min(end), start.max(end))
        });

        Ok(PreparedData {
            emissions,
            merged,
            year_bounds,
        })
    }

    fn empty_on_error(message: String, messages: &mut Vec<String>) -> DataFrame {
        warn!("{message}");
        messages.push(message);
        DataFrame::empty()
    }

    /// Full render pass for `params`.
    pub fn render(&mut self, params: &DashboardParams) -> Result<DashboardView, DashboardError> {
        let data = self.prepare()?;
        Ok(Self::render_pass(&data, params)?)
    }

    /// Aggregate once per chart and adapt each result. Nothing is cached here.
    pub fn render_pass(data: &PreparedData, params: &DashboardParams) -> PolarsResult<DashboardView> {
        let DashboardParams {
            start_year,
            end_year,
            top_n,
            show_raw,
        } = *params;
        debug!(start_year, end_year, top_n, show_raw, "render pass");

        let top = EmissionsAggregator::to_records(&EmissionsAggregator::top_emitters(
            &data.emissions,
            start_year,
            end_year,
            top_n,
        )?)?;
        let top_emitters = bar_figure(&top, false, TOP_EMITTERS_TITLE);

        let geo_aware = || {
            let table = EmissionsAggregator::top_emitters_with_geo(
                &data.merged,
                start_year,
                end_year,
                top_n,
            )?;
            EmissionsAggregator::to_records(&table)
        };

        let geo_bubbles = geo_bubble_figure(&geo_aware()?, GEO_BUBBLES_TITLE);
        let continent_bars = bar_figure(&geo_aware()?, true, CONTINENT_BARS_TITLE);
        let choropleth = choropleth_figure(&geo_aware()?, CHOROPLETH_TITLE);
        let raw_records = if show_raw { Some(geo_aware()?) } else { None };

        Ok(DashboardView {
            metrics: SummaryMetrics {
                years_selected: format!("{start_year} - {end_year}"),
                top_countries: top_n,
                data_points: data.emissions.height(),
            },
            top_emitters,
            geo_bubbles,
            continent_bars,
            choropleth,
            raw_records,
        })
    }
}

impl DashboardView {
    /// Write every chart as PNG plus `dashboard.json` into `dir`.
    pub fn export(&self, dir: &Path, size: (u32, u32)) -> Result<Vec<PathBuf>, ExportError> {
        fs::create_dir_all(dir)?;

        let top = dir.join("top_emitters.png");
        StaticChartRenderer::render_bar_chart(&self.top_emitters, &top, size)?;
        let bubbles = dir.join("geo_bubbles.png");
        StaticChartRenderer::render_geo_bubbles(&self.geo_bubbles, &bubbles, size)?;
        let continents = dir.join("continent_bars.png");
        StaticChartRenderer::render_bar_chart(&self.continent_bars, &continents, size)?;
        let choropleth = dir.join("choropleth.png");
        StaticChartRenderer::render_choropleth(&self.choropleth, &choropleth, size)?;

        let json = dir.join("dashboard.json");
        self.write_json(&json)?;

        info!(dir = %dir.display(), "exported dashboard");
        Ok(vec![top, bubbles, continents, choropleth, json])
    }

    /// Metrics and chart data as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> Result<(), ExportError> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// `1234567` -> `1,234,567`
pub fn format_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
