//! Data Processor Module
//! Geography deduplication and the emissions/geography left join.

use super::{CONTINENT, COUNTRY_CODE, GEO_COUNTRY_CODE};
use polars::prelude::*;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Handles geography cleanup and joining.
pub struct DataProcessor;

impl DataProcessor {
    /// Collapse duplicate (continent, country code) rows, keeping the first
    /// occurrence of each pair in file order.
    ///
    /// Output columns: [Continent_Name, Three_Letter_Country_Code]
    pub fn dedup_geography(geo: &DataFrame) -> Result<DataFrame, ProcessorError> {
        let continents = geo.column(CONTINENT)?.str()?;
        let codes = geo.column(GEO_COUNTRY_CODE)?.str()?;

        let mut seen: HashSet<(Option<&str>, Option<&str>)> = HashSet::new();
        let mut out_continents: Vec<Option<&str>> = Vec::new();
        let mut out_codes: Vec<Option<&str>> = Vec::new();

        for pair in continents.into_iter().zip(codes.into_iter()) {
            if seen.insert(pair) {
                out_continents.push(pair.0);
                out_codes.push(pair.1);
            }
        }

        let df = DataFrame::new(vec![
            Column::new(CONTINENT.into(), out_continents),
            Column::new(GEO_COUNTRY_CODE.into(), out_codes),
        ])?;

        Ok(df)
    }

    /// Left join emissions with deduplicated geography on country code.
    ///
    /// Adds a `Continent_Name` column and never changes the row count. A code
    /// listed under several continents takes the first one in `geo`.
    pub fn merge_geography(
        emissions: &DataFrame,
        geo: &DataFrame,
    ) -> Result<DataFrame, ProcessorError> {
        let mut continent_by_code: HashMap<&str, &str> = HashMap::new();

        // A table that failed to load has no columns at all
        if geo.width() > 0 {
            let continents = geo.column(CONTINENT)?.str()?;
            let codes = geo.column(GEO_COUNTRY_CODE)?.str()?;
            for (code, continent) in codes.into_iter().zip(continents.into_iter()) {
                if let (Some(code), Some(continent)) = (code, continent) {
                    continent_by_code.entry(code).or_insert(continent);
                }
            }
        }

        let continent: Vec<Option<&str>> = emissions
            .column(COUNTRY_CODE)?
            .str()?
            .into_iter()
            .map(|code| code.and_then(|c| continent_by_code.get(c).copied()))
            .collect();

        let mut merged = emissions.clone();
        merged.with_column(Column::new(CONTINENT.into(), continent))?;

        Ok(merged)
    }
}
