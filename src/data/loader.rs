//! CSV Data Loader Module
//! Reads the emissions and geography files with Polars and projects them to the
//! columns the dashboard works with.

use super::{
    DataProcessor, ProcessorError, CO2_PER_CAPITA, CONTINENT, COUNTRY_CODE, COUNTRY_NAME,
    GEO_COUNTRY_CODE, YEAR,
};
use polars::prelude::*;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Rows scanned for schema inference.
const INFER_SCHEMA_ROWS: usize = 10_000;

/// Which input table a load refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Emissions,
    Geography,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableKind::Emissions => write!(f, "Data"),
            TableKind::Geography => write!(f, "Geography"),
        }
    }
}

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("{kind} file not found: {}", path.display())]
    NotFound { kind: TableKind, path: PathBuf },
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error(transparent)]
    Processing(#[from] ProcessorError),
}

/// Loads the two dashboard inputs.
pub struct DataLoader;

impl DataLoader {
    /// Load the semicolon-delimited emissions file.
    ///
    /// Output columns: [Country Name, Country Code, Year (i64), CO2 Per Capita (f64)].
    /// `NaN` cells are read as missing values.
    pub fn load_emissions(path: &Path) -> Result<DataFrame, LoaderError> {
        let df = Self::scan_csv(path, b';', TableKind::Emissions)?
            .select([
                col(COUNTRY_NAME).cast(DataType::String),
                col(COUNTRY_CODE).cast(DataType::String),
                col(YEAR).cast(DataType::Int64),
                col(CO2_PER_CAPITA)
                    .cast(DataType::Float64)
                    .fill_nan(lit(NULL)),
            ])
            .collect()?;

        info!(path = %path.display(), rows = df.height(), "loaded emissions");
        Ok(df)
    }

    /// Load the comma-delimited geography file, reduced to unique
    /// (continent, country code) pairs.
    pub fn load_geography(path: &Path) -> Result<DataFrame, LoaderError> {
        let raw = Self::scan_csv(path, b',', TableKind::Geography)?
            .select([
                col(CONTINENT).cast(DataType::String),
                col(GEO_COUNTRY_CODE).cast(DataType::String),
            ])
            .collect()?;
        let df = DataProcessor::dedup_geography(&raw)?;

        info!(
            path = %path.display(),
            raw_rows = raw.height(),
            rows = df.height(),
            "loaded geography"
        );
        Ok(df)
    }

    fn scan_csv(path: &Path, separator: u8, kind: TableKind) -> Result<LazyFrame, LoaderError> {
        if !path.exists() {
            return Err(LoaderError::NotFound {
                kind,
                path: path.to_path_buf(),
            });
        }

        let lazy = LazyCsvReader::new(path)
            .with_separator(separator)
            .with_has_header(true)
            .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
            .with_ignore_errors(true)
            .finish()?;
        Ok(lazy)
    }

    /// Inclusive (min, max) of the `Year` column.
    pub fn year_bounds(df: &DataFrame) -> Option<(i64, i64)> {
        let years = df.column(YEAR).ok()?.i64().ok()?;
        Some((years.min()?, years.max()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_semicolon_emissions() {
        let file = write_csv(
            "Country Name;Country Code;Year;CO2 Per Capita (metric tons);Extra\n\
             Aruba;ABW;2008;24.5;x\n\
             Aruba;ABW;2009;24.1;x\n\
             Qatar;QAT;2008;50.0;y\n",
        );
        let df = DataLoader::load_emissions(file.path()).unwrap();

        assert_eq!(df.height(), 3);
        assert_eq!(df.width(), 4);
        assert_eq!(df.column(YEAR).unwrap().dtype(), &DataType::Int64);
        assert_eq!(df.column(CO2_PER_CAPITA).unwrap().dtype(), &DataType::Float64);
        assert_eq!(DataLoader::year_bounds(&df), Some((2008, 2009)));
    }

    #[test]
    fn nan_cells_load_as_nulls() {
        let file = write_csv(
            "Country Name;Country Code;Year;CO2 Per Capita (metric tons)\n\
             A;AAA;2008;NaN\n\
             A;AAA;2009;3.0\n\
             B;BBB;2008;5.0\n",
        );
        let df = DataLoader::load_emissions(file.path()).unwrap();
        let values = df.column(CO2_PER_CAPITA).unwrap().f64().unwrap();

        assert_eq!(values.null_count(), 1);
        assert_eq!(values.get(0), None);
        assert_eq!(values.get(1), Some(3.0));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = DataLoader::load_emissions(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(
            err,
            LoaderError::NotFound {
                kind: TableKind::Emissions,
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "Data file not found: /definitely/not/here.csv"
        );

        let err = DataLoader::load_geography(Path::new("/nope/geo.csv")).unwrap_err();
        assert_eq!(err.to_string(), "Geography file not found: /nope/geo.csv");
    }

    #[test]
    fn geography_is_projected_and_deduplicated() {
        let file = write_csv(
            "Continent_Name,Continent_Code,Country_Name,Two_Letter_Country_Code,Three_Letter_Country_Code\n\
             Asia,AS,Afghanistan,AF,AFG\n\
             Europe,EU,Albania,AL,ALB\n\
             Asia,AS,Afghanistan,AF,AFG\n\
             Asia,AS,Russia,RU,RUS\n\
             Europe,EU,Russia,RU,RUS\n",
        );
        let df = DataLoader::load_geography(file.path()).unwrap();

        assert_eq!(df.width(), 2);
        assert_eq!(df.height(), 4);
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let file = write_csv("Country Name;Year\nAruba;2008\n");
        assert!(matches!(
            DataLoader::load_emissions(file.path()),
            Err(LoaderError::CsvError(_))
        ));
    }
}
