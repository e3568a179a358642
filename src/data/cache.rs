//! Memoized loads and merge, keyed by input identity.

use super::{DataLoader, DataProcessor, LoaderError, ProcessorError};
use polars::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Per-process memoization of the raw loads and the merged table.
///
/// Entries are never invalidated: the inputs are static files read once.
/// Only successful loads are stored.
#[derive(Default)]
pub struct DataCache {
    emissions: HashMap<PathBuf, DataFrame>,
    geography: HashMap<PathBuf, DataFrame>,
    merged: HashMap<(PathBuf, PathBuf), DataFrame>,
}

impl DataCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emissions(&mut self, path: &Path) -> Result<DataFrame, LoaderError> {
        if let Some(df) = self.emissions.get(path) {
            debug!(path = %path.display(), "emissions cache hit");
            return Ok(df.clone());
        }
        let df = DataLoader::load_emissions(path)?;
        self.emissions.insert(path.to_path_buf(), df.clone());
        Ok(df)
    }

    pub fn geography(&mut self, path: &Path) -> Result<DataFrame, LoaderError> {
        if let Some(df) = self.geography.get(path) {
            debug!(path = %path.display(), "geography cache hit");
            return Ok(df.clone());
        }
        let df = DataLoader::load_geography(path)?;
        self.geography.insert(path.to_path_buf(), df.clone());
        Ok(df)
    }

    /// Merge of the tables loaded from `co2_path` and `geo_path`.
    pub fn merged(
        &mut self,
        co2_path: &Path,
        geo_path: &Path,
        emissions: &DataFrame,
        geography: &DataFrame,
    ) -> Result<DataFrame, ProcessorError> {
        let key = (co2_path.to_path_buf(), geo_path.to_path_buf());
        if let Some(df) = self.merged.get(&key) {
            return Ok(df.clone());
        }
        let df = DataProcessor::merge_geography(emissions, geography)?;
        self.merged.insert(key, df.clone());
        Ok(df)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn cached_tables(cache: &DataCache) -> usize {
        cache.emissions.len() + cache.geography.len() + cache.merged.len()
    }

    #[test]
    fn second_load_is_served_from_cache() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Country Name;Country Code;Year;CO2 Per Capita (metric tons)").unwrap();
        writeln!(file, "A;AAA;2008;1.5").unwrap();
        file.flush().unwrap();

        let mut cache = DataCache::new();
        let first = cache.emissions(file.path()).unwrap();

        // The memoized table survives the file going away
        let path = file.path().to_path_buf();
        drop(file);
        let second = cache.emissions(&path).unwrap();

        assert!(first.equals_missing(&second));
        assert_eq!(cached_tables(&cache), 1);
    }

    #[test]
    fn failed_loads_are_not_cached() {
        let mut cache = DataCache::new();
        assert!(cache.geography(Path::new("/missing/geo.csv")).is_err());
        assert_eq!(cached_tables(&cache), 0);
    }
}
