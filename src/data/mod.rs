//! Data module - CSV loading, geography cleanup and memoized merge

mod cache;
mod loader;
mod processor;

pub use cache::DataCache;
pub use loader::{DataLoader, LoaderError};
pub use processor::{DataProcessor, ProcessorError};

/// Emissions columns.
pub const COUNTRY_NAME: &str = "Country Name";
pub const COUNTRY_CODE: &str = "Country Code";
pub const YEAR: &str = "Year";
pub const CO2_PER_CAPITA: &str = "CO2 Per Capita (metric tons)";

/// Geography columns.
pub const CONTINENT: &str = "Continent_Name";
pub const GEO_COUNTRY_CODE: &str = "Three_Letter_Country_Code";
