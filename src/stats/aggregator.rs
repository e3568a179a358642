//! Top Emitters Aggregator
//! Filters by an inclusive year range, averages CO2 per capita per group and
//! keeps the N largest means.

use crate::data::{CO2_PER_CAPITA, CONTINENT, COUNTRY_CODE, COUNTRY_NAME, YEAR};
use polars::prelude::*;
use serde::Serialize;

/// One row of an aggregated table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedRecord {
    pub country_name: String,
    /// Only set by the geo-aware aggregation.
    pub country_code: Option<String>,
    /// Only set by the geo-aware aggregation.
    pub continent: Option<String>,
    /// NaN when every value in the group was null.
    pub mean_co2: f64,
}

/// Grouping used by an aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// Country name only.
    Country,
    /// Country name, country code and continent.
    CountryWithGeo,
}

impl Grouping {
    fn keys(self) -> Vec<Expr> {
        match self {
            Grouping::Country => vec![col(COUNTRY_NAME)],
            Grouping::CountryWithGeo => {
                vec![col(COUNTRY_NAME), col(COUNTRY_CODE), col(CONTINENT)]
            }
        }
    }

    /// Rows with a null key never form a group.
    fn keys_present(self) -> Expr {
        match self {
            Grouping::Country => col(COUNTRY_NAME).is_not_null(),
            Grouping::CountryWithGeo => col(COUNTRY_NAME)
                .is_not_null()
                .and(col(COUNTRY_CODE).is_not_null())
                .and(col(CONTINENT).is_not_null()),
        }
    }
}

/// Computes top-N mean emissions tables.
pub struct EmissionsAggregator;

impl EmissionsAggregator {
    /// Top `n` countries by mean CO2 per capita over `[start_year, end_year]`.
    ///
    /// Output columns: [Country Name, CO2 Per Capita (metric tons)]
    pub fn top_emitters(
        df: &DataFrame,
        start_year: i64,
        end_year: i64,
        n: usize,
    ) -> PolarsResult<DataFrame> {
        Self::aggregate(df, Grouping::Country, start_year, end_year, n)
    }

    /// Same as [`Self::top_emitters`] grouped by country, code and continent.
    /// Expects the merged table.
    ///
    /// Output columns: [Country Name, Country Code, Continent_Name, CO2 Per Capita (metric tons)]
    pub fn top_emitters_with_geo(
        df: &DataFrame,
        start_year: i64,
        end_year: i64,
        n: usize,
    ) -> PolarsResult<DataFrame> {
        Self::aggregate(df, Grouping::CountryWithGeo, start_year, end_year, n)
    }

    /// Filter, stable group-by, mean, stable descending sort, head.
    ///
    /// `start_year > end_year` matches no rows and yields an empty table.
    pub fn aggregate(
        df: &DataFrame,
        grouping: Grouping,
        start_year: i64,
        end_year: i64,
        n: usize,
    ) -> PolarsResult<DataFrame> {
        let limit = IdxSize::try_from(n).unwrap_or(IdxSize::MAX);

        df.clone()
            .lazy()
            .filter(
                col(YEAR)
                    .gt_eq(lit(start_year))
                    .and(col(YEAR).lt_eq(lit(end_year)))
                    .and(grouping.keys_present()),
            )
            .group_by_stable(grouping.keys())
            .agg([col(CO2_PER_CAPITA).fill_nan(lit(NULL)).mean()])
            .sort_by_exprs(
                [col(CO2_PER_CAPITA)],
                SortMultipleOptions::default()
                    .with_order_descending(true)
                    .with_nulls_last(true)
                    .with_maintain_order(true),
            )
            .limit(limit)
            .collect()
    }

    /// Convert an aggregated table into records. Geo columns are read when
    /// present.
    pub fn to_records(df: &DataFrame) -> PolarsResult<Vec<AggregatedRecord>> {
        let names = df.column(COUNTRY_NAME)?.str()?;
        let means = df.column(CO2_PER_CAPITA)?.cast(&DataType::Float64)?;
        let means = means.f64()?;

        let codes = match df.column(COUNTRY_CODE) {
            Ok(c) => Some(c.str()?),
            Err(_) => None,
        };
        let continents = match df.column(CONTINENT) {
            Ok(c) => Some(c.str()?),
            Err(_) => None,
        };

        let records = (0..df.height())
            .map(|i| AggregatedRecord {
                country_name: names.get(i).unwrap_or_default().to_string(),
                country_code: codes.and_then(|c| c.get(i)).map(str::to_string),
                continent: continents.and_then(|c| c.get(i)).map(str::to_string),
                mean_co2: means.get(i).unwrap_or(f64::NAN),
            })
            .collect();

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn top_records(
        df: &DataFrame,
        grouping: Grouping,
        start_year: i64,
        end_year: i64,
        n: usize,
    ) -> Vec<AggregatedRecord> {
        let table = EmissionsAggregator::aggregate(df, grouping, start_year, end_year, n).unwrap();
        EmissionsAggregator::to_records(&table).unwrap()
    }

    fn merged(rows: &[(&str, &str, i64, f64, Option<&str>)]) -> DataFrame {
        DataFrame::new(vec![
            Column::new(
                COUNTRY_NAME.into(),
                rows.iter().map(|r| r.0).collect::<Vec<_>>(),
            ),
            Column::new(
                COUNTRY_CODE.into(),
                rows.iter().map(|r| r.1).collect::<Vec<_>>(),
            ),
            Column::new(YEAR.into(), rows.iter().map(|r| r.2).collect::<Vec<_>>()),
            Column::new(
                CO2_PER_CAPITA.into(),
                rows.iter().map(|r| r.3).collect::<Vec<_>>(),
            ),
            Column::new(
                CONTINENT.into(),
                rows.iter().map(|r| r.4).collect::<Vec<_>>(),
            ),
        ])
        .unwrap()
    }

    fn scenario() -> DataFrame {
        merged(&[
            ("A", "AAA", 2008, 1.0, Some("Asia")),
            ("A", "AAA", 2009, 3.0, Some("Asia")),
            ("B", "BBB", 2008, 5.0, Some("Europe")),
        ])
    }

    fn pairs(records: &[AggregatedRecord]) -> Vec<(String, f64)> {
        records
            .iter()
            .map(|r| (r.country_name.clone(), r.mean_co2))
            .collect()
    }

    #[test]
    fn plain_scenario_orders_by_mean_descending() {
        let records =
            top_records(&scenario(), Grouping::Country, 2008, 2009, 2);
        assert_eq!(
            pairs(&records),
            vec![("B".to_string(), 5.0), ("A".to_string(), 2.0)]
        );
        assert!(records.iter().all(|r| r.country_code.is_none()));
    }

    #[test]
    fn nan_values_are_skipped_by_the_mean() {
        let df = merged(&[
            ("A", "AAA", 2008, f64::NAN, Some("Asia")),
            ("A", "AAA", 2009, 3.0, Some("Asia")),
            ("B", "BBB", 2008, 5.0, Some("Europe")),
        ]);
        let records = top_records(&df, Grouping::Country, 2008, 2009, 2);
        assert_eq!(
            pairs(&records),
            vec![("B".to_string(), 5.0), ("A".to_string(), 3.0)]
        );
    }

    #[test]
    fn plain_table_has_two_columns() {
        let table = EmissionsAggregator::top_emitters(&scenario(), 2008, 2009, 10).unwrap();
        assert_eq!(table.width(), 2);
        assert_eq!(table.height(), 2);
    }

    #[test]
    fn geo_aware_carries_code_and_continent() {
        let records =
            top_records(&scenario(), Grouping::CountryWithGeo, 2008, 2009, 2);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].country_code.as_deref(), Some("BBB"));
        assert_eq!(records[0].continent.as_deref(), Some("Europe"));
        assert_eq!(records[1].country_code.as_deref(), Some("AAA"));
        assert_eq!(records[1].mean_co2, 2.0);
    }

    #[test]
    fn fewer_groups_than_requested_returns_all() {
        let table = EmissionsAggregator::top_emitters(&scenario(), 2008, 2009, 5).unwrap();
        assert_eq!(table.height(), 2);
    }

    #[test]
    fn result_never_exceeds_n() {
        let df = scenario();
        for n in [0, 1, 2, 3, 30] {
            for (start, end) in [(2000, 2020), (2008, 2008), (2009, 2009)] {
                let table = EmissionsAggregator::top_emitters(&df, start, end, n).unwrap();
                assert!(table.height() <= n);
            }
        }
    }

    #[test]
    fn range_without_rows_is_empty() {
        let table = EmissionsAggregator::top_emitters(&scenario(), 1990, 1995, 10).unwrap();
        assert_eq!(table.height(), 0);
    }

    #[test]
    fn inverted_range_is_empty() {
        let table = EmissionsAggregator::top_emitters_with_geo(&scenario(), 2009, 2008, 10).unwrap();
        assert_eq!(table.height(), 0);
    }

    #[test]
    fn single_row_mean_is_exact() {
        let df = merged(&[("C", "CCC", 2010, 7.123_456_789, Some("Africa"))]);
        let records =
            top_records(&df, Grouping::Country, 2010, 2010, 3);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].mean_co2, 7.123_456_789);
    }

    #[test]
    fn ties_keep_first_seen_group_order() {
        let df = merged(&[
            ("Z", "ZZZ", 2008, 4.0, Some("Asia")),
            ("Y", "YYY", 2008, 9.0, Some("Asia")),
            ("X", "XXX", 2008, 4.0, Some("Asia")),
        ]);
        let records =
            top_records(&df, Grouping::Country, 2008, 2008, 3);
        let names: Vec<_> = records.iter().map(|r| r.country_name.as_str()).collect();
        assert_eq!(names, vec!["Y", "Z", "X"]);
    }

    #[test]
    fn geo_aware_skips_rows_without_continent() {
        let df = merged(&[
            ("World", "WLD", 2008, 4.5, None),
            ("A", "AAA", 2008, 1.0, Some("Asia")),
        ]);
        let geo =
            top_records(&df, Grouping::CountryWithGeo, 2008, 2008, 10);
        assert_eq!(pairs(&geo), vec![("A".to_string(), 1.0)]);

        let plain =
            top_records(&df, Grouping::Country, 2008, 2008, 10);
        assert_eq!(plain.len(), 2);
    }
}
