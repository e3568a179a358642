//! Chart figures
//! Pure adapters from aggregated rows to backend-neutral chart descriptions.
//! Both the interactive plotter and the static renderer draw these.

use super::geo;
use crate::stats::AggregatedRecord;
use serde::Serialize;

pub type Rgb = [u8; 3];

pub const X_LABEL: &str = "Country Name";
pub const Y_LABEL: &str = "CO2 per Capita (metric tons)";

/// Bar colour when the chart is not coloured by group.
pub const DEFAULT_BAR_COLOR: Rgb = [99, 110, 250];

/// Qualitative palette, assigned to groups in order of first appearance.
pub const PALETTE: [Rgb; 10] = [
    [99, 110, 250],
    [239, 85, 59],
    [0, 204, 150],
    [171, 99, 250],
    [255, 161, 90],
    [25, 211, 243],
    [255, 102, 146],
    [182, 232, 128],
    [255, 151, 255],
    [254, 203, 82],
];

/// Sequential "Reds" scale, light to dark.
const REDS: [Rgb; 9] = [
    [255, 245, 240],
    [254, 224, 210],
    [252, 187, 161],
    [252, 146, 114],
    [251, 106, 74],
    [239, 59, 44],
    [203, 24, 29],
    [165, 15, 21],
    [103, 0, 13],
];

/// Largest bubble radius in pixels.
pub const MAX_BUBBLE_RADIUS: f32 = 18.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub color: Rgb,
    pub group: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarFigure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<Bar>,
    /// Empty when bars are not coloured by group.
    pub legend: Vec<(String, Rgb)>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bubble {
    pub code: String,
    pub name: String,
    pub lon: f64,
    pub lat: f64,
    pub value: f64,
    pub radius: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoBubbleFigure {
    pub title: String,
    pub bubbles: Vec<Bubble>,
    /// Rows that could not be placed on the map.
    pub unplaced: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    pub code: String,
    pub name: String,
    pub lon: f64,
    pub lat: f64,
    pub value: f64,
    pub fill: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoroplethFigure {
    pub title: String,
    pub regions: Vec<Region>,
    pub unplaced: Vec<String>,
    /// (min, max) of the coloured values.
    pub value_range: Option<(f64, f64)>,
}

/// Country on x, mean on y. With `color_by_continent` every bar takes the
/// colour of its continent and a legend is produced.
pub fn bar_figure(records: &[AggregatedRecord], color_by_continent: bool, title: &str) -> BarFigure {
    let mut legend: Vec<(String, Rgb)> = Vec::new();

    let bars = records
        .iter()
        .map(|r| {
            let group = if color_by_continent {
                r.continent.clone()
            } else {
                None
            };
            let color = match &group {
                Some(name) => legend_color(&mut legend, name),
                None => DEFAULT_BAR_COLOR,
            };
            Bar {
                label: r.country_name.clone(),
                value: r.mean_co2,
                color,
                group,
            }
        })
        .collect();

    BarFigure {
        title: title.to_string(),
        x_label: X_LABEL.to_string(),
        y_label: Y_LABEL.to_string(),
        bars,
        legend,
    }
}

fn legend_color(legend: &mut Vec<(String, Rgb)>, name: &str) -> Rgb {
    if let Some((_, color)) = legend.iter().find(|(n, _)| n == name) {
        return *color;
    }
    let color = PALETTE[legend.len() % PALETTE.len()];
    legend.push((name.to_string(), color));
    color
}

/// Bubbles at country centroids, area proportional to the mean.
pub fn geo_bubble_figure(records: &[AggregatedRecord], title: &str) -> GeoBubbleFigure {
    let max_value = records
        .iter()
        .map(|r| r.mean_co2)
        .filter(|v| v.is_finite() && *v > 0.0)
        .fold(0.0_f64, f64::max);

    let mut bubbles = Vec::new();
    let mut unplaced = Vec::new();

    for r in records {
        let Some((code, (lon, lat))) = placement(r) else {
            unplaced.push(r.country_name.clone());
            continue;
        };
        bubbles.push(Bubble {
            code,
            name: r.country_name.clone(),
            lon,
            lat,
            value: r.mean_co2,
            radius: bubble_radius(r.mean_co2, max_value),
        });
    }

    GeoBubbleFigure {
        title: title.to_string(),
        bubbles,
        unplaced,
    }
}

fn bubble_radius(value: f64, max_value: f64) -> f32 {
    if !value.is_finite() || value <= 0.0 || max_value <= 0.0 {
        return 0.0;
    }
    MAX_BUBBLE_RADIUS * (value / max_value).sqrt() as f32
}

/// Centroid markers filled on the Reds scale between the smallest and largest
/// mean in `records`.
pub fn choropleth_figure(records: &[AggregatedRecord], title: &str) -> ChoroplethFigure {
    let finite = records.iter().map(|r| r.mean_co2).filter(|v| v.is_finite());
    let value_range = finite.fold(None, |acc: Option<(f64, f64)>, v| match acc {
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        None => Some((v, v)),
    });

    let mut regions = Vec::new();
    let mut unplaced = Vec::new();

    for r in records {
        let Some((code, (lon, lat))) = placement(r) else {
            unplaced.push(r.country_name.clone());
            continue;
        };
        let Some((lo, hi)) = value_range.filter(|_| r.mean_co2.is_finite()) else {
            unplaced.push(r.country_name.clone());
            continue;
        };
        let t = if hi > lo {
            (r.mean_co2 - lo) / (hi - lo)
        } else {
            1.0
        };
        regions.push(Region {
            code,
            name: r.country_name.clone(),
            lon,
            lat,
            value: r.mean_co2,
            fill: reds(t),
        });
    }

    ChoroplethFigure {
        title: title.to_string(),
        regions,
        unplaced,
        value_range,
    }
}

fn placement(record: &AggregatedRecord) -> Option<(String, (f64, f64))> {
    let code = record.country_code.as_deref()?;
    geo::centroid(code).map(|pos| (code.to_string(), pos))
}

/// Sample the Reds scale at `t` in [0, 1].
pub fn reds(t: f64) -> Rgb {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let pos = t * (REDS.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = (lower + 1).min(REDS.len() - 1);
    let frac = pos - lower as f64;

    let mut out = [0u8; 3];
    for (i, channel) in out.iter_mut().enumerate() {
        let a = REDS[lower][i] as f64;
        let b = REDS[upper][i] as f64;
        *channel = (a + (b - a) * frac).round() as u8;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, code: Option<&str>, continent: Option<&str>, mean: f64) -> AggregatedRecord {
        AggregatedRecord {
            country_name: name.to_string(),
            country_code: code.map(str::to_string),
            continent: continent.map(str::to_string),
            mean_co2: mean,
        }
    }

    #[test]
    fn plain_bars_follow_record_order() {
        let fig = bar_figure(
            &[record("B", None, None, 5.0), record("A", None, None, 2.0)],
            false,
            "Top Emitters",
        );
        let labels: Vec<_> = fig.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["B", "A"]);
        assert!(fig.legend.is_empty());
        assert!(fig.bars.iter().all(|b| b.color == DEFAULT_BAR_COLOR));
        assert_eq!(fig.y_label, Y_LABEL);
    }

    #[test]
    fn continent_colours_assigned_by_first_appearance() {
        let fig = bar_figure(
            &[
                record("Qatar", Some("QAT"), Some("Asia"), 40.0),
                record("Luxembourg", Some("LUX"), Some("Europe"), 20.0),
                record("Kuwait", Some("KWT"), Some("Asia"), 19.0),
            ],
            true,
            "By continent",
        );
        assert_eq!(
            fig.legend,
            vec![("Asia".to_string(), PALETTE[0]), ("Europe".to_string(), PALETTE[1])]
        );
        assert_eq!(fig.bars[2].color, PALETTE[0]);
        assert_eq!(fig.bars[1].group.as_deref(), Some("Europe"));
    }

    #[test]
    fn unknown_codes_are_left_blank() {
        let records = [
            record("Qatar", Some("QAT"), Some("Asia"), 40.0),
            record("Atlantis", Some("ATL"), Some("Ocean"), 10.0),
            record("Nowhere", None, None, 1.0),
        ];
        let bubbles = geo_bubble_figure(&records, "Map");
        assert_eq!(bubbles.bubbles.len(), 1);
        assert_eq!(bubbles.unplaced, vec!["Atlantis".to_string(), "Nowhere".to_string()]);

        let choropleth = choropleth_figure(&records, "Map");
        assert_eq!(choropleth.regions.len(), 1);
        assert_eq!(choropleth.unplaced.len(), 2);
    }

    #[test]
    fn choropleth_lists_rows_without_a_value() {
        let fig = choropleth_figure(
            &[
                record("Qatar", Some("QAT"), Some("Asia"), 40.0),
                record("Kuwait", Some("KWT"), Some("Asia"), f64::NAN),
            ],
            "Fill",
        );
        assert_eq!(fig.regions.len(), 1);
        assert_eq!(fig.unplaced, vec!["Kuwait".to_string()]);
        assert_eq!(fig.value_range, Some((40.0, 40.0)));
    }

    #[test]
    fn largest_value_gets_largest_bubble() {
        let fig = geo_bubble_figure(
            &[
                record("Qatar", Some("QAT"), Some("Asia"), 40.0),
                record("Kuwait", Some("KWT"), Some("Asia"), 10.0),
            ],
            "Map",
        );
        assert_eq!(fig.bubbles[0].radius, MAX_BUBBLE_RADIUS);
        assert!((fig.bubbles[1].radius - MAX_BUBBLE_RADIUS / 2.0).abs() < 1e-4);
    }

    #[test]
    fn choropleth_spans_the_reds_scale() {
        let fig = choropleth_figure(
            &[
                record("Qatar", Some("QAT"), Some("Asia"), 40.0),
                record("Kuwait", Some("KWT"), Some("Asia"), 10.0),
            ],
            "CO2 per Capita",
        );
        assert_eq!(fig.value_range, Some((10.0, 40.0)));
        assert_eq!(fig.regions[0].fill, REDS[8]);
        assert_eq!(fig.regions[1].fill, REDS[0]);
    }

    #[test]
    fn reds_is_clamped() {
        assert_eq!(reds(-1.0), REDS[0]);
        assert_eq!(reds(2.0), REDS[8]);
        assert_eq!(reds(f64::NAN), REDS[0]);
        assert_eq!(reds(0.5), REDS[4]);
    }

    #[test]
    fn empty_input_gives_empty_figures() {
        assert!(bar_figure(&[], true, "t").bars.is_empty());
        assert!(geo_bubble_figure(&[], "t").bubbles.is_empty());
        assert_eq!(choropleth_figure(&[], "t").value_range, None);
    }
}
