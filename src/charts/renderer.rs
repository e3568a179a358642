//! Static Chart Renderer
//! Renders chart figures to PNG files with plotters.
//!
//! Layout per image:
//! 1. Caption: figure title
//! 2. Plot area: bars with rotated country labels, or a longitude/latitude
//!    map with bubbles / filled markers
//! 3. Legend (continent bars only)

use super::figure::{BarFigure, ChoroplethFigure, GeoBubbleFigure, Rgb};
use super::geo::{LAT_RANGE, LON_RANGE};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;
use thiserror::Error;

const FONT: &str = "sans-serif";
const LAND: RGBColor = RGBColor(243, 243, 243);
const BUBBLE: RGBColor = RGBColor(99, 110, 250);

/// Half extent, in degrees, of a choropleth marker.
const REGION_HALF_LON: f64 = 3.0;
const REGION_HALF_LAT: f64 = 2.0;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Drawing failed: {0}")]
    Draw(String),
}

fn draw_err<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Draw(e.to_string())
}

fn rgb(color: Rgb) -> RGBColor {
    RGBColor(color[0], color[1], color[2])
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Bar chart with one bar per country, highest first.
    pub fn render_bar_chart(
        figure: &BarFigure,
        path: &Path,
        (width, height): (u32, u32),
    ) -> Result<(), RenderError> {
        let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let n = figure.bars.len().max(1);
        let y_max = figure
            .bars
            .iter()
            .map(|b| b.value)
            .filter(|v| v.is_finite())
            .fold(0.0_f64, f64::max);
        let y_max = if y_max > 0.0 { y_max * 1.1 } else { 1.0 };

        let labels: Vec<String> = figure.bars.iter().map(|b| b.label.clone()).collect();
        let label_style = TextStyle::from((FONT, 13).into_font())
            .transform(FontTransform::Rotate270)
            .pos(Pos::new(HPos::Right, VPos::Center));

        let mut chart = ChartBuilder::on(&root)
            .caption(&figure.title, (FONT, 24))
            .margin(20)
            .x_label_area_size(140)
            .y_label_area_size(70)
            .build_cartesian_2d((0..n).into_segmented(), 0.0..y_max)
            .map_err(draw_err)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(n)
            .x_label_style(label_style)
            .x_label_formatter(&|v| match v {
                SegmentValue::CenterOf(i) => labels.get(*i).cloned().unwrap_or_default(),
                _ => String::new(),
            })
            .y_desc(figure.y_label.as_str())
            .axis_desc_style((FONT, 15))
            .draw()
            .map_err(draw_err)?;

        if figure.legend.is_empty() {
            chart
                .draw_series(figure.bars.iter().enumerate().map(|(i, b)| {
                    let mut bar = Rectangle::new(
                        [
                            (SegmentValue::Exact(i), 0.0),
                            (SegmentValue::Exact(i + 1), finite_or_zero(b.value)),
                        ],
                        rgb(b.color).filled(),
                    );
                    bar.set_margin(0, 0, 6, 6);
                    bar
                }))
                .map_err(draw_err)?;
        } else {
            for (group, color) in &figure.legend {
                let color = rgb(*color);
                chart
                    .draw_series(
                        figure
                            .bars
                            .iter()
                            .enumerate()
                            .filter(|(_, b)| b.group.as_deref() == Some(group.as_str()))
                            .map(|(i, b)| {
                                let mut bar = Rectangle::new(
                                    [
                                        (SegmentValue::Exact(i), 0.0),
                                        (SegmentValue::Exact(i + 1), finite_or_zero(b.value)),
                                    ],
                                    color.filled(),
                                );
                                bar.set_margin(0, 0, 6, 6);
                                bar
                            }),
                    )
                    .map_err(draw_err)?
                    .label(group.as_str())
                    .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
            }

            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperRight)
                .background_style(WHITE.mix(0.85))
                .border_style(BLACK)
                .label_font((FONT, 14))
                .draw()
                .map_err(draw_err)?;
        }

        root.present().map_err(draw_err)?;
        Ok(())
    }

    /// Bubbles sized by value at country centroids.
    pub fn render_geo_bubbles(
        figure: &GeoBubbleFigure,
        path: &Path,
        size: (u32, u32),
    ) -> Result<(), RenderError> {
        let markers = figure
            .bubbles
            .iter()
            .filter(|b| b.radius > 0.0)
            .map(|b| MapMarker::Bubble {
                lon: b.lon,
                lat: b.lat,
                radius: b.radius.round() as i32,
            })
            .collect();
        Self::render_map(&figure.title, path, size, markers, None)
    }

    /// Filled markers coloured on the Reds scale.
    pub fn render_choropleth(
        figure: &ChoroplethFigure,
        path: &Path,
        size: (u32, u32),
    ) -> Result<(), RenderError> {
        let markers = figure
            .regions
            .iter()
            .map(|r| MapMarker::Region {
                lon: r.lon,
                lat: r.lat,
                fill: rgb(r.fill),
            })
            .collect();
        let note = figure
            .value_range
            .map(|(lo, hi)| format!("{lo:.2} - {hi:.2} t per capita"));
        Self::render_map(&figure.title, path, size, markers, note)
    }

    fn render_map(
        title: &str,
        path: &Path,
        (width, height): (u32, u32),
        markers: Vec<MapMarker>,
        note: Option<String>,
    ) -> Result<(), RenderError> {
        let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, (FONT, 24))
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(LON_RANGE.0..LON_RANGE.1, LAT_RANGE.0..LAT_RANGE.1)
            .map_err(draw_err)?;

        chart.plotting_area().fill(&LAND).map_err(draw_err)?;
        chart
            .configure_mesh()
            .x_desc("Longitude")
            .y_desc("Latitude")
            .light_line_style(WHITE)
            .draw()
            .map_err(draw_err)?;

        chart
            .draw_series(markers.iter().filter_map(|m| match *m {
                MapMarker::Region { lon, lat, fill } => Some(Rectangle::new(
                    [
                        (lon - REGION_HALF_LON, lat - REGION_HALF_LAT),
                        (lon + REGION_HALF_LON, lat + REGION_HALF_LAT),
                    ],
                    fill.filled(),
                )),
                MapMarker::Bubble { .. } => None,
            }))
            .map_err(draw_err)?;
        chart
            .draw_series(markers.iter().filter_map(|m| match *m {
                MapMarker::Bubble { lon, lat, radius } => {
                    Some(Circle::new((lon, lat), radius, BUBBLE.mix(0.7).filled()))
                }
                MapMarker::Region { .. } => None,
            }))
            .map_err(draw_err)?;

        if let Some(note) = note {
            chart
                .draw_series(std::iter::once(Text::new(
                    note,
                    (LON_RANGE.0 + 5.0, LAT_RANGE.0 + 5.0),
                    (FONT, 14).into_font(),
                )))
                .map_err(draw_err)?;
        }

        root.present().map_err(draw_err)?;
        Ok(())
    }
}

enum MapMarker {
    Bubble { lon: f64, lat: f64, radius: i32 },
    Region { lon: f64, lat: f64, fill: RGBColor },
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}
