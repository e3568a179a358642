//! Chart Plotter Module
//! Draws chart figures interactively using egui_plot.

use super::figure::{BarFigure, ChoroplethFigure, GeoBubbleFigure, Rgb};
use super::geo::{LAT_RANGE, LON_RANGE};
use crate::stats::AggregatedRecord;
use egui::{Color32, RichText};
use egui_plot::{Bar, BarChart, Legend, MarkerShape, Plot, PlotPoints, Points};

pub const CHART_HEIGHT: f32 = 420.0;

/// Marker size for choropleth regions.
const REGION_RADIUS: f32 = 9.0;

pub fn color32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

/// Draws chart figures with egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Vertical bars, one per country. Coloured figures get one series per
    /// group so the legend lists each group once.
    pub fn draw_bar_chart(ui: &mut egui::Ui, id: &str, figure: &BarFigure) {
        let labels: Vec<String> = figure.bars.iter().map(|b| b.label.clone()).collect();

        let mut plot = Plot::new(id)
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .x_axis_label(figure.x_label.clone())
            .y_axis_label(figure.y_label.clone())
            .include_y(0.0)
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round();
                if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
                    return String::new();
                }
                labels.get(idx as usize).cloned().unwrap_or_default()
            });
        if !figure.legend.is_empty() {
            plot = plot.legend(Legend::default());
        }

        plot.show(ui, |plot_ui| {
            if figure.legend.is_empty() {
                let bars = figure
                    .bars
                    .iter()
                    .enumerate()
                    .map(|(i, b)| Self::bar(i, b.value, &b.label, b.color))
                    .collect();
                plot_ui.bar_chart(Self::bar_series(bars));
                return;
            }

            for (group, color) in &figure.legend {
                let bars = figure
                    .bars
                    .iter()
                    .enumerate()
                    .filter(|(_, b)| b.group.as_deref() == Some(group.as_str()))
                    .map(|(i, b)| Self::bar(i, b.value, &b.label, b.color))
                    .collect();
                plot_ui.bar_chart(Self::bar_series(bars).color(color32(*color)).name(group));
            }
        });
    }

    fn bar(index: usize, value: f64, label: &str, color: Rgb) -> Bar {
        Bar::new(index as f64, if value.is_finite() { value } else { 0.0 })
            .width(0.7)
            .name(label)
            .fill(color32(color))
    }

    fn bar_series(bars: Vec<Bar>) -> BarChart {
        BarChart::new(bars).element_formatter(Box::new(|bar, _chart| {
            format!("{}\n{:.2} t", bar.name, bar.value)
        }))
    }

    /// Bubbles at country centroids on a longitude/latitude plane.
    pub fn draw_geo_bubbles(ui: &mut egui::Ui, id: &str, figure: &GeoBubbleFigure) {
        Self::map_plot(id).show(ui, |plot_ui| {
            for bubble in &figure.bubbles {
                if bubble.radius <= 0.0 {
                    continue;
                }
                plot_ui.points(
                    Points::new(PlotPoints::new(vec![[bubble.lon, bubble.lat]]))
                        .radius(bubble.radius)
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .color(Color32::from_rgb(99, 110, 250).gamma_multiply(0.7))
                        .name(format!("{} ({:.2} t)", bubble.name, bubble.value)),
                );
            }
        });
    }

    /// Centroid markers filled by value on the Reds scale.
    pub fn draw_choropleth(ui: &mut egui::Ui, id: &str, figure: &ChoroplethFigure) {
        Self::map_plot(id).show(ui, |plot_ui| {
            for region in &figure.regions {
                plot_ui.points(
                    Points::new(PlotPoints::new(vec![[region.lon, region.lat]]))
                        .radius(REGION_RADIUS)
                        .shape(MarkerShape::Square)
                        .filled(true)
                        .color(color32(region.fill))
                        .name(format!("{} ({:.2} t)", region.name, region.value)),
                );
            }
        });
    }

    fn map_plot(id: &str) -> Plot<'_> {
        Plot::new(id)
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .data_aspect(1.0)
            .include_x(LON_RANGE.0)
            .include_x(LON_RANGE.1)
            .include_y(LAT_RANGE.0)
            .include_y(LAT_RANGE.1)
            .x_axis_label("Longitude")
            .y_axis_label("Latitude")
            .label_formatter(|name, value| {
                if name.is_empty() {
                    format!("{:.1}, {:.1}", value.x, value.y)
                } else {
                    name.to_string()
                }
            })
    }

    /// Aggregated rows as a striped grid.
    pub fn draw_records_table(ui: &mut egui::Ui, id: &str, records: &[AggregatedRecord]) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::Grid::new(ui.make_persistent_id(id))
                    .striped(true)
                    .min_col_width(80.0)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new("Country Name").strong().size(11.0));
                        ui.label(RichText::new("Country Code").strong().size(11.0));
                        ui.label(RichText::new("Continent").strong().size(11.0));
                        ui.label(RichText::new("CO2 Per Capita (metric tons)").strong().size(11.0));
                        ui.end_row();

                        for r in records {
                            ui.label(RichText::new(&r.country_name).size(11.0));
                            ui.label(RichText::new(r.country_code.as_deref().unwrap_or("-")).size(11.0));
                            ui.label(RichText::new(r.continent.as_deref().unwrap_or("-")).size(11.0));
                            ui.label(RichText::new(format!("{:.3}", r.mean_co2)).size(11.0));
                            ui.end_row();
                        }
                    });
            });
    }
}
