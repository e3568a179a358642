//! Chart Viewer Widget
//! Scrollable central panel: summary metrics, the four chart cards and the
//! optional raw table.

use crate::charts::ChartPlotter;
use crate::dashboard::DashboardView;
use egui::{Color32, RichText, ScrollArea};

const CARD_SPACING: f32 = 15.0;
const INFO_WIDTH: f32 = 260.0;

/// Central chart display area.
#[derive(Default)]
pub struct ChartViewer;

impl ChartViewer {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&self, ui: &mut egui::Ui, view: &DashboardView) {
        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("🌍 CO2 per Country Investigation");
                ui.add_space(10.0);

                Self::draw_metrics(ui, view);
                ui.separator();

                ui.label(RichText::new("📊 Top CO2 Emitters").size(18.0).strong());
                ui.label(RichText::new(&view.top_emitters.title).size(13.0));
                Self::draw_with_info(
                    ui,
                    "📌 Shows average CO2 emissions per capita for selected period",
                    |ui| ChartPlotter::draw_bar_chart(ui, "top_emitters", &view.top_emitters),
                );
                ui.separator();

                ui.label(RichText::new("🗺 Geographic Distribution").size(18.0).strong());
                ui.label(RichText::new(&view.geo_bubbles.title).size(13.0));
                Self::draw_with_info(
                    ui,
                    "🌐 Interactive map showing top emitter locations",
                    |ui| ChartPlotter::draw_geo_bubbles(ui, "geo_bubbles", &view.geo_bubbles),
                );
                Self::draw_unplaced(ui, &view.geo_bubbles.unplaced);
                ui.separator();

                ui.label(RichText::new("🌐 Emissions by Continent").size(18.0).strong());
                ui.label(RichText::new(&view.continent_bars.title).size(13.0));
                ChartPlotter::draw_bar_chart(ui, "continent_bars", &view.continent_bars);
                ui.separator();

                ui.label(RichText::new("🔥 Choropleth Map").size(18.0).strong());
                ui.label(RichText::new(&view.choropleth.title).size(13.0));
                if let Some((lo, hi)) = view.choropleth.value_range {
                    ui.label(
                        RichText::new(format!("Fill: {lo:.2} (light) to {hi:.2} (dark) t per capita"))
                            .size(11.0)
                            .color(Color32::GRAY),
                    );
                }
                ChartPlotter::draw_choropleth(ui, "choropleth", &view.choropleth);
                Self::draw_unplaced(ui, &view.choropleth.unplaced);

                if let Some(records) = &view.raw_records {
                    ui.separator();
                    ui.label(RichText::new("Raw Data").size(18.0).strong());
                    ChartPlotter::draw_records_table(ui, "raw_records", records);
                }
                ui.add_space(CARD_SPACING);
            });
    }

    fn draw_metrics(ui: &mut egui::Ui, view: &DashboardView) {
        let metrics = &view.metrics;
        ui.columns(3, |cols| {
            Self::metric(&mut cols[0], "Years Selected", &metrics.years_selected);
            Self::metric(&mut cols[1], "Top Countries", &metrics.top_countries.to_string());
            Self::metric(&mut cols[2], "Data Points", &metrics.data_points_label());
        });
        ui.add_space(CARD_SPACING);
    }

    fn metric(ui: &mut egui::Ui, label: &str, value: &str) {
        ui.label(RichText::new(label).size(12.0).color(Color32::GRAY));
        ui.label(RichText::new(value).size(26.0).strong());
    }

    /// Chart on the left, info caption on the right.
    fn draw_with_info(ui: &mut egui::Ui, info: &str, chart: impl FnOnce(&mut egui::Ui)) {
        ui.horizontal_top(|ui| {
            let chart_width = (ui.available_width() - INFO_WIDTH - CARD_SPACING).max(200.0);
            ui.vertical(|ui| {
                ui.set_width(chart_width);
                chart(ui);
            });
            ui.add_space(CARD_SPACING);
            egui::Frame::none()
                .fill(Color32::from_rgb(225, 238, 252))
                .rounding(5.0)
                .inner_margin(10.0)
                .show(ui, |ui| {
                    ui.set_width(INFO_WIDTH - 20.0);
                    ui.label(RichText::new(info).color(Color32::from_rgb(20, 60, 110)));
                });
        });
        ui.add_space(CARD_SPACING);
    }

    fn draw_unplaced(ui: &mut egui::Ui, unplaced: &[String]) {
        if unplaced.is_empty() {
            return;
        }
        ui.label(
            RichText::new(format!("Not on map: {}", unplaced.join(", ")))
                .size(11.0)
                .color(Color32::GRAY),
        );
    }
}
