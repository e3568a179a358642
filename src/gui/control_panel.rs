//! Control Panel Widget
//! Left side panel with the year range, country count and view toggles.

use crate::config::TOP_N_OPTIONS;
use crate::dashboard::DashboardParams;
use egui::{Color32, ComboBox, RichText, Slider};

/// Left side control panel.
pub struct ControlPanel {
    pub params: DashboardParams,
    pub year_bounds: (i64, i64),
    pub status: String,
    pub export_enabled: bool,
}

impl ControlPanel {
    pub fn new(params: DashboardParams, year_bounds: (i64, i64)) -> Self {
        Self {
            params,
            year_bounds,
            status: "Ready".to_string(),
            export_enabled: false,
        }
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;
        let before = self.params;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🌍 CO2 per Country")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Filters =====
        ui.label(RichText::new("Filters").size(14.0).strong());
        ui.add_space(8.0);

        let (min_year, max_year) = self.year_bounds;
        ui.label("Year range");
        ui.add(Slider::new(&mut self.params.start_year, min_year..=max_year).text("from"));
        ui.add(Slider::new(&mut self.params.end_year, min_year..=max_year).text("to"));

        ui.add_space(10.0);

        ui.horizontal(|ui| {
            ui.label("Number of countries");
            ComboBox::from_id_salt("top_n")
                .width(60.0)
                .selected_text(self.params.top_n.to_string())
                .show_ui(ui, |ui| {
                    for n in TOP_N_OPTIONS {
                        ui.selectable_value(&mut self.params.top_n, n, n.to_string());
                    }
                });
        });

        ui.add_space(10.0);
        ui.checkbox(&mut self.params.show_raw, "📋 Show raw data");

        if self.params != before {
            action = ControlPanelAction::ParamsChanged;
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Export =====
        ui.vertical_centered(|ui| {
            ui.add_enabled_ui(self.export_enabled, |ui| {
                let button = egui::Button::new(RichText::new("🖼 Export PNG").size(14.0))
                    .min_size(egui::vec2(150.0, 30.0));
                if ui.add(button).clicked() {
                    action = ControlPanelAction::ExportPng;
                }
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(5.0);

        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("Exported") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    ParamsChanged,
    ExportPng,
}
