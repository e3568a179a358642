//! CO2 Dashboard Main Application
//! Main window with control panel and chart viewer.

use crate::dashboard::{Dashboard, DashboardError, DashboardParams, DashboardView};
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use egui::{Color32, RichText, SidePanel};
use tracing::{error, info, warn};

/// What the central panel currently shows.
enum ViewState {
    Ready(DashboardView),
    Failed { title: String, messages: Vec<String> },
}

/// Main application window.
pub struct Co2DashboardApp {
    dashboard: Dashboard,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
    state: ViewState,
}

impl Co2DashboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, dashboard: Dashboard) -> Self {
        let config = dashboard.config();
        let (start, end) = (config.default_start_year, config.default_end_year);
        let bounds = (start.min(end), start.max(end));
        let params = DashboardParams::initial(config, bounds);

        let mut app = Self {
            dashboard,
            control_panel: ControlPanel::new(params, bounds),
            chart_viewer: ChartViewer::new(),
            state: ViewState::Failed {
                title: String::new(),
                messages: Vec::new(),
            },
        };
        app.reload();
        app
    }

    /// Load both tables, reset the sliders to the data's year range and render.
    fn reload(&mut self) {
        match self.dashboard.prepare() {
            Ok(data) => {
                info!(
                    rows = data.emissions.height(),
                    min_year = data.year_bounds.0,
                    max_year = data.year_bounds.1,
                    "data ready"
                );
                self.control_panel.year_bounds = data.year_bounds;
                self.control_panel.params =
                    DashboardParams::initial(self.dashboard.config(), data.year_bounds);
                self.rerender();
            }
            Err(e) => self.fail(e),
        }
    }

    fn rerender(&mut self) {
        let params = self.control_panel.params;
        match self.dashboard.render(&params) {
            Ok(view) => {
                self.state = ViewState::Ready(view);
                self.control_panel.export_enabled = true;
                self.control_panel.set_status("Ready");
            }
            Err(e) => self.fail(e),
        }
    }

    fn fail(&mut self, e: DashboardError) {
        error!("{e}");
        let messages = match &e {
            DashboardError::DataUnavailable { messages } => messages.clone(),
            other => vec![other.to_string()],
        };
        self.state = ViewState::Failed {
            title: e.to_string(),
            messages,
        };
        self.control_panel.export_enabled = false;
        self.control_panel.set_status("Error: no data");
    }

    fn handle_export_png(&mut self) {
        let ViewState::Ready(view) = &self.state else {
            return;
        };

        let Some(dir) = rfd::FileDialog::new()
            .set_title("Choose export folder")
            .pick_folder()
        else {
            return;
        };

        let config = self.dashboard.config();
        let size = (config.export_width, config.export_height);
        match view.export(&dir, size) {
            Ok(paths) => {
                self.control_panel
                    .set_status(&format!("Exported {} files to {}", paths.len(), dir.display()));
                if let Err(e) = open::that(&dir) {
                    warn!("Could not open {}: {e}", dir.display());
                }
            }
            Err(e) => {
                error!("Export failed: {e}");
                self.control_panel.set_status(&format!("Error: {e}"));
            }
        }
    }

    fn show_error_page(ui: &mut egui::Ui, title: &str, messages: &[String]) -> bool {
        let mut reload = false;
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            ui.label(
                RichText::new(format!("⚠ {title}"))
                    .size(22.0)
                    .color(Color32::from_rgb(220, 53, 69)),
            );
            ui.add_space(15.0);
            for message in messages {
                ui.label(RichText::new(message).size(14.0));
            }
            ui.add_space(20.0);
            if ui.button(RichText::new("🔄 Reload").size(14.0)).clicked() {
                reload = true;
            }
        });
        reload
    }
}

impl eframe::App for Co2DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(280.0)
            .max_width(330.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    match self.control_panel.show(ui) {
                        ControlPanelAction::ParamsChanged => self.rerender(),
                        ControlPanelAction::ExportPng => self.handle_export_png(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Chart Viewer
        let mut reload = false;
        egui::CentralPanel::default().show(ctx, |ui| match &self.state {
            ViewState::Ready(view) => self.chart_viewer.show(ui, view),
            ViewState::Failed { title, messages } => {
                reload = Self::show_error_page(ui, title, messages);
            }
        });
        if reload {
            self.reload();
        }
    }
}
