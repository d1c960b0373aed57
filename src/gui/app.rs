//! Fundviz Main Application
//! Main window with control panel and chart viewer.

use egui::SidePanel;
use std::sync::mpsc::{channel, Receiver};
use std::thread;

use crate::curve::CurveBuilder;
use crate::data::{load_csv, GrantDataset};
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};

/// CSV loading result from background thread
enum LoadResult {
    Complete(GrantDataset),
    Error(String),
}

/// Main application window.
pub struct FundvizApp {
    dataset: Option<GrantDataset>,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,

    // Async CSV loading
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
}

impl FundvizApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            dataset: None,
            control_panel: ControlPanel::new(),
            chart_viewer: ChartViewer::new(),
            load_rx: None,
            is_loading: false,
        }
    }

    /// Handle CSV file selection; the parse runs on a background thread.
    fn handle_browse_csv(&mut self) {
        if self.is_loading {
            return; // Already loading
        }

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        {
            self.chart_viewer.clear();
            self.dataset = None;
            self.control_panel.csv_path = Some(path.clone());
            self.control_panel.set_status("Loading CSV file...");
            self.is_loading = true;

            let (tx, rx) = channel();
            self.load_rx = Some(rx);

            thread::spawn(move || {
                let result = match load_csv(&path) {
                    Ok(dataset) => LoadResult::Complete(dataset),
                    Err(e) => LoadResult::Error(e.to_string()),
                };
                let _ = tx.send(result);
            });
        }
    }

    /// Check for CSV loading results
    fn check_load_results(&mut self) {
        let rx = self.load_rx.take();
        if let Some(rx) = rx {
            let mut should_keep_receiver = true;

            while let Ok(result) = rx.try_recv() {
                match result {
                    LoadResult::Complete(dataset) => {
                        log::info!(
                            "Loaded {} grants across {} pools",
                            dataset.len(),
                            dataset.pool_names().len()
                        );
                        self.control_panel.row_count = dataset.len();
                        self.control_panel
                            .update_pools(dataset.pool_names().to_vec());
                        self.control_panel.set_status(&format!(
                            "Loaded {} grants, {} pools",
                            dataset.len(),
                            dataset.pool_names().len()
                        ));
                        self.dataset = Some(dataset);
                        self.rebuild_chart();
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                    LoadResult::Error(error) => {
                        log::error!("Failed to load CSV: {error}");
                        self.control_panel.set_status(&format!("Error: {error}"));
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                }
            }

            if should_keep_receiver {
                self.load_rx = Some(rx);
            }
        }
    }

    /// Rebuild the chart from the current dataset and pool selection.
    fn rebuild_chart(&mut self) {
        if let Some(dataset) = &self.dataset {
            let selection = self.control_panel.selection();
            let chart = CurveBuilder::build(dataset, &selection);
            self.chart_viewer.set_chart(chart);
        }
    }
}

impl eframe::App for FundvizApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_load_results();

        if self.is_loading {
            ctx.request_repaint();
        }

        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(260.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui);

                    match action {
                        ControlPanelAction::BrowseCsv => self.handle_browse_csv(),
                        ControlPanelAction::SelectionChanged => self.rebuild_chart(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Chart Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}
