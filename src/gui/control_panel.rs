//! Control Panel Widget
//! Left side panel with file selection and pool selection controls.

use egui::{Color32, RichText, ScrollArea};
use std::path::PathBuf;

/// Left side control panel with file selection and the pool multi-select.
pub struct ControlPanel {
    pub csv_path: Option<PathBuf>,
    pub pools: Vec<String>,
    pub selected: Vec<bool>,
    pub row_count: usize,
    pub status: String,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            csv_path: None,
            pools: Vec::new(),
            selected: Vec::new(),
            row_count: 0,
            status: "Ready".to_string(),
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pool list after a dataset load. The initial selection is
    /// the first pool in sorted order (the list arrives sorted).
    pub fn update_pools(&mut self, pools: Vec<String>) {
        self.selected = vec![false; pools.len()];
        if let Some(first) = self.selected.first_mut() {
            *first = true;
        }
        self.pools = pools;
    }

    /// Currently selected pool names, in list (sorted) order.
    pub fn selection(&self) -> Vec<String> {
        self.pools
            .iter()
            .zip(self.selected.iter())
            .filter(|(_, &on)| on)
            .map(|(pool, _)| pool.clone())
            .collect()
    }

    /// Set the status line.
    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("Fundviz")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Grant Funding Distribution")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== CSV File Section =====
        ui.label(RichText::new("Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let path_text = self
                        .csv_path
                        .as_ref()
                        .and_then(|p| p.file_name())
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "No file selected".to_string());

                    ui.label(RichText::new(&path_text).size(12.0).color(
                        if self.csv_path.is_some() {
                            Color32::WHITE
                        } else {
                            Color32::GRAY
                        },
                    ));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Browse").clicked() {
                            action = ControlPanelAction::BrowseCsv;
                        }
                    });
                });
            });

        if self.row_count > 0 {
            ui.add_space(5.0);
            ui.label(
                RichText::new(format!(
                    "{} grants across {} pools",
                    self.row_count,
                    self.pools.len()
                ))
                .size(11.0)
                .color(Color32::GRAY),
            );
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Pool Selection Section =====
        ui.label(RichText::new("Grant Pools").size(14.0).strong());
        ui.add_space(5.0);

        if self.pools.is_empty() {
            ui.label(RichText::new("Load a CSV to list pools").color(Color32::GRAY));
        } else {
            ui.horizontal(|ui| {
                if ui.small_button("All").clicked() {
                    self.selected.iter_mut().for_each(|v| *v = true);
                    action = ControlPanelAction::SelectionChanged;
                }
                if ui.small_button("None").clicked() {
                    self.selected.iter_mut().for_each(|v| *v = false);
                    action = ControlPanelAction::SelectionChanged;
                }
            });
            ui.add_space(5.0);

            egui::Frame::none()
                .fill(ui.visuals().widgets.noninteractive.bg_fill)
                .rounding(5.0)
                .inner_margin(5.0)
                .show(ui, |ui| {
                    ScrollArea::vertical().max_height(260.0).show(ui, |ui| {
                        for (i, pool) in self.pools.iter().enumerate() {
                            if i < self.selected.len()
                                && ui.checkbox(&mut self.selected[i], pool).changed()
                            {
                                action = ControlPanelAction::SelectionChanged;
                            }
                        }
                    });
                });
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Status Section =====
        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("Loaded") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    BrowseCsv,
    SelectionChanged,
}
