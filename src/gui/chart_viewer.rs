//! Chart Viewer Widget
//! Central panel displaying the overlaid distribution curves.

use egui::{Color32, RichText};

use crate::charts::ChartPlotter;
use crate::curve::DistributionChart;

/// Central chart display area.
pub struct ChartViewer {
    chart: DistributionChart,
    dataset_loaded: bool,
}

impl Default for ChartViewer {
    fn default() -> Self {
        Self {
            chart: DistributionChart::default(),
            dataset_loaded: false,
        }
    }
}

impl ChartViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the current chart and dataset marker (on new file load).
    pub fn clear(&mut self) {
        self.chart = DistributionChart::default();
        self.dataset_loaded = false;
    }

    /// Replace the displayed chart.
    pub fn set_chart(&mut self, chart: DistributionChart) {
        self.chart = chart;
        self.dataset_loaded = true;
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        if !self.dataset_loaded {
            ui.centered_and_justified(|ui| {
                ui.label(
                    RichText::new("Load a grant CSV to compare funding distribution across pools")
                        .size(16.0)
                        .color(Color32::GRAY),
                );
            });
            return;
        }

        // Empty selection: prompt instead of an empty plot.
        if self.chart.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(
                    RichText::new("Select at least one grant pool to display")
                        .size(16.0)
                        .color(Color32::from_rgb(243, 156, 18)),
                );
            });
            return;
        }

        ui.vertical_centered(|ui| {
            ui.add_space(8.0);
            ui.label(
                RichText::new("Grant Funding Distribution by Pool")
                    .size(18.0)
                    .strong(),
            );
        });
        ui.add_space(4.0);

        ChartPlotter::draw_distribution_chart(ui, &self.chart);
    }
}
