//! Chart Plotter Module
//! Draws the funding distribution chart using egui_plot.

use egui::Color32;
use egui_plot::{Corner, Legend, Line, Plot, PlotPoints, Points};

use crate::curve::DistributionChart;

/// Color palette for pools, indexed by series position
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(52, 152, 219),  // Blue
    Color32::from_rgb(231, 76, 60),   // Red
    Color32::from_rgb(46, 204, 113),  // Green
    Color32::from_rgb(155, 89, 182),  // Purple
    Color32::from_rgb(243, 156, 18),  // Orange
    Color32::from_rgb(26, 188, 156),  // Teal
    Color32::from_rgb(233, 30, 99),   // Pink
    Color32::from_rgb(0, 188, 212),   // Cyan
    Color32::from_rgb(255, 87, 34),   // Deep Orange
    Color32::from_rgb(121, 85, 72),   // Brown
];

/// Renders [`DistributionChart`] values into an egui plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Get color for a series by its position in the chart.
    pub fn series_color(index: usize) -> Color32 {
        PALETTE[index % PALETTE.len()]
    }

    /// Draw the overlaid distribution curves.
    ///
    /// Both axes are pinned to the 0..100 domain; the legend sits below the
    /// plot area. Small pools get point markers on top of the line so a
    /// two-point curve still reads as a curve.
    pub fn draw_distribution_chart(ui: &mut egui::Ui, chart: &DistributionChart) {
        let (axis_min, axis_max) = chart.axis_domain;

        Plot::new("funding_distribution")
            .legend(Legend::default().position(Corner::LeftBottom))
            .x_axis_label(chart.x_title)
            .y_axis_label(chart.y_title)
            .include_x(axis_min)
            .include_x(axis_max)
            .include_y(axis_min)
            .include_y(axis_max)
            .clamp_grid(true)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                for (i, series) in chart.series.iter().enumerate() {
                    let color = Self::series_color(i);

                    plot_ui.line(
                        Line::new(PlotPoints::from_iter(series.points.iter().copied()))
                            .color(color)
                            .width(1.5)
                            .name(&series.pool_name),
                    );

                    if series.show_markers {
                        plot_ui.points(
                            Points::new(PlotPoints::from_iter(series.points.iter().copied()))
                                .radius(3.0)
                                .color(color),
                        );
                    }
                }
            });
    }
}
