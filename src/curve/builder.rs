//! Distribution Curve Builder Module
//! Turns per-grant rows into normalized cumulative distribution curves,
//! one per selected pool.

use rayon::prelude::*;

use crate::data::GrantDataset;

/// X axis title, fixed for every chart.
pub const X_AXIS_TITLE: &str = "Percentage of Projects Funded";
/// Y axis title, fixed for every chart.
pub const Y_AXIS_TITLE: &str = "Percentage of Funding Remaining";
/// Both axes span this domain.
pub const AXIS_DOMAIN: (f64, f64) = (0.0, 100.0);

/// Below this many records a series is drawn with point markers in
/// addition to the connecting line.
pub const MARKER_POINT_THRESHOLD: usize = 10;

/// One pool's distribution curve.
///
/// `points[0]` is always the synthetic anchor `[0, 100]`: zero projects
/// funded, all funding still unallocated. The remaining points step through
/// the pool's grants ranked largest-first, so x climbs to 100 while y falls
/// toward 0.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSeries {
    pub pool_name: String,
    pub points: Vec<[f64; 2]>,
    pub show_markers: bool,
}

/// All requested curves plus the fixed presentation metadata, ready for a
/// chart host. Rebuilt from scratch on every selection change.
#[derive(Debug, Clone)]
pub struct DistributionChart {
    pub series: Vec<CurveSeries>,
    pub x_title: &'static str,
    pub y_title: &'static str,
    pub axis_domain: (f64, f64),
}

impl Default for DistributionChart {
    fn default() -> Self {
        Self {
            series: Vec::new(),
            x_title: X_AXIS_TITLE,
            y_title: Y_AXIS_TITLE,
            axis_domain: AXIS_DOMAIN,
        }
    }
}

impl DistributionChart {
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// Builds distribution curves from a loaded dataset.
pub struct CurveBuilder;

impl CurveBuilder {
    /// Build one curve per selected pool, in selection order.
    ///
    /// Pools with no matching records are skipped silently: a selected pool
    /// that is absent from the data simply contributes nothing to the
    /// chart. Pure and deterministic; pools are independent, so the
    /// per-pool work runs on the rayon pool (order is preserved).
    pub fn build(dataset: &GrantDataset, selection: &[String]) -> DistributionChart {
        let series: Vec<CurveSeries> = selection
            .par_iter()
            .filter_map(|pool_name| Self::build_series(dataset, pool_name))
            .collect();

        DistributionChart {
            series,
            ..Default::default()
        }
    }

    /// Build the curve for a single pool, or `None` if the pool has no
    /// records in the dataset.
    pub fn build_series(dataset: &GrantDataset, pool_name: &str) -> Option<CurveSeries> {
        let mut amounts = dataset.amounts_for_pool(pool_name);
        if amounts.is_empty() {
            return None;
        }

        // Largest grants first: the early steep drop is what exposes
        // funding concentration.
        amounts.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));

        let total_funding: f64 = amounts.iter().sum();
        let n = amounts.len();

        let mut points = Vec::with_capacity(n + 1);
        points.push([0.0, 100.0]);

        let mut running = 0.0;
        for (i, amount) in amounts.iter().enumerate() {
            running += amount;
            // Guard: a pool whose grants sum to zero has no meaningful
            // shares; treat every contribution as zero instead of dividing.
            let funded_pct = if total_funding > 0.0 {
                running / total_funding * 100.0
            } else {
                0.0
            };
            let project_pct = 100.0 * (i + 1) as f64 / n as f64;
            points.push([project_pct, 100.0 - funded_pct]);
        }

        Some(CurveSeries {
            pool_name: pool_name.to_string(),
            points,
            show_markers: n < MARKER_POINT_THRESHOLD,
        })
    }
}
