//! Curve module - cumulative distribution computation

mod builder;

pub use builder::{
    CurveBuilder, CurveSeries, DistributionChart, AXIS_DOMAIN, MARKER_POINT_THRESHOLD,
    X_AXIS_TITLE, Y_AXIS_TITLE,
};
