use std::ops::RangeInclusive;

use crate::linest::fit_points;
use crate::schema::DataPoint;
use crate::schema::LineParams;

pub const SLOPE_STEP: f64 = 0.1;
pub const SLOPE_BOUNDS: RangeInclusive<f64> = -2.0..=2.0;
pub const INTERCEPT_STEP: f64 = 10.0;
pub const INTERCEPT_BOUNDS: RangeInclusive<f64> = -100.0..=200.0;

/// Moves `value` by `delta`, stopping at the bound it moves toward.
/// A value already outside `bounds` (e.g. after a best fit) moves one step back toward the range.
pub fn step_clamped(value: f64, delta: f64, bounds: &RangeInclusive<f64>) -> f64 {
    let stepped = value + delta;
    if delta < 0.0 {
        stepped.max(*bounds.start())
    } else {
        stepped.min(*bounds.end())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display)]
pub enum LineAction {
    #[display(fmt = "slope -")]
    DecrementSlope,
    #[display(fmt = "slope +")]
    IncrementSlope,
    #[display(fmt = "intercept -")]
    DecrementIntercept,
    #[display(fmt = "intercept +")]
    IncrementIntercept,
    #[display(fmt = "best fit")]
    BestFit,
}

impl LineAction {
    pub fn apply(self, line: &mut LineParams, points: &[DataPoint]) {
        match self {
            LineAction::DecrementSlope => {
                line.slope = step_clamped(line.slope, -SLOPE_STEP, &SLOPE_BOUNDS)
            }
            LineAction::IncrementSlope => {
                line.slope = step_clamped(line.slope, SLOPE_STEP, &SLOPE_BOUNDS)
            }
            LineAction::DecrementIntercept => {
                line.intercept = step_clamped(line.intercept, -INTERCEPT_STEP, &INTERCEPT_BOUNDS)
            }
            LineAction::IncrementIntercept => {
                line.intercept = step_clamped(line.intercept, INTERCEPT_STEP, &INTERCEPT_BOUNDS)
            }
            LineAction::BestFit => match fit_points(points) {
                Some(fit) => {
                    // Not clamped to the manual bounds.
                    line.slope = fit.slope;
                    line.intercept = fit.intercept;
                    tracing::info!(
                        slope = fit.slope,
                        intercept = fit.intercept,
                        r2 = fit.r2,
                        "snapped to least-squares fit"
                    );
                }
                None => tracing::warn!(n = points.len(), "not enough points to fit a line"),
            },
        }
    }
}
