use std::sync::Arc;

use derive_new::new;
use druid::Data;
use druid::Lens;

#[derive(Clone, Copy, Debug, PartialEq, Data, new)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Data, Lens, new, derive_more::Display)]
#[display(fmt = "y = {:.2}x + {:.2}", slope, intercept)]
pub struct LineParams {
    pub slope: f64,
    pub intercept: f64,
}

impl LineParams {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Vertical distance from the line to the point, positive when the point lies above it.
    pub fn residual(&self, point: &DataPoint) -> f64 {
        point.y - self.predict(point.x)
    }
}

impl Default for LineParams {
    fn default() -> Self {
        LineParams::new(1.0, 0.0)
    }
}

pub fn sample_points() -> Arc<[DataPoint]> {
    Arc::new([
        DataPoint::new(50.0, 50.0),
        DataPoint::new(100.0, 70.0),
        DataPoint::new(150.0, 100.0),
        DataPoint::new(200.0, 150.0),
        DataPoint::new(250.0, 170.0),
    ])
}

pub fn sum_squared_errors(points: &[DataPoint], line: &LineParams) -> f64 {
    points
        .iter()
        .map(|point| line.residual(point))
        .map(|e| e * e)
        .sum()
}
