use std::sync::Arc;

use druid::Data;
use druid::Lens;

use crate::controls::LineAction;
use crate::schema::sample_points;
use crate::schema::sum_squared_errors;
use crate::schema::DataPoint;
use crate::schema::LineParams;

#[derive(Clone, Debug, Data, Lens)]
pub struct PlotData {
    pub points: Arc<[DataPoint]>,
    pub line: LineParams,
    /// Only written through [`PlotData::change_line`] and the constructor.
    pub sse: f64,
}

impl PlotData {
    pub fn new(points: Arc<[DataPoint]>, line: LineParams) -> Self {
        let mut data = PlotData {
            points,
            line,
            sse: 0.0,
        };
        data.refresh_sse();
        data
    }

    /// Applies `action` to the line and recomputes the SSE for the new line.
    pub fn change_line(&mut self, action: LineAction) {
        action.apply(&mut self.line, &self.points);
        self.refresh_sse();
    }

    fn refresh_sse(&mut self) {
        self.sse = sum_squared_errors(&self.points, &self.line);
    }
}

impl Default for PlotData {
    fn default() -> Self {
        PlotData::new(sample_points(), LineParams::default())
    }
}
