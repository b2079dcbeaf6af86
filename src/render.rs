use druid::kurbo::Circle;
use druid::kurbo::Line;
use druid::Color;
use druid::PaintCtx;
use druid::Point;
use druid::RenderContext;
use druid::Size;

use crate::schema::DataPoint;
use crate::schema::LineParams;

pub const CANVAS_SIZE: Size = Size::new(300.0, 200.0);
pub const POINT_RADIUS: f64 = 5.0;
pub const STROKE_WIDTH: f64 = 1.0;

pub const BACKGROUND_COLOR: Color = Color::WHITE;
pub const AXIS_COLOR: Color = Color::BLACK;
pub const POINT_COLOR: Color = Color::RED;
pub const LINE_COLOR: Color = Color::BLUE;
pub const ERROR_COLOR: Color = Color::GREEN;

/// The drawing primitives the plot needs, in surface coordinates (y grows downward).
pub trait Surface {
    fn size(&self) -> Size;
    fn clear(&mut self);
    fn set_stroke_color(&mut self, color: Color);
    fn set_fill_color(&mut self, color: Color);
    fn stroke_line(&mut self, from: Point, to: Point);
    fn fill_circle(&mut self, center: Point, radius: f64);
}

/// Redraws the whole plot and returns the sum of squared errors of `line`.
pub fn draw_plot(surface: &mut impl Surface, points: &[DataPoint], line: &LineParams) -> f64 {
    let Size { width, height } = surface.size();
    let to_screen = |x: f64, y: f64| Point::new(x, height - y);

    surface.clear();

    // Axes
    surface.set_stroke_color(AXIS_COLOR);
    surface.stroke_line(to_screen(0.0, 0.0), to_screen(width, 0.0));
    surface.stroke_line(to_screen(0.0, 0.0), to_screen(0.0, height));

    surface.set_fill_color(POINT_COLOR);
    for point in points {
        surface.fill_circle(to_screen(point.x, point.y), POINT_RADIUS);
    }

    surface.set_stroke_color(LINE_COLOR);
    surface.stroke_line(
        to_screen(0.0, line.predict(0.0)),
        to_screen(width, line.predict(width)),
    );

    // Error segments
    surface.set_stroke_color(ERROR_COLOR);
    let mut sse = 0.0;
    for point in points {
        let predicted = line.predict(point.x);
        let error = point.y - predicted;
        sse += error * error;
        surface.stroke_line(to_screen(point.x, point.y), to_screen(point.x, predicted));
    }
    sse
}

pub struct PaintSurface<'p, 'a, 'b, 'c> {
    ctx: &'p mut PaintCtx<'a, 'b, 'c>,
    stroke: Color,
    fill: Color,
}

impl<'p, 'a, 'b, 'c> PaintSurface<'p, 'a, 'b, 'c> {
    pub fn new(ctx: &'p mut PaintCtx<'a, 'b, 'c>) -> Self {
        PaintSurface {
            ctx,
            stroke: AXIS_COLOR,
            fill: AXIS_COLOR,
        }
    }
}

impl Surface for PaintSurface<'_, '_, '_, '_> {
    fn size(&self) -> Size {
        self.ctx.size()
    }

    fn clear(&mut self) {
        let rect = self.ctx.size().to_rect();
        self.ctx.fill(rect, &BACKGROUND_COLOR);
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke = color;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    fn stroke_line(&mut self, from: Point, to: Point) {
        self.ctx.stroke(Line::new(from, to), &self.stroke, STROKE_WIDTH);
    }

    fn fill_circle(&mut self, center: Point, radius: f64) {
        self.ctx.fill(Circle::new(center, radius), &self.fill);
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use druid::Color;
    use druid::Point;
    use druid::Size;
    use itertools::Itertools;
    use proptest::prelude::*;

    use super::*;
    use crate::schema::sample_points;
    use crate::schema::sum_squared_errors;

    #[derive(Clone, Debug, PartialEq)]
    enum Op {
        Clear,
        Stroke(Color),
        Fill(Color),
        Line(Point, Point),
        Circle(Point, f64),
    }

    struct Recorder {
        size: Size,
        ops: Vec<Op>,
    }

    impl Recorder {
        fn new() -> Self {
            Recorder {
                size: CANVAS_SIZE,
                ops: Vec::new(),
            }
        }
    }

    impl Surface for Recorder {
        fn size(&self) -> Size {
            self.size
        }
        fn clear(&mut self) {
            self.ops.push(Op::Clear);
        }
        fn set_stroke_color(&mut self, color: Color) {
            self.ops.push(Op::Stroke(color));
        }
        fn set_fill_color(&mut self, color: Color) {
            self.ops.push(Op::Fill(color));
        }
        fn stroke_line(&mut self, from: Point, to: Point) {
            self.ops.push(Op::Line(from, to));
        }
        fn fill_circle(&mut self, center: Point, radius: f64) {
            self.ops.push(Op::Circle(center, radius));
        }
    }

    #[test]
    fn draws_in_order() {
        let mut recorder = Recorder::new();
        let points = [DataPoint::new(50.0, 50.0), DataPoint::new(100.0, 70.0)];
        draw_plot(&mut recorder, &points, &LineParams::new(0.5, 20.0));

        let expected = vec![
            Op::Clear,
            Op::Stroke(AXIS_COLOR),
            Op::Line(Point::new(0.0, 200.0), Point::new(300.0, 200.0)),
            Op::Line(Point::new(0.0, 200.0), Point::new(0.0, 0.0)),
            Op::Fill(POINT_COLOR),
            Op::Circle(Point::new(50.0, 150.0), POINT_RADIUS),
            Op::Circle(Point::new(100.0, 130.0), POINT_RADIUS),
            Op::Stroke(LINE_COLOR),
            Op::Line(Point::new(0.0, 180.0), Point::new(300.0, 30.0)),
            Op::Stroke(ERROR_COLOR),
            Op::Line(Point::new(50.0, 150.0), Point::new(50.0, 155.0)),
            Op::Line(Point::new(100.0, 130.0), Point::new(100.0, 130.0)),
        ];
        assert_eq!(recorder.ops, expected);
    }

    #[test]
    fn error_segments_are_vertical() {
        let mut recorder = Recorder::new();
        draw_plot(&mut recorder, &sample_points(), &LineParams::new(-1.3, 150.0));
        let segments = recorder
            .ops
            .iter()
            .skip_while(|op| **op != Op::Stroke(ERROR_COLOR))
            .filter_map(|op| match op {
                Op::Line(from, to) => Some((*from, *to)),
                _ => None,
            })
            .collect_vec();
        assert_eq!(segments.len(), 5);
        assert!(segments.iter().all(|(from, to)| from.x == to.x));
    }

    #[test]
    fn sse_of_best_fit() {
        let mut recorder = Recorder::new();
        let sse = draw_plot(&mut recorder, &sample_points(), &LineParams::new(0.64, 12.0));
        // residuals: 6, -6, -8, 10, -2
        assert_relative_eq!(sse, 240.0, epsilon = 1e-9);
    }

    #[test]
    fn non_finite_line_still_draws() {
        let mut recorder = Recorder::new();
        let sse = draw_plot(&mut recorder, &sample_points(), &LineParams::new(f64::NAN, f64::NAN));
        assert!(sse.is_nan());
        assert_eq!(recorder.ops.first(), Some(&Op::Clear));
    }

    proptest! {
        #[test]
        fn drawn_sse_matches_model(slope in -2.0f64..=2.0, intercept in -100.0f64..=200.0) {
            let points = sample_points();
            let line = LineParams::new(slope, intercept);
            let mut recorder = Recorder::new();
            let drawn = draw_plot(&mut recorder, &points, &line);
            let expected = sum_squared_errors(&points, &line);
            prop_assert!((drawn - expected).abs() <= 1e-9 * expected.max(1.0));
        }
    }
}
