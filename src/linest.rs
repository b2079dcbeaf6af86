use druid::Data;

use crate::schema::DataPoint;

/// Running sums for a closed-form least-squares fit of `y = slope * x + intercept`.
#[derive(Clone, Copy, Default, Debug, Data)]
pub struct Linest {
    x_sum: f64,
    x2_sum: f64,
    y_sum: f64,
    y2_sum: f64,
    xy_sum: f64,
    n: usize,
}

#[derive(Clone, Copy, Debug, Data, PartialEq)]
pub struct LinestResult {
    pub slope: f64,
    pub intercept: f64,
    pub r2: f64,
}

impl Linest {
    pub fn push(&mut self, x: f64, y: f64) {
        self.x_sum += x;
        self.x2_sum += x * x;
        self.y_sum += y;
        self.y2_sum += y * y;
        self.xy_sum += x * y;
        self.n += 1;
    }

    /// Returns `None` for fewer than two samples.
    /// Identical x values are not rejected; they produce a non-finite slope.
    pub fn estimate(&self) -> Option<LinestResult> {
        (self.n > 1).then(|| {
            let n = self.n as f64;
            let denom = n * self.x2_sum - self.x_sum * self.x_sum;
            let gue = n * self.xy_sum - self.x_sum * self.y_sum;
            let slope = gue / denom;
            let intercept = (self.y_sum - slope * self.x_sum) / n;
            let r2 = gue * gue / denom / (n * self.y2_sum - self.y_sum * self.y_sum);
            LinestResult {
                slope,
                intercept,
                r2,
            }
        })
    }
}

impl<'a> FromIterator<&'a DataPoint> for Linest {
    fn from_iter<I: IntoIterator<Item = &'a DataPoint>>(iter: I) -> Self {
        let mut linest = Linest::default();
        for point in iter {
            linest.push(point.x, point.y);
        }
        linest
    }
}

pub fn fit_points(points: &[DataPoint]) -> Option<LinestResult> {
    points.iter().collect::<Linest>().estimate()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::fit_points;
    use super::Linest;
    use crate::schema::sample_points;
    use crate::schema::DataPoint;

    #[test]
    fn fit_sample_points() {
        let fit = fit_points(&sample_points()).unwrap();
        // sum_x = 750, sum_y = 540, sum_xy = 97000, sum_xx = 137500
        assert_relative_eq!(fit.slope, 80000.0 / 125000.0, epsilon = 1e-12);
        assert_relative_eq!(fit.intercept, 12.0, epsilon = 1e-9);
        assert!((0.0..=1.0).contains(&fit.r2));
    }

    #[test]
    fn fit_exact_line() {
        let points = [0.0, 1.0, 2.0, 3.0].map(|x| DataPoint::new(x, 3.0 * x - 2.0));
        let fit = fit_points(&points).unwrap();
        assert_relative_eq!(fit.slope, 3.0, epsilon = 1e-12);
        assert_relative_eq!(fit.intercept, -2.0, epsilon = 1e-12);
        assert_relative_eq!(fit.r2, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn too_few_samples() {
        assert_eq!(Linest::default().estimate(), None);
        assert_eq!(fit_points(&[DataPoint::new(1.0, 2.0)]), None);
    }

    #[test]
    fn identical_x_is_not_finite() {
        let points = [10.0, 20.0, 35.0].map(|y| DataPoint::new(100.0, y));
        let fit = fit_points(&points).unwrap();
        assert!(!fit.slope.is_finite());
        assert!(!fit.intercept.is_finite());
    }

    #[test]
    fn fit_is_deterministic() {
        let points = sample_points();
        assert_eq!(fit_points(&points), fit_points(&points));
    }
}
