pub fn format_slope(slope: f64) -> String {
    format!("{:.2}", slope)
}

pub fn format_intercept(intercept: f64) -> String {
    format!("{:.0}", intercept)
}

pub fn format_sse(sse: f64) -> String {
    format!("{:.2}", sse)
}
