//! SVG geometry for the supplier scorecard radar chart.

use std::f64::consts::PI;

/// Map metric values onto a regular polygon around `(cx, cy)`.
///
/// Axes start at 12 o'clock and proceed clockwise. Each value is scaled
/// against `max_value` and clamped to the `0..=radius` ring. Returns an SVG
/// `points` attribute string ("x1,y1 x2,y2 ...").
pub fn radar_points(values: &[f64], max_value: f64, cx: f64, cy: f64, radius: f64) -> String {
    polygon_points(values, max_value, cx, cy, radius)
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Endpoints of the axis spokes at full radius, for the grid underlay.
pub fn axis_endpoints(axes: usize, cx: f64, cy: f64, radius: f64) -> Vec<(f64, f64)> {
    let full = vec![1.0; axes];
    polygon_points(&full, 1.0, cx, cy, radius)
}

fn polygon_points(values: &[f64], max_value: f64, cx: f64, cy: f64, radius: f64) -> Vec<(f64, f64)> {
    let n = values.len();
    if n == 0 || max_value <= 0.0 {
        return Vec::new();
    }
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let fraction = (v / max_value).clamp(0.0, 1.0);
            let angle = 2.0 * PI * (i as f64) / (n as f64) - PI / 2.0;
            (
                cx + radius * fraction * angle.cos(),
                cy + radius * fraction * angle.sin(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_values_sit_on_the_outer_ring() {
        let points = polygon_points(&[100.0; 6], 100.0, 50.0, 50.0, 40.0);
        assert_eq!(points.len(), 6);
        for (x, y) in points {
            let dist = ((x - 50.0).powi(2) + (y - 50.0).powi(2)).sqrt();
            assert!((dist - 40.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_zero_values_collapse_to_center() {
        let points = polygon_points(&[0.0; 6], 100.0, 50.0, 50.0, 40.0);
        for (x, y) in points {
            assert!((x - 50.0).abs() < 1e-9);
            assert!((y - 50.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_first_axis_points_up() {
        let points = polygon_points(&[100.0], 100.0, 50.0, 50.0, 40.0);
        let (x, y) = points[0];
        assert!((x - 50.0).abs() < 1e-9);
        assert!((y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_values_above_max_are_clamped() {
        let points = polygon_points(&[250.0], 100.0, 0.0, 0.0, 40.0);
        let (x, y) = points[0];
        let dist = (x.powi(2) + y.powi(2)).sqrt();
        assert!(dist <= 40.0 + 1e-9);
    }

    #[test]
    fn test_points_string_format() {
        let s = radar_points(&[100.0, 100.0], 100.0, 0.0, 0.0, 10.0);
        assert_eq!(s.split(' ').count(), 2);
        assert!(s.split(' ').all(|p| p.contains(',')));
    }
}
