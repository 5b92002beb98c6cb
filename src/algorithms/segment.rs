//! Point-to-segment distance in 3D

use crate::core::Point;

/// Closest point to `p` on the closed segment `[a, b]`.
///
/// The projection parameter is clamped to `[0, 1]`, so points beyond either
/// end resolve to that endpoint. A segment whose endpoints are exactly equal
/// resolves to `a`.
pub fn closest_point_on_segment(a: &Point, b: &Point, p: &Point) -> Point {
    let a = a.to_vector3();
    let ab = b.to_vector3() - a;
    let ap = p.to_vector3() - a;

    let len_sq = ab.dot(&ab);
    // Exact comparison: only coincident endpoints take this path
    if len_sq == 0.0 {
        return Point::from(a);
    }

    let t = (ap.dot(&ab) / len_sq).clamp(0.0, 1.0);
    Point::from(a + ab * t)
}

/// Euclidean distance from `p` to the nearest point of segment `[a, b]`.
///
/// Total over all inputs, including `a == b`.
pub fn distance_point_to_segment(a: &Point, b: &Point, p: &Point) -> f64 {
    let c = closest_point_on_segment(a, b, p);
    (p.to_vector3() - c.to_vector3()).norm()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn p(lat: f64, lon: f64, height: f64) -> Point {
        Point::new(lat, lon, height)
    }

    #[test]
    fn test_perpendicular_foot_inside_segment() {
        let d = distance_point_to_segment(&p(0.0, 0.0, 0.0), &p(10.0, 0.0, 0.0), &p(5.0, 2.0, 0.0));
        assert_eq!(d, 2.0);
    }

    #[test]
    fn test_projection_clamped_to_endpoints() {
        let a = p(0.0, 0.0, 0.0);
        let b = p(10.0, 0.0, 0.0);

        // On the line extension: distance to the nearer endpoint, not to the line
        assert_eq!(distance_point_to_segment(&a, &b, &p(-3.0, 0.0, 0.0)), 3.0);
        assert_eq!(distance_point_to_segment(&a, &b, &p(14.0, 3.0, 0.0)), 5.0);
        assert_eq!(closest_point_on_segment(&a, &b, &p(-3.0, 4.0, 0.0)), a);
        assert_eq!(closest_point_on_segment(&a, &b, &p(12.0, 4.0, 0.0)), b);
    }

    #[test]
    fn test_degenerate_segment_is_point_distance() {
        let a = p(1.0, 2.0, 3.0);
        let q = p(4.0, 6.0, 3.0);
        assert_eq!(distance_point_to_segment(&a, &a, &q), 5.0);
        assert_eq!(distance_point_to_segment(&a, &a, &q), (q.to_vector3() - a.to_vector3()).norm());
        assert_eq!(closest_point_on_segment(&a, &a, &q), a);
    }

    #[test]
    fn test_nearly_degenerate_segment_still_projects() {
        // Tiny but non-zero length takes the projection path
        let a = p(0.0, 0.0, 0.0);
        let b = p(1e-12, 0.0, 0.0);
        let d = distance_point_to_segment(&a, &b, &p(0.0, 1.0, 0.0));
        assert_abs_diff_eq!(d, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_endpoints_have_zero_distance() {
        let a = p(-2.0, 3.0, 7.0);
        let b = p(6.0, -1.0, 2.0);
        assert_eq!(distance_point_to_segment(&a, &b, &a), 0.0);
        assert_eq!(distance_point_to_segment(&a, &b, &b), 0.0);
    }

    #[test]
    fn test_height_offset_counts_in_3d() {
        let a = p(0.0, 0.0, 0.0);
        let b = p(10.0, 0.0, 0.0);
        assert_eq!(distance_point_to_segment(&a, &b, &p(5.0, 0.0, 0.8)), 0.8);
        assert_abs_diff_eq!(distance_point_to_segment(&a, &b, &p(5.0, 0.0, 1.01)), 1.01, epsilon = 1e-12);
        assert_abs_diff_eq!(
            distance_point_to_segment(&a, &b, &p(5.0, 3.0, 4.0)),
            5.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_oblique_segment() {
        let a = p(0.0, 0.0, 0.0);
        let b = p(3.0, 3.0, 3.0);
        let q = p(2.0, 0.0, 1.0);
        // t = 9 / 27, C = (1, 1, 1)
        let c = closest_point_on_segment(&a, &b, &q);
        assert_abs_diff_eq!(c.lat, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.lon, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.height, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(distance_point_to_segment(&a, &b, &q), 2.0f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_distance_is_non_negative() {
        let samples = [
            p(0.0, 0.0, 0.0),
            p(-5.5, 2.25, 100.0),
            p(3.0, -8.0, -1.5),
            p(1e6, -1e6, 0.5),
            p(0.1, 0.2, 0.3),
        ];
        for a in &samples {
            for b in &samples {
                for q in &samples {
                    assert!(distance_point_to_segment(a, b, q) >= 0.0);
                }
            }
        }
    }

    #[test]
    fn test_reversed_segment_same_distance() {
        let a = p(0.0, 0.0, 0.0);
        let b = p(5.0, 1.0, 0.0);
        let q = p(4.5, 0.8, 0.0);
        assert_abs_diff_eq!(
            distance_point_to_segment(&a, &b, &q),
            distance_point_to_segment(&b, &a, &q),
            epsilon = 1e-12
        );
    }
}
