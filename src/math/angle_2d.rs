use super::Point2;

/// Direction of the vector from `a` to `b`, in degrees in `(-180, 180]`.
#[must_use]
pub fn direction_degrees(a: &Point2, b: &Point2) -> f64 {
    (b.y - a.y).atan2(b.x - a.x).to_degrees()
}

/// Turn angle at `b` of the path `a -> b -> c`, normalized to `[0, 360)`.
///
/// Computed as `direction(a, b) - direction(b, c)`. For a ray from `b`
/// towards some target `t`, `turn_angle(t, b, w) < 180` holds exactly when
/// `w` lies strictly to the left of the ray.
#[must_use]
pub fn turn_angle(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    let turn = direction_degrees(a, b) - direction_degrees(b, c);
    let normalized = turn.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn direction_axes() {
        let o = Point2::new(0.0, 0.0);
        assert_abs_diff_eq!(direction_degrees(&o, &Point2::new(1.0, 0.0)), 0.0);
        assert_abs_diff_eq!(direction_degrees(&o, &Point2::new(0.0, 1.0)), 90.0);
        assert_abs_diff_eq!(direction_degrees(&o, &Point2::new(-1.0, 0.0)), 180.0);
    }

    #[test]
    fn left_of_ray_is_below_half_turn() {
        // Ray from the origin towards (1, 0).
        let origin = Point2::new(0.0, 0.0);
        let target = Point2::new(1.0, 0.0);
        let left = Point2::new(1.0, 1.0);
        let right = Point2::new(1.0, -1.0);
        assert!(turn_angle(&target, &origin, &left) < 180.0);
        assert!(turn_angle(&target, &origin, &right) > 180.0);
    }

    #[test]
    fn result_is_normalized() {
        let a = Point2::new(3.0, -2.0);
        let b = Point2::new(-1.0, 0.5);
        let c = Point2::new(2.0, 7.0);
        let angle = turn_angle(&a, &b, &c);
        assert!((0.0..360.0).contains(&angle), "angle={angle}");
    }
}
