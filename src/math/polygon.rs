use super::Point2;

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise. The polygon is
/// treated as closed; the last point connects back to the first.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Arithmetic mean of a point set.
///
/// Returns `None` for an empty slice.
#[must_use]
pub fn mean_point(points: &[Point2]) -> Option<Point2> {
    if points.is_empty() {
        return None;
    }
    let mut sx = 0.0;
    let mut sy = 0.0;
    for p in points {
        sx += p.x;
        sy += p.y;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = points.len() as f64;
    Some(Point2::new(sx / n, sy / n))
}
