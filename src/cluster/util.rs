use crate::geometry::Point;

/// Index of the centroid nearest to `point`, with its squared distance.
///
/// Ties go to the lowest index. Returns `None` when `centroids` is empty.
#[inline]
pub(crate) fn nearest(point: &Point, centroids: &[Point]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, c) in centroids.iter().enumerate() {
        let d = point.squared_distance(c);
        // Strict comparison keeps the first minimum.
        if best.map_or(true, |(_, b)| d < b) {
            best = Some((i, d));
        }
    }
    best
}
