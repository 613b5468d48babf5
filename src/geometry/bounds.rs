use rand::Rng;

use super::Point;
use crate::error::{Error, Result};

/// Coordinate axis selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    #[inline]
    fn of(self, p: &Point) -> f64 {
        match self {
            Axis::X => p.x(),
            Axis::Y => p.y(),
        }
    }
}

/// `(min, max)` of the chosen coordinate across `points`.
///
/// The accumulator starts from the first point, so collections lying entirely
/// on one side of the origin get their true range.
pub fn bounding_range(points: &[Point], axis: Axis) -> Result<(f64, f64)> {
    let (first, rest) = points.split_first().ok_or(Error::EmptyInput)?;
    let start = axis.of(first);
    Ok(rest.iter().fold((start, start), |(lo, hi), p| {
        let v = axis.of(p);
        (lo.min(v), hi.max(v))
    }))
}

/// Axis-aligned bounding box of a point collection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// `(min, max)` over x.
    pub x: (f64, f64),
    /// `(min, max)` over y.
    pub y: (f64, f64),
}

impl Bounds {
    /// Bounding box of `points`; fails on an empty slice.
    pub fn of(points: &[Point]) -> Result<Self> {
        Ok(Self {
            x: bounding_range(points, Axis::X)?,
            y: bounding_range(points, Axis::Y)?,
        })
    }

    /// Number of distinct 0.1-resolution positions inside the box.
    ///
    /// This is the most centroids a rejection sampler over the box can ever find.
    pub fn grid_cardinality(&self) -> u128 {
        fn steps((lo, hi): (f64, f64)) -> u128 {
            let n = (hi * 10.0).round() - (lo * 10.0).round();
            n.max(0.0) as u128 + 1
        }
        steps(self.x).saturating_mul(steps(self.y))
    }

    /// Draw a rounded point uniformly from the box.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        Point::random_in_range(rng, self.x.0, self.x.1, self.y.0, self.y.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_range_negative_only() {
        let points = [Point::new(-5.0, -5.0), Point::new(-1.0, -1.0)];
        assert_eq!(bounding_range(&points, Axis::X).unwrap(), (-5.0, -1.0));
        assert_eq!(bounding_range(&points, Axis::Y).unwrap(), (-5.0, -1.0));
    }

    #[test]
    fn test_bounding_range_positive_only() {
        let points = [Point::new(3.0, 7.0), Point::new(9.0, 4.0), Point::new(5.0, 5.0)];
        assert_eq!(bounding_range(&points, Axis::X).unwrap(), (3.0, 9.0));
        assert_eq!(bounding_range(&points, Axis::Y).unwrap(), (4.0, 7.0));
    }

    #[test]
    fn test_bounding_range_single_point() {
        let points = [Point::new(2.5, -1.5)];
        assert_eq!(bounding_range(&points, Axis::X).unwrap(), (2.5, 2.5));
    }

    #[test]
    fn test_bounding_range_empty() {
        assert!(matches!(
            bounding_range(&[], Axis::X),
            Err(Error::EmptyInput)
        ));
        assert!(Bounds::of(&[]).is_err());
    }

    #[test]
    fn test_grid_cardinality() {
        let b = Bounds::of(&[Point::new(0.0, 0.0), Point::new(0.2, 1.0)]).unwrap();
        assert_eq!(b.grid_cardinality(), 3 * 11);

        let b = Bounds::of(&[Point::new(4.0, 4.0)]).unwrap();
        assert_eq!(b.grid_cardinality(), 1);

        let b = Bounds::of(&[Point::new(-0.3, -0.1), Point::new(-0.1, 0.1)]).unwrap();
        assert_eq!(b.grid_cardinality(), 3 * 3);
    }
}
