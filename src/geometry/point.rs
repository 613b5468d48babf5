use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use rand::Rng;

/// Round to one decimal place, folding `-0.0` into `0.0` so that equal
/// values share a bit pattern.
#[inline]
fn round1(v: f64) -> f64 {
    debug_assert!(v.is_finite(), "coordinate must be finite, got {v}");
    let r = (v * 10.0).round() / 10.0;
    if r == 0.0 {
        0.0
    } else {
        r
    }
}

/// An immutable point in the plane with coordinates rounded to one decimal place.
///
/// Equality, hashing and ordering all operate on the rounded coordinates, so a
/// `Point` can be used directly as a map key or set member.
#[derive(Clone, Copy, Debug)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Build a point, rounding both coordinates to one decimal place.
    ///
    /// Rounding scales by ten and rounds half away from zero, so it is not
    /// decimal half-to-even rounding: `0.15` becomes `0.2` (its binary value
    /// times ten lands on `1.5`) and `0.25` becomes `0.3`.
    ///
    /// Coordinates must be finite.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: round1(x),
            y: round1(y),
        }
    }

    /// Draw a point uniformly from `[x_min, x_max] × [y_min, y_max]`, then round it.
    ///
    /// # Panics
    ///
    /// If either range is inverted or not finite.
    pub fn random_in_range<R: Rng + ?Sized>(
        rng: &mut R,
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    ) -> Self {
        Self::new(rng.random_range(x_min..=x_max), rng.random_range(y_min..=y_max))
    }

    /// Rounded x-coordinate.
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Rounded y-coordinate.
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance between the rounded coordinates.
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        self.squared_distance(other).sqrt()
    }

    #[inline]
    pub(crate) fn squared_distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Arithmetic mean of `points`, each coordinate rounded independently.
    ///
    /// Returns `None` for an empty slice, where the mean is undefined.
    pub fn mean(points: &[Point]) -> Option<Point> {
        if points.is_empty() {
            return None;
        }
        let n = points.len() as f64;
        let (sx, sy) = points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Some(Point::new(sx / n, sy / n))
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}
