//! Two-dimensional points and their bounding ranges.
//!
//! Every coordinate is rounded to one decimal place when a [`Point`] is built.
//! That rounding bounds the set of distinct coordinate values, which is what
//! lets points act as exact hash keys and lets the clustering loop detect a
//! fixed point with `==` instead of a float tolerance.
//!
//! ```rust
//! use barycenter::geometry::{bounding_range, Axis, Point};
//!
//! let a = Point::new(2.34999, 5.05001);
//! assert_eq!(a, Point::new(2.3, 5.1));
//!
//! let points = [Point::new(-5.0, -5.0), Point::new(-1.0, -1.0)];
//! assert_eq!(bounding_range(&points, Axis::X).unwrap(), (-5.0, -1.0));
//! ```

mod bounds;
mod point;

pub use bounds::{bounding_range, Axis, Bounds};
pub use point::Point;
