//! Lloyd's k-means over two-dimensional points.
//!
//! `barycenter` partitions a set of planar points into `k` groups, each
//! represented by a centroid, by iterating nearest-centroid assignment and
//! centroid recomputation until no centroid moves.
//!
//! - [`geometry`]: the rounded [`Point`] value type and bounding ranges.
//! - [`cluster`]: the [`Kmeans`] driver and the individual Lloyd steps.
//!
//! The library logs through the [`log`] facade and never installs a logger.

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;
pub mod geometry;

pub use cluster::{
    Cluster, Clustering, EmptyClusterPolicy, Kmeans, KmeansFit, Observer, Partition,
};
pub use error::{Error, Result};
pub use geometry::{bounding_range, Axis, Bounds, Point};
