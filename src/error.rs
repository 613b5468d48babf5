use thiserror::Error;

use crate::geometry::Point;

/// Errors returned by the clustering routines in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Input slice is empty.
    #[error("empty input")]
    EmptyInput,

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Requested cluster count is zero, or exceeds the number of distinct
    /// centroid positions the input's bounding box can hold.
    #[error("invalid cluster count: requested {requested}, but only {available} positions are available")]
    InvalidClusterCount {
        /// Requested number of clusters.
        requested: usize,
        /// Distinct 0.1-resolution positions inside the bounding box.
        available: u128,
    },

    /// Rejection sampling ran out of attempts before finding enough distinct centroids.
    #[error("degenerate input: found {found} of {requested} distinct centroids after {attempts} attempts")]
    DegenerateInput {
        /// Requested number of centroids.
        requested: usize,
        /// Distinct centroids found before giving up.
        found: usize,
        /// Attempts spent.
        attempts: usize,
    },

    /// A cluster has no members when its centroid is recomputed.
    #[error("cluster at {centroid} has no members")]
    EmptyCluster {
        /// Centroid of the empty cluster.
        centroid: Point,
    },

    /// The iteration cap was hit before the partition stabilized.
    #[error("no stable partition after {iterations} iterations")]
    NonConvergence {
        /// Iterations performed.
        iterations: usize,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
