//! Lloyd's k-means clustering over 2D points.
//!
//! The classic algorithm: assign each point to the nearest centroid, then
//! move each centroid to the mean of its points. Repeat until nothing moves.
//!
//! **Objective**: minimize the within-cluster sum of squares:
//!
//! ```text
//! J = Σ_k Σ_{x ∈ C_k} ||x - μ_k||²
//! ```
//!
//! Lloyd's method only reaches a local minimum of `J`.
//!
//! ## Pieces
//!
//! - [`Kmeans`]: builder plus the driving loop; returns a [`KmeansFit`].
//! - [`initialize_centroids`], [`assign_nearest`], [`group_by_centroid`],
//!   [`recompute_centroids`]: the individual steps, for callers that want to
//!   drive the iteration from fixed seed centroids.
//! - [`EmptyClusterPolicy`]: what happens to a centroid that attracts no points.
//! - [`Observer`]: per-iteration callback for progress reporting.
//!
//! ## Usage
//!
//! ```rust
//! use barycenter::cluster::{Clustering, Kmeans};
//! use barycenter::geometry::Point;
//!
//! let data = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(0.0, 1.0),
//!     Point::new(10.0, 10.0),
//!     Point::new(10.0, 11.0),
//! ];
//!
//! let fit = Kmeans::new(2).with_seed(42).fit(&data).unwrap();
//! assert_eq!(fit.partition.len(), 2);
//! assert_eq!(fit.partition.get(&Point::new(0.0, 0.5)).unwrap().len(), 2);
//!
//! let labels = Kmeans::new(2).fit_predict(&data).unwrap();
//! assert_eq!(labels[0], labels[1]);
//! assert_ne!(labels[0], labels[2]);
//! ```

mod kmeans;
mod lloyd;
mod observer;
mod partition;
mod traits;
mod util;

pub use kmeans::{Kmeans, KmeansFit};
pub use lloyd::{
    assign_nearest, group_by_centroid, initialize_centroids, recompute_centroids, Assignment,
    EmptyClusterPolicy,
};
pub use observer::Observer;
pub use partition::{Cluster, Partition};
pub use traits::Clustering;
