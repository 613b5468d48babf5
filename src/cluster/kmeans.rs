//! Lloyd's k-means over rounded 2D points.
//!
//! # The Algorithm
//!
//! 1. Draw `k` distinct centroids uniformly inside the bounding box of the input.
//! 2. Assign every point to its nearest centroid.
//! 3. Move every centroid to the (rounded) mean of its members.
//! 4. Stop when no centroid moved; otherwise go to 2.
//!
//! Because coordinates are rounded to one decimal place, "no centroid moved" is
//! an exact comparison. The loop is still capped by `max_iter` so that a rare
//! oscillation surfaces as [`Error::NonConvergence`] instead of a hang.
//!
//! Lloyd's method only finds a local optimum; the result depends on the random
//! initialization unless a seed is fixed.

use std::collections::{HashMap, HashSet};

use rand::prelude::*;

use super::lloyd::{self, EmptyClusterPolicy};
use super::observer::Observer;
use super::partition::Partition;
use super::traits::Clustering;
use super::util;
use crate::error::{Error, Result};
use crate::geometry::Point;

/// K-means clustering configuration.
#[derive(Debug, Clone)]
pub struct Kmeans {
    k: usize,
    max_iter: usize,
    max_attempts: usize,
    empty_cluster: EmptyClusterPolicy,
    seed: Option<u64>,
}

/// Outcome of a converged run.
#[derive(Debug, Clone, PartialEq)]
pub struct KmeansFit {
    /// Final centroid → members mapping.
    pub partition: Partition,
    /// Number of iterations performed, including the final one that changed nothing.
    pub iterations: usize,
}

impl KmeansFit {
    /// Index (in partition order) of the centroid nearest to `point`.
    pub fn predict(&self, point: &Point) -> Option<usize> {
        util::nearest(point, &self.partition.centroids()).map(|(i, _)| i)
    }

    /// Final centroids in partition order.
    pub fn centroids(&self) -> Vec<Point> {
        self.partition.centroids()
    }
}

impl Kmeans {
    /// Create a k-means clusterer looking for `k` clusters.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iter: 100,
            max_attempts: 10_000,
            empty_cluster: EmptyClusterPolicy::default(),
            seed: None,
        }
    }

    /// Maximum number of assign/recompute rounds before giving up.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Maximum number of candidates drawn while picking initial centroids.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// How to handle a cluster that ends up with no members.
    pub fn with_empty_cluster(mut self, policy: EmptyClusterPolicy) -> Self {
        self.empty_cluster = policy;
        self
    }

    /// Fix the RNG seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Run to convergence.
    pub fn fit(&self, points: &[Point]) -> Result<KmeansFit> {
        self.fit_with(points, &mut |_: usize, _: &Partition, _: bool| {})
    }

    /// Run to convergence, reporting every iteration to `observer`.
    pub fn fit_with<O: Observer>(&self, points: &[Point], observer: &mut O) -> Result<KmeansFit> {
        self.validate(points)?;
        let mut rng = self.rng();
        let centroids = lloyd::initialize_centroids(points, self.k, &mut *rng, self.max_attempts)?;
        self.iterate(points, centroids, &mut *rng, observer)
    }

    /// Run to convergence from caller-supplied seed centroids.
    ///
    /// Skips random initialization. Duplicate centroids are collapsed, keeping
    /// the first occurrence; exactly `k` distinct centroids must remain.
    pub fn fit_from<O: Observer>(
        &self,
        points: &[Point],
        centroids: &[Point],
        observer: &mut O,
    ) -> Result<KmeansFit> {
        self.validate(points)?;
        let mut seen = HashSet::new();
        let centroids: Vec<Point> = centroids.iter().copied().filter(|c| seen.insert(*c)).collect();
        if self.k == 0 || centroids.len() != self.k {
            return Err(Error::InvalidClusterCount {
                requested: self.k,
                available: centroids.len() as u128,
            });
        }
        let mut rng = self.rng();
        self.iterate(points, centroids, &mut *rng, observer)
    }

    fn validate(&self, points: &[Point]) -> Result<()> {
        if points.is_empty() {
            return Err(Error::EmptyInput);
        }
        if self.max_iter == 0 {
            return Err(Error::InvalidParameter {
                name: "max_iter",
                message: "must be at least 1",
            });
        }
        if self.max_attempts == 0 {
            return Err(Error::InvalidParameter {
                name: "max_attempts",
                message: "must be at least 1",
            });
        }
        Ok(())
    }

    fn rng(&self) -> Box<dyn RngCore> {
        match self.seed {
            Some(s) => Box::new(StdRng::seed_from_u64(s)),
            None => Box::new(rand::rng()),
        }
    }

    fn iterate<O: Observer>(
        &self,
        points: &[Point],
        mut centroids: Vec<Point>,
        rng: &mut dyn RngCore,
        observer: &mut O,
    ) -> Result<KmeansFit> {
        for iteration in 0..self.max_iter {
            let assignment = lloyd::assign_nearest(points, &centroids)?;
            let partition = lloyd::group_by_centroid(&assignment);
            let (changed, partition) =
                lloyd::recompute_centroids(partition, self.empty_cluster, &mut *rng)?;

            log::debug!(
                "{:<8}{:<8}{:<8}",
                iteration,
                partition.len(),
                if changed { "changed" } else { "stable" }
            );
            observer.observe(iteration, &partition, changed);

            if !changed {
                log::info!(
                    "kmeans converged after {} iterations with {} clusters",
                    iteration + 1,
                    partition.len()
                );
                return Ok(KmeansFit {
                    partition,
                    iterations: iteration + 1,
                });
            }
            centroids = partition.centroids();
        }
        log::warn!("kmeans did not converge within {} iterations", self.max_iter);
        Err(Error::NonConvergence {
            iterations: self.max_iter,
        })
    }
}

impl Default for Kmeans {
    fn default() -> Self {
        Self::new(8)
    }
}

impl Clustering for Kmeans {
    /// Labels index into the final partition; duplicate points share a label.
    fn fit_predict(&self, points: &[Point]) -> Result<Vec<usize>> {
        let fit = self.fit(points)?;
        let label: HashMap<Point, usize> = fit
            .partition
            .iter()
            .enumerate()
            .flat_map(|(i, c)| c.members.iter().map(move |p| (*p, i)))
            .collect();
        Ok(points.iter().map(|p| label[p]).collect())
    }

    fn n_clusters(&self) -> usize {
        self.k
    }
}
