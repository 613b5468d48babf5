//! The individual steps of Lloyd's iteration.
//!
//! [`Kmeans`](super::Kmeans) drives these in a loop; they are public so a
//! caller can run the steps by hand from a fixed set of seed centroids.

use std::collections::{HashMap, HashSet};

use rand::seq::IndexedRandom;
use rand::Rng;

use super::partition::{Cluster, Partition};
use super::util;
use crate::error::{Error, Result};
use crate::geometry::{Bounds, Point};

/// What to do with a cluster that has no members at recomputation time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmptyClusterPolicy {
    /// Return [`Error::EmptyCluster`].
    Fail,
    /// Keep the previous centroid. Not counted as a change.
    Retain,
    /// Remove the cluster, shrinking the partition below `k`.
    Drop,
    /// Move the centroid onto a randomly chosen input point that is not
    /// already a centroid. Falls back to dropping when no such point exists.
    #[default]
    Reseed,
}

/// Nearest-centroid assignment of every input point.
#[derive(Clone, Debug, PartialEq)]
pub struct Assignment {
    centroids: Vec<Point>,
    points: Vec<Point>,
    labels: Vec<usize>,
}

impl Assignment {
    /// Centroids in the order they were searched.
    pub fn centroids(&self) -> &[Point] {
        &self.centroids
    }

    /// Index into [`centroids`](Self::centroids) for each input point.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// `(point, centroid)` pairs in input order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points
            .iter()
            .zip(&self.labels)
            .map(|(p, &l)| (*p, self.centroids[l]))
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Pick `k` distinct centroids uniformly at random from the bounding box of `points`.
///
/// Candidates are drawn and rounded; one equal to an already chosen centroid is
/// discarded and redrawn. At most `max_attempts` candidates are drawn in total.
///
/// # Errors
///
/// - [`Error::EmptyInput`] if `points` is empty.
/// - [`Error::InvalidClusterCount`] if `k` is zero or the box holds fewer than
///   `k` distinct 0.1-resolution positions.
/// - [`Error::DegenerateInput`] if the attempts run out first.
pub fn initialize_centroids<R: Rng + ?Sized>(
    points: &[Point],
    k: usize,
    rng: &mut R,
    max_attempts: usize,
) -> Result<Vec<Point>> {
    let bounds = Bounds::of(points)?;
    let available = bounds.grid_cardinality();
    if k == 0 || k as u128 > available {
        return Err(Error::InvalidClusterCount {
            requested: k,
            available,
        });
    }

    let mut chosen: Vec<Point> = Vec::with_capacity(k);
    let mut seen: HashSet<Point> = HashSet::with_capacity(k);
    let mut attempts = 0;
    while chosen.len() < k {
        if attempts == max_attempts {
            return Err(Error::DegenerateInput {
                requested: k,
                found: chosen.len(),
                attempts,
            });
        }
        attempts += 1;
        let candidate = bounds.sample(rng);
        if seen.insert(candidate) {
            chosen.push(candidate);
        }
    }
    log::trace!("chose {} centroids in {} attempts", k, attempts);
    Ok(chosen)
}

/// Assign each point to its nearest centroid by Euclidean distance.
///
/// Ties go to the centroid that comes first in `centroids`.
pub fn assign_nearest(points: &[Point], centroids: &[Point]) -> Result<Assignment> {
    if centroids.is_empty() {
        return Err(Error::InvalidParameter {
            name: "centroids",
            message: "must not be empty",
        });
    }
    let labels = points
        .iter()
        .map(|p| util::nearest(p, centroids).map(|(i, _)| i))
        .collect::<Option<Vec<_>>>()
        .ok_or(Error::EmptyInput)?;
    Ok(Assignment {
        centroids: centroids.to_vec(),
        points: points.to_vec(),
        labels,
    })
}

/// Group assigned points by centroid.
///
/// Every centroid of the assignment gets a cluster, in the same order; those
/// that attracted no points get an empty member list.
pub fn group_by_centroid(assignment: &Assignment) -> Partition {
    let mut clusters: Vec<Cluster> = assignment
        .centroids
        .iter()
        .map(|&c| Cluster::new(c, Vec::new()))
        .collect();
    for (p, &l) in assignment.points.iter().zip(&assignment.labels) {
        clusters[l].members.push(*p);
    }
    Partition::from_clusters(clusters)
}

/// Replace every centroid with the rounded mean of its members.
///
/// Returns whether any centroid moved, along with the new partition. Groups
/// whose means coincide are merged into the first of them, and the slot left
/// behind is treated like an empty cluster. Empty clusters are handled
/// according to `policy`; only [`EmptyClusterPolicy::Reseed`] draws from `rng`.
pub fn recompute_centroids<R: Rng + ?Sized>(
    partition: Partition,
    policy: EmptyClusterPolicy,
    rng: &mut R,
) -> Result<(bool, Partition)> {
    let mut changed = false;
    let mut clusters: Vec<Cluster> = Vec::with_capacity(partition.len());
    let mut index: HashMap<Point, usize> = HashMap::with_capacity(partition.len());
    let mut vacated: Vec<Point> = Vec::new();

    for Cluster { centroid, members } in partition.into_clusters() {
        let Some(mean) = Point::mean(&members) else {
            vacated.push(centroid);
            continue;
        };
        if mean != centroid {
            changed = true;
        }
        match index.get(&mean) {
            Some(&at) => {
                log::debug!("merging cluster at {} into {}", centroid, mean);
                clusters[at].members.extend(members);
                vacated.push(centroid);
                changed = true;
            }
            None => {
                index.insert(mean, clusters.len());
                clusters.push(Cluster::new(mean, members));
            }
        }
    }

    if vacated.is_empty() {
        return Ok((changed, Partition::from_clusters(clusters)));
    }

    // Reseed candidates: distinct input points, in first-seen order.
    let mut candidates: Vec<Point> = Vec::new();
    if policy == EmptyClusterPolicy::Reseed {
        let mut seen = HashSet::new();
        candidates = clusters
            .iter()
            .flat_map(|c| c.members.iter().copied())
            .filter(|p| seen.insert(*p))
            .collect();
    }

    for centroid in vacated {
        match policy {
            EmptyClusterPolicy::Fail => return Err(Error::EmptyCluster { centroid }),
            EmptyClusterPolicy::Retain => {
                if index.contains_key(&centroid) {
                    changed = true;
                    continue;
                }
                index.insert(centroid, clusters.len());
                clusters.push(Cluster::new(centroid, Vec::new()));
            }
            EmptyClusterPolicy::Drop => {
                log::warn!("dropping empty cluster at {}", centroid);
                changed = true;
            }
            EmptyClusterPolicy::Reseed => {
                changed = true;
                candidates.retain(|p| !index.contains_key(p));
                let Some(&seed) = candidates.choose(rng) else {
                    log::warn!("no free point to reseed {}; dropping it", centroid);
                    continue;
                };
                log::warn!("reseeding empty cluster at {} to {}", centroid, seed);
                index.insert(seed, clusters.len());
                clusters.push(Cluster::new(seed, Vec::new()));
            }
        }
    }

    Ok((changed, Partition::from_clusters(clusters)))
}
