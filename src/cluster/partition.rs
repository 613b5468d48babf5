use std::collections::HashMap;
use std::fmt;

use crate::geometry::Point;

/// A centroid together with the input points assigned to it.
#[derive(Clone, Debug, PartialEq)]
pub struct Cluster {
    /// Representative point of the cluster.
    pub centroid: Point,
    /// Input points assigned to `centroid`, in input order.
    pub members: Vec<Point>,
}

impl Cluster {
    pub fn new(centroid: Point, members: Vec<Point>) -> Self {
        Self { centroid, members }
    }

    /// Sum of squared distances from each member to the centroid.
    pub fn inertia(&self) -> f64 {
        self.members
            .iter()
            .map(|p| p.squared_distance(&self.centroid))
            .sum()
    }
}

/// Mapping from centroid to member points.
///
/// Clusters keep a stable order (the order their centroids were tried in during
/// assignment), and centroids are pairwise distinct. A cluster may have no
/// members.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Partition {
    clusters: Vec<Cluster>,
}

impl Partition {
    pub(crate) fn from_clusters(clusters: Vec<Cluster>) -> Self {
        debug_assert!(
            {
                let mut seen = std::collections::HashSet::new();
                clusters.iter().all(|c| seen.insert(c.centroid))
            },
            "partition centroids must be distinct"
        );
        Self { clusters }
    }

    /// Number of clusters.
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Total number of member points across all clusters.
    pub fn n_points(&self) -> usize {
        self.clusters.iter().map(|c| c.members.len()).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cluster> {
        self.clusters.iter()
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// Centroids in cluster order.
    pub fn centroids(&self) -> Vec<Point> {
        self.clusters.iter().map(|c| c.centroid).collect()
    }

    /// Members of the cluster whose centroid equals `centroid`.
    pub fn get(&self, centroid: &Point) -> Option<&[Point]> {
        self.clusters
            .iter()
            .find(|c| c.centroid == *centroid)
            .map(|c| c.members.as_slice())
    }

    /// Within-cluster sum of squared distances.
    pub fn inertia(&self) -> f64 {
        self.clusters.iter().map(Cluster::inertia).sum()
    }

    pub fn into_map(self) -> HashMap<Point, Vec<Point>> {
        self.clusters
            .into_iter()
            .map(|c| (c.centroid, c.members))
            .collect()
    }

    pub(crate) fn into_clusters(self) -> Vec<Cluster> {
        self.clusters
    }
}

impl IntoIterator for Partition {
    type Item = Cluster;
    type IntoIter = std::vec::IntoIter<Cluster>;

    fn into_iter(self) -> Self::IntoIter {
        self.clusters.into_iter()
    }
}

impl<'a> IntoIterator for &'a Partition {
    type Item = &'a Cluster;
    type IntoIter = std::slice::Iter<'a, Cluster>;

    fn into_iter(self) -> Self::IntoIter {
        self.clusters.iter()
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, p) in self.members.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{p}")?;
        }
        write!(f, "]:{}", self.centroid)
    }
}

/// One `[members]:centroid` line per cluster.
impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.clusters {
            writeln!(f, "{c}")?;
        }
        Ok(())
    }
}
