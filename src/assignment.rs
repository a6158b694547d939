use crate::Centroid;
use crate::Energy;
use crate::Point;
use crate::Result;
use crate::Vacancy;
use crate::distance;
use rayon::prelude::*;

/// Partition of the points by nearest centroid, rebuilt from scratch every round.
/// Cluster `j` holds the points whose nearest centroid is `j`, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment(Vec<Vec<Point>>);

impl Assignment {
    /// Assign every point to its nearest centroid.
    /// Nearest-centroid lookups run in parallel but are collected in input
    /// order, so grouping is identical to a sequential pass.
    pub fn new(points: &[Point], centroids: &[Centroid]) -> Self {
        let neighbors = points
            .par_iter()
            .map(|p| Self::neighbor(p, centroids).0)
            .collect::<Vec<usize>>();
        let clusters = points.iter().zip(neighbors).fold(
            vec![Vec::new(); centroids.len()],
            |mut clusters, (p, j)| {
                clusters[j].push(p.clone());
                clusters
            },
        );
        Self(clusters)
    }

    /// Nearest centroid index and its distance, in O(k).
    /// Ties go to the lowest index.
    pub fn neighbor(point: &Point, centroids: &[Centroid]) -> (usize, Energy) {
        centroids
            .iter()
            .enumerate()
            .map(|(j, c)| (j, distance(point, c)))
            .fold((0, Energy::INFINITY), |best, (j, d)| {
                if d < best.1 { (j, d) } else { best }
            })
    }

    pub fn k(&self) -> usize {
        self.0.len()
    }
    /// Total number of assigned points across all clusters.
    pub fn n(&self) -> usize {
        self.0.iter().map(Vec::len).sum()
    }
    pub fn clusters(&self) -> &[Vec<Point>] {
        &self.0
    }
    pub fn cluster(&self, j: usize) -> &[Point] {
        &self.0[j]
    }
    pub fn sizes(&self) -> Vec<usize> {
        self.0.iter().map(Vec::len).collect()
    }

    /// Points paired with their cluster index, grouped by ascending index.
    pub fn labelled(&self) -> impl Iterator<Item = (usize, &Point)> {
        self.0
            .iter()
            .enumerate()
            .flat_map(|(j, cluster)| cluster.iter().map(move |p| (j, p)))
    }

    /// Recompute every centroid as the mean of its cluster.
    /// Empty clusters are settled by the vacancy policy.
    pub fn centroids(
        &self,
        previous: &[Centroid],
        vacancy: Vacancy,
        round: usize,
    ) -> Result<Vec<Centroid>> {
        debug_assert_eq!(previous.len(), self.k());
        self.0
            .iter()
            .zip(previous)
            .enumerate()
            .map(|(j, (cluster, old))| match Centroid::mean(cluster) {
                Some(mean) => Ok(mean),
                None => vacancy.resolve(j, round, old),
            })
            .collect()
    }

    /// Root mean square distance from each point to the centroid of its cluster.
    pub fn rms(&self, centroids: &[Centroid]) -> Energy {
        let n = self.n().max(1) as Energy;
        let sum = self
            .labelled()
            .map(|(j, p)| distance(p, &centroids[j]))
            .map(|d| d * d)
            .sum::<Energy>();
        (sum / n).sqrt()
    }
}
