use super::super::super::distance::DistanceMetric;
use super::super::super::neighbors::kdtree::KDTreeSearch;
use super::super::super::neighbors::neighbor::Neighbor;
use super::super::super::neighbors::search::NeighborSearch;
use super::super::super::number::Float;
use super::super::super::point::Point;
use super::super::algorithm::ClusteringAlgorithm;
use super::super::cluster::Cluster;
use super::label::Label;
use crate::cancel::CancellationToken;
use crate::error::{Error, Result};
use std::collections::VecDeque;

/// Struct representing the DBSCAN clustering algorithm.
///
/// Cluster ids are assigned in first-discovery order of the sequential scan,
/// so the output is deterministic for a given input order. Points labeled as
/// noise are discarded.
///
/// # Type Parameters
/// * `F` - The float type used for calculations.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug)]
pub struct DBSCAN<F>
where
    F: Float,
{
    min_points: usize,
    radius: F,
    metric: DistanceMetric,
    cancellation: Option<CancellationToken>,
}

impl<F> DBSCAN<F>
where
    F: Float,
{
    /// Creates a new `DBSCAN` instance.
    ///
    /// # Arguments
    /// * `min_points` - The minimum neighborhood size of a core point.
    /// * `radius` - The maximum distance between two neighboring points.
    /// * `metric` - The distance metric to use.
    ///
    /// # Returns
    /// A new `DBSCAN` instance, or an error if a parameter is out of range.
    pub fn new(min_points: usize, radius: F, metric: DistanceMetric) -> Result<Self> {
        if min_points == 0 {
            return Err(Error::InvalidParameter {
                name: "min_points",
                reason: "must be at least 1",
            });
        }
        if radius < F::zero() || !radius.to_f64().unwrap_or(f64::NAN).is_finite() {
            return Err(Error::InvalidParameter {
                name: "radius",
                reason: "must be a finite, non-negative number",
            });
        }
        Ok(Self {
            min_points,
            radius,
            metric,
            cancellation: None,
        })
    }

    /// Attaches a cancellation token, checked between points of the outer
    /// scan.
    ///
    /// # Arguments
    /// * `token` - The token to observe.
    ///
    /// # Returns
    /// This instance with the token attached.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    fn expand_cluster<P, N>(
        &self,
        cluster_id: usize,
        points: &[P],
        neighbor_search: &N,
        seeds: &[Neighbor<F>],
        labels: &mut [Label],
    ) where
        P: Point<F>,
        N: NeighborSearch<F, P>,
    {
        let mut queue = VecDeque::new();
        queue.extend(seeds.iter().map(|neighbor| neighbor.index));
        while let Some(current) = queue.pop_front() {
            if labels[current].is_assigned() {
                continue;
            }

            if labels[current].is_outlier() {
                // A boundary point joins the cluster but is not expanded.
                labels[current] = Label::Assigned(cluster_id);
                continue;
            }

            labels[current] = Label::Assigned(cluster_id);

            let neighbors = neighbor_search.search_radius(&points[current], self.radius);
            if neighbors.len() < self.min_points {
                continue;
            }

            for neighbor in neighbors {
                match labels[neighbor.index] {
                    Label::Undefined => {
                        labels[neighbor.index] = Label::Marked;
                        queue.push_back(neighbor.index);
                    }
                    Label::Outlier => {
                        queue.push_back(neighbor.index);
                    }
                    _ => {}
                }
            }
        }
    }
}

impl<F, P> ClusteringAlgorithm<F, P> for DBSCAN<F>
where
    F: Float,
    P: Point<F>,
{
    fn fit(&mut self, points: &[P]) -> Result<Vec<Cluster<F, P>>> {
        if points.is_empty() {
            return Ok(Vec::new());
        }

        let neighbor_search = KDTreeSearch::new(points, self.metric);
        let mut labels = vec![Label::Undefined; points.len()];
        let mut cluster_count = 0;
        for (index, point) in points.iter().enumerate() {
            if let Some(token) = &self.cancellation {
                if token.is_cancelled() {
                    return Err(Error::Cancelled);
                }
            }
            if !labels[index].is_undefined() {
                continue;
            }

            let neighbors = neighbor_search.search_radius(point, self.radius);
            if neighbors.len() < self.min_points {
                labels[index] = Label::Outlier;
                continue;
            }

            for neighbor in &neighbors {
                labels[neighbor.index] = Label::Marked;
            }
            self.expand_cluster(cluster_count, points, &neighbor_search, &neighbors, &mut labels);
            cluster_count += 1;
        }

        let mut clusters = vec![Cluster::default(); cluster_count];
        for (index, label) in labels.into_iter().enumerate() {
            if let Label::Assigned(cluster_id) = label {
                clusters[cluster_id].insert(index, &points[index]);
            }
        }
        clusters.retain(|cluster| !cluster.is_empty());
        Ok(clusters)
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::super::point::Point2;
    use super::*;

    fn dbscan(min_points: usize, radius: f64) -> DBSCAN<f64> {
        DBSCAN::new(min_points, radius, DistanceMetric::Euclidean).unwrap()
    }

    fn blobs_with_noise() -> Vec<Point2<f64>> {
        vec![
            Point2(0.0, 0.0),
            Point2(0.1, 0.0),
            Point2(0.0, 0.1),
            Point2(5.0, 5.0),
            Point2(5.1, 5.0),
            Point2(5.0, 5.1),
            Point2(10.0, 10.0), // isolated
        ]
    }

    #[test]
    fn test_new_rejects_invalid_parameters() {
        assert!(DBSCAN::<f64>::new(0, 0.5, DistanceMetric::Euclidean).is_err());
        assert!(DBSCAN::<f64>::new(3, -0.5, DistanceMetric::Euclidean).is_err());
        assert!(DBSCAN::<f64>::new(3, f64::NAN, DistanceMetric::Euclidean).is_err());
    }

    #[test]
    fn test_fit_empty() {
        let points: Vec<Point2<f64>> = Vec::new();
        let clusters = dbscan(3, 0.5).fit(&points).unwrap();
        assert!(clusters.is_empty());
    }

    #[test]
    fn test_fit_finds_clusters_and_discards_noise() {
        let points = blobs_with_noise();
        let clusters = dbscan(3, 0.2).fit(&points).unwrap();

        assert_eq!(clusters.len(), 2);
        // Ids follow the scan order: the blob at the origin is discovered first.
        let mut members0 = clusters[0].members().to_vec();
        members0.sort_unstable();
        assert_eq!(members0, vec![0, 1, 2]);

        let mut members1 = clusters[1].members().to_vec();
        members1.sort_unstable();
        assert_eq!(members1, vec![3, 4, 5]);
    }

    #[test]
    fn test_fit_assigns_each_point_at_most_once() {
        let points = blobs_with_noise();
        let clusters = dbscan(3, 0.2).fit(&points).unwrap();

        let mut seen = vec![0; points.len()];
        for cluster in &clusters {
            for &member in cluster.members() {
                seen[member] += 1;
            }
        }
        assert!(seen.iter().all(|&count| count <= 1));
        assert_eq!(seen[6], 0);
    }

    #[test]
    fn test_fit_all_noise() {
        let points = vec![Point2(0.0, 0.0), Point2(1.0, 1.0), Point2(2.0, 2.0)];
        let clusters = dbscan(2, 0.1).fit(&points).unwrap();
        assert!(clusters.is_empty());
    }

    #[test]
    fn test_fit_boundary_point_joins_first_cluster() {
        // The middle point is within reach of the dense run on its left but
        // has too few neighbors to be a core point itself.
        let points = vec![
            Point2(0.0, 0.0),
            Point2(0.1, 0.0),
            Point2(0.2, 0.0),
            Point2(0.4, 0.0),
        ];
        let clusters = dbscan(3, 0.21).fit(&points).unwrap();

        assert_eq!(clusters.len(), 1);
        let mut members = clusters[0].members().to_vec();
        members.sort_unstable();
        assert_eq!(members, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_fit_cancelled() {
        let token = CancellationToken::new();
        token.cancel();

        let points = blobs_with_noise();
        let mut dbscan = dbscan(3, 0.2).with_cancellation(token);
        let result = dbscan.fit(&points);
        assert!(matches!(result, Err(Error::Cancelled)));
    }
}
