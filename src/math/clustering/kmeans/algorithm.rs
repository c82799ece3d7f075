use super::super::super::distance::DistanceMetric;
use super::super::super::neighbors::kdtree::KDTreeSearch;
use super::super::super::neighbors::search::NeighborSearch;
use super::super::super::number::Float;
use super::super::super::point::Point;
use super::super::algorithm::ClusteringAlgorithm;
use super::super::cluster::Cluster;
use super::init::Initializer;
use crate::cancel::CancellationToken;
use crate::error::{Error, Result};
use rand::Rng;

/// Struct representing the k-means clustering algorithm.
///
/// # Type Parameters
/// * `F` - The float type used for calculations.
/// * `R` - The random number generator used for seeding.
#[derive(Debug)]
pub struct KMeans<F, R>
where
    F: Float,
    R: Rng,
{
    k: usize,
    max_iterations: usize,
    tolerance: F,
    metric: DistanceMetric,
    initializer: Initializer,
    rng: R,
    cancellation: Option<CancellationToken>,
}

impl<F, R> KMeans<F, R>
where
    F: Float,
    R: Rng,
{
    /// Creates a new `KMeans` instance.
    ///
    /// # Arguments
    /// * `k` - The number of clusters.
    /// * `max_iterations` - The maximum number of assignment iterations.
    /// * `tolerance` - The centroid movement below which a cluster counts as
    ///   converged.
    /// * `metric` - The distance metric to use.
    /// * `initializer` - The strategy for choosing the initial centers.
    /// * `rng` - The random number generator used for seeding.
    ///
    /// # Returns
    /// A new `KMeans` instance, or an error if a parameter is out of range.
    pub fn new(
        k: usize,
        max_iterations: usize,
        tolerance: F,
        metric: DistanceMetric,
        initializer: Initializer,
        rng: R,
    ) -> Result<Self> {
        if k == 0 {
            return Err(Error::InvalidParameter {
                name: "k",
                reason: "must be at least 1",
            });
        }
        if max_iterations == 0 {
            return Err(Error::InvalidParameter {
                name: "max_iterations",
                reason: "must be at least 1",
            });
        }
        if tolerance < F::zero() || !tolerance.to_f64().unwrap_or(f64::NAN).is_finite() {
            return Err(Error::InvalidParameter {
                name: "tolerance",
                reason: "must be a finite, non-negative number",
            });
        }
        Ok(Self {
            k,
            max_iterations,
            tolerance,
            metric,
            initializer,
            rng,
            cancellation: None,
        })
    }

    /// Attaches a cancellation token, checked between iterations.
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

    /// Reassigns every point to its nearest center and recomputes the
    /// centroids. Returns whether every cluster moved less than the
    /// tolerance.
    fn assign<P: Point<F>>(&self, clusters: &mut [Cluster<F, P>], points: &[P]) -> bool {
        let mut previous = Vec::with_capacity(clusters.len());
        for cluster in clusters.iter_mut() {
            previous.push(*cluster.centroid());
            cluster.clear_members();
        }

        let neighbor_search = KDTreeSearch::new(&previous, self.metric);
        for (index, point) in points.iter().enumerate() {
            let Some(nearest) = neighbor_search.search_nearest(point) else {
                continue;
            };
            clusters[nearest.index].insert(index, point);
        }

        let mut converged = true;
        for (cluster, old_centroid) in clusters.iter().zip(&previous) {
            if cluster.is_empty() {
                // An empty cluster keeps its previous centroid.
                continue;
            }

            let shift = self.metric.measure(old_centroid, cluster.centroid());
            if shift >= self.tolerance {
                converged = false;
            }
        }
        converged
    }
}

impl<F, P, R> ClusteringAlgorithm<F, P> for KMeans<F, R>
where
    F: Float,
    P: Point<F>,
    R: Rng,
{
    fn fit(&mut self, points: &[P]) -> Result<Vec<Cluster<F, P>>> {
        if points.is_empty() {
            return Ok(Vec::new());
        }

        // With no more points than clusters, every point forms its own
        // singleton cluster and no iteration is needed.
        if points.len() <= self.k {
            let clusters = points
                .iter()
                .enumerate()
                .map(|(index, point)| {
                    let mut cluster = Cluster::new(*point);
                    cluster.insert(index, point);
                    cluster
                })
                .collect();
            return Ok(clusters);
        }

        let centers = self
            .initializer
            .select(points, self.k, &mut self.rng);
        let mut clusters: Vec<Cluster<F, P>> = centers.into_iter().map(Cluster::new).collect();
        for _ in 0..self.max_iterations {
            if let Some(token) = &self.cancellation {
                if token.is_cancelled() {
                    return Err(Error::Cancelled);
                }
            }
            if self.assign(&mut clusters, points) {
                break;
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
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn kmeans(k: usize, seed: u64) -> KMeans<f64, StdRng> {
        KMeans::new(
            k,
            10,
            1e-4,
            DistanceMetric::SquaredEuclidean,
            Initializer::KMeansPlusPlus,
            StdRng::seed_from_u64(seed),
        )
        .unwrap()
    }

    fn two_blobs() -> Vec<Point2<f64>> {
        vec![
            Point2(0.0, 0.0),
            Point2(0.1, 0.0),
            Point2(0.0, 0.1),
            Point2(0.1, 0.1),
            Point2(0.9, 0.9),
            Point2(1.0, 0.9),
            Point2(0.9, 1.0),
            Point2(1.0, 1.0),
        ]
    }

    #[test]
    fn test_new_rejects_invalid_parameters() {
        let result = KMeans::<f64, _>::new(
            0,
            10,
            1e-4,
            DistanceMetric::SquaredEuclidean,
            Initializer::KMeansPlusPlus,
            StdRng::seed_from_u64(0),
        );
        assert!(result.is_err());

        let result = KMeans::<f64, _>::new(
            2,
            0,
            1e-4,
            DistanceMetric::SquaredEuclidean,
            Initializer::KMeansPlusPlus,
            StdRng::seed_from_u64(0),
        );
        assert!(result.is_err());

        let result = KMeans::<f64, _>::new(
            2,
            10,
            -1.0,
            DistanceMetric::SquaredEuclidean,
            Initializer::KMeansPlusPlus,
            StdRng::seed_from_u64(0),
        );
        assert!(result.is_err());

        let result = KMeans::<f64, _>::new(
            2,
            10,
            f64::NAN,
            DistanceMetric::SquaredEuclidean,
            Initializer::KMeansPlusPlus,
            StdRng::seed_from_u64(0),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_fit_empty() {
        let points: Vec<Point2<f64>> = Vec::new();
        let clusters = kmeans(3, 0).fit(&points).unwrap();
        assert!(clusters.is_empty());
    }

    #[test]
    fn test_fit_singletons_when_not_enough_points() {
        let points = vec![Point2(0.0, 0.0), Point2(1.0, 1.0), Point2(2.0, 2.0)];
        let clusters = kmeans(5, 0).fit(&points).unwrap();

        assert_eq!(clusters.len(), 3);
        for (index, cluster) in clusters.iter().enumerate() {
            assert_eq!(cluster.len(), 1);
            assert_eq!(cluster.members(), &[index]);
            assert_eq!(*cluster.centroid(), points[index]);
        }
    }

    #[test]
    fn test_fit_partitions_points() {
        let points = two_blobs();
        let clusters = kmeans(2, 42).fit(&points).unwrap();

        assert!(clusters.len() <= 2);
        let mut seen = vec![0; points.len()];
        for cluster in &clusters {
            for &member in cluster.members() {
                seen[member] += 1;
            }
        }
        assert!(seen.iter().all(|&count| count == 1));
    }

    #[test]
    fn test_fit_separates_blobs() {
        let points = two_blobs();
        let clusters = kmeans(2, 42).fit(&points).unwrap();

        assert_eq!(clusters.len(), 2);
        for cluster in &clusters {
            assert_eq!(cluster.len(), 4);
            let low = cluster.members().iter().all(|&member| member < 4);
            let high = cluster.members().iter().all(|&member| member >= 4);
            assert!(low || high);
        }
    }

    #[test]
    fn test_fit_is_reproducible_with_seed() {
        let points = two_blobs();
        let clusters1 = kmeans(3, 7).fit(&points).unwrap();
        let clusters2 = kmeans(3, 7).fit(&points).unwrap();
        assert_eq!(clusters1, clusters2);
    }

    #[test]
    fn test_fit_cancelled() {
        let token = CancellationToken::new();
        token.cancel();

        let points = two_blobs();
        let mut kmeans = kmeans(2, 0).with_cancellation(token);
        let result = kmeans.fit(&points);
        assert!(matches!(result, Err(Error::Cancelled)));
    }
}
