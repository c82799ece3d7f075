use super::super::number::Float;
use super::super::point::Point;
use super::cluster::Cluster;
use crate::error::Result;

/// Trait representing a clustering algorithm.
///
/// # Type Parameters
/// * `F` - The float type used for calculations.
/// * `P` - The point type used for calculations.
pub trait ClusteringAlgorithm<F, P>
where
    F: Float,
    P: Point<F>,
{
    /// Groups the given points into clusters.
    ///
    /// # Arguments
    /// * `points` - A slice of data points to cluster.
    ///
    /// # Returns
    /// The non-empty clusters found by the algorithm, or an error if the
    /// run was cancelled.
    fn fit(&mut self, points: &[P]) -> Result<Vec<Cluster<F, P>>>;
}
