use super::super::number::Float;
use super::super::point::Point;
use super::neighbor::Neighbor;

/// Trait representing a neighbor search algorithm.
///
/// # Type Parameters
/// * `F` - The float type used for calculations.
/// * `P` - The type of points used in the neighbor search algorithm.
pub trait NeighborSearch<F, P>
where
    F: Float,
    P: Point<F>,
{
    /// Searches for the nearest neighbor of the given point.
    /// Ties are broken by the lowest index.
    ///
    /// # Arguments
    /// * `query` - The reference point of the neighbor search.
    ///
    /// # Returns
    /// An `Option` of the nearest neighbor.
    #[must_use]
    fn search_nearest(&self, query: &P) -> Option<Neighbor<F>>;

    /// Searches for all neighbors within the given radius of a point.
    ///
    /// # Arguments
    /// * `query` - The reference point of the neighbor search.
    /// * `radius` - The radius within which neighbors are searched.
    ///
    /// # Returns
    /// A `Vec` of all neighbors within the given radius.
    #[must_use]
    fn search_radius(&self, query: &P, radius: F) -> Vec<Neighbor<F>>;
}
