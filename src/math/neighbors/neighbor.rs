use super::super::number::Float;

/// Struct representing a neighbor point found by a search.
///
/// # Type Parameters
/// * `F` - The float type used for calculations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor<F: Float> {
    /// The index of the neighbor in the searched dataset.
    pub index: usize,

    /// The distance between the query point and the neighbor.
    pub distance: F,
}

impl<F> Neighbor<F>
where
    F: Float,
{
    /// Creates a new `Neighbor` instance.
    ///
    /// # Arguments
    /// * `index` - The index of the neighbor.
    /// * `distance` - The distance between the query point and the neighbor.
    ///
    /// # Returns
    /// A new `Neighbor` instance.
    #[must_use]
    pub fn new(index: usize, distance: F) -> Self {
        Self { index, distance }
    }
}
