use super::super::number::Float;
use super::super::point::Point;
use std::marker::PhantomData;

/// Struct representing a cluster of points.
///
/// The centroid is maintained incrementally as the arithmetic mean of the
/// member points.
///
/// # Type Parameters
/// * `F` - The float type used for calculations.
/// * `P` - The type of points used in the clustering algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster<F, P>
where
    F: Float,
    P: Point<F>,
{
    centroid: P,
    members: Vec<usize>,
    _marker: PhantomData<F>,
}

impl<F, P> Cluster<F, P>
where
    F: Float,
    P: Point<F>,
{
    /// Creates a new `Cluster` instance with the given centroid.
    ///
    /// # Arguments
    /// * `centroid` - The initial centroid of the new cluster.
    ///
    /// # Returns
    /// A new `Cluster` instance.
    #[must_use]
    pub fn new(centroid: P) -> Self {
        Self {
            centroid,
            members: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// Returns a reference to the centroid of this cluster.
    ///
    /// # Returns
    /// A reference to the centroid of this cluster.
    #[must_use]
    pub fn centroid(&self) -> &P {
        &self.centroid
    }

    /// Checks whether this cluster is empty.
    ///
    /// # Returns
    /// `true` if this cluster has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns the number of points in this cluster.
    ///
    /// # Returns
    /// The number of points in this cluster.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns the indices of the member points.
    ///
    /// # Returns
    /// A slice of the indices of the member points.
    #[must_use]
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// Inserts a point into this cluster, updating the centroid.
    ///
    /// # Arguments
    /// * `index` - The index of the point to insert.
    /// * `point` - The point to insert.
    pub fn insert(&mut self, index: usize, point: &P) {
        let size = F::from_usize(self.members.len());
        self.centroid.scale(size);
        self.centroid.add(point);
        self.centroid.scale((size + F::one()).recip());
        self.members.push(index);
    }

    /// Removes all members, retaining the current centroid.
    pub fn clear_members(&mut self) {
        self.members.clear();
    }
}

impl<F, P> Default for Cluster<F, P>
where
    F: Float,
    P: Point<F>,
{
    #[must_use]
    fn default() -> Self {
        Self::new(P::origin())
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::point::Point2;
    use super::*;

    #[test]
    fn test_insert_updates_centroid() {
        let mut cluster: Cluster<f64, Point2<f64>> = Cluster::default();
        cluster.insert(0, &Point2(1.0, 0.0));
        cluster.insert(3, &Point2(3.0, 2.0));
        cluster.insert(7, &Point2(2.0, 4.0));

        assert_eq!(cluster.len(), 3);
        assert_eq!(cluster.members(), &[0, 3, 7]);
        assert_eq!(*cluster.centroid(), Point2(2.0, 2.0));
    }

    #[test]
    fn test_clear_members_retains_centroid() {
        let mut cluster: Cluster<f64, Point2<f64>> = Cluster::default();
        cluster.insert(0, &Point2(2.0, 6.0));
        cluster.clear_members();

        assert!(cluster.is_empty());
        assert_eq!(*cluster.centroid(), Point2(2.0, 6.0));
    }

    #[test]
    fn test_insert_after_clear_overwrites_centroid() {
        let mut cluster: Cluster<f64, Point2<f64>> = Cluster::default();
        cluster.insert(0, &Point2(2.0, 6.0));
        cluster.clear_members();
        cluster.insert(1, &Point2(-1.0, 1.0));

        assert_eq!(*cluster.centroid(), Point2(-1.0, 1.0));
    }
}
