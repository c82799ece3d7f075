use super::number::Float;
use std::fmt::Debug;
use std::ops::Index;

/// Trait representing a point in n-dimensional space.
///
/// # Type Parameters
/// * `F` - The type of the point's components.
pub trait Point<F: Float>: Copy + Debug + PartialEq + Index<usize, Output = F> {
    /// The number of components of this point.
    const DIMENSION: usize;

    /// Returns the point at the origin.
    ///
    /// # Returns
    /// The point whose components are all zero.
    #[must_use]
    fn origin() -> Self;

    /// Adds the given point to this point component-wise.
    ///
    /// # Arguments
    /// * `other` - The point to add.
    fn add(&mut self, other: &Self);

    /// Multiplies every component of this point by the given factor.
    ///
    /// # Arguments
    /// * `factor` - The scale factor.
    fn scale(&mut self, factor: F);
}

/// Struct representing a point in 2-dimensional space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2<F: Float>(pub F, pub F);

/// Struct representing a point in 3-dimensional space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3<F: Float>(pub F, pub F, pub F);

/// Struct representing a point in 5-dimensional space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point5<F: Float>(pub F, pub F, pub F, pub F, pub F);

macro_rules! impl_point {
    ($Point:ident, $dimension:expr, [$($field:tt),+]) => {
        impl<F> Index<usize> for $Point<F>
        where
            F: Float,
        {
            type Output = F;

            #[inline]
            fn index(&self, index: usize) -> &Self::Output {
                match index {
                    $($field => &self.$field,)+
                    _ => panic!(
                        "Index {} out of bounds for dimension {}",
                        index, $dimension
                    ),
                }
            }
        }

        impl<F> Point<F> for $Point<F>
        where
            F: Float,
        {
            const DIMENSION: usize = $dimension;

            #[inline]
            fn origin() -> Self {
                Self { $($field: F::zero()),+ }
            }

            #[inline]
            fn add(&mut self, other: &Self) {
                $(self.$field += other.$field;)+
            }

            #[inline]
            fn scale(&mut self, factor: F) {
                $(self.$field *= factor;)+
            }
        }
    };
}

impl_point!(Point2, 2, [0, 1]);
impl_point!(Point3, 3, [0, 1, 2]);
impl_point!(Point5, 5, [0, 1, 2, 3, 4]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index() {
        let point = Point3(1.0, 2.0, 3.0);
        assert_eq!(point[0], 1.0);
        assert_eq!(point[1], 2.0);
        assert_eq!(point[2], 3.0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_out_of_bounds() {
        let point = Point2(1.0, 2.0);
        let _ = point[2];
    }

    #[test]
    fn test_origin() {
        assert_eq!(Point5::origin(), Point5(0.0, 0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_add() {
        let mut point = Point3(1.0, 2.0, 3.0);
        point.add(&Point3(0.5, -2.0, 1.0));
        assert_eq!(point, Point3(1.5, 0.0, 4.0));
    }

    #[test]
    fn test_scale() {
        let mut point = Point2(1.0, -2.0);
        point.scale(2.0);
        assert_eq!(point, Point2(2.0, -4.0));
    }
}
