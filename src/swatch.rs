use crate::color::{Color, DeltaE};
use crate::math::number::Float;

/// Struct representing a swatch: a representative color, the number of
/// source pixels it stands for, and the mean position of those pixels in
/// image coordinates.
///
/// # Type Parameters
/// * `F` - The floating point type.
///
/// # Examples
/// ```
/// use swatchbook::{Color, Swatch, RGB};
///
/// let color = Color::<f64>::from(&RGB::new(255, 0, 64));
/// let swatch = Swatch::new(color.clone(), (90.0, 120.5), 384);
/// assert_eq!(swatch.color(), &color);
/// assert_eq!(swatch.position(), (90.0, 120.5));
/// assert_eq!(swatch.population(), 384);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Swatch<F: Float> {
    color: Color<F>,
    position: (F, F),
    population: usize,
}

impl<F> Swatch<F>
where
    F: Float,
{
    /// Creates a new `Swatch` instance.
    ///
    /// # Arguments
    /// * `color` - The color of the swatch.
    /// * `position` - The (x, y) position of the swatch, 0-indexed.
    /// * `population` - The number of pixels represented by the swatch.
    ///
    /// # Returns
    /// A new `Swatch` instance.
    #[must_use]
    pub fn new(color: Color<F>, position: (F, F), population: usize) -> Self {
        Self {
            color,
            position,
            population,
        }
    }

    /// Returns the color of this swatch.
    #[must_use]
    pub fn color(&self) -> &Color<F> {
        &self.color
    }

    /// Returns the (x, y) position of this swatch.
    #[must_use]
    pub fn position(&self) -> (F, F) {
        self.position
    }

    /// Returns the population of this swatch.
    #[must_use]
    pub fn population(&self) -> usize {
        self.population
    }

    /// Measures the perceptual distance between this swatch and another.
    #[inline]
    #[must_use]
    pub(crate) fn distance(&self, other: &Self) -> F {
        self.color.difference(&other.color, &DeltaE::CIE2000)
    }
}
