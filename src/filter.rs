use crate::color::{PackedColor, XYZ};
use crate::math::number::Float;

/// Enum representing a pixel predicate applied before feature-vector
/// conversion. A pixel must pass every configured filter to take part in
/// clustering.
///
/// # Type Parameters
/// * `F` - The floating point type.
#[derive(Debug, Clone, PartialEq)]
pub enum PixelFilter<F: Float> {
    /// Keeps pixels whose opacity is at least the threshold.
    Alpha { threshold: F },
    /// Keeps pixels whose linear-light luminance lies inside [min, max],
    /// dropping near-black and near-white pixels.
    Luminance { min: F, max: F },
}

impl<F> PixelFilter<F>
where
    F: Float,
{
    /// Returns the default alpha filter, keeping fully opaque pixels only.
    #[must_use]
    pub fn opaque() -> Self {
        PixelFilter::Alpha {
            threshold: F::one(),
        }
    }

    /// Returns a luminance filter dropping near-black and near-white pixels.
    #[must_use]
    pub fn luminance() -> Self {
        PixelFilter::Luminance {
            min: F::from_f64(0.05),
            max: F::from_f64(0.95),
        }
    }

    /// Tests whether the given pixel passes this filter.
    ///
    /// # Arguments
    /// * `pixel` - The packed pixel to test.
    ///
    /// # Returns
    /// `true` if the pixel should take part in clustering.
    #[must_use]
    pub fn test(&self, pixel: &PackedColor) -> bool {
        match self {
            PixelFilter::Alpha { threshold } => pixel.opacity::<F>() >= *threshold,
            PixelFilter::Luminance { min, max } => {
                let luminance = XYZ::<F>::from(&pixel.to_rgb()).y;
                luminance >= *min && luminance <= *max
            }
        }
    }
}
