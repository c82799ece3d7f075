use crate::color::Lab;
use crate::math::number::{Float, Fraction};
use crate::swatch::Swatch;

/// Enum representing a theme: a strategy admitting and scoring swatches by
/// intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Admits every swatch with a flat score.
    Basic,
    /// Prefers saturated colors.
    Vivid,
    /// Prefers desaturated colors.
    Muted,
    /// Prefers light colors.
    Light,
    /// Prefers dark colors.
    Dark,
}

impl Theme {
    /// Decides whether a swatch is admitted by this theme.
    ///
    /// # Type Parameters
    /// * `F` - The floating point type.
    ///
    /// # Arguments
    /// * `swatch` - The swatch to test.
    ///
    /// # Returns
    /// `true` if the swatch is admitted.
    #[must_use]
    pub fn filter<F>(&self, swatch: &Swatch<F>) -> bool
    where
        F: Float,
    {
        let split = F::from_f64(50.0);
        match *self {
            Theme::Basic => true,
            Theme::Vivid => normalized_chroma(swatch) >= chroma_split(),
            Theme::Muted => normalized_chroma(swatch) < chroma_split(),
            Theme::Light => swatch.color().lightness() > split,
            Theme::Dark => swatch.color().lightness() <= split,
        }
    }

    /// Scores a swatch for this theme; higher is better.
    ///
    /// # Type Parameters
    /// * `F` - The floating point type.
    ///
    /// # Arguments
    /// * `swatch` - The swatch to score.
    ///
    /// # Returns
    /// The score of the swatch, in [0, 1].
    #[must_use]
    pub fn score<F>(&self, swatch: &Swatch<F>) -> Fraction<F>
    where
        F: Float,
    {
        match *self {
            Theme::Basic => Fraction::new(F::one()),
            Theme::Vivid => Fraction::new(normalized_chroma(swatch)),
            Theme::Muted => Fraction::new(F::one() - normalized_chroma(swatch)),
            Theme::Light => Fraction::new(normalized_lightness(swatch)),
            Theme::Dark => Fraction::new(F::one() - normalized_lightness(swatch)),
        }
    }
}

#[inline]
#[must_use]
fn chroma_split<F: Float>() -> F {
    F::from_f64(0.35)
}

#[inline]
#[must_use]
fn normalized_chroma<F: Float>(swatch: &Swatch<F>) -> F {
    swatch
        .color()
        .chroma()
        .normalize(Lab::<F>::min_chroma(), Lab::<F>::max_chroma())
}

#[inline]
#[must_use]
fn normalized_lightness<F: Float>(swatch: &Swatch<F>) -> F {
    swatch.color().lightness() / F::from_f64(100.0)
}
