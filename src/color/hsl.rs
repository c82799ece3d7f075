use super::rgb::RGB;
use crate::math::number::Float;
use std::fmt::{Display, Formatter, Result};

/// Struct representing a color in the HSL color space.
///
/// The hue is expressed in degrees in [0, 360); saturation and lightness are
/// fractions in [0, 1].
///
/// # Type Parameters
/// * `F` - The floating point type.
#[derive(Debug, Clone, PartialEq)]
pub struct HSL<F: Float> {
    pub h: F,
    pub s: F,
    pub l: F,
}

impl<F> HSL<F>
where
    F: Float,
{
    /// Creates a new HSL color.
    ///
    /// The hue is wrapped into [0, 360); saturation and lightness are
    /// clamped to [0, 1].
    ///
    /// # Arguments
    /// * `h` - The hue in degrees.
    /// * `s` - The saturation.
    /// * `l` - The lightness.
    ///
    /// # Returns
    /// A new HSL color.
    #[inline]
    #[must_use]
    pub fn new(h: F, s: F, l: F) -> Self {
        let full_turn = F::from_f64(360.0);
        let mut h = h % full_turn;
        if h < F::zero() {
            h += full_turn;
        }
        Self {
            h,
            s: num_traits::clamp(s, F::zero(), F::one()),
            l: num_traits::clamp(l, F::zero(), F::one()),
        }
    }
}

impl<F> Display for HSL<F>
where
    F: Float + Display,
{
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "HSL({h:.4}, {s:.4}, {l:.4})",
            h = self.h,
            s = self.s,
            l = self.l
        )
    }
}

impl<F> From<&RGB> for HSL<F>
where
    F: Float,
{
    #[inline]
    fn from(rgb: &RGB) -> Self {
        let max_value: F = RGB::max_value();
        let r = F::from_u8(rgb.r) / max_value;
        let g = F::from_u8(rgb.g) / max_value;
        let b = F::from_u8(rgb.b) / max_value;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let chroma = max - min;

        let two = F::from_f64(2.0);
        let l = (max + min) / two;
        if chroma.is_zero() {
            return Self::new(F::zero(), F::zero(), l);
        }

        let s = chroma / (F::one() - (two * l - F::one()).abs());
        let segment = if max == r {
            let mut segment = (g - b) / chroma;
            if segment < F::zero() {
                segment += F::from_f64(6.0);
            }
            segment
        } else if max == g {
            (b - r) / chroma + two
        } else {
            (r - g) / chroma + F::from_f64(4.0)
        };
        Self::new(segment * F::from_f64(60.0), s, l)
    }
}
