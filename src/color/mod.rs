mod delta_e;
mod hex;
mod hsl;
mod lab;
mod packed;
mod rgb;
mod white_point;
mod xyz;

pub use delta_e::DeltaE;
pub use hex::parse_hex;
pub use hsl::HSL;
pub use lab::Lab;
pub use packed::PackedColor;
pub use rgb::RGB;
pub use white_point::{WhitePoint, D65};
pub use xyz::XYZ;

use crate::error::Error;
use crate::math::number::Float;
use std::fmt::{Display, Formatter};
use std::marker::PhantomData;
use std::str::FromStr;

/// Struct representing an immutable color value in the CIE L*a*b* color
/// space.
///
/// Colors are created by conversion from RGB, HSL, Lab or a hex string and
/// never mutated. Two colors are equal when every component agrees within
/// 1e-6.
///
/// # Type Parameters
/// * `F` - The floating point type.
/// * `WP` - The white point.
///
/// # Examples
/// ```
/// use swatchbook::{Color, RGB};
///
/// let yellow = RGB::new(255, 255, 0);
/// let color = Color::<f64>::from(&yellow);
/// assert!(color.is_light());
/// assert_eq!(color.to_hex_string(), "#FFFF00");
/// ```
#[derive(Debug, Clone)]
pub struct Color<F: Float, WP = D65> {
    l: F,
    a: F,
    b: F,
    _marker: PhantomData<WP>,
}

impl<F, WP> Color<F, WP>
where
    F: Float,
    WP: WhitePoint<F>,
{
    fn new(l: F, a: F, b: F) -> Self {
        let lab = Lab::<F, WP>::new(l, a, b);
        Self {
            l: lab.l,
            a: lab.a,
            b: lab.b,
            _marker: PhantomData,
        }
    }

    /// Returns whether this color is light.
    #[inline]
    #[must_use]
    pub fn is_light(&self) -> bool {
        self.l > F::from_f64(50.0)
    }

    /// Returns whether this color is dark.
    #[inline]
    #[must_use]
    pub fn is_dark(&self) -> bool {
        !self.is_light()
    }

    /// Returns the lightness of this color, in [0, 100].
    #[inline]
    #[must_use]
    pub fn lightness(&self) -> F {
        self.l
    }

    /// Returns the chroma of this color, the distance from the neutral axis.
    #[inline]
    #[must_use]
    pub fn chroma(&self) -> F {
        (self.a.powi(2) + self.b.powi(2)).sqrt()
    }

    /// Returns the hue angle of this color in degrees, in [0, 360).
    #[inline]
    #[must_use]
    pub fn hue(&self) -> F {
        let hue = self.b.atan2(self.a).to_degrees();
        if hue < F::zero() {
            hue + F::from_f64(360.0)
        } else {
            hue
        }
    }

    /// Mixes this color with another color with the given ratio.
    ///
    /// # Arguments
    /// * `other` - The other color.
    /// * `ratio` - The ratio of the other color, in [0, 1].
    ///
    /// # Returns
    /// The mixed color.
    #[must_use]
    pub fn mix(&self, other: &Self, ratio: F) -> Self {
        let l = self.l + (other.l - self.l) * ratio;
        let a = self.a + (other.a - self.a) * ratio;
        let b = self.b + (other.b - self.b) * ratio;
        Self::new(l, a, b)
    }

    /// Measures the perceptual difference between this color and another
    /// color with the given Delta E formula.
    ///
    /// # Arguments
    /// * `other` - The other color.
    /// * `formula` - The Delta E formula to use.
    ///
    /// # Returns
    /// The color difference.
    #[inline]
    #[must_use]
    pub fn difference(&self, other: &Self, formula: &DeltaE) -> F {
        formula.measure(&self.to_lab(), &other.to_lab())
    }

    /// Converts this color to an RGB color.
    #[inline]
    #[must_use]
    pub fn to_rgb(&self) -> RGB {
        RGB::from(&self.to_xyz())
    }

    /// Converts this color to an HSL color.
    #[inline]
    #[must_use]
    pub fn to_hsl(&self) -> HSL<F> {
        HSL::from(&self.to_rgb())
    }

    /// Converts this color to an XYZ color.
    #[inline]
    #[must_use]
    pub fn to_xyz(&self) -> XYZ<F, WP> {
        XYZ::from(&self.to_lab())
    }

    /// Converts this color to a CIE L*a*b* color.
    #[inline]
    #[must_use]
    pub fn to_lab(&self) -> Lab<F, WP> {
        Lab::new(self.l, self.a, self.b)
    }

    /// Packs this color into a 32-bit AARRGGBB value with full opacity.
    #[inline]
    #[must_use]
    pub fn to_packed(&self) -> PackedColor {
        PackedColor::from(&self.to_rgb())
    }

    /// Formats this color as an `#RRGGBB` hex string.
    #[inline]
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        let rgb = self.to_rgb();
        format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b)
    }
}

impl<F, WP> PartialEq for Color<F, WP>
where
    F: Float,
    WP: WhitePoint<F>,
{
    fn eq(&self, other: &Self) -> bool {
        let tolerance = F::from_f64(1e-6);
        (self.l - other.l).abs() < tolerance
            && (self.a - other.a).abs() < tolerance
            && (self.b - other.b).abs() < tolerance
    }
}

impl<F, WP> Display for Color<F, WP>
where
    F: Float + Display,
    WP: WhitePoint<F>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Color({l:.4}, {a:.4}, {b:.4})",
            l = self.l,
            a = self.a,
            b = self.b
        )
    }
}

impl<F, WP> From<&RGB> for Color<F, WP>
where
    F: Float,
    WP: WhitePoint<F>,
{
    fn from(rgb: &RGB) -> Self {
        let xyz = XYZ::<F, WP>::from(rgb);
        Self::from(&xyz)
    }
}

impl<F, WP> From<&HSL<F>> for Color<F, WP>
where
    F: Float,
    WP: WhitePoint<F>,
{
    fn from(hsl: &HSL<F>) -> Self {
        Self::from(&RGB::from(hsl))
    }
}

impl<F, WP> From<&XYZ<F, WP>> for Color<F, WP>
where
    F: Float,
    WP: WhitePoint<F>,
{
    fn from(xyz: &XYZ<F, WP>) -> Self {
        let lab = Lab::from(xyz);
        Self::new(lab.l, lab.a, lab.b)
    }
}

impl<F, WP> From<&Lab<F, WP>> for Color<F, WP>
where
    F: Float,
    WP: WhitePoint<F>,
{
    fn from(lab: &Lab<F, WP>) -> Self {
        Self::new(lab.l, lab.a, lab.b)
    }
}

impl<F, WP> FromStr for Color<F, WP>
where
    F: Float,
    WP: WhitePoint<F>,
{
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let packed = parse_hex(s)?;
        Ok(Self::from(&packed.to_rgb()))
    }
}
