//! Automatic color palette extraction from raster images.
//!
//! Pixels are converted to CIE L*a*b* feature vectors, grouped by a
//! clustering algorithm (k-means with k-means++ seeding, or DBSCAN), and
//! summarized as swatches carrying a representative color, a population and
//! a mean image position. Themes filter and score the swatches, and the
//! palette selects perceptually distinct ones under the CIEDE2000 metric.
//!
//! # Examples
//! ```
//! use swatchbook::{ExtractOptions, ImageData, Palette};
//!
//! let data = [255, 0, 0, 255].repeat(16);
//! let image_data = ImageData::new(4, 4, data).unwrap();
//! let options = ExtractOptions {
//!     max_colors: 3,
//!     seed: Some(42),
//!     ..ExtractOptions::default()
//! };
//! let palette: Palette<f64> = Palette::extract_with_options(&image_data, &options).unwrap();
//!
//! assert_eq!(palette.len(), 1);
//! let swatch = palette.dominant_swatch().unwrap();
//! assert_eq!(swatch.population(), 16);
//! assert_eq!(swatch.color().to_hex_string(), "#FF0000");
//! ```

mod algorithm;
mod cancel;
mod color;
mod error;
mod filter;
mod image_data;
mod math;
mod options;
mod palette;
mod swatch;
mod theme;

pub use algorithm::Algorithm;
pub use cancel::CancellationToken;
pub use color::{parse_hex, Color, DeltaE, Lab, PackedColor, WhitePoint, D65, HSL, RGB, XYZ};
pub use error::{Error, Result};
pub use filter::PixelFilter;
pub use image_data::ImageData;
pub use math::clustering::algorithm::ClusteringAlgorithm;
pub use math::clustering::cluster::Cluster;
pub use math::clustering::dbscan::algorithm::DBSCAN;
pub use math::clustering::kmeans::algorithm::KMeans;
pub use math::clustering::kmeans::init::Initializer;
pub use math::distance::DistanceMetric;
pub use math::number::{Float, Fraction, Number};
pub use math::point::{Point, Point2, Point3, Point5};
pub use options::{DbscanParams, ExtractOptions, KMeansParams};
pub use palette::Palette;
pub use swatch::Swatch;
pub use theme::Theme;
