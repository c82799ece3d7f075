use crate::algorithm::Algorithm;
use crate::cancel::CancellationToken;
use crate::filter::PixelFilter;
use crate::math::number::Float;
use crate::theme::Theme;

/// Parameters of the k-means clusterer.
///
/// # Type Parameters
/// * `F` - The floating point type.
#[derive(Debug, Clone, PartialEq)]
pub struct KMeansParams<F: Float> {
    /// The maximum number of assignment iterations.
    pub max_iterations: usize,
    /// The centroid movement below which a cluster counts as converged.
    pub tolerance: F,
}

impl<F> Default for KMeansParams<F>
where
    F: Float,
{
    fn default() -> Self {
        Self {
            max_iterations: 10,
            tolerance: F::from_f64(1e-4),
        }
    }
}

/// Parameters of the DBSCAN clusterer.
///
/// # Type Parameters
/// * `F` - The floating point type.
#[derive(Debug, Clone, PartialEq)]
pub struct DbscanParams<F: Float> {
    /// The minimum neighborhood size of a core point.
    pub min_points: usize,
    /// The neighborhood radius in normalized feature space.
    pub radius: F,
}

impl<F> Default for DbscanParams<F>
where
    F: Float,
{
    fn default() -> Self {
        Self {
            min_points: 9,
            radius: F::from_f64(0.016),
        }
    }
}

/// Options controlling a single palette extraction.
///
/// # Type Parameters
/// * `F` - The floating point type.
#[derive(Debug, Clone)]
pub struct ExtractOptions<F: Float> {
    /// The number of clusters requested from the k-means path, and an upper
    /// bound on the number of swatches it emits.
    pub max_colors: usize,
    /// The clustering algorithm to run.
    pub algorithm: Algorithm,
    /// The theme filtering and scoring the extracted swatches.
    pub theme: Theme,
    /// The pixel filters; a pixel must pass every one of them.
    pub filters: Vec<PixelFilter<F>>,
    /// The seed of the random number generator. Extractions with the same
    /// seed are reproducible; without one, the generator is seeded from the
    /// system source.
    pub seed: Option<u64>,
    /// The k-means parameters.
    pub kmeans: KMeansParams<F>,
    /// The DBSCAN parameters.
    pub dbscan: DbscanParams<F>,
    /// An optional cooperative cancellation token.
    pub cancellation: Option<CancellationToken>,
}

impl<F> Default for ExtractOptions<F>
where
    F: Float,
{
    fn default() -> Self {
        Self {
            max_colors: 8,
            algorithm: Algorithm::KMeans,
            theme: Theme::Basic,
            filters: vec![PixelFilter::opaque()],
            seed: None,
            kmeans: KMeansParams::default(),
            dbscan: DbscanParams::default(),
            cancellation: None,
        }
    }
}
