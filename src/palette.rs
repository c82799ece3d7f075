use crate::algorithm::Algorithm;
use crate::color::{Color, Lab, PackedColor, XYZ};
use crate::error::{Error, Result};
use crate::filter::PixelFilter;
use crate::image_data::ImageData;
use crate::math::clustering::algorithm::ClusteringAlgorithm;
use crate::math::clustering::cluster::Cluster;
use crate::math::clustering::dbscan::algorithm::DBSCAN;
use crate::math::clustering::kmeans::algorithm::KMeans;
use crate::math::clustering::kmeans::init::Initializer;
use crate::math::distance::DistanceMetric;
use crate::math::number::Float;
use crate::math::point::{Point3, Point5};
use crate::options::ExtractOptions;
use crate::swatch::Swatch;
use crate::theme::Theme;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cmp::Reverse;

/// Struct representing a color palette extracted from an image.
///
/// Swatches are filtered through the theme at construction and stored in
/// descending population order, with ties keeping their first-appearance
/// order. The palette is immutable once constructed.
///
/// # Type Parameters
/// * `F` - The floating point type.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette<F: Float> {
    swatches: Vec<Swatch<F>>,
    scores: Vec<F>,
}

impl<F> Palette<F>
where
    F: Float,
{
    /// Creates a new `Palette` instance from the given swatches.
    ///
    /// # Arguments
    /// * `swatches` - The candidate swatches.
    /// * `theme` - The theme filtering and scoring the swatches.
    ///
    /// # Returns
    /// A new `Palette` instance.
    #[must_use]
    pub fn new(swatches: Vec<Swatch<F>>, theme: Theme) -> Self {
        let mut swatches: Vec<Swatch<F>> = swatches
            .into_iter()
            .filter(|swatch| theme.filter(swatch))
            .collect();
        swatches.sort_by_key(|swatch| Reverse(swatch.population()));

        let scores = swatches
            .iter()
            .map(|swatch| theme.score(swatch).value())
            .collect();
        Self { swatches, scores }
    }

    /// Extracts a color palette from the given image data with the default
    /// options.
    ///
    /// # Arguments
    /// * `image_data` - The image data to extract the palette from.
    ///
    /// # Returns
    /// The extracted palette.
    pub fn extract(image_data: &ImageData) -> Result<Self> {
        Self::extract_with_options(image_data, &ExtractOptions::default())
    }

    /// Extracts a color palette from the given image data.
    ///
    /// # Arguments
    /// * `image_data` - The image data to extract the palette from.
    /// * `options` - The options controlling the extraction.
    ///
    /// # Returns
    /// The extracted palette. Extraction fails if the image buffer is empty,
    /// if an option is out of range, or if the extraction is cancelled; an
    /// image whose pixels are all filtered out yields an empty palette.
    pub fn extract_with_options(
        image_data: &ImageData,
        options: &ExtractOptions<F>,
    ) -> Result<Self> {
        if image_data.data().is_empty() {
            return Err(Error::EmptyImageData);
        }

        let points = collect_pixels(image_data, &options.filters);
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let clusters = match options.algorithm {
            Algorithm::KMeans => {
                let mut kmeans = KMeans::new(
                    options.max_colors,
                    options.kmeans.max_iterations,
                    options.kmeans.tolerance,
                    DistanceMetric::SquaredEuclidean,
                    Initializer::KMeansPlusPlus,
                    rng,
                )?;
                if let Some(token) = &options.cancellation {
                    kmeans = kmeans.with_cancellation(token.clone());
                }
                kmeans.fit(&points)?
            }
            Algorithm::DBSCAN => {
                let mut dbscan = DBSCAN::new(
                    options.dbscan.min_points,
                    options.dbscan.radius,
                    DistanceMetric::Euclidean,
                )?;
                if let Some(token) = &options.cancellation {
                    dbscan = dbscan.with_cancellation(token.clone());
                }
                dbscan.fit(&points)?
            }
        };

        let swatches = clusters
            .iter()
            .filter_map(|cluster| {
                cluster_to_swatch(cluster, image_data.width(), image_data.height())
            })
            .collect();
        let swatches = merge_similar_swatches(swatches)?;
        Ok(Self::new(swatches, options.theme))
    }

    /// Returns the number of swatches in this palette.
    #[must_use]
    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    /// Returns `true` if this palette contains no swatches.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    /// Returns the swatches in this palette, in descending population order.
    #[must_use]
    pub fn swatches(&self) -> &[Swatch<F>] {
        &self.swatches
    }

    /// Returns the swatch with the highest population.
    ///
    /// # Returns
    /// The dominant swatch, or an error if the palette is empty.
    pub fn dominant_swatch(&self) -> Result<Swatch<F>> {
        self.swatches.first().cloned().ok_or(Error::EmptyPalette)
    }

    /// Finds `n` swatches that are maximally distinct from each other under
    /// the CIEDE2000 metric.
    ///
    /// The selection is greedy farthest-point: it is seeded with the swatch
    /// maximizing population × score, then repeatedly adds the candidate
    /// with the greatest distance to the already-selected set. Ties are
    /// broken by the higher score, then the higher population, then the
    /// lower index.
    ///
    /// # Arguments
    /// * `n` - The number of swatches to find. Must be at least 1.
    ///
    /// # Returns
    /// The selected swatches, in selection order. All swatches are returned
    /// when `n` is not smaller than the palette.
    pub fn find_swatches(&self, n: usize) -> Result<Vec<Swatch<F>>> {
        if n == 0 {
            return Err(Error::InvalidParameter {
                name: "n",
                reason: "must be at least 1",
            });
        }
        if n >= self.swatches.len() {
            return Ok(self.swatches.clone());
        }

        // Candidate `index` replaces the incumbent when it is strictly
        // better in the (key, score, population) chain; scanning in index
        // order keeps the lower index on a full tie.
        let prefer = |index: usize, incumbent: usize, key: F, incumbent_key: F| -> bool {
            if key != incumbent_key {
                return key > incumbent_key;
            }
            if self.scores[index] != self.scores[incumbent] {
                return self.scores[index] > self.scores[incumbent];
            }
            self.swatches[index].population() > self.swatches[incumbent].population()
        };

        let weight =
            |index: usize| F::from_usize(self.swatches[index].population()) * self.scores[index];
        let mut seed = 0;
        for index in 1..self.swatches.len() {
            if prefer(index, seed, weight(index), weight(seed)) {
                seed = index;
            }
        }

        let mut chosen = vec![false; self.swatches.len()];
        chosen[seed] = true;
        let mut selected = vec![seed];
        let mut min_distances: Vec<F> = self
            .swatches
            .iter()
            .map(|swatch| swatch.distance(&self.swatches[seed]))
            .collect();
        while selected.len() < n {
            let mut best: Option<usize> = None;
            for index in 0..self.swatches.len() {
                if chosen[index] {
                    continue;
                }
                best = match best {
                    None => Some(index),
                    Some(incumbent)
                        if prefer(index, incumbent, min_distances[index], min_distances[incumbent]) =>
                    {
                        Some(index)
                    }
                    Some(incumbent) => Some(incumbent),
                };
            }
            let Some(next) = best else {
                break;
            };

            chosen[next] = true;
            selected.push(next);
            for (distance, swatch) in min_distances.iter_mut().zip(&self.swatches) {
                let updated = swatch.distance(&self.swatches[next]);
                if updated < *distance {
                    *distance = updated;
                }
            }
        }
        Ok(selected
            .into_iter()
            .map(|index| self.swatches[index].clone())
            .collect())
    }

    /// Returns the swatches whose hue falls inside the given interval.
    ///
    /// The interval is in degrees and may wrap around 360: with
    /// `from_degrees > to_degrees` it covers `[from, 360) ∪ [0, to]`.
    ///
    /// # Arguments
    /// * `from_degrees` - The start of the hue interval.
    /// * `to_degrees` - The end of the hue interval.
    ///
    /// # Returns
    /// The matching swatches, in descending population order.
    #[must_use]
    pub fn find_swatches_by_hue(&self, from_degrees: F, to_degrees: F) -> Vec<Swatch<F>> {
        self.swatches
            .iter()
            .filter(|swatch| {
                let hue = swatch.color().hue();
                if from_degrees <= to_degrees {
                    hue >= from_degrees && hue <= to_degrees
                } else {
                    hue >= from_degrees || hue <= to_degrees
                }
            })
            .cloned()
            .collect()
    }
}

/// Converts the image data into normalized 5-dimensional feature vectors,
/// applying the pixel filters.
#[must_use]
fn collect_pixels<F>(image_data: &ImageData, filters: &[PixelFilter<F>]) -> Vec<Point5<F>>
where
    F: Float,
{
    let width = image_data.width() as usize;
    let width_f = F::from_u32(image_data.width());
    let height_f = F::from_u32(image_data.height());
    image_data
        .data()
        .chunks_exact(4)
        .enumerate()
        .filter_map(|(index, chunk)| {
            let pixel = PackedColor::from_rgba(chunk[0], chunk[1], chunk[2], chunk[3]);
            if !filters.iter().all(|filter| filter.test(&pixel)) {
                return None;
            }

            let xyz = XYZ::<F>::from(&pixel.to_rgb());
            let lab = Lab::<F>::from(&xyz);
            let x = F::from_usize(index % width);
            let y = F::from_usize(index / width);
            Some(Point5(
                lab.l.normalize(Lab::<F>::min_l(), Lab::<F>::max_l()),
                lab.a.normalize(Lab::<F>::min_a(), Lab::<F>::max_a()),
                lab.b.normalize(Lab::<F>::min_b(), Lab::<F>::max_b()),
                x.normalize(F::zero(), width_f),
                y.normalize(F::zero(), height_f),
            ))
        })
        .collect()
}

/// Converts a non-empty cluster back into a swatch, denormalizing the
/// centroid to a Lab color and image coordinates.
#[must_use]
fn cluster_to_swatch<F>(
    cluster: &Cluster<F, Point5<F>>,
    width: u32,
    height: u32,
) -> Option<Swatch<F>>
where
    F: Float,
{
    if cluster.is_empty() {
        return None;
    }

    let centroid = cluster.centroid();
    let lab = Lab::<F>::new(
        centroid[0].denormalize(Lab::<F>::min_l(), Lab::<F>::max_l()),
        centroid[1].denormalize(Lab::<F>::min_a(), Lab::<F>::max_a()),
        centroid[2].denormalize(Lab::<F>::min_b(), Lab::<F>::max_b()),
    );
    let x = centroid[3].denormalize(F::zero(), F::from_u32(width));
    let y = centroid[4].denormalize(F::zero(), F::from_u32(height));
    Some(Swatch::new(Color::from(&lab), (x, y), cluster.len()))
}

/// Consolidates swatches whose colors are perceived as identical.
///
/// Spatially distant clusters of the same color (a solid background split by
/// the clusterer, for example) are merged into a single swatch. According to
/// the Digital Color Imaging Handbook, a ΔE ≤ 2.3 is not distinguishable by
/// human perception, so swatch colors are grouped by DBSCAN with that radius
/// over their Lab coordinates.
fn merge_similar_swatches<F>(swatches: Vec<Swatch<F>>) -> Result<Vec<Swatch<F>>>
where
    F: Float,
{
    if swatches.len() <= 1 {
        return Ok(swatches);
    }

    let colors: Vec<Point3<F>> = swatches
        .iter()
        .map(|swatch| {
            let lab = swatch.color().to_lab();
            Point3(lab.l, lab.a, lab.b)
        })
        .collect();
    let mut dbscan = DBSCAN::new(1, F::from_f64(2.3), DistanceMetric::Euclidean)?;
    let groups = dbscan.fit(&colors)?;

    let merged = groups
        .iter()
        .filter_map(|group| {
            let mut population = 0;
            let mut l = F::zero();
            let mut a = F::zero();
            let mut b = F::zero();
            let mut x = F::zero();
            let mut y = F::zero();
            for &member in group.members() {
                let swatch = &swatches[member];
                let lab = swatch.color().to_lab();
                let weight = F::from_usize(swatch.population());
                l += lab.l * weight;
                a += lab.a * weight;
                b += lab.b * weight;
                x += swatch.position().0 * weight;
                y += swatch.position().1 * weight;
                population += swatch.population();
            }
            if population == 0 {
                return None;
            }

            let total = F::from_usize(population);
            let color = Color::from(&Lab::new(l / total, a / total, b / total));
            Some(Swatch::new(color, (x / total, y / total), population))
        })
        .collect();
    Ok(merged)
}
