use super::super::super::distance::DistanceMetric;
use super::super::super::number::Float;
use super::super::super::point::Point;
use rand::Rng;

/// Enum representing a strategy for choosing the initial cluster centers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Initializer {
    /// Chooses centers uniformly at random without replacement.
    Random,
    /// Chooses centers by k-means++ seeding: the first center is uniform,
    /// each subsequent center is drawn with probability proportional to the
    /// squared distance to the nearest already-chosen center.
    KMeansPlusPlus,
}

impl Initializer {
    /// Selects up to `k` initial centers from the given points.
    ///
    /// Fewer than `k` centers are returned when the points contain fewer
    /// than `k` unique values.
    ///
    /// # Type Parameters
    /// * `F` - The float type used for calculations.
    /// * `P` - The point type used for calculations.
    /// * `R` - The random number generator type.
    ///
    /// # Arguments
    /// * `points` - The candidate points. Must not be empty.
    /// * `k` - The number of centers to select.
    /// * `rng` - The random number generator to use.
    ///
    /// # Returns
    /// The selected centers.
    #[must_use]
    pub fn select<F, P, R>(&self, points: &[P], k: usize, rng: &mut R) -> Vec<P>
    where
        F: Float,
        P: Point<F>,
        R: Rng,
    {
        match *self {
            Initializer::Random => random_centers(points, k, rng),
            Initializer::KMeansPlusPlus => plus_plus_centers(points, k, rng),
        }
    }
}

#[must_use]
fn random_centers<F, P, R>(points: &[P], k: usize, rng: &mut R) -> Vec<P>
where
    F: Float,
    P: Point<F>,
    R: Rng,
{
    rand::seq::index::sample(rng, points.len(), k.min(points.len()))
        .iter()
        .map(|index| points[index])
        .collect()
}

#[must_use]
fn plus_plus_centers<F, P, R>(points: &[P], k: usize, rng: &mut R) -> Vec<P>
where
    F: Float,
    P: Point<F>,
    R: Rng,
{
    let metric = DistanceMetric::SquaredEuclidean;
    let mut centers = Vec::with_capacity(k);

    let first = points[rng.gen_range(0..points.len())];
    centers.push(first);

    let mut weights: Vec<F> = points
        .iter()
        .map(|point| metric.measure(point, &first))
        .collect();
    while centers.len() < k {
        let total = weights
            .iter()
            .fold(F::zero(), |total, &weight| total + weight);
        if total <= F::zero() {
            // Every remaining point coincides with a chosen center.
            break;
        }

        let mut target = F::from_f64(rng.gen::<f64>()) * total;
        let mut chosen = None;
        for (index, &weight) in weights.iter().enumerate() {
            if weight <= F::zero() {
                continue;
            }
            if target < weight {
                chosen = Some(index);
                break;
            }
            target -= weight;
        }
        // Rounding can leave the target past the last positive weight.
        let Some(chosen) = chosen.or_else(|| weights.iter().rposition(|&weight| weight > F::zero()))
        else {
            break;
        };

        let center = points[chosen];
        centers.push(center);
        for (weight, point) in weights.iter_mut().zip(points) {
            let distance = metric.measure(point, &center);
            if distance < *weight {
                *weight = distance;
            }
        }
    }
    centers
}
