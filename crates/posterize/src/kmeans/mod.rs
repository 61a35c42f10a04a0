//! Seeded Lloyd's-algorithm k-means over color samples.
//!
//! One implementation serves every color space through the [`ClusterSpace`]
//! strategy. A run is:
//!
//! 1. **Seed** - draw `k` sample indices (with replacement) from a generator
//!    built from the caller's seed, in cluster order.
//! 2. **Assign** - every sample goes to its nearest centroid by squared
//!    Euclidean distance; ties go to the lowest cluster index.
//! 3. **Update** - each centroid becomes the mean of its members. A cluster
//!    with no members is reseeded to a freshly drawn sample so it can compete
//!    again.
//! 4. **Terminate** - stop once an assignment step changes nothing, or at the
//!    iteration cap.
//!
//! The iteration whose assignment step changes nothing skips the update:
//! the partition is already final, and keeping its centroids makes the
//! returned state a fixed point (one more [`KMeans::step`] changes nothing).
//!
//! # Determinism
//!
//! The only randomness is a [`ChaCha8Rng`] seeded from the caller's `u64`.
//! Sample indices are drawn through a `u64` range, so a seed picks the same
//! samples on 32- and 64-bit targets.
//! With the `parallel` feature the assignment step runs on rayon, but results
//! are collected in sample order and the update step runs sequentially in
//! cluster order, so the output is identical either way.

mod cancel;
mod space;

pub use cancel::CancelToken;
pub use space::{ClusterSpace, ColorSample, ColorSpace, LabSpace, RgbSpace};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::api::PosterizeError;

/// Iteration cap used when none is configured.
pub const DEFAULT_MAX_ITERATIONS: usize = 20;

/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 314_159_265;

/// Marks a sample that has not been through an assignment step yet.
const UNASSIGNED: usize = usize::MAX;

/// A centroid and the number of samples assigned to it in the latest
/// assignment step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cluster<S> {
    pub centroid: ColorSample<S>,
    pub members: usize,
}

/// Outcome of one [`KMeans::step`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Iteration {
    /// Whether any sample changed cluster in the assignment step.
    pub changed: bool,
    /// Sum of squared distances from samples to their assigned centroid,
    /// measured right after the assignment step.
    pub inertia: f64,
    /// Empty clusters reseeded in the update step.
    pub reseeded: usize,
}

/// Diagnostics for a finished run.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KMeansReport {
    /// Iterations executed (assignment steps).
    pub iterations: usize,
    /// True if the run stopped because nothing changed, false if it hit the cap.
    ///
    /// When false, the centroids were moved once more after the final
    /// assignment, so some samples may sit closer to another centroid than
    /// to the one they are assigned to.
    pub converged: bool,
    /// Total empty-cluster reseeds over the run.
    pub reseeds: usize,
    /// Inertia after each assignment step. Non-increasing.
    pub inertia: Vec<f64>,
}

/// Final state of a run.
///
/// After a converged run every sample is assigned to its nearest centroid.
/// A run stopped at the iteration cap keeps the last assignment together
/// with the centroids updated from it, which need not agree.
#[derive(Debug, Clone)]
pub struct Clustering<S> {
    /// One centroid per cluster, in cluster order.
    pub centroids: Vec<ColorSample<S>>,
    /// Cluster index for every sample, in sample order, from the last
    /// assignment step.
    pub assignments: Vec<usize>,
    pub report: KMeansReport,
}

/// Lloyd's algorithm state over a borrowed slice of samples.
///
/// Use [`run`](Self::run) for a complete clustering, or drive it by hand with
/// [`step`](Self::step).
///
/// # Example
///
/// ```
/// use posterize::kmeans::{ColorSample, KMeans, RgbSpace};
///
/// let samples: Vec<ColorSample<RgbSpace>> = [[0, 0, 0], [2, 2, 2], [250, 250, 250], [254, 254, 254]]
///     .into_iter()
///     .map(ColorSample::from_rgb)
///     .collect();
///
/// let result = KMeans::new(&samples, 2, 7).unwrap().run(20, None).unwrap();
/// assert_eq!(result.assignments[0], result.assignments[1]);
/// assert_eq!(result.assignments[2], result.assignments[3]);
/// assert_ne!(result.assignments[0], result.assignments[2]);
/// ```
#[derive(Debug)]
pub struct KMeans<'a, S> {
    samples: &'a [ColorSample<S>],
    clusters: Vec<Cluster<S>>,
    assignments: Vec<usize>,
    rng: ChaCha8Rng,
    iterations: usize,
    reseeds: usize,
    inertia: Vec<f64>,
}

impl<'a, S: ClusterSpace> KMeans<'a, S> {
    /// Seed `num_clusters` centroids from `samples`.
    ///
    /// `num_clusters` may exceed the number of samples; the surplus clusters
    /// simply stay empty and keep getting reseeded.
    pub fn new(
        samples: &'a [ColorSample<S>],
        num_clusters: usize,
        seed: u64,
    ) -> Result<Self, PosterizeError> {
        if samples.is_empty() {
            return Err(PosterizeError::InvalidParameters(
                "no samples to cluster".to_string(),
            ));
        }
        if num_clusters == 0 {
            return Err(PosterizeError::InvalidParameters(
                "num_colors must be at least 1".to_string(),
            ));
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let clusters = (0..num_clusters)
            .map(|_| Cluster {
                centroid: samples[draw_index(&mut rng, samples.len())],
                members: 0,
            })
            .collect();

        Ok(Self {
            samples,
            clusters,
            assignments: vec![UNASSIGNED; samples.len()],
            rng,
            iterations: 0,
            reseeds: 0,
            inertia: Vec::new(),
        })
    }

    #[inline]
    pub fn clusters(&self) -> &[Cluster<S>] {
        &self.clusters
    }

    /// Current cluster index per sample. Only meaningful after one step.
    #[inline]
    pub fn assignments(&self) -> &[usize] {
        &self.assignments
    }

    #[inline]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// One assignment step, followed by an update step if anything moved.
    pub fn step(&mut self) -> Iteration {
        let (changed, inertia) = self.assign();
        let reseeded = if changed { self.update() } else { 0 };

        self.iterations += 1;
        self.inertia.push(inertia);
        tracing::debug!(
            iteration = self.iterations,
            changed,
            inertia,
            reseeded,
            "k-means iteration"
        );

        Iteration {
            changed,
            inertia,
            reseeded,
        }
    }

    /// Iterate until convergence or `max_iterations`, whichever comes first.
    ///
    /// At the cap the state is returned as is: the last step's update has
    /// already moved the centroids, and the assignments are not refreshed
    /// against them (see [`KMeansReport::converged`]).
    ///
    /// `cancel` is checked before every iteration; a cancelled run returns
    /// [`PosterizeError::Cancelled`] and no clustering.
    pub fn run(
        mut self,
        max_iterations: usize,
        cancel: Option<&CancelToken>,
    ) -> Result<Clustering<S>, PosterizeError> {
        if max_iterations == 0 {
            return Err(PosterizeError::InvalidParameters(
                "max_iterations must be at least 1".to_string(),
            ));
        }

        let mut converged = false;
        while self.iterations < max_iterations {
            if cancel.is_some_and(CancelToken::is_cancelled) {
                return Err(PosterizeError::Cancelled {
                    iterations: self.iterations,
                });
            }
            if !self.step().changed {
                converged = true;
                break;
            }
        }

        if !converged {
            tracing::debug!(max_iterations, "k-means stopped at iteration cap");
        }

        Ok(Clustering {
            centroids: self.clusters.iter().map(|c| c.centroid).collect(),
            assignments: self.assignments,
            report: KMeansReport {
                iterations: self.iterations,
                converged,
                reseeds: self.reseeds,
                inertia: self.inertia,
            },
        })
    }

    /// Assign every sample to its nearest centroid.
    ///
    /// Returns whether any assignment changed and the resulting inertia.
    fn assign(&mut self) -> (bool, f64) {
        let centroids: Vec<ColorSample<S>> = self.clusters.iter().map(|c| c.centroid).collect();
        let nearest = nearest_all(self.samples, &centroids);

        for cluster in &mut self.clusters {
            cluster.members = 0;
        }

        let mut changed = false;
        let mut inertia = 0.0f64;
        for (slot, (k, distance)) in self.assignments.iter_mut().zip(nearest) {
            if *slot != k {
                *slot = k;
                changed = true;
            }
            self.clusters[k].members += 1;
            inertia += distance as f64;
        }

        (changed, inertia)
    }

    /// Move centroids to the mean of their members; reseed empty clusters.
    ///
    /// Returns the number of clusters reseeded.
    fn update(&mut self) -> usize {
        let mut sums = vec![[0.0f64; 3]; self.clusters.len()];
        for (sample, &k) in self.samples.iter().zip(&self.assignments) {
            let channels = sample.channels();
            for (acc, value) in sums[k].iter_mut().zip(channels) {
                *acc += value as f64;
            }
        }

        let mut reseeded = 0;
        for (k, (cluster, sum)) in self.clusters.iter_mut().zip(sums).enumerate() {
            if cluster.members > 0 {
                cluster.centroid = S::mean(sum, cluster.members);
            } else {
                let index = draw_index(&mut self.rng, self.samples.len());
                cluster.centroid = self.samples[index];
                reseeded += 1;
                tracing::debug!(cluster = k, sample = index, "reseeded empty cluster");
            }
        }

        self.reseeds += reseeded;
        reseeded
    }
}

/// Uniform index in `0..len`, independent of pointer width.
#[inline]
fn draw_index(rng: &mut ChaCha8Rng, len: usize) -> usize {
    rng.gen_range(0..len as u64) as usize
}

/// Index and squared distance of the nearest centroid. Ties keep the lower index.
#[inline]
fn nearest<S: ClusterSpace>(sample: &ColorSample<S>, centroids: &[ColorSample<S>]) -> (usize, f32) {
    let mut best = 0;
    let mut best_distance = f32::INFINITY;
    for (k, centroid) in centroids.iter().enumerate() {
        let distance = S::distance(sample, centroid);
        if distance < best_distance {
            best = k;
            best_distance = distance;
        }
    }
    (best, best_distance)
}

#[cfg(feature = "parallel")]
fn nearest_all<S: ClusterSpace>(
    samples: &[ColorSample<S>],
    centroids: &[ColorSample<S>],
) -> Vec<(usize, f32)> {
    use rayon::prelude::*;

    samples
        .par_iter()
        .map(|sample| nearest(sample, centroids))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn nearest_all<S: ClusterSpace>(
    samples: &[ColorSample<S>],
    centroids: &[ColorSample<S>],
) -> Vec<(usize, f32)> {
    samples
        .iter()
        .map(|sample| nearest(sample, centroids))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples(colors: &[[u8; 3]]) -> Vec<ColorSample<RgbSpace>> {
        colors.iter().copied().map(ColorSample::from_rgb).collect()
    }

    #[test]
    fn test_rejects_empty_input_and_zero_clusters() {
        let empty: Vec<ColorSample<RgbSpace>> = Vec::new();
        assert!(matches!(
            KMeans::new(&empty, 3, 1),
            Err(PosterizeError::InvalidParameters(_))
        ));

        let data = samples(&[[1, 2, 3]]);
        assert!(matches!(
            KMeans::new(&data, 0, 1),
            Err(PosterizeError::InvalidParameters(_))
        ));
        assert!(matches!(
            KMeans::new(&data, 1, 1).unwrap().run(0, None),
            Err(PosterizeError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_initial_centroids_are_samples() {
        let data = samples(&[[10, 0, 0], [0, 20, 0], [0, 0, 30], [40, 40, 40]]);
        let kmeans = KMeans::new(&data, 6, 99).unwrap();
        assert_eq!(kmeans.clusters().len(), 6);
        for cluster in kmeans.clusters() {
            assert!(data.contains(&cluster.centroid));
        }
    }

    #[test]
    fn test_first_step_always_reports_change() {
        let data = samples(&[[5, 5, 5]]);
        let mut kmeans = KMeans::new(&data, 1, 0).unwrap();
        let first = kmeans.step();
        assert!(first.changed);
        assert_eq!(first.inertia, 0.0);
        let second = kmeans.step();
        assert!(!second.changed);
    }

    #[test]
    fn test_ties_go_to_lowest_index() {
        let centroids = samples(&[[10, 10, 10], [30, 30, 30], [10, 10, 10]]);
        let probe = ColorSample::<RgbSpace>::from_rgb([20, 20, 20]);
        assert_eq!(nearest(&probe, &centroids).0, 0);
        let probe = ColorSample::<RgbSpace>::from_rgb([10, 10, 10]);
        assert_eq!(nearest(&probe, &centroids), (0, 0.0));
    }

    #[test]
    fn test_more_clusters_than_samples() {
        let data = samples(&[[0, 0, 0], [255, 255, 255]]);
        let result = KMeans::new(&data, 5, 3).unwrap().run(20, None).unwrap();
        assert_eq!(result.centroids.len(), 5);
        assert!(result.assignments.iter().all(|&k| k < 5));
        assert_ne!(result.assignments[0], result.assignments[1]);
        assert!(result.report.reseeds > 0);
        for centroid in &result.centroids {
            assert!(centroid.channels().iter().all(|v| v.is_finite()));
        }
    }

    #[test]
    fn test_cancelled_before_first_iteration() {
        let data = samples(&[[0, 0, 0], [9, 9, 9]]);
        let token = CancelToken::new();
        token.cancel();
        let err = KMeans::new(&data, 2, 1)
            .unwrap()
            .run(20, Some(&token))
            .unwrap_err();
        assert_eq!(err, PosterizeError::Cancelled { iterations: 0 });
    }

    #[test]
    fn test_iteration_cap_is_respected() {
        let data: Vec<_> = (0..=255u8)
            .map(|v| ColorSample::<RgbSpace>::from_rgb([v, v.wrapping_mul(7), v.wrapping_mul(13)]))
            .collect();
        let result = KMeans::new(&data, 12, 5).unwrap().run(2, None).unwrap();
        assert!(result.report.iterations <= 2);
        assert_eq!(result.report.inertia.len(), result.report.iterations);
    }

    #[test]
    fn test_capped_run_keeps_last_assignment() {
        let data: Vec<_> = (0..=255u8)
            .map(|v| ColorSample::<RgbSpace>::from_rgb([v, v.wrapping_mul(7), v.wrapping_mul(13)]))
            .collect();
        let kmeans = KMeans::new(&data, 12, 5).unwrap();
        let initial: Vec<_> = kmeans.clusters().iter().map(|c| c.centroid).collect();
        let result = kmeans.run(1, None).unwrap();

        assert!(!result.report.converged);
        assert_eq!(result.report.iterations, 1);
        for (sample, &k) in data.iter().zip(&result.assignments) {
            assert_eq!(nearest(sample, &initial).0, k);
        }
        // Centroids moved after that assignment, so some labels are stale.
        let stale = data
            .iter()
            .zip(&result.assignments)
            .filter(|&(sample, &k)| nearest(sample, &result.centroids).0 != k)
            .count();
        assert!(stale > 0);
    }

    #[test]
    fn test_initial_draws_are_pinned() {
        // Index i is encoded in the first two channels.
        let data: Vec<_> = (0..1000u32)
            .map(|i| ColorSample::<RgbSpace>::from_rgb([(i % 256) as u8, (i / 256) as u8, 0]))
            .collect();
        let kmeans = KMeans::new(&data, 8, DEFAULT_SEED).unwrap();
        let picked: Vec<usize> = kmeans
            .clusters()
            .iter()
            .map(|c| {
                let [lo, hi, _] = c.centroid.channels();
                lo as usize + 256 * hi as usize
            })
            .collect();
        assert_eq!(picked, [535, 983, 553, 634, 796, 474, 785, 769]);

        let mut rng = ChaCha8Rng::seed_from_u64(DEFAULT_SEED);
        let expected: Vec<usize> = (0..8)
            .map(|_| rng.gen_range(0..1000u64) as usize)
            .collect();
        assert_eq!(picked, expected);
    }

    #[test]
    fn test_same_seed_same_result() {
        let data: Vec<_> = (0..200u32)
            .map(|i| {
                ColorSample::<LabSpace>::from_rgb([
                    (i * 37 % 256) as u8,
                    (i * 91 % 256) as u8,
                    (i * 17 % 256) as u8,
                ])
            })
            .collect();
        let a = KMeans::new(&data, 7, 42).unwrap().run(20, None).unwrap();
        let b = KMeans::new(&data, 7, 42).unwrap().run(20, None).unwrap();
        assert_eq!(a.assignments, b.assignments);
        assert_eq!(a.centroids, b.centroids);
        assert_eq!(a.report, b.report);
    }
}
