use crate::{distances::euclidean_distance, memory::*, Cluster, KMeansError, Point};
use std::cell::RefCell;
use std::time::Duration;
use rand::prelude::*;

pub type InitDoneCallbackFn<'a, T> = &'a dyn Fn(&KMeansState<T>);
pub type IterationDoneCallbackFn<'a, T> = &'a dyn Fn(&KMeansState<T>, usize, bool);

/// This is a structure holding various configuration options for a k-means calculation, such as
/// the random number generator to use, or a couple of callbacks, that can be set to get status information from
/// a running k-means calculation.
///
/// For a more detailed information about all possible options, have a look at [`KMeansConfigBuilder`].
pub struct KMeansConfig<'a, T: Primitive> {
    /// Callback that is called, when the seeding phase finished
    /// ## Arguments
    /// - **state**: Current [`KMeansState`] after the seeding
    pub(crate) init_done: InitDoneCallbackFn<'a, T>,
    /// Callback that is called after each assign/update cycle
    /// ## Arguments
    /// - **state**: Current [`KMeansState`] after the iteration
    /// - **iteration_id**: Number of the current iteration (1-based)
    /// - **changed**: Whether any point joined or switched a cluster in this iteration
    pub(crate) iteration_done: IterationDoneCallbackFn<'a, T>,
    /// Random number generator to use
    pub(crate) rnd: Box<RefCell<dyn RngCore>>,
}
impl<'a, T: Primitive> Default for KMeansConfig<'a, T> {
    fn default() -> Self {
        Self {
            init_done: &|_| {},
            iteration_done: &|_,_,_| {},
            rnd: Box::new(RefCell::new(rand::thread_rng())),
        }
    }
}
impl<'a, T: Primitive> KMeansConfig<'a, T> {
    /// Use the [`KMeansConfigBuilder`] to build a [`KMeansConfig`] instance.
    pub fn build() -> KMeansConfigBuilder<'a, T> {
        KMeansConfigBuilder { config: KMeansConfig::default() }
    }
}
impl<'a, T: Primitive> std::fmt::Debug for KMeansConfig<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KMeansConfig").finish_non_exhaustive()
    }
}

pub struct KMeansConfigBuilder<'a, T: Primitive> {
    config: KMeansConfig<'a, T>
}
impl<'a, T: Primitive> KMeansConfigBuilder<'a, T> {
    /// Set the callback that should be called after the seeding, before the iteration starts.
    pub fn init_done(mut self, init_done: InitDoneCallbackFn<'a, T>) -> Self {
        self.config.init_done = init_done; self
    }
    /// Set the callback that should be called after each iteration during a running k-means calculation.
    pub fn iteration_done(mut self, iteration_done: IterationDoneCallbackFn<'a, T>) -> Self {
        self.config.iteration_done = iteration_done; self
    }
    /// Set the random number generator that should be used in the k-means calculation.
    /// Use a seeded generator for deterministically repeatable results.
    /// ## Default
    /// [`rand::thread_rng`]
    pub fn random_generator<R: RngCore + 'static>(mut self, rnd: R) -> Self {
        self.config.rnd = Box::new(RefCell::new(rnd)); self
    }
    /// Return the internally built configuration structure.
    pub fn build(self) -> KMeansConfig<'a, T> { self.config }
}


/// Wall-clock durations measured during a run. Reporting only.
///
/// ## Fields
/// - **total**: Seeding plus clustering
/// - **seeding**: Phase 1, choosing the K seed points
/// - **clustering**: Phase 2, the assign/update loop
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunTimings {
    pub total: Duration,
    pub seeding: Duration,
    pub clustering: Duration,
}
impl RunTimings {
    /// Average time spent per iteration, for a run that stopped in iteration `iterations`.
    pub fn per_iteration(&self, iterations: usize) -> Duration {
        match u32::try_from(iterations) {
            Ok(0) => Duration::ZERO,
            Ok(n) => self.total / n,
            Err(_) => self.total / u32::MAX,
        }
    }
}


/// This is the data-structure storing the current state during calculation, as
/// well as the final result, as returned by the API.
/// All mutations are done in this structure, making [`KMeans`] immutable, and therefore allowing
/// multiple runs over the same input, without having to reload the points.
///
/// ## Generics
/// - **T**: Underlying primitive type that was used for the calculation
///
/// ## Fields
/// - **k**: The amount of clusters that were requested
/// - **iteration**: Iteration in which the assign/update loop stopped (1-based)
/// - **converged**: Whether the last iteration left every assignment unchanged (`false` if `max_iter` cut the run)
/// - **distsum**: The total sum of (non-squared) distances from all points to their cluster's centroid
/// - **points**: This run's copy of the point registry, carrying the cluster assignment of each point
/// - **clusters**: The clusters, indexed by cluster id
/// - **timings**: Durations of the seeding and clustering phases
#[derive(Clone, Debug)]
pub struct KMeansState<T: Primitive> {
    pub k: usize,
    pub iteration: usize,
    pub converged: bool,
    pub distsum: T,
    pub points: Vec<Point<T>>,
    pub clusters: Vec<Cluster<T>>,
    pub timings: RunTimings,

    pub(crate) sample_dims: usize
}
impl<T: Primitive> KMeansState<T> {
    pub(crate) fn new(points: &[Point<T>], sample_dims: usize, k: usize) -> Self {
        let mut points = points.to_vec();
        points.iter_mut().for_each(|p| p.set_cluster(None));
        Self {
            k,
            iteration: 0,
            converged: false,
            distsum: T::zero(),
            points,
            clusters: Vec::with_capacity(k),
            timings: RunTimings::default(),
            sample_dims
        }
    }

    pub fn sample_dims(&self) -> usize { self.sample_dims }

    /// Create the next cluster (`cluster_idx` has to equal the amount of clusters seeded so far),
    /// using the point at `point_idx` as its seed.
    ///
    /// Panics if the point already seeded another cluster, or if clusters are seeded out of order.
    pub fn seed_cluster(&mut self, cluster_idx: usize, point_idx: usize) {
        assert_eq!(cluster_idx, self.clusters.len(), "Clusters have to be seeded in order");
        assert!(cluster_idx < self.k, "Seeded more clusters than k");
        let point = &mut self.points[point_idx];
        assert!(point.cluster().is_none(), "Point {} was chosen as seed twice", point_idx);
        point.set_cluster(Some(cluster_idx));
        self.clusters.push(Cluster::new(cluster_idx, point_idx, point));
    }

    /// Cluster index of every point, in registry order.
    pub fn assignments(&self) -> Vec<Option<usize>> {
        self.points.iter().map(|p| p.cluster()).collect()
    }

    /// Calculated cluster centers [row-major] = [<centroid0>,<centroid1>,<centroid2>,...]
    pub fn centroids(&self) -> Vec<T> {
        self.clusters.iter().flat_map(|c| c.centroid().iter().cloned()).collect()
    }

    /// Sum of every cluster's total distance, using the current centroids.
    pub fn total_distance(&self) -> T {
        self.clusters.iter().map(|c| c.total_distance(&self.points)).sum()
    }
}


/// Entrypoint of this crate's API-Surface.
///
/// Create an instance of this struct, giving the points you want to operate on. The primitive type
/// of the passed points will be the type used internaly for all calculations, as well as the result
/// as stored in the returned [`KMeansState`] structure.
///
/// ## Supported variants
/// - k-Means clustering (Lloyd) [`KMeans::kmeans_lloyd`]
///
/// ## Supported initialization methods
/// - Random-Sample [`KMeans::init_random_sample`]
/// - Precomputed seed points [`KMeans::init_precomputed`]
pub struct KMeans<T: Primitive> {
    pub(crate) sample_cnt: usize,
    pub(crate) sample_dims: usize,
    pub(crate) points: Vec<Point<T>>
}
impl<T: Primitive> KMeans<T> {
    /// Create a new instance of the [`KMeans`] structure.
    ///
    /// ## Arguments
    /// - **points**: The point registry. Positions in this vector are what clusters refer to.
    /// - **sample_dims**: Amount of dimensions each point has
    ///
    /// Panics if a point does not have exactly **sample_dims** coordinates.
    pub fn new(points: Vec<Point<T>>, sample_dims: usize) -> Self {
        if let Some(p) = points.iter().find(|p| p.total_values() != sample_dims) {
            panic!("Point {} has {} values, expected {}", p.id(), p.total_values(), sample_dims);
        }
        Self {
            sample_cnt: points.len(),
            sample_dims,
            points
        }
    }

    pub fn sample_cnt(&self) -> usize { self.sample_cnt }
    pub fn sample_dims(&self) -> usize { self.sample_dims }
    pub fn points(&self) -> &[Point<T>] { &self.points }

    /// Index of the cluster whose centroid is nearest to **values**.
    /// Ties go to the lowest cluster index.
    pub(crate) fn nearest_cluster(clusters: &[Cluster<T>], values: &[T]) -> usize {
        let mut best_idx = 0;
        let mut best_dist = euclidean_distance(clusters[0].centroid(), values);
        for (idx, c) in clusters.iter().enumerate().skip(1) {
            let dist = euclidean_distance(c.centroid(), values);
            if dist < best_dist {
                best_idx = idx;
                best_dist = dist;
            }
        }
        best_idx
    }

    /// One full assignment pass. Returns whether any point joined or switched a cluster.
    pub(crate) fn update_cluster_assignments(&self, state: &mut KMeansState<T>) -> bool {
        let mut changed = false;
        for idx in 0..state.points.len() {
            let nearest = Self::nearest_cluster(&state.clusters, state.points[idx].values());
            let old = state.points[idx].cluster();
            if old != Some(nearest) {
                if let Some(old) = old {
                    state.clusters[old].remove_point(idx);
                }
                state.points[idx].set_cluster(Some(nearest));
                state.clusters[nearest].add_point(idx);
                changed = true;
            }
        }
        changed
    }


    /// Normal K-Means algorithm implementation (Lloyd): alternately assign every point to its nearest
    /// centroid, and move every centroid to the mean of its members, until no point changes its cluster
    /// or **max_iter** iterations ran.
    ///
    /// ## Arguments
    /// - **k**: Amount of clusters to search for
    /// - **max_iter**: Limit the maximum amount of iterations (values below 1 are treated as 1)
    /// - **init**: Initialization-Method to use for seeding the **k** clusters
    /// - **config**: [`KMeansConfig`] instance, containing several configuration options for the calculation.
    ///
    /// ## Returns
    /// Instance of [`KMeansState`], containing the final state (result), or
    /// [`KMeansError::TooManyClusters`] if **k** exceeds the amount of points.
    ///
    /// ## Example
    /// ```rust
    /// use lloyd::*;
    /// fn main() {
    ///     let points = (0..200).map(|i| Point::new(i, vec![rand::random::<f64>(), rand::random()])).collect();
    ///
    ///     let kmean = KMeans::new(points, 2);
    ///     let result = kmean.kmeans_lloyd(4, 100, KMeans::init_random_sample, &KMeansConfig::default()).unwrap();
    ///
    ///     println!("Centroids: {:?}", result.centroids());
    ///     println!("Cluster-Assignments: {:?}", result.assignments());
    ///     println!("Error: {}", result.distsum);
    /// }
    /// ```
    pub fn kmeans_lloyd<'a, F>(&self, k: usize, max_iter: usize, init: F, config: &KMeansConfig<'a, T>) -> Result<KMeansState<T>, KMeansError>
                where for<'c> F: FnOnce(&KMeans<T>, &mut KMeansState<T>, &KMeansConfig<'c, T>) {
        crate::variants::Lloyd::calculate(self, k, max_iter, init, config)
    }

    /// Random sample initialization method (a.k.a. Forgy)
    ///
    /// ## Description
    /// This initialization method draws uniformly random point indices from the configured random
    /// generator, discarding indices that were already drawn, until **k** distinct seed points are found.
    ///
    /// ## Note
    /// This method is not meant for direct invocation. Pass a reference to it, to an instance-method of [`KMeans`].
    pub fn init_random_sample<'a>(kmean: &KMeans<T>, state: &mut KMeansState<T>, config: &KMeansConfig<'a, T>) {
        crate::inits::randomsample::calculate(kmean, state, config);
    }

    /// Precomputed seed initialization method
    ///
    /// ## Description
    /// Uses the points at the given registry indices as seeds, the first index seeding cluster 0.
    /// Panics during seeding if the amount of indices differs from **k**, or an index repeats or is out of range.
    pub fn init_precomputed(seeds: Vec<usize>) -> impl for<'c> FnOnce(&KMeans<T>, &mut KMeansState<T>, &KMeansConfig<'c, T>) {
        move |kmean, state, config| {
            crate::inits::precomputed::calculate(kmean, state, config, seeds);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn line(values: &[f64]) -> KMeans<f64> {
        KMeans::new(values.iter().enumerate().map(|(i, &v)| Point::new(i, vec![v])).collect(), 1)
    }

    #[test]
    #[should_panic]
    fn inconsistent_dimensions() {
        KMeans::new(vec![Point::new(0, vec![1.0f64, 2.0]), Point::new(1, vec![1.0])], 2);
    }

    #[test]
    fn nearest_cluster_ties_go_to_lowest_index() {
        let kmean = line(&[0.0, 2.0, 1.0]);
        let mut state = KMeansState::new(kmean.points(), 1, 2);
        state.seed_cluster(0, 0);
        state.seed_cluster(1, 1);
        assert_eq!(KMeans::nearest_cluster(&state.clusters, &[1.0]), 0);
        assert_eq!(KMeans::nearest_cluster(&state.clusters, &[1.0000001]), 1);

        // identical centroids
        let kmean = line(&[5.0, 5.0, 7.0]);
        let mut state = KMeansState::new(kmean.points(), 1, 2);
        state.seed_cluster(0, 1);
        state.seed_cluster(1, 0);
        assert_eq!(KMeans::nearest_cluster(&state.clusters, &[7.0]), 0);
    }

    #[test]
    fn assignment_pass_keeps_partition() {
        let kmean = line(&[0.0, 1.0, 10.0, 11.0, 4.0]);
        let mut state = KMeansState::new(kmean.points(), 1, 2);
        state.seed_cluster(0, 0);
        state.seed_cluster(1, 2);

        assert!(kmean.update_cluster_assignments(&mut state));
        assert_eq!(state.assignments(), vec![Some(0), Some(0), Some(1), Some(1), Some(0)]);
        assert_eq!(state.clusters[0].members(), &[0, 1, 4]);
        assert_eq!(state.clusters[1].members(), &[2, 3]);

        // Unchanged centroids -> second pass is a no-op
        assert!(!kmean.update_cluster_assignments(&mut state));

        // Moving a centroid moves the point at 4.0 over, and only that point
        state.clusters[1].set_central_value(0, 5.0).unwrap();
        assert!(kmean.update_cluster_assignments(&mut state));
        assert_eq!(state.clusters[0].members(), &[0, 1]);
        assert_eq!(state.clusters[1].members(), &[2, 3, 4]);
    }

    #[test]
    fn duplicate_seed_coordinates_move_to_lower_cluster() {
        let kmean = line(&[3.0, 3.0, 8.0]);
        let mut state = KMeansState::new(kmean.points(), 1, 2);
        state.seed_cluster(0, 0);
        state.seed_cluster(1, 1);
        assert!(kmean.update_cluster_assignments(&mut state));
        assert_eq!(state.clusters[0].members(), &[0, 1, 2]);
        assert_eq!(state.clusters[1].total_points(), 0);
    }

    #[test]
    #[should_panic]
    fn seeding_same_point_twice() {
        let kmean = line(&[0.0, 1.0]);
        let mut state = KMeansState::new(kmean.points(), 1, 2);
        state.seed_cluster(0, 1);
        state.seed_cluster(1, 1);
    }

    #[test]
    fn state_starts_unassigned() {
        let mut p = Point::new(0, vec![1.0f32]);
        p.set_cluster(Some(3));
        let kmean = KMeans::new(vec![p], 1);
        let state = KMeansState::new(kmean.points(), 1, 1);
        assert_eq!(state.assignments(), vec![None]);
        assert_eq!(kmean.points()[0].cluster(), Some(3));
    }

    #[test]
    fn timings_per_iteration() {
        let t = RunTimings { total: Duration::from_millis(300), ..Default::default() };
        assert_eq!(t.per_iteration(3), Duration::from_millis(100));
        assert_eq!(t.per_iteration(0), Duration::ZERO);
    }
}
