use crate::{KMeans, KMeansState, KMeansConfig, KMeansError, memory::*};
use log::{debug, info};
use std::time::Instant;

pub(crate) struct Lloyd<T: Primitive> {
	_p: std::marker::PhantomData<T>
}
impl<T: Primitive> Lloyd<T> {
    /// Move every non-empty cluster's centroid to the mean of its members.
    /// Empty clusters keep their previous centroid.
    pub(crate) fn update_centroids(state: &mut KMeansState<T>) {
        let (clusters, points, sample_dims) = (&mut state.clusters, &state.points, state.sample_dims);
        clusters.iter_mut()
            .filter(|c| c.total_points() > 0)
            .for_each(|c| {
                let mut new_centroid = vec![T::zero(); sample_dims];
                c.members().iter().for_each(|&m| {
                    new_centroid.iter_mut()
                        .zip(points[m].values())
                        .for_each(|(nc, v)| *nc += v);
                });
                let cfreq = T::from_count(c.total_points());
                new_centroid.iter_mut().for_each(|v| *v = *v / cfreq);
                c.set_centroid(new_centroid);
            });
    }

    pub fn calculate<'a, F>(data: &KMeans<T>, k: usize, max_iter: usize, init: F, config: &KMeansConfig<'a, T>) -> Result<KMeansState<T>, KMeansError>
                where for<'c> F: FnOnce(&KMeans<T>, &mut KMeansState<T>, &KMeansConfig<'c, T>) {
        let begin = Instant::now();
        if k > data.sample_cnt {
            return Err(KMeansError::TooManyClusters { k, sample_cnt: data.sample_cnt });
        }
        assert!(k > 0, "k has to be at least 1");
        let max_iter = max_iter.max(1);

        let mut state = KMeansState::new(&data.points, data.sample_dims, k);

        // Seed clusters and notify subscriber
        init(data, &mut state, config);
        assert_eq!(state.clusters.len(), k, "Initialization seeded {} clusters, expected {}", state.clusters.len(), k);
        let end_seeding = Instant::now();
        (config.init_done)(&state);
        debug!("seeded {} clusters over {} points", k, data.sample_cnt);

        let mut iteration = 1;
        loop {
            let changed = data.update_cluster_assignments(&mut state);
            Self::update_centroids(&mut state);
            state.iteration = iteration;

            // Notify subscriber about finished iteration
            (config.iteration_done)(&state, iteration, changed);
            debug!("iteration {}: {}", iteration, if changed { "assignments changed" } else { "no change" });

            if !changed || iteration >= max_iter {
                state.converged = !changed;
                break;
            }
            iteration += 1;
        }
        let end = Instant::now();

        state.distsum = state.total_distance();
        state.timings.seeding = end_seeding - begin;
        state.timings.clustering = end - end_seeding;
        state.timings.total = end - begin;
        info!("break in iteration {} (converged: {}), total distance {}", state.iteration, state.converged, state.distsum);
        Ok(state)
    }
}
