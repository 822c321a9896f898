use crate::{KMeans, KMeansConfig, KMeansState, memory::*};

#[inline(always)]
pub fn calculate<T: Primitive>(kmean: &KMeans<T>, state: &mut KMeansState<T>, _config: &KMeansConfig<'_, T>, seeds: Vec<usize>) {
    if seeds.len() != state.k {
        panic!("Initialized with {} seed points, but k is {}", seeds.len(), state.k);
    }
    seeds.into_iter().enumerate().for_each(|(ci, idx)| {
        assert!(idx < kmean.sample_cnt, "Seed index {} out of range ({} points)", idx, kmean.sample_cnt);
        state.seed_cluster(ci, idx);
    });
}
