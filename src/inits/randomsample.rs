use crate::{KMeans, KMeansState, KMeansConfig, memory::*};
use rand::prelude::*;
use std::ops::DerefMut;

/// Rejection sampling: draw uniform indices in `[0, sample_cnt)` and discard repeats, until `k` distinct
/// seed points are chosen. The i-th accepted point seeds cluster i.
#[inline(always)] pub fn calculate<'a, T: Primitive>(kmean: &KMeans<T>, state: &mut KMeansState<T>, config: &KMeansConfig<'a, T>) {
    assert!(state.k <= kmean.sample_cnt);
    let mut rnd = config.rnd.borrow_mut();
    let mut chosen: Vec<usize> = Vec::with_capacity(state.k);
    for ci in 0..state.k {
        loop {
            let idx = rnd.deref_mut().gen_range(0, kmean.sample_cnt);
            if !chosen.contains(&idx) {
                chosen.push(idx);
                state.seed_cluster(ci, idx);
                break;
            }
        }
    }
}
