use crate::Primitive;

/// Euclidean distance between two equally sized coordinate slices.
#[inline(always)]
pub fn euclidean_distance<T: Primitive>(a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len());
    a.iter().cloned()
        .zip(b.iter().cloned())
        .map(|(av, bv)| av - bv)        // <a> - <b>
        .map(|v| v * v)                 // <vec_components> ^2
        .sum::<T>()                     // sum(<vec_components>^2)
        .sqrt()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        assert_approx_eq!(euclidean_distance(&[0.0f64, 0.0], &[3.0, 4.0]), 5.0);
        assert_approx_eq!(euclidean_distance(&[1.0f32], &[1.0]), 0.0, 1e-7);
        assert_approx_eq!(euclidean_distance(&[10.0f64], &[0.5]), 9.5);
        assert_approx_eq!(euclidean_distance::<f64>(&[], &[]), 0.0);
    }
}
