use crate::{distances::euclidean_distance, memory::*, KMeansError, Point};

/// One of the K clusters of a run.
///
/// Members are stored as indices into the run's point registry, in insertion order,
/// so that centroid recomputation always visits them in the same order.
#[derive(Clone, Debug, PartialEq)]
pub struct Cluster<T: Primitive> {
    id: usize,
    centroid: Vec<T>,
    members: Vec<usize>,
}
impl<T: Primitive> Cluster<T> {
    /// Create cluster `id` with its centroid set to the coordinates of `seed`, found at
    /// `seed_idx` in the point registry. The seed point becomes the cluster's first member.
    pub fn new(id: usize, seed_idx: usize, seed: &Point<T>) -> Self {
        Self { id, centroid: seed.values().to_vec(), members: vec![seed_idx] }
    }

    pub fn id(&self) -> usize { self.id }
    pub fn centroid(&self) -> &[T] { &self.centroid }
    pub fn members(&self) -> &[usize] { &self.members }

    pub fn add_point(&mut self, point_idx: usize) {
        self.members.push(point_idx);
    }

    /// Remove `point_idx` from the member set.
    /// Removing a point that is not a member is a no-op.
    pub fn remove_point(&mut self, point_idx: usize) {
        if let Some(pos) = self.members.iter().position(|&m| m == point_idx) {
            self.members.remove(pos);
        }
    }

    pub fn central_value(&self, dim: usize) -> Result<T, KMeansError> {
        self.centroid.get(dim).cloned().ok_or(KMeansError::IndexOutOfRange {
            what: "centroid dimension", index: dim, len: self.centroid.len()
        })
    }

    pub fn set_central_value(&mut self, dim: usize, value: T) -> Result<(), KMeansError> {
        let len = self.centroid.len();
        let c = self.centroid.get_mut(dim)
            .ok_or(KMeansError::IndexOutOfRange { what: "centroid dimension", index: dim, len })?;
        *c = value;
        Ok(())
    }

    pub(crate) fn set_centroid(&mut self, centroid: Vec<T>) {
        debug_assert_eq!(centroid.len(), self.centroid.len());
        self.centroid = centroid;
    }

    pub fn total_points(&self) -> usize { self.members.len() }

    /// Registry index of the `index`-th member (in insertion order).
    pub fn point(&self, index: usize) -> Result<usize, KMeansError> {
        self.members.get(index).cloned().ok_or(KMeansError::IndexOutOfRange {
            what: "cluster member", index, len: self.members.len()
        })
    }

    /// Sum of the euclidean distances from every member to the centroid.
    /// `points` is the registry the member indices point into.
    pub fn total_distance(&self, points: &[Point<T>]) -> T {
        self.members.iter()
            .map(|&m| euclidean_distance(points[m].values(), &self.centroid))
            .sum()
    }
}
