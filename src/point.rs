use crate::{memory::*, KMeansError};

/// A single sample: immutable coordinates and label, plus its current cluster assignment.
///
/// The assignment is `None` until the engine places the point (the "unassigned" state).
#[derive(Clone, Debug, PartialEq)]
pub struct Point<T: Primitive> {
    id: usize,
    values: Vec<T>,
    name: Option<String>,
    cluster: Option<usize>,
}
impl<T: Primitive> Point<T> {
    pub fn new(id: usize, values: Vec<T>) -> Self {
        Self { id, values, name: None, cluster: None }
    }

    pub fn with_name(id: usize, values: Vec<T>, name: impl Into<String>) -> Self {
        Self { id, values, name: Some(name.into()), cluster: None }
    }

    pub fn id(&self) -> usize { self.id }
    pub fn name(&self) -> Option<&str> { self.name.as_deref() }
    pub fn values(&self) -> &[T] { &self.values }
    pub fn total_values(&self) -> usize { self.values.len() }

    /// Read coordinate `dim`.
    pub fn value(&self, dim: usize) -> Result<T, KMeansError> {
        self.values.get(dim).cloned().ok_or(KMeansError::IndexOutOfRange {
            what: "coordinate", index: dim, len: self.values.len()
        })
    }

    pub fn cluster(&self) -> Option<usize> { self.cluster }
    pub(crate) fn set_cluster(&mut self, cluster: Option<usize>) { self.cluster = cluster; }
}
