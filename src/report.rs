use crate::{memory::*, KMeansState};
use std::fmt;

/// Console report of a finished run.
///
/// Prints the iteration the run stopped in, the total distance of all clusters and the phase timings.
/// With [`Report::with_clusters`] enabled, every cluster's members and centroid are listed first.
pub struct Report<'s, T: Primitive> {
    state: &'s KMeansState<T>,
    clusters: bool,
}
impl<'s, T: Primitive> Report<'s, T> {
    pub fn new(state: &'s KMeansState<T>) -> Self {
        Self { state, clusters: false }
    }

    pub fn with_clusters(mut self, clusters: bool) -> Self {
        self.clusters = clusters; self
    }

    fn write_clusters(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state;
        for c in &state.clusters {
            writeln!(f, "Cluster {}", c.id() + 1)?;
            writeln!(f, "TOTAL DISTANCE = {}", c.total_distance(&state.points))?;
            writeln!(f)?;
            for &m in c.members() {
                let point = &state.points[m];
                write!(f, "Point {}: ", point.id() + 1)?;
                for (d, v) in point.values().iter().enumerate() {
                    write!(f, "({}){}, ", d, v)?;
                }
                if let Some(name) = point.name() {
                    write!(f, "- {}", name)?;
                }
                writeln!(f)?;
            }
            write!(f, "Cluster values: ")?;
            for v in c.centroid() {
                write!(f, "{}, ", v)?;
            }
            writeln!(f)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<'s, T: Primitive> fmt::Display for Report<'s, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (state, timings) = (self.state, &self.state.timings);
        writeln!(f, "Break in iteration {}", state.iteration)?;
        writeln!(f)?;
        if self.clusters {
            self.write_clusters(f)?;
        }
        writeln!(f, "TOTAL DISTANCE OF ALL CLUSTERS = {}", state.distsum)?;
        writeln!(f, "EXECUTION TIME PER ITERATION = {:.6} (s)", timings.per_iteration(state.iteration).as_secs_f64())?;
        writeln!(f, "TOTAL EXECUTION TIME = {:.6} (s)", timings.total.as_secs_f64())?;
        writeln!(f, "TIME PHASE 1 = {:.6} (s)", timings.seeding.as_secs_f64())?;
        write!(f, "TIME PHASE 2 = {:.6} (s)", timings.clustering.as_secs_f64())
    }
}
