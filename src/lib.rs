//! # lloyd - API documentation
//!
//! Lloyd is a small rust library for the calculation of k-means-clustering, using Lloyd's
//! original two-phase algorithm on labelled points.
//!
//! ## Design target
//! The calculation is sequential and keeps its whole state explicit: every point carries the id of the
//! cluster it is assigned to, and every cluster holds the registry indices of its members. Both are only
//! ever changed by the assign/update loop, so each phase can be inspected (and tested) on its own.
//!
//! ## Algorithm
//! 1. **Seeding**: K distinct points are chosen as seeds. Each seed point becomes the first member of its
//!    cluster, and the cluster's centroid starts at the seed's coordinates.
//! 2. **Assigning**: Every point is moved to the cluster with the nearest centroid (euclidean distance,
//!    ties go to the lower cluster index).
//! 3. **Updating**: Every non-empty cluster's centroid moves to the mean of its members.
//!    Empty clusters keep their centroid.
//! 4. Steps 2 and 3 repeat until an assignment pass changes nothing, or the iteration limit is hit.
//!
//! ## Supported centroid initializations
//! See [`KMeans`]. The baseline is random sampling without replacement, drawing from the random
//! generator set in [`KMeansConfig`] (seed it for repeatable runs).
//!
//! ## Supported primitive types
//! - [`f32`]
//! - [`f64`]
//!
//! ## Example
//! ```rust
//! use lloyd::*;
//! use rand::prelude::*;
//!
//! fn main() {
//!     let (sample_cnt, sample_dims, k, max_iter) = (2000, 4, 4, 100);
//!
//!     // Generate some random data
//!     let points = (0..sample_cnt)
//!         .map(|id| Point::new(id, (0..sample_dims).map(|_| rand::random::<f64>()).collect()))
//!         .collect();
//!
//!     let conf = KMeansConfig::build().random_generator(StdRng::seed_from_u64(1337)).build();
//!     let kmean = KMeans::new(points, sample_dims);
//!     let result = kmean.kmeans_lloyd(k, max_iter, KMeans::init_random_sample, &conf).unwrap();
//!
//!     println!("{}", Report::new(&result));
//!     println!("Centroids: {:?}", result.centroids());
//! }
//! ```
//!
//! ## Short API-Overview / Description
//! Entry-point of the library is the [`KMeans`] struct. It takes over the point registry, and stays immutable
//! during calculations. Each call to [`KMeans::kmeans_lloyd`] works on its own [`KMeansState`], which is
//! returned as result: the final points with their assignments, the clusters, the total distance and timings.
//!
//! Asking for more clusters than there are points is the only checked configuration error
//! ([`KMeansError::TooManyClusters`]); no clustering work is done in that case.

#[macro_use] mod helpers;
mod memory;
mod error;
mod point;
mod cluster;
mod distances;
mod api;
mod variants;
mod inits;
mod input;
mod report;

pub use api::{KMeansState, KMeansConfig, KMeansConfigBuilder, KMeans, RunTimings};
pub use cluster::Cluster;
pub use distances::euclidean_distance;
pub use error::{InputError, KMeansError};
pub use input::Dataset;
pub use memory::Primitive;
pub use point::Point;
pub use report::Report;
