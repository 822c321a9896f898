use lloyd::*;
use rand::prelude::*;

const IRIS_PETALS: &str = "12 2 3 100 1
1.4 0.2 setosa
1.3 0.2 setosa
1.5 0.2 setosa
1.7 0.4 setosa
4.7 1.4 versicolor
4.5 1.5 versicolor
4.9 1.5 versicolor
4.0 1.3 versicolor
6.0 2.5 virginica
5.9 2.1 virginica
6.6 2.1 virginica
6.3 1.8 virginica
";

fn run(seed: u64) -> KMeansState<f64> {
    let dataset: Dataset<f64> = Dataset::from_reader(IRIS_PETALS.as_bytes()).unwrap();
    let (k, max_iter) = (dataset.k, dataset.max_iter);
    let conf = KMeansConfig::build().random_generator(StdRng::seed_from_u64(seed)).build();
    dataset.into_kmeans().kmeans_lloyd(k, max_iter, KMeans::init_random_sample, &conf).unwrap()
}

#[test]
fn load_cluster_report() {
    let state = run(5);
    assert!(state.iteration <= 100);
    assert_eq!(state.clusters.len(), 3);

    // every point assigned, every point in exactly one cluster
    let mut members: Vec<usize> = state.clusters.iter().flat_map(|c| c.members().iter().cloned()).collect();
    members.sort_unstable();
    assert_eq!(members, (0..12).collect::<Vec<_>>());
    for c in &state.clusters {
        for &m in c.members() {
            assert_eq!(state.points[m].cluster(), Some(c.id()));
        }
    }

    let total: f64 = state.clusters.iter().map(|c| c.total_distance(&state.points)).sum();
    assert!((total - state.distsum).abs() < 1e-12);

    let report = Report::new(&state).with_clusters(true).to_string();
    assert!(report.starts_with(&format!("Break in iteration {}\n", state.iteration)));
    assert!(report.contains("TOTAL DISTANCE OF ALL CLUSTERS = "));
    assert!(report.contains("- virginica"));
}

#[test]
fn same_seed_same_result() {
    let (a, b) = (run(11), run(11));
    assert_eq!(a.assignments(), b.assignments());
    assert_eq!(a.centroids(), b.centroids());
    assert_eq!(a.distsum, b.distsum);
}

#[test]
fn more_clusters_than_points() {
    let dataset: Dataset<f64> = Dataset::from_reader("2 1 3 10 0 1.0 2.0".as_bytes()).unwrap();
    let (k, max_iter) = (dataset.k, dataset.max_iter);
    let err = dataset.into_kmeans()
        .kmeans_lloyd(k, max_iter, KMeans::init_random_sample, &KMeansConfig::default())
        .unwrap_err();
    assert_eq!(err, KMeansError::TooManyClusters { k: 3, sample_cnt: 2 });
    assert!(err.to_string().contains("k (3) is larger than the amount of points (2)"));
}
