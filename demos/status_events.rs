use lloyd::*;

fn main() {
    let (sample_cnt, sample_dims, k, max_iter) = (20000, 8, 4, 2500);

    // Generate some random data
    let points = (0..sample_cnt)
        .map(|id| Point::new(id, (0..sample_dims).map(|_| rand::random::<f64>()).collect()))
        .collect();

    let init_done = |_: &KMeansState<f64>| println!("Initialization completed.");
    let iteration_done = |s: &KMeansState<f64>, nr: usize, changed: bool|
        println!("Iteration {} - Distance: {:.2} | Assignments changed: {}", nr, s.total_distance(), changed);
    let conf = KMeansConfig::build()
        .init_done(&init_done)
        .iteration_done(&iteration_done)
        .build();

    let kmean = KMeans::new(points, sample_dims);
    let result = kmean.kmeans_lloyd(k, max_iter, KMeans::init_random_sample, &conf)
        .expect("k is smaller than the amount of points");

    println!("Centroids: {:?}", result.centroids());
    println!("Error: {}", result.distsum);
}
