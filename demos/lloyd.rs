use lloyd::*;

fn main() {
    let (sample_cnt, sample_dims, k, max_iter) = (20000, 8, 4, 100);

    // Generate some random data
    let points = (0..sample_cnt)
        .map(|id| Point::new(id, (0..sample_dims).map(|_| rand::random::<f64>()).collect()))
        .collect();

    // Calculate kmeans, seeding with randomly sampled points
    let kmean = KMeans::new(points, sample_dims);
    let result = kmean.kmeans_lloyd(k, max_iter, KMeans::init_random_sample, &KMeansConfig::default())
        .expect("k is smaller than the amount of points");

    println!("Centroids: {:?}", result.centroids());
    println!("{}", Report::new(&result));
}
