extern crate pretty_env_logger;

#[macro_use]
extern crate log;

use clap::Parser;
use lloyd::{Dataset, KMeans, KMeansConfig, Report};
use rand::{rngs::StdRng, SeedableRng};
use std::io::{self, BufReader};
use std::path::PathBuf;

#[derive(Parser, Clone, Debug)]
#[command(name = "lloyd")]
#[command(about = "Lloyd k-means clustering of a point dataset")]
#[command(version)]
struct Args {
    /// Dataset file (default stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Seed for the random generator choosing the initial centroids (default: random)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the members and centroid of every cluster
    #[arg(long, default_value_t = false)]
    clusters: bool,

    /// Verbose logging
    #[arg(long, default_value_t = false)]
    debug: bool,
}

fn main() {
    let args = Args::parse();
    let level = if args.debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    pretty_env_logger::formatted_timed_builder()
        .filter_level(level)
        .init();

    debug!("params: {:#?}", args);
    let dataset = match &args.input {
        Some(path) => Dataset::<f64>::from_path(path),
        None => Dataset::<f64>::from_reader(BufReader::new(io::stdin())),
    };
    let dataset = match dataset {
        Ok(d) => d,
        Err(e) => {
            error!("unable to read dataset: {}", e);
            std::process::exit(1);
        }
    };
    let (k, max_iter) = (dataset.k, dataset.max_iter);
    info!("{} points, {} dimensions, k={}, max_iterations={}", dataset.points.len(), dataset.sample_dims, k, max_iter);

    let mut builder = KMeansConfig::build();
    if let Some(seed) = args.seed {
        builder = builder.random_generator(StdRng::seed_from_u64(seed));
    }
    let conf = builder.build();

    let kmean = dataset.into_kmeans();
    match kmean.kmeans_lloyd(k, max_iter, KMeans::init_random_sample, &conf) {
        Ok(state) => println!("{}", Report::new(&state).with_clusters(args.clusters)),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
