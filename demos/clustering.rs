//! K-means on a handful of random 2D points, printing every iteration.
//!
//! Each block shows the partition after its centroids were recomputed; the
//! grouping around the previous centroids is not passed to the observer and
//! so is not printed.
//!
//! Run with `RUST_LOG=debug` to also see the library's own log lines.

use barycenter::{Kmeans, Partition, Point};

const POINTS_COUNT: usize = 10;
const K: usize = 4;

fn main() {
    env_logger::init();

    let mut rng = rand::rng();
    let data: Vec<Point> = (0..POINTS_COUNT)
        .map(|_| Point::random_in_range(&mut rng, 0.0, 20.0, 0.0, 20.0))
        .collect();

    let mut report = |iteration: usize, partition: &Partition, changed: bool| {
        println!("[{}] {}", iteration, "-".repeat(30));
        print!("{partition}");
        println!("Changed: {}", if changed { "yes" } else { "no" });
    };

    match Kmeans::new(K).fit_with(&data, &mut report) {
        Ok(fit) => {
            println!("We found the partitions!");
            print!("{}", fit.partition);
            println!("inertia: {:.2}", fit.partition.inertia());
        }
        Err(e) => {
            eprintln!("clustering failed: {e}");
            std::process::exit(1);
        }
    }
}
