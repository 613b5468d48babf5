use barycenter::cluster::{
    assign_nearest, group_by_centroid, recompute_centroids, EmptyClusterPolicy, Kmeans,
};
use barycenter::{Error, Point};
use proptest::prelude::*;
use std::collections::HashSet;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn points() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-10.0f64..10.0, -10.0f64..10.0), 1..24)
        .prop_map(|raw| raw.into_iter().map(Point::from).collect())
}

fn sorted(mut v: Vec<Point>) -> Vec<Point> {
    v.sort();
    v
}

proptest! {
    #[test]
    fn prop_kmeans_covers_every_point(
        data in points(),
        k in 1usize..5,
        seed in any::<u64>(),
    ) {
        match Kmeans::new(k).with_seed(seed).fit(&data) {
            Ok(fit) => {
                // Reseeding fills every slot that a distinct input point can occupy.
                let distinct: HashSet<Point> = data.iter().copied().collect();
                prop_assert_eq!(fit.partition.len(), k.min(distinct.len()));
                let members: Vec<Point> = fit
                    .partition
                    .iter()
                    .flat_map(|c| c.members.iter().copied())
                    .collect();
                prop_assert_eq!(sorted(members), sorted(data.clone()));
            }
            // Tiny bounding boxes cannot hold k centroids; rounding can rarely cycle.
            Err(Error::InvalidClusterCount { .. }) | Err(Error::NonConvergence { .. }) => {}
            Err(e) => prop_assert!(false, "unexpected error: {}", e),
        }
    }

    #[test]
    fn prop_retain_keeps_k_clusters(
        data in points(),
        k in 1usize..5,
        seed in any::<u64>(),
    ) {
        let model = Kmeans::new(k)
            .with_seed(seed)
            .with_empty_cluster(EmptyClusterPolicy::Retain);
        if let Ok(fit) = model.fit(&data) {
            prop_assert_eq!(fit.partition.n_points(), data.len());
            // Only coinciding means can shrink a retained partition.
            prop_assert!(fit.partition.len() <= k);
        }
    }

    #[test]
    fn prop_result_is_fixed_point(
        data in points(),
        k in 1usize..5,
        seed in any::<u64>(),
    ) {
        if let Ok(fit) = Kmeans::new(k).with_seed(seed).fit(&data) {
            let mut rng = StdRng::seed_from_u64(seed);
            let (changed, again) =
                recompute_centroids(fit.partition.clone(), EmptyClusterPolicy::Fail, &mut rng)
                    .unwrap();
            prop_assert!(!changed);
            prop_assert_eq!(again, fit.partition.clone());

            // Reassigning against the final centroids reproduces the same groups.
            let centroids = fit.partition.centroids();
            let regrouped = group_by_centroid(&assign_nearest(&data, &centroids).unwrap());
            prop_assert_eq!(regrouped, fit.partition);
        }
    }

    #[test]
    fn prop_steps_deterministic_from_fixed_seeds(
        data in points(),
        seeds in prop::collection::vec((-10.0f64..10.0, -10.0f64..10.0), 1..5),
    ) {
        let mut centroids: Vec<Point> = seeds.into_iter().map(Point::from).collect();
        centroids.sort();
        centroids.dedup();

        let run = || {
            let mut rng = StdRng::seed_from_u64(0);
            let mut current = centroids.clone();
            let mut history = Vec::new();
            for _ in 0..5 {
                let partition = group_by_centroid(&assign_nearest(&data, &current).unwrap());
                let (changed, partition) =
                    recompute_centroids(partition, EmptyClusterPolicy::Retain, &mut rng).unwrap();
                current = partition.centroids();
                history.push((changed, partition));
            }
            history
        };
        prop_assert_eq!(run(), run());
    }
}
