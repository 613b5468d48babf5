use super::partition::Partition;

/// Receives the partition produced by each Lloyd iteration.
///
/// Implemented for any `FnMut(usize, &Partition, bool)` closure, called with the
/// zero-based iteration index, the recomputed partition, and whether any
/// centroid moved.
pub trait Observer {
    fn observe(&mut self, iteration: usize, partition: &Partition, changed: bool);
}

impl<F> Observer for F
where
    F: FnMut(usize, &Partition, bool),
{
    fn observe(&mut self, iteration: usize, partition: &Partition, changed: bool) {
        self(iteration, partition, changed)
    }
}
