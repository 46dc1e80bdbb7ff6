//! Bounded batch scheduler.

use std::future::Future;

use tracing::debug;

/// Run `task` over `items` in chunks of `batch_size`.
///
/// Tasks within a chunk run concurrently; chunks run one after another, so at
/// most `batch_size` tasks are ever in flight. Outputs keep input order.
/// A `batch_size` of 0 is treated as 1.
pub async fn run_batched<T, F, Fut>(items: Vec<T>, batch_size: usize, task: F) -> Vec<Fut::Output>
where
    F: Fn(T) -> Fut,
    Fut: Future,
{
    let batch_size = batch_size.max(1);
    let total = items.len();
    let mut outputs = Vec::with_capacity(total);
    let mut items = items.into_iter().peekable();
    let mut batch = 0usize;

    while items.peek().is_some() {
        let futures: Vec<Fut> = items.by_ref().take(batch_size).map(&task).collect();
        debug!(batch, size = futures.len(), total, "dispatching batch");
        outputs.extend(futures::future::join_all(futures).await);
        batch += 1;
    }

    outputs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_order_across_batches() {
        let out = futures::executor::block_on(run_batched((0..10).collect(), 3, |i| async move {
            i * 2
        }));
        assert_eq!(out, (0..10).map(|i| i * 2).collect::<Vec<_>>());
    }

    #[test]
    fn zero_batch_size_still_runs() {
        let out = futures::executor::block_on(run_batched(vec![1, 2], 0, |i| async move { i }));
        assert_eq!(out, vec![1, 2]);
    }

    #[test]
    fn empty_input() {
        let out: Vec<i32> =
            futures::executor::block_on(run_batched(Vec::<i32>::new(), 4, |i| async move { i }));
        assert!(out.is_empty());
    }
}
