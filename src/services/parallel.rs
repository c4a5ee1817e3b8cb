//! Parallel execution utilities for independent contract reads.
//!
//! Within one aggregate operation, independent sub-reads are issued
//! concurrently and joined before the operation produces its result.
//! Results come back in input order; there is no ordering guarantee on
//! completion, only that all must settle (or one must fail) first.

use std::future::Future;

use crate::errors::{AppError, AppResult};

/// Execute a collection of homogeneous fallible operations concurrently.
///
/// Results are returned in the same order as the input futures. If any
/// operation fails, the first error is returned and the batch fails as
/// a whole.
pub async fn join_all<F, T>(futures: Vec<F>) -> AppResult<Vec<T>>
where
    F: Future<Output = AppResult<T>>,
{
    let results = futures::future::join_all(futures).await;
    results.into_iter().collect()
}

/// Like [`join_all`] but with a cap on in-flight operations.
///
/// Useful for per-id detail fan-outs where the underlying provider
/// should not be hit with the whole batch at once. Order is preserved.
pub async fn join_all_limited<F, T, I>(futures: I, limit: usize) -> AppResult<Vec<T>>
where
    F: Future<Output = AppResult<T>>,
    I: IntoIterator<Item = F>,
{
    use futures::stream::{self, StreamExt, TryStreamExt};

    if limit == 0 {
        return Err(AppError::validation("concurrency limit must be greater than 0"));
    }

    stream::iter(futures)
        .buffered(limit)
        .try_collect()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn join_all_preserves_order() {
        let futures: Vec<_> = (0..5)
            .map(|i| async move { AppResult::<i32>::Ok(i) })
            .collect();
        let results = join_all(futures).await.unwrap();
        assert_eq!(results, vec![0, 1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn join_all_fails_fast_on_error() {
        let futures = vec![
            Box::pin(async { Ok(1) }) as std::pin::Pin<Box<dyn Future<Output = AppResult<i32>>>>,
            Box::pin(async { Err(AppError::read("boom")) }),
        ];
        assert!(join_all(futures).await.is_err());
    }

    #[tokio::test]
    async fn join_all_limited_preserves_order() {
        let futures: Vec<_> = (0..10)
            .map(|i| async move { AppResult::<i32>::Ok(i) })
            .collect();
        let results = join_all_limited(futures, 3).await.unwrap();
        assert_eq!(results, (0..10).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn join_all_limited_rejects_zero_limit() {
        let futures: Vec<std::future::Ready<AppResult<i32>>> = vec![];
        assert!(join_all_limited(futures, 0).await.is_err());
    }
}
