//! Threading utilities

use std::future::Future;
use tokio::task::JoinHandle;
use tracing::Instrument;

/// Spawn a background task on the current runtime.
///
/// Everything the task logs is tagged with `name`.
pub fn spawn_background<F, T>(name: &'static str, future: F) -> JoinHandle<T>
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    tracing::debug!(task = name, "spawning background task");
    tokio::spawn(future.instrument(tracing::info_span!("task", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_spawn_background_returns_output() {
        let handle = spawn_background("adder", async { 2 + 2 });
        assert_eq!(handle.await.unwrap(), 4);
    }
}
