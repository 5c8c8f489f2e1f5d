use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Owner of a periodic refresh task.
///
/// The task watches the stop channel between ticks and while a refresh is in
/// flight. `stop()` signals and waits for it to exit; [`stop_within`] bounds
/// that wait and aborts a task that does not react in time. Dropping the
/// handle signals and aborts, so a replaced or discarded handle never keeps
/// refreshing.
///
/// [`stop_within`]: RefreshHandle::stop_within
#[derive(Debug)]
pub struct RefreshHandle {
    task: Option<JoinHandle<()>>,
    stop_tx: Option<oneshot::Sender<()>>,
}

impl RefreshHandle {
    /// Wrap a spawned refresh task and the sender half of its stop channel.
    #[must_use]
    pub const fn new(task: JoinHandle<()>, stop_tx: oneshot::Sender<()>) -> Self {
        Self {
            task: Some(task),
            stop_tx: Some(stop_tx),
        }
    }

    fn signal(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
    }

    /// Request a stop and wait for the task to exit.
    pub async fn stop(mut self) {
        self.signal();
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }

    /// Request a stop and wait at most `grace` for the task to exit, aborting
    /// it otherwise.
    ///
    /// Returns `true` if the task exited on its own.
    pub async fn stop_within(mut self, grace: Duration) -> bool {
        self.signal();
        let Some(mut task) = self.task.take() else {
            return true;
        };
        if tokio::time::timeout(grace, &mut task).await.is_ok() {
            return true;
        }
        task.abort();
        let _ = task.await;
        false
    }

    /// Signal the task and abort it without waiting.
    pub fn abort(&mut self) {
        self.signal();
        if let Some(task) = self.task.take()
            && !task.is_finished()
        {
            task.abort();
        }
    }

    /// True once the task has exited, or the handle was already stopped.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().is_none_or(JoinHandle::is_finished)
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.abort();
    }
}
