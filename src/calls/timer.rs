//! One-shot and repeating timers backed by tokio tasks.
//!
//! Every timer returns a [`ScheduledTask`] handle. Cancelling (or dropping)
//! the handle aborts the task; callers that need a hard "nothing runs after
//! cancel" guarantee must also guard the callback's side effects, since a
//! callback may already be running when the abort lands.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Handle to a scheduled callback.
#[derive(Debug)]
pub struct ScheduledTask {
    handle: Option<JoinHandle<()>>,
}

impl ScheduledTask {
    /// Runs `callback` once after `delay`.
    pub fn once<F>(runtime: &Handle, delay: Duration, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        });
        Self {
            handle: Some(handle),
        }
    }

    /// Runs `callback` every `period`, first after one full period.
    ///
    /// `period` must be non-zero.
    pub fn repeating<F>(runtime: &Handle, period: Duration, mut callback: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let handle = runtime.spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                callback();
            }
        });
        Self {
            handle: Some(handle),
        }
    }

    /// Aborts the task. Safe to call any number of times, including after the
    /// callback already ran.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test(start_paused = true)]
    async fn test_once_fires_after_delay() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        let _task = ScheduledTask::once(&Handle::current(), Duration::from_secs(2), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeating_skips_immediate_tick() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let counter = ticks.clone();
        let _task = ScheduledTask::repeating(&Handle::current(), Duration::from_secs(1), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_before_fire() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        let mut task = ScheduledTask::once(&Handle::current(), Duration::from_secs(1), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert!(task.is_pending());

        task.cancel();
        task.cancel();
        assert!(!task.is_pending());

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let counter = ticks.clone();
        let task = ScheduledTask::repeating(&Handle::current(), Duration::from_secs(1), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(2500)).await;
        drop(task);
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 2);
    }
}
