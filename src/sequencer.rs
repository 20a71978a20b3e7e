//! Generic timed-action scheduler.
//!
//! Replaces hand-nested timer callbacks with a single declarative list: a
//! [`Sequence`] is an ordered set of delayed actions executed on one
//! timeline, cancelable as a unit. Only the terminal action of a
//! navigation-gating sequence is load-bearing; interior actions are
//! cosmetic.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Notify;

/// One scheduled action. `delay` is measured from the previous event in the
/// sequence (the first from sequence start), so offsets accumulate.
pub struct TimedEvent {
    pub delay: Duration,
    pub action: Box<dyn FnOnce() + Send + 'static>,
}

/// An ordered list of timed actions sharing one timeline.
#[derive(Default)]
pub struct Sequence {
    events: Vec<TimedEvent>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an action `delay` after the previous one.
    pub fn then(mut self, delay: Duration, action: impl FnOnce() + Send + 'static) -> Self {
        self.events.push(TimedEvent {
            delay,
            action: Box::new(action),
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Total duration from start to the terminal action.
    pub fn total_duration(&self) -> Duration {
        self.events.iter().map(|e| e.delay).sum()
    }
}

/// Handle to a running sequence.
///
/// Cancellation is best-effort up to the next action boundary: an action
/// already dispatched cannot be unwound, but no later action in the
/// sequence will fire. A cancelled sequence never reports complete.
#[derive(Clone)]
pub struct SequenceHandle {
    cancelled: Arc<AtomicBool>,
    complete: Arc<AtomicBool>,
    cancel_notify: Arc<Notify>,
    done_notify: Arc<Notify>,
}

impl SequenceHandle {
    fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            complete: Arc::new(AtomicBool::new(false)),
            cancel_notify: Arc::new(Notify::new()),
            done_notify: Arc::new(Notify::new()),
        }
    }

    /// Prevent any not-yet-fired action from firing. Idempotent; cancelling
    /// a completed sequence is a no-op.
    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::SeqCst) {
            self.cancel_notify.notify_waiters();
            // Unblock anyone awaiting completion; they observe the flags.
            self.done_notify.notify_waiters();
        }
    }

    /// Whether the terminal action has run.
    pub fn is_complete(&self) -> bool {
        self.complete.load(Ordering::SeqCst)
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Wait until the sequence completes or is cancelled.
    pub async fn wait(&self) {
        // Subscribe to Notify BEFORE checking the flags to avoid a TOCTOU
        // race: the runner could finish between the check and the await,
        // with no subscriber to receive the notification.
        let notified = self.done_notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_complete() || self.is_cancelled() {
            return;
        }
        notified.await;
    }

    async fn wait_cancelled(&self) {
        let notified = self.cancel_notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }
}

/// Run a sequence on the current tokio runtime.
///
/// Actions execute in order at their cumulative offsets, never overlapping.
/// The returned handle observes completion and controls cancellation; the
/// runner task ends as soon as the sequence is cancelled or exhausted.
pub fn spawn(sequence: Sequence) -> SequenceHandle {
    let handle = SequenceHandle::new();
    let runner = handle.clone();
    tokio::spawn(async move {
        for event in sequence.events {
            tokio::select! {
                () = tokio::time::sleep(event.delay) => {
                    (event.action)();
                }
                () = runner.wait_cancelled() => {
                    tracing::debug!("sequence cancelled before next action");
                    return;
                }
            }
        }
        runner.complete.store(true, Ordering::SeqCst);
        runner.done_notify.notify_waiters();
    });
    handle
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_duration_accumulates() {
        let seq = Sequence::new()
            .then(Duration::from_millis(500), || {})
            .then(Duration::from_millis(300), || {})
            .then(Duration::from_millis(200), || {});
        assert_eq!(seq.total_duration(), Duration::from_millis(1000));
    }

    #[test]
    fn empty_sequence_reports_empty() {
        assert!(Sequence::new().is_empty());
        assert!(!Sequence::new().then(Duration::ZERO, || {}).is_empty());
    }
}
