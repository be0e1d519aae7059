//! Recurring interval timer for autoplay.
//!
//! The timer thread is the only background element in the crate and it
//! never touches widget state: it bumps an atomic tick counter while a run
//! flag holds. The owning widget drains accumulated ticks on the UI thread
//! at its next render and applies them as transitions there.
//!
//! Cancelling stores `false` into the run flag; the thread observes it on
//! its next wake and exits. A cancelled handle reports no ticks even if the
//! thread has not exited yet.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread;
use std::time::Duration;

/// Handle to a running interval timer.
pub struct IntervalHandle {
    ticks: Arc<AtomicU64>,
    running: Arc<AtomicBool>,
}

impl IntervalHandle {
    /// Start a timer ticking every `interval_ms` milliseconds.
    ///
    /// An interval of 0 yields an inert handle: no thread, no ticks.
    pub fn start(interval_ms: u64) -> Self {
        let ticks = Arc::new(AtomicU64::new(0));
        let running = Arc::new(AtomicBool::new(interval_ms > 0));

        if interval_ms > 0 {
            let thread_ticks = ticks.clone();
            let thread_running = running.clone();
            thread::spawn(move || {
                while thread_running.load(Ordering::SeqCst) {
                    thread::sleep(Duration::from_millis(interval_ms));
                    if thread_running.load(Ordering::SeqCst) {
                        thread_ticks.fetch_add(1, Ordering::SeqCst);
                    }
                }
            });
        }

        Self { ticks, running }
    }

    /// Drain accumulated ticks. Returns 0 after cancellation.
    pub fn take_ticks(&self) -> u64 {
        if !self.is_running() {
            return 0;
        }
        self.ticks.swap(0, Ordering::SeqCst)
    }

    /// Whether the timer is still active.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Stop the timer. Idempotent.
    pub fn cancel(&self) {
        self.running.store(false, Ordering::SeqCst);
    }
}

impl Drop for IntervalHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

// =============================================================================
// Tests
// =============================================================================
