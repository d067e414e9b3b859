//! Display-only shift timer.
//!
//! One live ticker at most: `start` cancels any previous ticker before
//! spawning a new one, and `stop` (or drop) cancels the running one. The
//! tick callback receives the elapsed time already formatted as `HH:MM:SS`.

use crate::utils::time::format_elapsed;
use chrono::{DateTime, Local};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Stopped,
    Running,
}

pub struct PunchTimer {
    state: TimerState,
    cancel: Option<Arc<AtomicBool>>,
    handle: Option<JoinHandle<()>>,
}

impl Default for PunchTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl PunchTimer {
    pub fn new() -> Self {
        Self {
            state: TimerState::Stopped,
            cancel: None,
            handle: None,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    /// Start ticking once per second from `punch_in`. An already running
    /// ticker is cancelled first.
    pub fn start<F>(&mut self, punch_in: DateTime<Local>, tick: F)
    where
        F: FnMut(&str) + Send + 'static,
    {
        self.start_with_period(punch_in, Duration::from_secs(1), tick);
    }

    /// Same as [`start`](Self::start) with a custom tick period. Tests use
    /// short periods to observe tick counts quickly.
    pub fn start_with_period<F>(&mut self, punch_in: DateTime<Local>, period: Duration, mut tick: F)
    where
        F: FnMut(&str) + Send + 'static,
    {
        self.stop();

        let cancel = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancel);

        let handle = thread::spawn(move || {
            loop {
                if flag.load(Ordering::Relaxed) {
                    break;
                }
                let elapsed = Local::now().timestamp() - punch_in.timestamp();
                tick(&format_elapsed(elapsed));
                thread::sleep(period);
            }
        });

        self.cancel = Some(cancel);
        self.handle = Some(handle);
        self.state = TimerState::Running;
    }

    /// Cancel the ticker, if any. The displayed value resets to
    /// [`RESET_DISPLAY`].
    pub fn stop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel.store(true, Ordering::Relaxed);
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
        self.state = TimerState::Stopped;
    }
}

impl Drop for PunchTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

/// The value a stopped timer displays.
pub const RESET_DISPLAY: &str = "00:00:00";
