// libs/appointment-cell/src/services/call_timer.rs
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Duration, Instant};
use tracing::{debug, warn};

const TICK: Duration = Duration::from_secs(1);

/// Elapsed-time counter shown during a consultation call.
///
/// Counts whole seconds while running. Nothing is persisted; dropping the
/// timer stops it.
#[derive(Debug, Default)]
pub struct CallTimer {
    elapsed: Arc<AtomicU64>,
    handle: Option<JoinHandle<()>>,
}

impl CallTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts counting from zero. Calling it while already running changes
    /// nothing; outside a tokio runtime the timer stays idle.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }

        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(err) => {
                warn!("Call timer not started, no tokio runtime: {}", err);
                return;
            }
        };

        self.elapsed.store(0, Ordering::Relaxed);
        let elapsed = Arc::clone(&self.elapsed);

        self.handle = Some(runtime.spawn(async move {
            let mut ticker = interval_at(Instant::now() + TICK, TICK);
            loop {
                ticker.tick().await;
                elapsed.fetch_add(1, Ordering::Relaxed);
            }
        }));

        debug!("Call timer started");
    }

    /// Freezes the counter at its current value.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!("Call timer stopped at {}", self.display());
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed.load(Ordering::Relaxed)
    }

    pub fn display(&self) -> String {
        format_call_duration(self.elapsed_seconds())
    }
}

impl Drop for CallTimer {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

/// "MM:SS", or "H:MM:SS" from the first hour on.
pub fn format_call_duration(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_call_duration() {
        assert_eq!(format_call_duration(0), "00:00");
        assert_eq!(format_call_duration(65), "01:05");
        assert_eq!(format_call_duration(3599), "59:59");
        assert_eq!(format_call_duration(3600), "1:00:00");
        assert_eq!(format_call_duration(7325), "2:02:05");
    }

    #[test]
    fn test_new_timer_is_idle() {
        let timer = CallTimer::new();
        assert!(!timer.is_running());
        assert_eq!(timer.display(), "00:00");
    }

    #[test]
    fn test_start_without_runtime_stays_idle() {
        let mut timer = CallTimer::new();
        timer.start();

        assert!(!timer.is_running());
        assert_eq!(timer.elapsed_seconds(), 0);
        timer.stop();
    }
}
