//! The live clock
//!
//! A trivial periodic observer of the wall-clock time. It has no interaction whatsoever
//! with the task store.

use std::time::Duration;

use chrono::{DateTime, Local};
use tokio::task::JoinHandle;

/// A running clock, handing the present wall-clock time to a callback at a fixed period
pub struct Clock {
    handle: Option<JoinHandle<()>>,
}

impl Clock {
    /// Start ticking. `on_tick` receives the present local time once per `period`
    /// (the first tick fires immediately), until [`Clock::stop`] is called or the clock is dropped.
    pub fn start<F>(period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut(DateTime<Local>) + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                on_tick(Local::now());
            }
        });

        Self {
            handle: Some(handle),
        }
    }

    /// Cancel the periodic tick. Stopping an already-stopped clock has no effect.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for Clock {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Format a moment the way the clock face displays it (24-hour `HH:MM:SS`)
pub fn format_time(moment: &DateTime<Local>) -> String {
    moment.format("%H:%M:%S").to_string()
}

/// Format a moment the way the clock face displays its date line (e.g. `Friday, March 15, 2024`)
pub fn format_date(moment: &DateTime<Local>) -> String {
    moment.format("%A, %B %-d, %Y").to_string()
}
