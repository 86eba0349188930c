//! Webserver state management
//!
//! Process-level counters reported by the health endpoint.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Instant;

/// Core webserver state
#[derive(Debug)]
pub struct WebServerState {
    pub bind_address: SocketAddr,
    pub is_running: AtomicBool,
    pub submission_count: AtomicU64,
    pub server_start_time: Instant,
}

impl WebServerState {
    pub fn new(bind_address: SocketAddr) -> Self {
        Self {
            bind_address,
            is_running: AtomicBool::new(true),
            submission_count: AtomicU64::new(0),
            server_start_time: Instant::now(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.is_running.load(Ordering::Relaxed)
    }

    pub fn set_running(&self, running: bool) {
        self.is_running.store(running, Ordering::Relaxed);
    }

    /// Get server uptime in seconds
    pub fn get_uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }

    /// Accepted submissions since startup
    pub fn get_submission_count(&self) -> u64 {
        self.submission_count.load(Ordering::Relaxed)
    }

    pub fn record_submission(&self) -> u64 {
        self.submission_count.fetch_add(1, Ordering::Relaxed) + 1
    }
}
