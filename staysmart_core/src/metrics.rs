//! Server metrics collection and reporting

use std::collections::HashMap;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;

#[derive(Clone)]
pub struct MetricsCollector {
    total_requests: Arc<AtomicU64>,
    successful_requests: Arc<AtomicU64>,
    failed_requests: Arc<AtomicU64>,
    total_latency_ms: Arc<AtomicU64>,
    requests_by_endpoint: Arc<RwLock<HashMap<String, u64>>>,
    start_time: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct MetricsSnapshot {
    pub total_requests: u64,
    pub successful_requests: u64,
    pub failed_requests: u64,
    pub requests_by_endpoint: HashMap<String, u64>,
    pub average_response_time_ms: f64,
    pub error_rate: f64,
    pub uptime_seconds: i64,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self {
            total_requests: Arc::new(AtomicU64::new(0)),
            successful_requests: Arc::new(AtomicU64::new(0)),
            failed_requests: Arc::new(AtomicU64::new(0)),
            total_latency_ms: Arc::new(AtomicU64::new(0)),
            requests_by_endpoint: Arc::new(RwLock::new(HashMap::new())),
            start_time: Utc::now(),
        }
    }

    pub fn record_request(&self, path: &str) {
        self.total_requests.fetch_add(1, Ordering::Relaxed);
        *self
            .requests_by_endpoint
            .write()
            .entry(path.to_string())
            .or_insert(0) += 1;
    }

    pub fn record_response(&self, duration_ms: u128, status: u16) {
        self.total_latency_ms
            .fetch_add(duration_ms as u64, Ordering::Relaxed);
        if status < 400 {
            self.successful_requests.fetch_add(1, Ordering::Relaxed);
        } else {
            self.failed_requests.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn get_snapshot(&self) -> MetricsSnapshot {
        let total = self.total_requests.load(Ordering::Relaxed);
        let successful = self.successful_requests.load(Ordering::Relaxed);
        let failed = self.failed_requests.load(Ordering::Relaxed);
        let total_latency = self.total_latency_ms.load(Ordering::Relaxed);
        let completed = successful + failed;

        MetricsSnapshot {
            total_requests: total,
            successful_requests: successful,
            failed_requests: failed,
            requests_by_endpoint: self.requests_by_endpoint.read().clone(),
            average_response_time_ms: if completed > 0 {
                total_latency as f64 / completed as f64
            } else {
                0.0
            },
            error_rate: if completed > 0 {
                failed as f64 / completed as f64
            } else {
                0.0
            },
            uptime_seconds: (Utc::now() - self.start_time).num_seconds(),
        }
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}
