//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::core::place::Place;
use crate::indicator::{IndicatorError, IndicatorReading, IndicatorSource};

/// Always answers with the same dollar value.
pub struct StaticSource(pub f64);

#[async_trait]
impl IndicatorSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_indicators(&self) -> Result<IndicatorReading, IndicatorError> {
        Ok(IndicatorReading::new(self.0))
    }
}

/// Always fails as if the body were malformed.
pub struct FailingSource;

#[async_trait]
impl IndicatorSource for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    async fn fetch_indicators(&self) -> Result<IndicatorReading, IndicatorError> {
        Err(IndicatorError::Parse("missing field `dolar`".to_string()))
    }
}

/// Never completes.
pub struct PendingSource;

#[async_trait]
impl IndicatorSource for PendingSource {
    fn name(&self) -> &str {
        "pending"
    }

    async fn fetch_indicators(&self) -> Result<IndicatorReading, IndicatorError> {
        std::future::pending().await
    }
}

/// Counts how many fetches were made.
pub struct CountingSource {
    value: f64,
    calls: AtomicUsize,
}

impl CountingSource {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IndicatorSource for CountingSource {
    fn name(&self) -> &str {
        "counting"
    }

    async fn fetch_indicators(&self) -> Result<IndicatorReading, IndicatorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(IndicatorReading::new(self.value))
    }
}

/// Holds the answer back until `release()` is called.
pub struct GatedSource {
    value: f64,
    gate: Notify,
}

impl GatedSource {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            gate: Notify::new(),
        }
    }

    pub fn release(&self) {
        self.gate.notify_one();
    }
}

#[async_trait]
impl IndicatorSource for GatedSource {
    fn name(&self) -> &str {
        "gated"
    }

    async fn fetch_indicators(&self) -> Result<IndicatorReading, IndicatorError> {
        self.gate.notified().await;
        Ok(IndicatorReading::new(self.value))
    }
}

pub fn place(name: &str) -> Place {
    Place {
        name: name.to_string(),
        ..Default::default()
    }
}
