//! Metrics collection.
//!
//! An append-only time series of per-state population counts, one snapshot
//! per completed tick plus one taken at construction (tick 0). The series
//! is never edited or truncated once written.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::state::StateCounts;

/// Per-state counts at the end of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickSnapshot {
    /// Tick index; 0 is the pre-step snapshot
    pub tick: u64,
    /// Population counts at that tick
    pub counts: StateCounts,
}

/// Accumulates the snapshot series for one run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MetricsCollector {
    snapshots: Vec<TickSnapshot>,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one snapshot. Called once right after construction and once
    /// at the end of every completed tick.
    pub fn collect(&mut self, tick: u64, counts: StateCounts) {
        self.snapshots.push(TickSnapshot { tick, counts });
    }

    /// The full ordered series. Never empty after engine construction.
    pub fn series(&self) -> &[TickSnapshot] {
        &self.snapshots
    }

    /// The most recent snapshot.
    pub fn latest(&self) -> Option<&TickSnapshot> {
        self.snapshots.last()
    }

    /// Writes the series as pretty JSON.
    pub fn write_series(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(dir) = path.as_ref().parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }
        let json = serde_json::to_string_pretty(&self.snapshots)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        fs::write(path, json)
    }
}
