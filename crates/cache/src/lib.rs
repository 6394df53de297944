//! Trajectory cache: the record format and the stores the engine can be handed.
//!
//! Keys are composed by the engine and already carry the algorithm version, so
//! the stores treat them as opaque strings.

mod file;

use std::collections::HashMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use traj_core::{GeoPoint, Site};

pub use file::{CacheFile, FileCache};

/// Persisted geometry for one cache key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheRecord {
    pub launch_site: Site,
    pub trajectory: Vec<GeoPoint>,
    pub orbit_path: Vec<GeoPoint>,
    /// Canonical orbit class tag the geometry was generated for.
    pub orbit_label: String,
    pub inclination_deg: f64,
    /// Whether the ascent was snapped onto the ground track.
    #[serde(default)]
    pub joined: bool,
    /// Algorithm version that produced the record.
    pub model: String,
}

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("cache serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Key/value store consulted before any geometry is computed.
pub trait TrajectoryCache: Send + Sync {
    fn get(&self, key: &str) -> Option<CacheRecord>;
    fn put(&self, key: &str, record: CacheRecord) -> Result<(), CacheError>;
}

/// Process-local store; nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, CacheRecord>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TrajectoryCache for MemoryCache {
    fn get(&self, key: &str) -> Option<CacheRecord> {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    fn put(&self, key: &str, record: CacheRecord) -> Result<(), CacheError> {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), record);
        Ok(())
    }
}

/// Store that never remembers anything; used when caching is disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCache;

impl TrajectoryCache for NoCache {
    fn get(&self, _key: &str) -> Option<CacheRecord> {
        None
    }

    fn put(&self, _key: &str, _record: CacheRecord) -> Result<(), CacheError> {
        Ok(())
    }
}

impl<T: TrajectoryCache + ?Sized> TrajectoryCache for Box<T> {
    fn get(&self, key: &str) -> Option<CacheRecord> {
        (**self).get(key)
    }

    fn put(&self, key: &str, record: CacheRecord) -> Result<(), CacheError> {
        (**self).put(key, record)
    }
}

impl<T: TrajectoryCache + ?Sized> TrajectoryCache for std::sync::Arc<T> {
    fn get(&self, key: &str) -> Option<CacheRecord> {
        (**self).get(key)
    }

    fn put(&self, key: &str, record: CacheRecord) -> Result<(), CacheError> {
        (**self).put(key, record)
    }
}
