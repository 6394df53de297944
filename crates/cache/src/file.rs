//! JSON file store with write-through persistence.
//!
//! Records are kept as raw JSON and decoded one key at a time, so entries written
//! by other algorithm versions (whatever their shape) sit alongside current ones
//! and survive every rewrite. Writers are serialized in-process, re-read the file
//! so entries written by other processes survive, and replace the file atomically
//! via a temp file and rename. Across processes the last write wins.

use std::collections::{BTreeMap, HashMap};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, RwLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{CacheError, CacheRecord, TrajectoryCache};

/// On-disk layout: every record under `data`, plus the last-write time.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CacheFile {
    pub data: BTreeMap<String, Value>,
    /// Observability only; an unparseable value reads as `None`.
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| serde_json::from_value(value).ok()))
}

impl CacheFile {
    /// Read a cache file; a missing file yields `Ok(None)`.
    pub fn read(path: &Path) -> Result<Option<Self>, CacheError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_str(&contents)?))
    }

    /// Write the file atomically, creating parent directories as needed.
    pub fn write(&self, path: &Path) -> Result<(), CacheError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut tmp = path.as_os_str().to_owned();
        tmp.push(format!(".{}.tmp", std::process::id()));
        let tmp = PathBuf::from(tmp);

        let mut writer = BufWriter::new(File::create(&tmp)?);
        serde_json::to_writer(&mut writer, self)?;
        writer.flush()?;
        drop(writer);

        if let Err(err) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(err.into());
        }
        Ok(())
    }

    /// Read a cache file, treating unreadable or malformed content as empty.
    fn read_or_empty(path: &Path) -> Self {
        match Self::read(path) {
            Ok(Some(file)) => file,
            Ok(None) => Self::default(),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "ignoring unreadable trajectory cache");
                Self::default()
            }
        }
    }
}

/// File-backed [`TrajectoryCache`].
#[derive(Debug)]
pub struct FileCache {
    path: PathBuf,
    entries: RwLock<HashMap<String, Value>>,
    write_lock: Mutex<()>,
}

impl FileCache {
    /// Open the cache at `path`. Never fails: a missing or malformed file starts empty.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let file = CacheFile::read_or_empty(&path);
        debug!(path = %path.display(), entries = file.data.len(), "opened trajectory cache");
        Self {
            path,
            entries: RwLock::new(file.data.into_iter().collect()),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of stored entries, decodable or not.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TrajectoryCache for FileCache {
    fn get(&self, key: &str) -> Option<CacheRecord> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        let value = entries.get(key)?;
        match CacheRecord::deserialize(value) {
            Ok(record) => Some(record),
            Err(err) => {
                debug!(key, error = %err, "undecodable trajectory cache entry; treating as miss");
                None
            }
        }
    }

    fn put(&self, key: &str, record: CacheRecord) -> Result<(), CacheError> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());

        let mut file = CacheFile::read_or_empty(&self.path);
        file.data.insert(key.to_string(), serde_json::to_value(&record)?);
        file.timestamp = Some(Utc::now());
        file.write(&self.path)?;

        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.extend(file.data);
        Ok(())
    }
}
