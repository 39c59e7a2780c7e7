use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde_json::Value;
use sha2::{Digest, Sha256};

const FILE_KEY_PREFIX: &str = "pokedex_cache_v1:";

/// Response cache keyed by request url
///
/// Implementations must tolerate concurrent access; a failed write is never
/// an error for the caller. Calls may block: the client makes them from
/// tokio's blocking pool.
pub trait Cache: Send + Sync {
    fn get(&self, key: &str) -> Option<Value>;
    fn set(&self, key: &str, value: &Value);
}

/// Process-lifetime cache
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, Value>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Cache for MemoryCache {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &Value) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.to_string(), value.clone());
        }
    }
}

/// Never stores anything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCache;

impl Cache for NoCache {
    fn get(&self, _key: &str) -> Option<Value> {
        None
    }

    fn set(&self, _key: &str, _value: &Value) {}
}

/// One JSON file per key under a directory, with a memory layer in front
///
/// Unreadable or corrupt files count as a miss.
#[derive(Debug)]
pub struct FileCache {
    dir: PathBuf,
    memory: MemoryCache,
}

impl FileCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            memory: MemoryCache::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Location of the file backing `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        let digest = Sha256::digest(format!("{FILE_KEY_PREFIX}{key}").as_bytes());
        self.dir.join(format!("{}.json", hex::encode(digest)))
    }

    fn read(&self, key: &str) -> Option<Value> {
        let path = self.path_for(key);
        let text = fs::read_to_string(&path).ok()?;
        match serde_json::from_str(&text) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring corrupt cache file");
                None
            }
        }
    }

    fn write(&self, key: &str, value: &Value) -> std::io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), serde_json::to_vec(value)?)
    }
}

impl Cache for FileCache {
    fn get(&self, key: &str) -> Option<Value> {
        if let Some(value) = self.memory.get(key) {
            return Some(value);
        }
        let value = self.read(key)?;
        self.memory.set(key, &value);
        Some(value)
    }

    fn set(&self, key: &str, value: &Value) {
        self.memory.set(key, value);
        if let Err(e) = self.write(key, value) {
            tracing::warn!(key = %key, dir = %self.dir.display(), error = %e, "Failed to persist cache entry");
        }
    }
}
