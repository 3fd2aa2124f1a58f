//! Two-tier standings cache with explicit expiry
//!
//! - L1: in-memory LRU keyed by season label
//! - L2: one JSON file per key under the user cache directory
//!
//! Every entry carries its own `expires_at`; expired entries are treated as
//! misses on both tiers. `invalidate` drops a key from both tiers.

use chrono::{DateTime, Utc};
use lru::LruCache;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{
    fs,
    hash::Hash,
    io::{Read, Write},
    num::NonZeroUsize,
    path::{Path, PathBuf},
    sync::{LazyLock, Mutex, MutexGuard},
};
use tracing::debug;

use crate::cli::types::SeasonLabel;
use crate::pulse::types::Standings;
use crate::Result;


const CACHE_DIR_NAME: &str = "pl-sweepstake";
const DEFAULT_MEMORY_CAPACITY: usize = 8;

/// Default directory: `~/.cache/pl-sweepstake` (platform equivalent).
pub fn default_cache_dir() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join(CACHE_DIR_NAME)
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Key that can address both cache tiers.
pub trait CacheKey: Hash + Eq + Clone + Send + Sync {
    /// File-name-safe representation for the disk tier.
    fn to_file_key(&self) -> String;
}

impl CacheKey for SeasonLabel {
    fn to_file_key(&self) -> String {
        format!("standings_{}", self.file_stem())
    }
}

/// A cached value and the instant it stops being valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry<V> {
    pub value: V,
    pub expires_at: DateTime<Utc>,
}

impl<V> CacheEntry<V> {
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

/// LRU memory cache backed by per-key JSON files.
pub struct TtlCache<K, V>
where
    K: CacheKey,
    V: Clone + Serialize + DeserializeOwned,
{
    memory: Mutex<LruCache<K, CacheEntry<V>>>,
    memory_capacity: usize,
    dir: Option<PathBuf>,
}

impl<K, V> TtlCache<K, V>
where
    K: CacheKey,
    V: Clone + Serialize + DeserializeOwned,
{
    /// Create a cache. `dir == None` keeps it memory-only.
    pub fn new(memory_capacity: usize, dir: Option<PathBuf>) -> Self {
        let capacity = NonZeroUsize::new(memory_capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            memory: Mutex::new(LruCache::new(capacity)),
            memory_capacity: capacity.get(),
            dir,
        }
    }

    fn memory(&self) -> MutexGuard<'_, LruCache<K, CacheEntry<V>>> {
        self.memory.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn file_path(&self, key: &K) -> Option<PathBuf> {
        self.dir
            .as_ref()
            .map(|dir| dir.join(format!("{}.json", key.to_file_key())))
    }

    /// Fresh value for `key`, checking memory first, then disk.
    pub fn get(&self, key: &K, now: DateTime<Utc>) -> Option<V> {
        {
            let mut memory = self.memory();
            let cached = memory
                .get(key)
                .map(|entry| entry.is_fresh(now).then(|| entry.value.clone()));
            match cached {
                Some(Some(value)) => return Some(value),
                Some(None) => {
                    memory.pop(key);
                }
                None => {}
            }
        }

        let entry = self.get_from_disk(key)?;
        if !entry.is_fresh(now) {
            debug!("Disk cache entry {} expired", key.to_file_key());
            return None;
        }

        let value = entry.value.clone();
        self.memory().put(key.clone(), entry);
        Some(value)
    }

    /// Store `value` in both tiers until `expires_at`.
    pub fn put(&self, key: K, value: V, expires_at: DateTime<Utc>) {
        let entry = CacheEntry { value, expires_at };

        if let Err(e) = self.put_to_disk(&key, &entry) {
            debug!("Could not persist cache entry {}: {}", key.to_file_key(), e);
        }
        self.memory().put(key, entry);
    }

    fn get_from_disk(&self, key: &K) -> Option<CacheEntry<V>> {
        let path = self.file_path(key)?;
        let content = try_read_to_string(&path)?;
        serde_json::from_str(&content).ok()
    }

    fn put_to_disk(&self, key: &K, entry: &CacheEntry<V>) -> Result<()> {
        let Some(path) = self.file_path(key) else {
            return Ok(());
        };
        let content = serde_json::to_string_pretty(entry)?;
        write_string(&path, &content)?;
        Ok(())
    }

    /// Drop `key` from memory and disk.
    pub fn invalidate(&self, key: &K) -> Result<()> {
        self.memory().pop(key);
        if let Some(path) = self.file_path(key) {
            if path.exists() {
                fs::remove_file(path)?;
            }
        }
        Ok(())
    }

    /// Drop every entry, including all files in the cache directory.
    pub fn invalidate_all(&self) -> Result<()> {
        self.memory().clear();
        if let Some(dir) = &self.dir {
            if dir.exists() {
                for entry in fs::read_dir(dir)? {
                    let path = entry?.path();
                    if path.extension().is_some_and(|ext| ext == "json") {
                        fs::remove_file(path)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// (entries in memory, memory capacity)
    pub fn memory_stats(&self) -> (usize, usize) {
        (self.memory().len(), self.memory_capacity)
    }

    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }
}

pub type StandingsCache = TtlCache<SeasonLabel, Standings>;

/// Process-wide standings cache under the default cache directory.
pub static GLOBAL_CACHE: LazyLock<StandingsCache> =
    LazyLock::new(|| StandingsCache::new(DEFAULT_MEMORY_CAPACITY, Some(default_cache_dir())));
