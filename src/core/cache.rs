//! Unified caching system for both in-memory LRU cache and persistent file storage
//!
//! This module provides a two-tier caching system:
//! - L1 Cache: In-memory LRU cache for fast access
//! - L2 Cache: File system persistence for longer-term storage
//!
//! The reference-database analysis queries (salary pool statistics,
//! comparable-candidate pools) are the heavy consumers: the pools are
//! recomputed once per ingest and read every valuation tick.

use lru::LruCache;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    hash::Hash,
    io::{Read, Write},
    num::NonZeroUsize,
    path::{Path, PathBuf},
    sync::{Arc, LazyLock, Mutex},
};

use crate::cli::types::{Position, Season};
use crate::storage::models::{CompCandidate, SalaryPoolStats};

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

/// Generic cache key that can be used for both memory and disk caching
pub trait CacheKey: Hash + Eq + Clone + Send + Sync {
    /// Generate a string representation for file system storage
    fn to_file_key(&self) -> String;

    /// Generate the file path for this cache entry
    fn to_file_path(&self) -> PathBuf {
        let base = dirs::cache_dir().unwrap_or_else(|| {
            let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.push(".cache");
            home
        });
        base.join("cbb-nil")
            .join(format!("{}.json", self.to_file_key()))
    }
}

/// Cache key for salary pool statistics
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SalaryStatsCacheKey {
    pub season: Season,
}

impl CacheKey for SalaryStatsCacheKey {
    fn to_file_key(&self) -> String {
        format!("salary_stats_s{}", self.season.as_u16())
    }
}

/// Cache key for comparable-candidate pools
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompPoolCacheKey {
    pub season: Season,
    pub position: Position,
}

impl CacheKey for CompPoolCacheKey {
    fn to_file_key(&self) -> String {
        format!(
            "comp_pool_s{}_{}",
            self.season.as_u16(),
            self.position.to_string().to_lowercase()
        )
    }
}

/// Unified cache that combines LRU memory cache with file system persistence
pub struct UnifiedCache<K, V>
where
    K: CacheKey,
    V: Clone + Serialize + for<'de> Deserialize<'de>,
{
    memory_cache: Arc<Mutex<LruCache<K, V>>>,
    memory_capacity: usize,
}

impl<K, V> UnifiedCache<K, V>
where
    K: CacheKey,
    V: Clone + Serialize + for<'de> Deserialize<'de>,
{
    /// Create a new unified cache with specified memory capacity
    pub fn new(memory_capacity: usize) -> Self {
        Self {
            memory_cache: Arc::new(Mutex::new(LruCache::new(
                NonZeroUsize::new(memory_capacity).unwrap(),
            ))),
            memory_capacity,
        }
    }

    /// Get an item from cache (checks memory first, then disk)
    pub fn get(&self, key: &K) -> Option<V> {
        // First check memory cache
        if let Some(value) = self.memory_cache.lock().unwrap().get(key) {
            return Some(value.clone());
        }

        // Fall back to disk cache
        if let Some(value) = self.get_from_disk(key) {
            // Promote to memory cache
            self.memory_cache
                .lock()
                .unwrap()
                .put(key.clone(), value.clone());
            return Some(value);
        }

        None
    }

    /// Put an item into cache (stores in both memory and disk)
    pub fn put(&self, key: K, value: V) {
        self.memory_cache
            .lock()
            .unwrap()
            .put(key.clone(), value.clone());

        let _ = self.put_to_disk(&key, &value);
    }

    /// Get item from disk cache only
    fn get_from_disk(&self, key: &K) -> Option<V> {
        let path = key.to_file_path();
        let content = try_read_to_string(&path)?;
        serde_json::from_str(&content).ok()
    }

    /// Put item to disk cache only
    fn put_to_disk(&self, key: &K, value: &V) -> std::io::Result<()> {
        let path = key.to_file_path();
        let content = serde_json::to_string_pretty(value)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        write_string(&path, &content)
    }

    /// Clear memory cache only (keeps disk cache)
    pub fn clear_memory(&self) {
        self.memory_cache.lock().unwrap().clear();
    }

    /// Clear disk cache for a specific key (used when underlying data changes)
    pub fn invalidate_disk_cache(&self, key: &K) -> std::io::Result<()> {
        let path = key.to_file_path();
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Get memory cache statistics
    pub fn memory_stats(&self) -> (usize, usize) {
        let cache = self.memory_cache.lock().unwrap();
        (cache.len(), self.memory_capacity)
    }
}

/// Global cache manager for the entire application
pub struct CacheManager {
    pub salary_stats: UnifiedCache<SalaryStatsCacheKey, Option<SalaryPoolStats>>,
    pub comp_pools: UnifiedCache<CompPoolCacheKey, Vec<CompCandidate>>,
}

impl CacheManager {
    /// Create a new cache manager with reasonable defaults
    pub fn new() -> Self {
        Self {
            salary_stats: UnifiedCache::new(16), // One entry per ingested season
            comp_pools: UnifiedCache::new(32),   // Season x position pools
        }
    }

    /// Clear all memory caches
    pub fn clear_all_memory(&self) {
        self.salary_stats.clear_memory();
        self.comp_pools.clear_memory();
    }

    /// Drop both tiers of everything derived from the reference tables.
    ///
    /// Called after an ingest run so stale pools don't outlive the data
    /// they were computed from.
    pub fn invalidate_derived(&self) {
        self.clear_all_memory();

        let base = dirs::cache_dir().map(|d| d.join("cbb-nil"));
        let Some(base) = base else { return };
        let Ok(entries) = fs::read_dir(&base) else { return };
        for entry in entries.flatten() {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if name.starts_with("salary_stats_") || name.starts_with("comp_pool_") {
                let _ = fs::remove_file(entry.path());
            }
        }
    }

    /// Get memory usage statistics for all caches
    pub fn memory_stats(&self) -> HashMap<String, (usize, usize)> {
        let mut stats = HashMap::new();
        stats.insert("salary_stats".to_string(), self.salary_stats.memory_stats());
        stats.insert("comp_pools".to_string(), self.comp_pools.memory_stats());
        stats
    }
}

impl Default for CacheManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Global cache manager instance for use across the application
pub static GLOBAL_CACHE: LazyLock<CacheManager> = LazyLock::new(CacheManager::new);
