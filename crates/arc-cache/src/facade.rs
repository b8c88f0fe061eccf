//! # CacheFacade
//!
//! The public, thread-safe entry point described in SPEC_FULL.md Section
//! 4.3 and exposed as the "library surface" in Section 6.
//!
//! Thin by design: all replacement-policy logic lives in [`ArcCore`]. This
//! module only adds handle bookkeeping, locking, and the logging boundary.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::core::ArcCore;
use crate::error::CacheError;

/// An opaque reference to a cache instance held by a [`CacheFacade`].
///
/// A small `Copy` index, never a raw pointer, per SPEC_FULL.md's design
/// notes on process-wide state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CacheHandle(u64);

/// Which of the four lists (or the adaptation target) a `debug` call asks
/// for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugWhich {
    /// Resident recency list.
    T1,
    /// Resident frequency list.
    T2,
    /// Ghost keys recently evicted from `T1`.
    B1,
    /// Ghost keys recently evicted from `T2`.
    B2,
    /// The adaptation target `p`.
    Target,
}

/// The result of a `debug` call: resident entries (with values), ghost
/// keys, or the integer target, each in LRU→MRU order where applicable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebugValue<K, V> {
    /// `(key, value)` pairs from `T1` or `T2`, LRU → MRU.
    Resident(Vec<(K, V)>),
    /// Keys from `B1` or `B2`, LRU → MRU.
    Ghost(Vec<K>),
    /// The current value of `p`.
    Target(usize),
}

struct Instance<K: Ord + Clone, V> {
    name: String,
    core: RwLock<ArcCore<K, V>>,
}

/// A registry of independently-locked, named ARC cache instances behind
/// opaque handles.
///
/// Mutating operations (`put`, `update`, `delete`, touching `get`) take a
/// write lock on the target instance; non-touching reads and `debug` take a
/// read lock, so they may run concurrently with each other per
/// SPEC_FULL.md Section 5.
pub struct CacheFacade<K: Ord + Clone, V> {
    instances: RwLock<BTreeMap<u64, Arc<Instance<K, V>>>>,
    next_id: AtomicU64,
}

impl<K: Ord + Clone, V> Default for CacheFacade<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Clone, V> CacheFacade<K, V> {
    /// Create an empty facade with no cache instances yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            instances: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(0),
        }
    }

    fn instance(&self, handle: CacheHandle) -> Result<Arc<Instance<K, V>>, CacheError> {
        self.instances
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(&handle.0)
            .cloned()
            .ok_or(CacheError::UnknownHandle(handle))
    }

    /// Create a new named cache instance with the given positive capacity.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidCapacity`] if `capacity == 0`.
    pub fn create(&self, name: impl Into<String>, capacity: usize) -> Result<CacheHandle, CacheError> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity(capacity));
        }

        let name = name.into();
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let instance = Arc::new(Instance {
            name: name.clone(),
            core: RwLock::new(ArcCore::new(capacity)),
        });

        self.instances
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(id, instance);

        tracing::debug!(handle = id, name = %name, capacity, "arc_cache instance created");
        Ok(CacheHandle(id))
    }

    /// Close an instance, releasing its handle. Later operations against it
    /// return [`CacheError::UnknownHandle`].
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::UnknownHandle`] if `handle` is unknown or
    /// already closed.
    pub fn close(&self, handle: CacheHandle) -> Result<(), CacheError> {
        let removed = self
            .instances
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .remove(&handle.0);

        match removed {
            Some(instance) => {
                tracing::debug!(handle = handle.0, name = %instance.name, "arc_cache instance closed");
                Ok(())
            }
            None => Err(CacheError::UnknownHandle(handle)),
        }
    }

    /// Insert or refresh `key` with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::UnknownHandle`] if `handle` is unknown.
    pub fn put(&self, handle: CacheHandle, key: K, value: V) -> Result<(), CacheError> {
        let instance = self.instance(handle)?;
        instance
            .core
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .put(key, value);
        Ok(())
    }

    /// Read `key`. `touch = false` is a non-mutating peek that may run
    /// concurrently with other reads; `touch = true` promotes the entry and
    /// serializes with other mutators.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::UnknownHandle`] if `handle` is unknown.
    pub fn get(&self, handle: CacheHandle, key: &K, touch: bool) -> Result<Option<V>, CacheError>
    where
        V: Clone,
    {
        let instance = self.instance(handle)?;
        if touch {
            let mut core = instance
                .core
                .write()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            Ok(core.get(key).cloned())
        } else {
            let core = instance
                .core
                .read()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            Ok(core.peek(key).cloned())
        }
    }

    /// Replace the value for `key` if resident; no-op if absent.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::UnknownHandle`] if `handle` is unknown.
    pub fn update(&self, handle: CacheHandle, key: &K, value: V, touch: bool) -> Result<bool, CacheError> {
        let instance = self.instance(handle)?;
        Ok(instance
            .core
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .update(key, value, touch))
    }

    /// Remove `key` from whichever list holds it.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::UnknownHandle`] if `handle` is unknown.
    pub fn delete(&self, handle: CacheHandle, key: &K) -> Result<bool, CacheError> {
        let instance = self.instance(handle)?;
        Ok(instance
            .core
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .delete(key))
    }

    /// Inspect one of the four lists, or the adaptation target.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::UnknownHandle`] if `handle` is unknown.
    pub fn debug(&self, handle: CacheHandle, which: DebugWhich) -> Result<DebugValue<K, V>, CacheError>
    where
        K: Clone,
        V: Clone,
    {
        let instance = self.instance(handle)?;
        let core = instance
            .core
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        Ok(match which {
            DebugWhich::T1 => DebugValue::Resident(
                core.t1_iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
            ),
            DebugWhich::T2 => DebugValue::Resident(
                core.t2_iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
            ),
            DebugWhich::B1 => DebugValue::Ghost(core.b1_iter().cloned().collect()),
            DebugWhich::B2 => DebugValue::Ghost(core.b2_iter().cloned().collect()),
            DebugWhich::Target => DebugValue::Target(core.target()),
        })
    }
}
