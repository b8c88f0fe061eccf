//! # arc-cache
//!
//! An in-memory, bounded Adaptive Replacement Cache (ARC): a self-tuning
//! key/value store that adapts in real time between a recency (LRU) and a
//! frequency (LFU) eviction discipline based on the observed access
//! pattern, per Megiddo & Modha (2003).
//!
//! ## Layering
//!
//! - [`ordered_list`] — the two-index recency-ordered container each of the
//!   four internal lists is built on.
//! - [`core`] — [`ArcCore`], the replacement-policy state machine: the four
//!   lists, the adaptation target, and `get`/`put`/`update`/`delete`.
//! - [`facade`] — [`CacheFacade`], the public, thread-safe, handle-based
//!   entry point a host process actually talks to.
//!
//! ## Quick Start
//!
//! ```
//! use arc_cache::{CacheFacade, DebugWhich, DebugValue};
//!
//! let cache: CacheFacade<u64, &str> = CacheFacade::new();
//! let handle = cache.create("sessions", 1000)?;
//!
//! cache.put(handle, 1, "alice")?;
//! assert_eq!(cache.get(handle, &1, true)?, Some("alice"));
//!
//! assert_eq!(cache.debug(handle, DebugWhich::Target)?, DebugValue::Target(0));
//! # Ok::<(), arc_cache::CacheError>(())
//! ```
//!
//! Persistence, distributed coherence, TTL-based expiration, and weighted
//! entries are explicitly out of scope — see SPEC_FULL.md.

pub mod core;
pub mod error;
pub mod facade;
pub mod ordered_list;

pub use crate::core::ArcCore;
pub use crate::error::CacheError;
pub use crate::facade::{CacheFacade, CacheHandle, DebugValue, DebugWhich};
pub use crate::ordered_list::{GhostList, OrderedList};
