//! # Error Type
//!
//! Typed failures at the `CacheFacade` boundary. Per SPEC_FULL.md Section 7,
//! `ArcCore` itself is infallible; misuse is only detectable once a handle
//! or a capacity value is involved, which is exactly the facade's job.

use thiserror::Error;

use crate::facade::CacheHandle;

/// Errors surfaced by [`crate::facade::CacheFacade`].
#[derive(Debug, Error)]
pub enum CacheError {
    /// `create` was called with a capacity of zero.
    #[error("cache capacity must be a positive integer, got {0}")]
    InvalidCapacity(usize),

    /// An operation referenced a handle that was never issued, or has
    /// already been closed.
    #[error("unknown or closed cache handle: {0:?}")]
    UnknownHandle(CacheHandle),
}
