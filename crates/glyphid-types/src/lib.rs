//! Shared value types for glyphid.
//!
//! This crate contains the types produced by identicon derivation:
//! Rgb, GridSize, Grid, Identicon, the raw Digest, and their error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod color;
pub mod config;
pub mod error;
pub mod grid;
pub mod identicon;

/// Length in bytes of the name digest (SHA-256).
pub const DIGEST_LEN: usize = 32;

/// Raw digest of a UTF-8 encoded name.
pub type Digest = [u8; DIGEST_LEN];
