//! Identicon derivation and service trait definitions for glyphid.
//!
//! This crate maps a name digest to a color and mirrored grid, and defines
//! the `NameHasher` port that infrastructure implements. It depends only on
//! `glyphid-types` -- never on `glyphid-infra` or any hashing crate.

pub mod derive;
pub mod service;
