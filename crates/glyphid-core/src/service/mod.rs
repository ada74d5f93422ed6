//! Services (use cases).
//!
//! Services orchestrate hashing and derivation. They depend on traits
//! (ports) -- never on concrete infrastructure implementations.

pub mod hash;
pub mod identicon;
