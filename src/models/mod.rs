//! Data models for registered identities.

pub mod identity;

pub use identity::*;
