//! # Domain Models
//!
//! Plain data shared by every `SheetWise` crate: configuration, API metadata constants,
//! and the feature slice registry. Only `serde` is allowed here.

pub mod config;
pub mod constants;
pub mod registry;
