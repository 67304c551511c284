//! # Search Store Shared
//!
//! Shared types for the search store client system. These are plain data
//! types with no dependency on any store SDK, so they can cross crate
//! boundaries freely.

pub mod metadata;
pub mod refresh;

pub use metadata::IndexMetadata;
pub use refresh::RefreshPolicy;
