//! Allocation and collection types for Bloxel.
//!
//! This module provides:
//! - Re-exports of optimized hash collections using AHash
//! - [`Arena`], a generational slot map handing out stable [`SlotId`]s

pub mod arena;

pub use arena::{Arena, SlotId};

// Re-export optimized hash collections
pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};
