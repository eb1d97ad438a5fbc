//! Bloxel Core
//!
//! Shared primitives for the Bloxel GUI crates: integer rectangles, math
//! re-exports, hash collections, the generational arena that owns controls,
//! logging bootstrap and profiling hooks.

pub mod alloc;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
