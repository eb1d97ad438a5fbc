//! Math types re-exported from [`glam`].
//!
//! Control geometry is integral (pixel positions and sizes), so the GUI crates
//! mostly use [`IVec2`]. Text measurement and scroll offsets are fractional and
//! use [`Vec2`].
//!
//! ```
//! use bloxel_core::math::{IVec2, Vec2};
//!
//! let position = IVec2::new(10, 20);
//! let measured = Vec2::new(42.5, 14.0);
//! assert_eq!(position.as_vec2() + measured, Vec2::new(52.5, 34.0));
//! ```
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::{IVec2, Vec2, ivec2, vec2};
