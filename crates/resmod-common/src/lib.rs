//! Common utilities for resmod.
//!
//! This crate provides foundational types and utilities used across all resmod crates:
//!
//! - [`codec`] - Big-endian primitive readers and writers at fixed offsets
//! - [`BinaryReader`] - Cursor for walking sequential child records
//! - [`Rgba`], [`Vec3`], [`Magic`] - Packed value types shared by record layouts
//! - [`Reserved`], [`InlineName`] - Opaque byte ranges preserved across load/save
//! - [`math`] - `lerp` / `inverse_lerp` / `range` remapping

mod error;
mod reader;
mod reserved;
mod types;

pub mod codec;
pub mod math;

pub use error::{Error, Result};
pub use reader::BinaryReader;
pub use reserved::{InlineName, Reserved};
pub use types::{Magic, Rgba, Vec3};

/// Re-export zerocopy traits for convenience
pub use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};
