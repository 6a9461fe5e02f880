//! Resmod - Wii environment resource editing library.
//!
//! This crate provides a unified interface to the resmod crates for
//! inspecting, converting, and rewriting fog, light, and light map files.
//!
//! # Crates
//!
//! - [`resmod_common`] - Common utilities (big-endian codecs, reserved bytes, inline names)
//! - [`resmod_wiienv`] - Fog (`.bfog`), light (`.blight`), and light map (`.blmap`) codecs
//!
//! # Example
//!
//! ```no_run
//! use resmod::prelude::*;
//!
//! let registry = Registry::builtin();
//! let mut resource = registry.load_path("course.blmap")?;
//! print!("{}", resmod::tree::render(&resource));
//!
//! let xml = resmod::export::to_xml(&resource)?;
//! std::fs::write("course.blmap.xml", xml)?;
//! std::fs::write("course.resaved.blmap", resource.save()?)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;

#[cfg(feature = "serde")]
pub mod export;
pub mod registry;
pub mod tree;

// Re-export all sub-crates
pub use resmod_common as common;
pub use resmod_wiienv as wiienv;

pub use error::{Error, Result};
pub use registry::{FormatEntry, Registry};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::registry::Registry;
    pub use resmod_common::{Magic, Rgba, Vec3};
    pub use resmod_wiienv::{
        AmbientLight, Bfog, Blight, Blmap, FalloffType, FogElement, Format, LightObject,
        LightTexture, LightTextureEntry, LightType, Resource, ResourceNode,
    };
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
