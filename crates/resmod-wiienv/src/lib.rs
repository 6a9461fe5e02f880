//! Wii environment resource codecs.
//!
//! Reads and writes the fog, light, and light map files a Wii engine uses to
//! describe a scene's environment. Each file decodes to a tree of records that
//! can be edited and saved back to bytes.
//!
//! | Format | Extension | Root | Children |
//! |---|---|---|---|
//! | Fog | `.bfog` | [`Bfog`] (`FOGM`) | [`FogElement`] (`FOGD`) |
//! | Light | `.blight` | [`Blight`] (`LGHT`) | [`LightObject`] (`LOBJ`), [`AmbientLight`] |
//! | Light map | `.blmap` | [`Blmap`] (`LMAP`) | [`LightTexture`] (`LTEX`) → [`LightTextureEntry`] |
//!
//! All multi-byte scalars are big-endian. Bytes whose meaning is unknown are
//! kept as loaded and written back unchanged, so an unedited tree saves to
//! the bytes it was loaded from.
//!
//! # Example
//!
//! ```no_run
//! use resmod_wiienv::{Format, ResourceNode};
//!
//! let data = std::fs::read("course.blight")?;
//! let mut light = Format::Light.load(&data)?;
//! for child in light.children() {
//!     println!("{} ({})", child.name(), child.kind());
//! }
//! assert_eq!(light.save()?, data);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod node;
mod record;
mod resource;

pub mod fog;
pub mod light;
pub mod lmap;

pub use error::{Error, Result};
pub use node::{ChildGroup, Decode, FixedRecord, ResourceNode};
pub use resource::{Format, Resource};

// Re-export commonly used types at crate root
pub use fog::{Bfog, FalloffType, FogElement};
pub use light::{AmbientLight, Blight, LightObject, LightType};
pub use lmap::{Blmap, LightTexture, LightTextureEntry};
