//! Whole-file resources and the formats that produce them.

use std::fmt;

use resmod_common::Magic;

use crate::{Bfog, Blight, Blmap, ChildGroup, Decode, ResourceNode, Result};

/// One of the supported environment file formats.
///
/// The format of a buffer is always chosen by the caller, usually from the
/// file extension; bytes are never sniffed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Fog,
    Light,
    LightMap,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Fog, Format::Light, Format::LightMap];

    /// Short identifier used on the command line.
    pub const fn id(self) -> &'static str {
        match self {
            Format::Fog => "fog",
            Format::Light => "light",
            Format::LightMap => "lightmap",
        }
    }

    /// Display type of the root record.
    pub const fn type_name(self) -> &'static str {
        match self {
            Format::Fog => "Wii Fog",
            Format::Light => "Wii Light Data",
            Format::LightMap => "Wii Light Map",
        }
    }

    /// Conventional file extension, without the dot.
    pub const fn extension(self) -> &'static str {
        match self {
            Format::Fog => "bfog",
            Format::Light => "blight",
            Format::LightMap => "blmap",
        }
    }

    /// Tag of the root record.
    pub const fn magic(self) -> Magic {
        match self {
            Format::Fog => Bfog::MAGIC,
            Format::Light => Blight::MAGIC,
            Format::LightMap => Blmap::MAGIC,
        }
    }

    /// Decode `data` as this format.
    pub fn load(self, data: &[u8]) -> Result<Resource> {
        Ok(match self {
            Format::Fog => Resource::Fog(Bfog::load(data)?),
            Format::Light => Resource::Light(Blight::load(data)?),
            Format::LightMap => Resource::LightMap(Blmap::load(data)?),
        })
    }

    /// A new resource of this format with no children.
    pub fn empty(self) -> Resource {
        match self {
            Format::Fog => Resource::Fog(Bfog::new()),
            Format::Light => Resource::Light(Blight::new()),
            Format::LightMap => Resource::LightMap(Blmap::new()),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A decoded environment file of any supported format.
#[derive(Debug, Clone, PartialEq)]
pub enum Resource {
    Fog(Bfog),
    Light(Blight),
    LightMap(Blmap),
}

impl Resource {
    pub fn format(&self) -> Format {
        match self {
            Resource::Fog(_) => Format::Fog,
            Resource::Light(_) => Format::Light,
            Resource::LightMap(_) => Format::LightMap,
        }
    }

    /// Size field of the root header as last loaded or saved.
    pub fn declared_size(&self) -> u32 {
        match self {
            Resource::Fog(r) => r.declared_size(),
            Resource::Light(r) => r.declared_size(),
            Resource::LightMap(r) => r.declared_size(),
        }
    }

    fn node(&self) -> &dyn ResourceNode {
        match self {
            Resource::Fog(r) => r,
            Resource::Light(r) => r,
            Resource::LightMap(r) => r,
        }
    }

    fn node_mut(&mut self) -> &mut dyn ResourceNode {
        match self {
            Resource::Fog(r) => r,
            Resource::Light(r) => r,
            Resource::LightMap(r) => r,
        }
    }
}

impl From<Bfog> for Resource {
    fn from(value: Bfog) -> Self {
        Resource::Fog(value)
    }
}

impl From<Blight> for Resource {
    fn from(value: Blight) -> Self {
        Resource::Light(value)
    }
}

impl From<Blmap> for Resource {
    fn from(value: Blmap) -> Self {
        Resource::LightMap(value)
    }
}

impl ResourceNode for Resource {
    fn kind(&self) -> &'static str {
        self.node().kind()
    }

    fn name(&self) -> String {
        self.node().name()
    }

    fn set_name(&mut self, name: &str) {
        self.node_mut().set_name(name);
    }

    fn size(&self) -> u64 {
        self.node().size()
    }

    fn save(&mut self) -> Result<Vec<u8>> {
        self.node_mut().save()
    }

    fn child_groups(&self) -> Vec<ChildGroup<'_>> {
        self.node().child_groups()
    }
}
