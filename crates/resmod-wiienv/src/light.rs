//! Light files (`.blight`).
//!
//! A light file is a 0x28-byte `LGHT` header, then `nLOBJ` light objects of
//! 0x50 bytes each, then `nALs` ambient lights of 8 bytes each.
//!
//! # Light file header
//!
//! | Offset | Size | Field |
//! |---|---|---|
//! | 0x00 | 4 | magic `LGHT` |
//! | 0x04 | 4 | total size |
//! | 0x08 | 1 | version |
//! | 0x09 | 3 | reserved |
//! | 0x0C | 4 | unknown |
//! | 0x10 | 2 | light object count |
//! | 0x12 | 2 | ambient light count |
//! | 0x14 | 4 | four unknown bytes |
//! | 0x18 | 16 | reserved |

use resmod_common::{codec, BinaryReader, Magic, Reserved, Rgba, Vec3};
use tracing::debug;

use crate::record::{self, ensure_len};
use crate::{ChildGroup, Decode, Error, FixedRecord, ResourceNode, Result};

/// How a light object projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum LightType {
    #[default]
    Unused = 0,
    Point2D = 1,
    Point3D = 2,
    FixedFront = 3,
    FixedBack = 4,
}

impl TryFrom<u8> for LightType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(LightType::Unused),
            1 => Ok(LightType::Point2D),
            2 => Ok(LightType::Point3D),
            3 => Ok(LightType::FixedFront),
            4 => Ok(LightType::FixedBack),
            _ => Err(Error::InvalidEncoding {
                field: "light type",
                value: value.to_string(),
            }),
        }
    }
}

/// A positioned light source.
///
/// # Layout
///
/// | Offset | Size | Field |
/// |---|---|---|
/// | 0x00 | 4 | magic `LOBJ` |
/// | 0x04 | 4 | size (0x50) |
/// | 0x08 | 1 | version |
/// | 0x09 | 3 | reserved |
/// | 0x0C | 4 | unknown1 |
/// | 0x10 | 2 | unknown2 |
/// | 0x12 | 1 | light type |
/// | 0x13 | 1 | unknown3 |
/// | 0x14 | 2 | KCL collision id |
/// | 0x16 | 2 | unknown4 |
/// | 0x18 | 12 | origin |
/// | 0x24 | 12 | destination |
/// | 0x30 | 4 | intensity |
/// | 0x34 | 4 | colour |
/// | 0x38 | 4 | unknown5 |
/// | 0x3C | 12 | unknown6..8 (f32) |
/// | 0x48 | 8 | unknown9 (i64) |
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LightObject {
    #[cfg_attr(feature = "serde", serde(skip))]
    magic: Magic,
    #[cfg_attr(feature = "serde", serde(default))]
    name: String,
    #[cfg_attr(feature = "serde", serde(skip))]
    declared_size: u32,
    version: u8,
    reserved: Reserved<3>,
    unknown1: u32,
    unknown2: u16,
    light_type: u8,
    unknown3: u8,
    kcl_id: u16,
    unknown4: u16,
    origin: Vec3,
    destination: Vec3,
    intensity: f32,
    color: Rgba,
    unknown5: u32,
    unknown6: f32,
    unknown7: f32,
    unknown8: f32,
    unknown9: i64,
}

impl LightObject {
    pub const MAGIC: Magic = Magic::LOBJ;
    const KIND: &'static str = "Wii Light Object";
    const DEFAULT_VERSION: u8 = 2;

    const RESERVED_OFFSET: usize = 0x09;
    const UNKNOWN1_OFFSET: usize = 0x0C;
    const UNKNOWN2_OFFSET: usize = 0x10;
    const TYPE_OFFSET: usize = 0x12;
    const UNKNOWN3_OFFSET: usize = 0x13;
    const KCL_OFFSET: usize = 0x14;
    const UNKNOWN4_OFFSET: usize = 0x16;
    const ORIGIN_OFFSET: usize = 0x18;
    const DESTINATION_OFFSET: usize = 0x24;
    const INTENSITY_OFFSET: usize = 0x30;
    const COLOR_OFFSET: usize = 0x34;
    const UNKNOWN5_OFFSET: usize = 0x38;
    const UNKNOWN6_OFFSET: usize = 0x3C;
    const UNKNOWN7_OFFSET: usize = 0x40;
    const UNKNOWN8_OFFSET: usize = 0x44;
    const UNKNOWN9_OFFSET: usize = 0x48;

    /// Create a new unused light.
    pub fn new() -> Self {
        Self {
            magic: Self::MAGIC,
            name: String::new(),
            declared_size: Self::SIZE as u32,
            version: Self::DEFAULT_VERSION,
            reserved: Reserved::default(),
            unknown1: 0,
            unknown2: 0,
            light_type: LightType::Unused as u8,
            unknown3: 0,
            kcl_id: 0,
            unknown4: 0,
            origin: Vec3::default(),
            destination: Vec3::default(),
            intensity: 0.0,
            color: Rgba::default(),
            unknown5: 0,
            unknown6: 0.0,
            unknown7: 0.0,
            unknown8: 0.0,
            unknown9: 0,
        }
    }

    pub fn magic(&self) -> Magic {
        self.magic
    }

    /// Get the size field as last loaded or saved.
    pub fn declared_size(&self) -> u32 {
        self.declared_size
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    /// Decode the light type byte.
    pub fn light_type(&self) -> Result<LightType> {
        LightType::try_from(self.light_type)
    }

    pub fn set_light_type(&mut self, light_type: LightType) {
        self.light_type = light_type as u8;
    }

    /// The light type byte as stored.
    pub fn light_type_byte(&self) -> u8 {
        self.light_type
    }

    /// Collision model id this light is attached to.
    pub fn kcl_id(&self) -> u16 {
        self.kcl_id
    }

    pub fn set_kcl_id(&mut self, id: u16) {
        self.kcl_id = id;
    }

    /// Position of the light.
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn set_origin(&mut self, origin: Vec3) {
        self.origin = origin;
    }

    /// Point the light is aimed at.
    pub fn destination(&self) -> Vec3 {
        self.destination
    }

    pub fn set_destination(&mut self, destination: Vec3) {
        self.destination = destination;
    }

    /// Brightness of the light.
    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn set_intensity(&mut self, intensity: f32) {
        self.intensity = intensity;
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }

    pub fn unknown1(&self) -> u32 {
        self.unknown1
    }

    pub fn set_unknown1(&mut self, value: u32) {
        self.unknown1 = value;
    }

    pub fn unknown2(&self) -> u16 {
        self.unknown2
    }

    pub fn set_unknown2(&mut self, value: u16) {
        self.unknown2 = value;
    }

    pub fn unknown3(&self) -> u8 {
        self.unknown3
    }

    pub fn set_unknown3(&mut self, value: u8) {
        self.unknown3 = value;
    }

    pub fn unknown4(&self) -> u16 {
        self.unknown4
    }

    pub fn set_unknown4(&mut self, value: u16) {
        self.unknown4 = value;
    }

    pub fn unknown5(&self) -> u32 {
        self.unknown5
    }

    pub fn set_unknown5(&mut self, value: u32) {
        self.unknown5 = value;
    }

    pub fn unknown6(&self) -> f32 {
        self.unknown6
    }

    pub fn set_unknown6(&mut self, value: f32) {
        self.unknown6 = value;
    }

    pub fn unknown7(&self) -> f32 {
        self.unknown7
    }

    pub fn set_unknown7(&mut self, value: f32) {
        self.unknown7 = value;
    }

    pub fn unknown8(&self) -> f32 {
        self.unknown8
    }

    pub fn set_unknown8(&mut self, value: f32) {
        self.unknown8 = value;
    }

    pub fn unknown9(&self) -> i64 {
        self.unknown9
    }

    pub fn set_unknown9(&mut self, value: i64) {
        self.unknown9 = value;
    }
}

impl Default for LightObject {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceNode for LightObject {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    fn size(&self) -> u64 {
        Self::SIZE as u64
    }

    fn save(&mut self) -> Result<Vec<u8>> {
        self.magic = Self::MAGIC;
        self.declared_size = Self::SIZE as u32;

        let mut out = vec![0u8; Self::SIZE];
        record::write_prefix(&mut out, self.magic, self.declared_size, self.version)?;
        self.reserved.write(&mut out, Self::RESERVED_OFFSET)?;
        codec::write_u32(&mut out, Self::UNKNOWN1_OFFSET, self.unknown1)?;
        codec::write_u16(&mut out, Self::UNKNOWN2_OFFSET, self.unknown2)?;
        codec::write_u8(&mut out, Self::TYPE_OFFSET, self.light_type)?;
        codec::write_u8(&mut out, Self::UNKNOWN3_OFFSET, self.unknown3)?;
        codec::write_u16(&mut out, Self::KCL_OFFSET, self.kcl_id)?;
        codec::write_u16(&mut out, Self::UNKNOWN4_OFFSET, self.unknown4)?;
        codec::write_vec3(&mut out, Self::ORIGIN_OFFSET, self.origin)?;
        codec::write_vec3(&mut out, Self::DESTINATION_OFFSET, self.destination)?;
        codec::write_f32(&mut out, Self::INTENSITY_OFFSET, self.intensity)?;
        codec::write_rgba(&mut out, Self::COLOR_OFFSET, self.color)?;
        codec::write_u32(&mut out, Self::UNKNOWN5_OFFSET, self.unknown5)?;
        codec::write_f32(&mut out, Self::UNKNOWN6_OFFSET, self.unknown6)?;
        codec::write_f32(&mut out, Self::UNKNOWN7_OFFSET, self.unknown7)?;
        codec::write_f32(&mut out, Self::UNKNOWN8_OFFSET, self.unknown8)?;
        codec::write_i64(&mut out, Self::UNKNOWN9_OFFSET, self.unknown9)?;
        Ok(out)
    }
}

impl Decode for LightObject {
    fn load(data: &[u8]) -> Result<Self> {
        ensure_len("light object", data, Self::SIZE)?;
        let (magic, declared_size, version) = record::read_prefix("light object", data, Self::MAGIC)?;

        Ok(Self {
            magic,
            name: String::new(),
            declared_size,
            version,
            reserved: Reserved::read(data, Self::RESERVED_OFFSET)?,
            unknown1: codec::read_u32(data, Self::UNKNOWN1_OFFSET)?,
            unknown2: codec::read_u16(data, Self::UNKNOWN2_OFFSET)?,
            light_type: codec::read_u8(data, Self::TYPE_OFFSET)?,
            unknown3: codec::read_u8(data, Self::UNKNOWN3_OFFSET)?,
            kcl_id: codec::read_u16(data, Self::KCL_OFFSET)?,
            unknown4: codec::read_u16(data, Self::UNKNOWN4_OFFSET)?,
            origin: codec::read_vec3(data, Self::ORIGIN_OFFSET)?,
            destination: codec::read_vec3(data, Self::DESTINATION_OFFSET)?,
            intensity: codec::read_f32(data, Self::INTENSITY_OFFSET)?,
            color: codec::read_rgba(data, Self::COLOR_OFFSET)?,
            unknown5: codec::read_u32(data, Self::UNKNOWN5_OFFSET)?,
            unknown6: codec::read_f32(data, Self::UNKNOWN6_OFFSET)?,
            unknown7: codec::read_f32(data, Self::UNKNOWN7_OFFSET)?,
            unknown8: codec::read_f32(data, Self::UNKNOWN8_OFFSET)?,
            unknown9: codec::read_i64(data, Self::UNKNOWN9_OFFSET)?,
        })
    }
}

impl FixedRecord for LightObject {
    const SIZE: usize = 0x50;
}

/// A scene-wide ambient colour that light textures can reference by index.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AmbientLight {
    #[cfg_attr(feature = "serde", serde(default))]
    name: String,
    color: Rgba,
    unknown: u32,
}

impl AmbientLight {
    const KIND: &'static str = "Wii Ambient Light";
    const UNKNOWN_OFFSET: usize = 0x04;

    pub fn new(color: Rgba) -> Self {
        Self {
            name: String::new(),
            color,
            unknown: 0,
        }
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }

    pub fn unknown(&self) -> u32 {
        self.unknown
    }

    pub fn set_unknown(&mut self, value: u32) {
        self.unknown = value;
    }
}

impl ResourceNode for AmbientLight {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    fn size(&self) -> u64 {
        Self::SIZE as u64
    }

    fn save(&mut self) -> Result<Vec<u8>> {
        let mut out = vec![0u8; Self::SIZE];
        codec::write_rgba(&mut out, 0, self.color)?;
        codec::write_u32(&mut out, Self::UNKNOWN_OFFSET, self.unknown)?;
        Ok(out)
    }
}

impl Decode for AmbientLight {
    fn load(data: &[u8]) -> Result<Self> {
        ensure_len("ambient light", data, Self::SIZE)?;
        Ok(Self {
            name: String::new(),
            color: codec::read_rgba(data, 0)?,
            unknown: codec::read_u32(data, Self::UNKNOWN_OFFSET)?,
        })
    }
}

impl FixedRecord for AmbientLight {
    const SIZE: usize = 0x08;
}

/// A light file: light objects followed by ambient lights.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Blight {
    #[cfg_attr(feature = "serde", serde(skip))]
    magic: Magic,
    #[cfg_attr(feature = "serde", serde(default))]
    name: String,
    #[cfg_attr(feature = "serde", serde(skip))]
    declared_size: u32,
    version: u8,
    reserved1: Reserved<3>,
    unknown1: u32,
    #[cfg_attr(feature = "serde", serde(skip))]
    light_object_count: u16,
    #[cfg_attr(feature = "serde", serde(skip))]
    ambient_light_count: u16,
    unknown2: u8,
    unknown3: u8,
    unknown4: u8,
    unknown5: u8,
    reserved2: Reserved<16>,
    #[cfg_attr(feature = "serde", serde(default, rename = "light_object"))]
    light_objects: Vec<LightObject>,
    #[cfg_attr(feature = "serde", serde(default, rename = "ambient_light"))]
    ambient_lights: Vec<AmbientLight>,
}

impl Blight {
    pub const MAGIC: Magic = Magic::LGHT;
    /// Header length; light objects start here.
    pub const HEADER_SIZE: usize = 0x28;
    const KIND: &'static str = "Wii Light Data";
    const DEFAULT_VERSION: u8 = 2;

    const RESERVED1_OFFSET: usize = 0x09;
    const UNKNOWN1_OFFSET: usize = 0x0C;
    const LIGHT_COUNT_OFFSET: usize = 0x10;
    const AMBIENT_COUNT_OFFSET: usize = 0x12;
    const UNKNOWN2_OFFSET: usize = 0x14;
    const UNKNOWN3_OFFSET: usize = 0x15;
    const UNKNOWN4_OFFSET: usize = 0x16;
    const UNKNOWN5_OFFSET: usize = 0x17;
    const RESERVED2_OFFSET: usize = 0x18;

    /// Create an empty light file.
    pub fn new() -> Self {
        Self {
            magic: Self::MAGIC,
            name: String::new(),
            declared_size: Self::HEADER_SIZE as u32,
            version: Self::DEFAULT_VERSION,
            reserved1: Reserved::default(),
            unknown1: 0,
            light_object_count: 0,
            ambient_light_count: 0,
            unknown2: 0,
            unknown3: 0,
            unknown4: 0,
            unknown5: 0,
            reserved2: Reserved::default(),
            light_objects: Vec::new(),
            ambient_lights: Vec::new(),
        }
    }

    pub fn magic(&self) -> Magic {
        self.magic
    }

    /// Get the size field as last loaded or saved.
    pub fn declared_size(&self) -> u32 {
        self.declared_size
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    /// Get the light object count field as last loaded or saved.
    pub fn light_object_count(&self) -> u16 {
        self.light_object_count
    }

    /// Get the ambient light count field as last loaded or saved.
    pub fn ambient_light_count(&self) -> u16 {
        self.ambient_light_count
    }

    pub fn unknown1(&self) -> u32 {
        self.unknown1
    }

    pub fn set_unknown1(&mut self, value: u32) {
        self.unknown1 = value;
    }

    /// The four unknown header bytes at 0x14..0x18.
    pub fn unknown_bytes(&self) -> [u8; 4] {
        [self.unknown2, self.unknown3, self.unknown4, self.unknown5]
    }

    pub fn set_unknown_bytes(&mut self, bytes: [u8; 4]) {
        [self.unknown2, self.unknown3, self.unknown4, self.unknown5] = bytes;
    }

    pub fn light_objects(&self) -> &[LightObject] {
        &self.light_objects
    }

    pub fn light_objects_mut(&mut self) -> &mut Vec<LightObject> {
        &mut self.light_objects
    }

    pub fn ambient_lights(&self) -> &[AmbientLight] {
        &self.ambient_lights
    }

    pub fn ambient_lights_mut(&mut self) -> &mut Vec<AmbientLight> {
        &mut self.ambient_lights
    }

    /// Append a light object, naming it by its position.
    pub fn add_light_object(&mut self, mut light: LightObject) {
        light.set_name(&format!("Light {}", self.light_objects.len()));
        self.light_objects.push(light);
    }

    /// Append an ambient light, naming it by its position.
    pub fn add_ambient_light(&mut self, mut ambient: AmbientLight) {
        ambient.set_name(&format!("Ambient Light {}", self.ambient_lights.len()));
        self.ambient_lights.push(ambient);
    }
}

impl Default for Blight {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceNode for Blight {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    fn size(&self) -> u64 {
        Self::HEADER_SIZE as u64
            + self.light_objects.iter().map(|l| l.size()).sum::<u64>()
            + self.ambient_lights.iter().map(|a| a.size()).sum::<u64>()
    }

    fn save(&mut self) -> Result<Vec<u8>> {
        self.magic = Self::MAGIC;
        let mut parts = record::save_all(&mut self.light_objects)?;
        let light_count = parts.len();
        parts.extend(record::save_all(&mut self.ambient_lights)?);

        let total = Self::HEADER_SIZE + parts.iter().map(Vec::len).sum::<usize>();
        self.declared_size = record::size_field("light file", total)?;
        self.light_object_count = record::count_field("light file", "light object count", light_count)?;
        self.ambient_light_count =
            record::count_field("light file", "ambient light count", parts.len() - light_count)?;

        let mut header = vec![0u8; Self::HEADER_SIZE];
        record::write_prefix(&mut header, self.magic, self.declared_size, self.version)?;
        self.reserved1.write(&mut header, Self::RESERVED1_OFFSET)?;
        codec::write_u32(&mut header, Self::UNKNOWN1_OFFSET, self.unknown1)?;
        codec::write_u16(&mut header, Self::LIGHT_COUNT_OFFSET, self.light_object_count)?;
        codec::write_u16(&mut header, Self::AMBIENT_COUNT_OFFSET, self.ambient_light_count)?;
        codec::write_u8(&mut header, Self::UNKNOWN2_OFFSET, self.unknown2)?;
        codec::write_u8(&mut header, Self::UNKNOWN3_OFFSET, self.unknown3)?;
        codec::write_u8(&mut header, Self::UNKNOWN4_OFFSET, self.unknown4)?;
        codec::write_u8(&mut header, Self::UNKNOWN5_OFFSET, self.unknown5)?;
        self.reserved2.write(&mut header, Self::RESERVED2_OFFSET)?;

        debug!(
            name = %self.name,
            size = total,
            lights = self.light_object_count,
            ambients = self.ambient_light_count,
            "saved light file"
        );
        Ok(record::concat(header, &parts))
    }

    fn child_groups(&self) -> Vec<ChildGroup<'_>> {
        vec![
            ChildGroup::new("Light Objects", &self.light_objects),
            ChildGroup::new("Ambient Lights", &self.ambient_lights),
        ]
    }
}

impl Decode for Blight {
    fn load(data: &[u8]) -> Result<Self> {
        ensure_len("light file", data, Self::HEADER_SIZE)?;
        let (magic, declared_size, version) = record::read_prefix("light file", data, Self::MAGIC)?;
        let light_object_count = codec::read_u16(data, Self::LIGHT_COUNT_OFFSET)?;
        let ambient_light_count = codec::read_u16(data, Self::AMBIENT_COUNT_OFFSET)?;

        let extent = Self::HEADER_SIZE
            + light_object_count as usize * LightObject::SIZE
            + ambient_light_count as usize * AmbientLight::SIZE;
        ensure_len("light file", data, extent)?;

        debug!(
            size = declared_size,
            lights = light_object_count,
            ambients = ambient_light_count,
            "loading light file"
        );
        let mut reader = BinaryReader::new_at(data, Self::HEADER_SIZE);
        let light_objects = record::load_fixed_children(&mut reader, light_object_count, "Light")?;
        let ambient_lights =
            record::load_fixed_children(&mut reader, ambient_light_count, "Ambient Light")?;

        Ok(Self {
            magic,
            name: String::new(),
            declared_size,
            version,
            reserved1: Reserved::read(data, Self::RESERVED1_OFFSET)?,
            unknown1: codec::read_u32(data, Self::UNKNOWN1_OFFSET)?,
            light_object_count,
            ambient_light_count,
            unknown2: codec::read_u8(data, Self::UNKNOWN2_OFFSET)?,
            unknown3: codec::read_u8(data, Self::UNKNOWN3_OFFSET)?,
            unknown4: codec::read_u8(data, Self::UNKNOWN4_OFFSET)?,
            unknown5: codec::read_u8(data, Self::UNKNOWN5_OFFSET)?,
            reserved2: Reserved::read(data, Self::RESERVED2_OFFSET)?,
            light_objects,
            ambient_lights,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn light_object_bytes(light_type: u8, kcl: u16) -> Vec<u8> {
        let mut data = vec![0u8; 0x50];
        data[0..4].copy_from_slice(b"LOBJ");
        data[4..8].copy_from_slice(&0x50u32.to_be_bytes());
        data[8] = 2;
        data[0x0C..0x10].copy_from_slice(&0xCAFEBABEu32.to_be_bytes());
        data[0x12] = light_type;
        data[0x14..0x16].copy_from_slice(&kcl.to_be_bytes());
        data[0x18..0x1C].copy_from_slice(&1.0f32.to_be_bytes());
        data[0x1C..0x20].copy_from_slice(&(-2.0f32).to_be_bytes());
        data[0x20..0x24].copy_from_slice(&3.5f32.to_be_bytes());
        data[0x2C..0x30].copy_from_slice(&(-100.0f32).to_be_bytes());
        data[0x30..0x34].copy_from_slice(&0.75f32.to_be_bytes());
        data[0x34..0x38].copy_from_slice(&[0xFF, 0x80, 0x40, 0xFF]);
        data[0x48..0x50].copy_from_slice(&(-5i64).to_be_bytes());
        data
    }

    fn light_file_bytes(lights: &[Vec<u8>], ambients: &[[u8; 8]]) -> Vec<u8> {
        let mut data = vec![0u8; 0x28];
        data[0..4].copy_from_slice(b"LGHT");
        data[8] = 2;
        data[0x10..0x12].copy_from_slice(&(lights.len() as u16).to_be_bytes());
        data[0x12..0x14].copy_from_slice(&(ambients.len() as u16).to_be_bytes());
        data[0x14..0x18].copy_from_slice(&[1, 2, 3, 4]);
        data[0x20] = 0xEE; // reserved
        for light in lights {
            data.extend_from_slice(light);
        }
        for ambient in ambients {
            data.extend_from_slice(ambient);
        }
        let total = data.len() as u32;
        data[4..8].copy_from_slice(&total.to_be_bytes());
        data
    }

    #[test]
    fn test_load_light_object() {
        let light = LightObject::load(&light_object_bytes(2, 17)).unwrap();

        assert_eq!(light.version(), 2);
        assert_eq!(light.unknown1(), 0xCAFEBABE);
        assert_eq!(light.light_type().unwrap(), LightType::Point3D);
        assert_eq!(light.kcl_id(), 17);
        assert_eq!(light.origin(), Vec3::new(1.0, -2.0, 3.5));
        assert_eq!(light.destination().z, -100.0);
        assert_eq!(light.intensity(), 0.75);
        assert_eq!(light.color(), Rgba::new(0xFF, 0x80, 0x40, 0xFF));
        assert_eq!(light.unknown9(), -5);
    }

    #[test]
    fn test_unknown_light_type_is_value_error() {
        let mut light = LightObject::load(&light_object_bytes(9, 0)).unwrap();
        assert!(matches!(
            light.light_type(),
            Err(Error::InvalidEncoding { field: "light type", .. })
        ));
        assert_eq!(light.save().unwrap()[0x12], 9);

        light.set_light_type(LightType::FixedBack);
        assert_eq!(light.light_type_byte(), 4);
    }

    #[test]
    fn test_light_file_layout() {
        let ambient = [0x11, 0x22, 0x33, 0x44, 0x00, 0x00, 0x01, 0x00];
        let data = light_file_bytes(
            &[light_object_bytes(1, 0), light_object_bytes(3, 5)],
            &[ambient],
        );
        let mut file = Blight::load(&data).unwrap();

        assert_eq!(file.light_object_count(), 2);
        assert_eq!(file.ambient_light_count(), 1);
        assert_eq!(file.unknown_bytes(), [1, 2, 3, 4]);
        assert_eq!(file.light_objects()[1].kcl_id(), 5);
        assert_eq!(file.ambient_lights()[0].color(), Rgba::new(0x11, 0x22, 0x33, 0x44));
        assert_eq!(file.ambient_lights()[0].unknown(), 0x100);

        let names: Vec<_> = file.children().iter().map(|c| c.name()).collect();
        assert_eq!(names, ["Light 0", "Light 1", "Ambient Light 0"]);

        let groups = file.child_groups();
        assert_eq!(groups[0].label, "Light Objects");
        assert_eq!(groups[1].nodes.len(), 1);

        let saved = file.save().unwrap();
        assert_eq!(saved.len(), 0x28 + 2 * 0x50 + 8);
        assert_eq!(saved, data);
    }

    #[test]
    fn test_save_after_edit() {
        let data = light_file_bytes(&[light_object_bytes(1, 0)], &[]);
        let mut file = Blight::load(&data).unwrap();

        file.light_objects_mut()[0].set_intensity(2.0);
        file.add_ambient_light(AmbientLight::new(Rgba::white()));
        file.set_unknown_bytes([9, 9, 9, 9]);

        let saved = file.save().unwrap();
        assert_eq!(saved.len() as u64, file.size());
        assert_eq!(&saved[0x12..0x14], &[0, 1]);
        assert_eq!(&saved[0x14..0x18], &[9, 9, 9, 9]);
        assert_eq!(saved[0x20], 0xEE);

        let reloaded = Blight::load(&saved).unwrap();
        assert_eq!(reloaded.light_objects()[0].intensity(), 2.0);
        assert_eq!(reloaded.ambient_lights()[0].name(), "Ambient Light 0");
        assert_eq!(reloaded.ambient_lights()[0].color(), Rgba::white());
    }

    #[test]
    fn test_truncated_ambient_region() {
        let mut data = light_file_bytes(&[light_object_bytes(1, 0)], &[]);
        data[0x13] = 1; // one ambient light that is not there
        assert!(Blight::load(&data).unwrap_err().is_truncated());
    }

    #[test]
    fn test_save_restamps_object_size() {
        let mut data = light_object_bytes(1, 0);
        data[4..8].copy_from_slice(&0x60u32.to_be_bytes());
        let mut light = LightObject::load(&data).unwrap();
        assert_eq!(light.declared_size(), 0x60);

        let saved = light.save().unwrap();
        assert_eq!(&saved[4..8], &0x50u32.to_be_bytes());
        assert_eq!(light.declared_size(), 0x50);
        assert_eq!(&saved[8..], &data[8..]);
    }

    #[test]
    fn test_new_defaults() {
        let mut light = LightObject::new();
        assert_eq!(light.version(), 2);
        assert_eq!(light.declared_size(), 0x50);

        let bytes = light.save().unwrap();
        assert_eq!(&bytes[0..4], b"LOBJ");
        assert_eq!(bytes.len(), 0x50);
        assert_eq!(Blight::new().version(), 2);
    }
}
