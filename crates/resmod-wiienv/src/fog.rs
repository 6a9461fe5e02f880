//! Fog files (`.bfog`).
//!
//! A fog file is a 0x14-byte `FOGM` header followed by `n` fog elements of
//! 0x30 bytes each, packed back to back.
//!
//! # Fog element layout
//!
//! | Offset | Size | Field |
//! |---|---|---|
//! | 0x00 | 4 | magic `FOGD` |
//! | 0x04 | 4 | size (always 0x30) |
//! | 0x08 | 1 | version |
//! | 0x09 | 7 | reserved |
//! | 0x10 | 4 | start depth (f32) |
//! | 0x14 | 4 | end depth (f32) |
//! | 0x18 | 8 | two unknown floats |
//! | 0x20 | 4 | colour (RGBA) |
//! | 0x24 | 1 | falloff type (bits 0-2), unknown (bits 3-7) |
//! | 0x25 | 1 | enabled flag |
//! | 0x26 | 10 | reserved |

use resmod_common::{codec, BinaryReader, Magic, Reserved, Rgba};
use tracing::debug;

use crate::record::{self, ensure_len};
use crate::{ChildGroup, Decode, FixedRecord, ResourceNode, Result};

/// Shape of the curve over which fog reaches full effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum FalloffType {
    #[default]
    NoEffect = 0,
    Linear1 = 1,
    Linear2 = 2,
    Linear3 = 3,
    Logarithmic = 4,
    Squared = 5,
    InvertedSquare = 6,
    Ease = 7,
}

impl FalloffType {
    /// Bits of the packed byte holding the falloff type.
    pub const MASK: u8 = 0b0000_0111;

    /// Get all falloff types in encoding order.
    pub const fn all() -> [FalloffType; 8] {
        [
            FalloffType::NoEffect,
            FalloffType::Linear1,
            FalloffType::Linear2,
            FalloffType::Linear3,
            FalloffType::Logarithmic,
            FalloffType::Squared,
            FalloffType::InvertedSquare,
            FalloffType::Ease,
        ]
    }

    /// Decode from the low three bits of `bits`; the rest are ignored.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & Self::MASK {
            0 => FalloffType::NoEffect,
            1 => FalloffType::Linear1,
            2 => FalloffType::Linear2,
            3 => FalloffType::Linear3,
            4 => FalloffType::Logarithmic,
            5 => FalloffType::Squared,
            6 => FalloffType::InvertedSquare,
            _ => FalloffType::Ease,
        }
    }
}

/// A single fog region.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FogElement {
    #[cfg_attr(feature = "serde", serde(skip))]
    magic: Magic,
    #[cfg_attr(feature = "serde", serde(default))]
    name: String,
    #[cfg_attr(feature = "serde", serde(skip))]
    declared_size: u32,
    version: u8,
    reserved1: Reserved<7>,
    start: f32,
    end: f32,
    unknown1: f32,
    unknown2: f32,
    color: Rgba,
    falloff_bits: u8,
    enabled: u8,
    reserved2: Reserved<10>,
}

impl FogElement {
    pub const MAGIC: Magic = Magic::FOGD;
    const KIND: &'static str = "Wii Fog Element";

    const START_OFFSET: usize = 0x10;
    const END_OFFSET: usize = 0x14;
    const UNKNOWN1_OFFSET: usize = 0x18;
    const UNKNOWN2_OFFSET: usize = 0x1C;
    const COLOR_OFFSET: usize = 0x20;
    const FALLOFF_OFFSET: usize = 0x24;
    const ENABLED_OFFSET: usize = 0x25;
    const RESERVED1_OFFSET: usize = 0x09;
    const RESERVED2_OFFSET: usize = 0x26;

    /// Create a new disabled element with no falloff.
    pub fn new() -> Self {
        Self {
            magic: Self::MAGIC,
            name: String::new(),
            declared_size: Self::SIZE as u32,
            version: 0,
            reserved1: Reserved::default(),
            start: 0.0,
            end: 0.0,
            unknown1: 0.0,
            unknown2: 0.0,
            color: Rgba::default(),
            falloff_bits: 0,
            enabled: 0,
            reserved2: Reserved::default(),
        }
    }

    /// Get the tag read at load time.
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

    /// Depth at which the fog starts to take effect.
    pub fn start(&self) -> f32 {
        self.start
    }

    pub fn set_start(&mut self, start: f32) {
        self.start = start;
    }

    /// Depth at which the fog reaches full effect.
    pub fn end(&self) -> f32 {
        self.end
    }

    pub fn set_end(&mut self, end: f32) {
        self.end = end;
    }

    pub fn unknown1(&self) -> f32 {
        self.unknown1
    }

    pub fn set_unknown1(&mut self, value: f32) {
        self.unknown1 = value;
    }

    pub fn unknown2(&self) -> f32 {
        self.unknown2
    }

    pub fn set_unknown2(&mut self, value: f32) {
        self.unknown2 = value;
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }

    /// Curve shape, from the low three bits of the packed byte.
    pub fn falloff(&self) -> FalloffType {
        FalloffType::from_bits(self.falloff_bits)
    }

    /// Set the curve shape; the high five bits are left untouched.
    pub fn set_falloff(&mut self, falloff: FalloffType) {
        self.falloff_bits = (self.falloff_bits & !FalloffType::MASK) | falloff as u8;
    }

    /// The five unnamed high bits of the packed falloff byte.
    pub fn falloff_unknown(&self) -> u8 {
        self.falloff_bits >> 3
    }

    /// Set the five high bits; bits of `value` above the fifth are dropped.
    pub fn set_falloff_unknown(&mut self, value: u8) {
        self.falloff_bits = (self.falloff_bits & FalloffType::MASK) | (value << 3);
    }

    /// The packed falloff byte as stored.
    pub fn falloff_byte(&self) -> u8 {
        self.falloff_bits
    }

    /// Whether this element has any effect at all.
    pub fn enabled(&self) -> bool {
        self.enabled != 0
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled as u8;
    }
}

impl Default for FogElement {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceNode for FogElement {
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
        self.reserved1.write(&mut out, Self::RESERVED1_OFFSET)?;
        codec::write_f32(&mut out, Self::START_OFFSET, self.start)?;
        codec::write_f32(&mut out, Self::END_OFFSET, self.end)?;
        codec::write_f32(&mut out, Self::UNKNOWN1_OFFSET, self.unknown1)?;
        codec::write_f32(&mut out, Self::UNKNOWN2_OFFSET, self.unknown2)?;
        codec::write_rgba(&mut out, Self::COLOR_OFFSET, self.color)?;
        codec::write_u8(&mut out, Self::FALLOFF_OFFSET, self.falloff_bits)?;
        codec::write_u8(&mut out, Self::ENABLED_OFFSET, self.enabled)?;
        self.reserved2.write(&mut out, Self::RESERVED2_OFFSET)?;
        Ok(out)
    }
}

impl Decode for FogElement {
    fn load(data: &[u8]) -> Result<Self> {
        ensure_len("fog element", data, Self::SIZE)?;
        let (magic, declared_size, version) = record::read_prefix("fog element", data, Self::MAGIC)?;

        Ok(Self {
            magic,
            name: String::new(),
            declared_size,
            version,
            reserved1: Reserved::read(data, Self::RESERVED1_OFFSET)?,
            start: codec::read_f32(data, Self::START_OFFSET)?,
            end: codec::read_f32(data, Self::END_OFFSET)?,
            unknown1: codec::read_f32(data, Self::UNKNOWN1_OFFSET)?,
            unknown2: codec::read_f32(data, Self::UNKNOWN2_OFFSET)?,
            color: codec::read_rgba(data, Self::COLOR_OFFSET)?,
            falloff_bits: codec::read_u8(data, Self::FALLOFF_OFFSET)?,
            enabled: codec::read_u8(data, Self::ENABLED_OFFSET)?,
            reserved2: Reserved::read(data, Self::RESERVED2_OFFSET)?,
        })
    }
}

impl FixedRecord for FogElement {
    const SIZE: usize = 0x30;
}

/// A fog file: a list of fog elements.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bfog {
    #[cfg_attr(feature = "serde", serde(skip))]
    magic: Magic,
    #[cfg_attr(feature = "serde", serde(default))]
    name: String,
    #[cfg_attr(feature = "serde", serde(skip))]
    declared_size: u32,
    version: u8,
    reserved1: Reserved<7>,
    #[cfg_attr(feature = "serde", serde(skip))]
    element_count: u16,
    reserved2: Reserved<2>,
    #[cfg_attr(feature = "serde", serde(default, rename = "element"))]
    elements: Vec<FogElement>,
}

impl Bfog {
    pub const MAGIC: Magic = Magic::FOGM;
    /// Header length; elements start here.
    pub const HEADER_SIZE: usize = 0x14;
    const KIND: &'static str = "Wii Fog";

    const RESERVED1_OFFSET: usize = 0x09;
    const COUNT_OFFSET: usize = 0x10;
    const RESERVED2_OFFSET: usize = 0x12;

    /// Create an empty fog file.
    pub fn new() -> Self {
        Self {
            magic: Self::MAGIC,
            name: String::new(),
            declared_size: Self::HEADER_SIZE as u32,
            version: 0,
            reserved1: Reserved::default(),
            element_count: 0,
            reserved2: Reserved::default(),
            elements: Vec::new(),
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

    /// Get the element count field as last loaded or saved.
    pub fn element_count(&self) -> u16 {
        self.element_count
    }

    pub fn elements(&self) -> &[FogElement] {
        &self.elements
    }

    pub fn elements_mut(&mut self) -> &mut Vec<FogElement> {
        &mut self.elements
    }

    /// Append an element, naming it by its position.
    pub fn add_element(&mut self, mut element: FogElement) {
        element.set_name(&format!("Element {}", self.elements.len()));
        self.elements.push(element);
    }
}

impl Default for Bfog {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceNode for Bfog {
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
        Self::HEADER_SIZE as u64 + self.elements.iter().map(|e| e.size()).sum::<u64>()
    }

    fn save(&mut self) -> Result<Vec<u8>> {
        self.magic = Self::MAGIC;
        let parts = record::save_all(&mut self.elements)?;

        let total = Self::HEADER_SIZE + parts.iter().map(Vec::len).sum::<usize>();
        self.declared_size = record::size_field("fog file", total)?;
        self.element_count = record::count_field("fog file", "element count", parts.len())?;

        let mut header = vec![0u8; Self::HEADER_SIZE];
        record::write_prefix(&mut header, self.magic, self.declared_size, self.version)?;
        self.reserved1.write(&mut header, Self::RESERVED1_OFFSET)?;
        codec::write_u16(&mut header, Self::COUNT_OFFSET, self.element_count)?;
        self.reserved2.write(&mut header, Self::RESERVED2_OFFSET)?;

        debug!(name = %self.name, size = total, elements = self.element_count, "saved fog file");
        Ok(record::concat(header, &parts))
    }

    fn child_groups(&self) -> Vec<ChildGroup<'_>> {
        vec![ChildGroup::new("Elements", &self.elements)]
    }
}

impl Decode for Bfog {
    fn load(data: &[u8]) -> Result<Self> {
        ensure_len("fog file", data, Self::HEADER_SIZE)?;
        let (magic, declared_size, version) = record::read_prefix("fog file", data, Self::MAGIC)?;
        let element_count = codec::read_u16(data, Self::COUNT_OFFSET)?;

        let extent = Self::HEADER_SIZE + element_count as usize * FogElement::SIZE;
        ensure_len("fog file", data, extent)?;

        debug!(size = declared_size, elements = element_count, "loading fog file");
        let mut reader = BinaryReader::new_at(data, Self::HEADER_SIZE);
        let elements = record::load_fixed_children(&mut reader, element_count, "Element")?;

        Ok(Self {
            magic,
            name: String::new(),
            declared_size,
            version,
            reserved1: Reserved::read(data, Self::RESERVED1_OFFSET)?,
            element_count,
            reserved2: Reserved::read(data, Self::RESERVED2_OFFSET)?,
            elements,
        })
    }
}
