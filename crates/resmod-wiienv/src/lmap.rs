//! Light map files (`.blmap`).
//!
//! A light map is a 0x20-byte `LMAP` header followed by `nTex` light
//! textures. Light textures vary in size, so each one starts where the
//! previous one's declared size ends.
//!
//! # Light texture layout
//!
//! | Offset | Size | Field |
//! |---|---|---|
//! | 0x00 | 4 | magic `LTEX` |
//! | 0x04 | 4 | total size |
//! | 0x08 | 1 | version |
//! | 0x09 | 7 | reserved |
//! | 0x10 | 2 | entry count |
//! | 0x12 | 1 | ambient enabled |
//! | 0x13 | 1 | ambient light id |
//! | 0x14 | 40 | texture name, zero-terminated |
//! | 0x3C | 4 | ambient intensity (f32) |
//! | 0x40 | 8 | reserved |
//! | 0x48 | 8 × n | entries |

use resmod_common::{codec, math, BinaryReader, InlineName, Magic, Reserved};
use tracing::{debug, trace};

use crate::record::{self, ensure_len};
use crate::{ChildGroup, Decode, Error, FixedRecord, ResourceNode, Result};

/// Largest raw spread byte with a defined meaning.
pub const SPREAD_RAW_MAX: u8 = 13;

const SPREAD_STEP_MIN: f32 = -7.0;
const SPREAD_STEP_MAX: f32 = 6.0;
const SPREAD_BIAS: i32 = 14;

/// Decode a raw spread byte to the normalised 1.0 (widest) .. 0.0 range.
///
/// Bytes 0..=6 are steps 0..=6; bytes 7..=13 are steps -7..=-1 stored
/// biased by 14. Anything larger has no inverse and is rejected.
pub fn decode_spread(raw: u8) -> Result<f32> {
    if raw > SPREAD_RAW_MAX {
        return Err(Error::InvalidEncoding {
            field: "spread",
            value: raw.to_string(),
        });
    }

    let mut step = raw as i32;
    if step > SPREAD_STEP_MAX as i32 {
        step -= SPREAD_BIAS;
    }
    Ok(math::range(SPREAD_STEP_MIN, SPREAD_STEP_MAX, 1.0, 0.0, step as f32))
}

/// Encode a normalised spread value to its raw byte.
///
/// The value is mapped onto the -7..=6 step range and rounded to the
/// nearest step, halves to even, before negative steps are biased.
pub fn encode_spread(value: f32) -> Result<u8> {
    let step = math::round_half_even(math::range(1.0, 0.0, SPREAD_STEP_MIN, SPREAD_STEP_MAX, value));
    if !(SPREAD_STEP_MIN..=SPREAD_STEP_MAX).contains(&step) {
        return Err(Error::InvalidEncoding {
            field: "spread",
            value: value.to_string(),
        });
    }

    let mut step = step as i32;
    if step < 0 {
        step += SPREAD_BIAS;
    }
    Ok(step as u8)
}

/// How one light affects a light texture.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LightTextureEntry {
    #[cfg_attr(feature = "serde", serde(default))]
    name: String,
    intensity: f32,
    spread: u8,
    enabled: u8,
    reserved: Reserved<2>,
}

impl LightTextureEntry {
    const KIND: &'static str = "Wii Light Texture Entry";

    const SPREAD_OFFSET: usize = 0x04;
    const ENABLED_OFFSET: usize = 0x05;
    const RESERVED_OFFSET: usize = 0x06;

    pub fn new() -> Self {
        Self::default()
    }

    /// How strongly the light affects the texture.
    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn set_intensity(&mut self, intensity: f32) {
        self.intensity = intensity;
    }

    /// How far the light spreads across the sphere, 1.0 widest.
    pub fn spread(&self) -> Result<f32> {
        decode_spread(self.spread)
    }

    /// Set the spread. Values that round outside the step range are
    /// rejected and the stored byte is left unchanged.
    pub fn set_spread(&mut self, spread: f32) -> Result<()> {
        self.spread = encode_spread(spread)?;
        Ok(())
    }

    /// The spread byte as stored.
    pub fn spread_raw(&self) -> u8 {
        self.spread
    }

    pub fn set_spread_raw(&mut self, raw: u8) {
        self.spread = raw;
    }

    /// Whether this light is applied; disabled entries are ignored.
    pub fn enabled(&self) -> bool {
        self.enabled != 0
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled as u8;
    }
}

impl ResourceNode for LightTextureEntry {
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
        codec::write_f32(&mut out, 0, self.intensity)?;
        codec::write_u8(&mut out, Self::SPREAD_OFFSET, self.spread)?;
        codec::write_u8(&mut out, Self::ENABLED_OFFSET, self.enabled)?;
        self.reserved.write(&mut out, Self::RESERVED_OFFSET)?;
        Ok(out)
    }
}

impl Decode for LightTextureEntry {
    fn load(data: &[u8]) -> Result<Self> {
        ensure_len("light texture entry", data, Self::SIZE)?;
        Ok(Self {
            name: String::new(),
            intensity: codec::read_f32(data, 0)?,
            spread: codec::read_u8(data, Self::SPREAD_OFFSET)?,
            enabled: codec::read_u8(data, Self::ENABLED_OFFSET)?,
            reserved: Reserved::read(data, Self::RESERVED_OFFSET)?,
        })
    }
}

impl FixedRecord for LightTextureEntry {
    const SIZE: usize = 0x08;
}

/// A named light texture and the entries that light it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LightTexture {
    #[cfg_attr(feature = "serde", serde(skip))]
    magic: Magic,
    #[cfg_attr(feature = "serde", serde(skip))]
    declared_size: u32,
    version: u8,
    reserved1: Reserved<7>,
    #[cfg_attr(feature = "serde", serde(skip))]
    entry_count: u16,
    ambient_enabled: u8,
    ambient_id: u8,
    name: InlineName<0x28>,
    ambient_intensity: f32,
    reserved2: Reserved<8>,
    #[cfg_attr(feature = "serde", serde(default, rename = "entry"))]
    entries: Vec<LightTextureEntry>,
}

impl LightTexture {
    pub const MAGIC: Magic = Magic::LTEX;
    /// Header length; entries start here.
    pub const HEADER_SIZE: usize = 0x48;
    const KIND: &'static str = "Wii Light Texture";
    const DEFAULT_VERSION: u8 = 2;

    const RESERVED1_OFFSET: usize = 0x09;
    const COUNT_OFFSET: usize = 0x10;
    const AMBIENT_ENABLED_OFFSET: usize = 0x12;
    const AMBIENT_ID_OFFSET: usize = 0x13;
    const NAME_OFFSET: usize = 0x14;
    const AMBIENT_INTENSITY_OFFSET: usize = 0x3C;
    const RESERVED2_OFFSET: usize = 0x40;

    /// Create an empty light texture with the given name.
    pub fn new(name: &str) -> Self {
        let mut texture = Self {
            magic: Self::MAGIC,
            declared_size: Self::HEADER_SIZE as u32,
            version: Self::DEFAULT_VERSION,
            reserved1: Reserved::default(),
            entry_count: 0,
            ambient_enabled: 0,
            ambient_id: 0,
            name: InlineName::default(),
            ambient_intensity: 0.0,
            reserved2: Reserved::default(),
            entries: Vec::new(),
        };
        texture.name.set(name);
        texture
    }

    pub fn magic(&self) -> Magic {
        self.magic
    }

    /// Get the size field as last loaded or saved.
    ///
    /// A light map advances by this amount to find the next texture.
    pub fn declared_size(&self) -> u32 {
        self.declared_size
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    /// Get the entry count field as last loaded or saved.
    pub fn entry_count(&self) -> u16 {
        self.entry_count
    }

    /// Ambient lighting flag byte as stored.
    pub fn ambient_enabled(&self) -> u8 {
        self.ambient_enabled
    }

    pub fn set_ambient_enabled(&mut self, value: u8) {
        self.ambient_enabled = value;
    }

    /// Index of the ambient light this texture uses.
    pub fn ambient_id(&self) -> u8 {
        self.ambient_id
    }

    pub fn set_ambient_id(&mut self, id: u8) {
        self.ambient_id = id;
    }

    /// How strongly the ambient light affects this texture.
    pub fn ambient_intensity(&self) -> f32 {
        self.ambient_intensity
    }

    pub fn set_ambient_intensity(&mut self, intensity: f32) {
        self.ambient_intensity = intensity;
    }

    pub fn entries(&self) -> &[LightTextureEntry] {
        &self.entries
    }

    pub fn entries_mut(&mut self) -> &mut Vec<LightTextureEntry> {
        &mut self.entries
    }

    /// Append an entry, naming it by its position.
    pub fn add_entry(&mut self, mut entry: LightTextureEntry) {
        entry.set_name(&format!("Entry {}", self.entries.len()));
        self.entries.push(entry);
    }
}

impl ResourceNode for LightTexture {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn name(&self) -> String {
        self.name.get()
    }

    fn set_name(&mut self, name: &str) {
        self.name.set(name);
    }

    fn size(&self) -> u64 {
        Self::HEADER_SIZE as u64 + self.entries.iter().map(|e| e.size()).sum::<u64>()
    }

    fn save(&mut self) -> Result<Vec<u8>> {
        self.magic = Self::MAGIC;
        let parts = record::save_all(&mut self.entries)?;

        let total = Self::HEADER_SIZE + parts.iter().map(Vec::len).sum::<usize>();
        self.declared_size = record::size_field("light texture", total)?;
        self.entry_count = record::count_field("light texture", "entry count", parts.len())?;

        let mut header = vec![0u8; Self::HEADER_SIZE];
        record::write_prefix(&mut header, self.magic, self.declared_size, self.version)?;
        self.reserved1.write(&mut header, Self::RESERVED1_OFFSET)?;
        codec::write_u16(&mut header, Self::COUNT_OFFSET, self.entry_count)?;
        codec::write_u8(&mut header, Self::AMBIENT_ENABLED_OFFSET, self.ambient_enabled)?;
        codec::write_u8(&mut header, Self::AMBIENT_ID_OFFSET, self.ambient_id)?;
        self.name.write(&mut header, Self::NAME_OFFSET)?;
        codec::write_f32(&mut header, Self::AMBIENT_INTENSITY_OFFSET, self.ambient_intensity)?;
        self.reserved2.write(&mut header, Self::RESERVED2_OFFSET)?;

        Ok(record::concat(header, &parts))
    }

    fn child_groups(&self) -> Vec<ChildGroup<'_>> {
        vec![ChildGroup::new("Entries", &self.entries)]
    }
}

impl Decode for LightTexture {
    fn load(data: &[u8]) -> Result<Self> {
        ensure_len("light texture", data, Self::HEADER_SIZE)?;
        let (magic, declared_size, version) = record::read_prefix("light texture", data, Self::MAGIC)?;
        let entry_count = codec::read_u16(data, Self::COUNT_OFFSET)?;

        let extent = Self::HEADER_SIZE + entry_count as usize * LightTextureEntry::SIZE;
        ensure_len("light texture", data, extent)?;

        let name = InlineName::read(data, Self::NAME_OFFSET)?;
        trace!(name = %name.get(), size = declared_size, entries = entry_count, "loading light texture");

        let mut reader = BinaryReader::new_at(data, Self::HEADER_SIZE);
        let entries = record::load_fixed_children(&mut reader, entry_count, "Entry")?;

        Ok(Self {
            magic,
            declared_size,
            version,
            reserved1: Reserved::read(data, Self::RESERVED1_OFFSET)?,
            entry_count,
            ambient_enabled: codec::read_u8(data, Self::AMBIENT_ENABLED_OFFSET)?,
            ambient_id: codec::read_u8(data, Self::AMBIENT_ID_OFFSET)?,
            name,
            ambient_intensity: codec::read_f32(data, Self::AMBIENT_INTENSITY_OFFSET)?,
            reserved2: Reserved::read(data, Self::RESERVED2_OFFSET)?,
            entries,
        })
    }
}

/// A light map: a list of light textures.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Blmap {
    #[cfg_attr(feature = "serde", serde(skip))]
    magic: Magic,
    #[cfg_attr(feature = "serde", serde(default))]
    name: String,
    #[cfg_attr(feature = "serde", serde(skip))]
    declared_size: u32,
    version: u8,
    reserved1: Reserved<7>,
    #[cfg_attr(feature = "serde", serde(skip))]
    texture_count: u16,
    reserved2: Reserved<14>,
    #[cfg_attr(feature = "serde", serde(default, rename = "light_texture"))]
    light_textures: Vec<LightTexture>,
}

impl Blmap {
    pub const MAGIC: Magic = Magic::LMAP;
    /// Header length; the first light texture starts here.
    pub const HEADER_SIZE: usize = 0x20;
    const KIND: &'static str = "Wii Light Map";

    const RESERVED1_OFFSET: usize = 0x09;
    const COUNT_OFFSET: usize = 0x10;
    const RESERVED2_OFFSET: usize = 0x12;

    /// Create an empty light map.
    pub fn new() -> Self {
        Self {
            magic: Self::MAGIC,
            name: String::new(),
            declared_size: Self::HEADER_SIZE as u32,
            version: 0,
            reserved1: Reserved::default(),
            texture_count: 0,
            reserved2: Reserved::default(),
            light_textures: Vec::new(),
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

    /// Get the texture count field as last loaded or saved.
    pub fn texture_count(&self) -> u16 {
        self.texture_count
    }

    pub fn light_textures(&self) -> &[LightTexture] {
        &self.light_textures
    }

    pub fn light_textures_mut(&mut self) -> &mut Vec<LightTexture> {
        &mut self.light_textures
    }

    pub fn add_light_texture(&mut self, texture: LightTexture) {
        self.light_textures.push(texture);
    }
}

impl Default for Blmap {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceNode for Blmap {
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
        Self::HEADER_SIZE as u64 + self.light_textures.iter().map(|t| t.size()).sum::<u64>()
    }

    fn save(&mut self) -> Result<Vec<u8>> {
        self.magic = Self::MAGIC;
        let parts = record::save_all(&mut self.light_textures)?;

        let total = Self::HEADER_SIZE + parts.iter().map(Vec::len).sum::<usize>();
        self.declared_size = record::size_field("light map", total)?;
        self.texture_count = record::count_field("light map", "texture count", parts.len())?;

        let mut header = vec![0u8; Self::HEADER_SIZE];
        record::write_prefix(&mut header, self.magic, self.declared_size, self.version)?;
        self.reserved1.write(&mut header, Self::RESERVED1_OFFSET)?;
        codec::write_u16(&mut header, Self::COUNT_OFFSET, self.texture_count)?;
        self.reserved2.write(&mut header, Self::RESERVED2_OFFSET)?;

        debug!(name = %self.name, size = total, textures = self.texture_count, "saved light map");
        Ok(record::concat(header, &parts))
    }

    fn child_groups(&self) -> Vec<ChildGroup<'_>> {
        vec![ChildGroup::new("Light Textures", &self.light_textures)]
    }
}

impl Decode for Blmap {
    fn load(data: &[u8]) -> Result<Self> {
        ensure_len("light map", data, Self::HEADER_SIZE)?;
        let (magic, declared_size, version) = record::read_prefix("light map", data, Self::MAGIC)?;
        let texture_count = codec::read_u16(data, Self::COUNT_OFFSET)?;

        debug!(size = declared_size, textures = texture_count, "loading light map");
        let mut reader = BinaryReader::new_at(data, Self::HEADER_SIZE);
        let mut light_textures = Vec::with_capacity(texture_count as usize);
        for index in 0..texture_count {
            let offset = reader.position();
            let texture = LightTexture::load(reader.remaining_bytes())?;
            let step = texture.declared_size() as usize;
            reader.advance(step).map_err(|_| Error::TruncatedInput {
                record: "light map",
                needed: offset + step,
                available: data.len(),
            })?;
            trace!(offset, index, step, "decoded light texture");
            light_textures.push(texture);
        }

        Ok(Self {
            magic,
            name: String::new(),
            declared_size,
            version,
            reserved1: Reserved::read(data, Self::RESERVED1_OFFSET)?,
            texture_count,
            reserved2: Reserved::read(data, Self::RESERVED2_OFFSET)?,
            light_textures,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_bytes(intensity: f32, spread: u8, enabled: u8) -> [u8; 8] {
        let mut data = [0u8; 8];
        data[0..4].copy_from_slice(&intensity.to_be_bytes());
        data[4] = spread;
        data[5] = enabled;
        data[7] = 0x77; // reserved
        data
    }

    fn texture_bytes(name: &[u8], entries: &[[u8; 8]]) -> Vec<u8> {
        let mut data = vec![0u8; 0x48];
        data[0..4].copy_from_slice(b"LTEX");
        data[4..8].copy_from_slice(&((0x48 + entries.len() * 8) as u32).to_be_bytes());
        data[8] = 2;
        data[0x10..0x12].copy_from_slice(&(entries.len() as u16).to_be_bytes());
        data[0x12] = 1;
        data[0x13] = 3;
        data[0x14..0x14 + name.len()].copy_from_slice(name);
        data[0x3C..0x40].copy_from_slice(&0.5f32.to_be_bytes());
        data[0x47] = 0x99; // reserved
        for entry in entries {
            data.extend_from_slice(entry);
        }
        data
    }

    fn map_bytes(textures: &[Vec<u8>]) -> Vec<u8> {
        let mut data = vec![0u8; 0x20];
        data[0..4].copy_from_slice(b"LMAP");
        data[0x10..0x12].copy_from_slice(&(textures.len() as u16).to_be_bytes());
        data[0x1F] = 0x31; // reserved
        for texture in textures {
            data.extend_from_slice(texture);
        }
        let total = data.len() as u32;
        data[4..8].copy_from_slice(&total.to_be_bytes());
        data
    }

    #[test]
    fn test_spread_roundtrip_all_representable() {
        for raw in 0..=SPREAD_RAW_MAX {
            let value = decode_spread(raw).unwrap();
            assert_eq!(encode_spread(value).unwrap(), raw, "raw {}", raw);
        }
    }

    #[test]
    fn test_spread_endpoints() {
        // step -7 (raw 7) is the widest spread, step 6 the narrowest
        assert_eq!(decode_spread(7).unwrap(), 1.0);
        assert_eq!(decode_spread(6).unwrap(), 0.0);
        assert_eq!(encode_spread(1.0).unwrap(), 7);
        assert_eq!(encode_spread(0.0).unwrap(), 6);
    }

    #[test]
    fn test_spread_midpoints_round_to_even() {
        // 0.5 maps to step -0.5 exactly, which rounds to step 0, not -1
        assert_eq!(encode_spread(0.5).unwrap(), 0);

        let mut entry = LightTextureEntry::new();
        entry.set_spread(0.5).unwrap();
        assert_eq!(entry.spread_raw(), 0);
    }

    #[test]
    fn test_spread_out_of_range() {
        assert!(matches!(
            decode_spread(14),
            Err(Error::InvalidEncoding { field: "spread", .. })
        ));
        assert!(encode_spread(2.0).is_err());
        assert!(encode_spread(-0.5).is_err());
        assert!(encode_spread(f32::NAN).is_err());
    }

    #[test]
    fn test_entry_invalid_spread_still_loads() {
        let original = entry_bytes(1.0, 200, 1);
        let mut entry = LightTextureEntry::load(&original).unwrap();
        assert!(entry.spread().is_err());
        assert_eq!(entry.save().unwrap(), original);

        assert!(entry.set_spread(5.0).is_err());
        assert_eq!(entry.spread_raw(), 200);

        entry.set_spread(1.0).unwrap();
        assert_eq!(entry.spread_raw(), 7);
    }

    #[test]
    fn test_texture_name_inline() {
        let data = texture_bytes(b"lm_course", &[]);
        let mut texture = LightTexture::load(&data).unwrap();
        assert_eq!(texture.name(), "lm_course");

        texture.set_name(&"x".repeat(64));
        let saved = texture.save().unwrap();
        assert_eq!(texture.name().len(), 0x27);
        assert_eq!(saved[0x14 + 0x26], b'x');
        assert_eq!(saved[0x14 + 0x27], 0);
    }

    #[test]
    fn test_single_texture_three_entries() {
        let texture = texture_bytes(
            b"tex0",
            &[
                entry_bytes(1.0, 0, 1),
                entry_bytes(0.5, 10, 0),
                entry_bytes(0.25, 6, 1),
            ],
        );
        let data = map_bytes(&[texture]);
        let mut map = Blmap::load(&data).unwrap();

        let textures = map.children();
        assert_eq!(textures.len(), 1);
        assert_eq!(textures[0].name(), "tex0");
        assert_eq!(textures[0].size(), 0x60);

        let entries = textures[0].children();
        assert_eq!(entries.len(), 3);
        assert!(entries.iter().all(|e| e.children().is_empty()));
        assert_eq!(entries[2].name(), "Entry 2");

        let tex = &map.light_textures()[0];
        assert_eq!(tex.ambient_id(), 3);
        assert_eq!(tex.ambient_intensity(), 0.5);
        assert_eq!(tex.entries()[1].spread().unwrap(), decode_spread(10).unwrap());
        assert!(!tex.entries()[1].enabled());

        assert_eq!(map.save().unwrap(), data);
    }

    #[test]
    fn test_variable_size_walk() {
        let first = texture_bytes(b"a", &[entry_bytes(1.0, 0, 1), entry_bytes(2.0, 1, 1)]);
        let second = texture_bytes(b"b", &[entry_bytes(3.0, 2, 1)]);
        let data = map_bytes(&[first, second]);

        let mut map = Blmap::load(&data).unwrap();
        assert_eq!(map.texture_count(), 2);
        assert_eq!(map.light_textures()[0].entries().len(), 2);
        assert_eq!(map.light_textures()[1].name(), "b");
        assert_eq!(map.light_textures()[1].entries()[0].intensity(), 3.0);

        map.light_textures_mut()[0].entries_mut().pop();
        let saved = map.save().unwrap();
        assert_eq!(saved.len(), 0x20 + 0x50 + 0x50);
        assert_eq!(map.declared_size() as usize, saved.len());
        assert_eq!(map.light_textures()[0].entry_count(), 1);

        let reloaded = Blmap::load(&saved).unwrap();
        assert_eq!(reloaded.light_textures()[1].name(), "b");
    }

    #[test]
    fn test_declared_size_past_end_is_truncated() {
        let mut texture = texture_bytes(b"a", &[]);
        texture[4..8].copy_from_slice(&0x100u32.to_be_bytes());
        let data = map_bytes(&[texture]);
        assert!(matches!(
            Blmap::load(&data),
            Err(Error::TruncatedInput { record: "light map", .. })
        ));
    }

    #[test]
    fn test_truncated_texture_entries() {
        let mut texture = texture_bytes(b"a", &[entry_bytes(1.0, 0, 1)]);
        texture.truncate(0x4C);
        let data = map_bytes(&[texture]);
        assert!(Blmap::load(&data).unwrap_err().is_truncated());
    }

    #[test]
    fn test_new_texture_defaults() {
        let mut texture = LightTexture::new("fresh");
        texture.add_entry(LightTextureEntry::new());
        let saved = texture.save().unwrap();
        assert_eq!(saved.len(), 0x50);
        assert_eq!(saved[8], 2);
        assert_eq!(&saved[0x14..0x19], b"fresh");
        assert_eq!(texture.entries()[0].name(), "Entry 0");
    }
}
