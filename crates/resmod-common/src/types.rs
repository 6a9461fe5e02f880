//! Packed value types shared by record layouts.

use std::fmt;

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// An 8-bit-per-channel colour stored as four bytes: red, green, blue, alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Encoded size in bytes.
    pub const SIZE: usize = 4;

    /// Create a new colour.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque white.
    pub const fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

/// Three single-precision floats, used for light positions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    /// Encoded size in bytes.
    pub const SIZE: usize = 12;

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Four-byte tag at the start of every headed record.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(transparent)]
pub struct Magic(pub [u8; 4]);

impl Magic {
    /// Fog element.
    pub const FOGD: Self = Self(*b"FOGD");
    /// Fog file.
    pub const FOGM: Self = Self(*b"FOGM");
    /// Light object.
    pub const LOBJ: Self = Self(*b"LOBJ");
    /// Light file.
    pub const LGHT: Self = Self(*b"LGHT");
    /// Light texture.
    pub const LTEX: Self = Self(*b"LTEX");
    /// Light map.
    pub const LMAP: Self = Self(*b"LMAP");

    /// The tag read as a little-endian integer, the form used in format tables.
    pub const fn as_u32_le(&self) -> u32 {
        u32::from_le_bytes(self.0)
    }
}

impl fmt::Debug for Magic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Magic({:?})", String::from_utf8_lossy(&self.0))
    }
}

impl fmt::Display for Magic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}
