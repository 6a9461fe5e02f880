//! Opaque byte ranges carried through load and save.
//!
//! Record headers contain padding and undocumented bytes that no accessor
//! names. They are captured verbatim at decode time and written back at the
//! same relative offset, so untouched files re-encode byte for byte.

use std::fmt;

use crate::{codec, Error, Result};

/// A fixed-width run of bytes with no known meaning.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reserved<const N: usize>(pub [u8; N]);

impl<const N: usize> Reserved<N> {
    /// Width of the range in bytes.
    pub const LEN: usize = N;

    /// Capture `N` bytes starting at `offset`.
    pub fn read(buf: &[u8], offset: usize) -> Result<Self> {
        codec::read_array::<N>(buf, offset).map(Self)
    }

    /// Write the captured bytes back at `offset`.
    pub fn write(&self, buf: &mut [u8], offset: usize) -> Result<()> {
        codec::write_bytes(buf, offset, &self.0)
    }

    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    /// Check if every byte is zero.
    pub fn is_zeroed(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    fn to_hex(&self) -> String {
        let mut s = String::with_capacity(N * 2);
        for b in &self.0 {
            s.push_str(&format!("{:02x}", b));
        }
        s
    }

    fn from_hex(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidEncoding {
            field: "reserved bytes",
            value: s.to_string(),
        };

        if s.len() != N * 2 || !s.is_ascii() {
            return Err(invalid());
        }

        let mut bytes = [0u8; N];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16).map_err(|_| invalid())?;
        }
        Ok(Self(bytes))
    }
}

impl<const N: usize> Default for Reserved<N> {
    fn default() -> Self {
        Self([0u8; N])
    }
}

impl<const N: usize> fmt::Debug for Reserved<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reserved({})", self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<const N: usize> serde::Serialize for Reserved<N> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de, const N: usize> serde::Deserialize<'de> for Reserved<N> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// A name stored inline in a record as a fixed-width, zero-terminated field.
///
/// Reading stops at the first zero byte. Writing touches only the first
/// `N - 1` bytes so the final byte keeps whatever terminator it had.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct InlineName<const N: usize>(pub [u8; N]);

impl<const N: usize> InlineName<N> {
    /// Width of the field in bytes.
    pub const LEN: usize = N;

    pub fn read(buf: &[u8], offset: usize) -> Result<Self> {
        codec::read_array::<N>(buf, offset).map(Self)
    }

    pub fn write(&self, buf: &mut [u8], offset: usize) -> Result<()> {
        codec::write_bytes(buf, offset, &self.0)
    }

    /// The name up to the first zero byte, lossily decoded as UTF-8.
    pub fn get(&self) -> String {
        let end = memchr::memchr(0, &self.0).unwrap_or(N);
        String::from_utf8_lossy(&self.0[..end]).into_owned()
    }

    /// Store `name`, truncated to `N - 1` bytes and zero-padded.
    pub fn set(&mut self, name: &str) {
        let src = name.as_bytes();
        for (i, slot) in self.0.iter_mut().take(N.saturating_sub(1)).enumerate() {
            *slot = src.get(i).copied().unwrap_or(0);
        }
    }

    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    /// Rebuild a name from its display text and, when known, the hex of the
    /// whole field.
    ///
    /// The raw bytes are kept as they are unless `text` no longer matches
    /// them; then `text` is stored over them with [`set`](Self::set).
    pub fn from_parts(text: &str, raw: Option<&str>) -> Result<Self> {
        let mut name = match raw {
            Some(hex) => Self(Reserved::<N>::from_hex(hex)?.0),
            None => Self::default(),
        };
        if name.get() != text {
            name.set(text);
        }
        Ok(name)
    }

    fn to_hex(&self) -> String {
        Reserved(self.0).to_hex()
    }
}

impl<const N: usize> Default for InlineName<N> {
    fn default() -> Self {
        Self([0u8; N])
    }
}

impl<const N: usize> fmt::Debug for InlineName<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InlineName({:?})", self.get())
    }
}

/// Serialised form of an [`InlineName`]: the display text plus every byte of
/// the field, so bytes after the terminator survive an export and import.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct InlineNameRepr {
    text: String,
    #[serde(default)]
    raw: Option<String>,
}

#[cfg(feature = "serde")]
impl<const N: usize> serde::Serialize for InlineName<N> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let repr = InlineNameRepr {
            text: self.get(),
            raw: Some(self.to_hex()),
        };
        serde::Serialize::serialize(&repr, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, const N: usize> serde::Deserialize<'de> for InlineName<N> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let repr = <InlineNameRepr as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_parts(&repr.text, repr.raw.as_deref()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_preserves_bytes() {
        let data = [0xAAu8, 0x01, 0x02, 0x03, 0xBB];
        let reserved = Reserved::<3>::read(&data, 1).unwrap();
        assert_eq!(reserved.as_bytes(), &[0x01, 0x02, 0x03]);
        assert!(!reserved.is_zeroed());

        let mut out = [0u8; 5];
        reserved.write(&mut out, 1).unwrap();
        assert_eq!(out, [0, 1, 2, 3, 0]);
    }

    #[test]
    fn test_reserved_hex() {
        let reserved = Reserved([0x00u8, 0x7F, 0xFF]);
        assert_eq!(reserved.to_hex(), "007fff");
        assert_eq!(Reserved::<3>::from_hex("007fff").unwrap(), reserved);
        assert!(Reserved::<3>::from_hex("007f").is_err());
        assert!(Reserved::<3>::from_hex("zz7fff").is_err());
    }

    #[test]
    fn test_inline_name_trims_at_zero() {
        let mut raw = [0u8; 8];
        raw[..3].copy_from_slice(b"abc");
        raw[4] = b'x';
        assert_eq!(InlineName(raw).get(), "abc");
    }

    #[test]
    fn test_inline_name_set_keeps_last_byte() {
        let mut name = InlineName([0xFFu8; 4]);
        name.set("toolong");
        assert_eq!(name.as_bytes(), b"too\xFF");

        name.set("a");
        assert_eq!(name.as_bytes(), b"a\0\0\xFF");
        assert_eq!(name.get(), "a");
    }

    #[test]
    fn test_inline_name_from_parts_keeps_stale_bytes() {
        let raw = InlineName(*b"abc\0old\x7F");
        let hex = raw.to_hex();
        assert_eq!(hex, "616263006f6c647f");

        let same = InlineName::<8>::from_parts("abc", Some(&hex)).unwrap();
        assert_eq!(same, raw);

        let renamed = InlineName::<8>::from_parts("xy", Some(&hex)).unwrap();
        assert_eq!(renamed.as_bytes(), b"xy\0\0\0\0\0\x7F");

        let text_only = InlineName::<8>::from_parts("abc", None).unwrap();
        assert_eq!(text_only.as_bytes(), b"abc\0\0\0\0\0");

        assert!(InlineName::<8>::from_parts("abc", Some("6162")).is_err());
    }
}
