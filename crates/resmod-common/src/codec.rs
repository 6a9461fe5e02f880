//! Fixed-offset primitive codecs.
//!
//! Every record layout in this project is a flat run of scalars at known
//! offsets from the start of the record. These helpers read and write those
//! scalars in big-endian order regardless of host byte order.
//!
//! Buffers handed to these functions are already sliced to a record's
//! declared extent, so an [`Error::OutOfRange`] here means the layout
//! constants are wrong, not that the input is bad.

use std::ops::Range;

use byteorder::{BigEndian, ByteOrder};
use zerocopy::{FromBytes, IntoBytes};

use crate::{Error, Magic, Result, Rgba, Vec3};

#[inline]
fn span(size: usize, offset: usize, len: usize) -> Result<Range<usize>> {
    match offset.checked_add(len) {
        Some(end) if end <= size => Ok(offset..end),
        _ => Err(Error::OutOfRange { offset, len, size }),
    }
}

#[inline]
fn field(buf: &[u8], offset: usize, len: usize) -> Result<&[u8]> {
    span(buf.len(), offset, len).map(|r| &buf[r])
}

#[inline]
fn field_mut(buf: &mut [u8], offset: usize, len: usize) -> Result<&mut [u8]> {
    span(buf.len(), offset, len).map(move |r| &mut buf[r])
}

/// Read a single byte.
#[inline]
pub fn read_u8(buf: &[u8], offset: usize) -> Result<u8> {
    field(buf, offset, 1).map(|b| b[0])
}

/// Read a big-endian u16.
#[inline]
pub fn read_u16(buf: &[u8], offset: usize) -> Result<u16> {
    field(buf, offset, 2).map(BigEndian::read_u16)
}

/// Read a big-endian u32.
#[inline]
pub fn read_u32(buf: &[u8], offset: usize) -> Result<u32> {
    field(buf, offset, 4).map(BigEndian::read_u32)
}

/// Read a big-endian u64.
#[inline]
pub fn read_u64(buf: &[u8], offset: usize) -> Result<u64> {
    field(buf, offset, 8).map(BigEndian::read_u64)
}

/// Read a big-endian i64.
#[inline]
pub fn read_i64(buf: &[u8], offset: usize) -> Result<i64> {
    field(buf, offset, 8).map(BigEndian::read_i64)
}

/// Read a big-endian single-precision float.
#[inline]
pub fn read_f32(buf: &[u8], offset: usize) -> Result<f32> {
    field(buf, offset, 4).map(BigEndian::read_f32)
}

/// Read four consecutive bytes as red, green, blue, alpha.
#[inline]
pub fn read_rgba(buf: &[u8], offset: usize) -> Result<Rgba> {
    let bytes = field(buf, offset, Rgba::SIZE)?;
    Rgba::read_from_bytes(bytes).map_err(|_| Error::OutOfRange {
        offset,
        len: Rgba::SIZE,
        size: buf.len(),
    })
}

/// Read three consecutive big-endian floats.
#[inline]
pub fn read_vec3(buf: &[u8], offset: usize) -> Result<Vec3> {
    Ok(Vec3::new(
        read_f32(buf, offset)?,
        read_f32(buf, offset + 4)?,
        read_f32(buf, offset + 8)?,
    ))
}

/// Read a four-byte magic tag.
#[inline]
pub fn read_magic(buf: &[u8], offset: usize) -> Result<Magic> {
    read_array::<4>(buf, offset).map(Magic)
}

/// Copy `N` bytes starting at `offset`.
#[inline]
pub fn read_array<const N: usize>(buf: &[u8], offset: usize) -> Result<[u8; N]> {
    let mut out = [0u8; N];
    out.copy_from_slice(field(buf, offset, N)?);
    Ok(out)
}

/// Write a single byte.
#[inline]
pub fn write_u8(buf: &mut [u8], offset: usize, value: u8) -> Result<()> {
    field_mut(buf, offset, 1).map(|b| b[0] = value)
}

/// Write a big-endian u16.
#[inline]
pub fn write_u16(buf: &mut [u8], offset: usize, value: u16) -> Result<()> {
    field_mut(buf, offset, 2).map(|b| BigEndian::write_u16(b, value))
}

/// Write a big-endian u32.
#[inline]
pub fn write_u32(buf: &mut [u8], offset: usize, value: u32) -> Result<()> {
    field_mut(buf, offset, 4).map(|b| BigEndian::write_u32(b, value))
}

/// Write a big-endian u64.
#[inline]
pub fn write_u64(buf: &mut [u8], offset: usize, value: u64) -> Result<()> {
    field_mut(buf, offset, 8).map(|b| BigEndian::write_u64(b, value))
}

/// Write a big-endian i64.
#[inline]
pub fn write_i64(buf: &mut [u8], offset: usize, value: i64) -> Result<()> {
    field_mut(buf, offset, 8).map(|b| BigEndian::write_i64(b, value))
}

/// Write a big-endian single-precision float.
#[inline]
pub fn write_f32(buf: &mut [u8], offset: usize, value: f32) -> Result<()> {
    field_mut(buf, offset, 4).map(|b| BigEndian::write_f32(b, value))
}

/// Write a colour as four bytes in red, green, blue, alpha order.
#[inline]
pub fn write_rgba(buf: &mut [u8], offset: usize, value: Rgba) -> Result<()> {
    write_bytes(buf, offset, value.as_bytes())
}

/// Write three consecutive big-endian floats.
#[inline]
pub fn write_vec3(buf: &mut [u8], offset: usize, value: Vec3) -> Result<()> {
    write_f32(buf, offset, value.x)?;
    write_f32(buf, offset + 4, value.y)?;
    write_f32(buf, offset + 8, value.z)
}

/// Write a four-byte magic tag.
#[inline]
pub fn write_magic(buf: &mut [u8], offset: usize, value: Magic) -> Result<()> {
    write_bytes(buf, offset, &value.0)
}

/// Copy a byte slice into the buffer at `offset`.
#[inline]
pub fn write_bytes(buf: &mut [u8], offset: usize, bytes: &[u8]) -> Result<()> {
    field_mut(buf, offset, bytes.len()).map(|b| b.copy_from_slice(bytes))
}
