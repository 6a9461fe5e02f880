//! Shared load/save steps for headed records.
//!
//! Every headed record starts with the same three fields:
//!
//! | Offset | Size | Field |
//! |---|---|---|
//! | 0x00 | 4 | magic tag |
//! | 0x04 | 4 | total size (big-endian) |
//! | 0x08 | 1 | version |

use resmod_common::{codec, BinaryReader, Magic};
use tracing::{trace, warn};

use crate::{Error, FixedRecord, ResourceNode, Result};

pub(crate) const MAGIC_OFFSET: usize = 0x00;
pub(crate) const SIZE_OFFSET: usize = 0x04;
pub(crate) const VERSION_OFFSET: usize = 0x08;

/// Fail unless `data` holds at least `needed` bytes.
pub(crate) fn ensure_len(record: &'static str, data: &[u8], needed: usize) -> Result<()> {
    if data.len() < needed {
        return Err(Error::TruncatedInput {
            record,
            needed,
            available: data.len(),
        });
    }
    Ok(())
}

/// Read the common tag/size/version prefix.
///
/// A mismatched tag is logged and otherwise ignored; save restamps it.
pub(crate) fn read_prefix(record: &'static str, data: &[u8], expected: Magic) -> Result<(Magic, u32, u8)> {
    let magic = codec::read_magic(data, MAGIC_OFFSET)?;
    if magic != expected {
        warn!(record, %expected, found = %magic, "unexpected magic tag");
    }
    let size = codec::read_u32(data, SIZE_OFFSET)?;
    let version = codec::read_u8(data, VERSION_OFFSET)?;
    Ok((magic, size, version))
}

/// Write the common tag/size/version prefix.
pub(crate) fn write_prefix(buf: &mut [u8], magic: Magic, size: u32, version: u8) -> Result<()> {
    codec::write_magic(buf, MAGIC_OFFSET, magic)?;
    codec::write_u32(buf, SIZE_OFFSET, size)?;
    codec::write_u8(buf, VERSION_OFFSET, version)?;
    Ok(())
}

/// Convert a child list length to its 16-bit count field.
pub(crate) fn count_field(record: &'static str, field: &'static str, len: usize) -> Result<u16> {
    u16::try_from(len).map_err(|_| Error::CountOverflow {
        record,
        field,
        count: len,
    })
}

/// Convert an encoded length to its 32-bit size field.
pub(crate) fn size_field(record: &'static str, len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| Error::CountOverflow {
        record,
        field: "size",
        count: len,
    })
}

/// Decode `count` fixed-size children laid out back to back from the
/// reader's position, naming each `"{label} {index}"`.
///
/// The caller has already checked the whole run fits.
pub(crate) fn load_fixed_children<T: FixedRecord>(
    reader: &mut BinaryReader<'_>,
    count: u16,
    label: &str,
) -> Result<Vec<T>> {
    let mut children = Vec::with_capacity(count as usize);
    for i in 0..count {
        let offset = reader.position();
        let mut child = T::load(reader.read_bytes(T::SIZE)?)?;
        child.set_name(&format!("{} {}", label, i));
        trace!(offset, index = i, kind = child.kind(), "decoded child");
        children.push(child);
    }
    Ok(children)
}

/// Serialise every record in order.
pub(crate) fn save_all<T: ResourceNode>(records: &mut [T]) -> Result<Vec<Vec<u8>>> {
    records.iter_mut().map(|r| r.save()).collect()
}

/// Header followed by every child blob, in order.
pub(crate) fn concat(header: Vec<u8>, parts: &[Vec<u8>]) -> Vec<u8> {
    let total = header.len() + parts.iter().map(Vec::len).sum::<usize>();
    let mut output = header;
    output.reserve(total - output.len());
    for part in parts {
        output.extend_from_slice(part);
    }
    output
}
