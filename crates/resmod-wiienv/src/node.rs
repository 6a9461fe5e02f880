//! The resource node contract.
//!
//! Every record in a resource tree, leaf or container, implements
//! [`ResourceNode`]. Decoding is split into [`Decode`] so the node trait stays
//! object-safe and a tree can be walked as `&dyn ResourceNode`.

use crate::Result;

/// A decoded record that can report itself, be renamed, and re-encode.
pub trait ResourceNode {
    /// Display type of the record, e.g. "Wii Fog Element".
    fn kind(&self) -> &'static str;

    /// Display label.
    ///
    /// Editor-assigned for most records. Records that store a name inline
    /// return the stored name.
    fn name(&self) -> String;

    /// Change the display label.
    fn set_name(&mut self, name: &str);

    /// Persisted length in bytes: what the next [`save`](Self::save) produces.
    fn size(&self) -> u64;

    /// Encode the record.
    ///
    /// Containers restamp their magic tag and recompute their total size and
    /// count fields before emitting the header followed by every child.
    fn save(&mut self) -> Result<Vec<u8>>;

    /// Children grouped the way they are presented, in save order.
    fn child_groups(&self) -> Vec<ChildGroup<'_>> {
        Vec::new()
    }

    /// All children in save order.
    fn children(&self) -> Vec<&dyn ResourceNode> {
        self.child_groups()
            .into_iter()
            .flat_map(|group| group.nodes)
            .collect()
    }
}

/// A labelled run of child records, such as "Light Objects".
pub struct ChildGroup<'a> {
    pub label: &'static str,
    pub nodes: Vec<&'a dyn ResourceNode>,
}

impl<'a> ChildGroup<'a> {
    /// Build a group from a slice of concrete records.
    pub fn new<T: ResourceNode>(label: &'static str, records: &'a [T]) -> Self {
        Self {
            label,
            nodes: records.iter().map(|r| r as &dyn ResourceNode).collect(),
        }
    }
}

/// Construct a record from bytes.
pub trait Decode: ResourceNode + Sized {
    /// Decode a record from the start of `data`.
    ///
    /// Reads only what the record's header declares or implies; trailing
    /// bytes are ignored. Fails with a truncation error, producing no
    /// record, when `data` is shorter than that extent.
    fn load(data: &[u8]) -> Result<Self>;
}

/// A record whose encoded length never varies.
pub trait FixedRecord: Decode {
    /// Encoded length in bytes.
    const SIZE: usize;
}
