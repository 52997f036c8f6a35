//! Byte layout derived from a descriptor table.

use crate::field::FieldDescriptor;
use core::fmt;
use core::ops::Range;

/// Byte order of integer fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
    /// Most significant byte first (network order).
    Big,
    /// Least significant byte first.
    Little,
}

/// Sum of all descriptor widths, padding included.
#[must_use]
pub const fn total_size(fields: &[FieldDescriptor]) -> usize {
    let mut size = 0;
    let mut i = 0;
    while i < fields.len() {
        size += fields[i].kind.width();
        i += 1;
    }
    size
}

/// One field placed at its byte offset.
#[derive(Debug, Clone, Copy)]
pub struct FieldSlot {
    pub descriptor: &'static FieldDescriptor,
    pub offset: usize,
}

impl FieldSlot {
    /// Bytes covered by the field.
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.descriptor.width()
    }
}

/// Concatenation of a record's field kinds in declaration order.
#[derive(Debug, Clone)]
pub struct Layout {
    endianness: Endianness,
    slots: Vec<FieldSlot>,
    size: usize,
}

impl Layout {
    /// Place `fields` back to back, starting at offset zero.
    #[must_use]
    pub fn of(fields: &'static [FieldDescriptor], endianness: Endianness) -> Self {
        let mut offset = 0;
        let slots = fields
            .iter()
            .map(|descriptor| {
                let slot = FieldSlot { descriptor, offset };
                offset += descriptor.width();
                slot
            })
            .collect();
        Self {
            endianness,
            slots,
            size: offset,
        }
    }

    #[must_use]
    pub const fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Total size in bytes.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// All slots, padding included.
    #[must_use]
    pub fn slots(&self) -> &[FieldSlot] {
        &self.slots
    }

    /// Slot of the field called `name`.
    #[must_use]
    pub fn slot(&self, name: &str) -> Option<&FieldSlot> {
        self.slots.iter().find(|s| s.descriptor.name == name)
    }
}

/// Renders the layout signature, e.g. `be: [u8; 8] u32 u64 pad(4)`.
impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self.endianness {
            Endianness::Big => "be:",
            Endianness::Little => "le:",
        })?;
        for slot in &self.slots {
            write!(f, " {}", slot.descriptor.kind)?;
        }
        Ok(())
    }
}
