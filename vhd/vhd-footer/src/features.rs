use bitfield_struct::bitfield;

/// The footer's `features` field.
///
/// Layout (LSB→MSB):
/// - bit 0: temporary; the disk may be deleted on shutdown
/// - bit 1: reserved; always set by conforming writers
/// - bits 2..31: unused
#[bitfield(u32)]
#[derive(PartialEq, Eq)]
pub struct Features {
    /// Temporary disk (bit 0).
    pub temporary: bool,
    /// Reserved (bit 1), must be set.
    pub reserved: bool,
    #[bits(30)]
    __: u32,
}

impl Features {
    /// Value written into new footers: only the reserved bit.
    pub const DEFAULT: Self = Self::new().with_reserved(true);
}
