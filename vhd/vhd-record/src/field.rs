//! Field descriptors and the wire types a field may have.

use crate::decoder::Decoder;
use crate::layout::Endianness;
use crate::value::FieldValue;
use crate::Result;
use core::fmt;

/// Binary type and width of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// 1-byte unsigned integer.
    U8,
    /// 2-byte unsigned integer.
    U16,
    /// 4-byte unsigned integer.
    U32,
    /// 8-byte unsigned integer.
    U64,
    /// Fixed-length byte string.
    Bytes(usize),
    /// Reserved span; consumed but never surfaced.
    Padding(usize),
}

impl FieldKind {
    /// Number of bytes the field occupies on the wire.
    #[must_use]
    pub const fn width(self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U16 => 2,
            Self::U32 => 4,
            Self::U64 => 8,
            Self::Bytes(n) | Self::Padding(n) => n,
        }
    }

    #[must_use]
    pub const fn is_padding(self) -> bool {
        matches!(self, Self::Padding(_))
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::U8 => f.write_str("u8"),
            Self::U16 => f.write_str("u16"),
            Self::U32 => f.write_str("u32"),
            Self::U64 => f.write_str("u64"),
            Self::Bytes(n) => write!(f, "[u8; {n}]"),
            Self::Padding(n) => write!(f, "pad({n})"),
        }
    }
}

/// Initial value of a field in a default-constructed record.
#[derive(Clone, Copy)]
pub enum FieldDefault {
    /// A value declared alongside the field.
    Declared(fn() -> FieldValue),
    /// No value until the record is read.
    ReadTime,
}

impl FieldDefault {
    /// The default as a dynamic value; [`FieldValue::Unset`] for read-time fields.
    #[must_use]
    pub fn value(self) -> FieldValue {
        match self {
            Self::Declared(make) => make(),
            Self::ReadTime => FieldValue::Unset,
        }
    }

    #[must_use]
    pub const fn is_read_time(self) -> bool {
        matches!(self, Self::ReadTime)
    }
}

impl fmt::Debug for FieldDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Declared(make) => f.debug_tuple("Declared").field(&make()).finish(),
            Self::ReadTime => f.write_str("ReadTime"),
        }
    }
}

/// Static declaration of one field of a record type.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    /// Field name, unique within the record.
    pub name: &'static str,
    /// Binary type and width.
    pub kind: FieldKind,
    /// Value in a default-constructed record.
    pub default: FieldDefault,
    /// Whether the field is surfaced by name. Excluded fields still occupy
    /// layout space.
    pub included: bool,
}

impl FieldDescriptor {
    /// An included field whose value is only known after a read.
    #[must_use]
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            default: FieldDefault::ReadTime,
            included: true,
        }
    }

    /// An excluded span of `kind.width()` bytes.
    #[must_use]
    pub const fn padding(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            default: FieldDefault::ReadTime,
            included: false,
        }
    }

    /// Attach a declared default.
    #[must_use]
    pub const fn with_default(mut self, make: fn() -> FieldValue) -> Self {
        self.default = FieldDefault::Declared(make);
        self
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.kind.width()
    }
}

/// A Rust type that can be stored in a record field.
///
/// Implemented for `u8`, `u16`, `u32`, `u64`, `[u8; N]`, [`Padding<N>`],
/// and `Option<T>` of any of these (`None` meaning "not read yet").
pub trait FieldType: Copy {
    /// Wire kind of the type.
    const KIND: FieldKind;

    /// Decode one value at the decoder's position, in its byte order.
    ///
    /// # Errors
    /// [`RecordError::TruncatedInput`](crate::RecordError::TruncatedInput) if
    /// the decoder has fewer than `KIND.width()` bytes left.
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self>;

    /// Dynamic view of the value.
    fn to_value(self) -> FieldValue;
}

macro_rules! impl_uint_field {
    ($ty:ty, $kind:ident, $width:literal) => {
        impl FieldType for $ty {
            const KIND: FieldKind = FieldKind::$kind;

            #[inline]
            fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
                let bytes = decoder.take::<$width>()?;
                Ok(match decoder.endianness() {
                    Endianness::Big => <$ty>::from_be_bytes(bytes),
                    Endianness::Little => <$ty>::from_le_bytes(bytes),
                })
            }

            #[inline]
            fn to_value(self) -> FieldValue {
                FieldValue::$kind(self)
            }
        }
    };
}

impl_uint_field!(u8, U8, 1);
impl_uint_field!(u16, U16, 2);
impl_uint_field!(u32, U32, 4);
impl_uint_field!(u64, U64, 8);

// Byte strings are copied verbatim; byte order does not apply.
impl<const N: usize> FieldType for [u8; N] {
    const KIND: FieldKind = FieldKind::Bytes(N);

    #[inline]
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
        decoder.take::<N>()
    }

    fn to_value(self) -> FieldValue {
        FieldValue::Bytes(self.to_vec())
    }
}

impl<T: FieldType> FieldType for Option<T> {
    const KIND: FieldKind = T::KIND;

    #[inline]
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
        T::decode(decoder).map(Some)
    }

    fn to_value(self) -> FieldValue {
        self.map_or(FieldValue::Unset, T::to_value)
    }
}

/// Reserved span of `N` bytes.
///
/// Decoding skips the bytes; the span never shows up in names, values,
/// equality or change tracking.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Padding<const N: usize>;

impl<const N: usize> FieldType for Padding<N> {
    const KIND: FieldKind = FieldKind::Padding(N);

    #[inline]
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
        decoder.skip(N)?;
        Ok(Self)
    }

    fn to_value(self) -> FieldValue {
        FieldValue::Unset
    }
}
