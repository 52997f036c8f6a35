use crate::decoder::Decoder;
use crate::error::{RecordError, Result, ValidationError};
use crate::field::FieldDescriptor;
use crate::layout::{Endianness, Layout, total_size};
use crate::value::FieldMap;
use std::io::{ErrorKind, Read, Write};

/// A fixed-layout binary record described by a descriptor table.
///
/// Implement it with `#[derive(Record)]`; the derive provides every
/// required item and the provided methods implement the read path.
pub trait Record: Default + Sized {
    /// Type name used in diagnostics.
    const NAME: &'static str;

    /// Byte order of integer fields.
    const ENDIANNESS: Endianness;

    /// Ordered descriptor table, padding included.
    const FIELDS: &'static [FieldDescriptor];

    /// Ordered names of the included fields.
    const NAMES: &'static [&'static str];

    /// Wire size in bytes.
    const SIZE: usize = total_size(Self::FIELDS);

    /// Decode every field positionally into a fresh, clean instance.
    ///
    /// Performs no validation; use [`Record::read`] or [`Record::decode`].
    ///
    /// # Errors
    /// [`RecordError::TruncatedInput`] if the decoder runs out of bytes.
    fn decode_fields(decoder: &mut Decoder<'_>) -> Result<Self>;

    /// Validation hook run after decoding.
    ///
    /// # Errors
    /// Whatever the record type rejects.
    fn validate(&self) -> Result<(), ValidationError>;

    /// Current values of the included fields, in declaration order.
    fn values(&self) -> FieldMap;

    /// Whether a named field was assigned since construction or the last read.
    fn is_dirty(&self) -> bool;

    fn mark_clean(&mut self);

    /// Per-field byte offsets.
    #[must_use]
    fn layout() -> Layout {
        Layout::of(Self::FIELDS, Self::ENDIANNESS)
    }

    /// Read exactly [`Record::SIZE`] bytes from `source` and decode them.
    ///
    /// The source is not read past the record.
    ///
    /// # Errors
    /// - [`RecordError::TruncatedInput`] if the source ends early.
    /// - [`RecordError::Validation`] if the validation hook rejects the record.
    /// - [`RecordError::Io`] if the source fails.
    fn read<R: Read + ?Sized>(source: &mut R) -> Result<Self> {
        let mut buf = vec![0; Self::SIZE];
        let filled = read_full(source, &mut buf)?;
        log::trace!("read {filled} of {} bytes for {}", Self::SIZE, Self::NAME);
        if filled < Self::SIZE {
            return Err(RecordError::TruncatedInput {
                expected: Self::SIZE,
                actual: filled,
            });
        }
        Self::decode(&buf)
    }

    /// Decode the first [`Record::SIZE`] bytes of `bytes`.
    ///
    /// # Errors
    /// - [`RecordError::TruncatedInput`] if `bytes` is shorter than the record.
    /// - [`RecordError::Validation`] if the validation hook rejects the record.
    fn decode(bytes: &[u8]) -> Result<Self> {
        let Some(bytes) = bytes.get(..Self::SIZE) else {
            return Err(RecordError::TruncatedInput {
                expected: Self::SIZE,
                actual: bytes.len(),
            });
        };

        let mut decoder = Decoder::new(bytes, Self::ENDIANNESS);
        let mut record = Self::decode_fields(&mut decoder)?;
        debug_assert_eq!(decoder.remaining(), 0);

        if let Err(err) = record.validate() {
            log::warn!("{} rejected: {err}", Self::NAME);
            return Err(err.into());
        }

        record.mark_clean();
        log::debug!("decoded {} ({} bytes)", Self::NAME, Self::SIZE);
        Ok(record)
    }

    /// Encoding is not implemented.
    ///
    /// # Errors
    /// Always [`RecordError::Unsupported`].
    fn write<W: Write + ?Sized>(&self, _sink: &mut W) -> Result<()> {
        Err(RecordError::Unsupported {
            operation: "write",
            record: Self::NAME,
        })
    }
}

/// Fill `buf` from `source` until it is full or the source is exhausted.
fn read_full<R: Read + ?Sized>(source: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match source.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}

#[cfg(all(test, feature = "derive"))]
mod tests {
    use super::*;
    use crate::{FieldValue, Padding};
    use std::io::Cursor;

    #[derive(Debug, Clone, Copy, vhd_record::Record)]
    #[record(endian = little, validate = check_tag)]
    struct Probe {
        #[record(default = *b"PRB1")]
        tag: [u8; 4],
        #[record(default = 7)]
        count: u16,
        #[record(padding)]
        #[allow(dead_code)]
        reserved: Padding<2>,
        offset: Option<u64>,
        #[record(dirty)]
        dirty: bool,
    }

    impl Probe {
        fn check_tag(&self) -> Result<(), ValidationError> {
            if &self.tag == b"PRB1" {
                Ok(())
            } else {
                Err(ValidationError::InvalidCookie {
                    expected: b"PRB1".to_vec(),
                    found: self.tag.to_vec(),
                })
            }
        }
    }

    const PROBE: [u8; 16] = [
        b'P', b'R', b'B', b'1', 0x34, 0x12, 0xEE, 0xEE, 0x00, 0x02, 0, 0, 0, 0, 0, 0,
    ];

    /// Hands out one byte per call and reports an interruption before each.
    struct Trickle<'a> {
        data: &'a [u8],
        interrupt: bool,
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            self.interrupt = !self.interrupt;
            if self.interrupt {
                return Err(ErrorKind::Interrupted.into());
            }
            let Some((first, rest)) = self.data.split_first() else {
                return Ok(0);
            };
            buf[0] = *first;
            self.data = rest;
            Ok(1)
        }
    }

    #[test]
    fn size_and_names_come_from_the_table() {
        assert_eq!(Probe::SIZE, 16);
        assert_eq!(Probe::FIELDS.len(), 4);
        assert_eq!(Probe::NAMES, ["tag", "count", "offset"]);
        assert_eq!(Probe::layout().to_string(), "le: [u8; 4] u16 pad(2) u64");
    }

    #[test]
    fn read_decodes_little_endian() {
        let probe = Probe::read(&mut Cursor::new(PROBE)).unwrap();
        assert_eq!(probe.count(), 0x1234);
        assert_eq!(probe.offset(), Some(0x200));
        assert!(!probe.is_dirty());
    }

    #[test]
    fn read_stops_at_record_size() {
        let mut bytes = PROBE.to_vec();
        bytes.extend_from_slice(b"tail");
        let mut cursor = Cursor::new(bytes);
        Probe::read(&mut cursor).unwrap();
        assert_eq!(cursor.position(), 16);
    }

    #[test]
    fn read_retries_interrupted_sources() {
        let mut src = Trickle {
            data: &PROBE,
            interrupt: false,
        };
        assert_eq!(Probe::read(&mut src).unwrap().count(), 0x1234);
    }

    #[test]
    fn short_source_is_truncated() {
        let err = Probe::read(&mut &PROBE[..10]).unwrap_err();
        assert!(matches!(
            err,
            RecordError::TruncatedInput {
                expected: 16,
                actual: 10
            }
        ));
    }

    #[test]
    fn default_uses_declared_values() {
        let probe = Probe::default();
        assert_eq!(probe.tag(), *b"PRB1");
        assert_eq!(probe.count(), 7);
        assert_eq!(probe.offset(), None);
        assert!(!probe.is_dirty());

        let declared: Vec<FieldValue> = Probe::FIELDS.iter().map(|f| f.default.value()).collect();
        assert_eq!(
            declared,
            [
                FieldValue::Bytes(b"PRB1".to_vec()),
                FieldValue::U16(7),
                FieldValue::Unset,
                FieldValue::Unset,
            ]
        );
    }

    #[test]
    fn write_is_unsupported() {
        let mut sink = Vec::new();
        let err = Probe::default().write(&mut sink).unwrap_err();
        assert!(matches!(
            err,
            RecordError::Unsupported {
                operation: "write",
                record: "Probe"
            }
        ));
        assert!(sink.is_empty());
    }
}
