use crate::layout::Endianness;
use crate::{RecordError, Result};

/// Forward-only cursor over a buffered record.
///
/// Every read is bounds-checked; running past the end reports
/// [`RecordError::TruncatedInput`] with the number of bytes that would have
/// been needed.
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    buf: &'a [u8],
    pos: usize,
    endianness: Endianness,
}

impl<'a> Decoder<'a> {
    #[must_use]
    pub const fn new(buf: &'a [u8], endianness: Endianness) -> Self {
        Self {
            buf,
            pos: 0,
            endianness,
        }
    }

    /// Byte order applied to integer fields.
    #[must_use]
    pub const fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Number of bytes consumed so far.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Take the next `N` bytes.
    ///
    /// # Errors
    /// [`RecordError::TruncatedInput`] if fewer than `N` bytes are left.
    #[inline]
    pub fn take<const N: usize>(&mut self) -> Result<[u8; N]> {
        let rest = self.buf.get(self.pos..).unwrap_or_default();
        let Some((chunk, _)) = rest.split_first_chunk::<N>() else {
            return Err(self.truncated(N));
        };
        self.pos += N;
        Ok(*chunk)
    }

    /// Skip `n` bytes.
    ///
    /// # Errors
    /// [`RecordError::TruncatedInput`] if fewer than `n` bytes are left.
    #[inline]
    pub fn skip(&mut self, n: usize) -> Result<()> {
        if self.remaining() < n {
            return Err(self.truncated(n));
        }
        self.pos += n;
        Ok(())
    }

    const fn truncated(&self, wanted: usize) -> RecordError {
        RecordError::TruncatedInput {
            expected: self.pos.saturating_add(wanted),
            actual: self.buf.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_advances_and_stops_at_end() {
        let mut d = Decoder::new(&[1, 2, 3], Endianness::Big);
        assert_eq!(d.take::<2>().unwrap(), [1, 2]);
        assert_eq!(d.position(), 2);
        assert_eq!(d.remaining(), 1);

        match d.take::<2>() {
            Err(RecordError::TruncatedInput { expected, actual }) => {
                assert_eq!(expected, 4);
                assert_eq!(actual, 3);
            }
            other => panic!("unexpected: {other:?}"),
        }
        // A failed take leaves the cursor in place.
        assert_eq!(d.position(), 2);
        assert_eq!(d.take::<1>().unwrap(), [3]);
        assert_eq!(d.remaining(), 0);
    }

    #[test]
    fn skip_checks_bounds() {
        let mut d = Decoder::new(&[0; 8], Endianness::Little);
        d.skip(8).unwrap();
        assert!(d.skip(1).unwrap_err().is_truncated());
    }
}
