//! Bounds-aware cursor over container bytes

use std::io::Cursor;

use byteorder::{BigEndian, ReadBytesExt};

use super::walker::Stage;
use crate::error::{Error, Result};

/// Read/advance primitive over a fixed byte buffer.
///
/// Every read and skip is bounds-checked against the buffer end. Skipped
/// bytes are never dereferenced, but skipping past the end still fails: a
/// record claiming more bytes than the file holds is truncated either way.
pub(crate) struct FfCursor<'a> {
    inner: Cursor<&'a [u8]>,
}

impl<'a> FfCursor<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self {
            inner: Cursor::new(data),
        }
    }

    /// Current offset from the start of the buffer.
    pub(crate) fn position(&self) -> usize {
        self.inner.position() as usize
    }

    fn remaining(&self) -> usize {
        self.inner.get_ref().len() - self.position()
    }

    /// Read a big-endian u16 and advance by two.
    pub(crate) fn read_u16_be(&mut self, stage: Stage, field: &'static str) -> Result<u16> {
        let offset = self.position();
        let remaining = self.remaining();
        self.inner
            .read_u16::<BigEndian>()
            .map_err(|_| Error::TruncatedInput {
                stage,
                field,
                offset,
                needed: 2,
                remaining,
            })
    }

    /// Advance by `n` bytes without reading them.
    pub(crate) fn skip(&mut self, n: usize, stage: Stage, field: &'static str) -> Result<()> {
        let offset = self.position();
        let remaining = self.remaining();
        if n > remaining {
            return Err(Error::TruncatedInput {
                stage,
                field,
                offset,
                needed: n,
                remaining,
            });
        }
        self.inner.set_position((offset + n) as u64);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_advance_in_order() {
        let data = [0x12, 0x34, 0xAB, 0xCD];
        let mut cursor = FfCursor::new(&data);

        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.read_u16_be(Stage::Header, "a").unwrap(), 0x1234);
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.read_u16_be(Stage::Header, "b").unwrap(), 0xABCD);
        assert_eq!(cursor.position(), 4);
    }

    #[test]
    fn test_skip_validates_length() {
        let data = [0u8; 8];
        let mut cursor = FfCursor::new(&data);

        cursor.skip(8, Stage::Header, "all").unwrap();
        assert_eq!(cursor.position(), 8);

        let err = cursor.skip(1, Stage::Header, "past end").unwrap_err();
        match err {
            Error::TruncatedInput {
                offset,
                needed,
                remaining,
                ..
            } => {
                assert_eq!(offset, 8);
                assert_eq!(needed, 1);
                assert_eq!(remaining, 0);
            }
            other => panic!("expected TruncatedInput, got {other:?}"),
        }
    }

    #[test]
    fn test_short_read_reports_context() {
        let data = [0x01];
        let mut cursor = FfCursor::new(&data);

        let err = cursor
            .read_u16_be(Stage::Palettes, "palette count")
            .unwrap_err();
        match err {
            Error::TruncatedInput {
                stage,
                field,
                offset,
                needed,
                remaining,
            } => {
                assert_eq!(stage, Stage::Palettes);
                assert_eq!(field, "palette count");
                assert_eq!(offset, 0);
                assert_eq!(needed, 2);
                assert_eq!(remaining, 1);
            }
            other => panic!("expected TruncatedInput, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_length_skip_at_end() {
        let data: [u8; 0] = [];
        let mut cursor = FfCursor::new(&data);
        cursor.skip(0, Stage::Header, "nothing").unwrap();
        assert_eq!(cursor.position(), 0);
    }
}
