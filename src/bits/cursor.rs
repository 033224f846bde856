/*
# Byte Cursor Module

 A bounds-checked, position-tracking view over a byte range. Every read is checked
 against an explicit limit rather than the end of the buffer, so nested
 length-scoped structures (an MP4 box inside a sample) can be parsed through
 sub-cursors without copying.

 Key components:
 - `ByteCursor::new()`: validates the caller's offset/length against the buffer
 - Big-endian readers: `read_u32_be()`, `read_four_cc()`
 - Slicing: `read_bytes()`, `peek_bytes()`, `slice_as_string()`, `sub_cursor()`
*/

use super::encoding::TextEncoding;
use crate::errors::{PreconditionError, TruncatedInputError};

#[derive(Debug, Clone, Copy)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    start: usize,
    pos: usize,
    limit: usize,
}

impl<'a> ByteCursor<'a> {
    /// Wrap `data[offset..offset + length]`.
    pub fn new(data: &'a [u8], offset: usize, length: usize) -> Result<Self, PreconditionError> {
        let limit = check_range(data.len(), offset, length)?;
        Ok(Self {
            data,
            start: offset,
            pos: offset,
            limit,
        })
    }

    /// Wrap the whole buffer.
    pub fn from_slice(data: &'a [u8]) -> Self {
        Self {
            data,
            start: 0,
            pos: 0,
            limit: data.len(),
        }
    }

    /// Absolute position in the underlying buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn bytes_remaining(&self) -> usize {
        self.limit - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.limit
    }

    /// Read exactly `n` bytes, advancing past them.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], TruncatedInputError> {
        let slice = self.peek_bytes(n)?;
        self.pos += n;
        Ok(slice)
    }

    /// Look at the next `n` bytes without advancing.
    pub fn peek_bytes(&self, n: usize) -> Result<&'a [u8], TruncatedInputError> {
        if n > self.bytes_remaining() {
            return Err(self.truncated(n));
        }
        Ok(&self.data[self.pos..self.pos + n])
    }

    /// Read a 32-bit big endian value.
    pub fn read_u32_be(&mut self) -> Result<u32, TruncatedInputError> {
        let b = self.read_bytes(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Read a four-character code.
    pub fn read_four_cc(&mut self) -> Result<[u8; 4], TruncatedInputError> {
        let b = self.read_bytes(4)?;
        Ok([b[0], b[1], b[2], b[3]])
    }

    pub fn skip(&mut self, n: usize) -> Result<(), TruncatedInputError> {
        self.read_bytes(n).map(|_| ())
    }

    /// Decode `len` bytes starting at absolute position `start` without moving.
    pub fn slice_as_string(
        &self,
        start: usize,
        len: usize,
        encoding: TextEncoding,
    ) -> Result<String, TruncatedInputError> {
        if start < self.start || start > self.limit || len > self.limit - start {
            return Err(TruncatedInputError::new(
                len,
                self.limit.saturating_sub(start),
                start,
            ));
        }
        Ok(encoding.decode(&self.data[start..start + len]))
    }

    /// Split off a cursor over the next `len` bytes and advance past them.
    pub fn sub_cursor(&mut self, len: usize) -> Result<ByteCursor<'a>, TruncatedInputError> {
        if len > self.bytes_remaining() {
            return Err(self.truncated(len));
        }
        let sub = ByteCursor {
            data: self.data,
            start: self.pos,
            pos: self.pos,
            limit: self.pos + len,
        };
        self.pos += len;
        Ok(sub)
    }

    /// The unread part of the range.
    pub fn remaining_slice(&self) -> &'a [u8] {
        &self.data[self.pos..self.limit]
    }

    fn truncated(&self, requested: usize) -> TruncatedInputError {
        TruncatedInputError::new(requested, self.bytes_remaining(), self.pos)
    }
}

/// Validate `offset`/`length` against a buffer of `len` bytes, returning the end.
pub fn check_range(len: usize, offset: usize, length: usize) -> Result<usize, PreconditionError> {
    match offset.checked_add(length) {
        Some(end) if end <= len => Ok(end),
        _ => Err(PreconditionError::new(format!(
            "range {}+{} exceeds buffer of {} bytes",
            offset, length, len
        ))),
    }
}
