//! Bounds-checked little-endian reads over borrowed byte slices.
//!
//! Every multi-byte read checks that enough bytes remain before decoding, so a
//! truncated or misidentified resource surfaces as [`Error::UnexpectedEof`]
//! instead of reading past the buffer.

use std::io::Cursor;

use crate::error::{Error, Result};

pub struct ByteReader<'a> {
    cursor: Cursor<&'a [u8]>,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(data),
        }
    }

    /// Reader positioned at `pos` within `data`.
    pub fn at(data: &'a [u8], pos: usize) -> Self {
        let mut reader = Self::new(data);
        reader.seek(pos);
        reader
    }

    pub fn position(&self) -> usize {
        self.cursor.position() as usize
    }

    pub fn seek(&mut self, pos: usize) {
        self.cursor.set_position(pos as u64);
    }

    pub fn remaining(&self) -> usize {
        self.cursor.get_ref().len().saturating_sub(self.position())
    }

    fn eof(&self, need: usize) -> Error {
        Error::UnexpectedEof {
            offset: self.position(),
            need,
            have: self.remaining(),
        }
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        buf.copy_from_slice(self.read_bytes(N)?);
        Ok(buf)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    /// Borrow the next `len` bytes without copying.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        let data: &'a [u8] = *self.cursor.get_ref();
        let start = self.position();
        let bytes = start
            .checked_add(len)
            .and_then(|end| data.get(start..end))
            .ok_or_else(|| self.eof(len))?;
        self.seek(start + len);
        Ok(bytes)
    }
}

pub fn u16_at(data: &[u8], pos: usize) -> Result<u16> {
    ByteReader::at(data, pos).read_u16()
}

pub fn u32_at(data: &[u8], pos: usize) -> Result<u32> {
    ByteReader::at(data, pos).read_u32()
}
