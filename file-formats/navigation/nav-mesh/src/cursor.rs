//! Sequential little-endian reader over an immutable buffer

use byteorder::{ByteOrder, LittleEndian};

use crate::error::{Error, Result};
use crate::types::Vec3;

/// Read position over a borrowed byte buffer
///
/// Every read either consumes the full field width or fails with
/// [`Error::TruncatedData`] without moving the offset.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor at the start of `data`
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Current read offset
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Bytes left to read
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    /// Check if every byte has been consumed
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Read a little-endian `u32`
    pub fn read_u32(&mut self) -> Result<u32> {
        self.take(4).map(LittleEndian::read_u32)
    }

    /// Read a little-endian IEEE-754 `f32`
    pub fn read_f32(&mut self) -> Result<f32> {
        self.take(4).map(LittleEndian::read_f32)
    }

    /// Read three consecutive `f32` values as a point
    ///
    /// The whole point is checked up front so a short buffer never leaves
    /// the cursor between components.
    pub fn read_vec3(&mut self) -> Result<Vec3> {
        let bytes = self.take(12)?;
        Ok(Vec3::new(
            LittleEndian::read_f32(&bytes[0..4]),
            LittleEndian::read_f32(&bytes[4..8]),
            LittleEndian::read_f32(&bytes[8..12]),
        ))
    }

    fn take(&mut self, needed: usize) -> Result<&'a [u8]> {
        let available = self.remaining();
        if available < needed {
            return Err(Error::TruncatedData {
                offset: self.offset,
                needed,
                available,
            });
        }
        let start = self.offset;
        self.offset += needed;
        Ok(&self.data[start..self.offset])
    }
}
