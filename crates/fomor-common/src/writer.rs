//! Binary writer for serializing little-endian records.

use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};
use zerocopy::{Immutable, IntoBytes};

use crate::Result;

/// A position-tracking writer for little-endian binary records.
///
/// This is the counterpart of [`BinaryReader`](crate::BinaryReader): records
/// that were read with `read_struct` can be written back with
/// [`write_struct`](Self::write_struct), and the running [`position`](Self::position)
/// gives the absolute offset of the next byte, which archive writers need
/// for back-references between records.
///
/// # Example
///
/// ```
/// use fomor_common::BinaryWriter;
///
/// let mut writer = BinaryWriter::new(Vec::new());
/// writer.write_u32(0x04030201).unwrap();
/// writer.write_u16(0x0605).unwrap();
///
/// assert_eq!(writer.position(), 6);
/// assert_eq!(writer.into_inner(), [0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);
/// ```
#[derive(Debug)]
pub struct BinaryWriter<W> {
    inner: W,
    position: usize,
}

impl<W: Write> BinaryWriter<W> {
    /// Create a new writer wrapping an output sink.
    #[inline]
    pub fn new(inner: W) -> Self {
        Self { inner, position: 0 }
    }

    /// Get the number of bytes written so far.
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Unwrap the writer, returning the inner sink.
    #[inline]
    pub fn into_inner(self) -> W {
        self.inner
    }

    /// Write raw bytes.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.inner.write_all(bytes)?;
        self.position += bytes.len();
        Ok(())
    }

    /// Write a little-endian u16.
    #[inline]
    pub fn write_u16(&mut self, value: u16) -> Result<()> {
        self.inner.write_u16::<LittleEndian>(value)?;
        self.position += 2;
        Ok(())
    }

    /// Write a little-endian u32.
    #[inline]
    pub fn write_u32(&mut self, value: u32) -> Result<()> {
        self.inner.write_u32::<LittleEndian>(value)?;
        self.position += 4;
        Ok(())
    }

    /// Write a struct using zerocopy.
    ///
    /// The struct must implement `IntoBytes` from the zerocopy crate.
    #[inline]
    pub fn write_struct<T: IntoBytes + Immutable>(&mut self, value: &T) -> Result<()> {
        self.write_bytes(value.as_bytes())
    }
}
