//! Compression wrapper handling.
//!
//! HFS entries may wrap their stored bytes in a custom 8-byte header whose
//! first four bytes spell `comp`; the remainder of the entry is then a raw
//! DEFLATE stream (no zlib framing). This is not a standard ZIP feature:
//! the wrapper exists alongside the header's compression method field and
//! is detected by the marker alone.

use std::io::{Read, Write};

use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use flate2::Compression;

use crate::{Error, Result};

/// ASCII marker opening the custom compression wrapper header.
pub const WRAPPER_MARKER: &[u8; 4] = b"comp";

/// Total size of the custom wrapper header.
pub const WRAPPER_HEADER_SIZE: usize = 8;

/// Check whether entry content carries the custom compression wrapper.
#[inline]
pub fn is_wrapped(content: &[u8]) -> bool {
    content.len() >= WRAPPER_HEADER_SIZE && &content[..WRAPPER_MARKER.len()] == WRAPPER_MARKER
}

/// Decompress a raw DEFLATE stream.
pub fn inflate_raw(data: &[u8], size_hint: usize) -> Result<Vec<u8>> {
    let mut decoder = DeflateDecoder::new(data);
    let mut output = Vec::with_capacity(size_hint);

    decoder
        .read_to_end(&mut output)
        .map_err(|e| Error::Decompression(e.to_string()))?;

    Ok(output)
}

/// Compress data to a raw DEFLATE stream (no wrapper header).
pub fn deflate_raw(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());

    encoder
        .write_all(data)
        .map_err(|e| Error::Decompression(e.to_string()))?;

    encoder
        .finish()
        .map_err(|e| Error::Decompression(e.to_string()))
}
