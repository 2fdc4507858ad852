//! Common utilities for Fomor.
//!
//! This crate provides foundational types used across the Fomor crates:
//!
//! - [`BinaryReader`] - Zero-copy binary reading from byte slices
//! - [`BinaryWriter`] - Little-endian record serialization into a `Vec<u8>`
//! - [`crc`] - ZIP-standard CRC-32 (ISO 3309) hashing

mod error;
mod reader;
mod writer;

pub mod crc;

pub use error::{Error, Result};
pub use reader::BinaryReader;
pub use writer::BinaryWriter;

/// Re-export zerocopy traits for convenience
pub use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};
