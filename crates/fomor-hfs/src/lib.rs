//! HFS archive codec for Vindictus game files.
//!
//! HFS is the ZIP-family container format Vindictus packages its assets in.
//! It keeps the standard record layouts but:
//!
//! - relocates the magic signatures (`HF` family instead of `PK`, with the
//!   local and central directory records deliberately sharing one value),
//! - XOR-obfuscates file names and file content against a fixed key stream
//!   keyed by absolute archive offset,
//! - optionally wraps entry content in a custom 8-byte `comp` header around
//!   a raw DEFLATE stream.
//!
//! Plain ZIP-layout archives parse with the same codec under
//! [`Preset::zip`]; the differences between the two flavors live entirely in
//! the [`Preset`].
//!
//! # Example
//!
//! ```no_run
//! use fomor_hfs::{HfsArchive, Preset};
//!
//! let key = std::fs::read("XorTruths.bin")?;
//! let archive = HfsArchive::open("weapons.hfs", &Preset::hfs(key))?;
//!
//! for entry in archive.iter() {
//!     println!("{}: {} bytes", entry.filename(), entry.file_content.len());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod archive;
mod cipher;
mod compress;
mod entry;
mod error;
mod preset;
pub mod zip;

pub use archive::HfsArchive;
pub use cipher::{apply_cipher, CipherMethod, CipherSpec};
pub use entry::HfsEntry;
pub use error::{Error, Result};
pub use preset::Preset;
