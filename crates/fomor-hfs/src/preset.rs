//! Archive format presets.
//!
//! A [`Preset`] tells the codec which 32-bit signatures mark the three
//! record types, how far from the end of the buffer the EOCD record may
//! plausibly sit, and which ciphers (if any) obfuscate names and content.
//! Standard ZIP and the HFS variant differ only in this configuration;
//! the record layouts are identical.

use crate::cipher::CipherSpec;
use crate::zip::EocdRecord;

/// Standard ZIP local file header signature (`PK\x03\x04`).
pub const ZIP_LOCAL_FILE_SIGNATURE: u32 = 0x04034b50;
/// Standard ZIP central directory file header signature (`PK\x01\x02`).
pub const ZIP_CENTRAL_DIR_SIGNATURE: u32 = 0x02014b50;
/// Standard ZIP end of central directory signature (`PK\x05\x06`).
pub const ZIP_EOCD_SIGNATURE: u32 = 0x06054b50;

/// HFS local file and central directory header signature (`HF\x01\x02`).
///
/// HFS deliberately uses the same value for both record types.
pub const HFS_FILE_SIGNATURE: u32 = 0x02014648;
/// HFS end of central directory signature (`HF\x05\x06`).
pub const HFS_EOCD_SIGNATURE: u32 = 0x06054648;

/// Read/write configuration for one archive flavor.
///
/// Presets are immutable once built; the `with_*` methods consume and
/// return the preset so callers can override individual fields on top of a
/// built-in starting point.
#[derive(Debug, Clone)]
pub struct Preset {
    /// Signature opening each local file record.
    pub local_file_signature: u32,
    /// Signature opening each central directory record.
    pub central_dir_signature: u32,
    /// Signature opening the EOCD record.
    pub eocd_signature: u32,
    /// Smallest plausible EOCD record size (bounds the backward search).
    pub eocd_min_size: u16,
    /// Largest plausible EOCD record size including trailing comment.
    pub eocd_max_size: u32,
    /// When set, replaces every entry's parsed compression method and
    /// disables the local-vs-central compression method cross-check.
    pub compression_method: Option<u16>,
    /// Cipher applied to file name bytes, if any.
    pub file_name_cipher: Option<CipherSpec>,
    /// Cipher applied to file content bytes, if any.
    pub file_content_cipher: Option<CipherSpec>,
}

impl Preset {
    /// Standard ZIP: `PK`-family signatures, no ciphers.
    pub fn zip() -> Self {
        Self {
            local_file_signature: ZIP_LOCAL_FILE_SIGNATURE,
            central_dir_signature: ZIP_CENTRAL_DIR_SIGNATURE,
            eocd_signature: ZIP_EOCD_SIGNATURE,
            eocd_min_size: EocdRecord::FULL_SIZE as u16,
            eocd_max_size: 0xFFFF,
            compression_method: None,
            file_name_cipher: None,
            file_content_cipher: None,
        }
    }

    /// HFS variant: relocated `HF`-family signatures and global XOR
    /// obfuscation of both file names and file content.
    ///
    /// `key` is the shared XOR key (shipped with the game client as a
    /// separate key file); its length must be a non-zero power of two.
    pub fn hfs(key: Vec<u8>) -> Self {
        Self {
            local_file_signature: HFS_FILE_SIGNATURE,
            central_dir_signature: HFS_FILE_SIGNATURE,
            eocd_signature: HFS_EOCD_SIGNATURE,
            file_name_cipher: Some(CipherSpec::global_xor(key.clone())),
            file_content_cipher: Some(CipherSpec::global_xor(key)),
            ..Self::zip()
        }
    }

    /// Override the compression method for every entry.
    pub fn with_compression_method(mut self, method: u16) -> Self {
        self.compression_method = Some(method);
        self
    }

    /// Override the file name cipher.
    pub fn with_name_cipher(mut self, cipher: CipherSpec) -> Self {
        self.file_name_cipher = Some(cipher);
        self
    }

    /// Override the file content cipher.
    pub fn with_content_cipher(mut self, cipher: CipherSpec) -> Self {
        self.file_content_cipher = Some(cipher);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_preset_values() {
        let preset = Preset::zip();
        assert_eq!(preset.eocd_min_size, 22);
        assert_eq!(preset.eocd_max_size, 0xFFFF);
        assert!(preset.file_name_cipher.is_none());
        assert!(preset.compression_method.is_none());
    }

    #[test]
    fn test_hfs_preset_relocates_signatures() {
        let preset = Preset::hfs(vec![0xAA; 16]);

        // Local and central directory signatures are deliberately identical.
        assert_eq!(preset.local_file_signature, preset.central_dir_signature);
        assert_eq!(preset.local_file_signature, 0x02014648);
        assert_eq!(preset.eocd_signature, 0x06054648);

        assert!(preset.file_name_cipher.is_some());
        assert!(preset.file_content_cipher.is_some());
    }

    #[test]
    fn test_builder_overrides() {
        let preset = Preset::zip().with_compression_method(8);
        assert_eq!(preset.compression_method, Some(8));
    }
}
