//! HFS archive entry.

use fomor_common::crc;

/// One archived file: its metadata and both forms of its payload.
///
/// Entries are created by the parse path, fully populated within that pass,
/// and mutable in place afterwards. Two payload fields coexist:
///
/// - `content` holds the bytes as they sit on disk after decipher (for
///   entries that carried the custom compression wrapper, this is the
///   re-deflated payload with the wrapper header stripped),
/// - `file_content` holds the decoded logical file bytes.
///
/// After mutating `file_content`, call [`update_crc32`](Self::update_crc32);
/// `crc32` is never recomputed automatically.
#[derive(Debug, Clone, Default)]
pub struct HfsEntry {
    /// Version of the tool that made the entry.
    pub version_made_by: u16,
    /// Version needed to extract.
    pub version_needed: u16,
    /// General purpose bit flag.
    pub flags: u16,
    /// Compression method.
    pub compression_method: u16,
    /// Last modification time (DOS format).
    pub last_mod_time: u16,
    /// Last modification date (DOS format).
    pub last_mod_date: u16,
    /// CRC-32 of `file_content`.
    pub crc32: u32,
    /// Compressed size as declared on disk.
    pub compressed_size: u32,
    /// Uncompressed size as declared on disk.
    pub uncompressed_size: u32,
    /// Disk number where the entry starts.
    pub disk_number_start: u16,
    /// Internal file attributes.
    pub internal_attrs: u16,
    /// External file attributes.
    pub external_attrs: u32,
    /// File name as raw bytes (deciphered, but not decoded to UTF-8).
    pub name: Vec<u8>,
    /// Extra field bytes.
    pub extra_field: Vec<u8>,
    /// Entry comment bytes.
    pub comment: Vec<u8>,
    /// On-disk payload form.
    pub content: Vec<u8>,
    /// Decoded logical payload.
    pub file_content: Vec<u8>,
}

impl HfsEntry {
    /// The file name as a string, interpreting each raw byte as a code point.
    ///
    /// HFS names are not declared to be UTF-8; this is the same byte-for-byte
    /// view the game client uses.
    pub fn filename(&self) -> String {
        self.name.iter().map(|&b| char::from(b)).collect()
    }

    /// Recompute `crc32` from the current `file_content`.
    pub fn update_crc32(&mut self) {
        self.crc32 = crc::hash_bytes(&self.file_content);
    }

    /// Check if this entry represents a directory.
    #[inline]
    pub fn is_dir(&self) -> bool {
        matches!(self.name.last(), Some(b'/') | Some(b'\\'))
    }

    /// Decode the DOS modification date as (year, month, day).
    pub fn mod_date(&self) -> (u16, u8, u8) {
        let day = (self.last_mod_date & 0x1F) as u8;
        let month = ((self.last_mod_date >> 5) & 0x0F) as u8;
        let year = (self.last_mod_date >> 9) + 1980;
        (year, month, day)
    }

    /// Decode the DOS modification time as (hour, minute, second).
    pub fn mod_time(&self) -> (u8, u8, u8) {
        let second = ((self.last_mod_time & 0x1F) * 2) as u8;
        let minute = ((self.last_mod_time >> 5) & 0x3F) as u8;
        let hour = (self.last_mod_time >> 11) as u8;
        (hour, minute, second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_from_raw_bytes() {
        let entry = HfsEntry {
            name: b"weapons/sp\xE4rda.txt".to_vec(),
            ..Default::default()
        };

        // Bytes above 0x7F map to the matching code point, not UTF-8.
        assert_eq!(entry.filename(), "weapons/sp\u{e4}rda.txt");
    }

    #[test]
    fn test_update_crc32() {
        let mut entry = HfsEntry {
            file_content: b"123456789".to_vec(),
            ..Default::default()
        };

        entry.update_crc32();
        assert_eq!(entry.crc32, 0xCBF43926);

        entry.file_content.clear();
        entry.update_crc32();
        assert_eq!(entry.crc32, 0);
    }

    #[test]
    fn test_is_dir() {
        let dir = HfsEntry {
            name: b"data/maps/".to_vec(),
            ..Default::default()
        };
        assert!(dir.is_dir());

        let file = HfsEntry {
            name: b"data/maps/colhen.map".to_vec(),
            ..Default::default()
        };
        assert!(!file.is_dir());
    }

    #[test]
    fn test_dos_datetime_decode() {
        // 2009-06-15 17:40:52 in DOS encoding.
        let entry = HfsEntry {
            last_mod_date: (29 << 9) | (6 << 5) | 15,
            last_mod_time: (17 << 11) | (40 << 5) | (52 / 2),
            ..Default::default()
        };

        assert_eq!(entry.mod_date(), (2009, 6, 15));
        assert_eq!(entry.mod_time(), (17, 40, 52));
    }
}
