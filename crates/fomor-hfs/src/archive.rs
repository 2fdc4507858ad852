//! HFS archive codec - parse and write paths.
//!
//! Parsing walks the buffer in one strictly sequential pass: locate the
//! EOCD record by bounded backward search, size the entry table from its
//! record count, then for each central directory record cross-validate the
//! paired local file record, strip the cipher, and unwrap the custom
//! compression header. Writing is the deterministic inverse: local records,
//! central directory, EOCD, with offsets computed on the way.
//!
//! Every sliced field is copied out of the source buffer before the cipher
//! mutates it, so deciphering never aliases regions that later validation
//! steps still read.

use std::fs::File;
use std::path::Path;

use fomor_common::{BinaryReader, BinaryWriter};
use memmap2::Mmap;

use crate::compress;
use crate::entry::HfsEntry;
use crate::preset::Preset;
use crate::zip::{CentralDirectoryHeader, EocdRecord, LocalFileHeader};
use crate::{Error, Result};

/// A parsed archive: an ordered entry table plus the archive comment.
///
/// The entry count is fixed when the archive is parsed (it comes from the
/// EOCD record count); entries themselves may be mutated in place through
/// [`entries_mut`](Self::entries_mut).
///
/// # Example
///
/// ```no_run
/// use fomor_hfs::{HfsArchive, Preset};
///
/// let key = std::fs::read("XorTruths.bin")?;
/// let archive = HfsArchive::open("weapons.hfs", &Preset::hfs(key))?;
///
/// for entry in archive.iter() {
///     println!("{}: {} bytes", entry.filename(), entry.file_content.len());
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct HfsArchive {
    /// Entry table, one per central directory record.
    entries: Vec<HfsEntry>,
    /// Archive comment trailing the EOCD record.
    comment: Vec<u8>,
    /// Cached serialized form.
    buffer: Option<Vec<u8>>,
}

impl HfsArchive {
    /// Parse an archive from a complete in-memory buffer.
    pub fn from_bytes(source: &[u8], preset: &Preset) -> Result<Self> {
        let (entries, comment) = parse(source, preset)?;
        Ok(Self {
            entries,
            comment,
            buffer: None,
        })
    }

    /// Memory-map a file and parse it.
    pub fn open<P: AsRef<Path>>(path: P, preset: &Preset) -> Result<Self> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };
        Self::from_bytes(&mmap, preset)
    }

    /// Build an archive around an existing entry table, for writing.
    pub fn from_entries(entries: Vec<HfsEntry>) -> Self {
        Self {
            entries,
            comment: Vec::new(),
            buffer: None,
        }
    }

    /// Get the number of entries.
    #[inline]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Get the entry table.
    #[inline]
    pub fn entries(&self) -> &[HfsEntry] {
        &self.entries
    }

    /// Get mutable access to the entry table.
    ///
    /// Invalidates any cached serialized buffer, since the caller may change
    /// what the next [`to_bytes`](Self::to_bytes) call must reflect.
    pub fn entries_mut(&mut self) -> &mut [HfsEntry] {
        self.buffer = None;
        &mut self.entries
    }

    /// Iterate over entries.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &HfsEntry> {
        self.entries.iter()
    }

    /// Get an entry by index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&HfsEntry> {
        self.entries.get(index)
    }

    /// Find an entry by its decoded file name.
    pub fn find(&self, name: &str) -> Option<&HfsEntry> {
        self.entries.iter().find(|e| e.filename() == name)
    }

    /// Get the archive comment.
    #[inline]
    pub fn comment(&self) -> &[u8] {
        &self.comment
    }

    /// Replace the archive comment. Invalidates any cached buffer.
    pub fn set_comment(&mut self, comment: Vec<u8>) {
        self.comment = comment;
        self.buffer = None;
    }

    /// Serialize the archive, reusing the cached buffer when present.
    ///
    /// The cache is only rebuilt after [`entries_mut`](Self::entries_mut),
    /// [`set_comment`](Self::set_comment) or
    /// [`invalidate_buffer`](Self::invalidate_buffer).
    pub fn to_bytes(&mut self, preset: &Preset) -> Result<&[u8]> {
        if self.buffer.is_none() {
            self.buffer = Some(self.write_buffer(preset)?);
        }
        Ok(self.buffer.as_deref().unwrap_or_default())
    }

    /// Drop the cached serialized buffer.
    pub fn invalidate_buffer(&mut self) {
        self.buffer = None;
    }

    /// Serialize the archive into a fresh buffer.
    ///
    /// A single forward pass emits three record groups: each entry's local
    /// file record and data, then the central directory, then the EOCD
    /// record and archive comment. Entries are written as they are:
    /// `content` and `file_content` must already be in final on-disk form,
    /// and no cipher is applied. No validation is performed either; entries
    /// whose fields exceed the record layout's ranges serialize to a
    /// malformed buffer, not an error.
    pub fn write_buffer(&self, preset: &Preset) -> Result<Vec<u8>> {
        let mut writer = BinaryWriter::new(Vec::new());
        let mut entry_offsets = Vec::with_capacity(self.entries.len());

        for entry in &self.entries {
            entry_offsets.push(writer.position() as u32);

            writer.write_u32(preset.local_file_signature)?;
            writer.write_struct(&LocalFileHeader {
                version_needed: entry.version_needed,
                flags: entry.flags,
                compression_method: effective_method(entry, preset),
                last_mod_time: entry.last_mod_time,
                last_mod_date: entry.last_mod_date,
                crc32: entry.crc32,
                compressed_size: entry.content.len() as u32,
                uncompressed_size: entry.file_content.len() as u32,
                file_name_length: entry.name.len() as u16,
                extra_field_length: entry.extra_field.len() as u16,
            })?;
            writer.write_bytes(&entry.name)?;
            writer.write_bytes(&entry.extra_field)?;
            writer.write_bytes(&entry.content)?;
        }

        let central_dir_start = writer.position();

        for (entry, &offset) in self.entries.iter().zip(&entry_offsets) {
            writer.write_u32(preset.central_dir_signature)?;
            writer.write_struct(&CentralDirectoryHeader {
                version_made_by: entry.version_made_by,
                version_needed: entry.version_needed,
                flags: entry.flags,
                compression_method: effective_method(entry, preset),
                last_mod_time: entry.last_mod_time,
                last_mod_date: entry.last_mod_date,
                crc32: entry.crc32,
                compressed_size: entry.content.len() as u32,
                uncompressed_size: entry.file_content.len() as u32,
                file_name_length: entry.name.len() as u16,
                extra_field_length: entry.extra_field.len() as u16,
                file_comment_length: entry.comment.len() as u16,
                disk_number_start: entry.disk_number_start,
                internal_attrs: entry.internal_attrs,
                external_attrs: entry.external_attrs,
                local_header_offset: offset,
            })?;
            writer.write_bytes(&entry.name)?;
            writer.write_bytes(&entry.extra_field)?;
            writer.write_bytes(&entry.comment)?;
        }

        let central_dir_size = writer.position() - central_dir_start;

        writer.write_u32(preset.eocd_signature)?;
        writer.write_struct(&EocdRecord {
            disk_number: 0,
            central_dir_disk: 0,
            central_dir_count_disk: self.entries.len() as u16,
            central_dir_count_total: self.entries.len() as u16,
            central_dir_size: central_dir_size as u32,
            central_dir_offset: central_dir_start as u32,
            comment_length: self.comment.len() as u16,
        })?;
        writer.write_bytes(&self.comment)?;

        Ok(writer.into_inner())
    }
}

/// The method written to both header copies: the preset override when
/// configured, the entry's own method otherwise.
fn effective_method(entry: &HfsEntry, preset: &Preset) -> u16 {
    preset.compression_method.unwrap_or(entry.compression_method)
}

impl std::fmt::Debug for HfsArchive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HfsArchive")
            .field("entries", &self.entries.len())
            .field("comment_len", &self.comment.len())
            .finish()
    }
}

// Parse internals

fn parse(source: &[u8], preset: &Preset) -> Result<(Vec<HfsEntry>, Vec<u8>)> {
    let eocd_offset = find_eocd(source, preset)?;

    let mut reader = BinaryReader::new_at(source, eocd_offset);
    reader.advance(4); // signature already validated by the search
    let eocd: EocdRecord = reader.read_struct()?;
    let comment = reader.read_bytes(eocd.comment_length as usize)?.to_vec();

    let count = eocd.central_dir_count_total as usize;
    let mut entries = Vec::with_capacity(count);

    // Central directory records are contiguous; each record's total length
    // advances the cursor to the next.
    let mut cursor = eocd.central_dir_offset as usize;

    for _ in 0..count {
        let (entry, record_len) = parse_entry(source, cursor, preset)?;
        entries.push(entry);
        cursor += record_len;
    }

    Ok((entries, comment))
}

/// Locate the EOCD signature by bounded backward search.
///
/// The record sits at most `eocd_max_size` bytes from the end (bounding the
/// trailing comment length) and at least `eocd_min_size` bytes (the fixed
/// record itself), so only that window is scanned, never the whole file.
fn find_eocd(source: &[u8], preset: &Preset) -> Result<usize> {
    let min_size = preset.eocd_min_size as usize;
    let max_size = preset.eocd_max_size as usize;

    if source.len() < min_size {
        return Err(Error::EocdNotFound);
    }

    // A signature match at `i` must leave room for the full fixed record.
    let window_start = source.len().saturating_sub(max_size);
    let window_end = source.len() - min_size + 4;
    let window = &source[window_start..window_end.max(window_start)];

    let signature = preset.eocd_signature.to_le_bytes();

    memchr::memmem::rfind(window, &signature)
        .map(|pos| window_start + pos)
        .ok_or(Error::EocdNotFound)
}

/// Parse one central directory record plus its paired local file record.
///
/// Returns the populated entry and the central directory record's total
/// length (fixed header plus name, extra field and comment).
fn parse_entry(
    source: &[u8],
    record_offset: usize,
    preset: &Preset,
) -> Result<(HfsEntry, usize)> {
    let mut reader = BinaryReader::new_at(source, record_offset);

    let signature = reader.read_u32()?;
    if signature != preset.central_dir_signature {
        return Err(Error::InvalidSignature {
            record: "central directory header",
            expected: preset.central_dir_signature,
            actual: signature,
        });
    }

    let header: CentralDirectoryHeader = reader.read_struct()?;
    let name = reader.read_bytes(header.file_name_length as usize)?.to_vec();
    let extra_field = reader
        .read_bytes(header.extra_field_length as usize)?
        .to_vec();
    let comment = reader
        .read_bytes(header.file_comment_length as usize)?
        .to_vec();

    let record_len = CentralDirectoryHeader::FULL_SIZE + header.variable_data_size();

    let mut entry = HfsEntry {
        version_made_by: header.version_made_by,
        version_needed: header.version_needed,
        flags: header.flags,
        compression_method: header.compression_method,
        last_mod_time: header.last_mod_time,
        last_mod_date: header.last_mod_date,
        crc32: header.crc32,
        compressed_size: header.compressed_size,
        uncompressed_size: header.uncompressed_size,
        disk_number_start: header.disk_number_start,
        internal_attrs: header.internal_attrs,
        external_attrs: header.external_attrs,
        name,
        extra_field,
        comment,
        content: Vec::new(),
        file_content: Vec::new(),
    };

    // The override replaces the parsed method unconditionally.
    if let Some(method) = preset.compression_method {
        entry.compression_method = method;
    }

    if let Some(cipher) = &preset.file_name_cipher {
        // Keyed by the absolute offset of the name field in the source.
        cipher.apply(
            &mut entry.name,
            record_offset + CentralDirectoryHeader::FULL_SIZE,
        )?;
    }

    read_local_file(source, &mut entry, preset, header.local_header_offset as usize)?;

    entry.update_crc32();

    Ok((entry, record_len))
}

/// Validate the local file record against the central directory copy and
/// decode the entry's payload.
fn read_local_file(
    source: &[u8],
    entry: &mut HfsEntry,
    preset: &Preset,
    local_offset: usize,
) -> Result<()> {
    let mut reader = BinaryReader::new_at(source, local_offset);

    let signature = reader.read_u32()?;
    if signature != preset.local_file_signature {
        return Err(Error::InvalidSignature {
            record: "local file header",
            expected: preset.local_file_signature,
            actual: signature,
        });
    }

    let header: LocalFileHeader = reader.read_struct()?;

    // The local header duplicates the central directory fields; every copy
    // must agree exactly. The compression method check is skipped when an
    // override is active, since the parsed values were already replaced.
    cross_check(
        "required version",
        header.version_needed,
        entry.version_needed,
    )?;
    cross_check("bit flag", header.flags, entry.flags)?;
    if preset.compression_method.is_none() {
        cross_check(
            "compression method",
            header.compression_method,
            entry.compression_method,
        )?;
    }
    cross_check(
        "last modification time",
        header.last_mod_time,
        entry.last_mod_time,
    )?;
    cross_check(
        "last modification date",
        header.last_mod_date,
        entry.last_mod_date,
    )?;
    cross_check("CRC-32", header.crc32, entry.crc32)?;
    cross_check(
        "compressed size",
        header.compressed_size,
        entry.compressed_size,
    )?;
    cross_check(
        "uncompressed size",
        header.uncompressed_size,
        entry.uncompressed_size,
    )?;
    cross_check(
        "file name length",
        header.file_name_length as u64,
        entry.name.len() as u64,
    )?;
    cross_check(
        "extra field length",
        header.extra_field_length as u64,
        entry.extra_field.len() as u64,
    )?;

    let name_len = header.file_name_length as usize;
    let extra_len = header.extra_field_length as usize;

    let mut local_name = reader.read_bytes(name_len)?.to_vec();
    let local_extra = reader.read_bytes(extra_len)?;
    let mut content = reader.read_bytes(entry.compressed_size as usize)?.to_vec();

    if let Some(cipher) = &preset.file_name_cipher {
        cipher.apply(&mut local_name, local_offset + LocalFileHeader::FULL_SIZE)?;
    }

    if local_name != entry.name {
        return Err(Error::NameMismatch);
    }
    if local_extra != entry.extra_field.as_slice() {
        return Err(Error::ExtraFieldMismatch);
    }

    if let Some(cipher) = &preset.file_content_cipher {
        let data_offset = local_offset + LocalFileHeader::FULL_SIZE + name_len + extra_len;
        cipher.apply(&mut content, data_offset)?;
    }

    if compress::is_wrapped(&content) {
        // The stored content loses the wrapper header once decoded: it is
        // regenerated as a bare raw-DEFLATE stream of the decoded payload.
        entry.file_content = compress::inflate_raw(
            &content[compress::WRAPPER_HEADER_SIZE..],
            entry.uncompressed_size as usize,
        )?;
        entry.content = compress::deflate_raw(&entry.file_content)?;
    } else {
        entry.file_content = content.clone();
        entry.content = content;
    }

    Ok(())
}

fn cross_check(field: &'static str, local: impl Into<u64>, central: impl Into<u64>) -> Result<()> {
    let (local, central) = (local.into(), central.into());
    if local != central {
        return Err(Error::FieldMismatch {
            field,
            local,
            central,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::CipherSpec;
    use fomor_common::crc;

    fn stored_entry(name: &[u8], data: &[u8]) -> HfsEntry {
        let mut entry = HfsEntry {
            version_made_by: 20,
            version_needed: 10,
            name: name.to_vec(),
            content: data.to_vec(),
            file_content: data.to_vec(),
            compressed_size: data.len() as u32,
            uncompressed_size: data.len() as u32,
            ..Default::default()
        };
        entry.update_crc32();
        entry
    }

    fn two_entry_archive() -> HfsArchive {
        HfsArchive::from_entries(vec![
            stored_entry(b"a.txt", b"hello"),
            stored_entry(b"b.txt", b"world"),
        ])
    }

    #[test]
    fn test_parse_two_entry_zip() {
        let buffer = two_entry_archive().write_buffer(&Preset::zip()).unwrap();
        let parsed = HfsArchive::from_bytes(&buffer, &Preset::zip()).unwrap();

        assert_eq!(parsed.entry_count(), 2);
        assert_eq!(parsed.entries()[0].filename(), "a.txt");
        assert_eq!(parsed.entries()[0].file_content, b"hello");
        assert_eq!(parsed.entries()[0].crc32, crc::hash_bytes(b"hello"));
        assert_eq!(parsed.entries()[1].filename(), "b.txt");
        assert_eq!(parsed.entries()[1].file_content, b"world");
    }

    #[test]
    fn test_round_trip_preserves_entries() {
        let mut original = two_entry_archive();
        original.set_comment(b"packed by fomor".to_vec());

        let buffer = original.write_buffer(&Preset::zip()).unwrap();
        let parsed = HfsArchive::from_bytes(&buffer, &Preset::zip()).unwrap();

        assert_eq!(parsed.comment(), b"packed by fomor");
        for (a, b) in original.entries().iter().zip(parsed.entries()) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.content, b.content);
            assert_eq!(a.file_content, b.file_content);
            assert_eq!(a.crc32, b.crc32);
            assert_eq!(a.version_needed, b.version_needed);
            assert_eq!(a.compressed_size, b.compressed_size);
            assert_eq!(a.uncompressed_size, b.uncompressed_size);
        }
    }

    #[test]
    fn test_eocd_found_behind_comment() {
        let mut archive = two_entry_archive();
        archive.set_comment(vec![b'x'; 4096]);

        let buffer = archive.write_buffer(&Preset::zip()).unwrap();
        let parsed = HfsArchive::from_bytes(&buffer, &Preset::zip()).unwrap();

        assert_eq!(parsed.comment().len(), 4096);
        assert_eq!(parsed.entry_count(), 2);
    }

    #[test]
    fn test_eocd_not_found() {
        let result = HfsArchive::from_bytes(&[0u8; 512], &Preset::zip());
        assert!(matches!(result, Err(Error::EocdNotFound)));

        // Too small to hold even the fixed record.
        let result = HfsArchive::from_bytes(&[0u8; 8], &Preset::zip());
        assert!(matches!(result, Err(Error::EocdNotFound)));
    }

    #[test]
    fn test_corrupt_local_crc_rejected() {
        let mut buffer = two_entry_archive().write_buffer(&Preset::zip()).unwrap();
        // First local record starts at 0; CRC-32 sits at offset 4 + 10.
        buffer[14] ^= 0xFF;

        let result = HfsArchive::from_bytes(&buffer, &Preset::zip());
        assert!(matches!(
            result,
            Err(Error::FieldMismatch { field: "CRC-32", .. })
        ));
    }

    #[test]
    fn test_corrupt_local_bit_flag_rejected() {
        let mut buffer = two_entry_archive().write_buffer(&Preset::zip()).unwrap();
        buffer[6] ^= 0x01; // bit flag at local offset 4 + 2

        let result = HfsArchive::from_bytes(&buffer, &Preset::zip());
        assert!(matches!(
            result,
            Err(Error::FieldMismatch {
                field: "bit flag",
                ..
            })
        ));
    }

    #[test]
    fn test_corrupt_signatures_rejected() {
        let preset = Preset::zip();
        let clean = two_entry_archive().write_buffer(&preset).unwrap();

        let mut buffer = clean.clone();
        buffer[0] ^= 0xFF; // first local file signature byte
        assert!(matches!(
            HfsArchive::from_bytes(&buffer, &preset),
            Err(Error::InvalidSignature {
                record: "local file header",
                ..
            })
        ));

        // First central directory record follows both local records.
        let cd_start = 2 * (30 + 5 + 5);
        let mut buffer = clean.clone();
        buffer[cd_start] ^= 0xFF;
        assert!(matches!(
            HfsArchive::from_bytes(&buffer, &preset),
            Err(Error::InvalidSignature {
                record: "central directory header",
                ..
            })
        ));
    }

    #[test]
    fn test_compression_override_skips_cross_check() {
        let clean = two_entry_archive().write_buffer(&Preset::zip()).unwrap();

        // Desync the first local record's compression method field.
        let mut buffer = clean;
        buffer[8] ^= 0x08;

        assert!(matches!(
            HfsArchive::from_bytes(&buffer, &Preset::zip()),
            Err(Error::FieldMismatch {
                field: "compression method",
                ..
            })
        ));

        // With an override the check is skipped and the override wins.
        let preset = Preset::zip().with_compression_method(0);
        let parsed = HfsArchive::from_bytes(&buffer, &preset).unwrap();
        assert_eq!(parsed.entries()[0].compression_method, 0);
    }

    #[test]
    fn test_comp_wrapper_decode() {
        let payload = b"the chained prisoner of the depths";
        let mut wrapped = b"comp\x00\x00\x00\x00".to_vec();
        wrapped.extend_from_slice(&compress::deflate_raw(payload).unwrap());

        let mut entry = stored_entry(b"lore.txt", &wrapped);
        // The written headers declare sizes from the two payload fields:
        // compressed from `content`, uncompressed from `file_content`.
        entry.file_content = payload.to_vec();

        let buffer = HfsArchive::from_entries(vec![entry])
            .write_buffer(&Preset::zip())
            .unwrap();
        let parsed = HfsArchive::from_bytes(&buffer, &Preset::zip()).unwrap();

        let decoded = &parsed.entries()[0];
        assert_eq!(decoded.file_content, payload);
        // The wrapper header is gone: content is a bare raw-DEFLATE stream.
        assert_eq!(decoded.content, compress::deflate_raw(payload).unwrap());
        assert_eq!(decoded.crc32, crc::hash_bytes(payload));
    }

    #[test]
    fn test_plain_content_passes_through() {
        let buffer = two_entry_archive().write_buffer(&Preset::zip()).unwrap();
        let parsed = HfsArchive::from_bytes(&buffer, &Preset::zip()).unwrap();

        let entry = &parsed.entries()[0];
        assert_eq!(entry.content, entry.file_content);
    }

    #[test]
    fn test_hfs_preset_end_to_end() {
        let key = vec![0x5A, 0x3C, 0x99, 0x01, 0xEE, 0x42, 0x10, 0xFF];
        let entries = vec![
            stored_entry(b"cloth.dds", b"texture bytes here"),
            stored_entry(b"spear.nif", b"mesh data"),
        ];

        // The writer never applies ciphers, so obfuscate the produced
        // buffer the way the game client would: names and content XORed
        // in place, keyed by their absolute offsets.
        let preset = Preset::hfs(key.clone());
        let mut buffer = HfsArchive::from_entries(entries.clone())
            .write_buffer(&preset)
            .unwrap();

        let cipher = CipherSpec::global_xor(key);
        let mut offset = 0usize;
        for entry in &entries {
            let name_at = offset + 30;
            let data_at = name_at + entry.name.len();
            cipher
                .apply(&mut buffer[name_at..data_at], name_at)
                .unwrap();
            cipher
                .apply(
                    &mut buffer[data_at..data_at + entry.content.len()],
                    data_at,
                )
                .unwrap();
            offset = data_at + entry.content.len();
        }
        for entry in &entries {
            let name_at = offset + 46;
            cipher
                .apply(&mut buffer[name_at..name_at + entry.name.len()], name_at)
                .unwrap();
            offset = name_at + entry.name.len();
        }

        let parsed = HfsArchive::from_bytes(&buffer, &preset).unwrap();

        assert_eq!(parsed.entry_count(), 2);
        assert_eq!(parsed.entries()[0].filename(), "cloth.dds");
        assert_eq!(parsed.entries()[0].file_content, b"texture bytes here");
        assert_eq!(parsed.entries()[1].filename(), "spear.nif");
        assert_eq!(parsed.entries()[1].file_content, b"mesh data");
    }

    #[test]
    fn test_buffer_cache_invalidation() {
        let mut archive = two_entry_archive();
        let preset = Preset::zip();

        let first = archive.to_bytes(&preset).unwrap().to_vec();
        // Cached: same bytes come back without rebuilding.
        assert_eq!(archive.to_bytes(&preset).unwrap(), &first[..]);

        // Mutable access drops the cache; the rebuilt buffer reflects the
        // mutation.
        archive.entries_mut()[0].file_content = b"changed".to_vec();
        archive.entries_mut()[0].content = b"changed".to_vec();
        archive.entries_mut()[0].update_crc32();

        let second = archive.to_bytes(&preset).unwrap().to_vec();
        assert_ne!(first, second);

        let parsed = HfsArchive::from_bytes(&second, &preset).unwrap();
        assert_eq!(parsed.entries()[0].file_content, b"changed");
    }

    #[test]
    fn test_find_by_filename() {
        let buffer = two_entry_archive().write_buffer(&Preset::zip()).unwrap();
        let parsed = HfsArchive::from_bytes(&buffer, &Preset::zip()).unwrap();

        assert!(parsed.find("b.txt").is_some());
        assert!(parsed.find("missing.txt").is_none());
    }
}
