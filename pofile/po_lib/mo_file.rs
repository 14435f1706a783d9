//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! GNU .mo file format writer and reader
//!
//! The .mo (Machine Object) file format is the binary format used by GNU gettext
//! for storing translated message catalogs. Layout (4-byte words):
//!
//! ```text
//! offset 0:  magic = 0x950412de
//! offset 4:  revision = 0
//! offset 8:  N, number of strings
//! offset 12: offset of table with original strings (28)
//! offset 16: offset of table with translation strings (28 + 8N)
//! offset 20: size of hashing table (0, no hash table is written)
//! offset 24: offset of hashing table (28 + 16N)
//! N x (length, offset) descriptors of original strings, sorted
//! N x (length, offset) descriptors of translation strings
//! NUL-terminated original strings, then NUL-terminated translations
//! ```

use std::io::Read;

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::po_lib::catalog::Catalog;
use crate::po_lib::entry::{PoEntry, Translation, CONTEXT_SEPARATOR};

/// Magic number for little-endian .mo files
pub const MO_MAGIC_LE: u32 = 0x950412de;

/// Magic number for big-endian .mo files
pub const MO_MAGIC_BE: u32 = 0xde120495;

/// Header of a .mo file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoHeader {
    /// Magic number (determines endianness)
    pub magic: u32,
    /// File format revision (0 or 1)
    pub revision: u32,
    /// Number of strings
    pub nstrings: u32,
    /// Offset of table with original strings
    pub orig_tab_offset: u32,
    /// Offset of table with translation strings
    pub trans_tab_offset: u32,
    /// Size of hashing table
    pub hash_tab_size: u32,
    /// Offset of hashing table
    pub hash_tab_offset: u32,
}

impl MoHeader {
    /// Size of the header in bytes
    pub const SIZE: usize = 28;
}

/// A string descriptor (length + offset pair) in the .mo file
#[derive(Debug, Clone, Copy, Default)]
pub struct StringDescriptor {
    /// Length of the string (excluding null terminator)
    pub length: u32,
    /// Offset of the string from the start of the file
    pub offset: u32,
}

impl StringDescriptor {
    /// Size of a string descriptor in bytes
    pub const SIZE: usize = 8;
}

/// One original/translation pair as stored in a .mo file
///
/// `id` is `[msgctxt EOT] msgid [NUL msgid_plural]`; plural translations
/// are NUL-separated in `translation`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoMessage {
    pub id: String,
    pub translation: String,
}

impl MoMessage {
    /// The lookup part of the id (without the plural original)
    pub fn key(&self) -> &str {
        self.id.split('\0').next().unwrap_or_default()
    }
}

/// Parsed .mo file
#[derive(Debug, Clone)]
pub struct MoFile {
    /// File header
    pub header: MoHeader,
    /// Whether the file is little-endian
    pub is_little_endian: bool,
    /// Messages in file (sorted) order
    pub messages: Vec<MoMessage>,
}

/// Error type for .mo file reading
#[derive(thiserror::Error, Debug)]
pub enum MoError {
    #[error("invalid magic number: 0x{0:08x}")]
    InvalidMagic(u32),
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

struct EncodedEntry {
    id_len: usize,
    id_offset: usize,
    str_len: usize,
    str_offset: usize,
}

impl Catalog {
    /// Encode the catalog in .mo format
    ///
    /// Entries are written sorted by composite key, so the output only
    /// depends on the set of entries, not on their insertion order.
    pub fn to_mo_bytes(&self) -> Vec<u8> {
        let mut sorted: Vec<(&str, &PoEntry)> = self.iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(b.0));

        let mut ids: Vec<u8> = Vec::new();
        let mut strings: Vec<u8> = Vec::new();
        let mut encoded = Vec::with_capacity(sorted.len());

        for (key, entry) in &sorted {
            let mut id = key.as_bytes().to_vec();
            if let Some(plural) = &entry.msgid_plural {
                id.push(0);
                id.extend_from_slice(plural.as_bytes());
            }
            let translation = entry.translation.to_mo_bytes();

            encoded.push(EncodedEntry {
                id_len: id.len(),
                id_offset: ids.len(),
                str_len: translation.len(),
                str_offset: strings.len(),
            });

            ids.extend_from_slice(&id);
            ids.push(0);
            strings.extend_from_slice(&translation);
            strings.push(0);
        }

        let nstrings = sorted.len() as u32;
        let orig_tab_offset = MoHeader::SIZE as u32;
        let trans_tab_offset = orig_tab_offset + nstrings * StringDescriptor::SIZE as u32;
        let key_start = trans_tab_offset + nstrings * StringDescriptor::SIZE as u32;
        let value_start = key_start + ids.len() as u32;

        let mut words: Vec<u32> = vec![
            MO_MAGIC_LE,
            0, // revision
            nstrings,
            orig_tab_offset,
            trans_tab_offset,
            0, // hash table size (unused)
            key_start,
        ];
        for e in &encoded {
            words.push(e.id_len as u32);
            words.push(key_start + e.id_offset as u32);
        }
        for e in &encoded {
            words.push(e.str_len as u32);
            words.push(value_start + e.str_offset as u32);
        }

        let mut data = vec![0u8; words.len() * 4];
        LittleEndian::write_u32_into(&words, &mut data);
        data.reserve(ids.len() + strings.len());
        data.extend_from_slice(&ids);
        data.extend_from_slice(&strings);

        log::debug!("encoded {} messages into {} bytes", nstrings, data.len());
        data
    }
}

impl MoFile {
    /// Read a .mo file from bytes
    pub fn read(data: &[u8]) -> Result<Self, MoError> {
        if data.len() < MoHeader::SIZE {
            return Err(MoError::InvalidFormat("file too small".to_string()));
        }

        let is_little_endian = match LittleEndian::read_u32(&data[0..4]) {
            MO_MAGIC_LE => true,
            MO_MAGIC_BE => false,
            magic => return Err(MoError::InvalidMagic(magic)),
        };

        let header = Self::read_header(data, is_little_endian);
        if header.revision > 1 {
            return Err(MoError::InvalidFormat(format!(
                "unsupported revision: {}",
                header.revision
            )));
        }

        let messages = Self::read_messages(data, &header, is_little_endian)?;

        Ok(MoFile {
            header,
            is_little_endian,
            messages,
        })
    }

    /// Read a .mo file from a reader
    pub fn read_from<R: Read>(mut reader: R) -> Result<Self, MoError> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::read(&data)
    }

    fn read_header(data: &[u8], le: bool) -> MoHeader {
        MoHeader {
            magic: Self::read_u32(data, 0, le),
            revision: Self::read_u32(data, 4, le),
            nstrings: Self::read_u32(data, 8, le),
            orig_tab_offset: Self::read_u32(data, 12, le),
            trans_tab_offset: Self::read_u32(data, 16, le),
            hash_tab_size: Self::read_u32(data, 20, le),
            hash_tab_offset: Self::read_u32(data, 24, le),
        }
    }

    fn read_messages(data: &[u8], header: &MoHeader, le: bool) -> Result<Vec<MoMessage>, MoError> {
        let mut messages = Vec::new();

        for i in 0..header.nstrings as usize {
            let orig_offset = header.orig_tab_offset as usize + i * StringDescriptor::SIZE;
            let orig_desc = Self::read_string_descriptor(data, orig_offset, le)?;

            let trans_offset = header.trans_tab_offset as usize + i * StringDescriptor::SIZE;
            let trans_desc = Self::read_string_descriptor(data, trans_offset, le)?;

            messages.push(MoMessage {
                id: Self::read_string(data, &orig_desc)?,
                translation: Self::read_string(data, &trans_desc)?,
            });
        }

        Ok(messages)
    }

    fn read_string_descriptor(
        data: &[u8],
        offset: usize,
        le: bool,
    ) -> Result<StringDescriptor, MoError> {
        if offset + StringDescriptor::SIZE > data.len() {
            return Err(MoError::InvalidFormat(
                "string descriptor out of bounds".to_string(),
            ));
        }

        Ok(StringDescriptor {
            length: Self::read_u32(data, offset, le),
            offset: Self::read_u32(data, offset + 4, le),
        })
    }

    fn read_string(data: &[u8], desc: &StringDescriptor) -> Result<String, MoError> {
        let start = desc.offset as usize;
        let end = start + desc.length as usize;

        if end > data.len() {
            return Err(MoError::InvalidFormat(
                "string data out of bounds".to_string(),
            ));
        }

        Ok(String::from_utf8(data[start..end].to_vec())?)
    }

    fn read_u32(data: &[u8], offset: usize, le: bool) -> u32 {
        let bytes = &data[offset..offset + 4];
        if le {
            LittleEndian::read_u32(bytes)
        } else {
            BigEndian::read_u32(bytes)
        }
    }

    /// Look up the translation stored for a composite key
    pub fn gettext(&self, key: &str) -> Option<&str> {
        // the original-string table is sorted
        self.messages
            .binary_search_by(|m| m.key().cmp(key))
            .ok()
            .map(|idx| self.messages[idx].translation.as_str())
    }

    /// Rebuild a catalog from the decoded messages
    pub fn to_catalog(&self) -> Catalog {
        let mut catalog = Catalog::new();

        for message in &self.messages {
            let (key, msgid_plural) = match message.id.split_once('\0') {
                Some((key, plural)) => (key, Some(plural.to_string())),
                None => (message.id.as_str(), None),
            };
            let (msgctxt, msgid) = match key.split_once(CONTEXT_SEPARATOR) {
                Some((ctxt, msgid)) => (Some(ctxt.to_string()), msgid),
                None => (None, key),
            };

            let translation = if msgid_plural.is_some() || message.translation.contains('\0') {
                Translation::plural(message.translation.split('\0'))
            } else {
                Translation::Singular(message.translation.clone())
            };

            catalog.insert(PoEntry {
                msgctxt,
                msgid: msgid.to_string(),
                msgid_plural,
                translation,
                ..Default::default()
            });
        }

        catalog
    }
}
