//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Ordered, uniquely keyed message catalog
//!
//! A `Catalog` keeps entries in insertion order (which is the order they
//! are written back to .po text) while indexing them by composite key for
//! duplicate detection and lookups.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use crate::po_lib::entry::{compose_key, PoEntry, Translation};
use crate::po_lib::error::{PoError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub(crate) entries: IndexMap<String, PoEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Read and parse a .po file
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PoError::FileNotFound(path.to_path_buf()));
        }

        let text = fs::read_to_string(path)?;
        let catalog = Catalog::parse(&text)?;
        log::debug!("{}: read {} entries", path.display(), catalog.len());
        Ok(catalog)
    }

    /// Write the catalog as .po text
    pub fn write_po<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_po_string())?;
        Ok(())
    }

    /// Write the catalog as a binary .mo file
    pub fn write_mo<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_mo_bytes())?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by composite key (see [`compose_key`])
    pub fn get(&self, key: &str) -> Option<&PoEntry> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Header entry (msgid = "")
    pub fn header(&self) -> Option<&PoEntry> {
        self.entries.get("")
    }

    /// Entries in insertion order
    pub fn entries(&self) -> impl Iterator<Item = &PoEntry> {
        self.entries.values()
    }

    /// (key, entry) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PoEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Insert an entry, replacing (in place) any entry with the same key
    pub(crate) fn insert(&mut self, entry: PoEntry) -> Option<PoEntry> {
        self.entries.insert(entry.key(), entry)
    }

    /// Add a singular message; ignored when `msgid` is empty
    pub fn add_message(&mut self, msgid: &str, msgstr: &str, context: Option<&str>) {
        self.add(msgid, None, context, Translation::from(msgstr));
    }

    /// Add a message with optional plural form and context
    ///
    /// Ignored when `msgid` is empty. Empty `msgid_plural` and `msgctxt`
    /// values are treated as absent.
    pub fn add(
        &mut self,
        msgid: &str,
        msgid_plural: Option<&str>,
        msgctxt: Option<&str>,
        translation: Translation,
    ) {
        if msgid.is_empty() {
            return;
        }

        let entry = PoEntry {
            msgctxt: msgctxt.filter(|s| !s.is_empty()).map(str::to_string),
            msgid: msgid.to_string(),
            msgid_plural: msgid_plural.filter(|s| !s.is_empty()).map(str::to_string),
            translation,
            ..Default::default()
        };
        self.insert(entry);
    }

    /// Add messages together with their translations
    pub fn add_messages<I, K, V>(&mut self, messages: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (msgid, msgstr) in messages {
            self.add_message(msgid.as_ref(), msgstr.as_ref(), None);
        }
    }

    /// Add messages that have no translation yet
    pub fn add_untranslated<I, S>(&mut self, messages: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for msgid in messages {
            self.add_message(msgid.as_ref(), "", None);
        }
    }

    /// Install or replace the header entry
    pub fn set_header(&mut self, text: &str) {
        match self.entries.get_mut("") {
            Some(header) => header.translation = Translation::from(text),
            None => {
                self.insert(PoEntry::new("", Translation::from(text)));
            }
        }
    }

    /// Move every entry of `other` into this catalog, replacing same-keyed entries
    pub fn append(&mut self, other: Catalog) {
        for (key, entry) in other.entries {
            if self.entries.insert(key, entry).is_some() {
                log::debug!("append: replaced existing entry");
            }
        }
    }

    /// Value of a `Name: value` line in the header entry
    ///
    /// Header lines may be separated either by real newlines or by the
    /// `\n` escape as written in .po text.
    pub fn header_field(&self, name: &str) -> Option<&str> {
        let header = self.header()?;
        let text = match &header.translation {
            Translation::Singular(s) => s.as_str(),
            Translation::Plural(_) => return None,
        };

        text.split('\n')
            .flat_map(|line| line.split("\\n"))
            .find_map(|line| {
                let (field, value) = line.split_once(':')?;
                (field.trim() == name).then(|| value.trim())
            })
    }

    /// Get the charset from the header
    pub fn charset(&self) -> Option<&str> {
        self.header_field("Content-Type")?
            .split(';')
            .find_map(|part| part.trim().strip_prefix("charset="))
            .map(str::trim)
    }

    /// Get the plural forms from the header
    pub fn plural_forms(&self) -> Option<&str> {
        self.header_field("Plural-Forms")
    }

    /// Look up an entry by msgid and optional context
    pub fn find(&self, msgctxt: Option<&str>, msgid: &str) -> Option<&PoEntry> {
        self.get(&compose_key(msgctxt, msgid))
    }
}
