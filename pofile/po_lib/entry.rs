//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! In-memory representation of a single catalog entry
//!
//! An entry is identified by its composite key: the msgid, prefixed by
//! `msgctxt` and an EOT (U+0004) separator when a context is present. This
//! is the same key gettext runtimes use for `pgettext` lookups.

use std::collections::BTreeMap;

use indexmap::IndexMap;

/// Separator between msgctxt and msgid in a composite key
pub const CONTEXT_SEPARATOR: char = '\u{4}';

/// Build the composite key for a msgid and optional context
pub fn compose_key(msgctxt: Option<&str>, msgid: &str) -> String {
    match msgctxt {
        Some(ctxt) => format!("{}{}{}", ctxt, CONTEXT_SEPARATOR, msgid),
        None => msgid.to_string(),
    }
}

/// Translated text of an entry
///
/// A singular translation comes from `msgstr`; plural translations come from
/// `msgstr[N]` lines and are kept sorted by plurality index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    Singular(String),
    Plural(BTreeMap<u32, String>),
}

impl Translation {
    /// Build a plural translation from forms listed in plurality order
    pub fn plural<I, S>(forms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Translation::Plural(
            forms
                .into_iter()
                .enumerate()
                .map(|(idx, s)| (idx as u32, s.into()))
                .collect(),
        )
    }

    pub fn is_plural(&self) -> bool {
        matches!(self, Translation::Plural(_))
    }

    /// All translated strings, in ascending plurality order
    pub fn forms(&self) -> Vec<&str> {
        match self {
            Translation::Singular(s) => vec![s.as_str()],
            Translation::Plural(forms) => forms.values().map(|s| s.as_str()).collect(),
        }
    }

    /// True when no form carries any text
    pub fn is_empty(&self) -> bool {
        match self {
            Translation::Singular(s) => s.is_empty(),
            Translation::Plural(forms) => forms.values().all(|s| s.is_empty()),
        }
    }

    /// The .mo representation: forms joined by NUL bytes
    pub fn to_mo_bytes(&self) -> Vec<u8> {
        self.forms().join("\0").into_bytes()
    }
}

impl Default for Translation {
    fn default() -> Self {
        Translation::Singular(String::new())
    }
}

impl From<&str> for Translation {
    fn from(s: &str) -> Self {
        Translation::Singular(s.to_string())
    }
}

impl From<String> for Translation {
    fn from(s: String) -> Self {
        Translation::Singular(s)
    }
}

/// Comment lines of an entry, grouped by symbol (`#`, `#.`, `#:`, `#,`, `#|`)
///
/// Symbols are kept in the order they first appear, and repeated comments
/// under one symbol keep their relative order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comments(IndexMap<String, Vec<String>>);

impl Comments {
    pub fn new() -> Self {
        Comments::default()
    }

    pub fn push(&mut self, symbol: &str, text: &str) {
        self.0
            .entry(symbol.to_string())
            .or_default()
            .push(text.to_string());
    }

    pub fn get(&self, symbol: &str) -> Option<&[String]> {
        self.0.get(symbol).map(|v| v.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Flags from `#,` lines (fuzzy, c-format, ...)
    pub fn flags(&self) -> Vec<&str> {
        self.get("#,")
            .unwrap_or_default()
            .iter()
            .flat_map(|line| line.split(','))
            .map(|flag| flag.trim())
            .filter(|flag| !flag.is_empty())
            .collect()
    }

    pub fn is_fuzzy(&self) -> bool {
        self.flags().contains(&"fuzzy")
    }
}

/// A single message entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoEntry {
    /// Message context
    pub msgctxt: Option<String>,
    /// Original string (msgid); empty only for the header entry
    pub msgid: String,
    /// Plural original (msgid_plural)
    pub msgid_plural: Option<String>,
    /// Translation (msgstr or msgstr[N])
    pub translation: Translation,
    pub comments: Comments,
}

impl PoEntry {
    pub fn new(msgid: &str, translation: Translation) -> Self {
        PoEntry {
            msgid: msgid.to_string(),
            translation,
            ..Default::default()
        }
    }

    /// Composite key identifying this entry within a catalog
    pub fn key(&self) -> String {
        compose_key(self.msgctxt.as_deref(), &self.msgid)
    }

    /// Check if this is the header entry (empty msgid)
    pub fn is_header(&self) -> bool {
        self.msgid.is_empty() && self.msgctxt.is_none()
    }

    pub fn is_plural(&self) -> bool {
        self.msgid_plural.is_some() || self.translation.is_plural()
    }

    pub fn is_translated(&self) -> bool {
        !self.translation.is_empty()
    }

    pub fn is_fuzzy(&self) -> bool {
        self.comments.is_fuzzy()
    }
}
