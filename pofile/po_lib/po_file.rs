//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! .po (Portable Object) file parser and writer
//!
//! PO file format:
//! - Comments: lines starting with #
//!   - #  - translator comments
//!   - #. - extracted comments
//!   - #: - reference (file:line)
//!   - #, - flags (fuzzy, c-format, etc.)
//!   - #| - previous msgid
//!   - #~ - obsolete entries (skipped)
//! - msgctxt "context" - message context (optional, single line)
//! - msgid "original" - original string
//! - msgid_plural "plural" - plural original (optional)
//! - msgstr "translation" - translation (for singular)
//! - msgstr[N] "translation" - plural translations
//!
//! Entries are separated by blank lines. String values may continue on
//! following lines that start with a double quote; the pieces are
//! concatenated. Values are kept exactly as written between the quotes,
//! escape sequences included.

use std::collections::BTreeMap;
use std::fmt::{self, Write};
use std::io::Read;

use crate::po_lib::catalog::Catalog;
use crate::po_lib::entry::{Comments, PoEntry, Translation};
use crate::po_lib::error::{FormatError, FormatErrorKind, PoError};

/// Header written when a catalog has no entry for the empty msgid
const DEFAULT_HEADER: &str = concat!(
    "msgid \"\"\n",
    "msgstr \"\"\n",
    "\"Content-Type: text/plain; charset=UTF-8\\n\"\n",
    "\"MIME-Version: 1.0\\n\"\n",
    "\"Content-Transfer-Encoding: 8bit\\n\"\n",
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParserState {
    /// Between entries
    WhiteSpace,
    /// Inside an entry, last line was a comment or msgctxt
    Entry,
    /// Last line started a string value that may be continued
    String,
}

/// Keywords whose value is a (possibly multiline) string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Msgid,
    MsgidPlural,
    Msgstr,
    MsgstrIndex(u32),
}

impl Field {
    fn from_keyword(keyword: &str) -> Option<Field> {
        match keyword {
            "msgid" => Some(Field::Msgid),
            "msgid_plural" => Some(Field::MsgidPlural),
            "msgstr" => Some(Field::Msgstr),
            _ => keyword
                .strip_prefix("msgstr[")?
                .strip_suffix(']')?
                .parse()
                .ok()
                .map(Field::MsgstrIndex),
        }
    }
}

/// Fields collected for the entry being parsed
#[derive(Debug, Default)]
struct PendingEntry {
    msgctxt: Option<String>,
    msgid: Option<String>,
    msgid_plural: Option<String>,
    msgstr: Option<String>,
    plural_forms: BTreeMap<u32, String>,
    comments: Comments,
}

impl PendingEntry {
    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Msgid => self.msgid = Some(value),
            Field::MsgidPlural => self.msgid_plural = Some(value),
            Field::Msgstr => self.msgstr = Some(value),
            Field::MsgstrIndex(idx) => {
                self.plural_forms.insert(idx, value);
            }
        }
    }

    fn finish(self, line: usize) -> Result<PoEntry, FormatError> {
        let msgid = self
            .msgid
            .ok_or_else(|| FormatError::new(line, FormatErrorKind::MissingMsgid))?;

        let translation = match self.msgstr {
            Some(_) if !self.plural_forms.is_empty() => {
                return Err(FormatError::new(
                    line,
                    FormatErrorKind::MixedTranslationForms,
                ));
            }
            Some(msgstr) => Translation::Singular(msgstr),
            None if !self.plural_forms.is_empty() => Translation::Plural(self.plural_forms),
            None => Translation::default(),
        };

        Ok(PoEntry {
            msgctxt: self.msgctxt,
            msgid,
            msgid_plural: self.msgid_plural,
            translation,
            comments: self.comments,
        })
    }
}

/// Strip the surrounding double quotes of a string value
///
/// A lone `"` counts as both the opening and the closing quote.
pub fn unquote(s: &str) -> Option<&str> {
    let inner = s.strip_prefix('"')?;
    if inner.is_empty() {
        return Some(inner);
    }
    inner.strip_suffix('"')
}

/// Line-oriented parser for .po text
pub struct PoParser {
    state: ParserState,
    line_number: usize,
    field: Option<Field>,
    current_string: String,
    pending: PendingEntry,
    catalog: Catalog,
}

impl PoParser {
    pub fn new() -> Self {
        PoParser {
            state: ParserState::WhiteSpace,
            line_number: 0,
            field: None,
            current_string: String::new(),
            pending: PendingEntry::default(),
            catalog: Catalog::new(),
        }
    }

    /// Parse the whole text; nothing is returned unless every entry is valid
    pub fn parse(mut self, text: &str) -> Result<Catalog, FormatError> {
        let mut lines: Vec<&str> = text.split('\n').map(str::trim).collect();
        // A trailing blank line commits the last entry
        if lines.last() != Some(&"") {
            lines.push("");
        }

        for (idx, line) in lines.into_iter().enumerate() {
            self.line_number = idx + 1;
            self.parse_line(line)?;
        }

        log::debug!("parsed {} entries", self.catalog.len());
        Ok(self.catalog)
    }

    fn error(&self, kind: FormatErrorKind) -> FormatError {
        FormatError::new(self.line_number, kind)
    }

    fn parse_line(&mut self, line: &str) -> Result<(), FormatError> {
        if line.starts_with("#~") {
            log::trace!("line {}: skipping obsolete entry", self.line_number);
            return Ok(());
        }

        // Anything but a continuation ends the current string value
        if self.state == ParserState::String && !line.starts_with('"') {
            self.finish_string();
        }

        if line.is_empty() {
            if self.state != ParserState::WhiteSpace {
                self.state = ParserState::WhiteSpace;
                self.commit_entry()?;
            }
        } else if line.starts_with('"') {
            if self.state != ParserState::String {
                return Err(self.error(FormatErrorKind::InvalidContinuation));
            }
            let value = self.unquote(line)?;
            self.current_string.push_str(value);
        } else {
            let (keyword, data) = match line.split_once(char::is_whitespace) {
                Some((keyword, rest)) => (keyword, rest.trim_start()),
                None => (line, ""),
            };

            if keyword == "msgctxt" {
                self.pending.msgctxt = Some(self.unquote(data)?.to_string());
                self.state = ParserState::Entry;
            } else if keyword.starts_with('#') {
                self.pending.comments.push(keyword, data);
                self.state = ParserState::Entry;
            } else {
                let field = Field::from_keyword(keyword)
                    .ok_or_else(|| self.error(FormatErrorKind::UnknownKeyword(keyword.to_string())))?;
                self.current_string = self.unquote(data)?.to_string();
                self.field = Some(field);
                self.state = ParserState::String;
            }
        }

        Ok(())
    }

    fn unquote<'a>(&self, s: &'a str) -> Result<&'a str, FormatError> {
        unquote(s).ok_or_else(|| self.error(FormatErrorKind::MalformedQuoting))
    }

    fn finish_string(&mut self) {
        if let Some(field) = self.field.take() {
            let value = std::mem::take(&mut self.current_string);
            self.pending.set(field, value);
        }
    }

    fn commit_entry(&mut self) -> Result<(), FormatError> {
        let pending = std::mem::take(&mut self.pending);
        let entry = pending.finish(self.line_number)?;

        let key = entry.key();
        if self.catalog.contains_key(&key) {
            return Err(self.error(FormatErrorKind::DuplicateEntry(key)));
        }

        log::trace!("line {}: committed entry {:?}", self.line_number, key);
        self.catalog.insert(entry);
        Ok(())
    }
}

impl Default for PoParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Quote a value, normalizing escapes before quote characters
///
/// Any run of backslashes before `"` becomes exactly one, so both raw and
/// already escaped double quotes come out as `\"`. Backslashes before `'`
/// are dropped.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    let mut backslashes = 0;

    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => backslashes += 1,
            '"' => {
                backslashes = 0;
                out.push_str("\\\"");
            }
            '\'' => {
                backslashes = 0;
                out.push('\'');
            }
            _ => {
                out.extend(std::iter::repeat('\\').take(backslashes));
                backslashes = 0;
                out.push(c);
            }
        }
    }
    out.extend(std::iter::repeat('\\').take(backslashes));
    out.push('"');

    out
}

/// Turn a value into a quoted .po string (newlines become `\n`)
pub fn format_string(s: &str) -> String {
    escape(&s.replace('\n', "\\n"))
}

fn write_entry<W: Write>(out: &mut W, entry: &PoEntry) -> fmt::Result {
    for (symbol, texts) in entry.comments.iter() {
        for text in texts {
            if text.is_empty() {
                writeln!(out, "{}", symbol)?;
            } else {
                writeln!(out, "{} {}", symbol, text)?;
            }
        }
    }

    // an empty context is still a context: it changes the key
    if let Some(ctxt) = &entry.msgctxt {
        writeln!(out, "msgctxt {}", format_string(ctxt))?;
    }
    writeln!(out, "msgid {}", format_string(&entry.msgid))?;
    if let Some(plural) = &entry.msgid_plural {
        writeln!(out, "msgid_plural {}", format_string(plural))?;
    }

    match &entry.translation {
        Translation::Singular(msgstr) => writeln!(out, "msgstr {}", format_string(msgstr))?,
        Translation::Plural(forms) => {
            for (idx, msgstr) in forms {
                writeln!(out, "msgstr[{}] {}", idx, format_string(msgstr))?;
            }
        }
    }

    Ok(())
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.header() {
            Some(header) => write_entry(f, header)?,
            None => f.write_str(DEFAULT_HEADER)?,
        }

        for entry in self.entries().filter(|e| !e.is_header()) {
            writeln!(f)?;
            write_entry(f, entry)?;
        }

        Ok(())
    }
}

impl Catalog {
    /// Parse a .po file from a string
    pub fn parse(text: &str) -> Result<Self, FormatError> {
        PoParser::new().parse(text)
    }

    /// Parse a .po file from a reader
    pub fn parse_from<R: Read>(mut reader: R) -> Result<Self, PoError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Catalog::parse(&text)?)
    }

    /// Serialize the catalog as .po text
    pub fn to_po_string(&self) -> String {
        self.to_string()
    }
}
