//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Error types for catalog reading and .po parsing

use std::path::PathBuf;

/// What went wrong while parsing .po text
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatErrorKind {
    #[error("duplicate entry for msgid '{0}'")]
    DuplicateEntry(String),
    #[error("entry does not have a msgid")]
    MissingMsgid,
    #[error("string cannot be unquoted: it is not quoted")]
    MalformedQuoting,
    #[error("lines beginning with '\"' must continue a msgid, msgid_plural or msgstr string")]
    InvalidContinuation,
    #[error("unknown keyword '{0}'")]
    UnknownKeyword(String),
    #[error("entry mixes msgstr with indexed msgstr[N] translations")]
    MixedTranslationForms,
}

/// A parse failure with the (1-based) line it was detected on
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {kind}")]
pub struct FormatError {
    pub line: usize,
    pub kind: FormatErrorKind,
}

impl FormatError {
    pub fn new(line: usize, kind: FormatErrorKind) -> Self {
        FormatError { line, kind }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum PoError {
    #[error("{}: file not found", .0.display())]
    FileNotFound(PathBuf),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Format(#[from] FormatError),
}

pub type Result<T> = std::result::Result<T, PoError>;
