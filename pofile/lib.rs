//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! posixutils-pofile library
//!
//! Conversion of gettext message catalogs between the editable .po text
//! format and the binary .mo format, plus merging of translations between
//! catalog revisions:
//! - msgfmt: .po to .mo compilation
//! - msgunfmt: .mo to .po decompilation
//! - pomerge: fill untranslated entries from another catalog

pub mod po_lib;

pub use po_lib::catalog::Catalog;
pub use po_lib::entry::{Comments, PoEntry, Translation};
pub use po_lib::error::{FormatError, FormatErrorKind, PoError};
