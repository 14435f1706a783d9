//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! gettext catalog library
//!
//! This module provides the in-memory catalog model, the .po parser and
//! serializer, the .mo encoder and decoder, and catalog merging.

pub mod catalog;
pub mod entry;
pub mod error;
pub mod merge;
pub mod mo_file;
pub mod po_file;
