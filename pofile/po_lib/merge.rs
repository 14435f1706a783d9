//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Filling untranslated entries from another catalog

use crate::po_lib::catalog::Catalog;

impl Catalog {
    /// Replace untranslated entries with their translated counterparts in `source`
    ///
    /// Only keys already present here are considered, and the whole entry
    /// (comments and plural forms included) is taken from `source`. Returns
    /// the number of entries replaced.
    pub fn merge_from(&mut self, source: &Catalog) -> usize {
        let mut filled = 0;

        for (key, entry) in self.entries.iter_mut() {
            if entry.is_translated() {
                continue;
            }
            if let Some(other) = source.get(key).filter(|e| e.is_translated()) {
                log::trace!("merge: filling {:?}", key);
                *entry = other.clone();
                filled += 1;
            }
        }

        log::debug!("merge: filled {} of {} entries", filled, self.len());
        filled
    }
}
