// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Reading progress bookkeeping kept by the remote Bookshelf API.

use serde::{Deserialize, Serialize};

pub(crate) const DEFAULT_PAGE_COUNT: u32 = 100;

/// Extended fields the remote service stores next to each book.
///
/// `read_page` and `reading` are never set directly, they are derived from the
/// completion flag with [`ReadingProgress::derive_from`] on every write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReadingProgress {
    #[serde(default)]
    pub(crate) summary: String,
    #[serde(default)]
    pub(crate) publisher: String,
    #[serde(default)]
    pub(crate) page_count: u32,
    #[serde(default)]
    pub(crate) read_page: u32,
    #[serde(default)]
    pub(crate) reading: bool,
}

impl ReadingProgress {
    pub(crate) fn new(finished: bool) -> Self {
        let mut progress = Self {
            summary: String::new(),
            publisher: String::new(),
            page_count: DEFAULT_PAGE_COUNT,
            read_page: 0,
            reading: false,
        };
        progress.derive_from(finished);
        progress
    }

    pub(crate) fn derive_from(&mut self, finished: bool) {
        if finished {
            self.read_page = self.page_count;
            self.reading = false;
        } else {
            self.read_page = 0;
            self.reading = true;
        }
    }

    pub(crate) fn is_consistent_with(&self, finished: bool) -> bool {
        if finished {
            self.read_page == self.page_count && !self.reading
        } else {
            self.read_page == 0 && self.reading
        }
    }
}
