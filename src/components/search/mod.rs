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

//! Search form state.
//!
//! The search field holds the active title filter. Its value is read every
//! time the shelf is re-rendered, so a search stays applied across adds,
//! edits and deletes until it is changed.

mod event;
mod render;

use tui_input::Input;

use crate::model::Filter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SearchAction {
    Submit,
}

#[derive(Default)]
pub(crate) struct SearchForm {
    pub(crate) input: Input,
}

impl SearchForm {
    pub(crate) const ELEMENT_ID: &'static str = "searchBook";

    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn filter(&self) -> Filter {
        Filter::new(self.input.value())
    }
}
