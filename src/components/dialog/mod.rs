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

//! Modal dialogs: the delete confirmation and the error alert.

mod event;
mod render;

use crate::model::{Book, BookId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfirmAction {
    Confirm,
    Decline,
}

/// A pending delete waiting for the user's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ConfirmDelete {
    pub(crate) book_id: BookId,
    pub(crate) title: String,
}

impl ConfirmDelete {
    pub(crate) fn for_book(book: &Book) -> Self {
        Self {
            book_id: book.id.clone(),
            title: book.title.clone(),
        }
    }

    pub(crate) fn prompt(&self) -> String {
        format!("Are you sure you want to delete \"{}\"?", self.title)
    }
}

/// A single user-facing error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Alert {
    pub(crate) message: String,
}

impl Alert {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
