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

//! Add-book form state and validation.
//!
//! The form holds three text inputs, the completion checkbox and an optional
//! inline validation message. Turning its contents into a [`NewBook`] is the
//! only place new records are validated.

mod event;
mod render;

use thiserror::Error;
use tui_input::Input;

use crate::{
    components::Focus,
    model::{NewBook, parse_year},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BookFormAction {
    Submit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum FormError {
    #[error("Please enter the book title")]
    MissingTitle,
}

#[derive(Default)]
pub(crate) struct BookForm {
    pub(crate) title: Input,
    pub(crate) author: Input,
    pub(crate) year: Input,
    pub(crate) is_complete: bool,
    pub(crate) message: Option<String>,
}

impl BookForm {
    pub(crate) const ELEMENT_ID: &'static str = "bookForm";

    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn input_mut(&mut self, focus: Focus) -> Option<&mut Input> {
        match focus {
            Focus::BookFormTitle => Some(&mut self.title),
            Focus::BookFormAuthor => Some(&mut self.author),
            Focus::BookFormYear => Some(&mut self.year),
            _ => None,
        }
    }

    pub(crate) fn toggle_complete(&mut self) {
        self.is_complete = !self.is_complete;
    }

    /// Label of the submit button, which names the shelf the book lands on.
    pub(crate) fn submit_label(&self) -> &'static str {
        if self.is_complete {
            "Add to \"Finished\" shelf"
        } else {
            "Add to \"Not finished\" shelf"
        }
    }

    /// Validates the form contents.
    ///
    /// Title and author are trimmed, a missing or unparseable year falls back
    /// to `current_year`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::MissingTitle`] if the title is blank.
    pub(crate) fn submission(&self, current_year: i32) -> Result<NewBook, FormError> {
        let title = self.title.value().trim();
        if title.is_empty() {
            return Err(FormError::MissingTitle);
        }

        Ok(NewBook {
            title: title.to_string(),
            author: self.author.value().trim().to_string(),
            year: parse_year(self.year.value()).unwrap_or(current_year),
            finished: self.is_complete,
        })
    }

    /// Clears every field and unchecks the completion checkbox.
    pub(crate) fn reset(&mut self) {
        self.title.reset();
        self.author.reset();
        self.year.reset();
        self.is_complete = false;
        self.message = None;
    }
}
