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

//! Inline edit form for a single book.
//!
//! An [`EditForm`] is opened from a per-render snapshot of the book and
//! carries that snapshot by value, so saving always targets the identifier
//! the form was opened for.

mod event;
mod render;

use tui_input::Input;

use crate::model::{Book, BookChanges, BookId, parse_year};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EditAction {
    Save,
    Cancel,
    /// The edit key was pressed again on the open form.
    ToggleEdit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EditField {
    Title,
    Author,
    Year,
    Save,
    Cancel,
}

impl EditField {
    const ORDER: [EditField; 5] = [
        EditField::Title,
        EditField::Author,
        EditField::Year,
        EditField::Save,
        EditField::Cancel,
    ];

    fn next(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    fn previous(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

pub(crate) struct EditForm {
    book: Book,
    pub(crate) title: Input,
    pub(crate) author: Input,
    pub(crate) year: Input,
    pub(crate) focused: EditField,
}

impl EditForm {
    pub(crate) const ELEMENT_ID: &'static str = "bookItemEditForm";

    /// Opens a form pre-filled with the book's current values.
    pub(crate) fn open(book: Book) -> Self {
        let year = book.year.map(|y| y.to_string()).unwrap_or_default();

        Self {
            title: Input::new(book.title.clone()),
            author: Input::new(book.author.clone()),
            year: Input::new(year),
            focused: EditField::Title,
            book,
        }
    }

    pub(crate) fn book_id(&self) -> &BookId {
        &self.book.id
    }

    pub(crate) fn book(&self) -> &Book {
        &self.book
    }

    fn focused_input_mut(&mut self) -> Option<&mut Input> {
        match self.focused {
            EditField::Title => Some(&mut self.title),
            EditField::Author => Some(&mut self.author),
            EditField::Year => Some(&mut self.year),
            EditField::Save | EditField::Cancel => None,
        }
    }

    /// Builds the replacement values for the book being edited.
    ///
    /// Unlike the add form, a blank title or author is not an error here:
    /// the book keeps its previous value. The year falls back to the previous
    /// year, then to `current_year`.
    pub(crate) fn changes(&self, current_year: i32) -> BookChanges {
        let title = self.title.value().trim();
        let author = self.author.value().trim();

        BookChanges {
            title: if title.is_empty() {
                self.book.title.clone()
            } else {
                title.to_string()
            },
            author: if author.is_empty() {
                self.book.author.clone()
            } else {
                author.to_string()
            },
            year: parse_year(self.year.value())
                .or(self.book.year)
                .or(Some(current_year)),
            finished: self.book.finished,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::model::tests::book;

    use super::*;

    fn dune() -> Book {
        let mut dune = book("dune-1", "Dune", false);
        dune.author = "Herbert".to_string();
        dune.year = Some(1965);
        dune
    }

    #[test]
    fn opens_with_current_values() {
        let form = EditForm::open(dune());
        assert_eq!(form.title.value(), "Dune");
        assert_eq!(form.author.value(), "Herbert");
        assert_eq!(form.year.value(), "1965");
        assert_eq!(form.book_id(), &BookId::from("dune-1"));
    }

    #[test]
    fn blank_fields_keep_previous_values() {
        let mut form = EditForm::open(dune());
        form.title = Input::new("   ".to_string());
        form.author = Input::default();
        form.year = Input::new("abc".to_string());

        let changes = form.changes(2026);

        assert_eq!(changes.title, "Dune");
        assert_eq!(changes.author, "Herbert");
        assert_eq!(changes.year, Some(1965));
        assert!(!changes.finished);
    }

    #[test]
    fn edited_values_are_trimmed() {
        let mut form = EditForm::open(dune());
        form.title = Input::new(" Dune Messiah ".to_string());
        form.year = Input::new("1969".to_string());

        let changes = form.changes(2026);

        assert_eq!(changes.title, "Dune Messiah");
        assert_eq!(changes.year, Some(1969));
    }

    #[test]
    fn year_falls_back_to_current_year_when_book_has_none() {
        let mut undated = dune();
        undated.year = None;

        let form = EditForm::open(undated);
        assert_eq!(form.year.value(), "");
        assert_eq!(form.changes(2026).year, Some(2026));
    }
}
