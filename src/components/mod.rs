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

//! Interactive UI components.
//!
//! Each component keeps its own state and splits its logic the same way:
//! `mod.rs` holds the state and the domain logic, `event.rs` maps raw key
//! events to a component action, and `render.rs` draws it. Components never
//! talk to the store or the event channel; the caller decides what an action
//! means.

pub(crate) mod book_form;
pub(crate) mod dialog;
pub(crate) mod edit_form;
pub(crate) mod search;

pub(crate) use book_form::{BookForm, BookFormAction};
pub(crate) use dialog::{Alert, ConfirmAction, ConfirmDelete};
pub(crate) use edit_form::{EditAction, EditForm};
pub(crate) use search::{SearchAction, SearchForm};

/// The element that currently receives keyboard input.
///
/// Every element has a stable identifier, see [`Focus::element_id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    BookFormTitle,
    BookFormAuthor,
    BookFormYear,
    BookFormIsComplete,
    BookFormSubmit,
    SearchBookTitle,
    Shelf,
}

impl Focus {
    const ORDER: [Focus; 7] = [
        Focus::BookFormTitle,
        Focus::BookFormAuthor,
        Focus::BookFormYear,
        Focus::BookFormIsComplete,
        Focus::BookFormSubmit,
        Focus::SearchBookTitle,
        Focus::Shelf,
    ];

    pub(crate) fn next(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    pub(crate) fn previous(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub(crate) fn in_book_form(self) -> bool {
        matches!(
            self,
            Focus::BookFormTitle
                | Focus::BookFormAuthor
                | Focus::BookFormYear
                | Focus::BookFormIsComplete
                | Focus::BookFormSubmit
        )
    }

    /// Identifier of the form that contains this element, if any.
    pub(crate) fn container_id(self) -> Option<&'static str> {
        match self {
            focus if focus.in_book_form() => Some(BookForm::ELEMENT_ID),
            Focus::SearchBookTitle => Some(SearchForm::ELEMENT_ID),
            _ => None,
        }
    }

    pub(crate) fn element_id(self) -> &'static str {
        match self {
            Focus::BookFormTitle => "bookFormTitle",
            Focus::BookFormAuthor => "bookFormAuthor",
            Focus::BookFormYear => "bookFormYear",
            Focus::BookFormIsComplete => "bookFormIsComplete",
            Focus::BookFormSubmit => "bookFormSubmit",
            Focus::SearchBookTitle => "searchBookTitle",
            Focus::Shelf => "bookShelf",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycles_through_every_element() {
        let mut focus = Focus::BookFormTitle;
        let mut seen = vec![];
        for _ in 0..Focus::ORDER.len() {
            seen.push(focus.element_id());
            focus = focus.next();
        }

        assert_eq!(focus, Focus::BookFormTitle);
        assert_eq!(seen.len(), 7);
        assert_eq!(Focus::BookFormTitle.previous(), Focus::Shelf);
        assert_eq!(Focus::Shelf.previous(), Focus::SearchBookTitle);
    }

    #[test]
    fn form_elements_name_their_container() {
        assert_eq!(Focus::BookFormYear.container_id(), Some("bookForm"));
        assert_eq!(Focus::BookFormSubmit.container_id(), Some("bookForm"));
        assert_eq!(Focus::SearchBookTitle.container_id(), Some("searchBook"));
        assert_eq!(Focus::Shelf.container_id(), None);
    }
}
