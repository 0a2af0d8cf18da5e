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

//! Bookshelf state management.
//!
//! This module holds the current render snapshot: the books of the last load
//! split into the "not finished" and "finished" lists, the selection in each
//! list, the active list, and the inline edit form if one is open.
//!
//! Snapshots are never patched in place. Every render starts with
//! [`Shelf::begin_render`], which empties both lists, and ends when
//! [`Shelf::set_books`] installs the next full result from the store.

use ratatui::widgets::ListState;

use crate::{
    components::EditForm,
    model::{Book, BookId, Filter},
    util::format::format_year,
};

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub(crate) enum ShelfPane {
    #[default]
    Unfinished,
    Finished,
}

impl ShelfPane {
    pub(crate) fn element_id(self) -> &'static str {
        match self {
            ShelfPane::Unfinished => "incompleteBookList",
            ShelfPane::Finished => "completeBookList",
        }
    }
}

/// An action offered on every rendered book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ItemControl {
    ToggleComplete,
    Delete,
    Edit,
}

impl ItemControl {
    pub(crate) const ALL: [ItemControl; 3] = [
        ItemControl::ToggleComplete,
        ItemControl::Delete,
        ItemControl::Edit,
    ];

    pub(crate) fn from_key(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|control| control.key() == key)
    }

    pub(crate) fn key(self) -> char {
        match self {
            ItemControl::ToggleComplete => 't',
            ItemControl::Delete => 'd',
            ItemControl::Edit => 'e',
        }
    }

    pub(crate) fn element_id(self) -> &'static str {
        match self {
            ItemControl::ToggleComplete => "bookItemIsCompleteButton",
            ItemControl::Delete => "bookItemDeleteButton",
            ItemControl::Edit => "bookItemEditButton",
        }
    }
}

/// What one rendered book shows, derived from a snapshot record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BookItemView {
    pub(crate) book_id: BookId,
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) year: String,
    pub(crate) toggle_label: &'static str,
}

impl BookItemView {
    pub(crate) const ELEMENT_ID: &'static str = "bookItem";
    pub(crate) const TITLE_ID: &'static str = "bookItemTitle";
    pub(crate) const AUTHOR_ID: &'static str = "bookItemAuthor";
    pub(crate) const YEAR_ID: &'static str = "bookItemYear";

    pub(crate) fn new(book: &Book) -> Self {
        let author = if book.author.is_empty() {
            "-"
        } else {
            book.author.as_str()
        };

        Self {
            book_id: book.id.clone(),
            title: book.title.clone(),
            author: format!("Author: {}", author),
            year: format!("Year: {}", format_year(book.year)),
            toggle_label: if book.finished {
                "Mark as unfinished"
            } else {
                "Mark as finished"
            },
        }
    }
}

impl BookItemView {
    /// Text rows of the item, each with its element identifier.
    pub(crate) fn rows(&self) -> [(&'static str, &str); 3] {
        [
            (Self::TITLE_ID, self.title.as_str()),
            (Self::AUTHOR_ID, self.author.as_str()),
            (Self::YEAR_ID, self.year.as_str()),
        ]
    }

    pub(crate) fn control_label(&self, control: ItemControl) -> &'static str {
        match control {
            ItemControl::ToggleComplete => self.toggle_label,
            ItemControl::Delete => "Delete",
            ItemControl::Edit => "Edit",
        }
    }

    /// Identifier of the item element, qualified by its record id.
    pub(crate) fn element_id(&self) -> String {
        format!("{}:{}", Self::ELEMENT_ID, self.book_id)
    }
}

#[derive(Default)]
pub(crate) struct Shelf {
    pub(crate) active_pane: ShelfPane,

    pub(crate) unfinished: Vec<Book>,
    pub(crate) finished: Vec<Book>,

    pub(crate) unfinished_state: ListState,
    pub(crate) finished_state: ListState,

    /// The filter of the render in progress or last completed.
    pub(crate) filter: Filter,
    pub(crate) loading: bool,

    pub(crate) editing: Option<EditForm>,

    /// Selections captured by [`Shelf::begin_render`], restored by
    /// [`Shelf::set_books`].
    pending_unfinished: Option<(usize, BookId)>,
    pending_finished: Option<(usize, BookId)>,
}

impl Shelf {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Empties both lists ahead of a reload.
    ///
    /// Any open edit form belongs to the previous snapshot and is closed.
    pub(crate) fn begin_render(&mut self, filter: Filter) {
        if !self.loading {
            self.pending_unfinished = Self::selected_in(&self.unfinished, &self.unfinished_state);
            self.pending_finished = Self::selected_in(&self.finished, &self.finished_state);
        }

        self.unfinished.clear();
        self.finished.clear();
        self.editing = None;
        self.filter = filter;
        self.loading = true;
    }

    /// Installs a freshly loaded snapshot, keeping store order within each
    /// list.
    ///
    /// The previously selected book stays selected if it is still in the
    /// same list, otherwise the old position is clamped to the new length.
    pub(crate) fn set_books(&mut self, books: Vec<Book>) {
        let previous_unfinished = self
            .pending_unfinished
            .take()
            .or_else(|| Self::selected_in(&self.unfinished, &self.unfinished_state));
        let previous_finished = self
            .pending_finished
            .take()
            .or_else(|| Self::selected_in(&self.finished, &self.finished_state));

        let (finished, unfinished): (Vec<Book>, Vec<Book>) =
            books.into_iter().partition(|b| b.finished);
        self.unfinished = unfinished;
        self.finished = finished;
        self.loading = false;

        Self::reselect(&self.unfinished, &mut self.unfinished_state, previous_unfinished);
        Self::reselect(&self.finished, &mut self.finished_state, previous_finished);
    }

    /// Marks the pending render as finished without installing anything.
    ///
    /// Used when a load fails, both lists stay empty.
    pub(crate) fn abandon_render(&mut self) {
        self.loading = false;
        self.pending_unfinished = None;
        self.pending_finished = None;
    }

    pub(crate) fn books(&self, pane: ShelfPane) -> &[Book] {
        match pane {
            ShelfPane::Unfinished => &self.unfinished,
            ShelfPane::Finished => &self.finished,
        }
    }

    pub(crate) fn item_views(&self, pane: ShelfPane) -> Vec<BookItemView> {
        self.books(pane).iter().map(BookItemView::new).collect()
    }

    pub(crate) fn selected_book(&self) -> Option<&Book> {
        match self.active_pane {
            ShelfPane::Unfinished => {
                let index = self.unfinished_state.selected()?;
                self.unfinished.get(index)
            }
            ShelfPane::Finished => {
                let index = self.finished_state.selected()?;
                self.finished.get(index)
            }
        }
    }

    pub(crate) fn selected_book_id(&self) -> Option<BookId> {
        self.selected_book().map(|book| book.id.clone())
    }

    /// Opens the edit form for the selected book, or closes it if that book's
    /// form is already open.
    pub(crate) fn toggle_edit(&mut self) {
        let Some(book) = self.selected_book().cloned() else {
            return;
        };

        let already_open = self
            .editing
            .as_ref()
            .is_some_and(|form| form.book_id() == &book.id);

        self.editing = if already_open {
            None
        } else {
            Some(EditForm::open(book))
        };
    }

    pub(crate) fn close_edit(&mut self) {
        self.editing = None;
    }

    pub(crate) fn next_pane(&mut self) {
        self.active_pane = match self.active_pane {
            ShelfPane::Unfinished => ShelfPane::Finished,
            ShelfPane::Finished => ShelfPane::Unfinished,
        };
        self.ensure_selection();
    }

    pub(crate) fn previous_pane(&mut self) {
        // Only two panes, so previous and next coincide.
        self.next_pane();
    }

    pub(crate) fn next_book(&mut self) {
        match self.active_pane {
            ShelfPane::Unfinished => Self::next(&mut self.unfinished_state, self.unfinished.len()),
            ShelfPane::Finished => Self::next(&mut self.finished_state, self.finished.len()),
        }
    }

    pub(crate) fn previous_book(&mut self) {
        match self.active_pane {
            ShelfPane::Unfinished => Self::previous(&mut self.unfinished_state, self.unfinished.len()),
            ShelfPane::Finished => Self::previous(&mut self.finished_state, self.finished.len()),
        }
    }

    fn ensure_selection(&mut self) {
        let (books, state) = match self.active_pane {
            ShelfPane::Unfinished => (&self.unfinished, &mut self.unfinished_state),
            ShelfPane::Finished => (&self.finished, &mut self.finished_state),
        };
        if state.selected().is_none() && !books.is_empty() {
            state.select(Some(0));
        }
    }

    fn selected_in(books: &[Book], state: &ListState) -> Option<(usize, BookId)> {
        let index = state.selected()?;
        books.get(index).map(|b| (index, b.id.clone()))
    }

    fn reselect(books: &[Book], state: &mut ListState, previous: Option<(usize, BookId)>) {
        if books.is_empty() {
            state.select(None);
            return;
        }

        let index = match previous {
            Some((index, id)) => books
                .iter()
                .position(|b| b.id == id)
                .unwrap_or(index.min(books.len() - 1)),
            None => state.selected().unwrap_or(0).min(books.len() - 1),
        };
        state.select(Some(index));
    }

    fn next(state: &mut ListState, len: usize) {
        if len == 0 { return; }
        let i = match state.selected() {
            Some(i) => if i >= len - 1 { 0 } else { i + 1 },
            None => 0,
        };
        state.select(Some(i));
    }

    fn previous(state: &mut ListState, len: usize) {
        if len == 0 { return; }
        let i = match state.selected() {
            Some(i) => if i == 0 { len - 1 } else { i - 1 },
            None => 0,
        };
        state.select(Some(i));
    }
}

#[cfg(test)]
mod tests {
    use crate::model::tests::book;

    use super::*;

    fn titles(shelf: &Shelf, pane: ShelfPane) -> Vec<&str> {
        shelf.books(pane).iter().map(|b| b.title.as_str()).collect()
    }

    #[test]
    fn books_are_partitioned_in_store_order() {
        let mut shelf = Shelf::new();
        shelf.set_books(vec![
            book("1", "A", false),
            book("2", "B", true),
            book("3", "C", false),
            book("4", "D", true),
        ]);

        assert_eq!(titles(&shelf, ShelfPane::Unfinished), vec!["A", "C"]);
        assert_eq!(titles(&shelf, ShelfPane::Finished), vec!["B", "D"]);
    }

    #[test]
    fn begin_render_empties_lists_and_closes_edit() {
        let mut shelf = Shelf::new();
        shelf.set_books(vec![book("1", "A", false)]);
        shelf.toggle_edit();
        assert!(shelf.editing.is_some());

        shelf.begin_render(Filter::new("a"));

        assert!(shelf.unfinished.is_empty());
        assert!(shelf.editing.is_none());
        assert!(shelf.loading);
        assert_eq!(shelf.filter.term(), Some("a"));
    }

    #[test]
    fn selection_follows_the_book_across_reloads() {
        let mut shelf = Shelf::new();
        shelf.set_books(vec![book("1", "A", false), book("2", "B", false)]);
        shelf.next_book();
        assert_eq!(shelf.selected_book_id(), Some(BookId::from("2")));

        shelf.begin_render(Filter::none());
        shelf.set_books(vec![book("0", "New", false), book("1", "A", false), book("2", "B", false)]);
        assert_eq!(shelf.selected_book_id(), Some(BookId::from("2")));

        // The selected book moved away: the position is clamped.
        shelf.begin_render(Filter::none());
        shelf.set_books(vec![book("0", "New", false), book("2", "B", true)]);
        assert_eq!(shelf.selected_book_id(), Some(BookId::from("0")));
    }

    #[test]
    fn edit_toggles_per_book() {
        let mut shelf = Shelf::new();
        shelf.set_books(vec![book("1", "A", false), book("2", "B", false)]);

        shelf.toggle_edit();
        assert_eq!(shelf.editing.as_ref().map(|f| f.book_id().clone()), Some(BookId::from("1")));

        shelf.toggle_edit();
        assert!(shelf.editing.is_none());

        shelf.toggle_edit();
        shelf.next_book();
        shelf.toggle_edit();
        assert_eq!(shelf.editing.as_ref().map(|f| f.book_id().clone()), Some(BookId::from("2")));
    }

    #[test]
    fn empty_pane_has_no_selection() {
        let mut shelf = Shelf::new();
        shelf.set_books(vec![book("1", "A", false)]);

        shelf.next_pane();
        assert_eq!(shelf.active_pane, ShelfPane::Finished);
        assert!(shelf.selected_book().is_none());

        shelf.toggle_edit();
        assert!(shelf.editing.is_none());
    }

    #[test]
    fn item_views_identify_rows_and_controls() {
        let view = BookItemView::new(&book("42", "Dune", true));

        assert_eq!(view.element_id(), "bookItem:42");
        let ids: Vec<&str> = view.rows().iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec!["bookItemTitle", "bookItemAuthor", "bookItemYear"]);
        assert_eq!(view.rows()[0].1, "Dune");

        let controls: Vec<(&str, &str)> = ItemControl::ALL
            .iter()
            .map(|c| (c.element_id(), view.control_label(*c)))
            .collect();
        assert_eq!(
            controls,
            vec![
                ("bookItemIsCompleteButton", "Mark as unfinished"),
                ("bookItemDeleteButton", "Delete"),
                ("bookItemEditButton", "Edit"),
            ]
        );
        assert_eq!(ItemControl::from_key('d'), Some(ItemControl::Delete));
        assert_eq!(ItemControl::from_key('x'), None);
    }

    #[test]
    fn item_views_show_placeholders() {
        let mut undated = book("1", "Dune", false);
        undated.year = None;

        let view = BookItemView::new(&undated);

        assert_eq!(view.book_id, BookId::from("1"));
        assert_eq!(view.author, "Author: -");
        assert_eq!(view.year, "Year: -");
        assert_eq!(view.toggle_label, "Mark as finished");
    }
}
