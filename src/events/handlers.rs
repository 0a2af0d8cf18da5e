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

use anyhow::Result;
use tracing::{debug, error, info};

use crate::{
    App,
    components::Alert,
    model::{Book, BookId},
    tasks::{AppTask, Operation, TaskFailure},
};

/// Re-renders the shelf with the filter currently typed in the search field.
///
/// Both lists are emptied straight away and refilled once the worker answers.
pub(crate) fn request_render(app: &mut App) -> Result<()> {
    let filter = app.search.filter();
    debug!(filter = ?filter.term(), "rendering shelf");

    app.shelf.begin_render(filter.clone());
    app.task_tx.send(AppTask::LoadBooks(filter))?;

    Ok(())
}

pub(super) fn handle_books_loaded(app: &mut App, books: Vec<Book>) {
    app.shelf.set_books(books);
}

pub(super) fn handle_book_added(app: &mut App, book: Book) -> Result<()> {
    info!(id = %book.id, "added book to shelf");

    app.book_form.reset();
    request_render(app)
}

pub(super) fn handle_book_changed(app: &mut App, book: Book) -> Result<()> {
    debug!(id = %book.id, finished = book.finished, "book changed");
    request_render(app)
}

pub(super) fn handle_book_deleted(app: &mut App, id: BookId) -> Result<()> {
    info!(%id, "removed book from shelf");
    request_render(app)
}

pub(super) fn handle_task_failed(app: &mut App, failure: TaskFailure) {
    error!(operation = ?failure.operation, message = %failure.message, "task failed");

    if failure.operation == Operation::Load {
        app.shelf.abandon_render();
    }
    app.alert = Some(Alert::new(failure.to_string()));
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crate::{
        config::AppConfig,
        events::{AppEvent, dispatch_event},
        model::{BookId, tests::book},
    };

    use super::*;

    #[test]
    fn load_failure_leaves_lists_empty_and_alerts_once() {
        let (task_tx, _task_rx) = mpsc::channel();
        let mut app = App::new(AppConfig::default(), task_tx);
        app.shelf.set_books(vec![book("1", "Dune", false)]);
        request_render(&mut app).unwrap();

        let failure = TaskFailure {
            operation: Operation::Load,
            message: "connection refused".to_string(),
        };
        dispatch_event(&mut app, AppEvent::TaskFailed(failure)).unwrap();

        assert!(app.shelf.unfinished.is_empty());
        assert!(!app.shelf.loading);
        assert_eq!(
            app.alert.map(|a| a.message),
            Some("Failed to load books: connection refused".to_string())
        );
    }

    #[test]
    fn added_book_clears_form_and_reloads_with_search_filter() {
        let (task_tx, task_rx) = mpsc::channel();
        let mut app = App::new(AppConfig::default(), task_tx);
        app.book_form.title = "Dune".into();
        app.book_form.is_complete = true;
        app.search.input = " DU ".into();

        dispatch_event(&mut app, AppEvent::BookAdded(book("1", "Dune", true))).unwrap();

        assert_eq!(app.book_form.title.value(), "");
        assert!(!app.book_form.is_complete);
        match task_rx.try_recv() {
            Ok(AppTask::LoadBooks(filter)) => assert_eq!(filter.term(), Some("du")),
            other => panic!("expected a reload, got {other:?}"),
        }
    }

    #[test]
    fn reload_after_a_change_keeps_the_selected_book() {
        let (task_tx, _task_rx) = mpsc::channel();
        let mut app = App::new(AppConfig::default(), task_tx);
        app.shelf.set_books(vec![book("1", "A", false), book("2", "B", false)]);
        app.shelf.next_book();

        dispatch_event(&mut app, AppEvent::BookChanged(book("2", "B", false))).unwrap();
        assert!(app.shelf.unfinished.is_empty());

        let reloaded = vec![book("0", "New", false), book("1", "A", false), book("2", "B", false)];
        dispatch_event(&mut app, AppEvent::BooksLoaded(reloaded)).unwrap();

        assert_eq!(app.shelf.selected_book_id(), Some(BookId::from("2")));
    }

    #[test]
    fn fatal_error_stops_the_loop() {
        let (task_tx, _task_rx) = mpsc::channel();
        let mut app = App::new(AppConfig::default(), task_tx);

        let result = dispatch_event(&mut app, AppEvent::FatalError("no database".to_string()));

        assert!(result.is_err());
    }
}
