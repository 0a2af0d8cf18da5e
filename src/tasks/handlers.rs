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
use tracing::{debug, info, warn};

use crate::{
    events::AppEvent,
    model::{BookChanges, BookId, Filter, NewBook},
    tasks::TaskContext,
};

pub(super) fn load_books(ctx: &TaskContext, filter: Filter) -> Result<()> {
    let books = ctx.store.list(&filter)?;
    debug!(count = books.len(), filter = ?filter.term(), "loaded books");
    ctx.event_tx.send(AppEvent::BooksLoaded(books))?;

    Ok(())
}

pub(super) fn add_book(ctx: &TaskContext, new_book: NewBook) -> Result<()> {
    let book = ctx.store.create(new_book)?;
    info!(id = %book.id, title = %book.title, "added book");
    ctx.event_tx.send(AppEvent::BookAdded(book))?;

    Ok(())
}

pub(super) fn toggle_book(ctx: &TaskContext, id: BookId) -> Result<()> {
    let book = ctx.store.get(&id)?;
    let updated = ctx.store.update(&id, BookChanges::toggled(&book))?;
    info!(id = %updated.id, finished = updated.finished, "toggled book");
    ctx.event_tx.send(AppEvent::BookChanged(updated))?;

    Ok(())
}

pub(super) fn update_book(ctx: &TaskContext, id: BookId, changes: BookChanges) -> Result<()> {
    let updated = ctx.store.update(&id, changes)?;
    info!(id = %updated.id, "updated book");
    ctx.event_tx.send(AppEvent::BookChanged(updated))?;

    Ok(())
}

pub(super) fn delete_book(ctx: &TaskContext, id: BookId) -> Result<()> {
    if let Err(e) = ctx.store.delete(&id) {
        if e.is_not_found() {
            warn!(%id, "book to delete is already gone");
        }
        return Err(e.into());
    }
    info!(%id, "deleted book");
    ctx.event_tx.send(AppEvent::BookDeleted(id))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Receiver};

    use tempfile::TempDir;

    use crate::{
        model::Book,
        store::local::LocalStore,
        tasks::{AppTask, Operation, TaskFailure, run_tasks},
    };

    use super::*;

    /// Runs `tasks` through a worker loop backed by a fresh local store and
    /// returns every event it produced.
    fn run(store: &LocalStore, tasks: Vec<AppTask>) -> Vec<AppEvent> {
        let (task_tx, task_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        for task in tasks {
            task_tx.send(task).unwrap();
        }
        drop(task_tx);

        let ctx = TaskContext {
            event_tx: &event_tx,
            store,
        };
        run_tasks(&ctx, &task_rx);
        drop(event_tx);

        drain(event_rx)
    }

    fn drain(rx: Receiver<AppEvent>) -> Vec<AppEvent> {
        rx.into_iter().collect()
    }

    fn open_temp() -> (TempDir, LocalStore) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shelf.db");
        let store = LocalStore::open(path.to_str().unwrap()).unwrap();
        (dir, store)
    }

    fn dune() -> NewBook {
        NewBook {
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            year: 1965,
            finished: false,
        }
    }

    fn loaded(event: &AppEvent) -> &[Book] {
        match event {
            AppEvent::BooksLoaded(books) => books,
            other => panic!("expected BooksLoaded, got {other:?}"),
        }
    }

    #[test]
    fn add_then_toggle_moves_book_between_shelves() {
        let (_dir, store) = open_temp();

        let events = run(&store, vec![AppTask::AddBook(dune()), AppTask::LoadBooks(Filter::none())]);
        let AppEvent::BookAdded(added) = &events[0] else {
            panic!("expected BookAdded, got {:?}", events[0]);
        };
        assert!(!added.finished);
        assert_eq!(loaded(&events[1]).len(), 1);

        let events = run(
            &store,
            vec![AppTask::ToggleBook(added.id.clone()), AppTask::LoadBooks(Filter::none())],
        );
        let AppEvent::BookChanged(changed) = &events[0] else {
            panic!("expected BookChanged, got {:?}", events[0]);
        };
        assert!(changed.finished);
        assert_eq!(changed.title, "Dune");
        assert_eq!(changed.year, Some(1965));
        assert!(loaded(&events[1])[0].finished);
    }

    #[test]
    fn failures_name_the_operation() {
        let (_dir, store) = open_temp();
        let missing = BookId::from("missing");

        let events = run(
            &store,
            vec![
                AppTask::ToggleBook(missing.clone()),
                AppTask::DeleteBook(missing),
                AppTask::LoadBooks(Filter::none()),
            ],
        );

        assert!(matches!(
            &events[0],
            AppEvent::TaskFailed(TaskFailure { operation: Operation::Update, .. })
        ));
        let AppEvent::TaskFailed(failure) = &events[1] else {
            panic!("expected TaskFailed, got {:?}", events[1]);
        };
        assert_eq!(failure.operation, Operation::Delete);
        assert_eq!(failure.to_string(), "Failed to delete book: book missing was not found");

        // A failed task does not stop the worker.
        assert!(loaded(&events[2]).is_empty());
    }

    #[test]
    fn delete_reports_the_removed_id() {
        let (_dir, store) = open_temp();
        let events = run(&store, vec![AppTask::AddBook(dune())]);
        let AppEvent::BookAdded(added) = &events[0] else {
            panic!("expected BookAdded");
        };

        let events = run(&store, vec![AppTask::DeleteBook(added.id.clone()), AppTask::LoadBooks(Filter::none())]);

        assert!(matches!(&events[0], AppEvent::BookDeleted(id) if *id == added.id));
        assert!(loaded(&events[1]).is_empty());
    }
}
