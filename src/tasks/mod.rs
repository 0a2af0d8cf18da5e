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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to keep store calls off
//! the main UI thread. A dedicated worker owns the [`BookStore`] and runs
//! [`AppTask`] requests strictly one after another, broadcasting each result
//! back to the application as an [`AppEvent`].
//!
//! Because tasks are processed in order, the result of a later load always
//! arrives after, and replaces, the result of an earlier one.

mod handlers;

use std::{
    fmt,
    sync::mpsc::{Receiver, Sender},
    thread,
};

use anyhow::Result;
use tracing::{error, info};

use crate::{
    config::AppConfig,
    events::AppEvent,
    model::{BookChanges, BookId, Filter, NewBook},
    store::{self, BookStore},
};

#[derive(Debug)]
pub(crate) enum AppTask {
    LoadBooks(Filter),
    AddBook(NewBook),
    ToggleBook(BookId),
    UpdateBook(BookId, BookChanges),
    DeleteBook(BookId),
}

impl AppTask {
    pub(crate) fn operation(&self) -> Operation {
        match self {
            AppTask::LoadBooks(_) => Operation::Load,
            AppTask::AddBook(_) => Operation::Add,
            AppTask::ToggleBook(_) | AppTask::UpdateBook(..) => Operation::Update,
            AppTask::DeleteBook(_) => Operation::Delete,
        }
    }
}

/// The category of store work that failed, as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operation {
    Load,
    Add,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Operation::Load => "Failed to load books",
            Operation::Add => "Failed to add book",
            Operation::Update => "Failed to update book",
            Operation::Delete => "Failed to delete book",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TaskFailure {
    pub(crate) operation: Operation,
    pub(crate) message: String,
}

impl fmt::Display for TaskFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.operation, self.message)
    }
}

/// Spawns a background thread to process application tasks.
///
/// The worker opens the configured store itself and then enters a blocking
/// loop, listening for incoming [`AppTask`]s until the sending side is
/// dropped.
///
/// # Arguments
///
/// * `config` - The application configuration.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(
    config: &AppConfig,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) {
    let config = config.clone();

    thread::spawn(move || {
        let store = match store::open_store(&config) {
            Ok(store) => store,
            Err(e) => {
                error!(error = %e, "failed to open book store");
                let _ = event_tx.send(AppEvent::FatalError(format!("Failed to open book store: {e}")));
                return;
            }
        };

        let ctx = TaskContext {
            event_tx: &event_tx,
            store: store.as_ref(),
        };

        run_tasks(&ctx, &task_rx);
        info!("task worker stopped");
    });
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
pub(crate) struct TaskContext<'a> {
    pub(crate) event_tx: &'a Sender<AppEvent>,
    pub(crate) store: &'a dyn BookStore,
}

pub(crate) fn run_tasks(ctx: &TaskContext, task_rx: &Receiver<AppTask>) {
    while let Ok(task) = task_rx.recv() {
        let operation = task.operation();

        if let Err(e) = handle_task(task, ctx) {
            let failure = TaskFailure {
                operation,
                message: format!("{e:#}"),
            };
            let _ = ctx.event_tx.send(AppEvent::TaskFailed(failure));
        }
    }
}

/// Orchestrates the execution of a single task.
///
/// This function implements the logic for each task and sends the result back
/// through the application event channel.
fn handle_task(task: AppTask, ctx: &TaskContext) -> Result<()> {
    match task {
        AppTask::LoadBooks(filter) => handlers::load_books(ctx, filter),
        AppTask::AddBook(new_book) => handlers::add_book(ctx, new_book),
        AppTask::ToggleBook(id) => handlers::toggle_book(ctx, id),
        AppTask::UpdateBook(id, changes) => handlers::update_book(ctx, id, changes),
        AppTask::DeleteBook(id) => handlers::delete_book(ctx, id),
    }
}
