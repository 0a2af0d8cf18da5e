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

//! Application events and the main event loop.
//!
//! Every change to UI state happens on the main thread in response to an
//! [`AppEvent`]. Events arrive from three producers:
//!
//! * the input thread, forwarding raw key presses;
//! * the tick thread, forcing a periodic redraw;
//! * the task worker, reporting the outcome of each store operation.
//!
//! The UI is redrawn after every event.

mod handlers;
mod key_handlers;

pub(crate) use handlers::request_render;

use anyhow::{Result, anyhow};
use crossterm::event::KeyEvent;
use handlers::*;
use key_handlers::process_key_event;

use crate::{
    App,
    model::{Book, BookId},
    render::draw,
    tasks::TaskFailure,
    util::term::Tui,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Tick,

    BooksLoaded(Vec<Book>),
    BookAdded(Book),
    BookChanged(Book),
    BookDeleted(BookId),

    TaskFailed(TaskFailure),
    FatalError(String),

    ExitApplication,
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until an exit event is received or the event channel
/// is closed.
///
/// # Errors
///
/// Returns an error on a [`AppEvent::FatalError`], or if drawing fails.
pub(crate) fn process_events(terminal: &mut Tui, app: &mut App) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        dispatch_event(app, event)?;

        terminal.draw(|f| draw(f, app))?;
    }
    Ok(())
}

pub(crate) fn dispatch_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::BooksLoaded(books) => handle_books_loaded(app, books),
        AppEvent::BookAdded(book) => handle_book_added(app, book)?,
        AppEvent::BookChanged(book) => handle_book_changed(app, book)?,
        AppEvent::BookDeleted(id) => handle_book_deleted(app, id)?,
        AppEvent::TaskFailed(failure) => handle_task_failed(app, failure),
        AppEvent::FatalError(message) => return Err(anyhow!(message)),
        AppEvent::Tick | AppEvent::ExitApplication => {}
    }
    Ok(())
}
