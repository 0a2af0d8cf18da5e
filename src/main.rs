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

//! # Bookshelf TUI.
//!
//! A terminal bookshelf manager: add books, sort them into "finished" and
//! "not finished" lists, search by title, edit and delete them. Records live
//! either in a local SQLite file or behind a remote Bookshelf HTTP API.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, owns all UI state and
//!   renders it.
//! * A **Task Worker** owns the record store and runs store operations one at
//!   a time.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even when the run fails. Communication
//! between the UI and the worker is handled via `std::sync::mpsc` channels.

mod components;
mod config;
mod events;
mod logging;
mod model;
mod render;
mod shelf;
mod store;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::event;
use std::{
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};
use tracing::{error, info};

use crate::{
    components::{Alert, BookForm, ConfirmDelete, Focus, SearchForm},
    config::AppConfig,
    events::{AppEvent, process_events, request_render},
    shelf::Shelf,
    tasks::AppTask,
    theme::Theme,
    util::term::{Tui, restore_terminal, setup_terminal},
};

/// Application state.
pub(crate) struct App {
    pub config: AppConfig,

    pub theme: Theme,
    pub focus: Focus,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: Sender<AppTask>,

    pub book_form: BookForm,
    pub search: SearchForm,
    pub shelf: Shelf,

    pub confirm_delete: Option<ConfirmDelete>,
    pub alert: Option<Alert>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, task_tx: Sender<AppTask>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        Self {
            config,
            theme: Theme::default(),
            focus: Focus::BookFormTitle,
            event_tx,
            event_rx,
            task_tx,
            book_form: BookForm::new(),
            search: SearchForm::new(),
            shelf: Shelf::new(),
            confirm_delete: None,
            alert: None,
        }
    }
}

/// The entry point of the application.
///
/// Loads the configuration, starts logging, manages the terminal lifecycle,
/// and returns an error if any part of the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();
    logging::init_logging(&config)?;
    info!(backend = ?config.backend, "starting bookshelf");

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, task_tx);

    let background = Theme::to_hex(app.theme.background_colour);
    let mut terminal = setup_terminal(background.as_deref())?;
    let res = run(&mut terminal, &mut app, task_rx);
    restore_terminal(&mut terminal);

    if let Err(e) = &res {
        error!(error = %format!("{e:#}"), "application error");
    }
    res.context("Application error occurred")
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A task worker to run [`AppTask`]s against the record store.
/// * An input thread to poll for system keyboard events.
/// * A tick thread to trigger periodic UI refreshes.
///
/// It then requests the first render and hands control to
/// [`process_events`].
fn run(terminal: &mut Tui, app: &mut App, task_rx: Receiver<AppTask>) -> Result<()> {
    tasks::spawn_task_worker(&app.config, task_rx, app.event_tx.clone());

    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read() {
                if key.kind != event::KeyEventKind::Press {
                    continue;
                }
                if tx_keys.send(AppEvent::Key(key)).is_err() {
                    break;
                }
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(Duration::from_millis(250));
        }
    });

    // Initial render with no search filter
    request_render(app)?;

    process_events(terminal, app)
}
