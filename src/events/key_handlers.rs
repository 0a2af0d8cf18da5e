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

//! Keyboard routing.
//!
//! Popups own the keyboard while they are open: an alert first, then the
//! delete confirmation, then an open inline edit form. Otherwise Tab cycles
//! focus and the focused element receives the key.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::{
    App,
    components::{BookFormAction, ConfirmAction, ConfirmDelete, EditAction, Focus, SearchAction},
    events::{AppEvent, request_render},
    model::current_year,
    shelf::ItemControl,
    tasks::AppTask,
};

/// Maps a key press to a state change or a store task.
///
/// # Errors
///
/// Returns an error if a task or event cannot be sent, which only happens
/// once the receiving side has gone away.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.event_tx.send(AppEvent::ExitApplication)?;
        return Ok(());
    }

    let event = Event::Key(key);

    if let Some(alert) = &app.alert {
        if alert.process_event(&event) {
            app.alert = None;
        }
        return Ok(());
    }

    if let Some(confirm) = &app.confirm_delete {
        match confirm.process_event(&event) {
            Some(ConfirmAction::Confirm) => {
                app.task_tx.send(AppTask::DeleteBook(confirm.book_id.clone()))?;
                app.confirm_delete = None;
            }
            Some(ConfirmAction::Decline) => {
                debug!(id = %confirm.book_id, "delete declined");
                app.confirm_delete = None;
            }
            None => {}
        }
        return Ok(());
    }

    if let Some(form) = app.shelf.editing.as_mut() {
        match form.process_event(&event) {
            Some(EditAction::Save) => {
                let id = form.book_id().clone();
                let changes = form.changes(current_year());
                app.task_tx.send(AppTask::UpdateBook(id, changes))?;
                app.shelf.close_edit();
            }
            Some(EditAction::Cancel) | Some(EditAction::ToggleEdit) => app.shelf.close_edit(),
            None => {}
        }
        return Ok(());
    }

    match key.code {
        KeyCode::Tab => {
            app.focus = app.focus.next();
            return Ok(());
        }
        KeyCode::BackTab => {
            app.focus = app.focus.previous();
            return Ok(());
        }
        _ => {}
    }

    match app.focus {
        focus if focus.in_book_form() => {
            if let Some(BookFormAction::Submit) = app.book_form.process_event(focus, &event) {
                submit_book_form(app)?;
            }
        }
        Focus::SearchBookTitle => {
            if let Some(SearchAction::Submit) = app.search.process_event(&event) {
                request_render(app)?;
            }
        }
        _ => process_shelf_key_event(app, key)?,
    }

    Ok(())
}

fn submit_book_form(app: &mut App) -> Result<()> {
    match app.book_form.submission(current_year()) {
        Ok(new_book) => {
            app.book_form.message = None;
            app.task_tx.send(AppTask::AddBook(new_book))?;
        }
        Err(e) => app.book_form.message = Some(e.to_string()),
    }
    Ok(())
}

/// Runs one of the selected book's actions.
///
/// The target is resolved from the selection at the moment of the key press.
fn activate_item_control(app: &mut App, control: ItemControl) -> Result<()> {
    let Some(book) = app.shelf.selected_book() else {
        return Ok(());
    };
    debug!(id = %book.id, control = control.element_id(), "item control activated");

    match control {
        ItemControl::ToggleComplete => {
            let id = book.id.clone();
            app.task_tx.send(AppTask::ToggleBook(id))?;
        }
        ItemControl::Delete => app.confirm_delete = Some(ConfirmDelete::for_book(book)),
        ItemControl::Edit => app.shelf.toggle_edit(),
    }
    Ok(())
}

fn process_shelf_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        KeyCode::Char('j') | KeyCode::Down => app.shelf.next_book(),
        KeyCode::Char('k') | KeyCode::Up => app.shelf.previous_book(),

        KeyCode::Char('h') | KeyCode::Left => app.shelf.previous_pane(),
        KeyCode::Char('l') | KeyCode::Right => app.shelf.next_pane(),

        KeyCode::Char(c) => {
            if let Some(control) = ItemControl::from_key(c) {
                activate_item_control(app, control)?;
            }
        }

        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Receiver};

    use crate::{config::AppConfig, model::{BookId, tests::book}};

    use super::*;

    fn app() -> (App, Receiver<AppTask>) {
        let (task_tx, task_rx) = mpsc::channel();
        (App::new(AppConfig::default(), task_tx), task_rx)
    }

    fn press(app: &mut App, code: KeyCode) {
        process_key_event(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn empty_title_never_reaches_the_store() {
        let (mut app, task_rx) = app();
        app.focus = Focus::BookFormTitle;
        type_text(&mut app, "   ");

        press(&mut app, KeyCode::Enter);

        assert!(task_rx.try_recv().is_err());
        assert_eq!(app.book_form.message.as_deref(), Some("Please enter the book title"));
    }

    #[test]
    fn filled_form_sends_an_add_task() {
        let (mut app, task_rx) = app();
        type_text(&mut app, "Dune");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Frank Herbert");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "1965");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::BookFormSubmit);

        press(&mut app, KeyCode::Enter);

        match task_rx.try_recv() {
            Ok(AppTask::AddBook(new_book)) => {
                assert_eq!(new_book.title, "Dune");
                assert_eq!(new_book.author, "Frank Herbert");
                assert_eq!(new_book.year, 1965);
                assert!(new_book.finished);
            }
            other => panic!("expected an add task, got {other:?}"),
        }
    }

    #[test]
    fn declined_delete_sends_nothing() {
        let (mut app, task_rx) = app();
        app.focus = Focus::Shelf;
        app.shelf.set_books(vec![book("1", "Dune", false)]);

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(
            app.confirm_delete.as_ref().map(|c| c.prompt()),
            Some("Are you sure you want to delete \"Dune\"?".to_string())
        );
        press(&mut app, KeyCode::Char('n'));

        assert!(app.confirm_delete.is_none());
        assert!(task_rx.try_recv().is_err());
    }

    #[test]
    fn confirmed_delete_carries_the_selected_id() {
        let (mut app, task_rx) = app();
        app.focus = Focus::Shelf;
        app.shelf.set_books(vec![book("1", "Dune", false), book("2", "Emma", false)]);

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));

        match task_rx.try_recv() {
            Ok(AppTask::DeleteBook(id)) => assert_eq!(id, BookId::from("2")),
            other => panic!("expected a delete task, got {other:?}"),
        }
    }

    #[test]
    fn toggle_uses_the_active_list() {
        let (mut app, task_rx) = app();
        app.focus = Focus::Shelf;
        app.shelf.set_books(vec![book("1", "Dune", false), book("2", "Emma", true)]);

        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Char('t'));

        match task_rx.try_recv() {
            Ok(AppTask::ToggleBook(id)) => assert_eq!(id, BookId::from("2")),
            other => panic!("expected a toggle task, got {other:?}"),
        }
    }

    #[test]
    fn blank_title_edit_keeps_the_title() {
        let (mut app, task_rx) = app();
        app.focus = Focus::Shelf;
        let mut dune = book("1", "Dune", false);
        dune.year = Some(1965);
        app.shelf.set_books(vec![dune]);

        press(&mut app, KeyCode::Char('e'));
        for _ in 0.."Dune".len() {
            press(&mut app, KeyCode::Backspace);
        }
        press(&mut app, KeyCode::Enter);

        match task_rx.try_recv() {
            Ok(AppTask::UpdateBook(id, changes)) => {
                assert_eq!(id, BookId::from("1"));
                assert_eq!(changes.title, "Dune");
                assert_eq!(changes.year, Some(1965));
            }
            other => panic!("expected an update task, got {other:?}"),
        }
        assert!(app.shelf.editing.is_none());
    }

    #[test]
    fn edit_shortcut_closes_the_open_form() {
        let (mut app, _task_rx) = app();
        app.focus = Focus::Shelf;
        app.shelf.set_books(vec![book("1", "Dune", false)]);

        press(&mut app, KeyCode::Char('e'));
        assert!(app.shelf.editing.is_some());

        let ctrl_e = KeyEvent::new(KeyCode::Char('e'), KeyModifiers::CONTROL);
        process_key_event(&mut app, ctrl_e).unwrap();
        assert!(app.shelf.editing.is_none());
    }

    #[test]
    fn alert_swallows_keys_until_dismissed() {
        let (mut app, task_rx) = app();
        app.focus = Focus::Shelf;
        app.shelf.set_books(vec![book("1", "Dune", false)]);
        app.alert = Some(crate::components::Alert::new("Failed to add book: offline"));

        press(&mut app, KeyCode::Char('t'));
        assert!(task_rx.try_recv().is_err());

        press(&mut app, KeyCode::Enter);
        assert!(app.alert.is_none());
    }

    #[test]
    fn ctrl_c_quits_from_anywhere() {
        let (mut app, _task_rx) = app();
        app.focus = Focus::BookFormTitle;

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        process_key_event(&mut app, ctrl_c).unwrap();

        assert!(matches!(app.event_rx.try_recv(), Ok(AppEvent::ExitApplication)));
        assert_eq!(app.book_form.title.value(), "");
    }
}
