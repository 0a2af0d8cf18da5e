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

//! Input handling for the add-book form.

use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::components::{BookForm, BookFormAction, Focus};

impl BookForm {
    /// Applies `event` to the focused form element.
    ///
    /// Enter in a text field or on the submit button requests a submission;
    /// Space or Enter on the checkbox toggles it. Everything else is
    /// delegated to the focused text input.
    pub(crate) fn process_event(&mut self, focus: Focus, event: &Event) -> Option<BookFormAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match (focus, key_event.code) {
            (Focus::BookFormIsComplete, KeyCode::Char(' ') | KeyCode::Enter) => {
                self.toggle_complete();
                None
            }
            (Focus::BookFormIsComplete, _) => None,
            (_, KeyCode::Enter) => Some(BookFormAction::Submit),
            (Focus::BookFormSubmit, _) => None,
            _ => {
                if let Some(input) = self.input_mut(focus) {
                    input.handle_event(event);
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn typing_goes_to_focused_field() {
        let mut form = BookForm::new();
        for c in "Dune".chars() {
            form.process_event(Focus::BookFormTitle, &key(KeyCode::Char(c)));
        }
        form.process_event(Focus::BookFormYear, &key(KeyCode::Char('7')));

        assert_eq!(form.title.value(), "Dune");
        assert_eq!(form.year.value(), "7");
        assert!(form.author.value().is_empty());
    }

    #[test]
    fn checkbox_toggles_and_enter_submits() {
        let mut form = BookForm::new();

        assert_eq!(form.process_event(Focus::BookFormIsComplete, &key(KeyCode::Char(' '))), None);
        assert!(form.is_complete);

        assert_eq!(
            form.process_event(Focus::BookFormSubmit, &key(KeyCode::Enter)),
            Some(BookFormAction::Submit)
        );
        assert_eq!(
            form.process_event(Focus::BookFormAuthor, &key(KeyCode::Enter)),
            Some(BookFormAction::Submit)
        );
    }
}
