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

//! Input handling for modal dialogs.

use crossterm::event::{Event, KeyCode};

use crate::components::{Alert, ConfirmAction, ConfirmDelete};

impl ConfirmDelete {
    pub(crate) fn process_event(&self, event: &Event) -> Option<ConfirmAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(ConfirmAction::Confirm),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(ConfirmAction::Decline),
            _ => None,
        }
    }
}

impl Alert {
    /// Returns `true` when the event dismisses the alert.
    pub(crate) fn process_event(&self, event: &Event) -> bool {
        matches!(
            event,
            Event::Key(key_event) if matches!(key_event.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' '))
        )
    }
}
