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

//! Input handling for the inline edit form.

use crossterm::event::{Event, KeyCode, KeyModifiers};
use tui_input::backend::crossterm::EventHandler;

use crate::components::{
    EditAction, EditForm,
    edit_form::EditField,
};

impl EditForm {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<EditAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match (key_event.code, key_event.modifiers) {
            (KeyCode::Esc, _) => Some(EditAction::Cancel),
            (KeyCode::Char('e'), KeyModifiers::CONTROL) => Some(EditAction::ToggleEdit),

            (KeyCode::Tab, _) | (KeyCode::Down, _) => {
                self.focused = self.focused.next();
                None
            }
            (KeyCode::BackTab, _) | (KeyCode::Up, _) => {
                self.focused = self.focused.previous();
                None
            }

            (KeyCode::Enter, _) if self.focused == EditField::Cancel => Some(EditAction::Cancel),
            (KeyCode::Enter, _) => Some(EditAction::Save),

            _ => {
                if let Some(input) = self.focused_input_mut() {
                    input.handle_event(event);
                }
                None
            }
        }
    }
}
