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

//! Input handling for the search form.

use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::components::{SearchAction, SearchForm};

impl SearchForm {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<SearchAction> {
        match event {
            Event::Key(key_event) if key_event.code == KeyCode::Enter => Some(SearchAction::Submit),
            Event::Key(_) => {
                self.input.handle_event(event);
                None
            }
            _ => None,
        }
    }
}
