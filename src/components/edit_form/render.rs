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

//! UI rendering logic for the inline edit form.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    components::{EditForm, edit_form::EditField},
    render::input::{control_style, draw_input_row},
    theme::Theme,
};

impl EditForm {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Edit \"{}\" ", self.book().title))
            .border_style(theme.border_style(true))
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        draw_input_row(f, rows[0], "Title", &self.title, self.focused == EditField::Title, theme);
        draw_input_row(f, rows[1], "Author", &self.author, self.focused == EditField::Author, theme);
        draw_input_row(f, rows[2], "Year", &self.year, self.focused == EditField::Year, theme);

        let buttons = Line::from(vec![
            Span::styled("< Save >", control_style(self.focused == EditField::Save, theme)),
            Span::raw("  "),
            Span::styled("< Cancel >", control_style(self.focused == EditField::Cancel, theme)),
        ]);
        f.render_widget(Paragraph::new(buttons), rows[3]);
    }
}
