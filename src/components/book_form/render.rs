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

//! UI rendering logic for the add-book form.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    components::{BookForm, Focus},
    render::input::{control_style, draw_input_row},
    theme::Theme,
};

impl BookForm {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, focus: Focus, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Add a book ")
            .border_style(theme.border_style(focus.in_book_form()))
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
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        draw_input_row(f, rows[0], "Title", &self.title, focus == Focus::BookFormTitle, theme);
        draw_input_row(f, rows[1], "Author", &self.author, focus == Focus::BookFormAuthor, theme);
        draw_input_row(f, rows[2], "Year", &self.year, focus == Focus::BookFormYear, theme);

        let checkbox = format!("[{}] Finished reading", if self.is_complete { "x" } else { " " });
        f.render_widget(
            Paragraph::new(checkbox).style(control_style(focus == Focus::BookFormIsComplete, theme)),
            rows[3],
        );

        let submit = format!("< {} >", self.submit_label());
        f.render_widget(
            Paragraph::new(submit).style(control_style(focus == Focus::BookFormSubmit, theme)),
            rows[4],
        );

        if let Some(message) = &self.message {
            f.render_widget(
                Paragraph::new(Line::from(message.as_str()))
                    .style(Style::default().fg(theme.error_colour)),
                rows[5],
            );
        }
    }
}
