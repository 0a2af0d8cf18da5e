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

//! UI rendering logic for modal dialogs.
//!
//! Dialogs are drawn centred on top of whatever is underneath, after clearing
//! their own area.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::{
    components::{Alert, ConfirmDelete},
    theme::Theme,
};

impl ConfirmDelete {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let lines = vec![
            Line::from(self.prompt()),
            Line::from(""),
            Line::from("[y] Delete    [n] Keep").style(Style::default().fg(theme.muted_fg)),
        ];

        draw_dialog(f, area, " Delete book ", lines, theme.accent_colour, theme);
    }
}

impl Alert {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let lines = vec![
            Line::from(self.message.as_str()),
            Line::from(""),
            Line::from("[Enter] OK").style(Style::default().fg(theme.muted_fg)),
        ];

        draw_dialog(f, area, " Error ", lines, theme.error_colour, theme);
    }
}

fn draw_dialog(
    f: &mut Frame,
    area: Rect,
    title: &str,
    lines: Vec<Line>,
    border_colour: ratatui::style::Color,
    theme: &Theme,
) {
    let popup = centered(area, 60, 7);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_colour))
        .style(Style::default().bg(theme.background_colour))
        .padding(Padding::horizontal(1));

    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        popup,
    );
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    popup
}
