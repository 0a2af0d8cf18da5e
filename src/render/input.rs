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

//! Shared drawing helpers for labelled text inputs.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
};
use tui_input::Input;

use crate::theme::Theme;

pub(crate) const LABEL_WIDTH: u16 = 8;

/// Draws `label` followed by the input's value on a single row.
///
/// When `focused`, the terminal cursor is placed inside the input and the
/// value is scrolled so the cursor stays visible.
pub(crate) fn draw_input_row(
    f: &mut Frame,
    area: Rect,
    label: &str,
    input: &Input,
    focused: bool,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(LABEL_WIDTH), Constraint::Min(1)])
        .split(area);

    f.render_widget(Paragraph::new(label).style(label_style(focused, theme)), chunks[0]);

    let width = chunks[1].width.max(1) as usize;
    let scroll = input.visual_scroll(width);

    f.render_widget(
        Paragraph::new(input.value())
            .style(Style::default().fg(theme.text_fg).bg(theme.input_bg))
            .scroll((0, scroll as u16)),
        chunks[1],
    );

    if focused {
        let offset = input.visual_cursor().saturating_sub(scroll) as u16;
        f.set_cursor_position((chunks[1].x + offset, chunks[1].y));
    }
}

pub(crate) fn label_style(focused: bool, theme: &Theme) -> Style {
    if focused {
        Style::default()
            .fg(theme.accent_colour)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.muted_fg)
    }
}

/// Style of a button or checkbox row.
pub(crate) fn control_style(focused: bool, theme: &Theme) -> Style {
    if focused {
        Style::default()
            .fg(theme.text_fg)
            .bg(theme.highlight_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text_fg)
    }
}
