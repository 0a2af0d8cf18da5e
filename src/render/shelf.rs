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

//! Render the two bookshelf lists.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::{
    shelf::{BookItemView, ItemControl, Shelf, ShelfPane},
    theme::Theme,
};

/// Renders the "not finished" and "finished" lists side by side.
///
/// An open edit form is drawn below the list of the book it edits.
pub(crate) fn draw_shelf(f: &mut Frame, area: Rect, shelf: &mut Shelf, focused: bool, theme: &Theme) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (pane, column) in [ShelfPane::Unfinished, ShelfPane::Finished].into_iter().zip(columns.iter()) {
        let editing_here = shelf
            .editing
            .as_ref()
            .is_some_and(|form| form.book().finished == (pane == ShelfPane::Finished));

        let (list_area, edit_area) = if editing_here {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(6)])
                .split(*column);
            (rows[0], Some(rows[1]))
        } else {
            (*column, None)
        };

        draw_pane(f, list_area, shelf, pane, focused, theme);

        if let (Some(edit_area), Some(form)) = (edit_area, shelf.editing.as_ref()) {
            form.draw(f, edit_area, theme);
        }
    }
}

fn draw_pane(f: &mut Frame, area: Rect, shelf: &mut Shelf, pane: ShelfPane, focused: bool, theme: &Theme) {
    let is_active = focused && shelf.active_pane == pane;

    let (name, colour) = match pane {
        ShelfPane::Unfinished => ("Not finished", theme.unfinished_fg),
        ShelfPane::Finished => ("Finished", theme.finished_fg),
    };
    let title = if shelf.loading {
        format!(" {} (loading) ", name)
    } else {
        format!(" {} ({}) ", name, shelf.books(pane).len())
    };

    let items: Vec<ListItem> = shelf
        .item_views(pane)
        .iter()
        .map(|view| book_item(view, colour, theme))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(theme.border_style(is_active)),
        )
        .highlight_style(if is_active {
            Style::default().bg(theme.highlight_bg)
        } else {
            Style::default()
        })
        .highlight_symbol("> ");

    let state: &mut ListState = match pane {
        ShelfPane::Unfinished => &mut shelf.unfinished_state,
        ShelfPane::Finished => &mut shelf.finished_state,
    };
    f.render_stateful_widget(list, area, state);
}

fn book_item(view: &BookItemView, colour: Color, theme: &Theme) -> ListItem<'static> {
    let mut lines: Vec<Line> = view
        .rows()
        .iter()
        .map(|(id, text)| {
            let style = if *id == BookItemView::TITLE_ID {
                Style::default().fg(colour).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text_fg)
            };
            Line::styled(text.to_string(), style)
        })
        .collect();

    let controls: Vec<String> = ItemControl::ALL
        .iter()
        .map(|control| format!("[{}] {}", control.key(), view.control_label(*control)))
        .collect();
    lines.push(Line::styled(controls.join("  "), Style::default().fg(theme.muted_fg)));
    lines.push(Line::from(""));

    ListItem::new(Text::from(lines))
}
