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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every event to provide a reactive user interface. Screen layout from top
//! to bottom: the add form beside the search form, the two shelf lists, and a
//! single line of key hints. Popups are drawn last, over everything else.

pub(crate) mod input;
mod shelf;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::{
    App,
    components::{EditForm, Focus},
    render::shelf::draw_shelf,
    shelf::{BookItemView, ShelfPane},
};

/// Renders the user interface to the terminal frame.
///
/// Takes the application mutably so list widgets can update their scroll
/// positions.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(Block::default().style(Style::default().bg(app.theme.background_colour)), area);

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(outer[0]);

    app.book_form.draw(f, header[0], app.focus, &app.theme);
    app.search
        .draw(f, header[1], app.focus == Focus::SearchBookTitle, &app.theme);

    draw_shelf(f, outer[1], &mut app.shelf, app.focus == Focus::Shelf, &app.theme);

    draw_hints(f, outer[2], app);

    if let Some(confirm) = &app.confirm_delete {
        confirm.draw(f, area, &app.theme);
    }
    if let Some(alert) = &app.alert {
        alert.draw(f, area, &app.theme);
    }
}

fn draw_hints(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let hints = if app.alert.is_some() {
        "Enter dismiss"
    } else if app.confirm_delete.is_some() {
        "y delete  n keep"
    } else if app.shelf.editing.is_some() {
        "Tab next field  Enter save  Esc cancel  Ctrl-e close"
    } else if app.focus == Focus::Shelf {
        "Tab focus  j/k move  h/l switch list  t toggle  d delete  e edit  q quit"
    } else {
        "Tab focus  Enter submit  Ctrl-c quit"
    };

    let line = Line::from(vec![
        Span::styled(format!(" {} ", element_path(app)), Style::default().fg(app.theme.accent_colour)),
        Span::styled(hints, Style::default().fg(app.theme.muted_fg)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// Identifier path of the element receiving keys, outermost first.
pub(crate) fn element_path(app: &App) -> String {
    if app.focus != Focus::Shelf && app.shelf.editing.is_none() {
        return match app.focus.container_id() {
            Some(container) => format!("{}/{}", container, app.focus.element_id()),
            None => app.focus.element_id().to_string(),
        };
    }

    if let Some(form) = &app.shelf.editing {
        let pane = if form.book().finished {
            ShelfPane::Finished
        } else {
            ShelfPane::Unfinished
        };
        return format!(
            "{}/{}/{}",
            pane.element_id(),
            BookItemView::new(form.book()).element_id(),
            EditForm::ELEMENT_ID
        );
    }

    let pane = app.shelf.active_pane.element_id();
    match app.shelf.selected_book() {
        Some(book) => format!("{}/{}", pane, BookItemView::new(book).element_id()),
        None => pane.to_string(),
    }
}
