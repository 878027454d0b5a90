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
//! widgets using the `ratatui` framework: a header line, one find input per
//! browser pane, the three browser list columns, and the activity log pane
//! at the bottom.
//!
//! The primary entry point is the [`draw`] function, called after every
//! processed event and on every tick.

mod browser;
mod log;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::{App, browser::BrowserPane};

const PANES: [BrowserPane; 3] = [BrowserPane::Playlists, BrowserPane::Tracks, BrowserPane::Assigned];

/// Renders the user interface to the terminal frame.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Outer layout: header, find inputs, browser panes, log
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(4),
        ])
        .split(area);

    draw_header(f, outer[0], app);

    let filter_columns = columns(outer[1]);
    let pane_columns = columns(outer[2]);

    for (i, pane) in PANES.into_iter().enumerate() {
        browser::draw_filter(f, filter_columns[i], &app.filter, &app.theme, pane);
        browser::draw_pane(f, pane_columns[i], &mut app.browser, &app.theme, pane);
    }

    log::draw_log(f, outer[3], &app.log, &app.theme);
}

fn columns(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ])
        .split(area)
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let header = Paragraph::new(
        " tunetag | Enter: open  Esc: back  /: find  F5: play  s: stop  q: quit",
    )
    .style(Style::default().fg(app.theme.accent_colour));
    f.render_widget(header, area);
}
