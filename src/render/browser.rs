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

//! Render the assignment browser panes.
//!
//! Three list columns: playlists, tracks of the activated playlist, and
//! assignment toggles for the activated track. Toggle rows carry a `*`
//! (assigned) or `-` (unassigned) marker. Each column has a find input
//! above it.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use tui_input::Input;

use crate::{
    browser::{AssignmentBrowser, BrowserPane},
    filter::FilterBar,
    theme::Theme,
};

fn pane_title(pane: BrowserPane) -> &'static str {
    match pane {
        BrowserPane::Playlists => " Playlists ",
        BrowserPane::Tracks => " Tracks ",
        BrowserPane::Assigned => " Assigned ",
    }
}

pub(crate) fn draw_pane(
    f: &mut Frame,
    area: Rect,
    browser: &mut AssignmentBrowser,
    theme: &Theme,
    pane: BrowserPane,
) {
    let items: Vec<ListItem> = match pane {
        BrowserPane::Playlists => browser
            .playlists
            .iter()
            .map(|entry| ListItem::new(entry.name.clone()))
            .collect(),
        BrowserPane::Tracks => browser
            .tracks
            .iter()
            .map(|entry| ListItem::new(entry.name.clone()))
            .collect(),
        BrowserPane::Assigned => browser
            .toggles
            .iter()
            .map(|entry| {
                let marker = if entry.assigned { '*' } else { '-' };
                let style = if entry.assigned {
                    Style::default().fg(theme.assigned_fg)
                } else {
                    Style::default().fg(theme.unassigned_fg)
                };
                ListItem::new(format!("{} {}", marker, entry.name)).style(style)
            })
            .collect(),
    };

    let is_active = browser.active_pane == pane;
    let state = browser.state_of_mut(pane);
    render_list(f, area, pane_title(pane), items, state, is_active, theme);
}

fn render_list(
    f: &mut Frame,
    area: Rect,
    title: &str,
    items: Vec<ListItem>,
    state: &mut ListState,
    is_active: bool,
    theme: &Theme,
) {
    let border_style = if is_active {
        Style::default()
            .fg(theme.accent_colour)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.border_colour)
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(border_style),
        )
        .highlight_style(
            Style::default()
                .bg(theme.list_highlight_bg)
                .fg(theme.list_highlight_fg),
        )
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, state);
}

pub(crate) fn draw_filter(
    f: &mut Frame,
    area: Rect,
    filter: &FilterBar,
    theme: &Theme,
    pane: BrowserPane,
) {
    let input: &Input = filter.input_for(pane);
    let is_focused = filter.focused_pane() == Some(pane);

    let style = if is_focused {
        Style::default().fg(theme.accent_colour)
    } else {
        Style::default().fg(theme.border_colour)
    };

    let paragraph = ratatui::widgets::Paragraph::new(format!("> {}", input.value())).style(style);
    f.render_widget(paragraph, area);

    if is_focused {
        f.set_cursor_position((area.x + 2 + input.visual_cursor() as u16, area.y));
    }
}
