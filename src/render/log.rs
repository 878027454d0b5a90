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

//! Render the activity log pane.
//!
//! Shows the tail of the append-only log; older lines scroll out of view
//! but are never dropped from the backing state.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
};

use crate::{logview::LogView, theme::Theme};

pub(crate) fn draw_log(f: &mut Frame, area: Rect, log: &LogView, theme: &Theme) {
    let visible = area.height.saturating_sub(2) as usize;
    let lines = log.lines();
    let start = lines.len().saturating_sub(visible);
    let text = lines[start..].join("\n");

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(theme.log_fg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Log ")
                .border_style(Style::default().fg(theme.border_colour)),
        );

    f.render_widget(paragraph, area);
}
