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

//! Find-input logic and state management.
//!
//! Each browser pane has a small text input above it. While an input holds
//! focus every key event is delegated to it, so typing is never intercepted
//! as a command; `Enter` submits the text as a find query and `Esc` hands
//! focus back to the pane.

use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::browser::BrowserPane;

/// What the focused input did with a key event.
#[derive(Debug, Eq, PartialEq)]
pub(crate) enum FilterOutcome {
    /// The event went to the text input.
    Captured,
    /// Focus was handed back with nothing to do.
    Dismissed,
    /// `Enter` submitted this query; focus was handed back.
    Find(String),
}

pub(crate) struct FilterBar {
    focused: Option<BrowserPane>,
    playlists_input: Input,
    tracks_input: Input,
    assigned_input: Input,
}

impl FilterBar {
    pub(crate) fn new() -> Self {
        Self {
            focused: None,
            playlists_input: Input::default(),
            tracks_input: Input::default(),
            assigned_input: Input::default(),
        }
    }

    pub(crate) fn is_focused(&self) -> bool {
        self.focused.is_some()
    }

    pub(crate) fn focused_pane(&self) -> Option<BrowserPane> {
        self.focused
    }

    pub(crate) fn focus(&mut self, pane: BrowserPane) {
        self.focused = Some(pane);
    }

    pub(crate) fn input_for(&self, pane: BrowserPane) -> &Input {
        match pane {
            BrowserPane::Playlists => &self.playlists_input,
            BrowserPane::Tracks => &self.tracks_input,
            BrowserPane::Assigned => &self.assigned_input,
        }
    }

    fn input_for_mut(&mut self, pane: BrowserPane) -> &mut Input {
        match pane {
            BrowserPane::Playlists => &mut self.playlists_input,
            BrowserPane::Tracks => &mut self.tracks_input,
            BrowserPane::Assigned => &mut self.assigned_input,
        }
    }

    /// Routes a key event to the focused input. Callers only invoke this
    /// while an input holds focus.
    pub(crate) fn handle_event(&mut self, event: &Event) -> FilterOutcome {
        let Some(pane) = self.focused else {
            return FilterOutcome::Dismissed;
        };

        let Event::Key(key_event) = event else {
            return FilterOutcome::Captured;
        };

        match key_event.code {
            KeyCode::Esc => {
                self.focused = None;
                FilterOutcome::Dismissed
            }

            KeyCode::Enter => {
                self.focused = None;
                let query = self.input_for(pane).value().trim().to_string();
                if query.is_empty() {
                    FilterOutcome::Dismissed
                } else {
                    FilterOutcome::Find(query)
                }
            }

            _ => {
                // Delegate all other key events to the managed input.
                self.input_for_mut(pane).handle_event(event);
                FilterOutcome::Captured
            }
        }
    }
}
