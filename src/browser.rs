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

//! Assignment browser state management.
//!
//! This module provides state for the three browser panes — playlists,
//! tracks of the activated playlist, and assignment toggles for the
//! activated track — plus navigation between and within them.
//!
//! Entries hold live automation handles captured at population time; a pane
//! is always rebuilt wholesale, never patched, so an entry's position is
//! stable for the lifetime of the population pass that created it.

use ratatui::widgets::ListState;

use crate::automation::{PlaylistHandle, TrackHandle};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum BrowserPane {
    #[default]
    Playlists,
    Tracks,
    Assigned,
}

pub(crate) struct PlaylistEntry {
    pub(crate) name: String,
    pub(crate) playlist: PlaylistHandle,
}

pub(crate) struct TrackEntry {
    pub(crate) name: String,
    pub(crate) track: TrackHandle,
}

/// One assignment toggle row. Captures the playlist it targets, the track
/// whose activation built the row, and the matched state computed at build
/// time.
pub(crate) struct ToggleEntry {
    pub(crate) name: String,
    pub(crate) assigned: bool,
    pub(crate) playlist: PlaylistHandle,
    pub(crate) track: TrackHandle,
}

#[derive(Default)]
pub(crate) struct AssignmentBrowser {
    pub(crate) active_pane: BrowserPane,

    pub(crate) playlists: Vec<PlaylistEntry>,
    pub(crate) tracks: Vec<TrackEntry>,
    pub(crate) toggles: Vec<ToggleEntry>,

    pub(crate) playlists_state: ListState,
    pub(crate) tracks_state: ListState,
    pub(crate) toggles_state: ListState,
}

impl AssignmentBrowser {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Focus returns to the parent pane; nothing is cleared.
    pub(crate) fn leave_pane(&mut self) {
        self.active_pane = match self.active_pane {
            BrowserPane::Playlists => BrowserPane::Playlists,
            BrowserPane::Tracks => BrowserPane::Playlists,
            BrowserPane::Assigned => BrowserPane::Tracks,
        };
    }

    pub(crate) fn selected_index(&self) -> Option<usize> {
        self.state_of(self.active_pane).selected()
    }

    pub(crate) fn next(&mut self) {
        let len = self.len_of(self.active_pane);
        Self::step_next(self.state_of_mut(self.active_pane), len);
    }

    pub(crate) fn previous(&mut self) {
        let len = self.len_of(self.active_pane);
        Self::step_previous(self.state_of_mut(self.active_pane), len);
    }

    pub(crate) fn select_in_active(&mut self, index: usize) {
        let len = self.len_of(self.active_pane);
        if index < len {
            self.state_of_mut(self.active_pane).select(Some(index));
        }
    }

    /// Display names of the active pane's entries, in order.
    pub(crate) fn active_names(&self) -> Vec<&str> {
        match self.active_pane {
            BrowserPane::Playlists => self.playlists.iter().map(|e| e.name.as_str()).collect(),
            BrowserPane::Tracks => self.tracks.iter().map(|e| e.name.as_str()).collect(),
            BrowserPane::Assigned => self.toggles.iter().map(|e| e.name.as_str()).collect(),
        }
    }

    pub(crate) fn clear_playlists(&mut self) {
        self.playlists.clear();
        self.playlists_state.select(None);
    }

    pub(crate) fn push_playlist(&mut self, entry: PlaylistEntry) {
        self.playlists.push(entry);
        if self.playlists_state.selected().is_none() {
            self.playlists_state.select(Some(0));
        }
    }

    pub(crate) fn clear_tracks(&mut self) {
        self.tracks.clear();
        self.tracks_state.select(None);
    }

    pub(crate) fn push_track(&mut self, entry: TrackEntry) {
        self.tracks.push(entry);
        if self.tracks_state.selected().is_none() {
            self.tracks_state.select(Some(0));
        }
    }

    pub(crate) fn clear_toggles(&mut self) {
        self.toggles.clear();
        self.toggles_state.select(None);
    }

    pub(crate) fn push_toggle(&mut self, entry: ToggleEntry) {
        self.toggles.push(entry);
        if self.toggles_state.selected().is_none() {
            self.toggles_state.select(Some(0));
        }
    }

    /// Restores the toggle cursor after a rebuild, clamped to the new
    /// length.
    pub(crate) fn select_toggle(&mut self, index: usize) {
        if self.toggles.is_empty() {
            self.toggles_state.select(None);
        } else {
            self.toggles_state
                .select(Some(index.min(self.toggles.len() - 1)));
        }
    }

    fn len_of(&self, pane: BrowserPane) -> usize {
        match pane {
            BrowserPane::Playlists => self.playlists.len(),
            BrowserPane::Tracks => self.tracks.len(),
            BrowserPane::Assigned => self.toggles.len(),
        }
    }

    fn state_of(&self, pane: BrowserPane) -> &ListState {
        match pane {
            BrowserPane::Playlists => &self.playlists_state,
            BrowserPane::Tracks => &self.tracks_state,
            BrowserPane::Assigned => &self.toggles_state,
        }
    }

    pub(crate) fn state_of_mut(&mut self, pane: BrowserPane) -> &mut ListState {
        match pane {
            BrowserPane::Playlists => &mut self.playlists_state,
            BrowserPane::Tracks => &mut self.tracks_state,
            BrowserPane::Assigned => &mut self.toggles_state,
        }
    }

    fn step_next(state: &mut ListState, len: usize) {
        if len == 0 {
            return;
        }
        let i = match state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        state.select(Some(i));
    }

    fn step_previous(state: &mut ListState, len: usize) {
        if len == 0 {
            return;
        }
        let i = match state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        state.select(Some(i));
    }
}
