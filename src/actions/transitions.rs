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

//! Pane transitions over the assignment browser.
//!
//! Three transitions drive the UI: activating a playlist populates the
//! track pane, activating a track populates the toggle pane, and activating
//! a toggle mutates membership and rebuilds the toggle pane with the cursor
//! restored.
//!
//! Error policy: every automation failure is appended as one formatted line
//! to the log view and aborts the current population pass — entries already
//! appended stay, and the pane focus does not advance. Toggle mutations are
//! the one exception: their failure is logged but the rebuild still runs.

use std::rc::Rc;

use crate::App;
use crate::automation::{AutomationError, TrackHandle};
use crate::browser::{BrowserPane, PlaylistEntry, ToggleEntry, TrackEntry};

/// Appends a formatted failure line to the log pane. All recoverable
/// automation failures funnel through here.
fn report(app: &mut App, what: &str, err: &AutomationError) {
    tracing::warn!(error = %err, "{what} failed");
    app.log.push(format!("{what}: {err}"));
}

/// Activates whatever entry is selected in the active pane.
pub(crate) fn activate_selection(app: &mut App) {
    let Some(index) = app.browser.selected_index() else {
        return;
    };
    match app.browser.active_pane {
        BrowserPane::Playlists => activate_playlist(app, index),
        BrowserPane::Tracks => activate_track(app, index),
        BrowserPane::Assigned => toggle_assignment(app, index),
    }
}

/// Populates the playlist pane from the automation session.
///
/// A failure of the playlist enumeration itself propagates to the caller
/// (fatal at startup); a per-entry name fetch failure is logged and aborts
/// the pass.
pub(crate) fn populate_playlists(app: &mut App) -> Result<(), AutomationError> {
    let playlists = app.player.playlists()?;
    app.browser.clear_playlists();
    for playlist in playlists {
        let name = match playlist.name() {
            Ok(name) => name,
            Err(err) => {
                report(app, "fetch playlist name", &err);
                return Ok(());
            }
        };
        app.browser.push_playlist(PlaylistEntry { name, playlist });
    }
    Ok(())
}

/// Playlist activation: rebuilds the track pane from the playlist's current
/// enumeration and moves focus there.
pub(crate) fn activate_playlist(app: &mut App, index: usize) {
    let Some(entry) = app.browser.playlists.get(index) else {
        return;
    };
    let playlist = Rc::clone(&entry.playlist);

    app.browser.clear_tracks();
    let tracks = match playlist.tracks() {
        Ok(tracks) => tracks,
        Err(err) => {
            report(app, "fetch tracks", &err);
            return;
        }
    };
    for track in tracks {
        let name = match track.name() {
            Ok(name) => name,
            Err(err) => {
                report(app, "fetch track name", &err);
                return;
            }
        };
        app.browser.push_track(TrackEntry { name, track });
    }

    app.browser.active_pane = BrowserPane::Tracks;
}

/// Track activation: makes the track current, rebuilds the toggle pane and
/// moves focus there.
pub(crate) fn activate_track(app: &mut App, index: usize) {
    let Some(entry) = app.browser.tracks.get(index) else {
        return;
    };
    let track = Rc::clone(&entry.track);
    activate_track_handle(app, track);
}

/// Shared body of track activation, also re-run after a toggle mutation.
///
/// One toggle entry is built per library playlist. Membership is computed
/// by name equality against the track's assigned set: two identically named
/// playlists are indistinguishable here, reproduced as observed in the host
/// automation model.
pub(crate) fn activate_track_handle(app: &mut App, track: TrackHandle) {
    app.current_track = Some(Rc::clone(&track));

    let all_playlists = match app.player.playlists() {
        Ok(playlists) => playlists,
        Err(err) => {
            report(app, "fetch playlists", &err);
            return;
        }
    };

    app.browser.clear_toggles();

    let assigned = match track.assigned_playlists() {
        Ok(assigned) => assigned,
        Err(err) => {
            report(app, "fetch assigned playlists", &err);
            return;
        }
    };
    let mut assigned_names = Vec::with_capacity(assigned.len());
    for playlist in &assigned {
        match playlist.name() {
            Ok(name) => assigned_names.push(name),
            Err(err) => {
                report(app, "fetch assigned playlist name", &err);
                return;
            }
        }
    }

    for playlist in all_playlists {
        let name = match playlist.name() {
            Ok(name) => name,
            Err(err) => {
                report(app, "fetch playlist name", &err);
                return;
            }
        };
        let assigned = assigned_names.iter().any(|assigned| assigned == &name);
        app.browser.push_toggle(ToggleEntry {
            name,
            assigned,
            playlist,
            track: Rc::clone(&track),
        });
    }

    app.browser.active_pane = BrowserPane::Assigned;
}

/// Toggle activation: removes the track from the playlist when assigned,
/// adds it otherwise, then rebuilds the toggle pane for the same track and
/// restores the cursor. Mutation failures are logged but never abort the
/// rebuild.
pub(crate) fn toggle_assignment(app: &mut App, index: usize) {
    let Some(entry) = app.browser.toggles.get(index) else {
        return;
    };
    let track = Rc::clone(&entry.track);
    let playlist = Rc::clone(&entry.playlist);
    let assigned = entry.assigned;

    let result = if assigned {
        playlist.delete(track.as_ref())
    } else {
        playlist.add(track.as_ref())
    };
    if let Err(err) = result {
        report(app, if assigned { "remove track" } else { "add track" }, &err);
    }

    activate_track_handle(app, Rc::clone(&track));
    app.browser.select_toggle(index);
}
