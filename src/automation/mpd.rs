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

//! MPD-backed implementation of the automation boundary.
//!
//! One [`MpdSession`] wraps one client connection to the daemon; every
//! playlist and track handle minted by the session keeps a shared reference
//! to it, so all calls go over the same connection.
//!
//! Mapping notes:
//!
//! * The library source's playlists are MPD's stored playlists. Stored
//!   playlists have no server-side numeric ID, so a stable ID is derived by
//!   hashing the playlist name.
//! * The master "Library" playlist is the full database (`listall`).
//! * A track's number is its 1-based position within the enumeration it was
//!   fetched from; positions are not portable across playlists.
//! * File path is a track's identity: membership scans and the entry
//!   targeted by a delete both match on it.

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use mpd::{Client, Song};
use xxhash_rust::xxh3::xxh3_64;

use crate::automation::{AutomationError, Player, Playlist, PlaylistHandle, Track, TrackHandle};

/// A single connection to the MPD daemon, shared by every handle it mints.
pub(crate) struct MpdSession {
    client: RefCell<Client>,
}

impl MpdSession {
    /// Opens a connection to the daemon at `address` (for example
    /// `"localhost:6600"`).
    pub(crate) fn connect(address: &str) -> Result<Rc<Self>, AutomationError> {
        let client = Client::connect(address).map_err(to_automation)?;
        Ok(Rc::new(Self {
            client: RefCell::new(client),
        }))
    }

    fn stored_playlists(session: &Rc<Self>) -> Result<Vec<PlaylistHandle>, AutomationError> {
        let playlists = session
            .client
            .borrow_mut()
            .playlists()
            .map_err(to_automation)?;
        Ok(playlists
            .into_iter()
            .enumerate()
            .map(|(i, playlist)| {
                Rc::new(MpdPlaylist {
                    session: Rc::clone(session),
                    kind: PlaylistKind::Stored(playlist.name),
                    index: (i + 1) as i64,
                }) as PlaylistHandle
            })
            .collect())
    }
}

fn to_automation(err: mpd::error::Error) -> AutomationError {
    AutomationError::new(err.to_string())
}

fn song_title(song: &Song) -> String {
    song.title.clone().unwrap_or_else(|| song.file.clone())
}

pub(crate) struct MpdPlayer {
    session: Rc<MpdSession>,
}

impl MpdPlayer {
    pub(crate) fn new(session: Rc<MpdSession>) -> Self {
        Self { session }
    }
}

impl Player for MpdPlayer {
    fn playlists(&self) -> Result<Vec<PlaylistHandle>, AutomationError> {
        MpdSession::stored_playlists(&self.session)
    }

    fn library(&self) -> Result<PlaylistHandle, AutomationError> {
        Ok(Rc::new(MpdPlaylist {
            session: Rc::clone(&self.session),
            kind: PlaylistKind::Library,
            index: 0,
        }))
    }

    fn play(&self) -> Result<(), AutomationError> {
        self.session.client.borrow_mut().play().map_err(to_automation)
    }

    fn stop(&self) -> Result<(), AutomationError> {
        self.session.client.borrow_mut().stop().map_err(to_automation)
    }
}

#[derive(Clone)]
enum PlaylistKind {
    /// The whole database, presented as the designated master playlist.
    Library,
    Stored(String),
}

pub(crate) struct MpdPlaylist {
    session: Rc<MpdSession>,
    kind: PlaylistKind,
    index: i64,
}

impl Playlist for MpdPlaylist {
    fn id(&self) -> Result<i64, AutomationError> {
        match &self.kind {
            PlaylistKind::Library => Ok(0),
            PlaylistKind::Stored(name) => Ok(xxh3_64(name.as_bytes()) as i64),
        }
    }

    fn index(&self) -> Result<i64, AutomationError> {
        Ok(self.index)
    }

    fn name(&self) -> Result<String, AutomationError> {
        match &self.kind {
            PlaylistKind::Library => Ok("Library".to_string()),
            PlaylistKind::Stored(name) => Ok(name.clone()),
        }
    }

    fn tracks(&self) -> Result<Vec<TrackHandle>, AutomationError> {
        let songs = match &self.kind {
            PlaylistKind::Library => self.session.client.borrow_mut().listall(),
            PlaylistKind::Stored(name) => self.session.client.borrow_mut().playlist(name.as_str()),
        }
        .map_err(to_automation)?;

        Ok(songs
            .into_iter()
            .enumerate()
            .map(|(i, song)| {
                Rc::new(MpdTrack {
                    session: Rc::clone(&self.session),
                    title: song_title(&song),
                    file: song.file,
                    number: (i + 1) as i64,
                    source: self.kind.clone(),
                }) as TrackHandle
            })
            .collect())
    }

    fn add(&self, track: &dyn Track) -> Result<(), AutomationError> {
        let track = session_track(&self.session, track)?;
        match &self.kind {
            PlaylistKind::Library => Err(AutomationError::new(
                "cannot add a track to the library playlist",
            )),
            PlaylistKind::Stored(name) => {
                let song = Song {
                    file: track.file.clone(),
                    ..Default::default()
                };
                self.session
                    .client
                    .borrow_mut()
                    .pl_push(name.as_str(), &song)
                    .map_err(to_automation)
            }
        }
    }

    fn delete(&self, track: &dyn Track) -> Result<(), AutomationError> {
        // Match on file path, not track number: the argument may have been
        // enumerated from a different playlist, where its number means a
        // different position.
        let track = session_track(&self.session, track)?;
        for entry in self.tracks()? {
            let matches = entry
                .as_any()
                .downcast_ref::<MpdTrack>()
                .is_some_and(|entry| entry.file == track.file);
            if matches {
                entry.delete()?;
                break;
            }
        }
        // No matching entry: treated as already removed.
        Ok(())
    }
}

pub(crate) struct MpdTrack {
    session: Rc<MpdSession>,
    file: String,
    title: String,
    number: i64,
    source: PlaylistKind,
}

impl Track for MpdTrack {
    fn track_number(&self) -> Result<i64, AutomationError> {
        Ok(self.number)
    }

    fn name(&self) -> Result<String, AutomationError> {
        Ok(self.title.clone())
    }

    fn assigned_playlists(&self) -> Result<Vec<PlaylistHandle>, AutomationError> {
        let mut assigned = Vec::new();
        for playlist in MpdSession::stored_playlists(&self.session)? {
            for entry in playlist.tracks()? {
                let entry = entry
                    .as_any()
                    .downcast_ref::<MpdTrack>()
                    .expect("session mints only its own track handles");
                if entry.file == self.file {
                    assigned.push(playlist);
                    break;
                }
            }
        }
        Ok(assigned)
    }

    fn play(&self) -> Result<(), AutomationError> {
        let song = Song {
            file: self.file.clone(),
            ..Default::default()
        };
        let mut client = self.session.client.borrow_mut();
        let id = client.push(&song).map_err(to_automation)?;
        client.switch(id).map_err(to_automation)
    }

    fn stop(&self) -> Result<(), AutomationError> {
        self.session.client.borrow_mut().stop().map_err(to_automation)
    }

    fn delete(&self) -> Result<(), AutomationError> {
        match &self.source {
            PlaylistKind::Library => Err(AutomationError::new(
                "cannot delete a track from the library playlist",
            )),
            PlaylistKind::Stored(name) => self
                .session
                .client
                .borrow_mut()
                .pl_delete(name.as_str(), (self.number - 1) as u32)
                .map_err(to_automation),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Verifies that a track handle was minted by `session` before a mutation
/// uses its file path. Handles from another session, or another backend,
/// are not portable.
fn session_track<'a>(
    session: &Rc<MpdSession>,
    track: &'a dyn Track,
) -> Result<&'a MpdTrack, AutomationError> {
    track
        .as_any()
        .downcast_ref::<MpdTrack>()
        .filter(|track| Rc::ptr_eq(session, &track.session))
        .ok_or_else(|| {
            AutomationError::new("track handle does not belong to this automation session")
        })
}
