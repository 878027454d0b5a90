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

//! In-memory automation session for tests.
//!
//! Mirrors the semantics of the real backend: track numbers are 1-based
//! enumeration positions, while a stable catalog id underneath serves as
//! the song identity that membership scans and deletes match on, with the
//! silent no-op and the same-session handle checks intact. On top of that,
//! two test affordances: scripted failures keyed by operation, and a
//! recorded log of mutating and playback calls.

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::automation::{AutomationError, Player, Playlist, PlaylistHandle, Track, TrackHandle};

#[derive(Default)]
struct Library {
    /// Catalog of (track id, track name). Ids are unique per session.
    tracks: Vec<(i64, String)>,
    /// Stored playlists: name plus member track ids, in order.
    playlists: Vec<(String, Vec<i64>)>,
}

#[derive(Default)]
pub(crate) struct FakeSession {
    library: RefCell<Library>,
    calls: RefCell<Vec<String>>,
    failures: RefCell<HashSet<String>>,
}

impl FakeSession {
    pub(crate) fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub(crate) fn add_track(&self, id: i64, name: &str) {
        self.library.borrow_mut().tracks.push((id, name.to_string()));
    }

    pub(crate) fn add_playlist(&self, name: &str, members: &[i64]) {
        self.library
            .borrow_mut()
            .playlists
            .push((name.to_string(), members.to_vec()));
    }

    /// Scripts every future call of `operation` to fail. Keys follow the
    /// format used by the session's `check` calls, for example
    /// `"playlists"`, `"tracks:Rock"` or `"track-name:Song A"`.
    pub(crate) fn fail_on(&self, operation: &str) {
        self.failures.borrow_mut().insert(operation.to_string());
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub(crate) fn members_of(&self, playlist: &str) -> Vec<i64> {
        self.library
            .borrow()
            .playlists
            .iter()
            .find(|(name, _)| name == playlist)
            .map(|(_, members)| members.clone())
            .unwrap_or_default()
    }

    fn check(&self, operation: &str) -> Result<(), AutomationError> {
        if self.failures.borrow().contains(operation) {
            Err(AutomationError::new(format!("{operation} failed")))
        } else {
            Ok(())
        }
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn track_name(&self, id: i64) -> String {
        self.library
            .borrow()
            .tracks
            .iter()
            .find(|(n, _)| *n == id)
            .map(|(_, name)| name.clone())
            .unwrap_or_default()
    }
}

pub(crate) struct FakePlayer {
    session: Rc<FakeSession>,
}

impl FakePlayer {
    pub(crate) fn new(session: Rc<FakeSession>) -> Self {
        Self { session }
    }
}

impl Player for FakePlayer {
    fn playlists(&self) -> Result<Vec<PlaylistHandle>, AutomationError> {
        self.session.check("playlists")?;
        let names: Vec<String> = self
            .session
            .library
            .borrow()
            .playlists
            .iter()
            .map(|(name, _)| name.clone())
            .collect();
        Ok(names
            .into_iter()
            .enumerate()
            .map(|(i, name)| {
                Rc::new(FakePlaylist {
                    session: Rc::clone(&self.session),
                    kind: Kind::Stored(name),
                    index: (i + 1) as i64,
                }) as PlaylistHandle
            })
            .collect())
    }

    fn library(&self) -> Result<PlaylistHandle, AutomationError> {
        self.session.check("library")?;
        Ok(Rc::new(FakePlaylist {
            session: Rc::clone(&self.session),
            kind: Kind::Library,
            index: 0,
        }))
    }

    fn play(&self) -> Result<(), AutomationError> {
        self.session.check("play")?;
        self.session.record("play".to_string());
        Ok(())
    }

    fn stop(&self) -> Result<(), AutomationError> {
        self.session.check("stop")?;
        self.session.record("stop".to_string());
        Ok(())
    }
}

#[derive(Clone)]
enum Kind {
    Library,
    Stored(String),
}

pub(crate) struct FakePlaylist {
    session: Rc<FakeSession>,
    kind: Kind,
    index: i64,
}

impl FakePlaylist {
    fn display_name(&self) -> String {
        match &self.kind {
            Kind::Library => "Library".to_string(),
            Kind::Stored(name) => name.clone(),
        }
    }

    fn member_ids(&self) -> Vec<i64> {
        match &self.kind {
            Kind::Library => self
                .session
                .library
                .borrow()
                .tracks
                .iter()
                .map(|(id, _)| *id)
                .collect(),
            Kind::Stored(name) => self.session.members_of(name),
        }
    }
}

impl Playlist for FakePlaylist {
    fn id(&self) -> Result<i64, AutomationError> {
        Ok(self.index)
    }

    fn index(&self) -> Result<i64, AutomationError> {
        Ok(self.index)
    }

    fn name(&self) -> Result<String, AutomationError> {
        let name = self.display_name();
        self.session.check(&format!("name:{name}"))?;
        Ok(name)
    }

    fn tracks(&self) -> Result<Vec<TrackHandle>, AutomationError> {
        self.session.check(&format!("tracks:{}", self.display_name()))?;
        Ok(self
            .member_ids()
            .into_iter()
            .enumerate()
            .map(|(i, id)| {
                Rc::new(FakeTrack {
                    session: Rc::clone(&self.session),
                    id,
                    number: (i + 1) as i64,
                    source: self.kind.clone(),
                }) as TrackHandle
            })
            .collect())
    }

    fn add(&self, track: &dyn Track) -> Result<(), AutomationError> {
        let track = session_track(&self.session, track)?;
        let name = self.display_name();
        self.session.check(&format!("add:{name}"))?;
        self.session.record(format!("add:{name}:{}", track.id));
        match &self.kind {
            Kind::Library => Err(AutomationError::new(
                "cannot add a track to the library playlist",
            )),
            Kind::Stored(name) => {
                let mut library = self.session.library.borrow_mut();
                let playlist = library
                    .playlists
                    .iter_mut()
                    .find(|(n, _)| n == name)
                    .ok_or_else(|| AutomationError::new("playlist no longer exists"))?;
                playlist.1.push(track.id);
                Ok(())
            }
        }
    }

    fn delete(&self, track: &dyn Track) -> Result<(), AutomationError> {
        // The argument may come from another playlist's enumeration, so
        // the scan matches the catalog id, never the positional number.
        let track = session_track(&self.session, track)?;
        let name = self.display_name();
        self.session.check(&format!("delete:{name}"))?;
        self.session.record(format!("delete:{name}:{}", track.id));
        let id = track.id;
        for entry in self.tracks()? {
            let matches = entry
                .as_any()
                .downcast_ref::<FakeTrack>()
                .is_some_and(|entry| entry.id == id);
            if matches {
                entry.delete()?;
                break;
            }
        }
        Ok(())
    }
}

pub(crate) struct FakeTrack {
    session: Rc<FakeSession>,
    /// Stable catalog identity, unique across the session.
    id: i64,
    /// 1-based position within the enumeration this handle came from.
    number: i64,
    source: Kind,
}

impl Track for FakeTrack {
    fn track_number(&self) -> Result<i64, AutomationError> {
        Ok(self.number)
    }

    fn name(&self) -> Result<String, AutomationError> {
        let name = self.session.track_name(self.id);
        self.session.check(&format!("track-name:{name}"))?;
        Ok(name)
    }

    fn assigned_playlists(&self) -> Result<Vec<PlaylistHandle>, AutomationError> {
        self.session
            .check(&format!("assigned:{}", self.session.track_name(self.id)))?;
        let player = FakePlayer::new(Rc::clone(&self.session));
        let mut assigned = Vec::new();
        for playlist in player.playlists()? {
            let index = playlist.index()? as usize;
            let members = {
                let library = self.session.library.borrow();
                library
                    .playlists
                    .get(index - 1)
                    .map(|(_, members)| members.clone())
                    .unwrap_or_default()
            };
            if members.contains(&self.id) {
                assigned.push(playlist);
            }
        }
        Ok(assigned)
    }

    fn play(&self) -> Result<(), AutomationError> {
        self.session.check("track-play")?;
        self.session.record(format!("track-play:{}", self.id));
        Ok(())
    }

    fn stop(&self) -> Result<(), AutomationError> {
        self.session.check("track-stop")?;
        self.session.record(format!("track-stop:{}", self.id));
        Ok(())
    }

    fn delete(&self) -> Result<(), AutomationError> {
        match &self.source {
            Kind::Library => Err(AutomationError::new(
                "cannot delete a track from the library playlist",
            )),
            Kind::Stored(name) => {
                let mut library = self.session.library.borrow_mut();
                let playlist = library
                    .playlists
                    .iter_mut()
                    .find(|(n, _)| n == name)
                    .ok_or_else(|| AutomationError::new("playlist no longer exists"))?;
                if let Some(position) = playlist.1.iter().position(|n| *n == self.id) {
                    playlist.1.remove(position);
                }
                Ok(())
            }
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn session_track<'a>(
    session: &Rc<FakeSession>,
    track: &'a dyn Track,
) -> Result<&'a FakeTrack, AutomationError> {
    track
        .as_any()
        .downcast_ref::<FakeTrack>()
        .filter(|track| Rc::ptr_eq(session, &track.session))
        .ok_or_else(|| {
            AutomationError::new("track handle does not belong to this automation session")
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with_rock_and_jazz() -> Rc<FakeSession> {
        let session = FakeSession::new();
        session.add_track(1, "Song A");
        session.add_track(2, "Song B");
        session.add_playlist("Rock", &[2]);
        session.add_playlist("Jazz", &[1, 2]);
        session
    }

    #[test]
    fn delete_removes_the_entry_for_the_same_song() {
        let session = session_with_rock_and_jazz();
        let player = FakePlayer::new(Rc::clone(&session));
        let jazz = player.playlists().unwrap().remove(1);
        let song_a = jazz.tracks().unwrap().remove(0);

        jazz.delete(song_a.as_ref()).unwrap();

        assert_eq!(session.members_of("Jazz"), vec![2]);
    }

    #[test]
    fn delete_with_a_handle_from_another_playlist_matches_the_song_not_its_position() {
        let session = session_with_rock_and_jazz();
        let player = FakePlayer::new(Rc::clone(&session));
        let rock = player.playlists().unwrap().remove(0);
        let jazz = player.playlists().unwrap().remove(1);
        // "Song B" sits at position 1 in Rock but position 2 in Jazz.
        let song_b = rock.tracks().unwrap().remove(0);

        jazz.delete(song_b.as_ref()).unwrap();

        assert_eq!(session.members_of("Jazz"), vec![1]);
    }

    #[test]
    fn delete_without_matching_entry_is_a_silent_no_op() {
        let session = session_with_rock_and_jazz();
        let player = FakePlayer::new(Rc::clone(&session));
        let rock = player.playlists().unwrap().remove(0);
        let jazz = player.playlists().unwrap().remove(1);
        // "Song A" is in Jazz but not in Rock.
        let song_a = jazz.tracks().unwrap().remove(0);

        rock.delete(song_a.as_ref()).unwrap();

        assert_eq!(session.members_of("Rock"), vec![2]);
    }

    #[test]
    fn add_rejects_a_track_from_another_session() {
        let session = session_with_rock_and_jazz();
        let other = session_with_rock_and_jazz();
        let player = FakePlayer::new(Rc::clone(&session));
        let other_player = FakePlayer::new(Rc::clone(&other));

        let rock = player.playlists().unwrap().remove(0);
        let foreign = other_player.library().unwrap().tracks().unwrap().remove(0);

        assert!(rock.add(foreign.as_ref()).is_err());
        assert_eq!(session.members_of("Rock"), vec![2]);
    }

    #[test]
    fn add_appends_to_membership() {
        let session = session_with_rock_and_jazz();
        let player = FakePlayer::new(Rc::clone(&session));
        let rock = player.playlists().unwrap().remove(0);
        let song_a = player.library().unwrap().tracks().unwrap().remove(0);

        rock.add(song_a.as_ref()).unwrap();

        assert_eq!(session.members_of("Rock"), vec![2, 1]);
        assert!(session.calls().contains(&"add:Rock:1".to_string()));
    }

    #[test]
    fn assigned_playlists_reports_containing_playlists_in_library_order() {
        let session = session_with_rock_and_jazz();
        let player = FakePlayer::new(Rc::clone(&session));
        let song_b = player.library().unwrap().tracks().unwrap().remove(1);

        let assigned = song_b.assigned_playlists().unwrap();
        let names: Vec<String> = assigned.iter().map(|p| p.name().unwrap()).collect();

        assert_eq!(names, vec!["Rock".to_string(), "Jazz".to_string()]);
    }
}
