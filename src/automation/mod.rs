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

//! Automation boundary for the host media player.
//!
//! This module defines the three capability surfaces the rest of the
//! application programs against — [`Player`], [`Playlist`] and [`Track`] —
//! together with the single [`AutomationError`] kind that covers every
//! failure at this boundary.
//!
//! Entities are thin, read-through views over live player objects: there is
//! no local cache, and every property access is an independent fetch that
//! may fail. Mutation (`add`, `delete`, `play`, `stop`) is assumed to take
//! effect synchronously and be visible on the next read.
//!
//! The process is single-threaded (all calls happen from within the UI run
//! loop), so handles are shared with [`Rc`] rather than `Arc`.

#[cfg(test)]
pub(crate) mod fake;
pub(crate) mod mpd;

use std::any::Any;
use std::rc::Rc;

use thiserror::Error;

/// A failure reported by the automation boundary.
///
/// One kind covers everything: property fetch failures, method call
/// failures, and enumeration failures. No finer classification is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("automation error: {0}")]
pub(crate) struct AutomationError(pub(crate) String);

impl AutomationError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

pub(crate) type PlaylistHandle = Rc<dyn Playlist>;
pub(crate) type TrackHandle = Rc<dyn Track>;

/// The automation root: the single connection to the host player.
///
/// Constructed once at startup and held for the process lifetime; there is
/// no explicit teardown.
pub(crate) trait Player {
    /// Every playlist in the library source, in host order.
    fn playlists(&self) -> Result<Vec<PlaylistHandle>, AutomationError>;

    /// The designated master playlist containing every track in the library.
    fn library(&self) -> Result<PlaylistHandle, AutomationError>;

    fn play(&self) -> Result<(), AutomationError>;

    fn stop(&self) -> Result<(), AutomationError>;
}

/// A live view over one of the host player's playlists.
pub(crate) trait Playlist {
    fn id(&self) -> Result<i64, AutomationError>;

    /// 1-based position of this playlist in the library source.
    fn index(&self) -> Result<i64, AutomationError>;

    fn name(&self) -> Result<String, AutomationError>;

    /// The playlist's tracks, in host-defined order.
    fn tracks(&self) -> Result<Vec<TrackHandle>, AutomationError>;

    /// Adds a track to this playlist's membership.
    ///
    /// The track handle must originate from the same automation session as
    /// this playlist; a foreign handle is rejected with an error.
    fn add(&self, track: &dyn Track) -> Result<(), AutomationError>;

    /// Removes a track from this playlist's membership.
    ///
    /// The argument is a possibly-stale handle, and may have been
    /// enumerated from a different playlist: the entry actually deleted is
    /// the one in this playlist's *current* enumeration that identifies
    /// the same song. When no entry matches, this succeeds as a no-op
    /// (tolerating "already removed"). A handle from another automation
    /// session is rejected with an error.
    fn delete(&self, track: &dyn Track) -> Result<(), AutomationError>;
}

/// A live view over a single track.
pub(crate) trait Track {
    /// The track's number within its owning enumeration. Unique within that
    /// enumeration, not globally.
    fn track_number(&self) -> Result<i64, AutomationError>;

    fn name(&self) -> Result<String, AutomationError>;

    /// Every playlist in the library whose membership currently includes
    /// this track, in library order.
    fn assigned_playlists(&self) -> Result<Vec<PlaylistHandle>, AutomationError>;

    fn play(&self) -> Result<(), AutomationError>;

    fn stop(&self) -> Result<(), AutomationError>;

    /// Deletes this enumeration entry from its owning playlist.
    fn delete(&self) -> Result<(), AutomationError>;

    /// Concrete-type access, used by `Playlist::add` implementations to
    /// verify that a track handle belongs to their session.
    fn as_any(&self) -> &dyn Any;
}
