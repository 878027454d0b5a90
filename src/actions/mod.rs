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

//! Application logic, event handling, and state transitions.
//!
//! This module acts as the central hub for the "Controller" logic of the
//! application.
//!
//! # Organization
//!
//! * [`events`]: the run loop and the mapping from raw key events to
//!   commands.
//! * [`transitions`]: the pane transitions — playlist activation, track
//!   activation, assignment toggling — and their shared error policy.

pub(crate) mod events;
pub(crate) mod transitions;
