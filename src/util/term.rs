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

//! Terminal emulator background control via OSC escape sequences.
//!
//! Without these the emulator keeps its own background behind the drawn
//! area, leaving a thin unstyled outline around the UI. Requires a
//! terminal that understands OSC 11/111, which most modern emulators
//! (XTerm, iTerm2, Alacritty, Kitty) do.

use std::io::{self, Write};

/// Writes a raw escape sequence and flushes immediately so the change is
/// applied without delay.
fn emit(sequence: &str) {
    print!("{sequence}");
    let _ = io::stdout().flush();
}

/// Sets the terminal background to the given color (e.g. `"#1e1e1e"`)
/// using OSC 11.
pub(crate) fn set_terminal_bg(hex_color: &str) {
    emit(&format!("\x1b]11;{hex_color}\x07"));
}

/// Reverts the terminal background to the user's configured default using
/// OSC 111. Called during application cleanup.
pub(crate) fn reset_terminal_bg() {
    emit("\x1b]111\x07");
}
