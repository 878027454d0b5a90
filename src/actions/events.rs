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

//! Application event distribution and key routing.
//!
//! The terminal's input queue is the sole event source and the loop below
//! is the sole execution context: every automation call made from a handler
//! blocks the loop until it returns, and there are no background threads.
//!
//! Routing order for a key event:
//!
//! 1. A focused find input captures everything (typing is never interpreted
//!    as a command).
//! 2. The global play key fires — and is consumed — only when a current
//!    track exists; otherwise it falls through.
//! 3. Remaining keys map to navigation and activation of the active pane.

use std::io::Stdout;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App,
    actions::transitions,
    filter::FilterOutcome,
    render::draw,
};

/// Minimum "frame rate" for the UI when no input arrives.
const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// One-time pause after the first frame, before input is processed, to let
/// the terminal settle.
const STARTUP_SETTLE: Duration = Duration::from_millis(150);

#[derive(Debug, Eq, PartialEq)]
pub(crate) enum Flow {
    Continue,
    Exit,
}

/// Runs the main application loop, handling events and rendering the UI in
/// the terminal.
///
/// This function loops until a 'quit' key is received.
pub(crate) fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;
    thread::sleep(STARTUP_SETTLE);

    loop {
        terminal.draw(|f| draw(f, app))?;

        if event::poll(TICK_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if process_key_event(app, key) == Flow::Exit {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Maps keyboard input to pane navigation, activation and playback
/// commands.
pub(crate) fn process_key_event(app: &mut App, key: KeyEvent) -> Flow {
    let event = Event::Key(key);

    if app.filter.is_focused() {
        if let FilterOutcome::Find(query) = app.filter.handle_event(&event) {
            jump_to_match(app, &query);
        }
        return Flow::Continue;
    }

    // Consumed only when a current track exists.
    if key.code == KeyCode::F(5) {
        if let Some(track) = app.current_track.as_ref().map(Rc::clone) {
            if let Err(err) = track.play() {
                tracing::warn!(error = %err, "play failed");
                app.log.push(format!("play track: {err}"));
            }
            return Flow::Continue;
        }
    }

    process_global_key_event(app, key)
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Flow {
    match key.code {
        KeyCode::Char('q') => return Flow::Exit,

        KeyCode::Char('s') => {
            if let Err(err) = app.player.stop() {
                tracing::warn!(error = %err, "stop failed");
                app.log.push(format!("stop: {err}"));
            }
        }

        KeyCode::Char('j') | KeyCode::Down => app.browser.next(),
        KeyCode::Char('k') | KeyCode::Up => app.browser.previous(),

        KeyCode::Char('/') => app.filter.focus(app.browser.active_pane),

        KeyCode::Esc | KeyCode::Char('h') | KeyCode::Left => app.browser.leave_pane(),

        KeyCode::Enter => transitions::activate_selection(app),

        _ => {}
    }

    Flow::Continue
}

/// Moves the active pane's selection to the first entry whose name contains
/// the query, case-insensitively. No match leaves the selection alone.
fn jump_to_match(app: &mut App, query: &str) {
    let query = query.to_lowercase();
    let index = app
        .browser
        .active_names()
        .iter()
        .position(|name| name.to_lowercase().contains(&query));
    if let Some(index) = index {
        app.browser.select_in_active(index);
    }
}
