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

//! # Playlist Assignment TUI.
//!
//! A terminal front-end for browsing a music player's library and toggling
//! track-to-playlist membership.
//!
//! The application wraps the player's automation interface behind a small
//! `{Player, Playlist, Track}` surface and drives three interactive list
//! panes — playlists, tracks, assigned-playlist toggles — plus a scrolling
//! activity log.
//!
//! ## Architecture
//!
//! Single-threaded and synchronous by design: the terminal input queue is
//! the only event source, and every automation call blocks the run loop
//! until the player answers. The application follows a strict
//! setup-run-teardown pattern so the terminal state is restored even when
//! the run loop fails.
//!
//! Failures at the automation boundary are recoverable and land in the
//! in-UI log pane; only a failed session open or a failed initial playlist
//! fetch terminates the process.

mod actions;
mod automation;
mod browser;
mod config;
mod filter;
mod logview;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::{
    automation::{Player, TrackHandle, mpd::{MpdPlayer, MpdSession}},
    browser::AssignmentBrowser,
    config::AppConfig,
    filter::FilterBar,
    logview::LogView,
    theme::Theme,
};

/// Application state.
pub(crate) struct App {
    pub config: AppConfig,
    pub theme: Theme,

    pub player: Box<dyn Player>,

    pub browser: AssignmentBrowser,
    pub filter: FilterBar,
    pub log: LogView,

    /// Set whenever a track is activated; read by the global play key.
    /// Cleared only by reassignment.
    pub current_track: Option<TrackHandle>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, player: Box<dyn Player>) -> Self {
        Self {
            config,
            theme: Theme::default(),
            player,
            browser: AssignmentBrowser::new(),
            filter: FilterBar::new(),
            log: LogView::new(),
            current_track: None,
        }
    }
}

/// The entry point of the application.
///
/// Loads configuration, opens the automation session, fetches the initial
/// playlist list, then manages the terminal lifecycle around the run loop.
/// Session and initial-fetch failures are fatal; everything after that is
/// reported through the in-UI log.
fn main() -> Result<()> {
    let config = config::load_config();

    let _log_guard = init_logging()?;

    let address = config.mpd_address();
    let session = MpdSession::connect(&address)
        .with_context(|| format!("Failed to connect to MPD at {address}"))?;
    let player = MpdPlayer::new(session);

    let mut app = App::new(config, Box::new(player));

    actions::transitions::populate_playlists(&mut app)
        .context("Failed to fetch the initial playlist list")?;
    tracing::info!(playlists = app.browser.playlists.len(), %address, "connected");

    let mut terminal = setup_terminal(&app)?;
    let res = actions::events::run_event_loop(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Initialises env-filtered logging to a daily file under the local data
/// directory. A TUI owns stdout, so nothing is ever logged there.
///
/// The returned guard must be held for the process lifetime to keep the
/// background writer flushing.
fn init_logging() -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tunetag/logs");
    std::fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "tunetag.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tunetag=debug"));

    let subscriber = tracing_subscriber::fmt()
        .with_writer(file_writer)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_env_filter(filter)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate
/// screen cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd
    // get a thin black outline
    util::term::set_terminal_bg(&Theme::to_hex(app.theme.background_colour));

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including
/// disabling raw mode, leaving the alternate screen, and resetting the
/// background color. It is "best-effort" and does not return a result, as
/// it runs during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg();
    terminal.show_cursor().ok();
}
