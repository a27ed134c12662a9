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

//! # Playlister.
//!
//! Browse, edit and play playlists from the terminal, with every song edit
//! undoable until the playlist is closed.
//!
//! Threads:
//!
//! * **UI**: owns the [`App`] state, including the editing session of the
//!   open playlist, and redraws after each event.
//! * **Task worker**: owns the database connection. Requests arrive as
//!   [`AppTask`]s and results go back as [`AppEvent`]s.
//! * **Input and tick**: feed key presses and a redraw heartbeat into the
//!   event channel.
//!
//! The terminal is restored on the way out whether or not the run failed.

mod commander;
mod components;
mod events;
mod render;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    fs::OpenOptions,
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use playlister::{
    config::{self, AppConfig},
    db,
};

use crate::{
    commander::Commander,
    components::{CatalogView, EditorView, LibraryView},
    events::{AppEvent, process_events},
    tasks::AppTask,
    theme::Theme,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MainView {
    Library,
    Editor,
    Catalog,
}

/// A message for the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Status {
    Info(String),
    Error(String),
}

/// Application state.
pub(crate) struct App {
    pub config: AppConfig,

    pub theme: Theme,
    pub main_view: MainView,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: Sender<AppTask>,

    pub commander: Commander,

    pub library: LibraryView,
    pub editor: EditorView,
    pub catalog: CatalogView,

    pub status: Option<Status>,
    pub quit_after_save: bool,
}

impl App {
    /// Creates the initial state, no playlist open and the library shown.
    pub fn new(config: AppConfig, task_tx: Sender<AppTask>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        Self {
            config,
            theme: Theme::default(),
            main_view: MainView::Library,
            event_tx,
            event_rx,
            task_tx,
            commander: Commander::new(),
            library: LibraryView::new(),
            editor: EditorView::new(),
            catalog: CatalogView::new(),
            status: None,
            quit_after_save: false,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(Status::Info(message.into()));
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::warn!("{}", message);
        self.status = Some(Status::Error(message));
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }
}

/// Loads the configuration, starts logging and opens the database before
/// taking over the terminal.
fn main() -> Result<()> {
    let config = config::load_config();

    init_logging(&config)?;
    log::info!("Starting playlister {}", env!("CARGO_PKG_VERSION"));

    let conn = db::init_db(&config.database_file)
        .with_context(|| format!("Failed to open database {}", config.database_file))?;

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, task_tx);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, conn, task_rx);
    restore_terminal(&mut terminal);

    if let Err(e) = &res {
        log::error!("Application error: {:#}", e);
    }
    log::info!("Exiting");

    res.context("Application error occurred")
}

/// Initialises `env_logger` to append to the configured log file, the
/// terminal itself belongs to the UI.
///
/// The configured level is the default filter, `RUST_LOG` overrides it.
fn init_logging(config: &AppConfig) -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .with_context(|| format!("Failed to open log file {}", config.log_file))?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .target(env_logger::Target::Pipe(Box::new(log_file)))
    .init();

    Ok(())
}

/// Puts the terminal in raw mode on the alternate screen, painted in the
/// theme background.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();

    // Paint the whole window, not just the cells ratatui draws
    util::term::with_terminal_bg(&mut stdout, app.theme.background_colour, |out| {
        enable_raw_mode().context("Failed to enable raw mode")?;
        if let Err(e) = execute!(out, EnterAlternateScreen) {
            disable_raw_mode().ok();
            return Err(e).context("Failed to enter alternate screen");
        }

        let backend = CrosstermBackend::new(io::stdout());
        Terminal::new(backend).context("Failed to create terminal")
    })
}

/// Undoes [`setup_terminal`]. Failures are ignored, there is nothing left
/// to report them to.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg(terminal.backend_mut()).ok();
    terminal.show_cursor().ok();
}

/// Spawns the task worker (which takes `conn`), the input thread and the
/// tick thread, asks for the playlist listing, then runs [`process_events`]
/// until the user quits.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    conn: rusqlite::Connection,
    task_rx: Receiver<AppTask>,
) -> Result<()> {
    tasks::spawn_task_worker(conn, task_rx, app.event_tx.clone());

    // Key presses only, resize is picked up on the next draw
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event::Event::Key(key)) => {
                    if tx_keys.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    log::error!("Failed to read terminal event: {}", e);
                    break;
                }
            }
        }
    });

    // Redraw at least four times a second
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(Duration::from_millis(250));
        }
    });

    // Populate the library
    app.task_tx
        .send(AppTask::LoadPlaylists)
        .context("Task worker is not running")?;

    process_events(terminal, app)
}
