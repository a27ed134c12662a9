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

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    App, MainView,
    commander::UserCommand,
    events::{
        commands::handle_command,
        handlers::{handle_catalog_action, handle_editor_action, handle_library_action},
    },
};

/// Maps keyboard input to application actions.
///
/// This function acts as the primary input router for the TUI. Keys go to
/// the command line first while it is open, then to the application-wide
/// bindings, and finally to the active view:
///
/// * **Application Control**: `q` to quit, `1`..`3` or `Tab` to switch views.
/// * **Library**: open and play playlists.
/// * **Editor**: duplicate, remove, move, undo and redo songs, then save.
/// * **Catalog**: add search results to the open playlist.
///
/// # Errors
///
/// Returns an error if a request fails to send to the background worker.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if app.commander.handle_event(Event::Key(key), &app.event_tx) {
        return Ok(());
    }

    app.clear_status();

    if process_global_key_event(app, key)? {
        return Ok(());
    }

    match app.main_view {
        MainView::Library => {
            if let Some(action) = app.library.process_key(key) {
                handle_library_action(app, action)?;
            }
        }
        MainView::Editor => {
            if let Some(action) = app.editor.process_key(key) {
                handle_editor_action(app, action)?;
            }
        }
        MainView::Catalog => {
            if let Some(action) = app.catalog.process_key(key) {
                handle_catalog_action(app, action)?;
            }
        }
    }

    Ok(())
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<bool> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => {
            handle_command(app, UserCommand::Quit { force: false })?;
        }
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            handle_command(app, UserCommand::Quit { force: false })?;
        }

        (KeyCode::Char('1'), _) => app.main_view = MainView::Library,
        (KeyCode::Char('2'), _) => app.main_view = MainView::Editor,
        (KeyCode::Char('3'), _) => app.main_view = MainView::Catalog,

        (KeyCode::Tab, _) => {
            app.main_view = match app.main_view {
                MainView::Library => MainView::Editor,
                MainView::Editor => MainView::Catalog,
                MainView::Catalog => MainView::Library,
            }
        }

        _ => return Ok(false),
    }

    Ok(true)
}
