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

//! Carries out commands entered on the command line.
//!
//! Playlist commands (`rename`, `copy`, `delete`, `publish`) act on the open
//! playlist while the editor is shown, and on the selected library row
//! otherwise.

use anyhow::Result;

use playlister::{
    config,
    model::{PlaylistId, SongQuery},
};

use crate::{
    App, MainView,
    commander::UserCommand,
    components::EditorAction,
    events::{
        AppEvent,
        handlers::{UNSAVED_CHANGES, add_song, handle_editor_action, save},
    },
    tasks::AppTask,
};

pub(super) fn handle_command(app: &mut App, command: UserCommand) -> Result<()> {
    log::debug!("Command {:?}", command);

    match command {
        UserCommand::Quit { force } => quit(app, force)?,
        UserCommand::Save => save(app)?,
        UserCommand::SaveAndQuit => {
            if app.editor.is_modified() {
                app.quit_after_save = true;
                save(app)?;
            } else {
                app.event_tx.send(AppEvent::ExitApplication)?;
            }
        }

        UserCommand::New(name) => {
            if app.editor.is_modified() {
                app.set_error(UNSAVED_CHANGES);
            } else {
                let owner = app.config.owner.clone();
                app.task_tx.send(AppTask::CreatePlaylist { name, owner })?;
            }
        }
        UserCommand::Rename(name) => rename(app, &name)?,
        UserCommand::Copy => {
            if let Some(playlist_id) = target_playlist(app) {
                let owner = app.config.owner.clone();
                app.task_tx.send(AppTask::CopyPlaylist { playlist_id, owner })?;
            }
        }
        UserCommand::Delete => {
            if let Some(playlist_id) = target_playlist(app) {
                app.task_tx.send(AppTask::DeletePlaylist(playlist_id))?;
            }
        }
        UserCommand::Publish(published) => {
            if let Some(playlist_id) = target_playlist(app) {
                app.task_tx
                    .send(AppTask::SetPublished(playlist_id, published))?;
            }
        }
        UserCommand::Close { force } => close(app, force),

        UserCommand::Undo => handle_editor_action(app, EditorAction::Undo)?,
        UserCommand::Redo => handle_editor_action(app, EditorAction::Redo)?,

        UserCommand::Sort(sort) => {
            app.library.set_sort(sort);
            app.main_view = MainView::Library;
        }
        UserCommand::Find(text) => {
            app.library.set_filter(&text);
            app.main_view = MainView::Library;
        }
        UserCommand::Search(text) => {
            app.task_tx
                .send(AppTask::SearchSongs(SongQuery::for_text(text)))?;
        }
        UserCommand::AddSong(song_id) => add_song(app, song_id)?,
        UserCommand::CreateSong(song) => app.task_tx.send(AppTask::CreateSong(song))?,

        UserCommand::Owner(owner) => {
            app.config.owner = owner;
            match config::save_config(&app.config) {
                Ok(()) => app.set_status(format!("Owner set to '{}'", app.config.owner)),
                Err(e) => {
                    log::error!("Failed to save configuration: {}", e);
                    app.set_error(format!("Failed to save configuration: {}", e));
                }
            }
        }

        UserCommand::View(view) => app.main_view = view,
    }

    Ok(())
}

fn quit(app: &mut App, force: bool) -> Result<()> {
    if app.editor.is_modified() && !force {
        app.set_error(UNSAVED_CHANGES);
        return Ok(());
    }

    app.event_tx.send(AppEvent::ExitApplication)?;
    Ok(())
}

fn close(app: &mut App, force: bool) {
    if app.editor.is_modified() && !force {
        app.set_error(UNSAVED_CHANGES);
        return;
    }

    if let Some(session) = app.editor.close() {
        log::info!("Closed playlist {}", session.playlist_id());
        app.set_status(format!("Closed '{}'", session.name()));
    }
    app.main_view = MainView::Library;
}

/// Renaming the open playlist, from either view, is an unsaved edit like any
/// other. Any other playlist is renamed in place.
fn rename(app: &mut App, name: &str) -> Result<()> {
    let Some(playlist_id) = target_playlist(app) else {
        return Ok(());
    };

    if let Some(session) = app
        .editor
        .session
        .as_mut()
        .filter(|s| s.playlist_id() == playlist_id)
    {
        match session.rename(name) {
            Ok(()) => app.set_status("Renamed, :w to save"),
            Err(e) => app.set_error(e.to_string()),
        }
        return Ok(());
    }

    app.task_tx
        .send(AppTask::RenamePlaylist(playlist_id, name.to_string()))?;

    Ok(())
}

/// The playlist a playlist command applies to, reporting an error if there
/// is none.
fn target_playlist(app: &mut App) -> Option<PlaylistId> {
    let target = match (app.main_view, app.editor.session.as_ref()) {
        (MainView::Editor, Some(session)) => Some(session.playlist_id()),
        _ => app.library.selected_id(),
    };

    if target.is_none() {
        app.set_error("No playlist selected");
    }

    target
}
