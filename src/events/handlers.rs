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

use playlister::{
    db::SavedPlaylist,
    model::{Playlist, PlaylistId, PlaylistSummary, Song, SongId},
    session::SessionError,
};

use crate::{
    App, MainView,
    components::{CatalogAction, EditorAction, LibraryAction},
    events::AppEvent,
    tasks::AppTask,
    util::format::format_count,
};

pub(super) const UNSAVED_CHANGES: &str = "Unsaved changes, :w to save or add ! to discard them";

pub(super) fn handle_set_main_view(app: &mut App, main_view: MainView) {
    app.main_view = main_view;
}

pub(super) fn handle_playlists_ready(app: &mut App, playlists: Vec<PlaylistSummary>) {
    app.library.set_playlists(playlists);
}

pub(super) fn handle_playlist_opened(app: &mut App, playlist: Playlist) {
    if app.editor.is_modified() {
        app.set_error(UNSAVED_CHANGES);
        return;
    }

    app.set_status(format!(
        "Opened '{}' ({})",
        playlist.name,
        format_count(playlist.songs.len() as i64, "song", "songs")
    ));
    app.library.select(playlist.id);
    app.editor.open(playlist);
    app.main_view = MainView::Editor;
}

pub(super) fn handle_playlist_saved(app: &mut App, saved: SavedPlaylist) -> Result<()> {
    let Some(session) = app.editor.session.as_mut() else {
        return Ok(());
    };
    if session.playlist_id() != saved.playlist.id {
        return Ok(());
    }

    session.mark_saved(&saved.playlist, &saved.ids);
    app.set_status(format!("Saved '{}'", saved.playlist.name));

    if app.quit_after_save {
        app.quit_after_save = false;
        if app.editor.is_modified() {
            app.set_error(UNSAVED_CHANGES);
        } else {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }
    }

    Ok(())
}

/// A failed save cancels a pending `:wq`, the session stays modified.
pub(super) fn handle_save_failed(app: &mut App, playlist_id: PlaylistId, message: &str) {
    app.quit_after_save = false;
    app.set_error(format!("Failed to save playlist {}: {}", playlist_id, message));
}

pub(super) fn handle_playlist_copied(app: &mut App, playlist_id: PlaylistId) {
    app.library.select(playlist_id);
    let name = app.library.selected().map(|p| p.name.clone()).unwrap_or_default();
    app.set_status(format!("Created '{}'", name));
}

pub(super) fn handle_playlist_deleted(app: &mut App, playlist_id: PlaylistId) {
    let is_open = app
        .editor
        .session
        .as_ref()
        .is_some_and(|s| s.playlist_id() == playlist_id);

    if is_open {
        app.editor.close();
        app.main_view = MainView::Library;
    }

    app.set_status("Deleted playlist");
}

pub(super) fn handle_published_changed(app: &mut App, playlist_id: PlaylistId, published: bool) {
    if let Some(session) = app.editor.session.as_mut() {
        if session.playlist_id() == playlist_id {
            session.set_published(published);
        }
    }

    app.set_status(if published { "Published" } else { "Unpublished" });
}

pub(super) fn handle_listens_changed(app: &mut App, playlist_id: PlaylistId, listens: i64) {
    if let Some(session) = app.editor.session.as_mut() {
        if session.playlist_id() == playlist_id {
            session.set_listens(listens);
        }
    }

    app.set_status(format!(
        "Playing playlist ({})",
        format_count(listens, "listen", "listens")
    ));
}

pub(super) fn handle_search_results_ready(app: &mut App, query: &str, songs: Vec<Song>) {
    app.set_status(format!("Found {}", format_count(songs.len() as i64, "song", "songs")));
    app.catalog.set_results(query, songs);
    app.main_view = MainView::Catalog;
}

pub(super) fn handle_song_fetched(app: &mut App, song: Song) {
    if app.editor.session.is_none() {
        app.set_error("No playlist open");
        return;
    }

    let title = song.title.clone();
    match app.editor.add_song(song) {
        Ok(()) => app.set_status(format!("Added '{}'", title)),
        Err(e) => app.set_error(e.to_string()),
    }
}

/// A song created from the command line is added to the open playlist, if
/// there is one.
pub(super) fn handle_song_created(app: &mut App, song: Song) {
    if app.editor.session.is_some() {
        handle_song_fetched(app, song);
    } else {
        app.set_status(format!("Created song {} '{}'", song.id, song.title));
    }
}

pub(super) fn handle_song_played(app: &mut App, song: &Song, play_count: i64) {
    app.set_status(format!(
        "Playing '{}' by {} ({})",
        song.title,
        song.artist,
        format_count(play_count, "play", "plays")
    ));
}

pub(super) fn handle_library_action(app: &mut App, action: LibraryAction) -> Result<()> {
    match action {
        LibraryAction::Open(playlist_id) => open_playlist(app, playlist_id)?,
        LibraryAction::Play(playlist_id) => app.task_tx.send(AppTask::PlayPlaylist(playlist_id))?,
        LibraryAction::Reload => app.task_tx.send(AppTask::LoadPlaylists)?,
    }

    Ok(())
}

pub(super) fn handle_editor_action(app: &mut App, action: EditorAction) -> Result<()> {
    let outcome = match action {
        EditorAction::Duplicate => app.editor.duplicate_selected(),
        EditorAction::Remove => app.editor.remove_selected(),
        EditorAction::MoveDown => app.editor.move_selected(1).map(|_| None),
        EditorAction::MoveUp => app.editor.move_selected(-1).map(|_| None),
        EditorAction::Undo => app.editor.undo().map(|d| Some(format!("Undid {}", d))),
        EditorAction::Redo => app.editor.redo().map(|d| Some(format!("Redid {}", d))),

        EditorAction::PlaySong => {
            if let Some(song) = app.editor.selected_song().cloned() {
                app.task_tx.send(AppTask::PlaySong(song))?;
            }
            Ok(None)
        }
        EditorAction::PlayPlaylist => {
            if let Some(session) = app.editor.session.as_ref() {
                app.task_tx.send(AppTask::PlayPlaylist(session.playlist_id()))?;
            }
            Ok(None)
        }
        EditorAction::Save => {
            save(app)?;
            Ok(None)
        }
    };

    match outcome {
        Ok(Some(message)) => app.set_status(message),
        Ok(None) => {}
        // An empty history is routine, report it quietly.
        Err(SessionError::Transaction(e)) => app.set_status(e.to_string()),
        Err(e) => app.set_error(e.to_string()),
    }

    Ok(())
}

pub(super) fn handle_catalog_action(app: &mut App, action: CatalogAction) -> Result<()> {
    match action {
        CatalogAction::Add(song_id) => add_song(app, song_id),
    }
}

/// Requests a catalog song so it can be added to the open playlist once
/// fetched.
pub(super) fn add_song(app: &mut App, song_id: SongId) -> Result<()> {
    if app.editor.session.is_none() {
        app.set_error("No playlist open");
        return Ok(());
    }

    app.task_tx.send(AppTask::FetchSong(song_id))?;

    Ok(())
}

pub(super) fn open_playlist(app: &mut App, playlist_id: PlaylistId) -> Result<()> {
    let already_open = app
        .editor
        .session
        .as_ref()
        .is_some_and(|s| s.playlist_id() == playlist_id);

    if already_open {
        app.main_view = MainView::Editor;
    } else if app.editor.is_modified() {
        app.set_error(UNSAVED_CHANGES);
    } else {
        app.task_tx.send(AppTask::OpenPlaylist(playlist_id))?;
    }

    Ok(())
}

/// Sends a snapshot of the open playlist to be stored.
pub(super) fn save(app: &mut App) -> Result<()> {
    let Some(session) = app.editor.session.as_ref() else {
        app.set_error("No playlist open");
        return Ok(());
    };

    if !session.is_modified() {
        app.set_status("No changes to save");
        return Ok(());
    }

    let message = format!("Saving '{}'", session.name());
    app.task_tx.send(AppTask::SavePlaylist(session.snapshot()))?;
    app.set_status(message);

    Ok(())
}
