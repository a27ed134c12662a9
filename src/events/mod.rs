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

//! Application logic, event handling, and command dispatching.
//!
//! This module acts as the central hub for the "Controller" logic of the
//! application. Every input, whether a key press, a parsed command-line
//! command, or a result from the task worker, arrives here as an
//! [`AppEvent`] and is turned into a state change.
//!
//! # Organization
//!
//! * [`key_handlers`]: routes key presses to the commander and the views.
//! * [`commands`]: carries out command-line commands.
//! * [`handlers`]: applies task results and view actions to the state.

mod commands;
mod handlers;
mod key_handlers;

use handlers::*;

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{Terminal, prelude::CrosstermBackend};

use playlister::{
    db::SavedPlaylist,
    model::{Playlist, PlaylistId, PlaylistSummary, Song},
};

use crate::{App, MainView, commander::UserCommand, render::draw};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Tick,

    Command(UserCommand),
    SetMainView(MainView),

    PlaylistsReady(Vec<PlaylistSummary>),
    PlaylistOpened(Playlist),
    PlaylistSaved(SavedPlaylist),
    SaveFailed(PlaylistId, String),
    PlaylistCopied(PlaylistId),
    PlaylistDeleted(PlaylistId),
    PublishedChanged(PlaylistId, bool),
    ListensChanged(PlaylistId, i64),

    SearchResultsReady(String, Vec<Song>),
    SongFetched(Song),
    SongCreated(Song),
    SongPlayed(Song, i64),

    Status(String),
    Error(String),

    ExitApplication,
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until an exit event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => key_handlers::process_key_event(app, key)?,
            AppEvent::Command(command) => commands::handle_command(app, command)?,
            AppEvent::SetMainView(view) => handle_set_main_view(app, view),
            AppEvent::PlaylistsReady(playlists) => handle_playlists_ready(app, playlists),
            AppEvent::PlaylistOpened(playlist) => handle_playlist_opened(app, playlist),
            AppEvent::PlaylistSaved(saved) => handle_playlist_saved(app, saved)?,
            AppEvent::SaveFailed(id, message) => handle_save_failed(app, id, &message),
            AppEvent::PlaylistCopied(id) => handle_playlist_copied(app, id),
            AppEvent::PlaylistDeleted(id) => handle_playlist_deleted(app, id),
            AppEvent::PublishedChanged(id, published) => handle_published_changed(app, id, published),
            AppEvent::ListensChanged(id, listens) => handle_listens_changed(app, id, listens),
            AppEvent::SearchResultsReady(query, songs) => handle_search_results_ready(app, &query, songs),
            AppEvent::SongFetched(song) => handle_song_fetched(app, song),
            AppEvent::SongCreated(song) => handle_song_created(app, song),
            AppEvent::SongPlayed(song, play_count) => handle_song_played(app, &song, play_count),
            AppEvent::Status(message) => app.set_status(message),
            AppEvent::Error(message) => app.set_error(message),
            AppEvent::Tick | AppEvent::ExitApplication => {}
        }

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        sync::mpsc::{self, Receiver},
    };

    use playlister::{config::AppConfig, model::SongId};

    use super::*;
    use crate::{Status, tasks::AppTask};

    fn test_app() -> (App, Receiver<AppTask>) {
        let (task_tx, task_rx) = mpsc::channel();
        (App::new(AppConfig::default(), task_tx), task_rx)
    }

    fn song(id: i64, title: &str) -> Song {
        Song {
            id: SongId(id),
            title: title.to_string(),
            artist: "David Bowie".to_string(),
            year: None,
            media_ref: String::new(),
        }
    }

    fn playlist(id: i64, name: &str) -> Playlist {
        Playlist {
            id: PlaylistId(id),
            name: name.to_string(),
            owner: "me".to_string(),
            published: false,
            listens: 0,
            songs: vec![song(1, "Heroes"), song(2, "Changes")],
        }
    }

    fn summary(playlist: &Playlist) -> PlaylistSummary {
        PlaylistSummary {
            id: playlist.id,
            name: playlist.name.clone(),
            owner: playlist.owner.clone(),
            published: playlist.published,
            listens: playlist.listens,
            song_count: playlist.songs.len() as i64,
            created_at: 1_700_000_000,
        }
    }

    /// The playlist the UI asked the worker to store.
    fn requested_save(task_rx: &Receiver<AppTask>) -> Playlist {
        match task_rx.try_recv() {
            Ok(AppTask::SavePlaylist(playlist)) => playlist,
            other => panic!("Expected a save request, got {:?}", other),
        }
    }

    fn stored(playlist: Playlist) -> SavedPlaylist {
        SavedPlaylist {
            playlist,
            ids: HashMap::new(),
        }
    }

    #[test]
    fn test_save_and_quit_exits_once_saved() {
        let (mut app, task_rx) = test_app();
        handle_playlist_opened(&mut app, playlist(7, "Bowie"));
        app.editor.remove_selected().unwrap();

        commands::handle_command(&mut app, UserCommand::SaveAndQuit).unwrap();
        let snapshot = requested_save(&task_rx);
        assert!(app.event_rx.try_recv().is_err());

        handle_playlist_saved(&mut app, stored(snapshot)).unwrap();

        assert!(matches!(app.event_rx.try_recv(), Ok(AppEvent::ExitApplication)));
    }

    #[test]
    fn test_failed_save_cancels_save_and_quit() {
        let (mut app, task_rx) = test_app();
        handle_playlist_opened(&mut app, playlist(7, "Bowie"));
        app.editor.remove_selected().unwrap();

        commands::handle_command(&mut app, UserCommand::SaveAndQuit).unwrap();
        let snapshot = requested_save(&task_rx);
        handle_save_failed(&mut app, snapshot.id, "database is locked");

        assert!(!app.quit_after_save);
        assert!(matches!(app.status, Some(Status::Error(_))));
        assert!(app.editor.is_modified());

        // A later plain save only saves
        commands::handle_command(&mut app, UserCommand::Save).unwrap();
        let snapshot = requested_save(&task_rx);
        handle_playlist_saved(&mut app, stored(snapshot)).unwrap();

        assert!(!app.editor.is_modified());
        assert!(app.event_rx.try_recv().is_err());
    }

    #[test]
    fn test_library_rename_of_open_playlist_edits_session() {
        let (mut app, task_rx) = test_app();
        let bowie = playlist(7, "Bowie");
        app.library.set_playlists(vec![summary(&bowie)]);
        handle_playlist_opened(&mut app, bowie);
        app.main_view = MainView::Library;
        assert_eq!(app.library.selected_id(), Some(PlaylistId(7)));

        commands::handle_command(&mut app, UserCommand::Rename("Best of Bowie".to_string()))
            .unwrap();

        let session = app.editor.session.as_ref().unwrap();
        assert_eq!(session.name(), "Best of Bowie");
        assert!(session.is_modified());
        assert!(task_rx.try_recv().is_err());

        // The save writes the new name
        commands::handle_command(&mut app, UserCommand::Save).unwrap();
        assert_eq!(requested_save(&task_rx).name, "Best of Bowie");
    }

    #[test]
    fn test_library_rename_of_other_playlist_goes_to_worker() {
        let (mut app, task_rx) = test_app();
        let bowie = playlist(7, "Bowie");
        let commute = playlist(8, "Commute");
        app.library
            .set_playlists(vec![summary(&bowie), summary(&commute)]);
        handle_playlist_opened(&mut app, bowie);
        app.main_view = MainView::Library;
        app.library.select(PlaylistId(8));

        commands::handle_command(&mut app, UserCommand::Rename("Drive".to_string())).unwrap();

        match task_rx.try_recv() {
            Ok(AppTask::RenamePlaylist(id, name)) => {
                assert_eq!(id, PlaylistId(8));
                assert_eq!(name, "Drive");
            }
            other => panic!("Expected a rename request, got {:?}", other),
        }
        assert_eq!(app.editor.session.as_ref().unwrap().name(), "Bowie");
    }
}
