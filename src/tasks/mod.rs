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

//! Database work, off the UI thread.
//!
//! This module offloads potentially blocking database work from the main UI
//! thread. A dedicated worker owns the only database connection, translates
//! [`AppTask`] requests into database operations, and broadcasts the results
//! back to the application via [`AppEvent`]s.
//!
//! Only actions that touch the database should be implemented as tasks. Song
//! edits stay on the UI thread, in the open editing session.

mod handlers;
use handlers::*;

use anyhow::Result;
use rusqlite::Connection;
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use playlister::model::{NewSong, Playlist, PlaylistId, Song, SongId, SongQuery};

use crate::events::AppEvent;

#[derive(Debug)]
pub(crate) enum AppTask {
    LoadPlaylists,
    CreatePlaylist { name: String, owner: String },
    OpenPlaylist(PlaylistId),
    SavePlaylist(Playlist),
    RenamePlaylist(PlaylistId, String),
    CopyPlaylist { playlist_id: PlaylistId, owner: String },
    DeletePlaylist(PlaylistId),
    SetPublished(PlaylistId, bool),
    PlayPlaylist(PlaylistId),

    SearchSongs(SongQuery),
    FetchSong(SongId),
    CreateSong(NewSong),
    PlaySong(Song),
}

/// Starts the task worker.
///
/// The worker takes ownership of `conn` and blocks waiting for incoming
/// [`AppTask`]s until every sender has been dropped. A failed task is logged
/// and reported as an [`AppEvent::Error`], it does not stop the worker.
pub(crate) fn spawn_task_worker(
    mut conn: Connection,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        while let Ok(task) = task_rx.recv() {
            log::debug!("Task {:?}", task);

            let mut ctx = TaskContext {
                event_tx: &event_tx,
                conn: &mut conn,
            };

            if let Err(e) = handle_task(task, &mut ctx) {
                log::error!("Task failed: {:#}", e);
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }

        log::debug!("Task worker finished");
    })
}

/// What every task handler gets: the connection and the way back to the UI.
struct TaskContext<'a> {
    event_tx: &'a Sender<AppEvent>,
    conn: &'a mut Connection,
}

fn handle_task(task: AppTask, ctx: &mut TaskContext) -> Result<()> {
    match task {
        AppTask::LoadPlaylists => load_playlists(ctx),
        AppTask::CreatePlaylist { name, owner } => create_playlist(ctx, &name, &owner),
        AppTask::OpenPlaylist(id) => open_playlist(ctx, id),
        AppTask::SavePlaylist(playlist) => save_playlist(ctx, playlist),
        AppTask::RenamePlaylist(id, name) => rename_playlist(ctx, id, &name),
        AppTask::CopyPlaylist { playlist_id, owner } => copy_playlist(ctx, playlist_id, &owner),
        AppTask::DeletePlaylist(id) => delete_playlist(ctx, id),
        AppTask::SetPublished(id, published) => set_published(ctx, id, published),
        AppTask::PlayPlaylist(id) => play_playlist(ctx, id),

        AppTask::SearchSongs(query) => search_songs(ctx, query),
        AppTask::FetchSong(id) => fetch_song(ctx, id),
        AppTask::CreateSong(song) => create_song(ctx, song),
        AppTask::PlaySong(song) => play_song(ctx, song),
    }
}
