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
    db,
    model::{NewSong, Playlist, PlaylistId, Song, SongId, SongQuery},
};

use crate::{events::AppEvent, tasks::TaskContext};

pub(super) fn load_playlists(ctx: &mut TaskContext) -> Result<()> {
    let playlists = db::fetch_playlist_summaries(ctx.conn)?;
    ctx.event_tx.send(AppEvent::PlaylistsReady(playlists))?;

    Ok(())
}

pub(super) fn create_playlist(ctx: &mut TaskContext, name: &str, owner: &str) -> Result<()> {
    let id = db::create_playlist(ctx.conn, name, owner)?;
    log::info!("Created playlist {} '{}'", id, name);

    open_playlist(ctx, id)?;
    load_playlists(ctx)
}

pub(super) fn open_playlist(ctx: &mut TaskContext, playlist_id: PlaylistId) -> Result<()> {
    let playlist = db::fetch_playlist(ctx.conn, playlist_id)?;
    ctx.event_tx.send(AppEvent::PlaylistOpened(playlist))?;

    Ok(())
}

/// Stores an edited playlist. A failure is reported as
/// [`AppEvent::SaveFailed`] so the UI can drop a pending save-and-quit.
pub(super) fn save_playlist(ctx: &mut TaskContext, playlist: Playlist) -> Result<()> {
    let saved = match db::save_playlist(ctx.conn, &playlist) {
        Ok(saved) => saved,
        Err(e) => {
            log::error!("Failed to save playlist {}: {:#}", playlist.id, e);
            ctx.event_tx
                .send(AppEvent::SaveFailed(playlist.id, e.to_string()))?;
            return Ok(());
        }
    };
    ctx.event_tx.send(AppEvent::PlaylistSaved(saved))?;

    load_playlists(ctx)
}

pub(super) fn rename_playlist(ctx: &mut TaskContext, playlist_id: PlaylistId, name: &str) -> Result<()> {
    db::rename_playlist(ctx.conn, playlist_id, name)?;
    ctx.event_tx
        .send(AppEvent::Status(format!("Renamed playlist to '{}'", name)))?;

    load_playlists(ctx)
}

pub(super) fn copy_playlist(ctx: &mut TaskContext, playlist_id: PlaylistId, owner: &str) -> Result<()> {
    let copy_id = db::copy_playlist(ctx.conn, playlist_id, owner)?;
    log::info!("Copied playlist {} to {}", playlist_id, copy_id);

    load_playlists(ctx)?;
    ctx.event_tx.send(AppEvent::PlaylistCopied(copy_id))?;

    Ok(())
}

pub(super) fn delete_playlist(ctx: &mut TaskContext, playlist_id: PlaylistId) -> Result<()> {
    db::delete_playlist(ctx.conn, playlist_id)?;
    ctx.event_tx.send(AppEvent::PlaylistDeleted(playlist_id))?;

    load_playlists(ctx)
}

pub(super) fn set_published(ctx: &mut TaskContext, playlist_id: PlaylistId, published: bool) -> Result<()> {
    db::set_published(ctx.conn, playlist_id, published)?;
    ctx.event_tx
        .send(AppEvent::PublishedChanged(playlist_id, published))?;

    load_playlists(ctx)
}

pub(super) fn play_playlist(ctx: &mut TaskContext, playlist_id: PlaylistId) -> Result<()> {
    let listens = db::increment_listens(ctx.conn, playlist_id)?;
    ctx.event_tx
        .send(AppEvent::ListensChanged(playlist_id, listens))?;

    load_playlists(ctx)
}

pub(super) fn search_songs(ctx: &mut TaskContext, query: SongQuery) -> Result<()> {
    let songs = db::search_songs(ctx.conn, &query)?;
    ctx.event_tx
        .send(AppEvent::SearchResultsReady(query.search, songs))?;

    Ok(())
}

pub(super) fn fetch_song(ctx: &mut TaskContext, song_id: SongId) -> Result<()> {
    let song = db::fetch_song(ctx.conn, song_id)?;
    ctx.event_tx.send(AppEvent::SongFetched(song))?;

    Ok(())
}

pub(super) fn create_song(ctx: &mut TaskContext, song: NewSong) -> Result<()> {
    let song = db::create_song(ctx.conn, &song)?;
    log::info!("Created song {} '{}'", song.id, song.title);
    ctx.event_tx.send(AppEvent::SongCreated(song))?;

    Ok(())
}

/// Counts a play of `song`. Songs not stored yet have no statistics.
pub(super) fn play_song(ctx: &mut TaskContext, song: Song) -> Result<()> {
    let play_count = if song.id.is_pending() {
        0
    } else {
        db::increment_play_count(ctx.conn, song.id)?;
        db::fetch_play_count(ctx.conn, song.id)?
    };

    ctx.event_tx.send(AppEvent::SongPlayed(song, play_count))?;

    Ok(())
}
