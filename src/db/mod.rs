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

//! Data access layer.
//!
//! Every SQL statement lives here: schema setup, the song catalog, playlist
//! persistence and the listen and play counters. Queries go through the
//! prepared statement cache.
//!
//! # Tables
//!
//! * `songs` - The song catalog.
//! * `song_stats` - Play counts, keyed by song.
//! * `playlists` - Playlist names, owners, flags and listen counts.
//! * `playlist_songs` - The ordered entries of each playlist.
//!
//! # Saving
//!
//! Playlists are edited in memory and written back in one go by
//! [`save_playlist`], which also gives permanent identifiers to songs that
//! were created while editing.

mod model;

use std::collections::HashMap;

use anyhow::{Context, Result};
use rusqlite::{Connection, params};

use crate::model::{
    NewSong, Playlist, PlaylistId, PlaylistSummary, Song, SongId, SongQuery,
};

const MIN_SEARCH_LEN: usize = 3;

/// The outcome of [`save_playlist`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedPlaylist {
    /// The playlist as now stored.
    pub playlist: Playlist,

    /// Pending song identifiers mapped to the identifiers they were stored
    /// under.
    pub ids: HashMap<SongId, SongId>,
}

/// Opens (creating if needed) the database at `path`.
///
/// The connection runs in WAL mode with foreign keys enforced, and the
/// schema is created if it does not exist yet.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, WAL mode is refused, or
/// the schema cannot be created.
pub fn init_db(path: &str) -> Result<Connection> {
    let conn = Connection::open(path).with_context(|| format!("Failed to open {}", path))?;

    let journal_mode: String = conn.query_row("PRAGMA journal_mode = WAL", [], |r| r.get(0))?;
    if journal_mode != "wal" {
        anyhow::bail!(
            "Failed to switch to WAL mode. Current mode: {}",
            journal_mode
        );
    }

    conn.execute_batch(
        "
        PRAGMA synchronous = NORMAL;
        PRAGMA foreign_keys = ON;
        PRAGMA cache_size = -16000;
    ",
    )?;

    conn.set_prepared_statement_cache_capacity(100);

    create_schema(&conn)?;

    log::info!("Opened database {}", path);

    Ok(conn)
}

/// Creates any missing tables and indices, all in one SQL transaction.
fn create_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "BEGIN;

        CREATE TABLE IF NOT EXISTS songs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            artist TEXT NOT NULL,
            year INTEGER,
            media_ref TEXT NOT NULL DEFAULT ''
        );

        CREATE INDEX IF NOT EXISTS idx_songs_artist ON songs (artist);

        CREATE TABLE IF NOT EXISTS song_stats (
            song_id INTEGER PRIMARY KEY,
            play_count INTEGER NOT NULL DEFAULT 0,
            FOREIGN KEY (song_id) REFERENCES songs (id) ON DELETE CASCADE
        );

        CREATE TABLE IF NOT EXISTS playlists (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            owner TEXT NOT NULL,
            published INTEGER NOT NULL DEFAULT 0,
            listens INTEGER NOT NULL DEFAULT 0,
            created_at INTEGER NOT NULL DEFAULT (CAST(strftime('%s', 'now') AS INTEGER))
        );

        CREATE TABLE IF NOT EXISTS playlist_songs (
            playlist_id INTEGER NOT NULL,
            position INTEGER NOT NULL,
            song_id INTEGER NOT NULL,
            PRIMARY KEY (playlist_id, position),
            FOREIGN KEY (playlist_id) REFERENCES playlists (id) ON DELETE CASCADE,
            FOREIGN KEY (song_id) REFERENCES songs (id) ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_playlist_songs_song_id ON playlist_songs (song_id);

        COMMIT;",
    )
    .context("Failed to create schema")
}

/// Adds a song to the catalog and returns it with its new identifier.
pub fn create_song(conn: &Connection, song: &NewSong) -> Result<Song> {
    let id = insert_song(conn, song)?;

    Ok(Song {
        id,
        title: song.title.clone(),
        artist: song.artist.clone(),
        year: song.year,
        media_ref: song.media_ref.clone(),
    })
}

/// Fetches a single song from the catalog.
///
/// # Errors
///
/// Returns an error if there is no song with the given id.
pub fn fetch_song(conn: &Connection, song_id: SongId) -> Result<Song> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, title, artist, year, media_ref FROM songs WHERE id = ?",
    )?;

    stmt.query_one([song_id], Song::from_row)
        .with_context(|| format!("Song not found: {}", song_id))
}

/// Searches the catalog.
///
/// Each non-blank field of the query of at least [`MIN_SEARCH_LEN`]
/// characters adds a case-insensitive substring filter, `search` matching
/// either title or artist. A query with no usable field returns the whole
/// catalog.
pub fn search_songs(conn: &Connection, query: &SongQuery) -> Result<Vec<Song>> {
    let mut sql = String::from("SELECT id, title, artist, year, media_ref FROM songs");

    let mut filters = Vec::new();
    let mut params = Vec::new();

    let search = query.search.trim();
    if is_searchable(search) {
        filters.push("(title LIKE ? ESCAPE '\\' OR artist LIKE ? ESCAPE '\\')");
        let param = like_pattern(search);
        params.push(param.clone());
        params.push(param);
    }

    let artist = query.artist.trim();
    if is_searchable(artist) {
        filters.push("(artist LIKE ? ESCAPE '\\')");
        params.push(like_pattern(artist));
    }

    let title = query.title.trim();
    if is_searchable(title) {
        filters.push("(title LIKE ? ESCAPE '\\')");
        params.push(like_pattern(title));
    }

    if !filters.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&filters.join(" AND "));
    }

    sql.push_str(" ORDER BY artist COLLATE NOCASE, title COLLATE NOCASE, id");

    let mut stmt = conn.prepare_cached(&sql)?;
    let results = stmt
        .query_map(rusqlite::params_from_iter(params), Song::from_row)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(results)
}

fn is_searchable(text: &str) -> bool {
    text.chars().count() >= MIN_SEARCH_LEN
}

/// A `LIKE` pattern matching `text` anywhere, with `%`, `_` and the escape
/// character itself taken literally.
fn like_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

pub fn create_playlist(conn: &Connection, name: &str, owner: &str) -> Result<PlaylistId> {
    let mut stmt = conn.prepare_cached("INSERT INTO playlists (name, owner) VALUES (?1, ?2)")?;
    stmt.execute(params![name, owner])?;

    let id = PlaylistId(conn.last_insert_rowid());
    log::info!("Created playlist {} '{}'", id, name);

    Ok(id)
}

/// Fetches a playlist together with its songs, in playlist order.
///
/// # Errors
///
/// Returns an error if there is no playlist with the given id.
pub fn fetch_playlist(conn: &Connection, playlist_id: PlaylistId) -> Result<Playlist> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, name, owner, published, listens FROM playlists WHERE id = ?",
    )?;
    let mut playlist = stmt
        .query_one([playlist_id], Playlist::from_row)
        .with_context(|| format!("Playlist not found: {}", playlist_id))?;

    playlist.songs = fetch_playlist_songs(conn, playlist_id)?;

    Ok(playlist)
}

fn fetch_playlist_songs(conn: &Connection, playlist_id: PlaylistId) -> Result<Vec<Song>> {
    let sql = "
        SELECT s.id, s.title, s.artist, s.year, s.media_ref
        FROM playlist_songs ps
        JOIN songs s ON s.id = ps.song_id
        WHERE ps.playlist_id = ?
        ORDER BY ps.position
    ";

    let mut stmt = conn.prepare_cached(sql)?;
    let results = stmt
        .query_map([playlist_id], Song::from_row)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(results)
}

/// Fetches a listing of every playlist, sorted by name.
pub fn fetch_playlist_summaries(conn: &Connection) -> Result<Vec<PlaylistSummary>> {
    let sql = "
        SELECT p.id, p.name, p.owner, p.published, p.listens, COUNT(ps.song_id), p.created_at
        FROM playlists p
        LEFT JOIN playlist_songs ps ON ps.playlist_id = p.id
        GROUP BY p.id
        ORDER BY p.name COLLATE NOCASE, p.id
    ";

    let mut stmt = conn.prepare_cached(sql)?;
    let results = stmt
        .query_map([], PlaylistSummary::from_row)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(results)
}

/// Writes an edited playlist back to the database.
///
/// Every song with a pending identifier is first added to the catalog. The
/// playlist name and its entries are then replaced. All of this happens in a
/// single SQL transaction, a failure leaves the stored playlist untouched.
///
/// # Errors
///
/// Returns an error if the playlist does not exist, or if any statement
/// fails.
pub fn save_playlist(conn: &mut Connection, playlist: &Playlist) -> Result<SavedPlaylist> {
    let tx = conn.transaction()?;

    let mut ids = HashMap::new();
    let mut entries = Vec::with_capacity(playlist.songs.len());
    for song in &playlist.songs {
        let song_id = if song.id.is_pending() {
            let new_id = insert_song(&tx, &NewSong::from(song))?;
            ids.insert(song.id, new_id);
            new_id
        } else {
            song.id
        };
        entries.push(song_id);
    }

    let updated = tx.execute(
        "UPDATE playlists SET name = ?1 WHERE id = ?2",
        params![playlist.name, playlist.id],
    )?;
    if updated == 0 {
        anyhow::bail!("Playlist not found: {}", playlist.id);
    }

    tx.execute(
        "DELETE FROM playlist_songs WHERE playlist_id = ?1",
        params![playlist.id],
    )?;

    {
        let mut stmt = tx.prepare_cached(
            "INSERT INTO playlist_songs (playlist_id, position, song_id) VALUES (?1, ?2, ?3)",
        )?;
        for (position, song_id) in entries.iter().enumerate() {
            stmt.execute(params![playlist.id, position as i64, song_id])?;
        }
    }

    let saved = fetch_playlist(&tx, playlist.id)?;
    tx.commit().context("Failed to commit playlist")?;

    log::debug!(
        "Saved playlist {} with {} entries, {} new songs",
        playlist.id,
        entries.len(),
        ids.len()
    );

    Ok(SavedPlaylist {
        playlist: saved,
        ids,
    })
}

pub fn rename_playlist(conn: &Connection, playlist_id: PlaylistId, name: &str) -> Result<()> {
    let mut stmt = conn.prepare_cached("UPDATE playlists SET name = ?1 WHERE id = ?2")?;
    if stmt.execute(params![name, playlist_id])? == 0 {
        anyhow::bail!("Playlist not found: {}", playlist_id);
    }

    Ok(())
}

/// Creates a new playlist owned by `owner` with the same songs as an
/// existing one.
pub fn copy_playlist(conn: &mut Connection, playlist_id: PlaylistId, owner: &str) -> Result<PlaylistId> {
    let tx = conn.transaction()?;

    let source = fetch_playlist(&tx, playlist_id)?;
    let copy_id = create_playlist(&tx, &format!("{} (copy)", source.name), owner)?;

    tx.execute(
        "INSERT INTO playlist_songs (playlist_id, position, song_id)
         SELECT ?1, position, song_id FROM playlist_songs WHERE playlist_id = ?2",
        params![copy_id, playlist_id],
    )?;

    tx.commit().context("Failed to commit playlist copy")?;

    Ok(copy_id)
}

pub fn delete_playlist(conn: &Connection, playlist_id: PlaylistId) -> Result<()> {
    let mut stmt = conn.prepare_cached("DELETE FROM playlists WHERE id = ?")?;
    if stmt.execute([playlist_id])? == 0 {
        anyhow::bail!("Playlist not found: {}", playlist_id);
    }

    log::info!("Deleted playlist {}", playlist_id);

    Ok(())
}

pub fn set_published(conn: &Connection, playlist_id: PlaylistId, published: bool) -> Result<()> {
    let mut stmt = conn.prepare_cached("UPDATE playlists SET published = ?1 WHERE id = ?2")?;
    if stmt.execute(params![published, playlist_id])? == 0 {
        anyhow::bail!("Playlist not found: {}", playlist_id);
    }

    Ok(())
}

/// Counts one listen of a playlist and returns the new total.
pub fn increment_listens(conn: &Connection, playlist_id: PlaylistId) -> Result<i64> {
    let mut stmt = conn.prepare_cached(
        "UPDATE playlists SET listens = listens + 1 WHERE id = ?1 RETURNING listens",
    )?;

    stmt.query_one([playlist_id], |row| row.get(0))
        .with_context(|| format!("Playlist not found: {}", playlist_id))
}

pub fn increment_play_count(conn: &Connection, song_id: SongId) -> Result<()> {
    let sql = "
        INSERT INTO song_stats (song_id, play_count)
        VALUES (?1, 1)
        ON CONFLICT (song_id)
        DO UPDATE SET play_count = play_count + 1";

    let mut stmt = conn.prepare_cached(sql)?;
    stmt.execute(params![song_id])?;

    Ok(())
}

pub fn fetch_play_count(conn: &Connection, song_id: SongId) -> Result<i64> {
    let mut stmt = conn.prepare_cached(
        "SELECT COALESCE((SELECT play_count FROM song_stats WHERE song_id = ?), 0)",
    )?;

    Ok(stmt.query_one([song_id], |row| row.get(0))?)
}

fn insert_song(conn: &Connection, song: &NewSong) -> Result<SongId> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO songs (title, artist, year, media_ref) VALUES (?1, ?2, ?3, ?4)",
    )?;
    stmt.execute(params![song.title, song.artist, song.year, song.media_ref])?;

    Ok(SongId(conn.last_insert_rowid()))
}
