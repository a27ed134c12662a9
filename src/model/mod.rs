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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, songs and
//! playlists, representing the underlying data schema used for catalog
//! management and playlist editing.
//!
//! Song identity is carried by [`SongId`]. Identifiers issued by the database
//! are always positive, identifiers minted by an editing session for songs
//! that have not been saved yet are negative (see [`SongId::is_pending`]).

pub mod sort;

use std::fmt;

/// Unique identifier of a song.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SongId(pub i64);

impl SongId {
    /// Whether this identifier was minted by an editing session and has not
    /// been assigned a database row yet.
    pub fn is_pending(self) -> bool {
        self.0 < 0
    }
}

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier of a playlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlaylistId(pub i64);

impl fmt::Display for PlaylistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A song reference, as held by a playlist.
///
/// Two entries with identical display fields are still different songs if
/// their ids differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub id: SongId,
    pub title: String,
    pub artist: String,
    pub year: Option<i32>,
    pub media_ref: String,
}

/// Fields required to add a song to the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewSong {
    pub title: String,
    pub artist: String,
    pub year: Option<i32>,
    pub media_ref: String,
}

impl From<&Song> for NewSong {
    fn from(song: &Song) -> Self {
        Self {
            title: song.title.clone(),
            artist: song.artist.clone(),
            year: song.year,
            media_ref: song.media_ref.clone(),
        }
    }
}

/// A complete playlist, including its ordered songs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub id: PlaylistId,
    pub name: String,
    pub owner: String,
    pub published: bool,
    pub listens: i64,
    pub songs: Vec<Song>,
}

/// Lightweight listing entry for a playlist, used by the library view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistSummary {
    pub id: PlaylistId,
    pub name: String,
    pub owner: String,
    pub published: bool,
    pub listens: i64,
    pub song_count: i64,
    pub created_at: i64,
}

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct SongQuery {
    pub search: String,
    pub artist: String,
    pub title: String,
}

impl SongQuery {
    pub fn for_text(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..Self::default()
        }
    }

    pub fn for_artist(artist: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            ..Self::default()
        }
    }

    pub fn for_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}
