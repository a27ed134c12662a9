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

//! # Playlist manager core.
//!
//! The building blocks behind the `playlister` terminal application: a song
//! catalog and playlists stored in SQLite, and an editing session in which
//! every song edit can be undone and redone.
//!
//! * [`model`]: songs, playlists and listings, plus sorting and filtering.
//! * [`transaction`]: the undo/redo history and the playlist song edits.
//! * [`session`]: the editable state of one open playlist.
//! * [`db`]: persistence.
//! * [`config`]: the configuration file.

pub mod config;
pub mod db;
pub mod model;
pub mod session;
pub mod transaction;
