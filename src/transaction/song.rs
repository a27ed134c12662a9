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

//! Playlist song edits.
//!
//! Every edit to the songs of a playlist is one of the [`SongTransaction`]
//! kinds. Each kind carries what it needs to both apply and revert itself,
//! and all matching is done by song identity, never by position or content.
//!
//! Reverting is forgiving: if the song an edit refers to has since been
//! removed (or re-added) by other means, the revert does nothing rather than
//! touching an unrelated entry.

use std::collections::HashMap;

use crate::{
    model::{Song, SongId},
    transaction::{SongList, Transaction},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SongTransaction {
    /// Append a catalog song.
    Add { song: Song },

    /// Append a copy of an existing song. The copy is created, with its own
    /// id, before the transaction is processed so that redo appends the very
    /// same entry again.
    Duplicate { source: SongId, copy: Song },

    /// Remove a song, remembering where it was.
    Remove { song: Song, index: usize },

    /// Move a song from one position to another.
    Move { song_id: SongId, title: String, from: usize, to: usize },
}

impl SongTransaction {
    pub fn add(song: Song) -> Self {
        Self::Add { song }
    }

    /// Creates a duplicate of `source` with the identifier `copy_id`.
    ///
    /// `songs` is only used to derive the title of the copy: if a song with
    /// the same title is already present, the copy gets the first free
    /// `" (n)"` suffix.
    pub fn duplicate(source: &Song, songs: &[Song], copy_id: SongId) -> Self {
        let copy = Song {
            id: copy_id,
            title: duplicate_title(&source.title, songs),
            ..source.clone()
        };

        Self::Duplicate {
            source: source.id,
            copy,
        }
    }

    pub fn remove(song: Song, index: usize) -> Self {
        Self::Remove { song, index }
    }

    /// Creates a removal of the first song in `songs` with the identifier
    /// `song_id`, or `None` if there is no such song.
    pub fn remove_from(songs: &[Song], song_id: SongId) -> Option<Self> {
        let index = position_of(songs, song_id)?;
        Some(Self::remove(songs[index].clone(), index))
    }

    /// Creates a move of the song with the identifier `song_id` to `to`,
    /// clamped to the last position. Returns `None` if there is no such song.
    pub fn move_within(songs: &[Song], song_id: SongId, to: usize) -> Option<Self> {
        let from = position_of(songs, song_id)?;
        Some(Self::Move {
            song_id,
            title: songs[from].title.clone(),
            from,
            to: to.min(songs.len() - 1),
        })
    }

    /// Replaces song identifiers according to `ids`.
    ///
    /// Used once songs minted during editing have been persisted and given
    /// their permanent identifiers, so that later undo and redo still find
    /// them.
    pub fn rebind_ids(&mut self, ids: &HashMap<SongId, SongId>) {
        let rebind = |id: &mut SongId| {
            if let Some(new_id) = ids.get(id) {
                *id = *new_id;
            }
        };

        match self {
            Self::Add { song } => rebind(&mut song.id),
            Self::Duplicate { source, copy } => {
                rebind(source);
                rebind(&mut copy.id);
            }
            Self::Remove { song, .. } => rebind(&mut song.id),
            Self::Move { song_id, .. } => rebind(song_id),
        }
    }
}

impl Transaction for SongTransaction {
    type Target = dyn SongList;

    fn apply(&self, target: &mut Self::Target) {
        match self {
            Self::Add { song } => append_if_absent(target, song),
            Self::Duplicate { copy, .. } => append_if_absent(target, copy),
            Self::Remove { song, .. } => remove_by_id(target, song.id),
            Self::Move { song_id, to, .. } => move_by_id(target, *song_id, *to),
        }
    }

    fn revert(&self, target: &mut Self::Target) {
        match self {
            Self::Add { song } => remove_by_id(target, song.id),
            Self::Duplicate { copy, .. } => remove_by_id(target, copy.id),
            Self::Remove { song, index } => reinsert(target, song, *index),
            Self::Move { song_id, from, .. } => move_by_id(target, *song_id, *from),
        }
    }

    fn description(&self) -> String {
        match self {
            Self::Add { song } => format!("Add '{}'", song.title),
            Self::Duplicate { copy, .. } => format!("Duplicate '{}'", copy.title),
            Self::Remove { song, .. } => format!("Remove '{}'", song.title),
            Self::Move { title, .. } => format!("Move '{}'", title),
        }
    }
}

fn position_of(songs: &[Song], song_id: SongId) -> Option<usize> {
    songs.iter().position(|s| s.id == song_id)
}

fn append_if_absent(target: &mut (impl SongList + ?Sized), song: &Song) {
    if position_of(target.songs(), song.id).is_some() {
        return;
    }

    let mut songs = target.songs().to_vec();
    songs.push(song.clone());
    target.set_songs(songs);
}

fn remove_by_id(target: &mut (impl SongList + ?Sized), song_id: SongId) {
    let Some(index) = position_of(target.songs(), song_id) else {
        return;
    };

    let mut songs = target.songs().to_vec();
    songs.remove(index);
    target.set_songs(songs);
}

// Best effort: the recorded index may have drifted if other edits happened
// in between.
fn reinsert(target: &mut (impl SongList + ?Sized), song: &Song, index: usize) {
    if position_of(target.songs(), song.id).is_some() {
        return;
    }

    let mut songs = target.songs().to_vec();
    if index <= songs.len() {
        songs.insert(index, song.clone());
    } else {
        songs.push(song.clone());
    }
    target.set_songs(songs);
}

fn move_by_id(target: &mut (impl SongList + ?Sized), song_id: SongId, to: usize) {
    let Some(from) = position_of(target.songs(), song_id) else {
        return;
    };

    let mut songs = target.songs().to_vec();
    let song = songs.remove(from);
    let to = to.min(songs.len());
    songs.insert(to, song);
    target.set_songs(songs);
}

/// Derives the title for a copy of a song titled `title`.
fn duplicate_title(title: &str, songs: &[Song]) -> String {
    let is_taken = |candidate: &str| songs.iter().any(|s| s.title == candidate);

    if !is_taken(title) {
        return title.to_string();
    }

    let base = strip_copy_suffix(title);
    let mut n = 1;
    loop {
        let candidate = format!("{} ({})", base, n);
        if !is_taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// Strips a trailing `" (n)"` copy counter, if there is one.
fn strip_copy_suffix(title: &str) -> &str {
    let Some(stem) = title.strip_suffix(')') else {
        return title;
    };
    let Some((base, counter)) = stem.rsplit_once(" (") else {
        return title;
    };

    if !base.is_empty() && !counter.is_empty() && counter.chars().all(|c| c.is_ascii_digit()) {
        base
    } else {
        title
    }
}
