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

//! Playlist editing session.
//!
//! An [`EditSession`] holds the editable state of exactly one playlist: its
//! name, its ordered songs, and the undo/redo history of the song edits made
//! since the session was opened. A session is created when a playlist is
//! opened for editing and simply dropped when it is closed, which discards
//! any unsaved edits along with the history.
//!
//! Song edits go through the history and can be undone. Renaming does not,
//! a rename is applied directly and is only reverted by renaming again.
//!
//! Nothing here performs I/O. Saving is a two step affair driven by the
//! caller: [`EditSession::snapshot`] produces the playlist to persist, and
//! once the persistence layer has stored it [`EditSession::mark_saved`]
//! rebinds any songs that were given permanent identifiers.

use std::collections::HashMap;

use thiserror::Error;

use crate::{
    model::{Playlist, PlaylistId, Song, SongId},
    transaction::{
        SongIdAllocator, SongTransaction, TransactionError, TransactionStack,
    },
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Song not found: {0}")]
    SongNotFound(SongId),

    #[error("Song is already in the playlist: {0}")]
    SongAlreadyPresent(SongId),

    #[error("Playlist name must not be blank")]
    InvalidName,

    #[error(transparent)]
    Transaction(#[from] TransactionError),
}

/// Issues negative identifiers for songs created during editing.
///
/// Persisted songs always have positive identifiers, so pending ones never
/// collide with them.
#[derive(Debug)]
pub struct PendingIds {
    next: i64,
}

impl PendingIds {
    /// Creates an allocator whose identifiers are below any already in
    /// `songs`.
    pub fn below(songs: &[Song]) -> Self {
        let lowest = songs.iter().map(|s| s.id.0).min().unwrap_or(0);
        Self {
            next: lowest.min(0) - 1,
        }
    }
}

impl SongIdAllocator for PendingIds {
    fn allocate_song_id(&mut self) -> SongId {
        let id = SongId(self.next);
        self.next -= 1;
        id
    }
}

pub struct EditSession {
    id: PlaylistId,
    name: String,
    owner: String,
    published: bool,
    listens: i64,
    songs: Vec<Song>,
    history: TransactionStack<SongTransaction>,
    pending_ids: PendingIds,
    saved_name: String,
    saved_position: Option<usize>,
}

impl EditSession {
    /// Opens an editing session for `playlist` with an empty history.
    pub fn open(playlist: Playlist) -> Self {
        log::info!("Opening playlist {} '{}'", playlist.id, playlist.name);

        Self {
            id: playlist.id,
            saved_name: playlist.name.clone(),
            name: playlist.name,
            owner: playlist.owner,
            published: playlist.published,
            listens: playlist.listens,
            pending_ids: PendingIds::below(&playlist.songs),
            songs: playlist.songs,
            history: TransactionStack::new(),
            saved_position: Some(0),
        }
    }

    pub fn playlist_id(&self) -> PlaylistId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn published(&self) -> bool {
        self.published
    }

    pub fn listens(&self) -> i64 {
        self.listens
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn song(&self, song_id: SongId) -> Option<&Song> {
        self.songs.iter().find(|s| s.id == song_id)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_description(&self) -> Option<String> {
        self.history.undo_description()
    }

    pub fn redo_description(&self) -> Option<String> {
        self.history.redo_description()
    }

    /// Whether there are edits that have not been saved.
    pub fn is_modified(&self) -> bool {
        self.saved_position != Some(self.history.position()) || self.name != self.saved_name
    }

    /// Appends a catalog song.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::SongAlreadyPresent`] if the song is already in
    /// the playlist; duplicate it instead.
    pub fn add_song(&mut self, song: Song) -> Result<(), SessionError> {
        if self.song(song.id).is_some() {
            return Err(SessionError::SongAlreadyPresent(song.id));
        }

        self.process(SongTransaction::add(song));
        Ok(())
    }

    /// Appends a copy of the song with the identifier `song_id` and returns
    /// the identifier of the copy.
    pub fn duplicate_song(&mut self, song_id: SongId) -> Result<SongId, SessionError> {
        let source = self
            .song(song_id)
            .cloned()
            .ok_or(SessionError::SongNotFound(song_id))?;

        let copy_id = self.pending_ids.allocate_song_id();
        self.process(SongTransaction::duplicate(&source, &self.songs, copy_id));

        Ok(copy_id)
    }

    pub fn remove_song(&mut self, song_id: SongId) -> Result<(), SessionError> {
        let transaction = SongTransaction::remove_from(&self.songs, song_id)
            .ok_or(SessionError::SongNotFound(song_id))?;

        self.process(transaction);
        Ok(())
    }

    /// Moves the song with the identifier `song_id` to `to`, clamped to the
    /// last position. Moving a song onto its own position records nothing.
    pub fn move_song(&mut self, song_id: SongId, to: usize) -> Result<(), SessionError> {
        let transaction = SongTransaction::move_within(&self.songs, song_id, to)
            .ok_or(SessionError::SongNotFound(song_id))?;

        if let SongTransaction::Move { from, to, .. } = &transaction {
            if from == to {
                return Ok(());
            }
        }

        self.process(transaction);
        Ok(())
    }

    pub fn undo(&mut self) -> Result<String, SessionError> {
        Ok(self.history.undo(&mut self.songs)?)
    }

    pub fn redo(&mut self) -> Result<String, SessionError> {
        Ok(self.history.redo(&mut self.songs)?)
    }

    /// Renames the playlist. Not recorded in the history.
    pub fn rename(&mut self, name: &str) -> Result<(), SessionError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SessionError::InvalidName);
        }

        self.name = name.to_string();
        Ok(())
    }

    /// The playlist as it should be persisted.
    pub fn snapshot(&self) -> Playlist {
        Playlist {
            id: self.id,
            name: self.name.clone(),
            owner: self.owner.clone(),
            published: self.published,
            listens: self.listens,
            songs: self.songs.clone(),
        }
    }

    /// Records that `saved` has been persisted.
    ///
    /// `ids` maps the pending identifiers of newly stored songs to their
    /// permanent ones. They are replaced both in the current songs and in the
    /// history, so the saved edits can still be undone afterwards.
    ///
    /// If the session was edited after the snapshot was taken it stays
    /// modified.
    pub fn mark_saved(&mut self, saved: &Playlist, ids: &HashMap<SongId, SongId>) {
        for song in &mut self.songs {
            if let Some(new_id) = ids.get(&song.id) {
                song.id = *new_id;
            }
        }

        for transaction in self.history.transactions_mut() {
            transaction.rebind_ids(ids);
        }

        self.listens = saved.listens;
        self.published = saved.published;
        self.saved_name = saved.name.clone();
        self.saved_position = (self.songs == saved.songs).then_some(self.history.position());

        log::info!(
            "Saved playlist {} '{}' ({} songs, {} new)",
            self.id,
            saved.name,
            saved.songs.len(),
            ids.len()
        );
    }

    /// Updates the flags that are edited outside the session.
    pub fn set_published(&mut self, published: bool) {
        self.published = published;
    }

    pub fn set_listens(&mut self, listens: i64) {
        self.listens = listens;
    }

    fn process(&mut self, transaction: SongTransaction) {
        // Processing drops any undone transactions, after which the saved
        // position no longer denotes the saved state.
        if self
            .saved_position
            .is_some_and(|saved| saved > self.history.position())
        {
            self.saved_position = None;
        }

        self.history.process(transaction, &mut self.songs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(id: i64, title: &str) -> Song {
        Song {
            id: SongId(id),
            title: title.to_string(),
            artist: "Artist".to_string(),
            year: None,
            media_ref: String::new(),
        }
    }

    fn playlist(songs: Vec<Song>) -> Playlist {
        Playlist {
            id: PlaylistId(1),
            name: "Mix".to_string(),
            owner: "ann".to_string(),
            published: false,
            listens: 0,
            songs,
        }
    }

    fn ids(session: &EditSession) -> Vec<i64> {
        session.songs().iter().map(|s| s.id.0).collect()
    }

    #[test]
    fn test_open_session_is_unmodified() {
        let session = EditSession::open(playlist(vec![song(1, "A")]));

        assert!(!session.is_modified());
        assert!(!session.can_undo());
        assert!(!session.can_redo());
        assert_eq!(session.name(), "Mix");
    }

    #[test]
    fn test_duplicate_allocates_pending_ids() {
        let mut session = EditSession::open(playlist(vec![song(1, "A"), song(2, "B")]));

        let first = session.duplicate_song(SongId(2)).unwrap();
        let second = session.duplicate_song(SongId(2)).unwrap();

        assert_eq!(first, SongId(-1));
        assert_eq!(second, SongId(-2));
        assert!(first.is_pending());
        assert_eq!(ids(&session), vec![1, 2, -1, -2]);
        assert_eq!(session.song(second).unwrap().title, "B (2)");
    }

    #[test]
    fn test_pending_ids_start_below_existing() {
        let mut ids = PendingIds::below(&[song(3, "A"), song(-4, "B")]);

        assert_eq!(ids.allocate_song_id(), SongId(-5));
        assert_eq!(ids.allocate_song_id(), SongId(-6));
    }

    #[test]
    fn test_unknown_song_is_rejected_without_history() {
        let mut session = EditSession::open(playlist(vec![song(1, "A")]));

        assert_eq!(session.remove_song(SongId(9)), Err(SessionError::SongNotFound(SongId(9))));
        assert_eq!(
            session.duplicate_song(SongId(9)),
            Err(SessionError::SongNotFound(SongId(9)))
        );
        assert!(!session.can_undo());
    }

    #[test]
    fn test_add_rejects_song_already_present() {
        let mut session = EditSession::open(playlist(vec![song(1, "A")]));

        assert_eq!(
            session.add_song(song(1, "A")),
            Err(SessionError::SongAlreadyPresent(SongId(1)))
        );
        session.add_song(song(2, "B")).unwrap();
        assert_eq!(ids(&session), vec![1, 2]);
    }

    #[test]
    fn test_move_to_same_position_records_nothing() {
        let mut session = EditSession::open(playlist(vec![song(1, "A"), song(2, "B")]));

        session.move_song(SongId(2), 5).unwrap();
        assert!(!session.can_undo());

        session.move_song(SongId(2), 0).unwrap();
        assert_eq!(ids(&session), vec![2, 1]);
        assert_eq!(session.undo().unwrap(), "Move 'B'");
        assert_eq!(ids(&session), vec![1, 2]);
    }

    #[test]
    fn test_undo_back_to_open_state_is_unmodified() {
        let mut session = EditSession::open(playlist(vec![song(1, "A"), song(2, "B")]));

        session.remove_song(SongId(1)).unwrap();
        assert!(session.is_modified());

        session.undo().unwrap();
        assert!(!session.is_modified());

        session.redo().unwrap();
        assert!(session.is_modified());
    }

    #[test]
    fn test_edit_after_undoing_past_save_stays_modified() {
        let mut session = EditSession::open(playlist(vec![song(1, "A"), song(2, "B")]));
        session.remove_song(SongId(1)).unwrap();
        let saved = session.snapshot();
        session.mark_saved(&saved, &HashMap::new());
        assert!(!session.is_modified());

        session.undo().unwrap();
        session.remove_song(SongId(2)).unwrap();
        session.undo().unwrap();

        assert_eq!(ids(&session), vec![1, 2]);
        assert!(session.is_modified());
    }

    #[test]
    fn test_empty_history_signals() {
        let mut session = EditSession::open(playlist(vec![song(1, "A")]));

        assert_eq!(
            session.undo(),
            Err(SessionError::Transaction(TransactionError::NothingToUndo))
        );
        assert_eq!(
            session.redo(),
            Err(SessionError::Transaction(TransactionError::NothingToRedo))
        );
        assert_eq!(ids(&session), vec![1]);
    }

    #[test]
    fn test_rename_is_not_undoable() {
        let mut session = EditSession::open(playlist(vec![]));

        session.rename("  Road Trip ").unwrap();
        assert_eq!(session.name(), "Road Trip");
        assert!(session.is_modified());
        assert!(!session.can_undo());

        assert_eq!(session.rename("   "), Err(SessionError::InvalidName));
        assert_eq!(session.name(), "Road Trip");
    }

    #[test]
    fn test_mark_saved_rebinds_pending_ids() {
        let mut session = EditSession::open(playlist(vec![song(1, "A")]));
        let copy = session.duplicate_song(SongId(1)).unwrap();

        let mut saved = session.snapshot();
        saved.songs[1].id = SongId(10);
        session.mark_saved(&saved, &HashMap::from([(copy, SongId(10))]));

        assert_eq!(ids(&session), vec![1, 10]);
        assert!(!session.is_modified());

        session.undo().unwrap();
        assert_eq!(ids(&session), vec![1]);

        session.redo().unwrap();
        assert_eq!(ids(&session), vec![1, 10]);
    }

    #[test]
    fn test_mark_saved_with_stale_snapshot_stays_modified() {
        let mut session = EditSession::open(playlist(vec![song(1, "A"), song(2, "B")]));
        session.remove_song(SongId(2)).unwrap();
        let saved = session.snapshot();

        session.undo().unwrap();
        session.mark_saved(&saved, &HashMap::new());

        assert!(session.is_modified());
    }
}
