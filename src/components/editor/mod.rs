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

//! Playlist editor state.
//!
//! The editor owns the [`EditSession`] of the open playlist, if any, along
//! with the table selection. Every song edit goes through the session so it
//! is recorded in the undo history; the editor only keeps the selection on
//! the song the user is working with.

mod event;
mod render;

use ratatui::widgets::TableState;

use playlister::{
    model::{Playlist, Song, SongId},
    session::{EditSession, SessionError},
};

pub(crate) use event::EditorAction;

use crate::components::clamp_index;

pub(crate) struct EditorView {
    pub(crate) session: Option<EditSession>,
    pub(crate) table_state: TableState,
}

impl EditorView {
    pub(crate) fn new() -> Self {
        Self {
            session: None,
            table_state: TableState::default(),
        }
    }

    pub(crate) fn open(&mut self, playlist: Playlist) {
        let has_songs = !playlist.songs.is_empty();
        self.session = Some(EditSession::open(playlist));
        self.table_state = TableState::default();
        if has_songs {
            self.table_state.select(Some(0));
        }
    }

    pub(crate) fn close(&mut self) -> Option<EditSession> {
        self.table_state = TableState::default();
        self.session.take()
    }

    pub(crate) fn is_modified(&self) -> bool {
        self.session.as_ref().is_some_and(EditSession::is_modified)
    }

    pub(crate) fn songs(&self) -> &[Song] {
        self.session.as_ref().map(EditSession::songs).unwrap_or_default()
    }

    pub(crate) fn selected_song(&self) -> Option<&Song> {
        self.songs().get(self.table_state.selected()?)
    }

    /// Appends a song and selects it.
    pub(crate) fn add_song(&mut self, song: Song) -> Result<(), SessionError> {
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };

        let song_id = song.id;
        session.add_song(song)?;
        self.follow(song_id);

        Ok(())
    }

    /// Duplicates the selected song and selects the copy.
    pub(crate) fn duplicate_selected(&mut self) -> Result<Option<String>, SessionError> {
        let (Some(session), Some(index)) = (self.session.as_mut(), self.table_state.selected())
        else {
            return Ok(None);
        };
        let Some(song_id) = session.songs().get(index).map(|s| s.id) else {
            return Ok(None);
        };

        let copy_id = session.duplicate_song(song_id)?;
        let title = session.song(copy_id).map(|s| s.title.clone());
        self.follow(copy_id);

        Ok(title.map(|t| format!("Added '{}'", t)))
    }

    /// Removes the selected song, keeping the selection on the same row.
    pub(crate) fn remove_selected(&mut self) -> Result<Option<String>, SessionError> {
        let Some(song) = self.selected_song().cloned() else {
            return Ok(None);
        };
        let Some(session) = self.session.as_mut() else {
            return Ok(None);
        };

        session.remove_song(song.id)?;
        self.clamp_selection();

        Ok(Some(format!("Removed '{}'", song.title)))
    }

    /// Moves the selected song `delta` rows, the selection moves with it.
    pub(crate) fn move_selected(&mut self, delta: isize) -> Result<(), SessionError> {
        let (Some(song_id), Some(index)) =
            (self.selected_song().map(|s| s.id), self.table_state.selected())
        else {
            return Ok(());
        };
        let Some(to) = index.checked_add_signed(delta) else {
            return Ok(());
        };
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };

        session.move_song(song_id, to)?;
        self.follow(song_id);

        Ok(())
    }

    pub(crate) fn undo(&mut self) -> Result<String, SessionError> {
        self.step(EditSession::undo)
    }

    pub(crate) fn redo(&mut self) -> Result<String, SessionError> {
        self.step(EditSession::redo)
    }

    fn step(
        &mut self,
        op: fn(&mut EditSession) -> Result<String, SessionError>,
    ) -> Result<String, SessionError> {
        let selected_id = self.selected_song().map(|s| s.id);
        let Some(session) = self.session.as_mut() else {
            return Ok(String::new());
        };
        let description = op(session)?;

        match selected_id {
            Some(id) if self.songs().iter().any(|s| s.id == id) => self.follow(id),
            _ => self.clamp_selection(),
        }

        Ok(description)
    }

    fn follow(&mut self, song_id: SongId) {
        if let Some(index) = self.songs().iter().position(|s| s.id == song_id) {
            self.table_state.select(Some(index));
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.songs().len();
        self.table_state
            .select(clamp_index(self.table_state.selected(), len));
    }
}
