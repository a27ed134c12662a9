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

//! Key handling for the playlist editor.
//!
//! Navigation is handled directly, edits are returned as actions so the
//! application can report their outcome in the status line.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::components::{EditorView, next_index, previous_index};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EditorAction {
    Duplicate,
    Remove,
    MoveDown,
    MoveUp,
    Undo,
    Redo,
    PlaySong,
    PlayPlaylist,
    Save,
}

impl EditorView {
    pub(crate) fn process_key(&mut self, key: KeyEvent) -> Option<EditorAction> {
        self.session.as_ref()?;

        let len = self.songs().len();

        match (key.code, key.modifiers) {
            (KeyCode::Char('r'), KeyModifiers::CONTROL) => return Some(EditorAction::Redo),

            (KeyCode::Char('j'), _) | (KeyCode::Down, KeyModifiers::NONE) => {
                self.table_state
                    .select(next_index(self.table_state.selected(), len));
            }
            (KeyCode::Char('k'), _) | (KeyCode::Up, KeyModifiers::NONE) => {
                self.table_state
                    .select(previous_index(self.table_state.selected(), len));
            }
            (KeyCode::Char('g'), _) | (KeyCode::Home, _) if len > 0 => {
                self.table_state.select(Some(0));
            }
            (KeyCode::Char('G'), _) | (KeyCode::End, _) if len > 0 => {
                self.table_state.select(Some(len - 1));
            }

            (KeyCode::Char('J'), _) | (KeyCode::Down, KeyModifiers::SHIFT) => {
                return Some(EditorAction::MoveDown);
            }
            (KeyCode::Char('K'), _) | (KeyCode::Up, KeyModifiers::SHIFT) => {
                return Some(EditorAction::MoveUp);
            }

            (KeyCode::Char('d'), _) => return Some(EditorAction::Duplicate),
            (KeyCode::Char('x'), _) | (KeyCode::Delete, _) => return Some(EditorAction::Remove),
            (KeyCode::Char('u'), _) => return Some(EditorAction::Undo),
            (KeyCode::Char('p'), _) | (KeyCode::Enter, _) => return Some(EditorAction::PlaySong),
            (KeyCode::Char('P'), _) => return Some(EditorAction::PlayPlaylist),
            (KeyCode::Char('w'), _) => return Some(EditorAction::Save),

            _ => {}
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use playlister::model::{Playlist, PlaylistId};

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_no_actions_without_session() {
        let mut editor = EditorView::new();

        assert_eq!(editor.process_key(key(KeyCode::Char('d'))), None);
    }

    #[test]
    fn test_edit_keys() {
        let mut editor = EditorView::new();
        editor.open(Playlist {
            id: PlaylistId(1),
            name: "Mix".to_string(),
            owner: "me".to_string(),
            published: false,
            listens: 0,
            songs: vec![],
        });

        assert_eq!(editor.process_key(key(KeyCode::Char('d'))), Some(EditorAction::Duplicate));
        assert_eq!(editor.process_key(key(KeyCode::Char('x'))), Some(EditorAction::Remove));
        assert_eq!(editor.process_key(key(KeyCode::Char('J'))), Some(EditorAction::MoveDown));
        assert_eq!(editor.process_key(key(KeyCode::Char('u'))), Some(EditorAction::Undo));
        assert_eq!(
            editor.process_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL)),
            Some(EditorAction::Redo)
        );
        assert_eq!(editor.process_key(key(KeyCode::Char('j'))), None);
    }
}
