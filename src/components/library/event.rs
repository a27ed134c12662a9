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

//! Key handling for the library view.

use crossterm::event::{KeyCode, KeyEvent};

use playlister::model::PlaylistId;

use crate::components::{LibraryView, next_index, previous_index};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LibraryAction {
    Open(PlaylistId),
    Play(PlaylistId),
    Reload,
}

impl LibraryView {
    /// Handles a key, returning an action for the application to carry out,
    /// if any. Navigation is handled here.
    pub(crate) fn process_key(&mut self, key: KeyEvent) -> Option<LibraryAction> {
        let len = self.visible.len();

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.table_state
                    .select(next_index(self.table_state.selected(), len));
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.table_state
                    .select(previous_index(self.table_state.selected(), len));
            }
            KeyCode::Char('g') | KeyCode::Home if len > 0 => self.table_state.select(Some(0)),
            KeyCode::Char('G') | KeyCode::End if len > 0 => self.table_state.select(Some(len - 1)),

            KeyCode::Enter | KeyCode::Char('e') => return self.selected_id().map(LibraryAction::Open),
            KeyCode::Char('p') => return self.selected_id().map(LibraryAction::Play),
            KeyCode::Char('r') => return Some(LibraryAction::Reload),

            _ => {}
        }

        None
    }
}
