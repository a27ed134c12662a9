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

use crossterm::event::{KeyCode, KeyEvent};

use playlister::model::SongId;

use crate::components::{CatalogView, next_index, previous_index};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CatalogAction {
    /// Add the song to the open playlist.
    Add(SongId),
}

impl CatalogView {
    pub(crate) fn process_key(&mut self, key: KeyEvent) -> Option<CatalogAction> {
        let len = self.songs.len();

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.table_state
                    .select(next_index(self.table_state.selected(), len));
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.table_state
                    .select(previous_index(self.table_state.selected(), len));
            }
            KeyCode::Char('a') | KeyCode::Enter => return self.selected_id().map(CatalogAction::Add),
            _ => {}
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use playlister::model::Song;

    use super::*;

    #[test]
    fn test_add_selected_song() {
        let mut view = CatalogView::new();
        view.set_results(
            "heroes",
            vec![
                Song {
                    id: SongId(4),
                    title: "Heroes".to_string(),
                    artist: "David Bowie".to_string(),
                    year: Some(1977),
                    media_ref: String::new(),
                },
                Song {
                    id: SongId(9),
                    title: "Heroes".to_string(),
                    artist: "Motörhead".to_string(),
                    year: Some(2017),
                    media_ref: String::new(),
                },
            ],
        );

        view.process_key(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE));
        let action = view.process_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));

        assert_eq!(action, Some(CatalogAction::Add(SongId(9))));
    }

    #[test]
    fn test_no_results_no_action() {
        let mut view = CatalogView::new();
        view.set_results("zzz", vec![]);

        let action = view.process_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        assert_eq!(action, None);
    }
}
