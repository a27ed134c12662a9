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

//! Song catalog search results.

mod event;
mod render;

use ratatui::widgets::TableState;

use playlister::model::{Song, SongId};

pub(crate) use event::CatalogAction;

use crate::components::clamp_index;

pub(crate) struct CatalogView {
    pub(crate) query: String,
    pub(crate) songs: Vec<Song>,
    pub(crate) table_state: TableState,
}

impl CatalogView {
    pub(crate) fn new() -> Self {
        Self {
            query: String::new(),
            songs: vec![],
            table_state: TableState::default(),
        }
    }

    pub(crate) fn set_results(&mut self, query: &str, songs: Vec<Song>) {
        self.query = query.to_string();
        self.songs = songs;
        self.table_state.select(clamp_index(None, self.songs.len()));
    }

    pub(crate) fn selected_id(&self) -> Option<SongId> {
        self.songs.get(self.table_state.selected()?).map(|s| s.id)
    }
}
