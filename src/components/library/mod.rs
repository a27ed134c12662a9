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

//! Playlist library state.
//!
//! Holds every stored playlist summary and derives the visible rows from the
//! current filter text and sort order. The selection follows the selected
//! playlist across reloads and re-sorts.

mod event;
mod render;

use ratatui::widgets::TableState;

use playlister::model::{
    PlaylistId, PlaylistSummary,
    sort::{PlaylistSort, filter_playlists, sort_playlists},
};

pub(crate) use event::LibraryAction;

pub(crate) struct LibraryView {
    playlists: Vec<PlaylistSummary>,
    pub(crate) visible: Vec<PlaylistSummary>,
    pub(crate) sort: PlaylistSort,
    pub(crate) filter: String,
    pub(crate) table_state: TableState,
}

impl LibraryView {
    pub(crate) fn new() -> Self {
        Self {
            playlists: vec![],
            visible: vec![],
            sort: PlaylistSort::default(),
            filter: String::new(),
            table_state: TableState::default(),
        }
    }

    pub(crate) fn set_playlists(&mut self, playlists: Vec<PlaylistSummary>) {
        self.playlists = playlists;
        self.refresh();
    }

    pub(crate) fn set_sort(&mut self, sort: PlaylistSort) {
        self.sort = sort;
        self.refresh();
    }

    pub(crate) fn set_filter(&mut self, filter: &str) {
        self.filter = filter.trim().to_string();
        self.refresh();
    }

    pub(crate) fn selected(&self) -> Option<&PlaylistSummary> {
        self.visible.get(self.table_state.selected()?)
    }

    pub(crate) fn selected_id(&self) -> Option<PlaylistId> {
        self.selected().map(|p| p.id)
    }

    pub(crate) fn select(&mut self, playlist_id: PlaylistId) {
        if let Some(index) = self.visible.iter().position(|p| p.id == playlist_id) {
            self.table_state.select(Some(index));
        }
    }

    fn refresh(&mut self) {
        let selected_id = self.selected_id();

        let mut visible = filter_playlists(&self.playlists, &self.filter);
        sort_playlists(&mut visible, self.sort);
        self.visible = visible;

        let index = selected_id
            .and_then(|id| self.visible.iter().position(|p| p.id == id))
            .or(self.table_state.selected());
        self.table_state
            .select(super::clamp_index(index, self.visible.len()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: i64, name: &str, listens: i64) -> PlaylistSummary {
        PlaylistSummary {
            id: PlaylistId(id),
            name: name.to_string(),
            owner: "me".to_string(),
            published: false,
            listens,
            song_count: 0,
            created_at: id,
        }
    }

    #[test]
    fn test_selection_follows_playlist_across_sort() {
        let mut view = LibraryView::new();
        view.set_playlists(vec![summary(1, "Alpha", 5), summary(2, "Beta", 50)]);
        view.select(PlaylistId(1));

        view.set_sort(PlaylistSort::Listens);

        assert_eq!(view.visible[0].id, PlaylistId(2));
        assert_eq!(view.selected_id(), Some(PlaylistId(1)));
    }

    #[test]
    fn test_filter_hides_rows_and_clamps_selection() {
        let mut view = LibraryView::new();
        view.set_playlists(vec![
            summary(1, "Road Trip", 0),
            summary(2, "Workout", 0),
            summary(3, "Roadhouse Blues", 0),
        ]);
        view.select(PlaylistId(2));

        view.set_filter("road");

        assert_eq!(view.visible.len(), 2);
        assert!(view.selected().is_some());

        view.set_filter("");
        assert_eq!(view.visible.len(), 3);
    }

    #[test]
    fn test_empty_library_has_no_selection() {
        let mut view = LibraryView::new();
        view.set_playlists(vec![]);

        assert_eq!(view.selected_id(), None);
    }
}
