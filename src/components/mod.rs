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

//! Interactive views and their state.
//!
//! Each view keeps its own persistent state, translates key events into a
//! view-specific action, and renders itself. Acting on those actions is left
//! to the application event handlers, which own the channels and the other
//! views.
//!
//! * [`library`]: the list of stored playlists.
//! * [`editor`]: the open playlist and its edit history.
//! * [`catalog`]: song search results to add from.

mod catalog;
mod editor;
mod library;

pub(crate) use catalog::{CatalogAction, CatalogView};
pub(crate) use editor::{EditorAction, EditorView};
pub(crate) use library::{LibraryAction, LibraryView};

/// Index after `selected`, wrapping to the first row.
pub(crate) fn next_index(selected: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }

    Some(match selected {
        Some(i) if i + 1 < len => i + 1,
        _ => 0,
    })
}

/// Index before `selected`, wrapping to the last row.
pub(crate) fn previous_index(selected: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }

    Some(match selected {
        None => 0,
        Some(i) if i > 0 && i < len => i - 1,
        Some(_) => len - 1,
    })
}

/// Keeps `selected` within a list of `len` rows.
pub(crate) fn clamp_index(selected: Option<usize>, len: usize) -> Option<usize> {
    match (selected, len) {
        (_, 0) => None,
        (Some(i), len) => Some(i.min(len - 1)),
        (None, _) => Some(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps() {
        assert_eq!(next_index(None, 3), Some(0));
        assert_eq!(next_index(Some(0), 3), Some(1));
        assert_eq!(next_index(Some(2), 3), Some(0));
        assert_eq!(next_index(Some(0), 0), None);
    }

    #[test]
    fn test_previous_wraps() {
        assert_eq!(previous_index(None, 3), Some(0));
        assert_eq!(previous_index(Some(2), 3), Some(1));
        assert_eq!(previous_index(Some(0), 3), Some(2));
        assert_eq!(previous_index(Some(7), 3), Some(2));
        assert_eq!(previous_index(None, 0), None);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp_index(Some(4), 2), Some(1));
        assert_eq!(clamp_index(Some(1), 2), Some(1));
        assert_eq!(clamp_index(None, 2), Some(0));
        assert_eq!(clamp_index(Some(1), 0), None);
    }
}
