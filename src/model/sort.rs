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

//! Ordering and filtering of playlist listings.

use std::{cmp::Ordering, str::FromStr};

use crate::model::PlaylistSummary;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaylistSort {
    #[default]
    Name,
    Newest,
    Oldest,
    Listens,
    Songs,
}

impl FromStr for PlaylistSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "newest" | "new" => Ok(Self::Newest),
            "oldest" | "old" => Ok(Self::Oldest),
            "listens" | "plays" => Ok(Self::Listens),
            "songs" => Ok(Self::Songs),
            other => Err(format!("Unknown sort key: {}", other)),
        }
    }
}

/// Sorts playlist summaries in place.
///
/// The sort is stable. Ties on the primary key fall back to a
/// case-insensitive comparison of the names, so equal listen counts still
/// produce a predictable order.
pub fn sort_playlists(playlists: &mut [PlaylistSummary], sort: PlaylistSort) {
    playlists.sort_by(|a, b| {
        let primary = match sort {
            PlaylistSort::Name => Ordering::Equal,
            PlaylistSort::Newest => b.created_at.cmp(&a.created_at),
            PlaylistSort::Oldest => a.created_at.cmp(&b.created_at),
            PlaylistSort::Listens => b.listens.cmp(&a.listens),
            PlaylistSort::Songs => b.song_count.cmp(&a.song_count),
        };

        primary.then_with(|| compare_names(&a.name, &b.name))
    });
}

/// Returns the playlists whose name or owner contains `text`, ignoring case.
///
/// Blank text matches everything.
pub fn filter_playlists(playlists: &[PlaylistSummary], text: &str) -> Vec<PlaylistSummary> {
    let needle = text.trim().to_lowercase();
    if needle.is_empty() {
        return playlists.to_vec();
    }

    playlists
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle) || p.owner.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PlaylistId;

    fn summary(id: i64, name: &str, owner: &str, listens: i64, songs: i64) -> PlaylistSummary {
        PlaylistSummary {
            id: PlaylistId(id),
            name: name.to_string(),
            owner: owner.to_string(),
            published: false,
            listens,
            song_count: songs,
            created_at: 1_700_000_000 + id,
        }
    }

    fn names(playlists: &[PlaylistSummary]) -> Vec<&str> {
        playlists.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_sort_by_name_ignores_case() {
        let mut list = vec![
            summary(1, "zebra", "ann", 0, 0),
            summary(2, "Apple", "ann", 0, 0),
            summary(3, "mango", "ann", 0, 0),
        ];

        sort_playlists(&mut list, PlaylistSort::Name);

        assert_eq!(names(&list), vec!["Apple", "mango", "zebra"]);
    }

    #[test]
    fn test_sort_by_listens_breaks_ties_on_name() {
        let mut list = vec![
            summary(1, "b", "ann", 5, 0),
            summary(2, "a", "ann", 5, 0),
            summary(3, "c", "ann", 9, 0),
        ];

        sort_playlists(&mut list, PlaylistSort::Listens);

        assert_eq!(names(&list), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_sort_by_creation() {
        let mut list = vec![
            summary(2, "second", "ann", 0, 0),
            summary(1, "first", "ann", 0, 0),
            summary(3, "third", "ann", 0, 0),
        ];

        sort_playlists(&mut list, PlaylistSort::Newest);
        assert_eq!(names(&list), vec!["third", "second", "first"]);

        sort_playlists(&mut list, PlaylistSort::Oldest);
        assert_eq!(names(&list), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_sort_by_song_count() {
        let mut list = vec![summary(1, "short", "ann", 0, 2), summary(2, "long", "ann", 0, 20)];

        sort_playlists(&mut list, PlaylistSort::Songs);

        assert_eq!(names(&list), vec!["long", "short"]);
    }

    #[test]
    fn test_filter_matches_name_or_owner() {
        let list = vec![
            summary(1, "Road Trip", "ann", 0, 0),
            summary(2, "Focus", "bob", 0, 0),
            summary(3, "Late Night", "Tripper", 0, 0),
        ];

        assert_eq!(names(&filter_playlists(&list, "TRIP")), vec!["Road Trip", "Late Night"]);
        assert_eq!(filter_playlists(&list, "   ").len(), 3);
        assert!(filter_playlists(&list, "jazz").is_empty());
    }

    #[test]
    fn test_parse_sort_key() {
        assert_eq!("Listens".parse::<PlaylistSort>(), Ok(PlaylistSort::Listens));
        assert_eq!("new".parse::<PlaylistSort>(), Ok(PlaylistSort::Newest));
        assert!("shuffle".parse::<PlaylistSort>().is_err());
    }
}
