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

//! Editing sessions saved to, and reopened from, a real database file.

use rusqlite::Connection;
use tempfile::TempDir;

use playlister::{
    db,
    model::{NewSong, PlaylistId, Song, SongId},
    session::EditSession,
};

fn open_test_db() -> (TempDir, Connection) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("playlists.db");
    let conn = db::init_db(path.to_str().unwrap()).expect("Failed to open database");
    (dir, conn)
}

fn add_song(conn: &Connection, title: &str, artist: &str) -> Song {
    db::create_song(
        conn,
        &NewSong {
            title: title.to_string(),
            artist: artist.to_string(),
            year: None,
            media_ref: format!("file:///music/{}.flac", title),
        },
    )
    .unwrap()
}

/// A playlist with "Heroes" and "Changes", opened for editing.
fn open_session(conn: &mut Connection) -> (PlaylistId, EditSession) {
    let heroes = add_song(conn, "Heroes", "David Bowie");
    let changes = add_song(conn, "Changes", "David Bowie");
    let id = db::create_playlist(conn, "Bowie", "me").unwrap();

    let mut session = EditSession::open(db::fetch_playlist(conn, id).unwrap());
    session.add_song(heroes).unwrap();
    session.add_song(changes).unwrap();
    save(conn, &mut session);

    let session = EditSession::open(db::fetch_playlist(conn, id).unwrap());
    (id, session)
}

fn save(conn: &mut Connection, session: &mut EditSession) {
    let saved = db::save_playlist(conn, &session.snapshot()).unwrap();
    session.mark_saved(&saved.playlist, &saved.ids);
}

fn titles(songs: &[Song]) -> Vec<&str> {
    songs.iter().map(|s| s.title.as_str()).collect()
}

#[test]
fn saved_order_survives_reopening() {
    let (_dir, mut conn) = open_test_db();
    let (id, mut session) = open_session(&mut conn);

    let changes = session.songs()[1].id;
    session.move_song(changes, 0).unwrap();
    session.duplicate_song(changes).unwrap();
    save(&mut conn, &mut session);

    let reopened = db::fetch_playlist(&conn, id).unwrap();
    assert_eq!(titles(&reopened.songs), ["Changes", "Heroes", "Changes (1)"]);
    assert_eq!(reopened.songs, session.songs());
    assert!(!session.is_modified());
}

#[test]
fn pending_ids_are_replaced_on_save() {
    let (_dir, mut conn) = open_test_db();
    let (_id, mut session) = open_session(&mut conn);

    let heroes = session.songs()[0].id;
    let copy = session.duplicate_song(heroes).unwrap();
    assert!(copy.is_pending());

    save(&mut conn, &mut session);

    assert!(session.songs().iter().all(|s| !s.id.is_pending()));
    assert!(session.song(copy).is_none());

    let stored = session.songs()[2].clone();
    assert_eq!(db::fetch_song(&conn, stored.id).unwrap(), stored);
}

#[test]
fn duplicate_can_be_undone_after_save() {
    let (_dir, mut conn) = open_test_db();
    let (id, mut session) = open_session(&mut conn);

    let heroes = session.songs()[0].id;
    session.duplicate_song(heroes).unwrap();
    save(&mut conn, &mut session);

    assert_eq!(session.undo().unwrap(), "Duplicate 'Heroes (1)'");
    assert_eq!(titles(session.songs()), ["Heroes", "Changes"]);
    assert!(session.is_modified());

    save(&mut conn, &mut session);
    let reopened = db::fetch_playlist(&conn, id).unwrap();
    assert_eq!(titles(&reopened.songs), ["Heroes", "Changes"]);

    // Redo brings back the copy under its stored id, it is not stored again.
    session.redo().unwrap();
    assert!(session.songs().iter().all(|s| !s.id.is_pending()));
    save(&mut conn, &mut session);
    assert_eq!(db::search_songs(&conn, &Default::default()).unwrap().len(), 3);
}

#[test]
fn removed_song_is_restored_in_place_after_save() {
    let (_dir, mut conn) = open_test_db();
    let (id, mut session) = open_session(&mut conn);

    session.remove_song(session.songs()[0].id).unwrap();
    save(&mut conn, &mut session);
    assert_eq!(titles(&db::fetch_playlist(&conn, id).unwrap().songs), ["Changes"]);

    session.undo().unwrap();
    save(&mut conn, &mut session);
    assert_eq!(
        titles(&db::fetch_playlist(&conn, id).unwrap().songs),
        ["Heroes", "Changes"]
    );
}

#[test]
fn rename_is_saved_but_not_undoable() {
    let (_dir, mut conn) = open_test_db();
    let (id, mut session) = open_session(&mut conn);

    session.rename("  Best of Bowie ").unwrap();
    assert!(session.is_modified());
    assert!(!session.can_undo());

    save(&mut conn, &mut session);

    assert_eq!(db::fetch_playlist(&conn, id).unwrap().name, "Best of Bowie");
    assert!(!session.is_modified());
}

#[test]
fn listens_and_play_counts_increment() {
    let (_dir, mut conn) = open_test_db();
    let (id, session) = open_session(&mut conn);

    assert_eq!(db::increment_listens(&conn, id).unwrap(), 1);
    assert_eq!(db::increment_listens(&conn, id).unwrap(), 2);

    let heroes = session.songs()[0].id;
    db::increment_play_count(&conn, heroes).unwrap();
    db::increment_play_count(&conn, heroes).unwrap();
    assert_eq!(db::fetch_play_count(&conn, heroes).unwrap(), 2);
    assert_eq!(db::fetch_play_count(&conn, SongId(999)).unwrap(), 0);
}
