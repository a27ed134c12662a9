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

//! Command-line input logic and state management.
//!
//! This module implements a command-line component: a text input that is
//! opened with `:`, and which on `Enter` parses the buffer into a
//! [`UserCommand`] and dispatches it as an application event.

use std::sync::mpsc::Sender;

use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

use playlister::model::{NewSong, SongId, sort::PlaylistSort};

use crate::{MainView, events::AppEvent};

/// A parsed command-line command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum UserCommand {
    Quit { force: bool },
    Save,
    SaveAndQuit,

    New(String),
    Rename(String),
    Copy,
    Delete,
    Publish(bool),
    Close { force: bool },

    Undo,
    Redo,

    Sort(PlaylistSort),
    Find(String),
    Search(String),
    AddSong(SongId),
    CreateSong(NewSong),

    Owner(String),

    View(MainView),
}

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Handles a terminal event, returning `true` if the commander consumed
    /// it.
    pub(crate) fn handle_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> bool {
        let Event::Key(key_event) = event else {
            return false;
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return true;
            }
            return false;
        }

        match key_event.code {
            KeyCode::Esc => {
                self.input.reset();
                self.active = false;
            }

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                if !buffer.is_empty() {
                    let event = match parse_command(&buffer) {
                        Ok(command) => AppEvent::Command(command),
                        Err(message) => AppEvent::Error(message),
                    };
                    event_tx.send(event).ok();
                }
                self.input.reset();
                self.active = false;
            }

            _ => {
                // Delegate all other key events to the managed input component.
                self.input.handle_event(&event);
            }
        }

        true
    }
}

/// Parses a command-line buffer.
///
/// Arguments that are free text (names, search terms) are the remaining
/// words joined with single spaces. A song is given as
/// `song <title> | <artist> | <year> | <media>`, the year may be empty.
pub(crate) fn parse_command(buffer: &str) -> Result<UserCommand, String> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    let command = match parts.as_slice() {
        ["q"] | ["quit"] => UserCommand::Quit { force: false },
        ["q!"] | ["quit!"] => UserCommand::Quit { force: true },
        ["w"] | ["write"] => UserCommand::Save,
        ["wq"] => UserCommand::SaveAndQuit,

        ["new", name @ ..] => UserCommand::New(required(name, "new <name>")?),
        ["rename", name @ ..] => UserCommand::Rename(required(name, "rename <name>")?),
        ["copy"] => UserCommand::Copy,
        ["delete"] => UserCommand::Delete,
        ["publish"] => UserCommand::Publish(true),
        ["unpublish"] => UserCommand::Publish(false),
        ["close"] => UserCommand::Close { force: false },
        ["close!"] => UserCommand::Close { force: true },

        ["undo"] => UserCommand::Undo,
        ["redo"] => UserCommand::Redo,

        ["sort", key] => UserCommand::Sort(key.parse()?),
        ["sort", ..] => return Err(usage("sort name|newest|oldest|listens|songs")),
        ["find", text @ ..] => UserCommand::Find(text.join(" ")),
        ["search", text @ ..] => UserCommand::Search(required(text, "search <text>")?),

        ["add", id] => {
            let id = id
                .parse::<i64>()
                .map_err(|_| format!("Not a song id: {}", id))?;
            UserCommand::AddSong(SongId(id))
        }
        ["song", ..] => UserCommand::CreateSong(parse_song(buffer)?),

        ["owner", name @ ..] => UserCommand::Owner(required(name, "owner <name>")?),

        ["1"] => UserCommand::View(MainView::Library),
        ["2"] => UserCommand::View(MainView::Editor),
        ["3"] => UserCommand::View(MainView::Catalog),

        [] => return Err("No command".to_string()),
        [cmd, ..] => return Err(format!("Unknown command: {}", cmd)),
    };

    Ok(command)
}

fn required(words: &[&str], form: &str) -> Result<String, String> {
    if words.is_empty() {
        Err(usage(form))
    } else {
        Ok(words.join(" "))
    }
}

fn usage(form: &str) -> String {
    format!("Usage: :{}", form)
}

fn parse_song(buffer: &str) -> Result<NewSong, String> {
    const FORM: &str = "song <title> | <artist> | <year> | <media>";

    let fields = buffer
        .trim_start()
        .strip_prefix("song")
        .ok_or_else(|| usage(FORM))?;

    let fields: Vec<&str> = fields.split('|').map(str::trim).collect();
    let [title, artist, year, media_ref] = fields.as_slice() else {
        return Err(usage(FORM));
    };

    if title.is_empty() || artist.is_empty() {
        return Err(usage(FORM));
    }

    let year = match *year {
        "" => None,
        year => Some(
            year.parse::<i32>()
                .map_err(|_| format!("Not a year: {}", year))?,
        ),
    };

    Ok(NewSong {
        title: title.to_string(),
        artist: artist.to_string(),
        year,
        media_ref: media_ref.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_commands() {
        assert_eq!(parse_command("q"), Ok(UserCommand::Quit { force: false }));
        assert_eq!(parse_command("q!"), Ok(UserCommand::Quit { force: true }));
        assert_eq!(parse_command("w"), Ok(UserCommand::Save));
        assert_eq!(parse_command("copy"), Ok(UserCommand::Copy));
        assert_eq!(parse_command("unpublish"), Ok(UserCommand::Publish(false)));
        assert_eq!(parse_command("close!"), Ok(UserCommand::Close { force: true }));
        assert_eq!(parse_command("2"), Ok(UserCommand::View(MainView::Editor)));
    }

    #[test]
    fn test_names_are_joined() {
        assert_eq!(
            parse_command("new  Road   Trip "),
            Ok(UserCommand::New("Road Trip".to_string()))
        );
        assert_eq!(
            parse_command("rename Summer 99"),
            Ok(UserCommand::Rename("Summer 99".to_string()))
        );
    }

    #[test]
    fn test_missing_argument_is_usage_error() {
        assert_eq!(parse_command("new"), Err("Usage: :new <name>".to_string()));
        assert!(parse_command("search").is_err());
        assert!(parse_command("sort").is_err());
    }

    #[test]
    fn test_find_without_text_clears_filter() {
        assert_eq!(parse_command("find"), Ok(UserCommand::Find(String::new())));
    }

    #[test]
    fn test_sort_key() {
        assert_eq!(
            parse_command("sort listens"),
            Ok(UserCommand::Sort(PlaylistSort::Listens))
        );
        assert!(parse_command("sort sideways").is_err());
    }

    #[test]
    fn test_add_song_by_id() {
        assert_eq!(parse_command("add 42"), Ok(UserCommand::AddSong(SongId(42))));
        assert!(parse_command("add forty").is_err());
    }

    #[test]
    fn test_song_fields() {
        let command = parse_command("song Heroes | David Bowie | 1977 | file:///music/heroes.flac");

        assert_eq!(
            command,
            Ok(UserCommand::CreateSong(NewSong {
                title: "Heroes".to_string(),
                artist: "David Bowie".to_string(),
                year: Some(1977),
                media_ref: "file:///music/heroes.flac".to_string(),
            }))
        );
    }

    #[test]
    fn test_song_without_year() {
        let Ok(UserCommand::CreateSong(song)) = parse_command("song Intro | Unknown |  | ") else {
            panic!("expected a song");
        };

        assert_eq!(song.year, None);
        assert_eq!(song.media_ref, "");
    }

    #[test]
    fn test_song_errors() {
        assert!(parse_command("song Heroes | David Bowie").is_err());
        assert!(parse_command("song Heroes | David Bowie | soon | x").is_err());
        assert!(parse_command("song  | David Bowie | 1977 | x").is_err());
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(parse_command("dance"), Err("Unknown command: dance".to_string()));
    }
}
