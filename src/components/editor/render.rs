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

//! UI rendering logic for the playlist editor.
//!
//! Songs that have not been stored yet (duplicates made in this session) are
//! marked in the first column.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::{
    components::EditorView,
    render::Render,
    theme::Theme,
    util::format::{format_count, format_year},
};

impl Render for EditorView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_colour));

        let Some(session) = self.session.as_ref() else {
            let hint =
                Paragraph::new("No playlist open. Pick one in the library (1) or :new <name>")
                    .style(Style::default().fg(theme.table_year_fg))
                    .block(block.title(" Editor "));
            f.render_widget(hint, area);
            return;
        };

        let modified = if session.is_modified() { " [+]" } else { "" };
        let published = if session.published() { ", published" } else { "" };
        let title = format!(
            " {}{} ({}, {}{}) ",
            session.name(),
            modified,
            format_count(session.songs().len() as i64, "song", "songs"),
            format_count(session.listens(), "listen", "listens"),
            published,
        );

        let rows = session.songs().iter().enumerate().map(|(i, song)| {
            let pending = if song.id.is_pending() {
                Line::from("+").style(Style::default().fg(theme.table_pending_fg))
            } else {
                Line::from("")
            };

            Row::new(vec![
                Cell::from(
                    Line::from(format!("{}", i + 1))
                        .alignment(Alignment::Right)
                        .style(Style::default().fg(theme.table_year_fg)),
                ),
                Cell::from(pending),
                Cell::from(
                    Line::from(song.title.as_str()).style(Style::default().fg(theme.table_title_fg)),
                ),
                Cell::from(
                    Line::from(song.artist.as_str())
                        .style(Style::default().fg(theme.table_artist_fg)),
                ),
                Cell::from(
                    Line::from(format_year(song.year))
                        .alignment(Alignment::Right)
                        .style(Style::default().fg(theme.table_year_fg)),
                ),
                Cell::from(
                    Line::from(song.media_ref.as_str())
                        .style(Style::default().fg(theme.table_media_fg)),
                ),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(4),
                Constraint::Length(1),
                Constraint::Percentage(35),
                Constraint::Percentage(25),
                Constraint::Length(5),
                Constraint::Percentage(40),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from(Line::from("#").alignment(Alignment::Right)),
                Cell::from(""),
                Cell::from("Title"),
                Cell::from("Artist"),
                Cell::from(Line::from("Year").alignment(Alignment::Right)),
                Cell::from("Media"),
            ])
            .style(Style::default().add_modifier(Modifier::BOLD).fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(theme.highlight_colour))
        .block(block.title(title));

        f.render_stateful_widget(table, area, &mut self.table_state);
    }
}
