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

//! Renders the playlist library as a table of summaries.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::{
    components::LibraryView,
    render::Render,
    theme::Theme,
    util::format::format_count,
};

impl Render for LibraryView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = self.visible.iter().map(|p| {
            let published = if p.published { "*" } else { "" };

            Row::new(vec![
                Cell::from(Line::from(published).style(Style::default().fg(theme.accent_colour))),
                Cell::from(Line::from(p.name.as_str()).style(Style::default().fg(theme.table_title_fg))),
                Cell::from(Line::from(p.owner.as_str()).style(Style::default().fg(theme.table_artist_fg))),
                Cell::from(
                    Line::from(format_count(p.song_count, "song", "songs"))
                        .style(Style::default().fg(theme.table_year_fg))
                        .alignment(Alignment::Right),
                ),
                Cell::from(
                    Line::from(format_count(p.listens, "listen", "listens"))
                        .style(Style::default().fg(theme.table_year_fg))
                        .alignment(Alignment::Right),
                ),
            ])
        });

        let mut title = format!(" Playlists ({:?}) ", self.sort);
        if !self.filter.is_empty() {
            title = format!(" Playlists ({:?}, matching '{}') ", self.sort, self.filter);
        }

        let table = Table::new(
            rows,
            [
                Constraint::Length(1),
                Constraint::Percentage(45),
                Constraint::Percentage(25),
                Constraint::Length(12),
                Constraint::Length(14),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from(""),
                Cell::from("Name"),
                Cell::from("Owner"),
                Cell::from(Line::from("Songs").alignment(Alignment::Right)),
                Cell::from(Line::from("Listens").alignment(Alignment::Right)),
            ])
            .style(Style::default().add_modifier(Modifier::BOLD).fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(theme.highlight_colour))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_colour))
                .title(title),
        );

        f.render_stateful_widget(table, area, &mut self.table_state);
    }
}
