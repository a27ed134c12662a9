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

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::{components::CatalogView, render::Render, theme::Theme, util::format::format_year};

impl Render for CatalogView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = self.songs.iter().map(|song| {
            Row::new(vec![
                Cell::from(Line::from(song.id.to_string()).alignment(Alignment::Right).style(Style::default().fg(theme.table_year_fg))),
                Cell::from(Line::from(song.artist.as_str()).style(Style::default().fg(theme.table_artist_fg))),
                Cell::from(Line::from(song.title.as_str()).style(Style::default().fg(theme.table_title_fg))),
                Cell::from(Line::from(format_year(song.year)).alignment(Alignment::Right).style(Style::default().fg(theme.table_year_fg))),
            ])
        });

        let title = if self.query.is_empty() {
            " Catalog ".to_string()
        } else {
            format!(" Catalog: '{}' ({}) ", self.query, self.songs.len())
        };

        let table = Table::new(
            rows,
            [
                Constraint::Length(6),
                Constraint::Percentage(35),
                Constraint::Percentage(55),
                Constraint::Length(5),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from(Line::from("Id").alignment(Alignment::Right)),
                Cell::from("Artist"),
                Cell::from("Title"),
                Cell::from(Line::from("Year").alignment(Alignment::Right)),
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
