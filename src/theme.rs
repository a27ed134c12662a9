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

//! Colours used across the views.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) highlight_colour: Color,

    pub(crate) status_bg: Color,
    pub(crate) status_fg: Color,
    pub(crate) error_fg: Color,
    pub(crate) commander_colour: Color,

    pub(crate) table_title_fg: Color,
    pub(crate) table_artist_fg: Color,
    pub(crate) table_year_fg: Color,
    pub(crate) table_media_fg: Color,
    pub(crate) table_pending_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dusk()
    }
}

impl Theme {
    /// Dark blue background, amber accents.
    pub(crate) const fn dusk() -> Self {
        Self {
            background_colour: Color::Rgb(24, 28, 40),
            accent_colour: Color::Rgb(242, 176, 53),
            border_colour: Color::Rgb(90, 96, 112),
            highlight_colour: Color::Rgb(45, 85, 150),

            status_bg: Color::Rgb(38, 44, 60),
            status_fg: Color::Rgb(200, 200, 210),
            error_fg: Color::Rgb(235, 100, 100),
            commander_colour: Color::Rgb(255, 255, 255),

            table_title_fg: Color::Rgb(255, 255, 255),
            table_artist_fg: Color::Rgb(230, 200, 90),
            table_year_fg: Color::Rgb(150, 155, 170),
            table_media_fg: Color::Rgb(120, 170, 200),
            table_pending_fg: Color::Rgb(150, 220, 150),
        }
    }
}
