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

//! Render the command-line interface.
//!
//! Shows the `:` prompt and the text being typed while the command line is
//! open, and places the terminal cursor in it.

use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

use crate::App;

pub(crate) fn draw_commander(f: &mut Frame, area: Rect, app: &App) {
    let commander = &app.commander;

    if !commander.active() {
        return;
    }

    let text = format!(":{}", commander.input.value());
    f.render_widget(
        Paragraph::new(text).style(Style::default().fg(app.theme.commander_colour)),
        area,
    );

    let cursor_x = area.x + 1 + commander.input.visual_cursor() as u16;
    f.set_cursor_position((cursor_x, area.y));
}
