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

//! Render the status line.
//!
//! The latest message is shown on the left. On the right the editor shows
//! what undo and redo would do next.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::{App, MainView, Status};

pub(crate) fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(48)])
        .horizontal_margin(1)
        .split(area);

    f.render_widget(
        Paragraph::new("").style(Style::default().bg(theme.status_bg)),
        area,
    );

    let (message, fg) = match &app.status {
        Some(Status::Info(message)) => (message.as_str(), theme.status_fg),
        Some(Status::Error(message)) => (message.as_str(), theme.error_fg),
        None => ("", theme.status_fg),
    };
    f.render_widget(
        Paragraph::new(message).style(Style::default().fg(fg).bg(theme.status_bg)),
        chunks[0],
    );

    if app.main_view != MainView::Editor {
        return;
    }

    if let Some(session) = app.editor.session.as_ref() {
        let undo = session.undo_description().unwrap_or_else(|| "-".to_string());
        let redo = session.redo_description().unwrap_or_else(|| "-".to_string());
        f.render_widget(
            Paragraph::new(format!("u: {}  ^r: {}", undo, redo))
                .alignment(Alignment::Right)
                .style(Style::default().fg(theme.status_fg).bg(theme.status_bg)),
            chunks[1],
        );
    }
}
