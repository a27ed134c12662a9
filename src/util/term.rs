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

//! Terminal background control via OSC escape sequences.
//!
//! Most modern terminals (XTerm, iTerm2, Alacritty, Kitty) honour OSC 11 and
//! OSC 111; others silently ignore them.

use std::io::{self, Write};

use ratatui::style::Color;

/// Sets the terminal background to `colour` (OSC 11).
///
/// Non-RGB colours are left to the terminal's own palette and nothing is
/// written.
pub(crate) fn set_terminal_bg(out: &mut impl Write, colour: Color) -> io::Result<()> {
    if let Color::Rgb(r, g, b) = colour {
        write!(out, "\x1b]11;#{:02x}{:02x}{:02x}\x07", r, g, b)?;
        out.flush()?;
    }

    Ok(())
}

/// Runs `setup` on `out`, then sets the background to `colour`.
///
/// If `setup` fails the background is left alone, there will be no teardown
/// to reset it.
pub(crate) fn with_terminal_bg<W: Write, T>(
    out: &mut W,
    colour: Color,
    setup: impl FnOnce(&mut W) -> anyhow::Result<T>,
) -> anyhow::Result<T> {
    let value = setup(out)?;
    set_terminal_bg(out, colour).ok();

    Ok(value)
}

/// Restores the terminal's configured background (OSC 111).
pub(crate) fn reset_terminal_bg(out: &mut impl Write) -> io::Result<()> {
    write!(out, "\x1b]111\x07")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_background_sequence() {
        let mut out = Vec::new();
        set_terminal_bg(&mut out, Color::Rgb(24, 28, 40)).unwrap();

        assert_eq!(out, b"\x1b]11;#181c28\x07");
    }

    #[test]
    fn test_background_set_after_setup() {
        let mut out = Vec::new();

        let value = with_terminal_bg(&mut out, Color::Rgb(0, 0, 0), |out| {
            out.extend_from_slice(b"setup;");
            Ok(7)
        })
        .unwrap();

        assert_eq!(value, 7);
        assert_eq!(out, b"setup;\x1b]11;#000000\x07");
    }

    #[test]
    fn test_failed_setup_leaves_background_alone() {
        let mut out = Vec::new();

        let result: anyhow::Result<()> = with_terminal_bg(&mut out, Color::Rgb(0, 0, 0), |_| {
            anyhow::bail!("Failed to enable raw mode")
        });

        assert!(result.is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_named_colour_writes_nothing() {
        let mut out = Vec::new();
        set_terminal_bg(&mut out, Color::Blue).unwrap();

        assert!(out.is_empty());
    }
}
