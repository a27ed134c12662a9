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

/// Formats a count with the right noun, e.g. `"1 song"` or `"3 songs"`.
pub(crate) fn format_count(count: i64, singular: &str, plural: &str) -> String {
    let noun = if count == 1 { singular } else { plural };
    format!("{} {}", count, noun)
}

/// Formats an optional release year for a table cell.
pub(crate) fn format_year(year: Option<i32>) -> String {
    year.map(|y| y.to_string()).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(1, "song", "songs"), "1 song");
        assert_eq!(format_count(0, "song", "songs"), "0 songs");
        assert_eq!(format_count(12, "listen", "listens"), "12 listens");
    }

    #[test]
    fn test_format_year() {
        assert_eq!(format_year(Some(1977)), "1977");
        assert_eq!(format_year(None), "-");
    }
}
