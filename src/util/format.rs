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

/// Formats an optional publication year for display.
///
/// Records without a usable year show a dash.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_year(Some(1965)), "1965");
/// assert_eq!(format_year(None), "-");
/// ```
pub(crate) fn format_year(year: Option<i32>) -> String {
    match year {
        Some(year) => year.to_string(),
        None => "-".to_string(),
    }
}
