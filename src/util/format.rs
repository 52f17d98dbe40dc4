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

/// Formats a position in seconds into an `M:SS` string.
///
/// Minutes are not padded and never roll over into hours, seconds are always
/// two digits. Fractional seconds are truncated.
///
/// # Arguments
///
/// * `seconds` - The position to format. Negative, `NaN` or infinite values
///   render as `0:00`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_time(65.0), "1:05");
/// assert_eq!(format_time(600.0), "10:00");
/// ```
pub(crate) fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }

    let mins = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    format!("{}:{:02}", mins, secs)
}
