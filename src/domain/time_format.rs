// SPDX-License-Identifier: MPL-2.0
//! Time-label formatting for the control bar.
//!
//! Positions and durations render as `m:ss` with zero-padded seconds.
//! Durations above an hour keep accumulating minutes (`90:00`), matching
//! the compact label layout of the control bar.

/// Formats a time in seconds as `m:ss`.
///
/// Non-finite and negative inputs render as `0:00`; a duration is
/// non-finite exactly while the media's metadata is still pending.
///
/// # Examples
///
/// ```
/// use cinebar::domain::time_format::format_time;
///
/// assert_eq!(format_time(0.0), "0:00");
/// assert_eq!(format_time(75.0), "1:15");
/// assert_eq!(format_time(f64::NAN), "0:00");
/// ```
#[must_use]
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let total = seconds.floor() as u64;
    let minutes = total / 60;
    let secs = total % 60;
    format!("{}:{:02}", minutes, secs)
}
