// Copyright 2026 the Cuebar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clock and rate labels.

use alloc::format;
use alloc::string::String;

/// Formats `seconds` as `MM:SS`.
///
/// Minutes are zero-padded to two digits but not capped, seconds are floored.
/// Non-finite or negative input renders as `00:00`.
#[must_use]
pub fn format_clock(seconds: f64) -> String {
    let whole = whole_seconds(seconds);
    format!("{:02}:{:02}", whole / 60, whole % 60)
}

/// Formats a `current / total` pair, e.g. `01:05 / 02:30`.
#[must_use]
pub fn format_clock_pair(current: f64, total: f64) -> String {
    format!("{} / {}", format_clock(current), format_clock(total))
}

/// Formats a playback rate with two decimals and an `x` suffix.
#[must_use]
pub fn format_rate(rate: f64) -> String {
    format!("{rate:.2}x")
}

fn whole_seconds(seconds: f64) -> u64 {
    if !seconds.is_finite() || seconds <= 0.0 {
        return 0;
    }
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "positive finite media time; truncation is the intended floor"
    )]
    let whole = seconds as u64;
    whole
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_pads_and_floors() {
        assert_eq!(format_clock(0.0), "00:00");
        assert_eq!(format_clock(5.9), "00:05");
        assert_eq!(format_clock(65.2), "01:05");
        assert_eq!(format_clock(600.0), "10:00");
        assert_eq!(format_clock(6000.0), "100:00");
    }

    #[test]
    fn clock_guards_invalid_input() {
        assert_eq!(format_clock(f64::NAN), "00:00");
        assert_eq!(format_clock(f64::INFINITY), "00:00");
        assert_eq!(format_clock(-4.0), "00:00");
    }

    #[test]
    fn pair_joins_with_slash() {
        assert_eq!(format_clock_pair(30.0, 63.0), "00:30 / 01:03");
        assert_eq!(format_clock_pair(0.0, f64::NAN), "00:00 / 00:00");
    }

    #[test]
    fn rate_label_has_two_decimals() {
        assert_eq!(format_rate(1.0), "1.00x");
        assert_eq!(format_rate(0.5), "0.50x");
        assert_eq!(format_rate(1.953_125), "1.95x");
        assert_eq!(format_rate(4.0), "4.00x");
    }
}
