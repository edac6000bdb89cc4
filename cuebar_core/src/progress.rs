// Copyright 2026 the Cuebar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Percent/time conversions shared by every scrub bar and indicator.
//!
//! All percentages are in `[0, 100]`. A duration is *known* when it is finite
//! and strictly positive; media elements report `NaN` before metadata loads
//! and `+inf` for live streams, and both are treated as unknown.
//!
//! ```
//! use cuebar_core::progress::{compute_progress, compute_seek_target};
//!
//! assert_eq!(compute_seek_target(50.0, 60.0), 30.0);
//! assert_eq!(compute_progress(15.0, 60.0), 25.0);
//! assert_eq!(compute_progress(15.0, f64::NAN), 0.0);
//! ```

use alloc::format;
use alloc::string::String;

/// Upper bound of a percentage.
pub const FULL_PERCENT: f64 = 100.0;

/// Duration substituted for phase-segment jumps when the real one is unknown.
pub const SEGMENT_FALLBACK_DURATION: f64 = 1.0;

/// Returns `true` if `duration` can be used as a divisor.
#[must_use]
pub fn is_known_duration(duration: f64) -> bool {
    duration.is_finite() && duration > 0.0
}

/// Clamps `percent` to `[0, 100]`, mapping NaN to `0`.
#[must_use]
pub fn clamp_percent(percent: f64) -> f64 {
    if percent.is_nan() {
        return 0.0;
    }
    percent.clamp(0.0, FULL_PERCENT)
}

/// Playback position of `current` within `duration`, as a percentage.
///
/// Returns `0` when the duration is unknown or `current` is not finite.
#[must_use]
pub fn compute_progress(current: f64, duration: f64) -> f64 {
    if !is_known_duration(duration) || !current.is_finite() {
        return 0.0;
    }
    clamp_percent(current / duration * FULL_PERCENT)
}

/// Media time addressed by `percent` of `duration`.
///
/// Returns `0` when the duration is unknown.
#[must_use]
pub fn compute_seek_target(percent: f64, duration: f64) -> f64 {
    if !is_known_duration(duration) {
        return 0.0;
    }
    clamp_percent(percent) / FULL_PERCENT * duration
}

/// Media time a phase segment starting at `start_percent` jumps to.
///
/// Unlike [`compute_seek_target`], an unknown duration falls back to
/// [`SEGMENT_FALLBACK_DURATION`] so a click before metadata loads still
/// produces a small forward seek.
#[must_use]
pub fn segment_seek_time(start_percent: f64, duration: f64) -> f64 {
    let duration = if is_known_duration(duration) {
        duration
    } else {
        SEGMENT_FALLBACK_DURATION
    };
    clamp_percent(start_percent) / FULL_PERCENT * duration
}

/// Formats `percent` for a CSS length, e.g. the `--progress` custom property.
#[must_use]
pub fn progress_css(percent: f64) -> String {
    format!("{}%", clamp_percent(percent))
}

/// Scrub-bar state to display after the media position changes.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrubFrame {
    /// Slider value and fill, in `[0, 100]`.
    pub percent: f64,
    /// Time label next to the bar.
    pub label: String,
}

impl ScrubFrame {
    /// Value for the bar's `--progress` custom property.
    #[must_use]
    pub fn progress_css(&self) -> String {
        progress_css(self.percent)
    }
}

/// Parses a percentage attribute such as `data-start="37.5"`.
///
/// Reads the longest numeric prefix after leading whitespace, so `"20%"` and
/// `"30abc"` give `20` and `30`. Returns `None` when there is no leading
/// number or it is not finite.
#[must_use]
pub fn parse_percent(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut has_digits = int_end > end;
    end = int_end;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        has_digits |= frac_end > end + 1;
        if has_digits {
            end = frac_end;
        }
    }
    if !has_digits {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_end = digits_from(end + 1 + sign);
        if exp_end > end + 1 + sign {
            end = exp_end;
        }
    }

    let value: f64 = text[..end].parse().ok()?;
    value.is_finite().then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seek_target_is_linear_over_valid_percentages() {
        let duration = 63.0;
        for step in 0..=100_u32 {
            let p = f64::from(step);
            let expected = p / 100.0 * duration;
            let got = compute_seek_target(p, duration);
            assert!((got - expected).abs() < 1e-9, "p={p}: {got} != {expected}");
        }
    }

    #[test]
    fn scrub_half_of_sixty_seconds_is_thirty() {
        assert_eq!(compute_seek_target(50.0, 60.0), 30.0);
    }

    #[test]
    fn unknown_duration_never_yields_nan() {
        for d in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert_eq!(compute_progress(12.0, d), 0.0, "duration {d}");
            assert_eq!(compute_seek_target(40.0, d), 0.0, "duration {d}");
        }
        assert_eq!(compute_progress(f64::NAN, 10.0), 0.0);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(compute_progress(70.0, 60.0), 100.0);
        assert_eq!(compute_progress(-3.0, 60.0), 0.0);
        assert_eq!(compute_seek_target(150.0, 60.0), 60.0);
        assert_eq!(compute_seek_target(f64::NAN, 60.0), 0.0);
    }

    #[test]
    fn segment_jump_falls_back_to_unit_duration() {
        assert_eq!(segment_seek_time(40.0, f64::NAN), 0.4);
        assert_eq!(segment_seek_time(40.0, 0.0), 0.4);
        assert_eq!(segment_seek_time(40.0, 30.0), 12.0);
    }

    #[test]
    fn css_value_has_percent_suffix() {
        assert_eq!(progress_css(50.0), "50%");
        assert_eq!(progress_css(12.5), "12.5%");
        assert_eq!(progress_css(f64::NAN), "0%");
    }

    #[test]
    fn parses_start_attributes() {
        assert_eq!(parse_percent("37.5"), Some(37.5));
        assert_eq!(parse_percent(" 20% "), Some(20.0));
        assert_eq!(parse_percent("0"), Some(0.0));
        assert_eq!(parse_percent(""), None);
        assert_eq!(parse_percent("abc"), None);
        assert_eq!(parse_percent("NaN"), None);
        assert_eq!(parse_percent("inf"), None);
    }

    #[test]
    fn start_attribute_reads_leading_number() {
        assert_eq!(parse_percent("30abc"), Some(30.0));
        assert_eq!(parse_percent(".5"), Some(0.5));
        assert_eq!(parse_percent("12."), Some(12.0));
        assert_eq!(parse_percent("-4"), Some(-4.0));
        assert_eq!(parse_percent("1e1x"), Some(10.0));
        assert_eq!(parse_percent("7e"), Some(7.0));
        assert_eq!(parse_percent("1e999"), None);
        assert_eq!(parse_percent("-"), None);
        assert_eq!(parse_percent("."), None);
        assert_eq!(parse_percent("x30"), None);
    }
}
