//! Mapping between track coordinates and range points.
//!
//! Every function here is pure: the result depends only on the arguments,
//! never on the current selection, so pointer mapping can be tested without
//! a slider.

/// Horizontal geometry of a rendered track, in the same coordinate space as
/// pointer `client_x` values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackRect {
    /// Left edge of the track.
    pub left: f64,
    /// Width of the track.
    pub width: f64,
}

impl TrackRect {
    /// Creates a track rectangle.
    pub const fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// Right edge of the track.
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    fn is_measurable(&self) -> bool {
        self.left.is_finite() && self.width.is_finite() && self.width > 0.0
    }
}

/// Percentage (`0.0..=100.0`) of the track covered up to `pointer_x`.
///
/// Pointers outside the track clamp to the nearest end. A track without a
/// positive finite width maps everything to `0.0`.
pub fn percentage_from_pointer(track: TrackRect, pointer_x: f64) -> f64 {
    if !track.is_measurable() || pointer_x.is_nan() {
        return 0.0;
    }
    ((pointer_x - track.left) / track.width * 100.0).clamp(0.0, 100.0)
}

/// Rounds `raw` to the nearest multiple of `step` counted from `origin`.
///
/// Ties round away from zero. A step that is not positive and finite
/// disables snapping.
pub fn snap_to_step(raw: f64, origin: f64, step: f64) -> f64 {
    if !(step.is_finite() && step > 0.0) {
        return raw;
    }
    origin + ((raw - origin) / step).round() * step
}

/// Continuous value under `pointer_x`, snapped to `step` and kept inside
/// `[lo, hi]`.
pub fn value_from_position(lo: f64, hi: f64, step: f64, track: TrackRect, pointer_x: f64) -> f64 {
    let percentage = percentage_from_pointer(track, pointer_x);
    let raw = lo + percentage / 100.0 * (hi - lo);
    snap_to_step(raw, lo, step).max(lo).min(hi)
}

/// Index under `pointer_x` for a sequence of `len` entries.
///
/// Picks the nearest index; a pointer exactly between two entries selects
/// the higher one.
pub fn index_from_position(len: usize, track: TrackRect, pointer_x: f64) -> usize {
    if len == 0 {
        return 0;
    }
    let percentage = percentage_from_pointer(track, pointer_x);
    let exact = percentage / 100.0 * (len - 1) as f64;
    (exact.round() as usize).min(len - 1)
}

/// Percentage along the track for a continuous `value`.
///
/// A degenerate range (`hi <= lo`) reports `0.0`.
pub fn value_percentage(lo: f64, hi: f64, value: f64) -> f64 {
    let span = hi - lo;
    if !(span.is_finite() && span > 0.0) || value.is_nan() {
        return 0.0;
    }
    ((value - lo) / span * 100.0).clamp(0.0, 100.0)
}

/// Percentage along the track for `index` in a sequence of `len` entries.
///
/// Sequences with at most one entry report `0.0`.
pub fn index_percentage(len: usize, index: usize) -> f64 {
    if len <= 1 {
        return 0.0;
    }
    (index as f64 / (len - 1) as f64 * 100.0).min(100.0)
}
