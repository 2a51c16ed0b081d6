//! Range domains: the two selection modes behind one capability interface.
//!
//! A slider is generic over a [`RangeDomain`]. [`Continuous`] selects
//! arbitrary values between two bounds; [`Fixed`] selects positions in a
//! predefined sequence. The store, keyboard and pointer controllers only talk
//! to the trait, so the mode branch lives here and nowhere else.

use std::{fmt::Debug, sync::Arc};

use crate::{
    error::RangeError,
    position::{self, TrackRect},
    store::{Endpoints, RangeValues},
};

/// Value multiplier applied to `step` by PageUp/PageDown in continuous mode.
pub const PAGE_STEP_MULTIPLIER: f64 = 10.0;

/// Index stride applied by PageUp/PageDown in fixed mode.
pub const PAGE_INDEX_STRIDE: i64 = 2;

/// Size of a keyboard-driven move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stride {
    /// One step or one index.
    Single,
    /// A page: [`PAGE_STEP_MULTIPLIER`] steps or [`PAGE_INDEX_STRIDE`] indices.
    Page,
}

/// A relative or absolute move requested for one endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nudge {
    /// Towards the upper end of the range.
    Forward(Stride),
    /// Towards the lower end of the range.
    Backward(Stride),
    /// To the lowest point of the domain; the store clamps it.
    ToLowest,
    /// To the highest point of the domain; the store clamps it.
    ToHighest,
}

/// Capability interface shared by both selection modes.
pub trait RangeDomain: Send + Sync + 'static {
    /// Committed endpoint: a value or an index.
    type Point: Copy + PartialOrd + Debug + Send + Sync + 'static;
    /// Requested endpoint, wide enough to express out-of-range requests.
    type Request: Copy + Debug;

    /// Mode name used in logs and context errors.
    const MODE: &'static str;
    /// Prefix of the presentation class names for this mode.
    const CLASS_PREFIX: &'static str;
    /// Id of the element labelling the thumbs.
    const LABELLED_BY: &'static str;
    /// Class list of the value labels.
    const LABEL_CLASS: &'static str;

    /// Lowest legal point.
    fn lowest(&self) -> Self::Point;

    /// Highest legal point.
    fn highest(&self) -> Self::Point;

    /// Clamps `requested` into `[floor, ceiling]`.
    ///
    /// Returns `None` when the request carries no number at all.
    fn clamp(
        &self,
        requested: Self::Request,
        floor: Self::Point,
        ceiling: Self::Point,
    ) -> Option<Self::Point>;

    /// Widens a committed point back into a request.
    fn request(point: Self::Point) -> Self::Request;

    /// Request produced by moving `point` by `nudge`.
    fn nudge(&self, point: Self::Point, nudge: Nudge) -> Self::Request;

    /// Percentage (`0.0..=100.0`) of the track at `point`.
    fn percentage_of(&self, point: Self::Point) -> f64;

    /// Point under `pointer_x` on `track`.
    fn from_position(&self, track: TrackRect, pointer_x: f64) -> Self::Point;

    /// Numeric value shown for `point`.
    fn value_at(&self, point: Self::Point) -> f64;

    /// Request for a directly typed value, or `None` when the mode does not
    /// accept it.
    fn edit_request(&self, value: f64) -> Option<Self::Request>;

    /// Whether labels of this mode can be edited in place.
    fn is_editable(&self) -> bool;

    /// Lower and upper value announced to assistive technology.
    fn semantic_range(&self) -> (f64, f64);

    /// Current value announced to assistive technology.
    fn semantic_value(&self, point: Self::Point) -> f64;

    /// Display text for `point`.
    fn format(&self, point: Self::Point, currency: Option<&str>) -> String;

    /// Full selection payload for `selection`.
    fn snapshot(&self, selection: Endpoints<Self::Point>) -> RangeValues;

    /// Clamps a request for the min endpoint against the current max.
    fn clamp_min(&self, requested: Self::Request, current_max: Self::Point) -> Option<Self::Point> {
        self.clamp(requested, self.lowest(), current_max)
    }

    /// Clamps a request for the max endpoint against the current min.
    fn clamp_max(&self, requested: Self::Request, current_min: Self::Point) -> Option<Self::Point> {
        self.clamp(requested, current_min, self.highest())
    }
}

/// Arbitrary values between `lo` and `hi`, moved in multiples of `step`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Continuous {
    lo: f64,
    hi: f64,
    step: f64,
}

impl Continuous {
    /// Creates a continuous domain.
    ///
    /// `lo == hi` is accepted; every percentage is then `0.0`.
    pub fn new(lo: f64, hi: f64, step: f64) -> Result<Self, RangeError> {
        if !lo.is_finite() || !hi.is_finite() {
            return Err(RangeError::NonFiniteBounds { lo, hi });
        }
        if lo > hi {
            return Err(RangeError::InvertedBounds { lo, hi });
        }
        if !(step.is_finite() && step > 0.0) {
            return Err(RangeError::InvalidStep(step));
        }
        Ok(Self { lo, hi, step })
    }

    /// Lower bound.
    pub fn lo(&self) -> f64 {
        self.lo
    }

    /// Upper bound.
    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// Step between pointer-selected values.
    pub fn step(&self) -> f64 {
        self.step
    }
}

impl RangeDomain for Continuous {
    type Point = f64;
    type Request = f64;

    const MODE: &'static str = "continuous";
    const CLASS_PREFIX: &'static str = "range";
    const LABELLED_BY: &'static str = "range-label";
    const LABEL_CLASS: &'static str = "range__value-label";

    fn lowest(&self) -> f64 {
        self.lo
    }

    fn highest(&self) -> f64 {
        self.hi
    }

    fn clamp(&self, requested: f64, floor: f64, ceiling: f64) -> Option<f64> {
        if requested.is_nan() {
            return None;
        }
        Some(requested.max(floor).min(ceiling))
    }

    fn request(point: f64) -> f64 {
        point
    }

    fn nudge(&self, point: f64, nudge: Nudge) -> f64 {
        match nudge {
            Nudge::Forward(Stride::Single) => point + self.step,
            Nudge::Forward(Stride::Page) => point + self.step * PAGE_STEP_MULTIPLIER,
            Nudge::Backward(Stride::Single) => point - self.step,
            Nudge::Backward(Stride::Page) => point - self.step * PAGE_STEP_MULTIPLIER,
            Nudge::ToLowest => self.lo,
            Nudge::ToHighest => self.hi,
        }
    }

    fn percentage_of(&self, point: f64) -> f64 {
        position::value_percentage(self.lo, self.hi, point)
    }

    fn from_position(&self, track: TrackRect, pointer_x: f64) -> f64 {
        position::value_from_position(self.lo, self.hi, self.step, track, pointer_x)
    }

    fn value_at(&self, point: f64) -> f64 {
        point
    }

    fn edit_request(&self, value: f64) -> Option<f64> {
        Some(value)
    }

    fn is_editable(&self) -> bool {
        true
    }

    fn semantic_range(&self) -> (f64, f64) {
        (self.lo, self.hi)
    }

    fn semantic_value(&self, point: f64) -> f64 {
        point
    }

    fn format(&self, point: f64, _currency: Option<&str>) -> String {
        point.to_string()
    }

    fn snapshot(&self, selection: Endpoints<f64>) -> RangeValues {
        RangeValues {
            min: selection.min,
            max: selection.max,
            indices: None,
        }
    }
}

/// Positions in a predefined, positionally ordered sequence of values.
#[derive(Debug, Clone, PartialEq)]
pub struct Fixed {
    values: Arc<[f64]>,
}

impl Fixed {
    /// Creates a fixed domain over `values`.
    ///
    /// The sequence need not be sorted: index order defines selection order.
    pub fn new(values: impl Into<Arc<[f64]>>) -> Result<Self, RangeError> {
        let values = values.into();
        if values.is_empty() {
            return Err(RangeError::EmptyValues);
        }
        if let Some(index) = values.iter().position(|value| !value.is_finite()) {
            return Err(RangeError::NonFiniteValue { index });
        }
        Ok(Self { values })
    }

    /// The selectable values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of selectable values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; construction rejects empty sequences.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn last_index(&self) -> usize {
        self.values.len().saturating_sub(1)
    }
}

fn widen(index: usize) -> i64 {
    i64::try_from(index).unwrap_or(i64::MAX)
}

impl RangeDomain for Fixed {
    type Point = usize;
    type Request = i64;

    const MODE: &'static str = "fixed";
    const CLASS_PREFIX: &'static str = "fixed-range";
    const LABELLED_BY: &'static str = "fixed-range-label";
    const LABEL_CLASS: &'static str = "range__value-label range__value-label--fixed";

    fn lowest(&self) -> usize {
        0
    }

    fn highest(&self) -> usize {
        self.last_index()
    }

    fn clamp(&self, requested: i64, floor: usize, ceiling: usize) -> Option<usize> {
        let clamped = requested.max(widen(floor)).min(widen(ceiling));
        Some(usize::try_from(clamped).unwrap_or(floor))
    }

    fn request(point: usize) -> i64 {
        widen(point)
    }

    fn nudge(&self, point: usize, nudge: Nudge) -> i64 {
        let point = widen(point);
        match nudge {
            Nudge::Forward(Stride::Single) => point.saturating_add(1),
            Nudge::Forward(Stride::Page) => point.saturating_add(PAGE_INDEX_STRIDE),
            Nudge::Backward(Stride::Single) => point.saturating_sub(1),
            Nudge::Backward(Stride::Page) => point.saturating_sub(PAGE_INDEX_STRIDE),
            Nudge::ToLowest => 0,
            Nudge::ToHighest => widen(self.last_index()),
        }
    }

    fn percentage_of(&self, point: usize) -> f64 {
        position::index_percentage(self.values.len(), point)
    }

    fn from_position(&self, track: TrackRect, pointer_x: f64) -> usize {
        position::index_from_position(self.values.len(), track, pointer_x)
    }

    fn value_at(&self, point: usize) -> f64 {
        self.values.get(point).copied().unwrap_or_default()
    }

    fn edit_request(&self, value: f64) -> Option<i64> {
        self.values
            .iter()
            .position(|candidate| *candidate == value)
            .map(widen)
    }

    fn is_editable(&self) -> bool {
        false
    }

    fn semantic_range(&self) -> (f64, f64) {
        (0.0, self.last_index() as f64)
    }

    fn semantic_value(&self, point: usize) -> f64 {
        point as f64
    }

    fn format(&self, point: usize, currency: Option<&str>) -> String {
        format!("{}{:.2}", currency.unwrap_or_default(), self.value_at(point))
    }

    fn snapshot(&self, selection: Endpoints<usize>) -> RangeValues {
        RangeValues {
            min: self.value_at(selection.min),
            max: self.value_at(selection.max),
            indices: Some(selection),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIERS: [f64; 6] = [1.99, 5.99, 10.99, 30.99, 50.99, 70.99];

    #[test]
    fn test_continuous_rejects_bad_config() {
        assert_eq!(
            Continuous::new(10.0, 0.0, 1.0),
            Err(RangeError::InvertedBounds { lo: 10.0, hi: 0.0 })
        );
        assert_eq!(Continuous::new(0.0, 10.0, 0.0), Err(RangeError::InvalidStep(0.0)));
        assert!(matches!(
            Continuous::new(f64::NAN, 10.0, 1.0),
            Err(RangeError::NonFiniteBounds { .. })
        ));
        assert!(Continuous::new(5.0, 5.0, 1.0).is_ok());
    }

    #[test]
    fn test_fixed_rejects_bad_config() {
        assert_eq!(Fixed::new(Vec::<f64>::new()), Err(RangeError::EmptyValues));
        assert_eq!(
            Fixed::new(vec![1.0, f64::INFINITY]),
            Err(RangeError::NonFiniteValue { index: 1 })
        );
    }

    #[test]
    fn test_continuous_clamp_ignores_nan() {
        let domain = Continuous::new(0.0, 100.0, 1.0).unwrap();
        assert_eq!(domain.clamp(f64::NAN, 0.0, 100.0), None);
        assert_eq!(domain.clamp(f64::INFINITY, 0.0, 40.0), Some(40.0));
        assert_eq!(domain.clamp_min(-5.0, 60.0), Some(0.0));
        assert_eq!(domain.clamp_max(500.0, 20.0), Some(100.0));
    }

    #[test]
    fn test_fixed_clamp_handles_negative_requests() {
        let domain = Fixed::new(TIERS.to_vec()).unwrap();
        assert_eq!(domain.clamp_min(-3, 4), Some(0));
        assert_eq!(domain.clamp_max(99, 2), Some(5));
        assert_eq!(domain.clamp_max(1, 2), Some(2));
    }

    #[test]
    fn test_nudges() {
        let continuous = Continuous::new(0.0, 100.0, 2.0).unwrap();
        assert_eq!(continuous.nudge(10.0, Nudge::Forward(Stride::Page)), 30.0);
        assert_eq!(continuous.nudge(10.0, Nudge::Backward(Stride::Single)), 8.0);
        assert_eq!(continuous.nudge(10.0, Nudge::ToHighest), 100.0);

        let fixed = Fixed::new(TIERS.to_vec()).unwrap();
        assert_eq!(fixed.nudge(3, Nudge::Forward(Stride::Page)), 5);
        assert_eq!(fixed.nudge(0, Nudge::Backward(Stride::Page)), -2);
        assert_eq!(fixed.nudge(2, Nudge::ToHighest), 5);
    }

    #[test]
    fn test_fixed_edit_accepts_only_listed_values() {
        let domain = Fixed::new(TIERS.to_vec()).unwrap();
        assert_eq!(domain.edit_request(30.99), Some(3));
        assert_eq!(domain.edit_request(31.0), None);
    }

    #[test]
    fn test_format() {
        let fixed = Fixed::new(TIERS.to_vec()).unwrap();
        assert_eq!(fixed.format(2, Some("€")), "€10.99");
        assert_eq!(fixed.format(0, None), "1.99");

        let continuous = Continuous::new(0.0, 100.0, 1.0).unwrap();
        assert_eq!(continuous.format(50.0, Some("€")), "50");
        assert_eq!(continuous.format(12.5, None), "12.5");
    }

    #[test]
    fn test_snapshot_carries_indices_in_fixed_mode() {
        let fixed = Fixed::new(TIERS.to_vec()).unwrap();
        let values = fixed.snapshot(Endpoints { min: 1, max: 4 });
        assert_eq!(values.min, 5.99);
        assert_eq!(values.max, 50.99);
        assert_eq!(values.indices, Some(Endpoints { min: 1, max: 4 }));
    }
}
