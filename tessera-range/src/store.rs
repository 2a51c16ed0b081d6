//! The range state store: single owner of the two-endpoint selection.
//!
//! Every mutation goes through [`RangeStore::update_min`] or
//! [`RangeStore::update_max`], which clamp the request so that
//! `lowest <= min <= max <= highest` holds after every call, store the
//! result and notify the change observer synchronously. Duplicate commits
//! are not suppressed.

use tracing::{trace, warn};

use crate::{
    callback::ChangeCallback,
    domain::{Continuous, Fixed, RangeDomain},
};

/// One of the two endpoints of the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Thumb {
    /// The lower endpoint.
    Min,
    /// The upper endpoint.
    Max,
}

impl Thumb {
    /// Both thumbs, lower first.
    pub const BOTH: [Thumb; 2] = [Thumb::Min, Thumb::Max];

    /// Short identifier, also used as accessibility key.
    pub fn key(self) -> &'static str {
        match self {
            Thumb::Min => "min",
            Thumb::Max => "max",
        }
    }

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            Thumb::Min => "Minimum value",
            Thumb::Max => "Maximum value",
        }
    }

    /// The opposite endpoint.
    pub fn other(self) -> Thumb {
        match self {
            Thumb::Min => Thumb::Max,
            Thumb::Max => Thumb::Min,
        }
    }
}

/// The two endpoints of a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Endpoints<P> {
    /// Lower endpoint.
    pub min: P,
    /// Upper endpoint.
    pub max: P,
}

impl<P: Copy> Endpoints<P> {
    /// Endpoint held by `thumb`.
    pub fn get(&self, thumb: Thumb) -> P {
        match thumb {
            Thumb::Min => self.min,
            Thumb::Max => self.max,
        }
    }
}

/// Selected values in continuous mode.
pub type RangeSelection = Endpoints<f64>;

/// Selected indices in fixed mode.
pub type IndexSelection = Endpoints<usize>;

/// Payload of the change notification: the full current selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeValues {
    /// Value at the lower endpoint.
    pub min: f64,
    /// Value at the upper endpoint.
    pub max: f64,
    /// Selected indices; `Some` in fixed mode only.
    pub indices: Option<IndexSelection>,
}

/// Owner of the selection for one slider instance.
pub struct RangeStore<D: RangeDomain> {
    domain: D,
    selection: Endpoints<D::Point>,
    on_change: ChangeCallback,
}

impl<D: RangeDomain> RangeStore<D> {
    /// Creates a store seeded from optional initial requests.
    ///
    /// Missing initial values default to the domain extremes. Initial values
    /// are clamped like any other request, so an initial max below the
    /// initial min is raised to the min. Seeding does not notify.
    pub fn new(
        domain: D,
        initial_min: Option<D::Request>,
        initial_max: Option<D::Request>,
        on_change: ChangeCallback,
    ) -> Self {
        let lowest = domain.lowest();
        let highest = domain.highest();
        let min = initial_min
            .and_then(|requested| domain.clamp(requested, lowest, highest))
            .unwrap_or(lowest);
        let max = initial_max
            .and_then(|requested| domain.clamp(requested, min, highest))
            .unwrap_or(highest);
        Self {
            domain,
            selection: Endpoints { min, max },
            on_change,
        }
    }

    /// The domain this store selects from.
    pub fn domain(&self) -> &D {
        &self.domain
    }

    /// The committed selection.
    pub fn selection(&self) -> Endpoints<D::Point> {
        self.selection
    }

    /// Committed lower endpoint.
    pub fn min(&self) -> D::Point {
        self.selection.min
    }

    /// Committed upper endpoint.
    pub fn max(&self) -> D::Point {
        self.selection.max
    }

    /// Committed endpoint held by `thumb`.
    pub fn endpoint(&self, thumb: Thumb) -> D::Point {
        self.selection.get(thumb)
    }

    /// Full selection payload, as delivered to the change observer.
    pub fn values(&self) -> RangeValues {
        self.domain.snapshot(self.selection)
    }

    /// Clamps `requested` to `[lowest, max]` and commits it.
    ///
    /// Returns the committed point. A non-numeric request leaves the
    /// selection untouched, skips the notification and returns the current
    /// min.
    pub fn update_min(&mut self, requested: D::Request) -> D::Point {
        let Some(committed) = self.domain.clamp_min(requested, self.selection.max) else {
            warn!(mode = D::MODE, ?requested, "ignoring non-numeric min request");
            return self.selection.min;
        };
        self.selection.min = committed;
        trace!(mode = D::MODE, ?requested, ?committed, "min committed");
        self.notify();
        committed
    }

    /// Clamps `requested` to `[min, highest]` and commits it.
    ///
    /// Returns the committed point. A non-numeric request leaves the
    /// selection untouched, skips the notification and returns the current
    /// max.
    pub fn update_max(&mut self, requested: D::Request) -> D::Point {
        let Some(committed) = self.domain.clamp_max(requested, self.selection.min) else {
            warn!(mode = D::MODE, ?requested, "ignoring non-numeric max request");
            return self.selection.max;
        };
        self.selection.max = committed;
        trace!(mode = D::MODE, ?requested, ?committed, "max committed");
        self.notify();
        committed
    }

    /// Routes `requested` to the endpoint held by `thumb`.
    pub fn update(&mut self, thumb: Thumb, requested: D::Request) -> D::Point {
        match thumb {
            Thumb::Min => self.update_min(requested),
            Thumb::Max => self.update_max(requested),
        }
    }

    /// Percentage along the track for `point`.
    pub fn percentage_of(&self, point: D::Point) -> f64 {
        self.domain.percentage_of(point)
    }

    /// Percentage along the track for the endpoint held by `thumb`.
    pub fn percentage(&self, thumb: Thumb) -> f64 {
        self.percentage_of(self.endpoint(thumb))
    }

    fn notify(&self) {
        self.on_change.call(self.values());
    }
}

impl RangeStore<Continuous> {
    /// Committed lower value.
    pub fn min_value(&self) -> f64 {
        self.selection.min
    }

    /// Committed upper value.
    pub fn max_value(&self) -> f64 {
        self.selection.max
    }
}

impl RangeStore<Fixed> {
    /// Clamps `requested` to `[0, max_index]` and commits it.
    pub fn update_min_index(&mut self, requested: i64) -> usize {
        self.update_min(requested)
    }

    /// Clamps `requested` to `[min_index, len - 1]` and commits it.
    pub fn update_max_index(&mut self, requested: i64) -> usize {
        self.update_max(requested)
    }

    /// Committed lower index.
    pub fn min_index(&self) -> usize {
        self.selection.min
    }

    /// Committed upper index.
    pub fn max_index(&self) -> usize {
        self.selection.max
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;

    type Log = Arc<Mutex<Vec<RangeValues>>>;

    fn recorder() -> (ChangeCallback, Log) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = log.clone();
        let callback = ChangeCallback::new(move |values: RangeValues| sink.lock().push(values));
        (callback, log)
    }

    fn continuous(min: Option<f64>, max: Option<f64>) -> (RangeStore<Continuous>, Log) {
        let (callback, log) = recorder();
        let domain = Continuous::new(0.0, 100.0, 1.0).unwrap();
        (RangeStore::new(domain, min, max, callback), log)
    }

    fn tiers() -> Fixed {
        Fixed::new(vec![1.99, 5.99, 10.99, 30.99, 50.99, 70.99]).unwrap()
    }

    #[test]
    fn test_initial_values_default_to_bounds() {
        let (store, log) = continuous(None, None);
        assert_eq!(store.selection(), Endpoints { min: 0.0, max: 100.0 });
        assert!(log.lock().is_empty());

        let fixed = RangeStore::new(tiers(), None, None, ChangeCallback::default());
        assert_eq!(fixed.selection(), Endpoints { min: 0, max: 5 });
    }

    #[test]
    fn test_initial_values_are_clamped() {
        let (store, _) = continuous(Some(-20.0), Some(400.0));
        assert_eq!(store.selection(), Endpoints { min: 0.0, max: 100.0 });

        let (store, _) = continuous(Some(70.0), Some(30.0));
        assert_eq!(store.selection(), Endpoints { min: 70.0, max: 70.0 });

        let (store, _) = continuous(Some(f64::NAN), None);
        assert_eq!(store.min(), 0.0);
    }

    #[test]
    fn test_boundary_requests_clamp_to_bounds() {
        let (mut store, _) = continuous(None, None);
        assert_eq!(store.update_min(-1.0), 0.0);
        assert_eq!(store.update_max(101.0), 100.0);
    }

    #[test]
    fn test_endpoints_never_cross() {
        let (mut store, _) = continuous(Some(25.0), Some(75.0));
        assert_eq!(store.update_min(90.0), 75.0);
        assert_eq!(store.update_max(10.0), 75.0);
        assert_eq!(store.selection(), Endpoints { min: 75.0, max: 75.0 });
    }

    #[test]
    fn test_every_commit_notifies_with_full_selection() {
        let (mut store, log) = continuous(Some(25.0), Some(75.0));
        store.update_min(30.0);
        store.update_min(30.0);
        store.update_max(80.0);
        let log = log.lock();
        assert_eq!(log.len(), 3);
        assert_eq!(log[0], log[1]);
        assert_eq!(
            log[2],
            RangeValues {
                min: 30.0,
                max: 80.0,
                indices: None
            }
        );
    }

    #[test]
    fn test_nan_request_is_ignored() {
        let (mut store, log) = continuous(Some(25.0), Some(75.0));
        assert_eq!(store.update_min(f64::NAN), 25.0);
        assert_eq!(store.update_max(f64::NAN), 75.0);
        assert!(log.lock().is_empty());
    }

    #[test]
    fn test_fixed_updates_report_values_and_indices() {
        let (callback, log) = recorder();
        let mut store = RangeStore::new(tiers(), Some(1), Some(4), callback);
        assert_eq!(store.update_min_index(-7), 0);
        assert_eq!(store.update_max_index(9), 5);
        assert_eq!(store.update_min_index(8), 5);
        assert_eq!((store.min_index(), store.max_index()), (5, 5));

        let last = log.lock().last().copied().unwrap();
        assert_eq!(last.min, 70.99);
        assert_eq!(last.max, 70.99);
        assert_eq!(last.indices, Some(Endpoints { min: 5, max: 5 }));
    }

    #[test]
    fn test_percentages() {
        let (store, _) = continuous(Some(25.0), Some(75.0));
        assert_eq!(store.percentage(Thumb::Min), 25.0);
        assert_eq!(store.percentage(Thumb::Max), 75.0);

        let degenerate = RangeStore::new(
            Continuous::new(5.0, 5.0, 1.0).unwrap(),
            None,
            None,
            ChangeCallback::default(),
        );
        assert_eq!(degenerate.percentage(Thumb::Max), 0.0);

        let single = RangeStore::new(
            Fixed::new(vec![9.99]).unwrap(),
            None,
            None,
            ChangeCallback::default(),
        );
        assert_eq!(single.percentage(Thumb::Max), 0.0);
    }
}
