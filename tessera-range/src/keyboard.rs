//! Keyboard controller.
//!
//! Maps DOM-style key identifiers (`KeyboardEvent.key`) to one store update
//! for the focused thumb. The mapping is stateless:
//!
//! | Key | Move |
//! |---|---|
//! | `ArrowRight`, `ArrowUp` | one step / index forward |
//! | `ArrowLeft`, `ArrowDown` | one step / index backward |
//! | `PageUp` | one page forward |
//! | `PageDown` | one page backward |
//! | `Home` | to the lowest point the thumb may take |
//! | `End` | to the highest point the thumb may take |
//!
//! A page is ten steps in continuous mode and two indices in fixed mode.

use std::str::FromStr;

use tracing::trace;

use crate::{
    domain::{Nudge, RangeDomain, Stride},
    error::UnknownKey,
    store::{RangeStore, Thumb},
};

/// Keys bound to slider moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// `ArrowRight`
    ArrowRight,
    /// `ArrowUp`
    ArrowUp,
    /// `ArrowLeft`
    ArrowLeft,
    /// `ArrowDown`
    ArrowDown,
    /// `Home`
    Home,
    /// `End`
    End,
    /// `PageUp`
    PageUp,
    /// `PageDown`
    PageDown,
}

impl Key {
    /// Parses a `KeyboardEvent.key` identifier.
    pub fn from_identifier(key: &str) -> Option<Self> {
        let key = match key {
            "ArrowRight" => Key::ArrowRight,
            "ArrowUp" => Key::ArrowUp,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowDown" => Key::ArrowDown,
            "Home" => Key::Home,
            "End" => Key::End,
            "PageUp" => Key::PageUp,
            "PageDown" => Key::PageDown,
            _ => return None,
        };
        Some(key)
    }

    /// The move this key requests.
    pub fn nudge(self) -> Nudge {
        match self {
            Key::ArrowRight | Key::ArrowUp => Nudge::Forward(Stride::Single),
            Key::ArrowLeft | Key::ArrowDown => Nudge::Backward(Stride::Single),
            Key::PageUp => Nudge::Forward(Stride::Page),
            Key::PageDown => Nudge::Backward(Stride::Page),
            Key::Home => Nudge::ToLowest,
            Key::End => Nudge::ToHighest,
        }
    }
}

impl FromStr for Key {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Key::from_identifier(s).ok_or_else(|| UnknownKey(s.to_owned()))
    }
}

/// What the host should do with the original key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The key moved a thumb; suppress the default scroll/navigation.
    Handled,
    /// The key is not bound; let it propagate (e.g. `Tab`).
    Ignored,
}

impl KeyOutcome {
    /// Whether the host should call `preventDefault` on the event.
    pub fn prevents_default(self) -> bool {
        matches!(self, KeyOutcome::Handled)
    }
}

/// Applies `key` to the endpoint held by `thumb` and returns the committed
/// point.
pub fn apply_key<D: RangeDomain>(store: &mut RangeStore<D>, thumb: Thumb, key: Key) -> D::Point {
    let current = store.endpoint(thumb);
    let requested = store.domain().nudge(current, key.nudge());
    trace!(?thumb, ?key, ?requested, "key move");
    store.update(thumb, requested)
}

/// Handles a raw key identifier for `thumb`.
pub fn handle_key<D: RangeDomain>(
    store: &mut RangeStore<D>,
    thumb: Thumb,
    key: &str,
) -> KeyOutcome {
    match Key::from_identifier(key) {
        Some(key) => {
            apply_key(store, thumb, key);
            KeyOutcome::Handled
        }
        None => KeyOutcome::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::{
        callback::ChangeCallback,
        domain::{Continuous, Fixed},
    };

    fn continuous(min: f64, max: f64) -> RangeStore<Continuous> {
        let domain = Continuous::new(0.0, 100.0, 1.0).unwrap();
        RangeStore::new(domain, Some(min), Some(max), ChangeCallback::default())
    }

    fn fixed(min: i64, max: i64) -> RangeStore<Fixed> {
        let domain = Fixed::new(vec![1.99, 5.99, 10.99, 30.99, 50.99, 70.99]).unwrap();
        RangeStore::new(domain, Some(min), Some(max), ChangeCallback::default())
    }

    #[rstest]
    #[case::right_min(Thumb::Min, "ArrowRight", (41.0, 60.0))]
    #[case::up_min(Thumb::Min, "ArrowUp", (41.0, 60.0))]
    #[case::left_min(Thumb::Min, "ArrowLeft", (39.0, 60.0))]
    #[case::down_max(Thumb::Max, "ArrowDown", (40.0, 59.0))]
    #[case::right_max(Thumb::Max, "ArrowRight", (40.0, 61.0))]
    #[case::home_min(Thumb::Min, "Home", (0.0, 60.0))]
    #[case::home_max(Thumb::Max, "Home", (40.0, 40.0))]
    #[case::end_min(Thumb::Min, "End", (60.0, 60.0))]
    #[case::end_max(Thumb::Max, "End", (40.0, 100.0))]
    #[case::page_up_min(Thumb::Min, "PageUp", (50.0, 60.0))]
    #[case::page_up_max(Thumb::Max, "PageUp", (40.0, 70.0))]
    #[case::page_down_min(Thumb::Min, "PageDown", (30.0, 60.0))]
    #[case::page_down_max(Thumb::Max, "PageDown", (40.0, 50.0))]
    fn test_continuous_delta_table(
        #[case] thumb: Thumb,
        #[case] key: &str,
        #[case] expected: (f64, f64),
    ) {
        let mut store = continuous(40.0, 60.0);
        assert_eq!(handle_key(&mut store, thumb, key), KeyOutcome::Handled);
        assert_eq!((store.min(), store.max()), expected);
    }

    #[rstest]
    #[case::right_min(Thumb::Min, "ArrowRight", (2, 4))]
    #[case::left_min(Thumb::Min, "ArrowLeft", (0, 4))]
    #[case::right_max(Thumb::Max, "ArrowRight", (1, 5))]
    #[case::left_max(Thumb::Max, "ArrowLeft", (1, 3))]
    #[case::home_min(Thumb::Min, "Home", (0, 4))]
    #[case::home_max(Thumb::Max, "Home", (1, 1))]
    #[case::end_min(Thumb::Min, "End", (4, 4))]
    #[case::end_max(Thumb::Max, "End", (1, 5))]
    #[case::page_up_min(Thumb::Min, "PageUp", (3, 4))]
    #[case::page_up_max(Thumb::Max, "PageUp", (1, 5))]
    #[case::page_down_min(Thumb::Min, "PageDown", (0, 4))]
    #[case::page_down_max(Thumb::Max, "PageDown", (1, 2))]
    fn test_fixed_delta_table(
        #[case] thumb: Thumb,
        #[case] key: &str,
        #[case] expected: (usize, usize),
    ) {
        let mut store = fixed(1, 4);
        assert_eq!(handle_key(&mut store, thumb, key), KeyOutcome::Handled);
        assert_eq!((store.min_index(), store.max_index()), expected);
    }

    #[test]
    fn test_page_moves_stop_at_the_other_thumb() {
        let mut store = continuous(55.0, 60.0);
        apply_key(&mut store, Thumb::Min, Key::PageUp);
        assert_eq!(store.min(), 60.0);

        let mut store = fixed(3, 4);
        apply_key(&mut store, Thumb::Min, Key::PageUp);
        assert_eq!(store.min_index(), 4);
    }

    #[test]
    fn test_unbound_keys_propagate() {
        let mut store = continuous(40.0, 60.0);
        for key in ["Tab", "Enter", "a", ""] {
            let outcome = handle_key(&mut store, Thumb::Min, key);
            assert_eq!(outcome, KeyOutcome::Ignored);
            assert!(!outcome.prevents_default());
        }
        assert_eq!((store.min(), store.max()), (40.0, 60.0));
    }

    #[test]
    fn test_key_from_str() {
        assert_eq!("PageDown".parse::<Key>(), Ok(Key::PageDown));
        assert_eq!("Tab".parse::<Key>(), Err(UnknownKey("Tab".to_owned())));
    }
}
