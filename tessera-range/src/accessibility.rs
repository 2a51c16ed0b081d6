//! Accessibility semantics for range slider thumbs.
//!
//! Each thumb is announced as its own slider. Continuous sliders expose the
//! value range directly; fixed sliders expose index positions and describe
//! the selected value in the value text.

use accesskit::{Action, Role};

use crate::{
    domain::RangeDomain,
    keyboard::Key,
    store::{RangeStore, Thumb},
};

/// Semantics of one thumb, ready to be mapped onto a platform accessibility
/// node or ARIA attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbSemantics {
    /// Always [`Role::Slider`].
    pub role: Role,
    /// Stable key distinguishing the two thumbs.
    pub key: &'static str,
    /// Thumb label.
    pub label: &'static str,
    /// Id of the element labelling the slider.
    pub labelled_by: &'static str,
    /// Lowest announced value.
    pub value_min: f64,
    /// Highest announced value.
    pub value_max: f64,
    /// Current announced value.
    pub value_now: f64,
    /// Spoken description of the current value.
    pub value_text: String,
    /// Actions the thumb responds to.
    pub actions: [Action; 2],
}

impl ThumbSemantics {
    /// Describes `thumb` for the current selection of `store`.
    pub fn describe<D: RangeDomain>(
        store: &RangeStore<D>,
        thumb: Thumb,
        currency: Option<&str>,
    ) -> Self {
        let domain = store.domain();
        let point = store.endpoint(thumb);
        let (value_min, value_max) = domain.semantic_range();
        Self {
            role: Role::Slider,
            key: thumb.key(),
            label: thumb.label(),
            labelled_by: D::LABELLED_BY,
            value_min,
            value_max,
            value_now: domain.semantic_value(point),
            value_text: format!("{}: {}", thumb.label(), domain.format(point, currency)),
            actions: [Action::Increment, Action::Decrement],
        }
    }
}

/// Key equivalent of an assistive-technology action, if it moves a thumb.
pub fn action_key(action: Action) -> Option<Key> {
    match action {
        Action::Increment => Some(Key::ArrowRight),
        Action::Decrement => Some(Key::ArrowLeft),
        _ => None,
    }
}
