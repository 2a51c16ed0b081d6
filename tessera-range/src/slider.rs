//! The dual-thumb range slider.
//!
//! [`RangeSlider`] owns the selection store, the drag controller and the two
//! value-label editors, and exposes one entry point per host event. Hosts
//! forward raw events; the slider clamps, commits and notifies.
//!
//! Sliders are built from [`ContinuousRangeArgs`] or [`FixedRangeArgs`]:
//!
//! ```
//! use tessera_range::{ContinuousRangeArgsBuilder, RangeSlider, Thumb};
//!
//! let args = ContinuousRangeArgsBuilder::default()
//!     .lo(1.0)
//!     .hi(100.0)
//!     .initial_min(20.0)
//!     .build()
//!     .unwrap();
//! let mut slider = RangeSlider::continuous(args).unwrap();
//! slider.on_key_down(Thumb::Min, "PageUp");
//! assert_eq!(slider.selection().min, 30.0);
//! ```

use std::sync::Arc;

use accesskit::Action;
use derive_builder::Builder;
use parking_lot::Mutex;
use tracing::debug;

use crate::{
    accessibility::{ThumbSemantics, action_key},
    callback::ChangeCallback,
    domain::{Continuous, Fixed, RangeDomain},
    edit::{EditOutcome, EditSession, apply_edit},
    error::RangeError,
    keyboard::{self, KeyOutcome},
    listeners::{DocumentTarget, detached_document},
    pointer::{DragController, DragState, PointerEvent},
    position::TrackRect,
    store::{Endpoints, IndexSelection, RangeStore, RangeValues, Thumb},
};

/// Shared handle to a slider, as provided to dependent controls.
pub type RangeHandle<D> = Arc<Mutex<RangeSlider<D>>>;

/// Arguments for a continuous range slider.
#[derive(Builder, Clone)]
#[builder(pattern = "owned", build_fn(error = "RangeError"))]
pub struct ContinuousRangeArgs {
    /// Lower bound of the range.
    pub lo: f64,

    /// Upper bound of the range.
    pub hi: f64,

    /// Granularity of pointer-selected values and arrow-key moves.
    #[builder(default = "1.0")]
    pub step: f64,

    /// Initial lower value; defaults to `lo`.
    #[builder(default, setter(strip_option))]
    pub initial_min: Option<f64>,

    /// Initial upper value; defaults to `hi`.
    #[builder(default, setter(strip_option))]
    pub initial_max: Option<f64>,

    /// Caption of the whole control.
    #[builder(default = "\"Range Slider\".to_string()", setter(into))]
    pub label: String,

    /// Called with the full selection after every commit.
    #[builder(default, setter(into))]
    pub on_change: ChangeCallback,

    /// Where drag listeners are attached; a private registry when unset.
    #[builder(default = "detached_document()")]
    pub document: Arc<dyn DocumentTarget>,
}

/// Arguments for a fixed-values range slider.
#[derive(Builder, Clone)]
#[builder(pattern = "owned", build_fn(error = "RangeError"))]
pub struct FixedRangeArgs {
    /// Selectable values, in selection order.
    #[builder(setter(into))]
    pub values: Vec<f64>,

    /// Initial lower index; defaults to the first value.
    #[builder(default, setter(strip_option))]
    pub initial_min_index: Option<usize>,

    /// Initial upper index; defaults to the last value.
    #[builder(default, setter(strip_option))]
    pub initial_max_index: Option<usize>,

    /// Symbol prefixed to displayed values.
    #[builder(default = "\"€\".to_string()", setter(into))]
    pub currency: String,

    /// Caption of the whole control.
    #[builder(default = "\"Range Slider\".to_string()", setter(into))]
    pub label: String,

    /// Called with the full selection after every commit.
    #[builder(default, setter(into))]
    pub on_change: ChangeCallback,

    /// Where drag listeners are attached; a private registry when unset.
    #[builder(default = "detached_document()")]
    pub document: Arc<dyn DocumentTarget>,
}

/// A two-thumb range slider over domain `D`.
pub struct RangeSlider<D: RangeDomain> {
    store: RangeStore<D>,
    drag: DragController,
    editors: [EditSession; 2],
    label: String,
    currency: Option<String>,
}

impl<D: RangeDomain> RangeSlider<D> {
    fn assemble(
        store: RangeStore<D>,
        document: Arc<dyn DocumentTarget>,
        label: String,
        currency: Option<String>,
    ) -> Self {
        debug!(mode = D::MODE, selection = ?store.selection(), "range slider created");
        Self {
            store,
            drag: DragController::new(document),
            editors: Default::default(),
            label,
            currency,
        }
    }

    /// Wraps the slider into a shareable handle.
    pub fn into_handle(self) -> RangeHandle<D> {
        Arc::new(Mutex::new(self))
    }

    /// Caption of the whole control.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Currency symbol, fixed mode only.
    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    /// The selection store.
    pub fn store(&self) -> &RangeStore<D> {
        &self.store
    }

    /// Mutable access to the selection store, for programmatic updates.
    pub fn store_mut(&mut self) -> &mut RangeStore<D> {
        &mut self.store
    }

    /// Committed selection.
    pub fn selection(&self) -> Endpoints<D::Point> {
        self.store.selection()
    }

    /// Full selection payload.
    pub fn values(&self) -> RangeValues {
        self.store.values()
    }

    /// Value shown for `thumb`.
    pub fn value(&self, thumb: Thumb) -> f64 {
        self.store.domain().value_at(self.store.endpoint(thumb))
    }

    /// Display text for `thumb`, with the currency prefix in fixed mode.
    pub fn display_value(&self, thumb: Thumb) -> String {
        self.store
            .domain()
            .format(self.store.endpoint(thumb), self.currency())
    }

    /// Track percentage of the lower thumb.
    pub fn min_percentage(&self) -> f64 {
        self.store.percentage(Thumb::Min)
    }

    /// Track percentage of the upper thumb.
    pub fn max_percentage(&self) -> f64 {
        self.store.percentage(Thumb::Max)
    }

    /// Thumb being dragged, if any.
    pub fn active_thumb(&self) -> Option<Thumb> {
        self.drag.active_thumb()
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Current drag state.
    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    /// A thumb was pressed or touched.
    pub fn on_pointer_start(&mut self, thumb: Thumb) {
        self.drag.begin(thumb);
    }

    /// A thumb received focus. Focus activates the thumb the same way a
    /// press does.
    pub fn on_focus(&mut self, thumb: Thumb) {
        self.drag.begin(thumb);
    }

    /// A document move or release event arrived.
    ///
    /// Returns the committed point of the active thumb for moves made while
    /// dragging.
    pub fn on_pointer_move(&mut self, event: &PointerEvent, track: TrackRect) -> Option<D::Point> {
        self.drag.handle(&mut self.store, event, track)
    }

    /// The pointer was released anywhere in the document.
    pub fn on_pointer_end(&mut self) {
        self.drag.end();
    }

    /// Abandons the current drag, keeping the last committed selection.
    pub fn cancel_drag(&mut self) {
        self.drag.end();
    }

    /// A key was pressed while `thumb` had focus.
    pub fn on_key_down(&mut self, thumb: Thumb, key: &str) -> KeyOutcome {
        keyboard::handle_key(&mut self.store, thumb, key)
    }

    /// An assistive technology requested `action` on `thumb`.
    ///
    /// Returns the committed point, or `None` for actions a thumb does not
    /// support.
    pub fn on_action(&mut self, thumb: Thumb, action: Action) -> Option<D::Point> {
        let key = action_key(action)?;
        Some(keyboard::apply_key(&mut self.store, thumb, key))
    }

    /// A value was typed for `thumb`.
    pub fn on_direct_edit(&mut self, thumb: Thumb, text: &str) -> EditOutcome {
        apply_edit(&mut self.store, thumb, text)
    }

    /// Editor state of the label of `thumb`.
    pub fn editor(&self, thumb: Thumb) -> &EditSession {
        &self.editors[editor_slot(thumb)]
    }

    /// The label of `thumb` was clicked. Returns whether editing started.
    pub fn begin_edit(&mut self, thumb: Thumb) -> bool {
        self.editors[editor_slot(thumb)].begin(&self.store, thumb)
    }

    /// The text in the label editor of `thumb` changed.
    pub fn set_edit_draft(&mut self, thumb: Thumb, text: impl Into<String>) {
        self.editors[editor_slot(thumb)].set_draft(text);
    }

    /// The label editor of `thumb` lost focus; its draft is applied.
    pub fn commit_edit(&mut self, thumb: Thumb) -> EditOutcome {
        self.editors[editor_slot(thumb)].apply(&mut self.store, thumb)
    }

    /// Discards the draft of the label editor of `thumb`.
    pub fn cancel_edit(&mut self, thumb: Thumb) {
        self.editors[editor_slot(thumb)].cancel();
    }

    /// A key was pressed inside the label editor of `thumb`.
    pub fn on_edit_key(&mut self, thumb: Thumb, key: &str) -> Option<EditOutcome> {
        self.editors[editor_slot(thumb)].handle_key(&mut self.store, thumb, key)
    }

    /// Accessibility semantics of `thumb`.
    pub fn semantics(&self, thumb: Thumb) -> ThumbSemantics {
        ThumbSemantics::describe(&self.store, thumb, self.currency())
    }
}

fn editor_slot(thumb: Thumb) -> usize {
    match thumb {
        Thumb::Min => 0,
        Thumb::Max => 1,
    }
}

impl RangeSlider<Continuous> {
    /// Builds a continuous slider.
    ///
    /// Fails when the bounds are inverted or not finite, or when the step is
    /// not a positive finite number.
    pub fn continuous(args: ContinuousRangeArgs) -> Result<Self, RangeError> {
        let domain = Continuous::new(args.lo, args.hi, args.step)?;
        let store = RangeStore::new(domain, args.initial_min, args.initial_max, args.on_change);
        Ok(Self::assemble(store, args.document, args.label, None))
    }

    /// The lower bound.
    pub fn lo(&self) -> f64 {
        self.store.domain().lo()
    }

    /// The upper bound.
    pub fn hi(&self) -> f64 {
        self.store.domain().hi()
    }

    /// Values a direct edit of `thumb` is clamped to.
    pub fn edit_bounds(&self, thumb: Thumb) -> Endpoints<f64> {
        match thumb {
            Thumb::Min => Endpoints {
                min: self.lo(),
                max: self.store.max_value(),
            },
            Thumb::Max => Endpoints {
                min: self.store.min_value(),
                max: self.hi(),
            },
        }
    }
}

impl RangeSlider<Fixed> {
    /// Builds a fixed-values slider.
    ///
    /// Fails when `values` is empty or holds a non-finite number.
    pub fn fixed(args: FixedRangeArgs) -> Result<Self, RangeError> {
        let domain = Fixed::new(args.values)?;
        let store = RangeStore::new(
            domain,
            args.initial_min_index.map(Fixed::request),
            args.initial_max_index.map(Fixed::request),
            args.on_change,
        );
        Ok(Self::assemble(
            store,
            args.document,
            args.label,
            Some(args.currency),
        ))
    }

    /// The selectable values.
    pub fn fixed_values(&self) -> &[f64] {
        self.store.domain().values()
    }

    /// Selected indices.
    pub fn indices(&self) -> IndexSelection {
        self.store.selection()
    }

    /// Committed lower index.
    pub fn min_index(&self) -> usize {
        self.store.min_index()
    }

    /// Committed upper index.
    pub fn max_index(&self) -> usize {
        self.store.max_index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listeners::{DocumentEvent, DocumentListeners};

    const TIERS: [f64; 6] = [1.99, 5.99, 10.99, 30.99, 50.99, 70.99];
    const TRACK: TrackRect = TrackRect::new(0.0, 200.0);

    fn continuous() -> RangeSlider<Continuous> {
        let args = ContinuousRangeArgsBuilder::default()
            .lo(1.0)
            .hi(100.0)
            .build()
            .unwrap();
        RangeSlider::continuous(args).unwrap()
    }

    fn fixed() -> RangeSlider<Fixed> {
        let args = FixedRangeArgsBuilder::default()
            .values(TIERS.to_vec())
            .build()
            .unwrap();
        RangeSlider::fixed(args).unwrap()
    }

    #[test]
    fn test_builder_defaults() {
        let slider = continuous();
        assert_eq!(slider.label(), "Range Slider");
        assert_eq!(slider.selection(), Endpoints { min: 1.0, max: 100.0 });
        assert_eq!(slider.currency(), None);

        let slider = fixed();
        assert_eq!(slider.currency(), Some("€"));
        assert_eq!(slider.indices(), Endpoints { min: 0, max: 5 });
        assert_eq!(slider.display_value(Thumb::Max), "€70.99");
    }

    #[test]
    fn test_missing_bounds_fail_to_build() {
        let err = ContinuousRangeArgsBuilder::default().lo(0.0).build().err();
        assert_eq!(err, Some(RangeError::MissingField("hi")));
    }

    #[test]
    fn test_invalid_config_fails_to_construct() {
        let args = ContinuousRangeArgsBuilder::default()
            .lo(10.0)
            .hi(0.0)
            .build()
            .unwrap();
        assert!(matches!(
            RangeSlider::continuous(args),
            Err(RangeError::InvertedBounds { .. })
        ));

        let args = FixedRangeArgsBuilder::default()
            .values(Vec::<f64>::new())
            .build()
            .unwrap();
        assert!(matches!(RangeSlider::fixed(args), Err(RangeError::EmptyValues)));
    }

    #[test]
    fn test_drag_cycle_through_shared_document() {
        let listeners = DocumentListeners::shared();
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = log.clone();
        let args = ContinuousRangeArgsBuilder::default()
            .lo(0.0)
            .hi(100.0)
            .step(5.0)
            .on_change(move |values: RangeValues| sink.lock().push(values))
            .document(listeners.clone())
            .build()
            .unwrap();
        let mut slider = RangeSlider::continuous(args).unwrap();

        slider.on_pointer_start(Thumb::Max);
        assert!(listeners.is_listening(DocumentEvent::TouchMove));
        assert_eq!(
            slider.on_pointer_move(&PointerEvent::mouse_move(150.0), TRACK),
            Some(75.0)
        );
        slider.on_pointer_move(&PointerEvent::MouseUp, TRACK);
        assert!(!slider.is_dragging());
        assert_eq!(listeners.active_subscriptions(), 0);
        assert_eq!(log.lock().len(), 1);
    }

    #[test]
    fn test_cancel_drag_keeps_selection() {
        let mut slider = continuous();
        slider.on_focus(Thumb::Min);
        slider.on_pointer_move(&PointerEvent::mouse_move(100.0), TRACK);
        let before = slider.selection();
        slider.cancel_drag();
        assert_eq!(slider.active_thumb(), None);
        assert_eq!(slider.selection(), before);
    }

    #[test]
    fn test_accessibility_actions() {
        let mut slider = fixed();
        assert_eq!(slider.on_action(Thumb::Min, Action::Increment), Some(1));
        assert_eq!(slider.on_action(Thumb::Max, Action::Decrement), Some(4));
        assert_eq!(slider.on_action(Thumb::Max, Action::Focus), None);
        assert_eq!(slider.semantics(Thumb::Min).value_text, "Minimum value: €5.99");
    }

    #[test]
    fn test_label_editing_through_the_slider() {
        let mut slider = continuous();
        slider.on_key_down(Thumb::Max, "End");
        assert!(slider.begin_edit(Thumb::Min));
        slider.set_edit_draft(Thumb::Min, "40");
        assert!(slider.editor(Thumb::Min).is_editing());
        assert!(!slider.editor(Thumb::Max).is_editing());
        assert_eq!(slider.commit_edit(Thumb::Min), EditOutcome::Committed(40.0));
        assert_eq!(slider.edit_bounds(Thumb::Max), Endpoints { min: 40.0, max: 100.0 });
        assert_eq!(slider.edit_bounds(Thumb::Min), Endpoints { min: 1.0, max: 100.0 });
    }

    #[test]
    fn test_fixed_labels_are_not_editable() {
        let mut slider = fixed();
        assert!(!slider.begin_edit(Thumb::Min));
        assert_eq!(slider.on_direct_edit(Thumb::Min, "10.99"), EditOutcome::Committed(10.99));
        assert_eq!(slider.min_index(), 2);
    }
}
