//! Presentation state derived for the controls rendered inside a slider.
//!
//! Views are plain snapshots: build them from a slider with `from_slider`, or
//! from the slider provided in scope with [`thumb_view`], [`track_view`] and
//! [`label_view`]. Class names follow the block/element/modifier scheme,
//! prefixed per mode (`range__thumb`, `fixed-range__thumb`, ...).

use crate::{
    accessibility::ThumbSemantics,
    context::use_range,
    domain::RangeDomain,
    slider::RangeSlider,
    store::{Endpoints, Thumb},
};

/// Thumbs closer than this many percentage points are drawn separated.
pub const SEPARATION_THRESHOLD: f64 = 1.0;

/// Whether two thumb positions are close enough to overlap visually.
pub fn is_separated(min_percentage: f64, max_percentage: f64) -> bool {
    (min_percentage - max_percentage).abs() < SEPARATION_THRESHOLD
}

/// Render state of one thumb.
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbView {
    /// Which thumb this is.
    pub thumb: Thumb,
    /// Value at the thumb.
    pub value: f64,
    /// Tooltip text for the value.
    pub display_value: String,
    /// Left offset along the track, in percent.
    pub position: f64,
    /// Whether the thumb is being dragged.
    pub is_active: bool,
    /// Whether both thumbs sit on top of each other.
    pub is_separated: bool,
    /// Accessibility semantics.
    pub semantics: ThumbSemantics,
    /// Class list.
    pub class_name: String,
}

impl ThumbView {
    /// Derives the view of `thumb` from `slider`.
    pub fn from_slider<D: RangeDomain>(slider: &RangeSlider<D>, thumb: Thumb) -> Self {
        let prefix = D::CLASS_PREFIX;
        let is_active = slider.active_thumb() == Some(thumb);
        let is_separated = is_separated(slider.min_percentage(), slider.max_percentage());

        let mut class_name = format!("{prefix}__thumb");
        if is_active {
            class_name.push_str(&format!(" {prefix}__thumb--active"));
        }
        if is_separated {
            class_name.push_str(&format!(" {prefix}__thumb--separated"));
        }

        Self {
            thumb,
            value: slider.value(thumb),
            display_value: slider.display_value(thumb),
            position: slider.store().percentage(thumb),
            is_active,
            is_separated,
            semantics: slider.semantics(thumb),
            class_name,
        }
    }
}

/// Render state of the track and its highlighted segment.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackView {
    /// Start of the highlighted segment, in percent.
    pub min_percentage: f64,
    /// End of the highlighted segment, in percent.
    pub max_percentage: f64,
    /// Class of the track.
    pub track_class: String,
    /// Class list of the highlighted segment.
    pub highlight_class: String,
}

impl TrackView {
    /// Derives the track view from `slider`.
    pub fn from_slider<D: RangeDomain>(slider: &RangeSlider<D>) -> Self {
        let prefix = D::CLASS_PREFIX;
        Self {
            min_percentage: slider.min_percentage(),
            max_percentage: slider.max_percentage(),
            track_class: format!("{prefix}__track"),
            highlight_class: format!("{prefix}__track-active {prefix}__track-highlighted"),
        }
    }

    /// Width of the highlighted segment, in percent.
    pub fn highlight_width(&self) -> f64 {
        self.max_percentage - self.min_percentage
    }
}

/// Render state of one value label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelView {
    /// Which thumb this label shows.
    pub thumb: Thumb,
    /// Value shown.
    pub value: f64,
    /// Text shown while not editing.
    pub display_value: String,
    /// Whether clicking opens an editor.
    pub is_editable: bool,
    /// Whether the editor is open.
    pub is_editing: bool,
    /// Editor text while editing.
    pub draft: Option<String>,
    /// Bounds a typed value is clamped to; `None` when not editable.
    pub constraints: Option<Endpoints<f64>>,
    /// Accessible name.
    pub aria_label: &'static str,
    /// Class list.
    pub class_name: &'static str,
}

impl LabelView {
    /// Derives the label view of `thumb` from `slider`.
    pub fn from_slider<D: RangeDomain>(slider: &RangeSlider<D>, thumb: Thumb) -> Self {
        let is_editable = slider.store().domain().is_editable();
        let editor = slider.editor(thumb);
        Self {
            thumb,
            value: slider.value(thumb),
            display_value: slider.display_value(thumb),
            is_editable,
            is_editing: editor.is_editing(),
            draft: editor.draft().map(str::to_owned),
            constraints: is_editable.then(|| edit_constraints(slider, thumb)),
            aria_label: thumb.label(),
            class_name: D::LABEL_CLASS,
        }
    }
}

fn edit_constraints<D: RangeDomain>(slider: &RangeSlider<D>, thumb: Thumb) -> Endpoints<f64> {
    let domain = slider.store().domain();
    let selection = slider.selection();
    let (floor, ceiling) = match thumb {
        Thumb::Min => (domain.lowest(), selection.max),
        Thumb::Max => (selection.min, domain.highest()),
    };
    Endpoints {
        min: domain.value_at(floor),
        max: domain.value_at(ceiling),
    }
}

/// View of `thumb` of the slider of mode `D` provided in scope.
///
/// # Panics
///
/// Panics outside a provider of mode `D`, see [`use_range`].
pub fn thumb_view<D: RangeDomain>(thumb: Thumb) -> ThumbView {
    let handle = use_range::<D>();
    let slider = handle.lock();
    ThumbView::from_slider(&slider, thumb)
}

/// Track view of the slider of mode `D` provided in scope.
///
/// # Panics
///
/// Panics outside a provider of mode `D`, see [`use_range`].
pub fn track_view<D: RangeDomain>() -> TrackView {
    let handle = use_range::<D>();
    let slider = handle.lock();
    TrackView::from_slider(&slider)
}

/// View of the label of `thumb` of the slider of mode `D` provided in scope.
///
/// # Panics
///
/// Panics outside a provider of mode `D`, see [`use_range`].
pub fn label_view<D: RangeDomain>(thumb: Thumb) -> LabelView {
    let handle = use_range::<D>();
    let slider = handle.lock();
    LabelView::from_slider(&slider, thumb)
}
