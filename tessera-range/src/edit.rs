//! Direct numeric entry into a thumb's value label.
//!
//! Edits are clamped to the thumb's allowed range but never snapped to the
//! step. Text that is not a finite number leaves the selection unchanged.

use tracing::{debug, warn};

use crate::{
    domain::RangeDomain,
    store::{RangeStore, Thumb},
};

/// Result of a direct edit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditOutcome {
    /// The edit was committed; carries the committed value.
    Committed(f64),
    /// The edit was ignored and the selection is unchanged.
    Rejected,
}

/// Parses edit text as a finite number, ignoring surrounding whitespace.
pub fn parse_numeric(text: &str) -> Option<f64> {
    let value: f64 = text.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

/// Commits `text` as the new value of `thumb`.
pub fn apply_edit<D: RangeDomain>(
    store: &mut RangeStore<D>,
    thumb: Thumb,
    text: &str,
) -> EditOutcome {
    let Some(value) = parse_numeric(text) else {
        warn!(?thumb, text, "ignoring non-numeric edit");
        return EditOutcome::Rejected;
    };
    let Some(requested) = store.domain().edit_request(value) else {
        debug!(?thumb, value, mode = D::MODE, "edit outside the permitted values");
        return EditOutcome::Rejected;
    };
    let committed = store.update(thumb, requested);
    EditOutcome::Committed(store.domain().value_at(committed))
}

/// In-place editing state of one value label.
///
/// `begin` opens a draft seeded with the current value, `apply` commits it
/// and `cancel` throws it away. Both close the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSession {
    draft: Option<String>,
}

impl EditSession {
    /// Whether a draft is open.
    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    /// The open draft.
    pub fn draft(&self) -> Option<&str> {
        self.draft.as_deref()
    }

    /// Opens a draft seeded with the current value of `thumb`.
    ///
    /// Returns `false`, leaving the session closed, when the mode has no
    /// editable labels.
    pub fn begin<D: RangeDomain>(&mut self, store: &RangeStore<D>, thumb: Thumb) -> bool {
        if !store.domain().is_editable() {
            return false;
        }
        let value = store.domain().value_at(store.endpoint(thumb));
        self.draft = Some(value.to_string());
        true
    }

    /// Replaces the draft text. Ignored when no draft is open.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        if let Some(draft) = self.draft.as_mut() {
            *draft = text.into();
        }
    }

    /// Commits the draft and closes the session.
    pub fn apply<D: RangeDomain>(
        &mut self,
        store: &mut RangeStore<D>,
        thumb: Thumb,
    ) -> EditOutcome {
        match self.draft.take() {
            Some(draft) => apply_edit(store, thumb, &draft),
            None => EditOutcome::Rejected,
        }
    }

    /// Discards the draft and closes the session.
    pub fn cancel(&mut self) {
        self.draft = None;
    }

    /// Handles a key pressed inside the editor: `Enter` applies, `Escape`
    /// cancels, anything else is left to the input.
    pub fn handle_key<D: RangeDomain>(
        &mut self,
        store: &mut RangeStore<D>,
        thumb: Thumb,
        key: &str,
    ) -> Option<EditOutcome> {
        match key {
            "Enter" => Some(self.apply(store, thumb)),
            "Escape" => {
                self.cancel();
                None
            }
            _ => None,
        }
    }
}
