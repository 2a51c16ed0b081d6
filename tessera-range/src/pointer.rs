//! Pointer and touch drag controller.
//!
//! `Idle -> Dragging(thumb) -> Idle`. A drag starts when a thumb is pressed,
//! touched or focused, and ends on the next mouse-up or touch-end anywhere in
//! the document. While dragging, document-level listeners are held through a
//! [`ListenerGuard`]; leaving the dragging state drops it.

use std::sync::Arc;

use smallvec::SmallVec;
use tracing::{debug, instrument};

use crate::{
    domain::RangeDomain,
    listeners::{DocumentEvent, DocumentTarget, ListenerGuard},
    position::TrackRect,
    store::{RangeStore, Thumb},
};

/// Raw document event forwarded by the host while a drag is active.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    /// `mousemove` at `client_x`.
    MouseMove {
        /// Horizontal pointer coordinate.
        client_x: f64,
    },
    /// `touchmove`; only the first contact drives the drag.
    TouchMove {
        /// Horizontal coordinates of the active contacts, in contact order.
        touches: SmallVec<[f64; 2]>,
    },
    /// `mouseup`
    MouseUp,
    /// `touchend`
    TouchEnd,
}

impl PointerEvent {
    /// Mouse move at `client_x`.
    pub fn mouse_move(client_x: f64) -> Self {
        PointerEvent::MouseMove { client_x }
    }

    /// Touch move with the given contact coordinates.
    pub fn touch_move(touches: impl IntoIterator<Item = f64>) -> Self {
        PointerEvent::TouchMove {
            touches: touches.into_iter().collect(),
        }
    }

    /// Coordinate that drives the drag, if this is a move carrying one.
    pub fn client_x(&self) -> Option<f64> {
        match self {
            PointerEvent::MouseMove { client_x } => Some(*client_x),
            PointerEvent::TouchMove { touches } => touches.first().copied(),
            PointerEvent::MouseUp | PointerEvent::TouchEnd => None,
        }
    }

    /// Whether this event finishes a drag.
    pub fn ends_drag(&self) -> bool {
        matches!(self, PointerEvent::MouseUp | PointerEvent::TouchEnd)
    }

    /// Document event this pointer event arrives as.
    pub fn document_event(&self) -> DocumentEvent {
        match self {
            PointerEvent::MouseMove { .. } => DocumentEvent::MouseMove,
            PointerEvent::TouchMove { .. } => DocumentEvent::TouchMove,
            PointerEvent::MouseUp => DocumentEvent::MouseUp,
            PointerEvent::TouchEnd => DocumentEvent::TouchEnd,
        }
    }
}

/// Drag state of a slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// `thumb` follows the pointer.
    Dragging(Thumb),
}

struct DragSession {
    thumb: Thumb,
    _listeners: ListenerGuard,
}

/// Tracks the thumb being dragged and owns the document subscription.
pub struct DragController {
    document: Arc<dyn DocumentTarget>,
    session: Option<DragSession>,
}

impl DragController {
    /// Creates an idle controller that subscribes on `document` while
    /// dragging.
    pub fn new(document: Arc<dyn DocumentTarget>) -> Self {
        Self {
            document,
            session: None,
        }
    }

    /// Current drag state.
    pub fn state(&self) -> DragState {
        match &self.session {
            Some(session) => DragState::Dragging(session.thumb),
            None => DragState::Idle,
        }
    }

    /// Thumb being dragged, if any.
    pub fn active_thumb(&self) -> Option<Thumb> {
        self.session.as_ref().map(|session| session.thumb)
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Starts dragging `thumb`.
    ///
    /// Starting again while dragging switches the thumb and keeps the
    /// existing subscription.
    #[instrument(level = "trace", skip(self))]
    pub fn begin(&mut self, thumb: Thumb) {
        match &mut self.session {
            Some(session) => session.thumb = thumb,
            None => {
                let listeners = ListenerGuard::acquire(self.document.clone(), &DocumentEvent::DRAG);
                self.session = Some(DragSession {
                    thumb,
                    _listeners: listeners,
                });
                debug!(?thumb, "drag started");
            }
        }
    }

    /// Moves the active thumb to the point under `client_x`.
    ///
    /// Returns the committed point, or `None` when idle.
    pub fn move_to<D: RangeDomain>(
        &self,
        store: &mut RangeStore<D>,
        track: TrackRect,
        client_x: f64,
    ) -> Option<D::Point> {
        let thumb = self.active_thumb()?;
        let point = store.domain().from_position(track, client_x);
        Some(store.update(thumb, D::request(point)))
    }

    /// Feeds one document event into the drag.
    ///
    /// Release events end the drag. Moves update the active thumb and return
    /// the committed point; touch moves without contacts are ignored.
    #[instrument(level = "trace", skip(self, store))]
    pub fn handle<D: RangeDomain>(
        &mut self,
        store: &mut RangeStore<D>,
        event: &PointerEvent,
        track: TrackRect,
    ) -> Option<D::Point> {
        if event.ends_drag() {
            self.end();
            return None;
        }
        let client_x = event.client_x()?;
        self.move_to(store, track, client_x)
    }

    /// Ends the drag and releases the document listeners. No-op when idle.
    pub fn end(&mut self) {
        if let Some(session) = self.session.take() {
            debug!(thumb = ?session.thumb, "drag ended");
        }
    }
}
