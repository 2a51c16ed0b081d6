//! Document-level listener scope for drag gestures.
//!
//! A drag must resolve even when the pointer leaves the slider, so move and
//! release events are observed on the whole document while a drag is
//! active. The subscription is a scoped resource: [`ListenerGuard::acquire`]
//! subscribes, and dropping the guard unsubscribes, whichever way the drag
//! ends.
//!
//! Hosts implement [`DocumentTarget`] over their event system. The in-memory
//! [`DocumentListeners`] registry serves headless hosts and tests.

use std::sync::Arc;

use parking_lot::RwLock;
use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;
use tracing::debug;

new_key_type! {
    /// Handle of one document subscription.
    pub struct SubscriptionKey;
}

/// Document events observed during a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentEvent {
    /// `mousemove`
    MouseMove,
    /// `mouseup`
    MouseUp,
    /// `touchmove`
    TouchMove,
    /// `touchend`
    TouchEnd,
}

impl DocumentEvent {
    /// Every event a drag listens to.
    pub const DRAG: [DocumentEvent; 4] = [
        DocumentEvent::MouseMove,
        DocumentEvent::MouseUp,
        DocumentEvent::TouchMove,
        DocumentEvent::TouchEnd,
    ];

    /// DOM event name.
    pub fn name(self) -> &'static str {
        match self {
            DocumentEvent::MouseMove => "mousemove",
            DocumentEvent::MouseUp => "mouseup",
            DocumentEvent::TouchMove => "touchmove",
            DocumentEvent::TouchEnd => "touchend",
        }
    }
}

/// Something document-level listeners can be attached to.
pub trait DocumentTarget: Send + Sync {
    /// Starts delivering `events` and returns the subscription handle.
    fn subscribe(&self, events: &[DocumentEvent]) -> SubscriptionKey;

    /// Stops delivering the events of `key`. Unknown keys are ignored.
    fn unsubscribe(&self, key: SubscriptionKey);
}

/// Live document subscription, released on drop.
pub struct ListenerGuard {
    target: Arc<dyn DocumentTarget>,
    key: Option<SubscriptionKey>,
}

impl ListenerGuard {
    /// Subscribes `events` on `target`.
    pub fn acquire(target: Arc<dyn DocumentTarget>, events: &[DocumentEvent]) -> Self {
        let key = target.subscribe(events);
        debug!(?key, count = events.len(), "document listeners acquired");
        Self {
            target,
            key: Some(key),
        }
    }

    /// Subscription handle.
    pub fn key(&self) -> Option<SubscriptionKey> {
        self.key
    }

    /// Releases the subscription now instead of at drop.
    pub fn release(mut self) {
        self.unsubscribe();
    }

    fn unsubscribe(&mut self) {
        if let Some(key) = self.key.take() {
            self.target.unsubscribe(key);
            debug!(?key, "document listeners released");
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

type EventSet = SmallVec<[DocumentEvent; 4]>;

/// In-memory [`DocumentTarget`] that records which events are subscribed.
///
/// A headless host asks [`DocumentListeners::is_listening`] before routing a
/// document event to the slider.
#[derive(Default)]
pub struct DocumentListeners {
    subscriptions: RwLock<SlotMap<SubscriptionKey, EventSet>>,
}

impl DocumentListeners {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry behind an `Arc`, ready to hand to sliders.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Whether any subscription covers `event`.
    pub fn is_listening(&self, event: DocumentEvent) -> bool {
        self.listener_count(event) > 0
    }

    /// Number of subscriptions covering `event`.
    pub fn listener_count(&self, event: DocumentEvent) -> usize {
        self.subscriptions
            .read()
            .values()
            .filter(|events| events.contains(&event))
            .count()
    }

    /// Number of live subscriptions.
    pub fn active_subscriptions(&self) -> usize {
        self.subscriptions.read().len()
    }
}

impl DocumentTarget for DocumentListeners {
    fn subscribe(&self, events: &[DocumentEvent]) -> SubscriptionKey {
        self.subscriptions
            .write()
            .insert(events.iter().copied().collect())
    }

    fn unsubscribe(&self, key: SubscriptionKey) {
        self.subscriptions.write().remove(key);
    }
}

/// A fresh private registry, used when a slider is configured without a
/// document target.
pub(crate) fn detached_document() -> Arc<dyn DocumentTarget> {
    DocumentListeners::shared()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_releases_on_drop() {
        let listeners = DocumentListeners::shared();
        {
            let _guard = ListenerGuard::acquire(listeners.clone(), &DocumentEvent::DRAG);
            assert_eq!(listeners.active_subscriptions(), 1);
            assert!(listeners.is_listening(DocumentEvent::TouchEnd));
        }
        assert_eq!(listeners.active_subscriptions(), 0);
        assert!(!listeners.is_listening(DocumentEvent::MouseMove));
    }

    #[test]
    fn test_explicit_release() {
        let listeners = DocumentListeners::shared();
        let guard = ListenerGuard::acquire(listeners.clone(), &[DocumentEvent::MouseUp]);
        assert!(guard.key().is_some());
        assert!(!listeners.is_listening(DocumentEvent::MouseMove));
        guard.release();
        assert_eq!(listeners.active_subscriptions(), 0);
    }

    #[test]
    fn test_independent_subscriptions() {
        let listeners = DocumentListeners::shared();
        let first = ListenerGuard::acquire(listeners.clone(), &DocumentEvent::DRAG);
        let second = ListenerGuard::acquire(listeners.clone(), &DocumentEvent::DRAG);
        assert_eq!(listeners.listener_count(DocumentEvent::MouseMove), 2);
        drop(first);
        assert_eq!(listeners.listener_count(DocumentEvent::MouseMove), 1);
        drop(second);
        assert_eq!(listeners.active_subscriptions(), 0);
    }

    #[test]
    fn test_event_names() {
        let names: Vec<_> = DocumentEvent::DRAG.iter().map(|event| event.name()).collect();
        assert_eq!(names, ["mousemove", "mouseup", "touchmove", "touchend"]);
    }
}
