//! Editor notifications for the hosting page
//!
//! Provides:
//! - Event types for selection, element-count, context and history changes
//! - Event dispatcher for publishing events to subscribers

use crate::garment::{GarmentColor, GarmentPart};
use crate::types::ElementId;
use tokio::sync::broadcast;

/// Editor event types
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// Selection changed
    SelectionChanged(Option<ElementId>),
    /// The element list changed
    ElementsChanged {
        /// Elements drawn on the active part.
        on_active_part: usize,
        /// Elements across all parts.
        total: usize,
    },
    /// Active part or colour changed
    ContextChanged {
        /// The part now being edited.
        part: GarmentPart,
        /// The garment colour now shown.
        color: GarmentColor,
    },
    /// Undo/redo availability changed
    HistoryChanged {
        /// Whether an undo step exists.
        can_undo: bool,
        /// Whether a redo step exists.
        can_redo: bool,
    },
}

impl std::fmt::Display for EditorEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditorEvent::SelectionChanged(Some(id)) => write!(f, "Selected {}", id),
            EditorEvent::SelectionChanged(None) => write!(f, "Selection cleared"),
            EditorEvent::ElementsChanged {
                on_active_part,
                total,
            } => write!(f, "Elements: {} on part, {} total", on_active_part, total),
            EditorEvent::ContextChanged { part, color } => {
                write!(f, "Editing {} ({})", part, color)
            }
            EditorEvent::HistoryChanged { can_undo, can_redo } => {
                write!(f, "History: undo={} redo={}", can_undo, can_redo)
            }
        }
    }
}

/// Event dispatcher for publishing events to subscribers
#[derive(Debug, Clone)]
pub struct EventDispatcher {
    /// Broadcast sender channel for editor events.
    tx: broadcast::Sender<EditorEvent>,
}

impl EventDispatcher {
    /// Create a new event dispatcher
    ///
    /// # Arguments
    /// * `buffer_size` - Size of the broadcast buffer (default 64)
    pub fn new(buffer_size: usize) -> Self {
        let (tx, _) = broadcast::channel(buffer_size.max(1));
        Self { tx }
    }

    /// Subscribe to events
    pub fn subscribe(&self) -> broadcast::Receiver<EditorEvent> {
        self.tx.subscribe()
    }

    /// Publish an event to all subscribers.
    ///
    /// Returns the number of receivers reached; zero when nobody listens.
    pub fn publish(&self, event: EditorEvent) -> usize {
        match self.tx.send(event) {
            Ok(n) => n,
            Err(broadcast::error::SendError(event)) => {
                tracing::trace!("No subscribers for {}", event);
                0
            }
        }
    }

    /// Get number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new(64)
    }
}
