use std::sync::{Arc, Mutex};

use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Events emitted on the connector's event surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectorEvent {
    Connect,
    Disconnect,
    /// The session changed (accounts or chain set updated).
    Change,
    /// A chain was enabled for signing.
    Enable(String),
}

/// Typed fan-out emitter. Every subscriber receives every event emitted
/// after it subscribed; subscribers that dropped their receiver are pruned
/// on the next emit.
#[derive(Debug, Clone)]
pub struct EventEmitter<E: Clone> {
    subscribers: Arc<Mutex<Vec<UnboundedSender<E>>>>,
}

impl<E: Clone> EventEmitter<E> {
    pub fn new() -> Self {
        Self {
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn subscribe(&self) -> UnboundedReceiver<E> {
        let (tx, rx) = mpsc::unbounded();
        self.lock().push(tx);
        rx
    }

    pub fn emit(&self, event: E) {
        self.lock()
            .retain(|tx| tx.unbounded_send(event.clone()).is_ok());
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<UnboundedSender<E>>> {
        // a poisoned lock only means another emitter panicked mid-emit;
        // the subscriber list itself stays valid
        self.subscribers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[cfg(test)]
    fn subscriber_count(&self) -> usize {
        self.lock().len()
    }
}

impl<E: Clone> Default for EventEmitter<E> {
    fn default() -> Self {
        Self::new()
    }
}
