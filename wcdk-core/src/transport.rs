use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Session lifecycle notifications emitted by a pairing transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Connected,
    Disconnected,
    Updated,
}

pub type SessionEventHandler = Box<dyn Fn(SessionEvent) + Send + Sync>;

/// Application metadata identifying this client during the pairing
/// handshake. Consumed by transport implementations at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientMeta {
    pub name: String,
    pub description: String,
    pub url: String,
    pub icons: Vec<String>,
}

/// The protocol layer establishing an encrypted session between app and
/// wallet. Implementations own all session state; this crate only observes
/// it and never mutates transport internals.
#[async_trait]
pub trait PairingTransport: Send + Sync {
    /// Whether a session is currently live.
    fn connected(&self) -> bool;

    /// Whether a pairing handshake has been created but not yet approved.
    fn pending(&self) -> bool;

    /// The pairing URI to present while a handshake is pending.
    fn pairing_uri(&self) -> Option<String>;

    /// Establish a session, suspending until the wallet approves or rejects.
    async fn connect(&self) -> anyhow::Result<()>;

    /// Terminate the active session.
    async fn kill_session(&self) -> anyhow::Result<()>;

    /// Register a handler invoked on every session lifecycle event.
    fn on_session_event(&self, handler: SessionEventHandler);
}
