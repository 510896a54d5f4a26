use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// How the chain endpoint should wait on a broadcast transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BroadcastMode {
    /// Wait for the CheckTx result.
    Sync,
    /// Return immediately.
    Async,
    /// Wait for the tx to be committed in a block.
    Block,
}

/// Relay seam for sending a signed transaction to a chain's RPC endpoint.
/// This is the `send_tx` hook a wallet-RPC implementation needs when the
/// wallet asks the app to broadcast on its behalf.
#[async_trait]
pub trait TxSender: Send + Sync {
    /// Broadcast a JSON-encoded amino transaction, returning the raw
    /// txhash bytes.
    async fn send_tx(
        &self,
        chain_id: &str,
        tx: &serde_json::Value,
        mode: BroadcastMode,
    ) -> anyhow::Result<Vec<u8>>;
}
