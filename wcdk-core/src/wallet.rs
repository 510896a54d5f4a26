use std::sync::Arc;

use async_trait::async_trait;

use crate::signer::AminoSigner;

/// The enable/sign surface a remote wallet exposes over the pairing
/// transport.
#[async_trait]
pub trait WalletRpc: Send + Sync {
    /// Run the wallet enable handshake for a chain. Fails if the wallet
    /// does not recognize the chain id or no session is active.
    async fn enable(&self, chain_id: &str) -> anyhow::Result<()>;

    /// Signing capability for an enabled chain.
    fn amino_signer(&self, chain_id: &str) -> anyhow::Result<Arc<dyn AminoSigner>>;
}
