use async_trait::async_trait;

use crate::amino::{AminoSignResponse, StdSignDoc};

/// An account the wallet exposes for a chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountData {
    /// Bech32 address.
    pub address: String,
    /// Key algorithm, e.g. "secp256k1".
    pub algo: String,
    /// Compressed public key bytes.
    pub pubkey: Vec<u8>,
}

/// Signing capability scoped to one chain: produces amino signatures over
/// sign documents for the wallet's address set.
#[async_trait]
pub trait AminoSigner: Send + Sync + std::fmt::Debug {
    async fn accounts(&self) -> anyhow::Result<Vec<AccountData>>;

    /// Ask the wallet to sign `sign_doc` with the key behind
    /// `signer_address`. The wallet may alter the document (e.g. adjust the
    /// fee); the response carries the document it actually signed.
    async fn sign_amino(
        &self,
        signer_address: &str,
        sign_doc: StdSignDoc,
    ) -> anyhow::Result<AminoSignResponse>;
}
