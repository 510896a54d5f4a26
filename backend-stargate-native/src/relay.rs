use async_trait::async_trait;

use wcdk_core::{BroadcastMode, ChainRegistry, TxSender};

use crate::client::{HttpClient, StargateClient};
use crate::error::Result;

/// Broadcast relay: resolves a chain id to its configured RPC base and
/// forwards the signed tx. This is the `send_tx` hook handed to a
/// wallet-RPC implementation.
#[derive(Clone)]
pub struct TxRelay<H: HttpClient> {
    chains: ChainRegistry,
    http: H,
}

impl<H: HttpClient> TxRelay<H> {
    pub fn new(chains: ChainRegistry, http: H) -> Self {
        Self { chains, http }
    }

    pub async fn send_tx(
        &self,
        chain_id: &str,
        tx: &serde_json::Value,
        mode: BroadcastMode,
    ) -> Result<Vec<u8>> {
        let chain = self.chains.get(chain_id)?;
        let client = StargateClient::new(&chain.rpc, self.http.clone())?;

        log::info!("relaying tx for chain {}", chain_id);
        client.broadcast_tx(tx, mode).await
    }
}

#[async_trait]
impl<H: HttpClient + 'static> TxSender for TxRelay<H> {
    async fn send_tx(
        &self,
        chain_id: &str,
        tx: &serde_json::Value,
        mode: BroadcastMode,
    ) -> anyhow::Result<Vec<u8>> {
        Ok(TxRelay::send_tx(self, chain_id, tx, mode).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_http::MockHttp;
    use futures::executor::block_on;
    use serde_json::json;
    use wcdk_core::{ChainInfo, Currency, Error};

    fn registry() -> ChainRegistry {
        let atom = Currency {
            coin_denom: "ATOM".to_string(),
            coin_minimal_denom: "uatom".to_string(),
            coin_decimals: 6,
        };
        ChainRegistry::new(vec![ChainInfo {
            chain_id: "cosmoshub-4".to_string(),
            chain_name: "Cosmos Hub".to_string(),
            rpc: "https://x/rpc".to_string(),
            rest: "https://x/lcd".to_string(),
            stake_currency: atom.clone(),
            currencies: vec![atom.clone()],
            fee_currencies: vec![atom],
        }])
    }

    #[test]
    fn test_relay_resolves_chain_rpc() {
        let http = MockHttp::with_response(r#"{"txhash":"00FF"}"#);
        let relay = TxRelay::new(registry(), http.clone());

        let hash =
            block_on(relay.send_tx("cosmoshub-4", &json!({"a": 1}), BroadcastMode::Block))
                .unwrap();

        assert_eq!(hash, vec![0x00, 0xff]);
        let posts = http.posts();
        assert_eq!(posts.len(), 1);
        assert_eq!(
            posts[0],
            "https://x/rpc/txs?tx=%7B%22a%22%3A1%7D&mode=%22block%22"
        );
    }

    #[test]
    fn test_relay_rejects_unknown_chain() {
        let relay = TxRelay::new(registry(), MockHttp::default());

        let err = block_on(relay.send_tx("nope-1", &json!({}), BroadcastMode::Sync)).unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Core(Error::UnknownChain(id)) if id == "nope-1"
        ));
    }
}
