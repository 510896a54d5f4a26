use url::Url;

use wcdk_core::BroadcastMode;

use super::http_trait::HttpClient;
use super::structs::{BroadcastResponse, StatusResponse};
use crate::error::Result;

/// Read/broadcast client for a Cosmos chain's Tendermint RPC endpoint,
/// generic over the HTTP client.
#[derive(Clone, Debug)]
pub struct StargateClient<H: HttpClient> {
    rpc_url: Url,
    http: H,
}

impl<H: HttpClient> StargateClient<H> {
    pub fn new(rpc_url: &str, http: H) -> Result<Self> {
        let mut rpc_url = Url::parse(rpc_url)?;

        // we need a trailing slash, if not present we append it
        if !rpc_url.path().ends_with('/') {
            rpc_url.set_path(&format!("{}/", rpc_url.path()));
        }

        Ok(StargateClient { rpc_url, http })
    }

    pub fn rpc_url(&self) -> &Url {
        &self.rpc_url
    }

    /// The chain id the endpoint reports.
    pub async fn chain_id(&self) -> Result<String> {
        Ok(self.status().await?.result.node_info.network)
    }

    /// Current chain tip height.
    pub async fn height(&self) -> Result<u64> {
        let status = self.status().await?;
        Ok(status.result.sync_info.latest_block_height.parse()?)
    }

    async fn status(&self) -> Result<StatusResponse> {
        let url = self.rpc_url.join("status")?;

        let body = self.http.get(url.as_str()).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// POST the JSON-encoded tx to the `txs` endpoint and return the raw
    /// txhash bytes.
    pub async fn broadcast_tx(
        &self,
        tx: &serde_json::Value,
        mode: BroadcastMode,
    ) -> Result<Vec<u8>> {
        let url = broadcast_url(&self.rpc_url, tx, mode)?;
        log::debug!("broadcasting tx to {}", url);

        let body = self.http.post(url.as_str()).await?;
        let res: BroadcastResponse = serde_json::from_str(&body)?;
        Ok(hex::decode(res.txhash)?)
    }
}

/// Build the broadcast URL: `<rpc-base>/txs?tx=<json>&mode=<json>`, both
/// query values JSON-encoded, then form-urlencoded by the query serializer.
pub fn broadcast_url(rpc_base: &Url, tx: &serde_json::Value, mode: BroadcastMode) -> Result<Url> {
    let mut url = rpc_base.join("txs")?;
    url.query_pairs_mut()
        .append_pair("tx", &serde_json::to_string(tx)?)
        .append_pair("mode", &serde_json::to_string(&mode)?);

    Ok(url)
}
