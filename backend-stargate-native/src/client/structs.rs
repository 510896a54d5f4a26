use serde::Deserialize;

/// Tendermint RPC `/status` envelope, reduced to the fields we read.
#[derive(Debug, Deserialize)]
pub struct StatusResponse {
    pub result: StatusResult,
}

#[derive(Debug, Deserialize)]
pub struct StatusResult {
    pub node_info: NodeInfo,
    pub sync_info: SyncInfo,
}

#[derive(Debug, Deserialize)]
pub struct NodeInfo {
    pub network: String,
}

#[derive(Debug, Deserialize)]
pub struct SyncInfo {
    pub latest_block_height: String,
}

/// Response of the `txs` broadcast endpoint.
#[derive(Debug, Deserialize)]
pub struct BroadcastResponse {
    pub txhash: String,
}
