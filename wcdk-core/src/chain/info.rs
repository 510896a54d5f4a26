use serde::{Deserialize, Serialize};

/// Static chain descriptor, in the Keplr chain-registry JSON shape.
///
/// Supplied once at connector construction and immutable for the
/// connector's lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainInfo {
    pub chain_id: String,
    pub chain_name: String,
    /// Tendermint RPC base URL.
    pub rpc: String,
    /// LCD/REST base URL.
    pub rest: String,
    pub stake_currency: Currency,
    pub currencies: Vec<Currency>,
    pub fee_currencies: Vec<Currency>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub coin_denom: String,
    pub coin_minimal_denom: String,
    pub coin_decimals: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_info_from_registry_json() {
        // key casing follows the upstream chain-registry files
        let json = r#"{
            "chainId": "cosmoshub-4",
            "chainName": "Cosmos Hub",
            "rpc": "https://rpc-cosmoshub.keplr.app",
            "rest": "https://lcd-cosmoshub.keplr.app",
            "stakeCurrency": {
                "coinDenom": "ATOM",
                "coinMinimalDenom": "uatom",
                "coinDecimals": 6
            },
            "currencies": [
                {
                    "coinDenom": "ATOM",
                    "coinMinimalDenom": "uatom",
                    "coinDecimals": 6
                }
            ],
            "feeCurrencies": [
                {
                    "coinDenom": "ATOM",
                    "coinMinimalDenom": "uatom",
                    "coinDecimals": 6
                }
            ]
        }"#;

        let info: ChainInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.chain_id, "cosmoshub-4");
        assert_eq!(info.stake_currency.coin_minimal_denom, "uatom");
        assert_eq!(info.currencies.len(), 1);
        assert_eq!(info.fee_currencies[0].coin_decimals, 6);
    }
}
