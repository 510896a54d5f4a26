use std::sync::Arc;

use wcdk_core::amino::{AminoMsg, SignerData, StdFee, StdSignDoc, StdTx};
use wcdk_core::{AminoSigner, BroadcastMode};

use crate::client::{HttpClient, StargateClient};
use crate::error::Result;

/// A Stargate client paired with an amino signing capability.
#[derive(Debug)]
pub struct SigningStargateClient<H: HttpClient> {
    client: StargateClient<H>,
    signer: Arc<dyn AminoSigner>,
}

impl<H: HttpClient> SigningStargateClient<H> {
    pub fn new(rpc_url: &str, http: H, signer: Arc<dyn AminoSigner>) -> Result<Self> {
        Ok(Self {
            client: StargateClient::new(rpc_url, http)?,
            signer,
        })
    }

    pub fn from_client(client: StargateClient<H>, signer: Arc<dyn AminoSigner>) -> Self {
        Self { client, signer }
    }

    pub fn client(&self) -> &StargateClient<H> {
        &self.client
    }

    pub fn signer(&self) -> &Arc<dyn AminoSigner> {
        &self.signer
    }

    /// Build the sign doc, defer to the wallet, and assemble the
    /// broadcastable tx from the document the wallet actually signed.
    pub async fn sign(
        &self,
        signer_address: &str,
        msgs: Vec<AminoMsg>,
        fee: StdFee,
        memo: &str,
        signer_data: &SignerData,
    ) -> Result<StdTx> {
        let sign_doc = StdSignDoc::new(signer_data, msgs, fee, memo);
        let response = self.signer.sign_amino(signer_address, sign_doc).await?;

        Ok(StdTx::from_signed(response.signed, response.signature))
    }

    /// Sign and relay in one step, returning the raw txhash bytes.
    pub async fn sign_and_broadcast(
        &self,
        signer_address: &str,
        msgs: Vec<AminoMsg>,
        fee: StdFee,
        memo: &str,
        signer_data: &SignerData,
        mode: BroadcastMode,
    ) -> Result<Vec<u8>> {
        let tx = self
            .sign(signer_address, msgs, fee, memo, signer_data)
            .await?;
        let tx_json = serde_json::to_value(&tx)?;

        self.client.broadcast_tx(&tx_json, mode).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_http::MockHttp;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use serde_json::json;
    use wcdk_core::amino::{
        AminoSignResponse, Coin, PubKey, StdSignature, SECP256K1_PUBKEY_TYPE,
    };
    use wcdk_core::AccountData;

    /// Signer that echoes the proposed document back signed.
    #[derive(Debug)]
    struct EchoSigner;

    #[async_trait]
    impl AminoSigner for EchoSigner {
        async fn accounts(&self) -> anyhow::Result<Vec<AccountData>> {
            Ok(vec![AccountData {
                address: "cosmos1from".to_string(),
                algo: "secp256k1".to_string(),
                pubkey: vec![2; 33],
            }])
        }

        async fn sign_amino(
            &self,
            _signer_address: &str,
            sign_doc: StdSignDoc,
        ) -> anyhow::Result<AminoSignResponse> {
            Ok(AminoSignResponse {
                signed: sign_doc,
                signature: StdSignature {
                    pub_key: PubKey {
                        key_type: SECP256K1_PUBKEY_TYPE.to_string(),
                        value: "AtQ0".to_string(),
                    },
                    signature: "c2ln".to_string(),
                },
            })
        }
    }

    fn send_msg() -> AminoMsg {
        AminoMsg {
            msg_type: "cosmos-sdk/MsgSend".to_string(),
            value: json!({
                "from_address": "cosmos1from",
                "to_address": "cosmos1to",
                "amount": [{"amount": "1000", "denom": "uatom"}],
            }),
        }
    }

    fn fee() -> StdFee {
        StdFee {
            amount: vec![Coin {
                amount: "2500".to_string(),
                denom: "uatom".to_string(),
            }],
            gas: "200000".to_string(),
        }
    }

    fn signer_data() -> SignerData {
        SignerData {
            account_number: 7,
            sequence: 4,
            chain_id: "cosmoshub-4".to_string(),
        }
    }

    #[test]
    fn test_sign_builds_tx_from_signed_doc() {
        let client =
            SigningStargateClient::new("https://x/rpc", MockHttp::default(), Arc::new(EchoSigner))
                .unwrap();

        let tx = block_on(client.sign(
            "cosmos1from",
            vec![send_msg()],
            fee(),
            "a memo",
            &signer_data(),
        ))
        .unwrap();

        assert_eq!(tx.msg, vec![send_msg()]);
        assert_eq!(tx.fee, fee());
        assert_eq!(tx.memo, "a memo");
        assert_eq!(tx.signatures.len(), 1);
        assert_eq!(tx.signatures[0].signature, "c2ln");
    }

    #[test]
    fn test_sign_and_broadcast() {
        let http = MockHttp::with_response(r#"{"txhash":"CAFE"}"#);
        let client =
            SigningStargateClient::new("https://x/rpc", http.clone(), Arc::new(EchoSigner))
                .unwrap();

        let hash = block_on(client.sign_and_broadcast(
            "cosmos1from",
            vec![send_msg()],
            fee(),
            "",
            &signer_data(),
            BroadcastMode::Sync,
        ))
        .unwrap();

        assert_eq!(hash, vec![0xca, 0xfe]);
        let posts = http.posts();
        assert_eq!(posts.len(), 1);
        assert!(posts[0].starts_with("https://x/rpc/txs?tx="));
    }
}
