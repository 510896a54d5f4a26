//! Amino JSON signing data model.
//!
//! The structs that end up inside a [`StdSignDoc`] declare their fields in
//! alphabetical order: amino signing requires canonical sorted-key JSON,
//! and serde emits struct fields in declaration order. Raw message payloads
//! (`serde_json::Value`) are sorted by `serde_json` itself.

use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

/// Amino type tag of a secp256k1 public key.
pub const SECP256K1_PUBKEY_TYPE: &str = "tendermint/PubKeySecp256k1";

/// A coin amount, value as a decimal string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub amount: String,
    pub denom: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StdFee {
    pub amount: Vec<Coin>,
    pub gas: String,
}

/// An amino-typed message, payload left as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AminoMsg {
    #[serde(rename = "type")]
    pub msg_type: String,
    pub value: serde_json::Value,
}

/// The document a wallet signs. Numbers are string-encoded, per amino JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StdSignDoc {
    pub account_number: String,
    pub chain_id: String,
    pub fee: StdFee,
    pub memo: String,
    pub msgs: Vec<AminoMsg>,
    pub sequence: String,
}

impl StdSignDoc {
    pub fn new(signer_data: &SignerData, msgs: Vec<AminoMsg>, fee: StdFee, memo: &str) -> Self {
        Self {
            account_number: signer_data.account_number.to_string(),
            chain_id: signer_data.chain_id.clone(),
            fee,
            memo: memo.to_string(),
            msgs,
            sequence: signer_data.sequence.to_string(),
        }
    }
}

/// An amino-typed public key, value base64-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PubKey {
    #[serde(rename = "type")]
    pub key_type: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StdSignature {
    pub pub_key: PubKey,
    /// Base64-encoded 64-byte signature.
    pub signature: String,
}

impl StdSignature {
    /// Build a secp256k1 signature entry from raw key and signature bytes.
    pub fn secp256k1(pubkey: &[u8], signature: &[u8]) -> Self {
        Self {
            pub_key: PubKey {
                key_type: SECP256K1_PUBKEY_TYPE.to_string(),
                value: BASE64_STANDARD.encode(pubkey),
            },
            signature: BASE64_STANDARD.encode(signature),
        }
    }
}

/// What a wallet returns from an amino sign request: the document it
/// actually signed (it may differ from the proposed one) plus the signature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AminoSignResponse {
    pub signed: StdSignDoc,
    pub signature: StdSignature,
}

/// Broadcastable amino transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StdTx {
    pub msg: Vec<AminoMsg>,
    pub fee: StdFee,
    pub signatures: Vec<StdSignature>,
    pub memo: String,
}

impl StdTx {
    /// Assemble a tx from the document the wallet signed. The broadcast
    /// payload must carry the signed document's contents, not the proposal.
    pub fn from_signed(signed: StdSignDoc, signature: StdSignature) -> Self {
        Self {
            msg: signed.msgs,
            fee: signed.fee,
            signatures: vec![signature],
            memo: signed.memo,
        }
    }
}

/// Account metadata needed to build a sign doc for a chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignerData {
    pub account_number: u64,
    pub sequence: u64,
    pub chain_id: String,
}
