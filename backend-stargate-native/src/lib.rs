pub mod error;

mod client;
mod relay;
mod signing;

pub use client::{broadcast_url, HttpClient, StargateClient};
pub use relay::TxRelay;
pub use signing::SigningStargateClient;

#[cfg(feature = "reqwest-client")]
pub use client::ReqwestClient;

// Re-export core types consumers need alongside the clients
pub use wcdk_core::{BroadcastMode, TxSender};
