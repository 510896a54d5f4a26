pub mod connector;

// re-export traits for consumers who need to provide valid implementors
pub use wcdk_core::{AminoSigner, PairingTransport, QrPresenter, WalletRpc};

// re-export libraries for consumers
pub use backend_stargate_native;
pub use wcdk_core;

pub use connector::WcConnector;
