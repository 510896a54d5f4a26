pub mod amino;
pub mod constants;
pub mod error;

mod broadcast;
mod chain;
mod events;
mod qr;
mod signer;
mod transport;
mod wallet;

pub use broadcast::{BroadcastMode, TxSender};
pub use chain::{ChainInfo, ChainRegistry, Currency};
pub use error::{Error, Result};
pub use events::{ConnectorEvent, EventEmitter};
pub use qr::{LogQrPresenter, NoopQrPresenter, QrPresenter};
pub use signer::{AccountData, AminoSigner};
pub use transport::{ClientMeta, PairingTransport, SessionEvent, SessionEventHandler};
pub use wallet::WalletRpc;
