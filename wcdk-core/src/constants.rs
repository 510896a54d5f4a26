/// Stable connector identity.
pub const CONNECTOR_ID: &str = "keplr-wallet-connect";
pub const CONNECTOR_NAME: &str = "WalletConnect";

/// Default WalletConnect v1 bridge server.
pub const DEFAULT_BRIDGE_URL: &str = "https://bridge.walletconnect.org";

/// Wallet RPC methods requested during the pairing handshake.
pub const ENABLE_METHOD: &str = "keplr_enable_wallet_connect_v1";
pub const SIGN_AMINO_METHOD: &str = "keplr_sign_amino_wallet_connect_v1";
pub const SIGNING_METHODS: &[&str] = &[ENABLE_METHOD, SIGN_AMINO_METHOD];
