use std::sync::Arc;

use backend_stargate_native::{HttpClient, SigningStargateClient, StargateClient};
use futures::channel::mpsc::UnboundedReceiver;
use wcdk_core::{
    constants, AminoSigner, ChainInfo, ChainRegistry, ConnectorEvent, Error, EventEmitter,
    PairingTransport, QrPresenter, Result, SessionEvent, WalletRpc,
};

/// Connector facade bridging an application to a remote signing wallet over
/// a WalletConnect v1 pairing transport.
///
/// Composes four externally supplied services: the pairing transport, the
/// wallet-RPC shim, a QR presenter, and an HTTP client for chain RPC
/// access. Session state is owned by the transport; the facade observes its
/// lifecycle events and re-emits them on its own event surface.
pub struct WcConnector<T, W, H>
where
    T: PairingTransport,
    W: WalletRpc,
    H: HttpClient,
{
    transport: Arc<T>,
    wallet: Arc<W>,
    presenter: Arc<dyn QrPresenter>,
    chains: ChainRegistry,
    http: H,
    events: EventEmitter<ConnectorEvent>,
}

impl<T, W, H> WcConnector<T, W, H>
where
    T: PairingTransport,
    W: WalletRpc,
    H: HttpClient,
{
    pub fn new(
        transport: Arc<T>,
        wallet: Arc<W>,
        presenter: Arc<dyn QrPresenter>,
        chain_infos: Vec<ChainInfo>,
        http: H,
    ) -> Self {
        let events = EventEmitter::new();

        let emitter = events.clone();
        transport.on_session_event(Box::new(move |event| {
            emitter.emit(match event {
                SessionEvent::Connected => ConnectorEvent::Connect,
                SessionEvent::Disconnected => ConnectorEvent::Disconnect,
                SessionEvent::Updated => ConnectorEvent::Change,
            });
        }));

        Self {
            transport,
            wallet,
            presenter,
            chains: ChainRegistry::new(chain_infos),
            http,
            events,
        }
    }

    /// Stable connector identity.
    pub fn id(&self) -> &'static str {
        constants::CONNECTOR_ID
    }

    pub fn name(&self) -> &'static str {
        constants::CONNECTOR_NAME
    }

    /// Whether the underlying transport has a live session.
    pub fn connected(&self) -> bool {
        self.transport.connected()
    }

    pub fn chains(&self) -> &ChainRegistry {
        &self.chains
    }

    /// Receiver of connector events. Each subscriber gets every event
    /// emitted after it subscribed.
    pub fn subscribe(&self) -> UnboundedReceiver<ConnectorEvent> {
        self.events.subscribe()
    }

    /// Establish a wallet session.
    ///
    /// No-op when already connected. While a pairing handshake is pending,
    /// the pairing URI is surfaced through the QR presenter; the presenter
    /// is closed once the transport resolves either way. The `Connect`
    /// event arrives via re-emission of the transport's connected event.
    pub async fn connect(&self) -> Result<()> {
        if self.transport.connected() {
            return Ok(());
        }

        if self.transport.pending() {
            if let Some(uri) = self.transport.pairing_uri() {
                self.presenter.open(&uri);
            }
        }

        let result = self.transport.connect().await.map_err(Error::transport);
        self.presenter.close();
        result?;

        log::info!("wallet session established");
        Ok(())
    }

    /// Terminate the active session, ending any in-progress signing
    /// capability.
    pub async fn disconnect(&self) -> Result<()> {
        self.transport
            .kill_session()
            .await
            .map_err(Error::transport)?;

        log::info!("wallet session terminated");
        Ok(())
    }

    /// Run the wallet enable handshake for `chain_id` and return the
    /// signing capability scoped to that chain. Emits exactly one
    /// `Enable` event per successful call.
    pub async fn get_signer(&self, chain_id: &str) -> Result<Arc<dyn AminoSigner>> {
        self.wallet
            .enable(chain_id)
            .await
            .map_err(Error::transport)?;
        let signer = self.wallet.amino_signer(chain_id).map_err(Error::transport)?;

        self.events.emit(ConnectorEvent::Enable(chain_id.to_string()));
        log::debug!("chain {} enabled for signing", chain_id);

        Ok(signer)
    }

    /// Read-only chain client for a configured chain. Fails with
    /// [`Error::UnknownChain`] for an id absent from the chain list.
    pub fn stargate_client(&self, chain_id: &str) -> Result<StargateClient<H>> {
        let chain = self.chains.get(chain_id)?;

        Ok(StargateClient::new(&chain.rpc, self.http.clone())?)
    }

    /// Signing-capable chain client; runs the enable handshake first. The
    /// chain id is resolved before the handshake, so an unconfigured chain
    /// fails without touching the wallet.
    pub async fn signing_stargate_client(
        &self,
        chain_id: &str,
    ) -> Result<SigningStargateClient<H>> {
        let chain = self.chains.get(chain_id)?;
        let signer = self.get_signer(chain_id).await?;

        Ok(SigningStargateClient::new(
            &chain.rpc,
            self.http.clone(),
            signer,
        )?)
    }
}
