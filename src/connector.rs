use crate::{
    error::{ConnectorError, NavigationError, ProviderUriError},
    ffi,
    pairing::MobileConnector,
    provider::InjectedProvider,
};
use std::future::Future;

/// The connector library the wallet entry delegates the actual connection to.
///
/// In the browser this is implemented on top of wagmi's connectors (`wagmi`
/// feature).
pub trait ConnectorLibrary {
    /// The chains to connect to, passed through to the connectors.
    type Chains;
    type Injected;
    type Pairing: PairingConnector;

    /// the injected connector, bound to the provider at
    /// `options.provider_path`. `ready` is the readiness snapshot of the
    /// wallet entry.
    fn injected(
        &self,
        chains: &Self::Chains,
        options: &InjectedOptions,
        ready: bool,
    ) -> Result<Self::Injected, ConnectorError>;

    /// the pre-configured pairing (WalletConnect) connector
    fn pairing(&self, chains: &Self::Chains) -> Result<Self::Pairing, ConnectorError>;
}

/// A connector pairing with the mobile application through a connection URI.
pub trait PairingConnector: Clone + 'static {
    /// listen to the `error` events of the connector
    fn on_error(&self, listener: Box<dyn FnMut(ConnectorError)>);

    /// listen to the `message` events of the connector
    fn on_message(&self, listener: Box<dyn FnMut(ConnectorMessage)>);

    /// retrieve the URI the mobile application needs to pair with the
    /// connector.
    fn provider_uri(&self) -> impl Future<Output = Result<String, ProviderUriError>>;
}

/// Handover to the mobile application.
pub trait Navigator {
    /// navigate the current page to `target`
    fn navigate(&self, target: &str) -> Result<(), NavigationError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Deserialize)]
pub struct ConnectorMessage {
    #[serde(rename = "type")]
    pub kind: String,
}

impl ConnectorMessage {
    pub const CONNECTING: &'static str = "connecting";

    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }

    /// the connector is waiting for the mobile application to connect
    pub fn is_connecting(&self) -> bool {
        self.kind == Self::CONNECTING
    }
}

/// Options of the injected connector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InjectedOptions {
    /// identifier of the connector, set on the constructed connector
    #[serde(skip)]
    pub id: &'static str,
    pub name: &'static str,
    /// path of the provider from the global object, the connector gets its
    /// provider from there instead of `window.ethereum`
    #[serde(skip)]
    pub provider_path: &'static [&'static str],
    /// simulate the disconnection, the provider does not support it
    pub shim_disconnect: bool,
    pub shim_chain_changed_disconnect: bool,
    #[serde(rename = "UNSTABLE_shimOnConnectSelectAccount")]
    pub unstable_shim_on_connect_select_account: bool,
}

impl InjectedOptions {
    pub const BITKEEP: Self = Self {
        id: BitkeepConnector::<()>::ID,
        name: BitkeepConnector::<()>::NAME,
        provider_path: ffi::bitkeep::PROVIDER_PATH,
        shim_disconnect: true,
        shim_chain_changed_disconnect: true,
        unstable_shim_on_connect_select_account: true,
    };
}

/// The injected connector, bound to the BitKeep provider.
#[derive(Debug, Clone, PartialEq)]
pub struct BitkeepConnector<I> {
    inner: I,
    ready: bool,
    provider: InjectedProvider,
}

impl<I> BitkeepConnector<I> {
    pub const ID: &'static str = "Bitkeep";
    pub const NAME: &'static str = "BitKeep";

    /// The readiness is computed from the given snapshot of the provider
    /// and is never refreshed.
    pub fn new(inner: I, provider: InjectedProvider) -> Self {
        Self {
            inner,
            ready: provider.is_installed(),
            provider,
        }
    }

    pub fn id(&self) -> &'static str {
        Self::ID
    }

    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    /// the genuine BitKeep provider was found when the connector was created
    pub fn ready(&self) -> bool {
        self.ready
    }

    pub fn provider(&self) -> &InjectedProvider {
        &self.provider
    }

    pub fn inner(&self) -> &I {
        &self.inner
    }

    pub fn into_inner(self) -> I {
        self.inner
    }
}

/// The connector selected to connect to the wallet. Only one of them is ever
/// created.
#[derive(Debug, Clone, PartialEq)]
pub enum Connector<I, P> {
    Injected(BitkeepConnector<I>),
    Pairing(P),
}

impl<I, P> Connector<I, P> {
    pub fn is_pairing(&self) -> bool {
        matches!(self, Self::Pairing(_))
    }

    pub fn injected(&self) -> Option<&BitkeepConnector<I>> {
        match self {
            Self::Injected(connector) => Some(connector),
            Self::Pairing(_) => None,
        }
    }

    pub fn pairing(&self) -> Option<&P> {
        match self {
            Self::Injected(_) => None,
            Self::Pairing(connector) => Some(connector),
        }
    }
}

/// What the wallet list gets to connect with the wallet.
pub struct ConnectorHandle<I, P> {
    connector: Connector<I, P>,
    mobile_connector: Option<MobileConnector<P>>,
}

impl<I, P: PairingConnector> ConnectorHandle<I, P> {
    pub(crate) fn injected(connector: BitkeepConnector<I>) -> Self {
        Self {
            connector: Connector::Injected(connector),
            mobile_connector: None,
        }
    }

    pub(crate) fn pairing(connector: P, mobile_connector: MobileConnector<P>) -> Self {
        Self {
            connector: Connector::Pairing(connector),
            mobile_connector: Some(mobile_connector),
        }
    }

    pub fn connector(&self) -> &Connector<I, P> {
        &self.connector
    }

    /// Only set when pairing with the mobile application: the
    /// [`MobileConnector`] redirects to the mobile application once the
    /// connector starts connecting.
    pub fn mobile_connector(&self) -> Option<&MobileConnector<P>> {
        self.mobile_connector.as_ref()
    }

    /// the pairing URI, there is none with the injected connector
    pub async fn uri(&self) -> Result<Option<String>, ProviderUriError> {
        match &self.connector {
            Connector::Injected(_) => Ok(None),
            Connector::Pairing(connector) => connector.provider_uri().await.map(Some),
        }
    }
}
