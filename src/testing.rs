//! Test doubles of the connector library and of the page navigation.

use crate::{
    connector::{ConnectorLibrary, ConnectorMessage, InjectedOptions, Navigator, PairingConnector},
    error::{ConnectorError, NavigationError, ProviderUriError},
};
use std::{
    cell::{Cell, RefCell},
    fmt,
    future::Future,
    rc::Rc,
};

type ErrorListener = Box<dyn FnMut(ConnectorError)>;
type MessageListener = Box<dyn FnMut(ConnectorMessage)>;

struct PairingState {
    error_listeners: RefCell<Vec<ErrorListener>>,
    message_listeners: RefCell<Vec<MessageListener>>,
    uri: Result<String, ProviderUriError>,
}

/// Pairing connector whose events are emitted by the test.
#[derive(Clone)]
pub struct MockPairing(Rc<PairingState>);

impl MockPairing {
    pub fn with_uri(uri: Result<String, ProviderUriError>) -> Self {
        Self(Rc::new(PairingState {
            error_listeners: RefCell::default(),
            message_listeners: RefCell::default(),
            uri,
        }))
    }

    pub fn error_listeners(&self) -> usize {
        self.0.error_listeners.borrow().len()
    }

    pub fn message_listeners(&self) -> usize {
        self.0.message_listeners.borrow().len()
    }

    pub fn emit_error(&self, error: ConnectorError) {
        for listener in self.0.error_listeners.borrow_mut().iter_mut() {
            listener(error.clone());
        }
    }

    pub fn emit_message(&self, kind: &str) {
        for listener in self.0.message_listeners.borrow_mut().iter_mut() {
            listener(ConnectorMessage::new(kind));
        }
    }
}

impl Default for MockPairing {
    fn default() -> Self {
        Self::with_uri(Err(ProviderUriError::MissingUri))
    }
}

impl PartialEq for MockPairing {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for MockPairing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MockPairing")
            .field(&Rc::as_ptr(&self.0))
            .finish()
    }
}

impl PairingConnector for MockPairing {
    fn on_error(&self, listener: Box<dyn FnMut(ConnectorError)>) {
        self.0.error_listeners.borrow_mut().push(listener);
    }

    fn on_message(&self, listener: Box<dyn FnMut(ConnectorMessage)>) {
        self.0.message_listeners.borrow_mut().push(listener);
    }

    fn provider_uri(&self) -> impl Future<Output = Result<String, ProviderUriError>> {
        futures::future::ready(self.0.uri.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockInjected {
    pub chains: Vec<u64>,
    pub options: InjectedOptions,
    pub ready: bool,
}

/// Connector library counting the connectors it creates.
#[derive(Default)]
pub struct MockLibrary {
    pub pairing: MockPairing,
    pub injected_created: Cell<usize>,
    pub pairing_created: Cell<usize>,
}

impl MockLibrary {
    pub fn with_pairing(pairing: MockPairing) -> Self {
        Self {
            pairing,
            ..Self::default()
        }
    }
}

impl ConnectorLibrary for MockLibrary {
    type Chains = Vec<u64>;
    type Injected = MockInjected;
    type Pairing = MockPairing;

    fn injected(
        &self,
        chains: &Self::Chains,
        options: &InjectedOptions,
        ready: bool,
    ) -> Result<Self::Injected, ConnectorError> {
        self.injected_created.set(self.injected_created.get() + 1);
        Ok(MockInjected {
            chains: chains.clone(),
            options: options.clone(),
            ready,
        })
    }

    fn pairing(&self, _chains: &Self::Chains) -> Result<Self::Pairing, ConnectorError> {
        self.pairing_created.set(self.pairing_created.get() + 1);
        Ok(self.pairing.clone())
    }
}

/// Navigator recording where the page would have gone.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    targets: RefCell<Vec<String>>,
    failing: bool,
}

impl RecordingNavigator {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn targets(&self) -> Vec<String> {
        self.targets.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, target: &str) -> Result<(), NavigationError> {
        if self.failing {
            return Err(NavigationError {
                target: target.to_owned(),
                info: "No window object available".to_owned(),
            });
        }
        self.targets.borrow_mut().push(target.to_owned());
        Ok(())
    }
}
