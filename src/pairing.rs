/*!
Pairing with the mobile application.

When there is no injected provider on a mobile device the wallet is reached
through a pairing connector. Once the connector starts connecting, the pairing
URI is handed over to the mobile application by navigating to its deep link.

Everything happening on the connector is logged and reported as a
[`PairingEvent`]. Failures are not retried: if the URI can't be retrieved
the user simply gets no prompt.
*/

use crate::{
    connector::{ConnectorMessage, Navigator, PairingConnector},
    descriptor,
    error::{ConnectorError, NavigationError, ProviderUriError},
};
use futures::{
    channel::mpsc::{self, UnboundedReceiver, UnboundedSender},
    task::{LocalFutureObj, LocalSpawn},
};
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairingEvent {
    /// the connector reported an error
    Error(ConnectorError),
    /// the connector emitted a message of the given type
    Message(String),
    /// the page was redirected to the mobile application
    Redirected(String),
    UriUnavailable(ProviderUriError),
    NavigationFailed(NavigationError),
}

pub type PairingEvents = UnboundedReceiver<PairingEvent>;

/// The pairing connector with the listeners attached.
pub struct MobileConnection<P> {
    pub connector: P,
    pub events: PairingEvents,
}

#[derive(Clone)]
pub struct MobileConnector<P> {
    connector: P,
    android: bool,
    navigator: Rc<dyn Navigator>,
    spawner: Rc<dyn LocalSpawn>,
}

impl<P: PairingConnector> MobileConnector<P> {
    pub(crate) fn new(
        connector: P,
        android: bool,
        navigator: Rc<dyn Navigator>,
        spawner: Rc<dyn LocalSpawn>,
    ) -> Self {
        Self {
            connector,
            android,
            navigator,
            spawner,
        }
    }

    /// Attach the `error` and `message` listeners to the connector and
    /// return it.
    ///
    /// Every call attaches a new pair of listeners.
    pub async fn connect(&self) -> MobileConnection<P> {
        let (sender, events) = mpsc::unbounded();

        let errors = sender.clone();
        self.connector.on_error(Box::new(move |error: ConnectorError| {
            log::error!("onError {error}");
            report(&errors, PairingEvent::Error(error));
        }));

        let connector = self.connector.clone();
        let android = self.android;
        let navigator = Rc::clone(&self.navigator);
        let spawner = Rc::clone(&self.spawner);
        self.connector.on_message(Box::new(move |message: ConnectorMessage| {
            log::debug!("onMessage: MetaMask {}", message.kind);
            let connecting = message.is_connecting();
            report(&sender, PairingEvent::Message(message.kind));

            if connecting {
                let redirection = LocalFutureObj::new(Box::new(redirect(
                    connector.clone(),
                    android,
                    Rc::clone(&navigator),
                    sender.clone(),
                )));
                if let Err(error) = spawner.spawn_local_obj(redirection) {
                    log::error!("Couldn't redirect to the mobile application: {error}");
                }
            }
        }));

        MobileConnection {
            connector: self.connector.clone(),
            events,
        }
    }
}

async fn redirect<P: PairingConnector>(
    connector: P,
    android: bool,
    navigator: Rc<dyn Navigator>,
    events: UnboundedSender<PairingEvent>,
) {
    let event = match connector.provider_uri().await {
        Ok(uri) => {
            let target = descriptor::deep_link(&uri, android);
            match navigator.navigate(&target) {
                Ok(()) => PairingEvent::Redirected(target),
                Err(error) => {
                    log::warn!("{error}");
                    PairingEvent::NavigationFailed(error)
                }
            }
        }
        Err(error) => {
            log::warn!("catch bad URI: {error}");
            PairingEvent::UriUnavailable(error)
        }
    };

    report(&events, event);
}

// nobody listening to the events is fine
fn report(events: &UnboundedSender<PairingEvent>, event: PairingEvent) {
    let _ = events.unbounded_send(event);
}
