use crate::{
    connector::{BitkeepConnector, ConnectorHandle, ConnectorLibrary, InjectedOptions, Navigator},
    descriptor::WalletDescriptor,
    environment::Environment,
    error::ConnectorError,
    pairing::MobileConnector,
};
use futures::task::LocalSpawn;
use std::rc::Rc;

/// The BitKeep entry of the wallet list.
///
/// The entry is displayed as MetaMask: BitKeep's injected provider answers to
/// the MetaMask requests and on mobile it pairs with the MetaMask application.
pub struct BitkeepWallet<L: ConnectorLibrary> {
    library: L,
    chains: L::Chains,
    environment: Environment,
    navigator: Rc<dyn Navigator>,
    spawner: Rc<dyn LocalSpawn>,
}

impl<L: ConnectorLibrary> BitkeepWallet<L> {
    pub fn new(
        library: L,
        chains: L::Chains,
        environment: Environment,
        navigator: Rc<dyn Navigator>,
        spawner: Rc<dyn LocalSpawn>,
    ) -> Self {
        Self {
            library,
            chains,
            environment,
            navigator,
            spawner,
        }
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn library(&self) -> &L {
        &self.library
    }

    /// pair with the mobile application instead of using the injected
    /// provider
    ///
    /// This is only the case on mobile devices without the provider
    /// injected.
    pub fn should_use_pairing(&self) -> bool {
        self.environment.should_use_pairing()
    }

    pub fn descriptor(&self) -> WalletDescriptor {
        WalletDescriptor::for_environment(&self.environment)
    }

    /// Create the connector to connect to the wallet.
    ///
    /// Either the injected connector or the pairing connector is created,
    /// the pairing connector comes with the [`MobileConnector`] to redirect
    /// to the mobile application.
    pub fn create_connector(
        &self,
    ) -> Result<ConnectorHandle<L::Injected, L::Pairing>, ConnectorError> {
        if self.should_use_pairing() {
            let connector = self.library.pairing(&self.chains)?;
            let mobile_connector = MobileConnector::new(
                connector.clone(),
                self.environment.is_android(),
                Rc::clone(&self.navigator),
                Rc::clone(&self.spawner),
            );
            Ok(ConnectorHandle::pairing(connector, mobile_connector))
        } else {
            let inner = self
                .library
                .injected(
                    &self.chains,
                    &InjectedOptions::BITKEEP,
                    self.environment.is_installed(),
                )?;
            Ok(ConnectorHandle::injected(BitkeepConnector::new(
                inner,
                self.environment.provider.clone(),
            )))
        }
    }
}
