/*!

# BitKeep connector for web applications

This library provides the BitKeep entry of a wallet list in web applications.
It detects the provider BitKeep injects in the page and connects with it, or
pairs with the mobile application when there is no provider on a mobile device.

## Features

- Detect the genuine BitKeep provider, ignoring the wallets impersonating it
- Select the injected connector or the pairing connector
- Redirect to the mobile application with the pairing URI
- Describe the wallet (logos, download links) for the wallet list

## Usage

Take a snapshot of the page and check the provider is installed:

```no_run
use bitkeep_connector::Environment;

let environment = Environment::detect();
if environment.is_installed() {
    println!("BitKeep is installed");
}
```

The environment is a snapshot: it won't change if the provider is injected
later on.

The [`BitkeepWallet`] creates the connector. When pairing with the mobile
application, the [`MobileConnector`] needs to be connected to redirect to the
application once the connector starts connecting.

```no_run
# use bitkeep_connector::{BitkeepWallet, ConnectorLibrary};
#
# async fn test<L: ConnectorLibrary>(wallet: BitkeepWallet<L>) -> anyhow::Result<()> {
let handle = wallet.create_connector()?;
if let Some(mobile_connector) = handle.mobile_connector() {
    let mut connection = mobile_connector.connect().await;
    while let Ok(Some(event)) = connection.events.try_next() {
        println!("{event:?}");
    }
}
# Ok(()) }
```

*/

pub mod connector;
pub mod descriptor;
pub mod environment;
pub mod error;
pub mod ffi;
pub mod pairing;
pub mod provider;
#[cfg(test)]
mod testing;
mod wallet;
pub mod web;

pub use self::{
    connector::{
        BitkeepConnector, Connector, ConnectorHandle, ConnectorLibrary, ConnectorMessage,
        InjectedOptions, Navigator, PairingConnector,
    },
    descriptor::WalletDescriptor,
    environment::{Environment, Platform},
    pairing::{MobileConnection, MobileConnector, PairingEvent, PairingEvents},
    provider::{CandidateProvider, InjectedProvider},
    wallet::BitkeepWallet,
};
