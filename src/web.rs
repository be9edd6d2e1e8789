/*!
Browser side of the connector: reads the page, navigates it and runs the
futures on the browser's event loop.

With the `wagmi` feature the connectors are created with wagmi's
`InjectedConnector` and `WalletConnectConnector`. The bundler is expected to
resolve the `wagmi/connectors/injected` and
`wagmi/connectors/walletConnect` modules.
*/

use crate::{
    connector::{InjectedOptions, Navigator},
    descriptor::WalletDescriptor,
    environment::{Environment, Platform},
    error::{ConnectorError, NavigationError},
    ffi,
    provider::InjectedProvider,
};
use futures::task::{LocalFutureObj, LocalSpawn, SpawnError};
use wasm_bindgen::prelude::*;

/// Navigate the current page by setting `window.location.href`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebNavigator;

/// Spawn the futures on the browser's microtask queue.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebSpawner;

impl Navigator for WebNavigator {
    fn navigate(&self, target: &str) -> Result<(), NavigationError> {
        let window = web_sys::window().ok_or_else(|| NavigationError {
            target: target.to_owned(),
            info: "No window object available".to_owned(),
        })?;

        window
            .location()
            .set_href(target)
            .map_err(|error| NavigationError {
                target: target.to_owned(),
                info: format!("{error:?}"),
            })
    }
}

impl LocalSpawn for WebSpawner {
    fn spawn_local_obj(&self, future: LocalFutureObj<'static, ()>) -> Result<(), SpawnError> {
        wasm_bindgen_futures::spawn_local(future);
        Ok(())
    }
}

impl Environment {
    /// take the snapshot of the current page
    ///
    /// If BitKeep injects its provider after this call the environment won't
    /// see it, a new snapshot needs to be taken.
    pub fn detect() -> Self {
        let user_agent = web_sys::window()
            .and_then(|window| window.navigator().user_agent().ok())
            .unwrap_or_default();

        Self::new(
            Platform::from_user_agent(&user_agent),
            InjectedProvider::from_js(&ffi::bitkeep::ethereum()),
        )
    }
}

/// The wallet descriptor for the current page, as a JS object.
#[wasm_bindgen(js_name = "bitkeepDescriptor")]
pub fn bitkeep_descriptor() -> Result<JsValue, JsValue> {
    let descriptor = WalletDescriptor::for_environment(&Environment::detect());
    Ok(serde_wasm_bindgen::to_value(&descriptor)?)
}

fn to_js(value: &impl serde::Serialize) -> Result<JsValue, ConnectorError> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|error| ConnectorError::new(format!("Invalid connector options: {error}")))
}

fn set(target: &JsValue, key: &str, value: &JsValue) -> Result<(), ConnectorError> {
    js_sys::Reflect::set(target, &JsValue::from_str(key), value)
        .map(drop)
        .map_err(ConnectorError::from_js)
}

/// The options object of the injected connector.
///
/// `getProvider` returns the value at `options.provider_path`, looked up
/// when the connector asks for it.
pub fn injected_options(options: &InjectedOptions) -> Result<JsValue, ConnectorError> {
    let js_options = to_js(options)?;

    let path = options.provider_path;
    let get_provider = Closure::<dyn Fn() -> JsValue>::new(move || ffi::bitkeep::lookup(path));
    set(&js_options, "getProvider", &get_provider.into_js_value())?;

    Ok(js_options)
}

#[cfg(feature = "wagmi")]
pub use self::wagmi::{WebConnectors, bitkeep};

#[cfg(feature = "wagmi")]
mod wagmi {
    use super::{WebNavigator, WebSpawner, injected_options, set, to_js};
    use crate::{
        BitkeepWallet,
        connector::{ConnectorLibrary, ConnectorMessage, InjectedOptions, PairingConnector},
        environment::Environment,
        error::{ConnectorError, ProviderUriError},
        ffi::{InjectedConnector, WalletConnectConnector},
    };
    use std::{future::Future, rc::Rc};
    use wasm_bindgen::{JsCast, JsValue, closure::Closure};

    /// wagmi's connectors.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct WebConnectors;

    #[derive(serde::Serialize)]
    struct WalletConnectOptions {
        /// the QR code is not displayed, we redirect to the application
        qrcode: bool,
    }

    /// Create the BitKeep wallet entry for the current page.
    pub fn bitkeep(chains: JsValue) -> BitkeepWallet<WebConnectors> {
        BitkeepWallet::new(
            WebConnectors,
            chains,
            Environment::detect(),
            Rc::new(WebNavigator),
            Rc::new(WebSpawner),
        )
    }

    fn config(chains: &JsValue, options: &JsValue) -> Result<JsValue, ConnectorError> {
        let config: JsValue = js_sys::Object::new().into();
        set(&config, "chains", chains)?;
        set(&config, "options", options)?;
        Ok(config)
    }

    impl ConnectorLibrary for WebConnectors {
        type Chains = JsValue;
        type Injected = InjectedConnector;
        type Pairing = WalletConnectConnector;

        fn injected(
            &self,
            chains: &Self::Chains,
            options: &InjectedOptions,
            ready: bool,
        ) -> Result<Self::Injected, ConnectorError> {
            let config = config(chains, &injected_options(options)?)?;
            let connector = InjectedConnector::new(&config).map_err(ConnectorError::from_js)?;

            // wagmi derives them from `window.ethereum`
            set(&connector, "id", &JsValue::from_str(options.id))?;
            set(&connector, "ready", &JsValue::from_bool(ready))?;

            Ok(connector)
        }

        fn pairing(&self, chains: &Self::Chains) -> Result<Self::Pairing, ConnectorError> {
            let options = to_js(&WalletConnectOptions { qrcode: false })?;
            WalletConnectConnector::new(&config(chains, &options)?)
                .map_err(ConnectorError::from_js)
        }
    }

    impl PairingConnector for WalletConnectConnector {
        fn on_error(&self, mut listener: Box<dyn FnMut(ConnectorError)>) {
            let closure = Closure::<dyn FnMut(JsValue)>::new(move |error: JsValue| {
                listener(ConnectorError::from_js(error))
            });
            self.on("error", closure.as_ref().unchecked_ref());
            // the listener lives as long as the connector
            closure.forget();
        }

        fn on_message(&self, mut listener: Box<dyn FnMut(ConnectorMessage)>) {
            let closure = Closure::<dyn FnMut(JsValue)>::new(move |message: JsValue| {
                match serde_wasm_bindgen::from_value::<ConnectorMessage>(message) {
                    Ok(message) => listener(message),
                    Err(error) => log::warn!("Unexpected connector message: {error}"),
                }
            });
            self.on("message", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        fn provider_uri(&self) -> impl Future<Output = Result<String, ProviderUriError>> {
            let connector = self.clone();
            async move {
                let provider = connector
                    .get_provider()
                    .await
                    .map_err(ConnectorError::from_js)?;

                js_sys::Reflect::get(&provider, &JsValue::from_str("connector"))
                    .ok()
                    .and_then(|inner| js_sys::Reflect::get(&inner, &JsValue::from_str("uri")).ok())
                    .and_then(|uri| uri.as_string())
                    .filter(|uri| !uri.is_empty())
                    .ok_or(ProviderUriError::MissingUri)
            }
        }
    }
}
