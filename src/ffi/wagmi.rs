use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "wagmi/connectors/injected")]
extern "C" {
    #[derive(Clone, PartialEq)]
    pub type InjectedConnector;

    /// `new InjectedConnector({ chains, options })`
    #[wasm_bindgen(constructor, catch)]
    pub fn new(config: &JsValue) -> Result<InjectedConnector, JsValue>;

    #[wasm_bindgen(method, getter)]
    pub fn id(this: &InjectedConnector) -> String;

    #[wasm_bindgen(method, getter)]
    pub fn name(this: &InjectedConnector) -> String;

    #[wasm_bindgen(method, getter)]
    pub fn ready(this: &InjectedConnector) -> bool;
}

#[wasm_bindgen(module = "wagmi/connectors/walletConnect")]
extern "C" {
    #[derive(Clone, PartialEq)]
    pub type WalletConnectConnector;

    /// `new WalletConnectConnector({ chains, options })`
    #[wasm_bindgen(constructor, catch)]
    pub fn new(config: &JsValue) -> Result<WalletConnectConnector, JsValue>;

    /// subscribe to the connector's events (`error`, `message`, `connect`...)
    #[wasm_bindgen(method)]
    pub fn on(this: &WalletConnectConnector, event: &str, listener: &js_sys::Function);

    /// The WalletConnect provider, its `connector.uri` is the pairing URI
    /// once the connector is connecting.
    #[wasm_bindgen(method, catch, js_name = "getProvider")]
    pub async fn get_provider(this: &WalletConnectConnector) -> Result<JsValue, JsValue>;
}
