#![cfg(target_arch = "wasm32")]

use bitkeep_connector::{
    Environment, InjectedOptions, InjectedProvider, error::ConnectorError, ffi, web,
};
use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;

fn object(properties: &[(&str, JsValue)]) -> JsValue {
    let object = Object::new();
    for (key, value) in properties {
        Reflect::set(&object, &JsValue::from_str(key), value).unwrap();
    }
    object.into()
}

#[wasm_bindgen_test]
fn decode_js_provider() {
    let provider = object(&[
        ("isBitKeep", JsValue::TRUE),
        ("_events", object(&[])),
        ("chainId", JsValue::from_str("0x1")),
    ]);

    let injected = InjectedProvider::from_js(&provider);
    let candidate = injected.resolve().unwrap();
    assert!(candidate.has_events);
    assert!(!candidate.has_state);
}

#[wasm_bindgen_test]
fn decode_js_nested_providers() {
    let providers = Array::new();
    providers.push(&object(&[("isMetaMask", JsValue::TRUE)]));
    providers.push(&object(&[
        ("isBitKeep", JsValue::TRUE),
        ("isBraveWallet", JsValue::TRUE),
    ]));
    let provider = object(&[("isBitKeep", JsValue::TRUE), ("providers", providers.into())]);

    assert!(!InjectedProvider::from_js(&provider).is_installed());
}

#[wasm_bindgen_test]
fn decode_js_shapes() {
    assert_eq!(
        InjectedProvider::from_js(&JsValue::UNDEFINED),
        InjectedProvider::Absent
    );
    assert_eq!(InjectedProvider::from_js(&JsValue::NULL), InjectedProvider::Absent);
    assert_eq!(
        InjectedProvider::from_js(&JsValue::from_f64(1.0)),
        InjectedProvider::Unknown
    );
}

#[wasm_bindgen_test]
fn decode_js_errors() {
    let error: JsValue = js_sys::Error::new("User rejected the request.").into();
    assert_eq!(
        ConnectorError::from_js(error),
        ConnectorError::new("User rejected the request.")
    );
    assert_eq!(
        ConnectorError::from_js(JsValue::from_str("Session expired")),
        ConnectorError::new("Session expired")
    );

    let error = object(&[
        ("code", JsValue::from_str("ERR_NETWORK")),
        ("message", JsValue::from_str("Network request failed.")),
    ]);
    assert_eq!(
        ConnectorError::from_js(error),
        ConnectorError::new("Network request failed.")
    );
}

#[wasm_bindgen_test]
fn no_provider_injected() {
    assert!(ffi::bitkeep::ethereum().is_undefined());
    assert!(!Environment::detect().is_installed());
}

fn get(object: &JsValue, key: &str) -> JsValue {
    Reflect::get(object, &JsValue::from_str(key)).unwrap()
}

#[wasm_bindgen_test]
fn injected_options_bind_the_provider() {
    const PATH: &[&str] = &["bitkeepConnectorTest", "ethereum"];
    let options = web::injected_options(&InjectedOptions {
        provider_path: PATH,
        ..InjectedOptions::BITKEEP
    })
    .unwrap();

    assert_eq!(get(&options, "name").as_string().as_deref(), Some("BitKeep"));
    assert_eq!(get(&options, "shimDisconnect"), JsValue::TRUE);
    assert!(get(&options, "id").is_undefined());
    assert!(get(&options, "providerPath").is_undefined());

    let get_provider: Function = get(&options, "getProvider").dyn_into().unwrap();
    assert!(get_provider.call0(&JsValue::NULL).unwrap().is_undefined());

    // the provider is looked up on every call
    let provider = object(&[("isBitKeep", JsValue::TRUE)]);
    let global: JsValue = js_sys::global().into();
    Reflect::set(
        &global,
        &JsValue::from_str(PATH[0]),
        &object(&[("ethereum", provider.clone())]),
    )
    .unwrap();

    assert_eq!(get_provider.call0(&JsValue::NULL).unwrap(), provider);
    assert_eq!(ffi::bitkeep::lookup(PATH), provider);
    assert!(ffi::bitkeep::lookup(&[PATH[0], "ethereum", "isBitKeep", "x"]).is_undefined());

    Reflect::delete_property(&js_sys::global(), &JsValue::from_str(PATH[0])).unwrap();
}

#[wasm_bindgen_test]
fn descriptor_without_provider() {
    let descriptor = web::bitkeep_descriptor().unwrap();
    assert_eq!(get(&descriptor, "id").as_string().as_deref(), Some("metaMask"));
    assert_eq!(get(&descriptor, "installed"), JsValue::FALSE);
    assert_eq!(get(&descriptor, "scannable"), JsValue::FALSE);
}
