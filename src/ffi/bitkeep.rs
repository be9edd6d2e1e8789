use wasm_bindgen::JsValue;

/// Where BitKeep injects its provider, from the global object (`window`
/// in a page).
pub const PROVIDER_PATH: &[&str] = &["bitkeep", "ethereum"];

/// Lookup the value at the given path from the global object.
///
/// The page is looked up every time: the extension may inject the provider
/// after the wasm module was loaded. Returns `undefined` if any of the
/// intermediate values is not an object.
pub fn lookup(path: &[&str]) -> JsValue {
    path.iter()
        .try_fold(JsValue::from(js_sys::global()), |object, key| {
            Some(object)
                .filter(JsValue::is_object)
                .and_then(|object| js_sys::Reflect::get(&object, &JsValue::from_str(key)).ok())
        })
        .unwrap_or(JsValue::UNDEFINED)
}

/// Lookup the provider BitKeep injects at `window.bitkeep.ethereum`.
pub fn ethereum() -> JsValue {
    lookup(PROVIDER_PATH)
}
