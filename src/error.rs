use wasm_bindgen::JsValue;

/// Error reported by a connector, either through its `error` event or
/// while constructing it.
///
/// The JS connector libraries throw plain `Error` objects (sometimes with a
/// numerical `code`), this is the decoded form of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error, serde::Deserialize)]
#[error("{message}")]
pub struct ConnectorError {
    /// only numerical codes are kept, some libraries use string codes
    #[serde(default, deserialize_with = "error_code")]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: String,
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum ErrorCode {
    Integer(i64),
    Number(f64),
    Other(serde::de::IgnoredAny),
}

fn error_code<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let code = <Option<ErrorCode> as serde::Deserialize>::deserialize(deserializer)?;
    Ok(code.and_then(|code| match code {
        ErrorCode::Integer(code) => Some(code),
        ErrorCode::Number(code) if code.fract() == 0.0 => Some(code as i64),
        ErrorCode::Number(_) | ErrorCode::Other(_) => None,
    }))
}

impl ConnectorError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    /// decode the error thrown (or emitted) by a JS connector
    pub fn from_js(error: JsValue) -> Self {
        if let Some(message) = error.as_string() {
            return Self::new(message);
        }

        serde_wasm_bindgen::from_value(error.clone())
            .unwrap_or_else(|_| Self::new(format!("{error:?}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ProviderUriError {
    #[error("Couldn't retrieve the pairing provider: {0}")]
    Connector(#[from] ConnectorError),
    #[error("The pairing provider does not expose a connection URI")]
    MissingUri,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("Couldn't navigate to `{target}': {info}.")]
pub struct NavigationError {
    pub target: String,
    pub info: String,
}
