/*!
Detection of the injected BitKeep provider.

BitKeep injects an EIP-1193 provider at `window.bitkeep.ethereum`. Other
wallets are known to set the `isBitKeep` flag on their own provider to be
picked up by dApps, so the flag alone is not enough: we also look for the
flags those impostors leave behind.

This is a best effort detection. A wallet that mimics every marker we look at
will still be reported as BitKeep, and a genuine BitKeep provider hidden behind
an impostor we don't know about will be missed.
*/

use serde::{Deserialize, Deserializer, de::IgnoredAny};
use wasm_bindgen::JsValue;

/// Typed view of an injected provider object.
///
/// Only the properties used for the detection are decoded. Missing flags
/// (`undefined` or `null`) are considered `false`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct CandidateProvider {
    #[serde(default, rename = "isBitKeep", deserialize_with = "flag")]
    pub is_bit_keep: bool,
    #[serde(default, rename = "isBraveWallet", deserialize_with = "flag")]
    pub is_brave_wallet: bool,
    #[serde(default, rename = "isTokenPocket", deserialize_with = "flag")]
    pub is_token_pocket: bool,
    #[serde(default, rename = "isTokenary", deserialize_with = "flag")]
    pub is_tokenary: bool,
    /// the provider carries an event emitter state (`_events`)
    #[serde(default, rename = "_events", deserialize_with = "marker")]
    pub has_events: bool,
    /// the provider carries an internal state (`_state`)
    #[serde(default, rename = "_state", deserialize_with = "marker")]
    pub has_state: bool,
    /// when multiple wallets are installed some of them gather all the
    /// providers in this collection. Entries that don't look like a provider
    /// are kept as `None`.
    #[serde(default, deserialize_with = "providers")]
    pub providers: Vec<Option<CandidateProvider>>,
}

/// Read-only snapshot of the global provider slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InjectedProvider {
    /// nothing was injected (`undefined` or `null`)
    #[default]
    Absent,
    Candidate(CandidateProvider),
    /// something was injected but it does not look like a provider object
    Unknown,
}

fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

fn marker<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<IgnoredAny>::deserialize(deserializer)?.is_some())
}

/// A nested provider failing to decode does not invalidate its siblings.
struct NestedProvider(Option<CandidateProvider>);

impl<'de> Deserialize<'de> for NestedProvider {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Self(CandidateProvider::deserialize(deserializer).ok()))
    }
}

fn providers<'de, D>(deserializer: D) -> Result<Vec<Option<CandidateProvider>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<NestedProvider>>::deserialize(deserializer)?
        .unwrap_or_default()
        .into_iter()
        .map(|NestedProvider(candidate)| candidate)
        .collect())
}

/// check the given candidate is the genuine BitKeep provider
///
/// An absent candidate is never genuine.
pub fn is_genuine(candidate: Option<&CandidateProvider>) -> bool {
    candidate.is_some_and(CandidateProvider::is_genuine)
}

impl CandidateProvider {
    pub fn is_genuine(&self) -> bool {
        if !self.is_bit_keep {
            return false;
        }

        // Brave tries to make itself look like BitKeep, but without the
        // internal state of the actual provider.
        if self.is_brave_wallet && !self.has_events && !self.has_state {
            return false;
        }

        !(self.is_token_pocket || self.is_tokenary)
    }

    /// find the genuine provider, looking in the nested providers first
    ///
    /// If the candidate gathers nested providers, returns the first of them
    /// that is genuine. Otherwise the candidate itself is checked.
    pub fn find_genuine(&self) -> Option<&CandidateProvider> {
        if self.providers.is_empty() {
            Some(self).filter(|candidate| candidate.is_genuine())
        } else {
            self.providers
                .iter()
                .flatten()
                .find(|candidate| candidate.is_genuine())
        }
    }
}

impl InjectedProvider {
    /// decode the provider from its JSON representation
    pub fn from_json(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Absent,
            value @ serde_json::Value::Object(_) => serde_json::from_value(value)
                .map(Self::Candidate)
                .unwrap_or(Self::Unknown),
            _ => Self::Unknown,
        }
    }

    /// decode the provider from the object injected in the page
    pub fn from_js(value: &JsValue) -> Self {
        if value.is_undefined() || value.is_null() {
            Self::Absent
        } else if !value.is_object() {
            Self::Unknown
        } else {
            serde_wasm_bindgen::from_value(value.clone())
                .map(Self::Candidate)
                .unwrap_or(Self::Unknown)
        }
    }

    /// returns the genuine provider if any was injected
    pub fn resolve(&self) -> Option<&CandidateProvider> {
        match self {
            Self::Candidate(candidate) => candidate.find_genuine(),
            Self::Absent | Self::Unknown => None,
        }
    }

    /// equivalent to `self.resolve().is_some()`
    pub fn is_installed(&self) -> bool {
        self.resolve().is_some()
    }
}
