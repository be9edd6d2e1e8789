use crate::environment::Environment;
use serde::Serialize;

/// Deep link prefix of the MetaMask mobile application, the pairing URI
/// is appended percent-encoded.
pub const APP_LINK: &str = "https://metamask.app.link/wc?uri=";

pub const LOGO_BACKGROUND: &str =
    "linear-gradient(0deg, var(--ck-brand-metamask-12), var(--ck-brand-metamask-11))";

/// Identify the logo asset to render and how to render it.
///
/// Rendering is left to the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Logo {
    pub asset: &'static str,
    /// render the logo with its own background
    pub background: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,
}

/// The logo variants, keyed by the context they are displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Logos {
    pub default: Logo,
    pub mobile: Logo,
    pub transparent: Logo,
    pub connector_button: Logo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DownloadUrls {
    pub download: &'static str,
    pub website: &'static str,
    pub android: &'static str,
    pub ios: &'static str,
    pub chrome: &'static str,
    pub firefox: &'static str,
    pub brave: &'static str,
    pub edge: &'static str,
}

/// Metadata of the wallet as displayed in the wallet list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub logos: Logos,
    pub logo_background: &'static str,
    /// the wallet is connected by scanning a QR code
    pub scannable: bool,
    pub download_urls: DownloadUrls,
    pub installed: bool,
}

pub const LOGOS: Logos = Logos {
    default: Logo {
        asset: "MetaMask",
        background: true,
        scale: None,
    },
    mobile: Logo {
        asset: "MetaMask",
        background: true,
        scale: None,
    },
    transparent: Logo {
        asset: "MetaMask",
        background: false,
        scale: Some(0.86),
    },
    connector_button: Logo {
        asset: "MetaMask",
        background: false,
        scale: Some(1.1),
    },
};

pub const DOWNLOAD_URLS: DownloadUrls = DownloadUrls {
    download: "https://connect.family.co/v0/download/metamask",
    website: "https://metamask.io/download/",
    android: "https://play.google.com/store/apps/details?id=io.metamask",
    ios: "https://apps.apple.com/app/metamask/id1438144202",
    chrome: "https://chrome.google.com/webstore/detail/metamask/nkbihfbeogaeaoehlefnkodbefgpgknn",
    firefox: "https://addons.mozilla.org/firefox/addon/ether-metamask/",
    brave: "https://chrome.google.com/webstore/detail/metamask/nkbihfbeogaeaoehlefnkodbefgpgknn",
    edge: "https://microsoftedge.microsoft.com/addons/detail/metamask/ejbalbakoplchlghecdalmeeeajnimhm",
};

impl WalletDescriptor {
    pub fn new(installed: bool) -> Self {
        Self {
            id: "metaMask",
            name: "MetaMask",
            logos: LOGOS,
            logo_background: LOGO_BACKGROUND,
            scannable: false,
            download_urls: DOWNLOAD_URLS,
            installed,
        }
    }

    /// The wallet is only reported installed when its injected provider is
    /// used to connect.
    pub fn for_environment(environment: &Environment) -> Self {
        Self::new(!environment.should_use_pairing() && environment.is_installed())
    }
}

/// `encodeURIComponent` leaves these marks unescaped, `urlencoding` does not.
const MARKS: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

fn encode_uri_component(uri: &str) -> String {
    // a `%` in the input is escaped as `%25`, no escape sequence is matched
    // across another one
    MARKS
        .iter()
        .fold(urlencoding::encode(uri).into_owned(), |encoded, &(escaped, mark)| {
            encoded.replace(escaped, mark)
        })
}

/// Build the deep link to hand the pairing URI over to the mobile application.
///
/// Android resolves the `wc:` scheme itself so the URI is used verbatim.
pub fn deep_link(uri: &str, android: bool) -> String {
    if android {
        uri.to_owned()
    } else {
        format!("{APP_LINK}{}", encode_uri_component(uri))
    }
}
