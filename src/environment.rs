use crate::provider::InjectedProvider;

/// The platform the web application is running on, as detected from the
/// browser's user agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Platform {
    pub mobile: bool,
    pub android: bool,
}

/// Snapshot of the browser environment the connector is created in.
///
/// The snapshot is taken once, it is not updated if the provider is injected
/// later on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Environment {
    pub platform: Platform,
    pub provider: InjectedProvider,
}

impl Platform {
    pub fn from_user_agent(user_agent: &str) -> Self {
        let user_agent = user_agent.to_ascii_lowercase();

        let android = user_agent.contains("android");
        let ios = ["iphone", "ipad", "ipod"]
            .iter()
            .any(|device| user_agent.contains(device));

        Self {
            mobile: android || ios,
            android,
        }
    }
}

impl Environment {
    pub fn new(platform: Platform, provider: InjectedProvider) -> Self {
        Self { platform, provider }
    }

    pub fn is_mobile(&self) -> bool {
        self.platform.mobile
    }

    pub fn is_android(&self) -> bool {
        self.platform.android
    }

    /// the genuine BitKeep provider was injected in the page
    pub fn is_installed(&self) -> bool {
        self.provider.is_installed()
    }

    /// Without an injected provider on a mobile device the only way to
    /// connect is to pair with the mobile application.
    pub fn should_use_pairing(&self) -> bool {
        self.is_mobile() && !self.is_installed()
    }
}
