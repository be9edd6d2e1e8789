pub mod bitkeep;
#[cfg(feature = "wagmi")]
pub mod wagmi;

#[cfg(feature = "wagmi")]
pub use self::wagmi::{InjectedConnector, WalletConnectConnector};
