pub mod providers;
pub mod secrets;

pub use providers::{
    LineNotifyProvider, MockNotifyProvider, NotifyProvider, ProviderError, ProviderResponse,
};
pub use secrets::{MockTokenSource, SecretError, SsmTokenSource, TokenSource};
