//! Process-wide client instance.

use std::sync::OnceLock;

use crate::config::SystemEnvironment;
use crate::http::{ApiClient, ApiError};

static SHARED: OnceLock<ApiClient> = OnceLock::new();

/// Returns the shared client, building it from the environment on first use.
///
/// The configuration is frozen once the first call succeeds; later changes to
/// `API_URL` have no effect.
pub fn shared() -> Result<&'static ApiClient, ApiError> {
    if let Some(client) = SHARED.get() {
        return Ok(client);
    }

    let client = ApiClient::from_env(&SystemEnvironment)?;
    Ok(SHARED.get_or_init(|| client))
}

/// Installs `client` as the shared instance if none exists yet.
///
/// Returns the instance actually in place, which is the earlier one if the
/// shared client was already initialized.
pub fn init_shared(client: ApiClient) -> &'static ApiClient {
    SHARED.get_or_init(|| client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;

    #[test]
    fn test_shared_is_initialized_once() {
        let installed = init_shared(ApiClient::new(ClientConfig::new(Some("http://api.test"))).unwrap());
        let again = init_shared(ApiClient::new(ClientConfig::default()).unwrap());
        let fetched = shared().unwrap();

        assert!(std::ptr::eq(installed, again));
        assert!(std::ptr::eq(installed, fetched));
        assert_eq!(fetched.base_url(), "http://api.test");
    }
}
