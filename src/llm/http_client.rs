use reqwest::Client;
use std::time::Duration;

/// Upper bound for one chat completion or Google API call. A turn waits on
/// at most two of these back to back (reply, then export).
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// The HTTP client shared by the model provider and the Google clients.
///
/// An interactive session issues one request at a time, so the pool keeps a
/// single idle connection per host.
pub fn build_http_client() -> Client {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .connect_timeout(CONNECT_TIMEOUT)
        .user_agent(concat!("daybook/", env!("CARGO_PKG_VERSION")))
        .pool_max_idle_per_host(1)
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!("falling back to a default HTTP client: {e}");
            Client::new()
        })
}
