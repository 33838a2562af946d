// HTTP client utilities
use crate::domain::error::TlError;
use reqwest::Client;

/// Create the HTTP client used for translation requests.
///
/// No request timeout is set: the run blocks until the service answers or
/// the connection fails.
pub fn create_client(http_proxy: Option<&str>) -> Result<Client, TlError> {
    let mut builder = Client::builder()
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(std::time::Duration::from_secs(30))
        .user_agent("tl/0.1.0");

    if let Some(proxy) = http_proxy {
        if !proxy.is_empty() {
            builder = builder.proxy(reqwest::Proxy::all(proxy)?);
        }
    }

    Ok(builder.build()?)
}
