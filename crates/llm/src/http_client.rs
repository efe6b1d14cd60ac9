//! HTTP Client Factory
//!
//! Provides a factory function for building reqwest clients with proxy support.

/// Build a `reqwest::Client` for executor traffic.
///
/// - `Some(url)` -> route all requests through the proxy (`http`, `https`, or `socks5`)
/// - `None` -> explicitly disable proxy (`no_proxy`), ignoring env vars
///
/// No client-level timeout is set; each attempt applies its own deadline.
pub fn build_http_client(proxy: Option<&str>) -> reqwest::Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    match proxy {
        Some(url) => {
            builder = builder.proxy(reqwest::Proxy::all(url)?);
        }
        None => {
            builder = builder.no_proxy();
        }
    }
    builder.build()
}
