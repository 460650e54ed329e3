//! Connection factory: builds configured outbound requests for the API client.

use std::collections::HashMap;
use std::time::Duration;

use once_cell::sync::Lazy;
use reqwest::header::{CONTENT_TYPE, EXPECT, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, Request, Response, Url};
use serde::Serialize;

use crate::config::{self, ConnectionConfig, ProxyDescriptor};
use crate::error::IdentraError;

static INSTANCE: Lazy<ConnectionFactory> = Lazy::new(ConnectionFactory::new);

/// Builds configured outbound requests.
///
/// A single lazily constructed instance is shared process-wide; each
/// `build_request` call is stateless and allocates a fresh request, so
/// the factory is safe to use from any thread.
pub struct ConnectionFactory {
    /// Client used for direct (proxyless) requests.
    direct: Client,
}

impl ConnectionFactory {
    fn new() -> Self {
        Self {
            direct: Client::new(),
        }
    }

    /// Accessor for the shared factory instance.
    pub fn instance() -> &'static ConnectionFactory {
        &INSTANCE
    }

    /// Create and configure an outbound request.
    ///
    /// Applies the timeout and optional proxy from `config`, merges
    /// `headers` onto the request (last write wins), and suppresses
    /// `Expect: 100-continue`. No network I/O happens here; the returned
    /// request is owned by the caller and sent later.
    ///
    /// # Errors
    /// `IdentraError::Config` when `url` is not a valid absolute URI.
    pub fn build_request(
        &self,
        config: &ConnectionConfig,
        url: &str,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<OutboundRequest, IdentraError> {
        let url =
            Url::parse(url).map_err(|_| IdentraError::Config(format!("Invalid URI: {url}")))?;

        let mut request = Request::new(Method::GET, url);
        *request.timeout_mut() = Some(config::resolve_timeout(config));

        // Proxies are a client-level setting in reqwest, so a proxied
        // request gets its own client; direct requests share one.
        let proxy = config::resolve_proxy(config);
        let client = match &proxy {
            Some(descriptor) => Client::builder().proxy(descriptor.to_reqwest()?).build()?,
            None => self.direct.clone(),
        };

        if let Some(headers) = headers {
            merge_headers(request.headers_mut(), headers);
        }

        // Expect: 100-continue is not supported by the API servers and
        // costs an extra round trip, so it is never sent.
        request.headers_mut().remove(EXPECT);

        Ok(OutboundRequest {
            client,
            request,
            proxy,
        })
    }
}

fn merge_headers(target: &mut HeaderMap, entries: &HashMap<String, String>) {
    for (name, value) in entries {
        let parsed_name = match HeaderName::from_bytes(name.as_bytes()) {
            Ok(parsed) => parsed,
            Err(_) => {
                tracing::debug!(header = %name, "skipping header with invalid name");
                continue;
            }
        };
        let parsed_value = match HeaderValue::from_str(value) {
            Ok(parsed) => parsed,
            Err(_) => {
                tracing::debug!(header = %name, "skipping header with invalid value");
                continue;
            }
        };
        target.insert(parsed_name, parsed_value);
    }
}

/// A configured HTTP request that has not been sent yet.
///
/// Owns the request and the client that must send it (the client carries
/// the proxy, when one is configured). Callers may adjust the method and
/// body before calling `send`.
pub struct OutboundRequest {
    client: Client,
    request: Request,
    proxy: Option<ProxyDescriptor>,
}

impl OutboundRequest {
    pub fn url(&self) -> &Url {
        self.request.url()
    }

    pub fn method(&self) -> &Method {
        self.request.method()
    }

    pub fn set_method(&mut self, method: Method) {
        *self.request.method_mut() = method;
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.request.timeout().copied()
    }

    pub fn headers(&self) -> &HeaderMap {
        self.request.headers()
    }

    /// Proxy this request will be routed through, if any.
    pub fn proxy(&self) -> Option<&ProxyDescriptor> {
        self.proxy.as_ref()
    }

    /// Attach a JSON body and matching `Content-Type`.
    pub fn set_json<T: Serialize>(&mut self, body: &T) -> Result<(), IdentraError> {
        let bytes = serde_json::to_vec(body)?;
        self.request
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        *self.request.body_mut() = Some(bytes.into());
        Ok(())
    }

    /// Send the request. Consumes the handle.
    pub async fn send(self) -> Result<Response, IdentraError> {
        Ok(self.client.execute(self.request).await?)
    }
}
