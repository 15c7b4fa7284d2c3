//! HTTP clients and the storefront session for the Web-larek shop API.
//!
//! Requests are built transport-independently and handed to a [`Transport`].
//! Production code uses [`ReqwestTransport`]; tests plug in a scripted one.
//!
//! # Example
//!
//! ```rust,ignore
//! use larek_client::{FetchClient, ProductCatalogClient, ReqwestTransport};
//! use std::time::Duration;
//!
//! let transport = ReqwestTransport::new(Duration::from_secs(10))?;
//! let client = FetchClient::new(transport)
//!     .with_base_url("https://larek-api.nomoreparties.co/api/weblarek");
//!
//! // Never fails: an unreachable API yields an empty catalog.
//! let catalog = ProductCatalogClient::new(client).get_products().await;
//! println!("{} products", catalog.items.len());
//! ```

mod api;
mod error;
mod request;
mod response;
mod storefront;
mod transport;

pub use api::{
    ApiUrls, OrderSubmissionClient, ProductCatalogClient, DEFAULT_API_PATH, DEFAULT_CDN_PATH,
};
pub use error::{CheckoutError, FetchError};
pub use request::{Method, RequestBuilder};
pub use response::Response;
pub use storefront::Storefront;
pub use transport::{ReqwestTransport, Transport};

use std::collections::HashMap;
use std::sync::Arc;

/// HTTP client for the shop API.
///
/// Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct FetchClient {
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for FetchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchClient")
            .field("base_url", &self.base_url)
            .field("default_headers", &self.default_headers)
            .finish_non_exhaustive()
    }
}

impl FetchClient {
    /// Create a client that sends through `transport`.
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self::with_transport(Arc::new(transport))
    }

    /// Create a client over an already shared transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: None,
            default_headers: HashMap::new(),
            transport,
        }
    }

    /// Set a base URL that will be prepended to relative request paths.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Get, url)
    }

    /// Create a POST request.
    pub fn post(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Post, url)
    }

    /// Create a request with a custom method.
    pub fn request(&self, method: Method, url: impl Into<String>) -> ClientRequestBuilder {
        let url = url.into();
        let full_url = match &self.base_url {
            Some(base) if !(url.starts_with("http://") || url.starts_with("https://")) => {
                format!("{}{}", base.trim_end_matches('/'), url)
            }
            _ => url,
        };

        let mut builder = RequestBuilder::new(method, full_url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }

        ClientRequestBuilder {
            builder,
            transport: Arc::clone(&self.transport),
        }
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder {
    builder: RequestBuilder,
    transport: Arc<dyn Transport>,
}

impl ClientRequestBuilder {
    /// Set the request body as JSON.
    pub fn json<T: serde::Serialize>(mut self, value: &T) -> Result<Self, FetchError> {
        self.builder = self.builder.json(value)?;
        Ok(self)
    }

    /// Send the request and return the response.
    pub async fn send(self) -> Result<Response, FetchError> {
        self.transport.send(self.builder).await
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        ApiUrls, CheckoutError, FetchClient, FetchError, OrderSubmissionClient,
        ProductCatalogClient, Response, Storefront, Transport,
    };
}
