//! Endpoint clients for the product listing and order submission.

use larek_commerce::{CatalogPage, OrderConfirmation, OrderDraft};
use tracing::{debug, info, warn};

use crate::{FetchClient, FetchError};

/// Default path of the shop API under the origin.
pub const DEFAULT_API_PATH: &str = "/api/weblarek";
/// Default path of product images under the origin.
pub const DEFAULT_CDN_PATH: &str = "/content/weblarek";

/// Base URLs derived from the API origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiUrls {
    pub api_url: String,
    pub cdn_url: String,
}

impl ApiUrls {
    pub fn new(origin: &str, api_path: &str, cdn_path: &str) -> Self {
        let origin = origin.trim_end_matches('/');
        Self {
            api_url: format!("{origin}{api_path}"),
            cdn_url: format!("{origin}{cdn_path}"),
        }
    }

    /// URLs with the default paths.
    pub fn from_origin(origin: &str) -> Self {
        Self::new(origin, DEFAULT_API_PATH, DEFAULT_CDN_PATH)
    }
}

fn json_client(client: FetchClient) -> FetchClient {
    client.with_default_header("Content-Type", "application/json")
}

/// Reads the product listing.
#[derive(Debug, Clone)]
pub struct ProductCatalogClient {
    client: FetchClient,
}

impl ProductCatalogClient {
    /// `client` must have the API URL as its base.
    pub fn new(client: FetchClient) -> Self {
        Self {
            client: json_client(client),
        }
    }

    /// Fetch the catalog. Any failure yields an empty catalog.
    pub async fn get_products(&self) -> CatalogPage {
        match self.try_get_products().await {
            Ok(page) => {
                info!(total = page.total, items = page.items.len(), "catalog loaded");
                page
            }
            Err(e) => {
                warn!(error = %e, "catalog unavailable, showing an empty catalog");
                CatalogPage::empty()
            }
        }
    }

    /// Fetch the catalog, surfacing the failure.
    pub async fn try_get_products(&self) -> Result<CatalogPage, FetchError> {
        let response = self.client.get("/product/").send().await?.error_for_status()?;
        response.json()
    }
}

/// Posts assembled orders.
#[derive(Debug, Clone)]
pub struct OrderSubmissionClient {
    client: FetchClient,
}

impl OrderSubmissionClient {
    /// `client` must have the API URL as its base.
    pub fn new(client: FetchClient) -> Self {
        Self {
            client: json_client(client),
        }
    }

    /// Submit an order. Only a 200 with a non-null body counts as accepted.
    pub async fn post_order(&self, draft: &OrderDraft) -> Result<OrderConfirmation, FetchError> {
        debug!(items = draft.items.len(), total = %draft.total, "posting order");
        let response = self
            .client
            .post("/order")
            .json(draft)?
            .send()
            .await?
            .error_for_status()?;
        if response.is_empty_body() {
            return Err(FetchError::EmptyBody);
        }
        response.json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Method, RequestBuilder, Response, Transport};
    use async_trait::async_trait;
    use larek_commerce::{Basket, BasketItem, PaymentMethod, Price};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// Answers every request with the same outcome and records what was sent.
    struct Fixed {
        outcome: Result<Response, FetchError>,
        sent: Sent,
    }

    #[async_trait]
    impl Transport for Fixed {
        async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
            self.sent.lock().unwrap().push(request);
            self.outcome.clone()
        }
    }

    type Sent = Arc<Mutex<Vec<RequestBuilder>>>;

    fn client(outcome: Result<Response, FetchError>) -> (FetchClient, Sent) {
        let sent = Arc::new(Mutex::new(Vec::new()));
        let transport = Fixed {
            outcome,
            sent: Arc::clone(&sent),
        };
        let urls = ApiUrls::from_origin("https://larek.test/");
        (FetchClient::new(transport).with_base_url(urls.api_url), sent)
    }

    fn draft() -> OrderDraft {
        let mut basket = Basket::new();
        basket.add(BasketItem::new("a", "Widget", Some(Price::new(100))));
        OrderDraft::assemble(
            &basket,
            PaymentMethod::Online,
            "Kazan",
            "buyer@example.com",
            "+79001234567",
        )
    }

    #[test]
    fn test_api_urls() {
        let urls = ApiUrls::from_origin("https://larek.test/");
        assert_eq!(urls.api_url, "https://larek.test/api/weblarek");
        assert_eq!(urls.cdn_url, "https://larek.test/content/weblarek");
    }

    #[tokio::test]
    async fn test_get_products() {
        let body = br#"{"total":1,"items":[{"id":"1","title":"Mouse","price":750}]}"#;
        let (client, sent) = client(Ok(Response::ok_json(body.to_vec())));

        let page = ProductCatalogClient::new(client).get_products().await;
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].price, Some(Price::new(750)));

        let sent = sent.lock().unwrap();
        assert_eq!(sent[0].method(), Method::Get);
        assert_eq!(sent[0].url(), "https://larek.test/api/weblarek/product/");
        assert_eq!(sent[0].header_value("Content-Type"), Some("application/json"));
    }

    #[tokio::test]
    async fn test_get_products_degrades_to_empty() {
        let failures = [
            Err(FetchError::RequestError("connection refused".to_string())),
            Err(FetchError::Timeout),
            Ok(Response::new(503, HashMap::new(), b"busy".to_vec())),
            Ok(Response::ok_json(b"not json".to_vec())),
        ];
        for outcome in failures {
            let (client, _) = client(outcome);
            let catalog = ProductCatalogClient::new(client);

            assert!(catalog.try_get_products().await.is_err());
            assert_eq!(catalog.get_products().await, CatalogPage::empty());
        }
    }

    #[tokio::test]
    async fn test_post_order() {
        let body = br#"{"id":"28c57cb4","total":100}"#;
        let (client, sent) = client(Ok(Response::ok_json(body.to_vec())));

        let confirmation = OrderSubmissionClient::new(client)
            .post_order(&draft())
            .await
            .unwrap();
        assert_eq!(confirmation.total, Some(Price::new(100)));

        let sent = sent.lock().unwrap();
        assert_eq!(sent[0].method(), Method::Post);
        assert_eq!(sent[0].url(), "https://larek.test/api/weblarek/order");
        let payload = sent[0].body_json().unwrap();
        assert_eq!(payload["payment"], "online");
        assert_eq!(payload["phone"], "+79001234567");
        assert_eq!(payload["items"], serde_json::json!(["a"]));
    }

    #[tokio::test]
    async fn test_post_order_rejects_null_and_non_200() {
        let (null_client, _) = client(Ok(Response::ok_json(b"null".to_vec())));
        let result = OrderSubmissionClient::new(null_client)
            .post_order(&draft())
            .await;
        assert_eq!(result, Err(FetchError::EmptyBody));

        let (rejecting_client, _) = client(Ok(Response::new(
            400,
            HashMap::new(),
            r#"{"error":"Неверная сумма заказа"}"#.as_bytes().to_vec(),
        )));
        let result = OrderSubmissionClient::new(rejecting_client)
            .post_order(&draft())
            .await;
        assert!(matches!(result, Err(FetchError::HttpError { status: 400, .. })));
    }
}
