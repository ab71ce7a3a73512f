//! Backend API used by the storefront pages.

use async_trait::async_trait;
use serde::Serialize;
use shopfront_commerce::cart::Cart;
use shopfront_commerce::catalog::ProductCatalog;
use shopfront_commerce::checkout::Order;

use crate::{FetchClient, FetchError};

/// Default backend host.
pub const DEFAULT_BASE_URL: &str = "https://supersimplebackend.dev";

/// Remote collaborator serving products, cart readiness and order creation.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Fetch the product catalog.
    async fn load_products(&self) -> Result<ProductCatalog, FetchError>;

    /// Resolve once the backend cart endpoint has answered.
    async fn load_cart(&self) -> Result<(), FetchError>;

    /// Submit the cart and return the order the backend created.
    async fn place_order(&self, cart: &Cart) -> Result<Order, FetchError>;
}

#[async_trait]
impl<T: Backend + ?Sized> Backend for Box<T> {
    async fn load_products(&self) -> Result<ProductCatalog, FetchError> {
        (**self).load_products().await
    }

    async fn load_cart(&self) -> Result<(), FetchError> {
        (**self).load_cart().await
    }

    async fn place_order(&self, cart: &Cart) -> Result<Order, FetchError> {
        (**self).place_order(cart).await
    }
}

/// Backend location and endpoint paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub base_url: String,
    pub products_path: String,
    pub cart_path: String,
    pub orders_path: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            products_path: "/products".to_string(),
            cart_path: "/cart".to_string(),
            orders_path: "/orders".to_string(),
        }
    }
}

impl Endpoints {
    /// Endpoints on a different host with the default paths.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Absolute URL of an endpoint path.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn products_url(&self) -> String {
        self.url(&self.products_path)
    }

    pub fn cart_url(&self) -> String {
        self.url(&self.cart_path)
    }

    pub fn orders_url(&self) -> String {
        self.url(&self.orders_path)
    }
}

/// Body of an order submission: `{"cart": [...]}`.
#[derive(Debug, Serialize)]
pub struct OrderRequest<'a> {
    pub cart: &'a Cart,
}

/// Backend reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: FetchClient,
    endpoints: Endpoints,
}

impl HttpBackend {
    pub fn new(endpoints: Endpoints) -> Self {
        let client = FetchClient::new().with_base_url(endpoints.base_url.clone());
        Self { client, endpoints }
    }

    /// Use a preconfigured client, e.g. one carrying default headers.
    pub fn with_client(client: FetchClient, endpoints: Endpoints) -> Self {
        Self { client, endpoints }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn load_products(&self) -> Result<ProductCatalog, FetchError> {
        let response = self
            .client
            .get(self.endpoints.products_url())
            .send()
            .await?
            .error_for_status()?;
        let catalog: ProductCatalog = response.json()?;
        tracing::debug!(products = catalog.len(), "products loaded");
        Ok(catalog)
    }

    async fn load_cart(&self) -> Result<(), FetchError> {
        self.client
            .get(self.endpoints.cart_url())
            .send()
            .await?
            .error_for_status()?;
        tracing::debug!("cart endpoint ready");
        Ok(())
    }

    async fn place_order(&self, cart: &Cart) -> Result<Order, FetchError> {
        let response = self
            .client
            .post(self.endpoints.orders_url())
            .json(&OrderRequest { cart })?
            .send()
            .await?
            .error_for_status()?;
        let order: Order = response.json()?;
        tracing::info!(order_id = %order.id, items = order.item_count(), "order created");
        Ok(order)
    }
}

/// Offline backend serving a fixed catalog. It cannot create orders.
#[derive(Debug, Clone)]
pub struct StaticBackend {
    catalog: ProductCatalog,
}

impl StaticBackend {
    pub fn new(catalog: ProductCatalog) -> Self {
        Self { catalog }
    }

    /// Serve the catalog bundled with `shopfront-commerce`.
    pub fn bundled() -> Result<Self, FetchError> {
        let catalog =
            ProductCatalog::bundled().map_err(|e| FetchError::ParseError(e.to_string()))?;
        Ok(Self::new(catalog))
    }
}

#[async_trait]
impl Backend for StaticBackend {
    async fn load_products(&self) -> Result<ProductCatalog, FetchError> {
        Ok(self.catalog.clone())
    }

    async fn load_cart(&self) -> Result<(), FetchError> {
        Ok(())
    }

    async fn place_order(&self, _cart: &Cart) -> Result<Order, FetchError> {
        Err(FetchError::Unavailable(
            "orders cannot be placed offline".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shopfront_commerce::ids::ProductId;

    #[test]
    fn test_default_endpoints() {
        let endpoints = Endpoints::default();
        assert_eq!(endpoints.products_url(), "https://supersimplebackend.dev/products");
        assert_eq!(endpoints.cart_url(), "https://supersimplebackend.dev/cart");
        assert_eq!(endpoints.orders_url(), "https://supersimplebackend.dev/orders");
    }

    #[test]
    fn test_custom_base_url() {
        let endpoints = Endpoints::with_base_url("http://localhost:8080/");
        assert_eq!(endpoints.url("products"), "http://localhost:8080/products");
    }

    #[test]
    fn test_order_request_body() {
        let mut cart = Cart::new();
        cart.add_item(&ProductId::new("p1"), 2);

        let body = serde_json::to_value(OrderRequest { cart: &cart }).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "cart": [{"productId": "p1", "quantity": 2, "deliveryOptionId": "1"}]
            })
        );
    }

    #[tokio::test]
    async fn test_static_backend_serves_bundled_catalog() {
        let backend = StaticBackend::bundled().unwrap();

        let catalog = backend.load_products().await.unwrap();
        assert!(!catalog.is_empty());
        assert!(backend.load_cart().await.is_ok());
    }

    #[tokio::test]
    async fn test_static_backend_cannot_place_orders() {
        let backend = StaticBackend::bundled().unwrap();
        let result = backend.place_order(&Cart::seeded()).await;
        assert!(matches!(result, Err(FetchError::Unavailable(_))));
    }
}
