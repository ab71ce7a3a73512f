//! Checkout page controller.

use chrono::{Local, NaiveDate};
use shopfront_cache::KvStore;
use shopfront_commerce::cart::{CartStorage, CartStore};
use shopfront_commerce::catalog::{DeliveryOptions, ProductCatalog};
use shopfront_commerce::checkout::{Order, OrderHistory, PaymentSummary, ORDER_CONFIRMATION_PAGE};
use shopfront_commerce::ids::{DeliveryOptionId, ProductId};
use shopfront_data::{Backend, FetchError};
use shopfront_dom::{HeadContent, MemorySurface, PageSurface, Shell};

use crate::error::PageError;
use crate::sections::{render_order_summary, render_payment_summary};
use crate::view::{cart_item_selector, OrderSummaryView};

/// Container of the cart review.
pub const ORDER_SUMMARY_SELECTOR: &str = ".js-order-summary";
/// Container of the totals and place-order button.
pub const PAYMENT_SUMMARY_SELECTOR: &str = ".payment-summary";
/// Item count in the checkout header.
pub const CHECKOUT_QUANTITY_SELECTOR: &str = ".js-check-quantity";
/// Class marking a line whose quantity is being edited.
pub const EDITING_QUANTITY_CLASS: &str = "is-editing-quantity";

/// An empty surface with every container the checkout page writes to.
pub fn checkout_surface() -> MemorySurface {
    MemorySurface::with_targets(&[
        CHECKOUT_QUANTITY_SELECTOR,
        ORDER_SUMMARY_SELECTOR,
        PAYMENT_SUMMARY_SELECTOR,
    ])
}

/// The checkout page.
///
/// Owns the cart store and the surface. Every handler finishes its
/// re-render before returning.
pub struct CheckoutPage<B, S, K, D>
where
    B: Backend,
    S: CartStorage,
    K: KvStore,
    D: PageSurface,
{
    backend: B,
    store: CartStore<S>,
    history: OrderHistory<K>,
    surface: D,
    catalog: ProductCatalog,
    delivery_options: DeliveryOptions,
    today: NaiveDate,
}

impl<B, S, K, D> CheckoutPage<B, S, K, D>
where
    B: Backend,
    S: CartStorage,
    K: KvStore,
    D: PageSurface,
{
    pub fn new(backend: B, store: CartStore<S>, history: OrderHistory<K>, surface: D) -> Self {
        Self {
            backend,
            store,
            history,
            surface,
            catalog: ProductCatalog::default(),
            delivery_options: DeliveryOptions::standard(),
            today: Local::now().date_naive(),
        }
    }

    /// Compute delivery dates from a fixed day instead of the local clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Load products and wait for the cart endpoint, then render.
    ///
    /// A failed load is logged and the page renders with whatever loaded.
    pub async fn load_page(&mut self) {
        if let Err(e) = self.load_data().await {
            tracing::error!(error = %e, "error, please try again");
        }
        self.render();
    }

    async fn load_data(&mut self) -> Result<(), FetchError> {
        self.catalog = self.backend.load_products().await?;
        self.backend.load_cart().await?;
        Ok(())
    }

    /// Render both summaries and the header count.
    pub fn render(&mut self) {
        self.render_order_summary();
        self.render_payment_summary();
    }

    pub fn render_order_summary(&mut self) {
        let fragment = render_order_summary(&self.order_summary_view());
        if let Err(e) = self.surface.set_html(ORDER_SUMMARY_SELECTOR, fragment) {
            tracing::warn!(selector = ORDER_SUMMARY_SELECTOR, error = %e, "order summary not rendered");
            return;
        }
        self.update_cart_quantity();
    }

    pub fn render_payment_summary(&mut self) {
        let fragment = render_payment_summary(&self.payment_summary());
        if let Err(e) = self.surface.set_html(PAYMENT_SUMMARY_SELECTOR, fragment) {
            tracing::warn!(selector = PAYMENT_SUMMARY_SELECTOR, error = %e, "payment summary not rendered");
        }
    }

    /// Write the cart's total quantity into the checkout header.
    pub fn update_cart_quantity(&mut self) {
        let quantity = self.store.quantity().to_string();
        if let Err(e) = self.surface.set_text(CHECKOUT_QUANTITY_SELECTOR, &quantity) {
            tracing::warn!(selector = CHECKOUT_QUANTITY_SELECTOR, error = %e, "cart quantity not updated");
        }
    }

    /// Delete a line. Only its container is removed; other lines keep their state.
    pub fn on_delete(&mut self, product_id: &ProductId) {
        self.store.remove(product_id);

        let selector = cart_item_selector(product_id);
        if let Err(e) = self.surface.remove(&selector) {
            tracing::warn!(selector = %selector, error = %e, "cart line container not found");
        }

        self.render_payment_summary();
        self.update_cart_quantity();
    }

    /// Mark a line as editing its quantity. The cart is not changed.
    pub fn on_update_quantity(&mut self, product_id: &ProductId) {
        let selector = cart_item_selector(product_id);
        if let Err(e) = self.surface.add_class(&selector, EDITING_QUANTITY_CLASS) {
            tracing::warn!(selector = %selector, error = %e, "cart line container not found");
        }
    }

    /// Switch a line's delivery option and re-render both summaries.
    pub fn on_select_delivery(&mut self, product_id: &ProductId, delivery_option_id: &DeliveryOptionId) {
        if !self.store.set_delivery_option(product_id, delivery_option_id) {
            tracing::debug!(
                product_id = %product_id,
                delivery_option_id = %delivery_option_id,
                "no cart line for delivery selection"
            );
        }
        self.render();
    }

    /// Submit the cart, record the order and go to the orders page.
    ///
    /// Backend failures are logged and returned; nothing is recorded and the
    /// page stays put.
    pub async fn place_order(&mut self) -> Result<Order, PageError> {
        let cart = self.store.snapshot();
        let order = match self.backend.place_order(&cart).await {
            Ok(order) => order,
            Err(e) => {
                tracing::error!(error = %e, "failed to place order");
                return Err(e.into());
            }
        };

        if let Err(e) = self.history.add(order.clone()) {
            tracing::warn!(order_id = %order.id, error = %e, "failed to record order");
        }

        self.surface.navigate(ORDER_CONFIRMATION_PAGE);
        Ok(order)
    }

    pub fn order_summary_view(&self) -> OrderSummaryView {
        OrderSummaryView::build(self.store.cart(), &self.catalog, &self.delivery_options, self.today)
    }

    pub fn payment_summary(&self) -> PaymentSummary {
        PaymentSummary::compute(self.store.cart(), &self.catalog, &self.delivery_options)
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    pub fn store(&self) -> &CartStore<S> {
        &self.store
    }

    pub fn history(&self) -> &OrderHistory<K> {
        &self.history
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }
}

impl<B, S, K> CheckoutPage<B, S, K, MemorySurface>
where
    B: Backend,
    S: CartStorage,
    K: KvStore,
{
    /// The whole page as a standalone HTML document.
    pub fn document(&self) -> String {
        let part = |selector: &str| self.surface.html(selector).unwrap_or_default();

        let body = format!(
            r#"<div class="checkout-header">
    <div class="checkout-header-middle-section">
        Checkout (<a class="return-to-home-link js-check-quantity" href="amazon.html">{quantity}</a> items)
    </div>
</div>
<div class="main">
    <div class="page-title">Review your order</div>
    <div class="checkout-grid">
        <div class="order-summary js-order-summary">{order_summary}</div>
        <div class="payment-summary">{payment_summary}</div>
    </div>
</div>"#,
            quantity = part(CHECKOUT_QUANTITY_SELECTOR),
            order_summary = part(ORDER_SUMMARY_SELECTOR),
            payment_summary = part(PAYMENT_SUMMARY_SELECTOR),
        );

        Shell::new(
            HeadContent::new("Checkout")
                .with_meta("viewport", "width=device-width, initial-scale=1")
                .with_stylesheet("styles/pages/checkout/checkout.css"),
        )
        .render(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use shopfront_cache::MemoryStore;
    use shopfront_commerce::cart::{Cart, KvCartStorage};
    use shopfront_commerce::ids::OrderId;
    use std::sync::Mutex;

    const SOCKS: &str = "e43638ce-6aa0-4b85-b27f-e1d07eb678c6";
    const BALL: &str = "15b6fc6f-327a-4ec4-896f-486349e85a3d";

    #[derive(Default)]
    struct FakeBackend {
        fail_products: bool,
        fail_orders: bool,
        submitted: Mutex<Vec<Cart>>,
    }

    #[async_trait]
    impl Backend for FakeBackend {
        async fn load_products(&self) -> Result<ProductCatalog, FetchError> {
            if self.fail_products {
                return Err(FetchError::Timeout);
            }
            Ok(ProductCatalog::bundled().unwrap())
        }

        async fn load_cart(&self) -> Result<(), FetchError> {
            Ok(())
        }

        async fn place_order(&self, cart: &Cart) -> Result<Order, FetchError> {
            if self.fail_orders {
                return Err(FetchError::RequestError("connection reset".to_string()));
            }
            self.submitted.lock().unwrap().push(cart.clone());
            Ok(Order {
                id: OrderId::new("order-1"),
                timestamp: 1_718_323_200_000,
                cart: cart.clone(),
            })
        }
    }

    type TestPage = CheckoutPage<FakeBackend, KvCartStorage<MemoryStore>, MemoryStore, MemorySurface>;

    fn page(backend: FakeBackend) -> TestPage {
        CheckoutPage::new(
            backend,
            CartStore::load(KvCartStorage::new(MemoryStore::new())),
            OrderHistory::new(MemoryStore::new()),
            checkout_surface(),
        )
        .with_today(NaiveDate::from_ymd_opt(2024, 6, 14).unwrap())
    }

    fn html(page: &TestPage, selector: &str) -> String {
        page.surface().html(selector).unwrap()
    }

    #[tokio::test]
    async fn test_load_page_renders_seeded_cart() {
        let mut page = page(FakeBackend::default());
        page.load_page().await;

        let summary = html(&page, ORDER_SUMMARY_SELECTOR);
        assert!(summary.contains("Black and Gray Athletic Cotton Socks - 6 Pairs"));
        assert!(summary.contains("Intermediate Size Basketball"));
        assert!(summary.contains("Delivery date: Monday, June 17"));

        let payment = html(&page, PAYMENT_SUMMARY_SELECTOR);
        assert!(payment.contains("Items (3):"));
        assert!(payment.contains("$42.75"));
        assert!(payment.contains("$4.99"));
        assert!(payment.contains("$47.74"));
        assert!(payment.contains("$4.77"));
        assert!(payment.contains("$52.51"));

        assert_eq!(html(&page, CHECKOUT_QUANTITY_SELECTOR), "3");
    }

    #[tokio::test]
    async fn test_failed_load_still_renders() {
        let mut page = page(FakeBackend {
            fail_products: true,
            ..Default::default()
        });
        page.load_page().await;

        assert_eq!(html(&page, ORDER_SUMMARY_SELECTOR), "");
        assert!(html(&page, PAYMENT_SUMMARY_SELECTOR).contains("Items (0):"));
        // Header still counts stored lines
        assert_eq!(html(&page, CHECKOUT_QUANTITY_SELECTOR), "3");
    }

    #[tokio::test]
    async fn test_delete_removes_only_that_line() {
        let mut page = page(FakeBackend::default());
        page.load_page().await;
        page.on_update_quantity(&ProductId::new(BALL));

        page.on_delete(&ProductId::new(SOCKS));

        let socks = cart_item_selector(&ProductId::new(SOCKS));
        let ball = cart_item_selector(&ProductId::new(BALL));
        assert!(!page.surface().contains(&socks));
        assert!(page.surface().contains(&ball));
        // The surviving line was not re-rendered
        assert!(page.surface().has_class(&ball, EDITING_QUANTITY_CLASS));

        assert!(html(&page, PAYMENT_SUMMARY_SELECTOR).contains("Items (1):"));
        assert_eq!(html(&page, CHECKOUT_QUANTITY_SELECTOR), "1");
        assert!(page.store().cart().get_item(&ProductId::new(SOCKS)).is_none());
    }

    #[tokio::test]
    async fn test_update_marks_line_editing() {
        let mut page = page(FakeBackend::default());
        page.load_page().await;

        page.on_update_quantity(&ProductId::new(SOCKS));

        let selector = cart_item_selector(&ProductId::new(SOCKS));
        assert_eq!(page.surface().classes(&selector), vec![EDITING_QUANTITY_CLASS]);
        assert_eq!(page.store().quantity(), 3);
    }

    #[tokio::test]
    async fn test_select_delivery_rerenders_both_views() {
        let mut page = page(FakeBackend::default());
        page.load_page().await;

        page.on_select_delivery(&ProductId::new(SOCKS), &DeliveryOptionId::new("3"));

        let socks = html(&page, &cart_item_selector(&ProductId::new(SOCKS)));
        assert!(socks.contains("Delivery date: Saturday, June 15"));
        // 499 + 999 shipping
        assert!(html(&page, PAYMENT_SUMMARY_SELECTOR).contains("$14.98"));
    }

    #[tokio::test]
    async fn test_place_order_records_and_navigates() {
        let mut page = page(FakeBackend::default());
        page.load_page().await;

        let order = page.place_order().await.unwrap();

        assert_eq!(order.id.as_str(), "order-1");
        assert_eq!(order.cart, Cart::seeded());
        assert_eq!(page.history().orders(), vec![order]);
        assert_eq!(page.surface().location(), Some("orders.html"));
    }

    #[tokio::test]
    async fn test_place_order_failure_is_returned() {
        let mut page = page(FakeBackend {
            fail_orders: true,
            ..Default::default()
        });
        page.load_page().await;

        let result = page.place_order().await;

        assert!(matches!(result, Err(PageError::Backend(FetchError::RequestError(_)))));
        assert!(page.history().orders().is_empty());
        assert_eq!(page.surface().location(), None);
    }

    #[tokio::test]
    async fn test_missing_containers_do_not_abort() {
        let mut page = CheckoutPage::new(
            FakeBackend::default(),
            CartStore::load(KvCartStorage::new(MemoryStore::new())),
            OrderHistory::new(MemoryStore::new()),
            MemorySurface::new(),
        );
        page.load_page().await;
        page.on_delete(&ProductId::new(SOCKS));

        assert_eq!(page.store().quantity(), 1);
    }

    #[tokio::test]
    async fn test_document_wraps_sections() {
        let mut page = page(FakeBackend::default());
        page.load_page().await;

        let doc = page.document();
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains(r#"href="amazon.html">3</a> items"#));
        assert!(doc.contains("js-place-order"));
    }
}
