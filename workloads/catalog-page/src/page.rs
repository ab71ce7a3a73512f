//! Catalog page controller.

use shopfront_commerce::cart::{CartStorage, CartStore};
use shopfront_commerce::catalog::ProductCatalog;
use shopfront_commerce::ids::ProductId;
use shopfront_data::Backend;
use shopfront_dom::{HeadContent, MemorySurface, PageSurface, Shell};

use crate::sections::render_products_grid;
use crate::view::CatalogView;

/// Container of the product cards.
pub const PRODUCTS_GRID_SELECTOR: &str = ".products-grid";
/// Cart badge in the page header.
pub const CART_QUANTITY_SELECTOR: &str = ".js-cart-quantity";

/// An empty surface with every container the catalog page writes to.
pub fn catalog_surface() -> MemorySurface {
    MemorySurface::with_targets(&[CART_QUANTITY_SELECTOR, PRODUCTS_GRID_SELECTOR])
}

/// The catalog page.
pub struct CatalogPage<B, S, D>
where
    B: Backend,
    S: CartStorage,
    D: PageSurface,
{
    backend: B,
    store: CartStore<S>,
    surface: D,
    catalog: ProductCatalog,
}

impl<B, S, D> CatalogPage<B, S, D>
where
    B: Backend,
    S: CartStorage,
    D: PageSurface,
{
    pub fn new(backend: B, store: CartStore<S>, surface: D) -> Self {
        Self {
            backend,
            store,
            surface,
            catalog: ProductCatalog::default(),
        }
    }

    /// Load products, then render the grid and badge.
    pub async fn load_page(&mut self) {
        match self.backend.load_products().await {
            Ok(catalog) => self.catalog = catalog,
            Err(e) => tracing::error!(error = %e, "error, please try again"),
        }
        self.render();
    }

    pub fn render(&mut self) {
        let fragment = render_products_grid(&CatalogView::build(&self.catalog));
        if let Err(e) = self.surface.set_html(PRODUCTS_GRID_SELECTOR, fragment) {
            tracing::warn!(selector = PRODUCTS_GRID_SELECTOR, error = %e, "products grid not rendered");
            return;
        }
        self.update_cart_quantity();
    }

    /// Add the quantity chosen in a card's selector.
    ///
    /// `selected` is the selector's raw value. Any integer is accepted and a
    /// blank value counts as zero. Other non-numeric values leave the cart
    /// untouched.
    pub fn on_add_to_cart(&mut self, product_id: &ProductId, selected: &str) {
        let selected_trimmed = selected.trim();
        let parsed = if selected_trimmed.is_empty() {
            Ok(0)
        } else {
            selected_trimmed.parse::<i64>()
        };
        let quantity = match parsed {
            Ok(quantity) => quantity,
            Err(e) => {
                tracing::warn!(product_id = %product_id, value = selected, error = %e, "invalid quantity");
                return;
            }
        };

        self.store.add(product_id, quantity);
        self.update_cart_quantity();
    }

    /// Write the cart's total quantity into the badge.
    pub fn update_cart_quantity(&mut self) {
        let quantity = self.store.quantity().to_string();
        if let Err(e) = self.surface.set_text(CART_QUANTITY_SELECTOR, &quantity) {
            tracing::warn!(selector = CART_QUANTITY_SELECTOR, error = %e, "cart quantity not updated");
        }
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    pub fn store(&self) -> &CartStore<S> {
        &self.store
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }
}

impl<B, S> CatalogPage<B, S, MemorySurface>
where
    B: Backend,
    S: CartStorage,
{
    /// The whole page as a standalone HTML document.
    pub fn document(&self) -> String {
        let part = |selector: &str| self.surface.html(selector).unwrap_or_default();

        let body = format!(
            r#"<div class="amazon-header">
    <div class="amazon-header-right-section">
        <a class="cart-link header-link" href="checkout.html">
            <div class="cart-quantity js-cart-quantity">{quantity}</div>
            <div class="cart-text">Cart</div>
        </a>
    </div>
</div>
<div class="main">
    <div class="products-grid">{grid}</div>
</div>"#,
            quantity = part(CART_QUANTITY_SELECTOR),
            grid = part(PRODUCTS_GRID_SELECTOR),
        );

        Shell::new(
            HeadContent::new("Amazon Project")
                .with_meta("viewport", "width=device-width, initial-scale=1")
                .with_stylesheet("styles/pages/amazon.css"),
        )
        .render(&body)
    }
}
