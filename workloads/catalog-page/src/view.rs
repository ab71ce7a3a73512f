//! View models for the catalog page.

use serde::Serialize;
use shopfront_commerce::catalog::{Product, ProductCatalog};
use shopfront_commerce::ids::ProductId;

/// Largest quantity offered by a card's selector.
pub const MAX_SELECTABLE_QUANTITY: u32 = 10;

/// A category-specific link under a product card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtraLinkView {
    pub label: String,
    pub href: String,
}

/// One product card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCardView {
    pub product_id: ProductId,
    pub name: String,
    pub image: String,
    pub stars_url: String,
    pub rating_count: u32,
    pub price_label: String,
    pub extra_links: Vec<ExtraLinkView>,
}

impl ProductCardView {
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            image: product.image.clone(),
            stars_url: product.stars_url(),
            rating_count: product.rating.count,
            price_label: product.formatted_price(),
            extra_links: product
                .kind
                .extra_links()
                .into_iter()
                .map(|(label, href)| ExtraLinkView {
                    label: label.to_string(),
                    href: href.to_string(),
                })
                .collect(),
        }
    }
}

/// Everything the products grid displays, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogView {
    pub cards: Vec<ProductCardView>,
}

impl CatalogView {
    pub fn build(catalog: &ProductCatalog) -> Self {
        Self::filtered(catalog, None)
    }

    /// Only products whose name or keywords match `search`.
    pub fn filtered(catalog: &ProductCatalog, search: Option<&str>) -> Self {
        let cards = catalog
            .iter()
            .filter(|p| search.map_or(true, |term| p.matches(term)))
            .map(ProductCardView::from_product)
            .collect();
        Self { cards }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Class of a card's quantity selector.
pub fn quantity_selector_class(product_id: &ProductId) -> String {
    format!("js-quantity-selector-{}", product_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_build_bundled_catalog() {
        let catalog = ProductCatalog::bundled().unwrap();
        let view = CatalogView::build(&catalog);

        assert_eq!(view.cards.len(), catalog.len());
        let socks = &view.cards[0];
        assert_eq!(socks.price_label, "$10.90");
        assert_eq!(socks.stars_url, "images/ratings/rating-45.png");
        assert_eq!(socks.rating_count, 87);
        assert!(socks.extra_links.is_empty());
    }

    #[test]
    fn test_extra_links_by_category() {
        let catalog = ProductCatalog::bundled().unwrap();
        let view = CatalogView::build(&catalog);

        let toaster = view
            .cards
            .iter()
            .find(|c| c.name == "2 Slot Toaster - Black")
            .unwrap();
        let labels: Vec<&str> = toaster.extra_links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["Instructions", "Warranty"]);

        let shirt = view
            .cards
            .iter()
            .find(|c| c.name == "Adults Plain Cotton T-Shirt - 2 Pack")
            .unwrap();
        assert_eq!(shirt.extra_links[0].label, "Size chart");
    }

    #[test]
    fn test_filtered() {
        let catalog = ProductCatalog::bundled().unwrap();
        let view = CatalogView::filtered(&catalog, Some("toaster"));
        assert_eq!(view.cards.len(), 1);

        assert!(CatalogView::filtered(&catalog, Some("no such thing")).is_empty());
    }
}
