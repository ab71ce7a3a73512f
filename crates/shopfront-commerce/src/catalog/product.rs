//! Product types and the product catalog.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Catalog bundled with the crate, used when the products endpoint is not
/// consulted.
const BUNDLED_PRODUCTS: &str = include_str!("../../data/products.json");

/// Customer rating of a product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average stars, in half-star steps (0.0 - 5.0).
    pub stars: f64,
    /// Number of ratings.
    pub count: u32,
}

/// Category-specific product data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProductKind {
    /// Product without category extras.
    #[default]
    Standard,
    /// Clothing with a size chart.
    Clothing {
        /// Link to the size chart image.
        size_chart_link: String,
    },
    /// Appliance with instructions and warranty documents.
    Appliance {
        /// Link to the instructions document.
        instructions_link: String,
        /// Link to the warranty document.
        warranty_link: String,
    },
}

impl ProductKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductKind::Standard => "standard",
            ProductKind::Clothing { .. } => "clothing",
            ProductKind::Appliance { .. } => "appliance",
        }
    }

    /// Extra links shown on the product card as `(label, href)` pairs.
    pub fn extra_links(&self) -> Vec<(&'static str, &str)> {
        match self {
            ProductKind::Standard => Vec::new(),
            ProductKind::Clothing { size_chart_link } => vec![("Size chart", size_chart_link)],
            ProductKind::Appliance {
                instructions_link,
                warranty_link,
            } => vec![
                ("Instructions", instructions_link),
                ("Warranty", warranty_link),
            ],
        }
    }
}

/// A product in the catalog. Never mutated after loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ProductRecord", into = "ProductRecord")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Image URL.
    pub image: String,
    /// Product name.
    pub name: String,
    /// Customer rating.
    pub rating: Rating,
    /// Price in cents.
    pub price_cents: i64,
    /// Search keywords.
    pub keywords: Vec<String>,
    /// Category-specific data.
    pub kind: ProductKind,
}

impl Product {
    /// Get the price as [`Money`].
    pub fn price(&self) -> Money {
        Money::new(self.price_cents)
    }

    /// Formatted price with symbol (e.g., "$10.90").
    pub fn formatted_price(&self) -> String {
        self.price().display()
    }

    /// URL of the star-rating image for this product.
    pub fn stars_url(&self) -> String {
        let tenths = (self.rating.stars * 10.0).round() as i64;
        format!("images/ratings/rating-{}.png", tenths)
    }

    /// Check if a keyword or the name matches a search term.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.keywords.iter().any(|k| k.to_lowercase().contains(&term))
    }
}

/// Wire shape of a product as served by the products endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductRecord {
    id: ProductId,
    image: String,
    name: String,
    rating: Rating,
    price_cents: i64,
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    size_chart_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    instructions_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    warranty_link: Option<String>,
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        let kind = match (
            record.kind.as_deref(),
            record.size_chart_link,
            record.instructions_link,
            record.warranty_link,
        ) {
            (Some("clothing"), Some(size_chart_link), _, _) => ProductKind::Clothing { size_chart_link },
            (Some("appliance") | None, _, Some(instructions_link), Some(warranty_link)) => {
                ProductKind::Appliance {
                    instructions_link,
                    warranty_link,
                }
            }
            (Some(other), ..) if other != "standard" => {
                tracing::warn!(
                    product_id = %record.id,
                    kind = other,
                    "product category is missing its links, treating as standard"
                );
                ProductKind::Standard
            }
            _ => ProductKind::Standard,
        };

        Product {
            id: record.id,
            image: record.image,
            name: record.name,
            rating: record.rating,
            price_cents: record.price_cents,
            keywords: record.keywords,
            kind,
        }
    }
}

impl From<Product> for ProductRecord {
    fn from(product: Product) -> Self {
        let mut record = ProductRecord {
            id: product.id,
            image: product.image,
            name: product.name,
            rating: product.rating,
            price_cents: product.price_cents,
            keywords: product.keywords,
            kind: None,
            size_chart_link: None,
            instructions_link: None,
            warranty_link: None,
        };
        match product.kind {
            ProductKind::Standard => {}
            ProductKind::Clothing { size_chart_link } => {
                record.kind = Some("clothing".to_string());
                record.size_chart_link = Some(size_chart_link);
            }
            ProductKind::Appliance {
                instructions_link,
                warranty_link,
            } => {
                record.kind = Some("appliance".to_string());
                record.instructions_link = Some(instructions_link);
                record.warranty_link = Some(warranty_link);
            }
        }
        record
    }
}

/// Read-only product reference data, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Create a catalog from a list of products.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Parse a catalog from the products endpoint's JSON array.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The catalog bundled with this crate.
    pub fn bundled() -> Result<Self, CommerceError> {
        Self::from_json(BUNDLED_PRODUCTS)
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a product by id, failing if it is unknown.
    pub fn require(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        self.get(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// Iterate products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
