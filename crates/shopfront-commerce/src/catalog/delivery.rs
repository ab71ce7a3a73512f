//! Delivery option types.

use crate::error::CommerceError;
use crate::ids::DeliveryOptionId;
use crate::money::Money;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Long weekday/month/day format, e.g. "Tuesday, June 21".
const DELIVERY_DATE_FORMAT: &str = "%A, %B %-d";

/// A delivery speed/cost tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryOption {
    /// Unique identifier.
    pub id: DeliveryOptionId,
    /// Days from today until delivery.
    pub delivery_days: u32,
    /// Delivery price in cents.
    pub price_cents: i64,
}

impl DeliveryOption {
    /// Create a new delivery option.
    pub fn new(id: impl Into<DeliveryOptionId>, delivery_days: u32, price_cents: i64) -> Self {
        Self {
            id: id.into(),
            delivery_days,
            price_cents,
        }
    }

    /// Get the price as [`Money`].
    pub fn price(&self) -> Money {
        Money::new(self.price_cents)
    }

    /// Check if this is free delivery.
    pub fn is_free(&self) -> bool {
        self.price_cents == 0
    }

    /// Price label: "FREE" or the formatted price.
    pub fn price_label(&self) -> String {
        if self.is_free() {
            "FREE".to_string()
        } else {
            self.price().display()
        }
    }

    /// Date of delivery when ordering on `today`.
    pub fn delivery_date(&self, today: NaiveDate) -> NaiveDate {
        today
            .checked_add_days(Days::new(u64::from(self.delivery_days)))
            .unwrap_or(NaiveDate::MAX)
    }
}

/// Format a delivery date the way the checkout displays it.
pub fn format_delivery_date(date: NaiveDate) -> String {
    date.format(DELIVERY_DATE_FORMAT).to_string()
}

/// Read-only set of delivery options, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeliveryOptions {
    options: Vec<DeliveryOption>,
}

impl DeliveryOptions {
    pub fn new(options: Vec<DeliveryOption>) -> Self {
        Self { options }
    }

    /// The storefront's static delivery tiers.
    pub fn standard() -> Self {
        Self::new(vec![
            DeliveryOption::new("1", 7, 0),
            DeliveryOption::new("2", 3, 499),
            DeliveryOption::new("3", 1, 999),
        ])
    }

    /// Look up an option by id.
    pub fn get(&self, id: &DeliveryOptionId) -> Option<&DeliveryOption> {
        self.options.iter().find(|o| &o.id == id)
    }

    /// Look up an option by id, failing if it is unknown.
    pub fn require(&self, id: &DeliveryOptionId) -> Result<&DeliveryOption, CommerceError> {
        self.get(id)
            .ok_or_else(|| CommerceError::DeliveryOptionNotFound(id.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &DeliveryOption> {
        self.options.iter()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl Default for DeliveryOptions {
    fn default() -> Self {
        Self::standard()
    }
}
