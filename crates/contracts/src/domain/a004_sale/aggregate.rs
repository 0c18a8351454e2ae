use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::EntityId;

// ============================================================================
// Records
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRef {
    pub product_id: EntityId,
    pub product_name: String,
    pub sku: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalespersonRef {
    pub user_id: Option<EntityId>,
    pub username: Option<String>,
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub sale_id: EntityId,
    pub product_id: EntityId,
    pub product: Option<ProductRef>,
    pub quantity_sold: i64,
    pub unit_price: f64,
    pub total_amount: f64,
    pub sale_date: Option<String>,
    pub customer_name: Option<String>,
    pub user_id: Option<EntityId>,
    pub salesperson: Option<SalespersonRef>,
}

impl Sale {
    pub fn to_draft(&self) -> SaleDraft {
        SaleDraft {
            product_id: Some(self.product_id),
            quantity_sold: self.quantity_sold,
            unit_price: self.unit_price,
            total_amount: Some(self.total_amount),
            customer_name: self.customer_name.clone(),
        }
    }
}

/// Body of `GET /sales/total`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalesTotal {
    pub total_sales: Option<f64>,
}

impl SalesTotal {
    pub fn amount(&self) -> f64 {
        self.total_sales.unwrap_or(0.0)
    }
}

// ============================================================================
// Drafts and filters
// ============================================================================

/// Body of `POST /sales`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleDraft {
    pub product_id: Option<EntityId>,
    pub quantity_sold: i64,
    pub unit_price: f64,
    pub total_amount: Option<f64>,
    pub customer_name: Option<String>,
}

impl Default for SaleDraft {
    fn default() -> Self {
        Self {
            product_id: None,
            quantity_sold: 1,
            unit_price: 0.0,
            total_amount: None,
            customer_name: None,
        }
    }
}

impl SaleDraft {
    /// quantity × unit price, rounded to cents
    pub fn computed_total(&self) -> f64 {
        round_cents(self.quantity_sold as f64 * self.unit_price)
    }

    /// Fills `total_amount` from quantity and price when it was left empty.
    /// The backend recomputes and validates the amount on its side.
    pub fn with_computed_total(mut self) -> Self {
        match self.total_amount {
            Some(total) if total > 0.0 => {}
            _ => self.total_amount = Some(self.computed_total()),
        }
        self
    }
}

pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Query parameters of `GET /sales` and `GET /sales/total`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaleFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_computed_when_missing() {
        let draft = SaleDraft {
            product_id: Some(3),
            quantity_sold: 3,
            unit_price: 10.0,
            total_amount: None,
            customer_name: None,
        }
        .with_computed_total();
        assert_eq!(draft.total_amount, Some(30.0));
    }

    #[test]
    fn test_explicit_total_is_kept() {
        let draft = SaleDraft {
            product_id: Some(3),
            quantity_sold: 3,
            unit_price: 10.0,
            total_amount: Some(27.5),
            customer_name: Some("ACME".into()),
        }
        .with_computed_total();
        assert_eq!(draft.total_amount, Some(27.5));
    }

    #[test]
    fn test_total_rounds_to_cents() {
        let draft = SaleDraft {
            quantity_sold: 3,
            unit_price: 0.3333,
            ..SaleDraft::default()
        };
        assert_eq!(draft.computed_total(), 1.0);
    }
}
