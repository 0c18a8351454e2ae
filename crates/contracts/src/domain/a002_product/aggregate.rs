use serde::{Deserialize, Serialize};

use crate::domain::a001_category::CategoryRef;
use crate::domain::a003_supplier::SupplierRef;
use crate::domain::EntityId;

// ============================================================================
// Records
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: EntityId,
    pub product_name: String,
    pub sku: String,
    pub description: Option<String>,
    pub category_id: Option<EntityId>,
    pub category: Option<CategoryRef>,
    pub supplier_id: Option<EntityId>,
    pub supplier: Option<SupplierRef>,
    pub price: f64,
    pub cost_price: Option<f64>,
    pub quantity_in_stock: i64,
    pub reorder_level: i64,
    pub barcode: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

fn default_active() -> bool {
    true
}

impl Product {
    /// Stock at or below the reorder level
    pub fn is_low_stock(&self) -> bool {
        self.quantity_in_stock <= self.reorder_level
    }

    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            product_name: self.product_name.clone(),
            sku: self.sku.clone(),
            description: self.description.clone(),
            category_id: self.category_id,
            supplier_id: self.supplier_id,
            price: self.price,
            cost_price: self.cost_price,
            quantity_in_stock: self.quantity_in_stock,
            reorder_level: self.reorder_level,
            barcode: self.barcode.clone(),
            is_active: self.is_active,
        }
    }
}

/// Body of `GET /products/inventory-value`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InventoryValue {
    #[serde(default)]
    pub inventory_value: f64,
}

// ============================================================================
// Drafts and filters
// ============================================================================

/// Body of `POST /products` and `PUT /products/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub product_name: String,
    pub sku: String,
    pub description: Option<String>,
    pub category_id: Option<EntityId>,
    pub supplier_id: Option<EntityId>,
    pub price: f64,
    pub cost_price: Option<f64>,
    pub quantity_in_stock: i64,
    pub reorder_level: i64,
    pub barcode: Option<String>,
    pub is_active: bool,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            product_name: String::new(),
            sku: String::new(),
            description: None,
            category_id: None,
            supplier_id: None,
            price: 0.0,
            cost_price: None,
            quantity_in_stock: 0,
            reorder_level: 10,
            barcode: None,
            is_active: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    Active,
    Inactive,
    LowStock,
}

impl ProductStatus {
    pub const ALL: [ProductStatus; 3] = [Self::Active, Self::Inactive, Self::LowStock];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::LowStock => "low_stock",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::LowStock => "Low stock",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// Query parameters of `GET /products`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductFilter {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub search: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_stock_includes_reorder_level() {
        let raw = r#"{
            "product_id": 7, "product_name": "Desk lamp", "sku": "LMP-1",
            "price": 19.5, "quantity_in_stock": 10, "reorder_level": 10
        }"#;
        let product: Product = serde_json::from_str(raw).unwrap();
        assert!(product.is_low_stock());
        assert!(product.is_active);
        assert!(product.category.is_none());
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(ProductStatus::parse("low_stock"), Some(ProductStatus::LowStock));
        assert_eq!(ProductStatus::parse("all"), None);
    }
}
