pub mod ui;

use contracts::domain::a002_product::{InventoryValue, Product, ProductDraft, ProductFilter};
use contracts::domain::EntityId;

use crate::shared::api::{fetch_one, ApiClient, ApiError};
use crate::shared::date_utils::format_optional_datetime;
use crate::shared::form::FormEntity;
use crate::shared::list::{Cell, ListEntity, RowAction, Tone, NOT_AVAILABLE};
use crate::shared::number_format::format_currency;

/// Category and supplier dropdowns of the product page
pub const LOOKUP_SIZE: u32 = 100;

impl ListEntity for Product {
    type Filter = ProductFilter;

    const RESOURCE: &'static str = "products";
    const NOUN: &'static str = "products";
    const PER_PAGE: u32 = 10;
    const ACTIONS: &'static [RowAction] = &[RowAction::Edit, RowAction::View, RowAction::Delete];

    fn id(&self) -> EntityId {
        self.product_id
    }

    fn headers() -> &'static [&'static str] {
        &["Name", "SKU", "Category", "Price", "Stock", "Status"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::strong(&self.product_name),
            Cell::badge(&self.sku, Tone::Secondary),
            Cell::or_na(self.category.as_ref().map(|c| c.category_name.as_str())),
            Cell::text(format_currency(self.price)),
            Cell::badge(self.quantity_in_stock.to_string(), stock_tone(self)),
            status_badge(self.is_active),
        ]
    }

    fn option_label(&self) -> String {
        format!("{} ({})", self.product_name, self.sku)
    }
}

impl FormEntity for Product {
    type Draft = ProductDraft;

    const LABEL: &'static str = "product";
    const DELETE_PROMPT: &'static str = "Are you sure you want to delete this product?";

    fn to_draft(&self) -> ProductDraft {
        Product::to_draft(self)
    }
}

pub fn stock_tone(product: &Product) -> Tone {
    if product.is_low_stock() {
        Tone::Warning
    } else {
        Tone::Success
    }
}

pub fn status_badge(is_active: bool) -> Cell {
    if is_active {
        Cell::badge("Active", Tone::Success)
    } else {
        Cell::badge("Inactive", Tone::Secondary)
    }
}

pub fn details_path(id: EntityId) -> String {
    format!("/products/{}", id)
}

/// `GET /products/inventory-value`
pub async fn fetch_inventory_value<A: ApiClient>(api: &A) -> Result<f64, ApiError> {
    let value: InventoryValue = fetch_one(api, "/products/inventory-value").await?;
    Ok(value.inventory_value)
}

/// Label/value pairs shown on the product details page
pub fn detail_fields(product: &Product) -> Vec<(&'static str, String)> {
    let text = |value: Option<&str>| {
        value
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(NOT_AVAILABLE)
            .to_string()
    };

    vec![
        ("SKU", product.sku.clone()),
        ("Barcode", text(product.barcode.as_deref())),
        ("Category", text(product.category.as_ref().map(|c| c.category_name.as_str()))),
        ("Supplier", text(product.supplier.as_ref().map(|s| s.supplier_name.as_str()))),
        ("Price", format_currency(product.price)),
        (
            "Cost Price",
            product
                .cost_price
                .map(format_currency)
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        ),
        ("In Stock", product.quantity_in_stock.to_string()),
        ("Reorder Level", product.reorder_level.to_string()),
        ("Created", format_optional_datetime(product.created_at.as_deref())),
        ("Updated", format_optional_datetime(product.updated_at.as_deref())),
    ]
}
