pub mod summary;
pub mod ui;

use contracts::domain::a002_product::Product;
use contracts::domain::a004_sale::{Sale, SaleDraft, SaleFilter};
use contracts::domain::EntityId;

use crate::shared::api::ApiError;
use crate::shared::date_utils::format_optional_date;
use crate::shared::form::{FormEntity, FormMode};
use crate::shared::list::{Cell, ListEntity, RowAction};
use crate::shared::number_format::format_currency;

/// Product dropdown of the sale form
pub const PRODUCT_LOOKUP_SIZE: u32 = 100;

impl ListEntity for Sale {
    type Filter = SaleFilter;

    const RESOURCE: &'static str = "sales";
    const NOUN: &'static str = "sales records";
    const PER_PAGE: u32 = 20;
    const ACTIONS: &'static [RowAction] = &[RowAction::Delete];

    fn id(&self) -> EntityId {
        self.sale_id
    }

    fn headers() -> &'static [&'static str] {
        &[
            "Sale ID",
            "Date",
            "Product",
            "Customer",
            "Quantity",
            "Unit Price",
            "Total",
            "Salesperson",
        ]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::strong(format!("#{}", self.sale_id)),
            Cell::text(format_optional_date(self.sale_date.as_deref())),
            Cell::or_na(self.product.as_ref().map(|p| p.product_name.as_str())),
            Cell::or(self.customer_name.as_deref(), "Walk-in"),
            Cell::text(self.quantity_sold.to_string()),
            Cell::text(format_currency(self.unit_price)),
            Cell::strong(format_currency(self.total_amount)),
            Cell::or_na(self.salesperson.as_ref().and_then(|s| s.full_name.as_deref())),
        ]
    }

    fn option_label(&self) -> String {
        format!("#{}", self.sale_id)
    }
}

impl FormEntity for Sale {
    type Draft = SaleDraft;

    const LABEL: &'static str = "sale";
    const DELETE_PROMPT: &'static str =
        "Are you sure you want to delete this sale? This will restore the product stock.";

    fn to_draft(&self) -> SaleDraft {
        Sale::to_draft(self)
    }

    fn finalize(draft: SaleDraft) -> SaleDraft {
        draft.with_computed_total()
    }

    fn saved_message(_mode: FormMode) -> String {
        "Sale recorded successfully!".to_string()
    }

    fn rejected_message(_mode: FormMode, server_message: &str) -> String {
        format!("Failed to record sale: {}", server_message)
    }

    fn failed_message(_mode: FormMode, error: &ApiError) -> String {
        format!("Error recording sale: {}", error)
    }
}

/// Selecting a product in the sale form copies its price into the draft
pub fn select_product(draft: &mut SaleDraft, products: &[Product], product_id: Option<EntityId>) {
    draft.product_id = product_id;
    if let Some(product) = products.iter().find(|p| Some(p.product_id) == product_id) {
        draft.unit_price = product.price;
    }
    draft.total_amount = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::{Envelope, Method};
    use crate::shared::feedback::AlertLevel;
    use crate::shared::form::{DeleteOutcome, FormController, SubmitOutcome};
    use crate::shared::testing::{FixedConfirm, MockApi, RecordingNotifier};
    use futures::executor::block_on;
    use serde_json::json;

    fn sale(customer: Option<&str>) -> Sale {
        serde_json::from_value(json!({
            "sale_id": 41,
            "product_id": 7,
            "product": {"product_id": 7, "product_name": "Desk lamp", "sku": "LMP-1"},
            "quantity_sold": 2,
            "unit_price": 19.5,
            "total_amount": 39.0,
            "sale_date": "2024-03-15T14:02:26",
            "customer_name": customer,
            "salesperson": null
        }))
        .unwrap()
    }

    #[test]
    fn test_cells() {
        let cells = sale(None).cells();
        assert_eq!(cells[0], Cell::strong("#41"));
        assert_eq!(cells[1], Cell::text("Mar 15, 2024"));
        assert_eq!(cells[2], Cell::text("Desk lamp"));
        assert_eq!(cells[3], Cell::text("Walk-in"));
        assert_eq!(cells[6], Cell::strong("$39.00"));
        assert_eq!(cells[7], Cell::text("N/A"));

        assert_eq!(sale(Some("ACME Corp")).cells()[3], Cell::text("ACME Corp"));
    }

    #[test]
    fn test_submit_fills_total_amount() {
        let api = MockApi::new();
        let notifier = RecordingNotifier::new();
        let form = FormController::<Sale, _, _>::new(api.clone(), notifier.clone());
        api.respond(Method::Post, "/sales", Envelope::ok(json!({"sale_id": 42})));

        let draft = SaleDraft {
            product_id: Some(7),
            quantity_sold: 3,
            unit_price: 10.0,
            total_amount: None,
            customer_name: None,
        };
        assert_eq!(block_on(form.submit(FormMode::Create, draft)), SubmitOutcome::Saved);

        let body = api.requests()[0].body.clone().unwrap();
        assert_eq!(body["total_amount"], json!(30.0));
        assert_eq!(
            notifier.last(),
            Some((AlertLevel::Success, "Sale recorded successfully!".to_string()))
        );
    }

    #[test]
    fn test_rejected_sale_message() {
        let api = MockApi::new();
        let notifier = RecordingNotifier::new();
        let form = FormController::<Sale, _, _>::new(api.clone(), notifier.clone());
        api.respond(Method::Post, "/sales", Envelope::failure("Insufficient stock"));

        let outcome = block_on(form.submit(FormMode::Create, SaleDraft::default()));
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected("Failed to record sale: Insufficient stock".to_string())
        );
    }

    #[test]
    fn test_delete_prompt_mentions_stock() {
        let api = MockApi::new();
        let form = FormController::<Sale, _, _>::new(api.clone(), RecordingNotifier::new());
        let confirm = FixedConfirm::decline();

        assert_eq!(block_on(form.delete(41, &confirm)), DeleteOutcome::Cancelled);
        assert!(api.requests().is_empty());
        assert!(confirm.prompts()[0].contains("restore the product stock"));
    }

    #[test]
    fn test_select_product_copies_price() {
        let products: Vec<Product> = serde_json::from_value(json!([
            {"product_id": 7, "product_name": "Desk lamp", "sku": "LMP-1",
             "price": 19.5, "quantity_in_stock": 4, "reorder_level": 2}
        ]))
        .unwrap();

        let mut draft = SaleDraft {
            quantity_sold: 2,
            ..SaleDraft::default()
        };
        select_product(&mut draft, &products, Some(7));
        assert_eq!(draft.unit_price, 19.5);
        assert_eq!(draft.computed_total(), 39.0);

        select_product(&mut draft, &products, None);
        assert_eq!(draft.product_id, None);
        assert_eq!(draft.unit_price, 19.5);
    }
}
