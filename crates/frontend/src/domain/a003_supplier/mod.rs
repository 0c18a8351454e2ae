pub mod ui;

use contracts::domain::a003_supplier::{Supplier, SupplierDraft, SupplierFilter};
use contracts::domain::EntityId;

use crate::shared::form::FormEntity;
use crate::shared::list::{Cell, ListEntity, RowAction, Tone};

impl ListEntity for Supplier {
    type Filter = SupplierFilter;

    const RESOURCE: &'static str = "suppliers";
    const NOUN: &'static str = "suppliers";
    const PER_PAGE: u32 = 20;
    const ACTIONS: &'static [RowAction] = &[RowAction::Edit, RowAction::Delete];

    fn id(&self) -> EntityId {
        self.supplier_id
    }

    fn headers() -> &'static [&'static str] {
        &["Name", "Contact Person", "Email", "Phone", "Products"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::strong(&self.supplier_name),
            Cell::or_na(self.contact_person.as_deref()),
            Cell::or_na(self.email.as_deref()),
            Cell::or_na(self.phone.as_deref()),
            Cell::badge(self.products_count.unwrap_or(0).to_string(), Tone::Info),
        ]
    }

    fn option_label(&self) -> String {
        self.supplier_name.clone()
    }
}

impl FormEntity for Supplier {
    type Draft = SupplierDraft;

    const LABEL: &'static str = "supplier";
    const DELETE_PROMPT: &'static str = "Are you sure you want to delete this supplier?";

    fn to_draft(&self) -> SupplierDraft {
        Supplier::to_draft(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::{Envelope, Method};
    use crate::shared::feedback::AlertLevel;
    use crate::shared::form::{DeleteOutcome, FormController};
    use crate::shared::list::{ListController, RowDescriptor};
    use crate::shared::testing::{FixedConfirm, MockApi, RecordingNotifier};
    use contracts::shared::api_response::PaginationMeta;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn test_search_goes_to_query_and_resets_page() {
        let api = MockApi::new();
        api.respond(
            Method::Get,
            "/suppliers",
            Envelope::ok(json!([{
                "supplier_id": 4,
                "supplier_name": "Acme",
                "contact_person": "Jane Roe",
                "email": null,
                "phone": "555-0100",
                "address": null,
                "products_count": 12,
                "created_at": null
            }]))
            .with_pagination(PaginationMeta::compute(1, 20, 1)),
        );

        let mut list = ListController::<Supplier>::new();
        let filters = SupplierFilter {
            search: "acme".to_string(),
        };
        assert!(block_on(list.load(&api, 1, filters)));

        assert_eq!(api.requests()[0].path, "/suppliers?page=1&per_page=20&search=acme");
        let rows = list.rows();
        let RowDescriptor::Data(row) = &rows[0] else {
            panic!("expected a data row");
        };
        assert_eq!(row.cells[2], Cell::text("N/A"));
        assert_eq!(row.cells[4], Cell::badge("12", Tone::Info));
    }

    #[test]
    fn test_declined_delete_leaves_list_untouched() {
        let api = MockApi::new();
        let notifier = RecordingNotifier::new();
        let form = FormController::<Supplier, _, _>::new(api.clone(), notifier.clone());

        let outcome = block_on(form.delete(4, &FixedConfirm::decline()));
        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert!(api.requests_with(Method::Delete).is_empty());
    }

    #[test]
    fn test_confirmed_delete_reports_success() {
        let api = MockApi::new();
        let notifier = RecordingNotifier::new();
        let form = FormController::<Supplier, _, _>::new(api.clone(), notifier.clone());
        api.respond(Method::Delete, "/suppliers/4", Envelope::ok(json!(null)));

        let confirm = FixedConfirm::accept();
        assert_eq!(block_on(form.delete(4, &confirm)), DeleteOutcome::Deleted);
        assert_eq!(
            confirm.prompts(),
            vec!["Are you sure you want to delete this supplier?".to_string()]
        );
        assert_eq!(
            notifier.last(),
            Some((AlertLevel::Success, "Supplier deleted successfully!".to_string()))
        );
    }
}
