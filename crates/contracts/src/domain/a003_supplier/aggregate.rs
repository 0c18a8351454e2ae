use serde::{Deserialize, Serialize};

use crate::domain::EntityId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierRef {
    pub supplier_id: EntityId,
    pub supplier_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub supplier_id: EntityId,
    pub supplier_name: String,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub products_count: Option<u64>,
    pub created_at: Option<String>,
}

impl Supplier {
    pub fn to_draft(&self) -> SupplierDraft {
        SupplierDraft {
            supplier_name: self.supplier_name.clone(),
            contact_person: self.contact_person.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
        }
    }
}

/// Body of `POST /suppliers` and `PUT /suppliers/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplierDraft {
    pub supplier_name: String,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplierFilter {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub search: String,
}
