pub mod data_table;
pub mod form_fields;
pub mod modal;
pub mod page_header;
pub mod pagination_controls;
pub mod stat_card;

pub use data_table::DataTable;
pub use form_fields::{CheckboxField, EntitySelect, FormActions, NumberField, TextAreaField, TextField};
pub use modal::Modal;
pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
pub use stat_card::StatCard;
