use std::fmt::Debug;

use contracts::domain::EntityId;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::render::Cell;

/// Filter state of a list page, serialized into the query string
pub trait ListFilter: Serialize + Default + Clone + PartialEq + Debug + Send + Sync + 'static {}

impl<T> ListFilter for T where T: Serialize + Default + Clone + PartialEq + Debug + Send + Sync + 'static {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    View,
    Delete,
}

impl RowAction {
    pub fn icon_name(self) -> &'static str {
        match self {
            RowAction::Edit => "edit",
            RowAction::View => "eye",
            RowAction::Delete => "trash",
        }
    }

    pub fn button_class(self) -> &'static str {
        match self {
            RowAction::Edit => "btn btn-sm btn-primary",
            RowAction::View => "btn btn-sm btn-info",
            RowAction::Delete => "btn btn-sm btn-danger",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            RowAction::Edit => "Edit",
            RowAction::View => "View",
            RowAction::Delete => "Delete",
        }
    }
}

/// A record type listed by a page
///
/// `RESOURCE` is the backend collection (`/categories`), `NOUN` is used in
/// the placeholder and error rows ("No categories found").
pub trait ListEntity: DeserializeOwned + Clone + Debug + Send + Sync + 'static {
    type Filter: ListFilter;

    const RESOURCE: &'static str;
    const NOUN: &'static str;
    const PER_PAGE: u32;
    const ACTIONS: &'static [RowAction];

    fn id(&self) -> EntityId;

    fn headers() -> &'static [&'static str];

    /// Display cells, one per header
    fn cells(&self) -> Vec<Cell>;

    /// Text of the record in a dropdown
    fn option_label(&self) -> String;

    fn collection_path() -> String {
        format!("/{}", Self::RESOURCE)
    }

    fn item_path(id: EntityId) -> String {
        format!("/{}/{}", Self::RESOURCE, id)
    }
}
