pub mod ui;

use contracts::domain::a001_category::{Category, CategoryDraft, CategoryFilter};
use contracts::domain::EntityId;

use crate::shared::form::FormEntity;
use crate::shared::list::{Cell, ListEntity, RowAction, Tone};

/// Parent dropdown loads every category in one request
pub const PARENT_LOOKUP_SIZE: u32 = 1000;

impl ListEntity for Category {
    type Filter = CategoryFilter;

    const RESOURCE: &'static str = "categories";
    const NOUN: &'static str = "categories";
    const PER_PAGE: u32 = 20;
    const ACTIONS: &'static [RowAction] = &[RowAction::Edit, RowAction::Delete];

    fn id(&self) -> EntityId {
        self.category_id
    }

    fn headers() -> &'static [&'static str] {
        &["Name", "Description", "Parent Category", "Subcategories"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::strong(&self.category_name),
            Cell::or_na(self.description.as_deref()),
            Cell::or(
                self.parent_category
                    .as_ref()
                    .map(|parent| parent.category_name.as_str()),
                "Root Category",
            ),
            Cell::badge(self.subcategories.len().to_string(), Tone::Info),
        ]
    }

    fn option_label(&self) -> String {
        self.category_name.clone()
    }
}

impl FormEntity for Category {
    type Draft = CategoryDraft;

    const LABEL: &'static str = "category";
    const DELETE_PROMPT: &'static str = "Are you sure you want to delete this category?";

    fn to_draft(&self) -> CategoryDraft {
        Category::to_draft(self)
    }
}

/// A category cannot become its own parent
pub fn parent_candidates(categories: &[Category], editing: Option<EntityId>) -> Vec<Category> {
    categories
        .iter()
        .filter(|category| Some(category.category_id) != editing)
        .cloned()
        .collect()
}
