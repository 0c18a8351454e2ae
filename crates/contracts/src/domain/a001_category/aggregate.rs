use serde::{Deserialize, Serialize};

use crate::domain::EntityId;

// ============================================================================
// Records
// ============================================================================

/// Short reference embedded in other records (parent, subcategories, product)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub category_id: EntityId,
    pub category_name: String,
}

/// Product category. Categories form a tree through `parent_category_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub category_id: EntityId,
    pub category_name: String,
    pub description: Option<String>,
    pub parent_category_id: Option<EntityId>,
    pub parent_category: Option<CategoryRef>,
    #[serde(default)]
    pub subcategories: Vec<CategoryRef>,
    pub created_at: Option<String>,
}

impl Category {
    pub fn to_draft(&self) -> CategoryDraft {
        CategoryDraft {
            category_name: self.category_name.clone(),
            description: self.description.clone(),
            parent_category_id: self.parent_category_id,
        }
    }
}

// ============================================================================
// Drafts and filters
// ============================================================================

/// Body of `POST /categories` and `PUT /categories/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryDraft {
    pub category_name: String,
    pub description: Option<String>,
    pub parent_category_id: Option<EntityId>,
}

/// The category list takes no filters besides paging
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryFilter {}
