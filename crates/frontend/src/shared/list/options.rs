use contracts::domain::EntityId;

use super::entity::ListEntity;
use crate::shared::api::{fetch_data, ApiClient, ApiError, ApiRequest};

/// Entry of a `<select>` built from fetched records
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: EntityId,
    pub label: String,
}

/// First `per_page` records of a collection, for dropdowns
pub async fn fetch_lookup<E, A>(api: &A, per_page: u32) -> Result<Vec<E>, ApiError>
where
    E: ListEntity,
    A: ApiClient,
{
    let path = format!("{}?per_page={}", E::collection_path(), per_page);
    let (items, _) = fetch_data::<Vec<E>, A>(api, ApiRequest::get(path)).await?;
    Ok(items)
}

pub fn to_options<E: ListEntity>(items: &[E]) -> Vec<SelectOption> {
    items
        .iter()
        .map(|item| SelectOption {
            value: item.id(),
            label: item.option_label(),
        })
        .collect()
}
