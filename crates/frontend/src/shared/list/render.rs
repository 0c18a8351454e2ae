use contracts::domain::EntityId;

use super::entity::{ListEntity, RowAction};

pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Secondary,
    Success,
    Warning,
    Danger,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Info => "badge bg-info",
            Tone::Secondary => "badge bg-secondary",
            Tone::Success => "badge bg-success",
            Tone::Warning => "badge bg-warning",
            Tone::Danger => "badge bg-danger",
        }
    }
}

/// Table cell content. Always inserted as a text node.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Strong(String),
    Badge { text: String, tone: Tone },
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    pub fn strong(value: impl Into<String>) -> Self {
        Cell::Strong(value.into())
    }

    pub fn badge(value: impl Into<String>, tone: Tone) -> Self {
        Cell::Badge {
            text: value.into(),
            tone,
        }
    }

    /// Optional field with a fallback for missing or empty values
    pub fn or(value: Option<&str>, fallback: &str) -> Self {
        match value.map(str::trim) {
            Some(v) if !v.is_empty() => Cell::text(v),
            _ => Cell::text(fallback),
        }
    }

    pub fn or_na(value: Option<&str>) -> Self {
        Self::or(value, NOT_AVAILABLE)
    }

    pub fn as_text(&self) -> &str {
        match self {
            Cell::Text(text) | Cell::Strong(text) => text,
            Cell::Badge { text, .. } => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DataRow {
    pub id: EntityId,
    pub cells: Vec<Cell>,
    pub actions: &'static [RowAction],
}

#[derive(Debug, Clone, PartialEq)]
pub enum RowDescriptor {
    Data(DataRow),
    Placeholder { message: String, colspan: usize },
    Loading { colspan: usize },
    Error { message: String, colspan: usize },
}

/// Header columns plus the actions column when the entity has actions
pub fn column_count<E: ListEntity>() -> usize {
    E::headers().len() + usize::from(!E::ACTIONS.is_empty())
}

/// Rows for one page of records; an empty page yields a single placeholder
pub fn render<E: ListEntity>(items: &[E]) -> Vec<RowDescriptor> {
    if items.is_empty() {
        return vec![RowDescriptor::Placeholder {
            message: format!("No {} found", E::NOUN),
            colspan: column_count::<E>(),
        }];
    }

    items
        .iter()
        .map(|item| {
            RowDescriptor::Data(DataRow {
                id: item.id(),
                cells: item.cells(),
                actions: E::ACTIONS,
            })
        })
        .collect()
}

pub fn loading_row<E: ListEntity>() -> RowDescriptor {
    RowDescriptor::Loading {
        colspan: column_count::<E>(),
    }
}

pub fn error_row<E: ListEntity>(message: &str) -> RowDescriptor {
    RowDescriptor::Error {
        message: format!("Error loading {}: {}", E::NOUN, message),
        colspan: column_count::<E>(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::{widget, Widget};

    #[test]
    fn test_empty_page_renders_single_placeholder() {
        let rows = render::<Widget>(&[]);
        assert_eq!(
            rows,
            vec![RowDescriptor::Placeholder {
                message: "No widgets found".to_string(),
                colspan: 3,
            }]
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let items = vec![widget(1, "Bolt"), widget(2, "Nut")];
        let first = render(&items);
        let second = render(&items);
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_markup_in_fields_stays_text() {
        let items = vec![widget(7, "<img src=x onerror=alert(1)>")];
        let rows = render(&items);
        let RowDescriptor::Data(row) = &rows[0] else {
            panic!("expected a data row");
        };
        assert_eq!(row.cells[0], Cell::strong("<img src=x onerror=alert(1)>"));
        assert_eq!(row.cells[1], Cell::text("N/A"));
        assert_eq!(row.id, 7);
    }

    #[test]
    fn test_error_row_mentions_noun() {
        assert_eq!(
            error_row::<Widget>("Failed to fetch"),
            RowDescriptor::Error {
                message: "Error loading widgets: Failed to fetch".to_string(),
                colspan: 3,
            }
        );
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(Cell::or(Some("  "), "Walk-in"), Cell::text("Walk-in"));
        assert_eq!(Cell::or(None, "Root Category"), Cell::text("Root Category"));
        assert_eq!(Cell::or_na(Some("Acme")), Cell::text("Acme"));
    }
}
