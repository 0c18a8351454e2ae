//! CSV export of the rows currently shown in a table
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::shared::list::RowDescriptor;

/// Exports the data rows of a table to a CSV file and starts the download
pub fn export_rows_to_csv(
    headers: &[&str],
    rows: &[RowDescriptor],
    filename: &str,
) -> Result<(), String> {
    let csv_content = rows_to_csv(headers, rows).ok_or("No data to export")?;
    let blob = create_csv_blob(&csv_content)?;
    download_blob(&blob, filename)
}

/// `None` when there are no data rows (placeholder, loading or error only)
pub fn rows_to_csv(headers: &[&str], rows: &[RowDescriptor]) -> Option<String> {
    let data: Vec<_> = rows
        .iter()
        .filter_map(|row| match row {
            RowDescriptor::Data(data) => Some(data),
            _ => None,
        })
        .collect();
    if data.is_empty() {
        return None;
    }

    // UTF-8 BOM so spreadsheet apps pick the right encoding
    let mut csv_content = String::from('\u{FEFF}');
    csv_content.push_str(&headers.join(";"));
    csv_content.push('\n');

    for row in data {
        let escaped_row: Vec<String> = row
            .cells
            .iter()
            .map(|cell| escape_csv_cell(cell.as_text()))
            .collect();
        csv_content.push_str(&escaped_row.join(";"));
        csv_content.push('\n');
    }
    Some(csv_content)
}

fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::{Cell, DataRow, RowAction, Tone};

    #[test]
    fn test_rows_to_csv_escapes_cells() {
        let rows = vec![RowDescriptor::Data(DataRow {
            id: 1,
            cells: vec![
                Cell::strong("Bolt; M6"),
                Cell::badge("say \"hi\"", Tone::Info),
            ],
            actions: &[RowAction::Edit],
        })];

        let csv = rows_to_csv(&["Name", "Note"], &rows).unwrap();
        assert_eq!(
            csv,
            "\u{FEFF}Name;Note\n\"Bolt; M6\";\"say \"\"hi\"\"\"\n"
        );
    }

    #[test]
    fn test_placeholder_only_has_nothing_to_export() {
        let rows = vec![RowDescriptor::Placeholder {
            message: "No products found".to_string(),
            colspan: 7,
        }];
        assert_eq!(rows_to_csv(&["Name"], &rows), None);
    }
}
