//! Member roster extracted from contact records.

use serde_json::Value;

use crate::domain::ports::{ListRecordsQuery, StoredFields};

/// Column holding each member's display name.
pub const NAME_COLUMN: &str = "Nombre";

/// Records fetched per listing.
pub const ROSTER_PAGE_SIZE: u16 = 100;

/// One page projected onto the name column.
pub fn roster_query() -> ListRecordsQuery {
    ListRecordsQuery {
        page_size: ROSTER_PAGE_SIZE,
        fields: vec![NAME_COLUMN.to_owned()],
    }
}

/// Names in upstream order, dropping records whose name is missing or empty.
///
/// Duplicates are kept.
pub fn extract_names(records: &[StoredFields]) -> Vec<String> {
    records
        .iter()
        .filter_map(|fields| match fields.get(NAME_COLUMN)? {
            Value::Null => None,
            Value::String(name) => Some(name.clone()),
            other => Some(other.to_string()),
        })
        .filter(|name| !name.is_empty())
        .collect()
}
