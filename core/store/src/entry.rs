//! FILENAME: core/store/src/entry.rs
//! PURPOSE: Entry record and the create payload.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A saved shortcut: a label shown in the menu and the website it opens.
///
/// Fields missing from the file (or stored as `null`) read back as empty
/// strings. The store never rejects such records; consumers that need both
/// fields check [`Entry::is_menu_ready`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    #[serde(default, deserialize_with = "nullable_string")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub label: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub website: String,
}

impl Entry {
    pub fn new(id: impl Into<String>, label: impl Into<String>, website: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            website: website.into(),
        }
    }

    /// Read one record of the stored array without failing the whole
    /// document. Non-objects give `None`. Strings are kept, numbers keep their
    /// text, and any other field value reads as empty.
    pub fn from_value(value: &Value) -> Option<Self> {
        let record = value.as_object()?;
        let field = |name: &str| match record.get(name) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        };
        Some(Self {
            id: field("id"),
            label: field("label"),
            website: field("website"),
        })
    }

    /// True when both label and website are present.
    pub fn is_menu_ready(&self) -> bool {
        !self.label.is_empty() && !self.website.is_empty()
    }
}

/// Payload for creating an entry; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDraft {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub website: String,
}

impl EntryDraft {
    pub fn new(label: impl Into<String>, website: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            website: website.into(),
        }
    }
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_and_null_fields_read_as_empty() {
        let entries: Vec<Entry> =
            serde_json::from_str(r#"[{"id":"1","label":null},{"website":"https://x"}]"#).unwrap();

        assert_eq!(entries[0], Entry::new("1", "", ""));
        assert_eq!(entries[1], Entry::new("", "", "https://x"));
        assert!(!entries[0].is_menu_ready());
        assert!(!entries[1].is_menu_ready());
    }

    #[test]
    fn test_from_value_tolerates_wrong_shapes() {
        let records: Vec<Value> = serde_json::from_str(
            r#"[{"id":"1","label":"Good","website":"https://g.example"},
                null, "text", {"id":2,"label":7,"website":["x"]}]"#,
        )
        .unwrap();
        let entries: Vec<Option<Entry>> = records.iter().map(Entry::from_value).collect();

        assert_eq!(entries[0], Some(Entry::new("1", "Good", "https://g.example")));
        assert_eq!(entries[1], None);
        assert_eq!(entries[2], None);
        assert_eq!(entries[3], Some(Entry::new("2", "7", "")));
    }

    #[test]
    fn test_menu_ready_requires_both_fields() {
        assert!(Entry::new("1", "Claude", "https://claude.ai").is_menu_ready());
        assert!(!Entry::new("1", "", "https://claude.ai").is_menu_ready());
        assert!(!Entry::new("1", "Claude", "").is_menu_ready());
    }
}
