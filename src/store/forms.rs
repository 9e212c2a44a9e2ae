//! Editor form descriptors
//!
//! Each entity kind declares its editable fields as data instead of
//! reflection: a list of [`FieldSpec`]s drives the generic editor's
//! rendering and validation.

use crate::error::{Error, Result};

use super::Record;

/// What kind of input a field takes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line text.
    Text,
    /// Multi-line free text.
    LongText,
    /// Comma-separated list, split and trimmed on submit.
    CsvList,
    /// One value out of a fixed closed set.
    Enum(&'static [&'static str]),
    /// Weak references to other entities by id.
    RefList,
}

/// One editable field of an entity kind.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Field name as understood by [`Record::field_text`].
    pub name: &'static str,
    /// Human-readable label shown next to the input.
    pub label: &'static str,
    pub kind: FieldKind,
    /// Submission stays disabled while a required field is empty.
    pub required: bool,
}

impl FieldSpec {
    pub fn required(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: true,
        }
    }

    pub fn optional(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
        }
    }
}

/// An entity kind that can be edited in the generic modal editor.
pub trait Editable: Record {
    /// Field descriptors, in display order.
    fn field_specs() -> &'static [FieldSpec];
}

/// Check every required field of the working copy is non-empty.
pub fn validate_required<R: Editable>(record: &R) -> Result<()> {
    for spec in R::field_specs() {
        if !spec.required {
            continue;
        }
        let value = record.field_text(spec.name).unwrap_or_default();
        if value.trim().is_empty() {
            return Err(Error::required_field(spec.label));
        }
    }
    Ok(())
}

/// Split comma-separated user input into entries: trimmed, empties dropped.
///
/// "Risk, Finance" -> ["Risk", "Finance"]
pub fn split_csv(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join list values back into the comma-separated editor representation.
pub fn join_csv(values: &[String]) -> String {
    values.join(", ")
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_csv_trims_and_drops_empties() {
        assert_eq!(split_csv("Risk, Finance"), vec!["Risk", "Finance"]);
        assert_eq!(split_csv("  a ,, b ,  "), vec!["a", "b"]);
        assert_eq!(split_csv(""), Vec::<String>::new());
        assert_eq!(split_csv(" ,,, "), Vec::<String>::new());
    }

    #[test]
    fn test_join_csv_roundtrip_shape() {
        let values = vec!["Risk".to_string(), "Finance".to_string()];
        assert_eq!(join_csv(&values), "Risk, Finance");
        assert_eq!(split_csv(&join_csv(&values)), values);
    }
}
