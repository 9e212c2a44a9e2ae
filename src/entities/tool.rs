//! Tool records
//!
//! External capabilities (APIs, calculators, simulators) that personas can
//! be granted access to.

use serde::{Deserialize, Serialize};

use crate::store::forms::{join_csv, Editable, FieldKind, FieldSpec};
use crate::store::Record;

/// A tool available to personas, with an optional machine-readable spec.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_spec: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Tool {
    pub fn new(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            api_spec: None,
            tags: Vec::new(),
        }
    }
}

impl Record for Tool {
    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }

    fn field_text(&self, field: &str) -> Option<String> {
        match field {
            "name" => Some(self.name.clone()),
            "description" => Some(self.description.clone()),
            "api_spec" => self.api_spec.clone(),
            "tags" => Some(join_csv(&self.tags)),
            _ => None,
        }
    }
}

impl Editable for Tool {
    fn field_specs() -> &'static [FieldSpec] {
        static SPECS: &[FieldSpec] = &[
            FieldSpec {
                name: "name",
                label: "Name",
                kind: FieldKind::Text,
                required: true,
            },
            FieldSpec {
                name: "description",
                label: "Description",
                kind: FieldKind::LongText,
                required: true,
            },
            FieldSpec {
                name: "api_spec",
                label: "API Spec",
                kind: FieldKind::Text,
                required: false,
            },
            FieldSpec {
                name: "tags",
                label: "Tags",
                kind: FieldKind::RefList,
                required: false,
            },
        ];
        SPECS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_api_spec_is_none_not_error() {
        let tool = Tool::new("2", "Calculator", "Basic math operations.");
        assert_eq!(tool.field_text("api_spec"), None);
    }

    #[test]
    fn test_serde_skips_absent_api_spec() {
        let tool = Tool::new("2", "Calculator", "Basic math operations.");
        let json = serde_json::to_string(&tool).unwrap();
        assert!(!json.contains("api_spec"));
    }
}
