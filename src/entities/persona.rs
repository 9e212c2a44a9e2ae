//! Persona records
//!
//! A persona defines a role and expertise profile the platform's agents
//! take on during decision analysis. Expertise is entered as
//! comma-separated text and stored as a list; tool references are weak ids
//! into the tool store.

use serde::{Deserialize, Serialize};

use crate::store::forms::{join_csv, split_csv, Editable, FieldKind, FieldSpec};
use crate::store::Record;

/// An AI persona with a role, expertise areas, and behavior guidelines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Persona {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub expertise: Vec<String>,
    pub guidelines: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub tool_ids: Vec<String>,
}

impl Persona {
    /// Replace the expertise list from comma-separated editor input.
    pub fn set_expertise_text(&mut self, text: &str) {
        self.expertise = split_csv(text);
    }
}

impl Record for Persona {
    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }

    fn field_text(&self, field: &str) -> Option<String> {
        match field {
            "name" => Some(self.name.clone()),
            "role" => Some(self.role.clone()),
            "expertise" => Some(join_csv(&self.expertise)),
            "guidelines" => Some(self.guidelines.clone()),
            "tags" => Some(join_csv(&self.tags)),
            "tool_ids" => Some(join_csv(&self.tool_ids)),
            _ => None,
        }
    }
}

impl Editable for Persona {
    fn field_specs() -> &'static [FieldSpec] {
        static SPECS: &[FieldSpec] = &[
            FieldSpec {
                name: "name",
                label: "Name",
                kind: FieldKind::Text,
                required: true,
            },
            FieldSpec {
                name: "role",
                label: "Role",
                kind: FieldKind::Text,
                required: true,
            },
            FieldSpec {
                name: "expertise",
                label: "Expertise",
                kind: FieldKind::CsvList,
                required: false,
            },
            FieldSpec {
                name: "guidelines",
                label: "Guidelines",
                kind: FieldKind::LongText,
                required: true,
            },
            FieldSpec {
                name: "tags",
                label: "Tags",
                kind: FieldKind::RefList,
                required: false,
            },
            FieldSpec {
                name: "tool_ids",
                label: "Tools",
                kind: FieldKind::RefList,
                required: false,
            },
        ];
        SPECS
    }
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────
