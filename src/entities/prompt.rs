//! Prompt template records

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::store::forms::{join_csv, Editable, FieldKind, FieldSpec};
use crate::store::Record;

// ─────────────────────────────────────────────────────────────────
// Approval State
// ─────────────────────────────────────────────────────────────────

/// Review state of a prompt template. New prompts start as drafts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalState {
    #[default]
    Draft,
    Approved,
    Rejected,
}

impl ApprovalState {
    /// Slug used in filters and serialized payloads.
    pub fn slug(&self) -> &'static str {
        match self {
            ApprovalState::Draft => "draft",
            ApprovalState::Approved => "approved",
            ApprovalState::Rejected => "rejected",
        }
    }

    /// All states, in review order.
    pub fn all() -> &'static [ApprovalState] {
        &[
            ApprovalState::Draft,
            ApprovalState::Approved,
            ApprovalState::Rejected,
        ]
    }
}

impl fmt::Display for ApprovalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ApprovalState::Draft => "Draft",
            ApprovalState::Approved => "Approved",
            ApprovalState::Rejected => "Rejected",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for ApprovalState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(ApprovalState::Draft),
            "approved" => Ok(ApprovalState::Approved),
            "rejected" => Ok(ApprovalState::Rejected),
            _ => Err(format!(
                "Unknown approval state '{}'. Valid: draft, approved, rejected",
                s
            )),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Prompt
// ─────────────────────────────────────────────────────────────────

/// A reusable prompt template with `{{placeholder}}` slots, bound to a
/// persona by weak reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Prompt {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub description: String,
    pub template: String,
    #[serde(default)]
    pub persona_id: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub approval_state: ApprovalState,
}

impl Record for Prompt {
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
            "template" => Some(self.template.clone()),
            "persona_id" => Some(self.persona_id.clone()),
            "tags" => Some(join_csv(&self.tags)),
            "approval_state" => Some(self.approval_state.slug().to_string()),
            _ => None,
        }
    }
}

impl Editable for Prompt {
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
                kind: FieldKind::Text,
                required: true,
            },
            FieldSpec {
                name: "template",
                label: "Template",
                kind: FieldKind::LongText,
                required: true,
            },
            FieldSpec {
                name: "persona_id",
                label: "Persona",
                kind: FieldKind::RefList,
                required: false,
            },
            FieldSpec {
                name: "tags",
                label: "Tags",
                kind: FieldKind::RefList,
                required: false,
            },
            FieldSpec {
                name: "approval_state",
                label: "Approval",
                kind: FieldKind::Enum(&["draft", "approved", "rejected"]),
                required: false,
            },
        ];
        SPECS
    }
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::view::{filter, FilterCriteria};

    #[test]
    fn test_default_state_is_draft() {
        assert_eq!(Prompt::default().approval_state, ApprovalState::Draft);
    }

    #[test]
    fn test_approval_state_from_str() {
        assert_eq!(
            "approved".parse::<ApprovalState>().unwrap(),
            ApprovalState::Approved
        );
        assert_eq!(
            "DRAFT".parse::<ApprovalState>().unwrap(),
            ApprovalState::Draft
        );
        assert!("unknown".parse::<ApprovalState>().is_err());
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&ApprovalState::Approved).unwrap();
        assert_eq!(json, "\"approved\"");
    }

    #[test]
    fn test_filter_prompts_by_approval_state() {
        let prompts = vec![
            Prompt {
                id: "101".to_string(),
                name: "Business Decision Analysis".to_string(),
                approval_state: ApprovalState::Approved,
                ..Default::default()
            },
            Prompt {
                id: "102".to_string(),
                name: "Risk Assessment".to_string(),
                approval_state: ApprovalState::Draft,
                ..Default::default()
            },
        ];

        let criteria = FilterCriteria::new().equals("approval_state", "draft");
        let out = filter(&prompts, &criteria);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "102");
    }
}
