//! Team records
//!
//! A team groups personas and declares how the group reaches a decision.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::store::forms::{join_csv, Editable, FieldKind, FieldSpec};
use crate::store::Record;

// ─────────────────────────────────────────────────────────────────
// Decision Method
// ─────────────────────────────────────────────────────────────────

/// How a team resolves disagreement. New teams default to voting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionMethod {
    #[default]
    Voting,
    Consensus,
    Moderator,
    Random,
}

impl DecisionMethod {
    pub fn slug(&self) -> &'static str {
        match self {
            DecisionMethod::Voting => "voting",
            DecisionMethod::Consensus => "consensus",
            DecisionMethod::Moderator => "moderator",
            DecisionMethod::Random => "random",
        }
    }

    /// Label shown in the decision-method dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            DecisionMethod::Voting => "Voting (majority)",
            DecisionMethod::Consensus => "Consensus (all agree)",
            DecisionMethod::Moderator => "Moderator decides",
            DecisionMethod::Random => "Random selection",
        }
    }

    pub fn all() -> &'static [DecisionMethod] {
        &[
            DecisionMethod::Voting,
            DecisionMethod::Consensus,
            DecisionMethod::Moderator,
            DecisionMethod::Random,
        ]
    }
}

impl fmt::Display for DecisionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for DecisionMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "voting" => Ok(DecisionMethod::Voting),
            "consensus" => Ok(DecisionMethod::Consensus),
            "moderator" => Ok(DecisionMethod::Moderator),
            "random" => Ok(DecisionMethod::Random),
            _ => Err(format!(
                "Unknown decision method '{}'. Valid: voting, consensus, moderator, random",
                s
            )),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Team
// ─────────────────────────────────────────────────────────────────

/// A persona group with a decision method. Persona ids are weak
/// references; members that no longer resolve are simply not shown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Team {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub persona_ids: Vec<String>,
    #[serde(default)]
    pub decision_method: DecisionMethod,
}

impl Record for Team {
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
            "persona_ids" => Some(join_csv(&self.persona_ids)),
            "decision_method" => Some(self.decision_method.slug().to_string()),
            _ => None,
        }
    }
}

impl Editable for Team {
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
                required: false,
            },
            FieldSpec {
                name: "persona_ids",
                label: "Personas",
                kind: FieldKind::RefList,
                required: false,
            },
            FieldSpec {
                name: "decision_method",
                label: "Decision Method",
                kind: FieldKind::Enum(&["voting", "consensus", "moderator", "random"]),
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

    #[test]
    fn test_default_method_is_voting() {
        assert_eq!(Team::default().decision_method, DecisionMethod::Voting);
    }

    #[test]
    fn test_decision_method_labels() {
        assert_eq!(DecisionMethod::Voting.label(), "Voting (majority)");
        assert_eq!(DecisionMethod::Consensus.label(), "Consensus (all agree)");
    }

    #[test]
    fn test_decision_method_from_str() {
        assert_eq!(
            "consensus".parse::<DecisionMethod>().unwrap(),
            DecisionMethod::Consensus
        );
        assert!("majority".parse::<DecisionMethod>().is_err());
    }

    #[test]
    fn test_decision_method_all() {
        assert_eq!(DecisionMethod::all().len(), 4);
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&DecisionMethod::Moderator).unwrap();
        assert_eq!(json, "\"moderator\"");
        let parsed: DecisionMethod = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, DecisionMethod::Moderator);
    }
}
