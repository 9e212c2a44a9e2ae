//! Wire types for the decision backend
//!
//! The backend speaks camelCase JSON; serde renames keep the Rust side
//! snake_case. Timestamps and dates arrive as strings and stay strings
//! here, the backend owns their formatting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────
// Decision Summary
// ─────────────────────────────────────────────────────────────────

/// Where a decision stands in the review pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionStatus {
    #[default]
    Draft,
    Submitted,
    UnderReview,
    Approved,
    Rejected,
}

impl DecisionStatus {
    pub fn slug(&self) -> &'static str {
        match self {
            DecisionStatus::Draft => "draft",
            DecisionStatus::Submitted => "submitted",
            DecisionStatus::UnderReview => "under_review",
            DecisionStatus::Approved => "approved",
            DecisionStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for DecisionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for DecisionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(DecisionStatus::Draft),
            "submitted" => Ok(DecisionStatus::Submitted),
            "under_review" => Ok(DecisionStatus::UnderReview),
            "approved" => Ok(DecisionStatus::Approved),
            "rejected" => Ok(DecisionStatus::Rejected),
            _ => Err(format!("Unknown decision status '{}'", s)),
        }
    }
}

/// The outcome record of a completed decision process.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionSummary {
    pub project_id: String,
    pub project_name: String,
    pub decision: String,
    pub process_name: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(default)]
    pub key_findings: Vec<String>,
    #[serde(default)]
    pub risks: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub status: DecisionStatus,
}

// ─────────────────────────────────────────────────────────────────
// Chat
// ─────────────────────────────────────────────────────────────────

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatSender {
    #[default]
    User,
    Assistant,
    Team,
}

/// One message in the per-project advisory chat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    #[serde(default)]
    pub id: String,
    pub sender: ChatSender,
    pub sender_name: String,
    pub content: String,
    #[serde(default)]
    pub timestamp: String,
    pub project_id: String,
}

/// Outgoing message body; the backend assigns id and timestamp.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewChatMessage {
    pub sender: ChatSender,
    pub sender_name: String,
    pub content: String,
    pub project_id: String,
}

// ─────────────────────────────────────────────────────────────────
// White Paper
// ─────────────────────────────────────────────────────────────────

/// One editable section of the white paper.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhitePaperSection {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub required: bool,
    pub project_id: String,
}

/// The structured decision document, versioned per save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhitePaper {
    pub project_id: String,
    #[serde(default)]
    pub sections: Vec<WhitePaperSection>,
    #[serde(default)]
    pub last_modified: String,
    #[serde(default)]
    pub version: u32,
}

// ─────────────────────────────────────────────────────────────────
// Approval
// ─────────────────────────────────────────────────────────────────

/// Request body submitting a white paper for sign-off.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalRequest {
    pub project_id: String,
    pub white_paper_id: String,
    pub submitted_by: String,
    pub submitted_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

/// Acknowledgement for a submitted approval request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalDecision {
    pub approval_id: String,
    pub status: String,
}

/// Current state of the approval workflow for a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalStatus {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval_id: Option<String>,
    #[serde(default)]
    pub comments: Vec<String>,
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_uses_camel_case_keys() {
        let summary = DecisionSummary {
            project_id: "proj-001".to_string(),
            project_name: "Fleet Modernization".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"projectId\""));
        assert!(json.contains("\"keyFindings\""));
        assert!(!json.contains("project_id"));
    }

    #[test]
    fn test_chat_message_roundtrip() {
        let json = r#"{
            "id": "1",
            "sender": "assistant",
            "senderName": "AI Assistant",
            "content": "The risk assessment looks comprehensive.",
            "timestamp": "2024-01-15 14:30",
            "projectId": "proj-001"
        }"#;
        let msg: ChatMessage = serde_json::from_str(json).unwrap();
        assert_eq!(msg.sender, ChatSender::Assistant);
        assert_eq!(msg.sender_name, "AI Assistant");
    }

    #[test]
    fn test_decision_status_from_str() {
        assert_eq!(
            "under_review".parse::<DecisionStatus>().unwrap(),
            DecisionStatus::UnderReview
        );
        assert!("open".parse::<DecisionStatus>().is_err());
    }

    #[test]
    fn test_approval_request_skips_empty_comments() {
        let req = ApprovalRequest {
            project_id: "proj-001".to_string(),
            white_paper_id: "wp-001".to_string(),
            submitted_by: "analyst".to_string(),
            submitted_at: "2024-01-15".to_string(),
            comments: None,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("comments"));
        assert!(json.contains("\"submittedBy\""));
    }
}
