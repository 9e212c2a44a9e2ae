//! Decision backend client
//!
//! Typed HTTP access to the decision service: decision summaries, the
//! advisory chat, white paper drafting and export, and the approval
//! workflow. All payloads are JSON except the PDF export, which returns
//! raw bytes.

pub mod client;
pub mod types;

pub use client::DecisionClient;
pub use types::{
    ApprovalDecision, ApprovalRequest, ApprovalStatus, ChatMessage, ChatSender, DecisionStatus,
    DecisionSummary, NewChatMessage, WhitePaper, WhitePaperSection,
};
