//! Process thread history and impact analysis
//!
//! A thread is the recorded service-task trail of one process execution,
//! optionally annotated with reviewer feedback. Impact analysis scores
//! historical tasks against a proposed change and rolls the scores up
//! into summary metrics.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::Record;

// ─────────────────────────────────────────────────────────────────
// Thread Status
// ─────────────────────────────────────────────────────────────────

/// Execution state of a recorded thread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreadStatus {
    #[default]
    Pending,
    Active,
    Completed,
    Error,
}

impl ThreadStatus {
    pub fn slug(&self) -> &'static str {
        match self {
            ThreadStatus::Pending => "pending",
            ThreadStatus::Active => "active",
            ThreadStatus::Completed => "completed",
            ThreadStatus::Error => "error",
        }
    }
}

impl fmt::Display for ThreadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

// ─────────────────────────────────────────────────────────────────
// Thread Records
// ─────────────────────────────────────────────────────────────────

/// One service task executed within a thread, with its captured
/// input/output contexts. Context shapes vary per task type so they stay
/// as raw JSON values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceTaskContext {
    pub task_id: String,
    pub task_name: String,
    #[serde(default)]
    pub input: serde_json::Value,
    #[serde(default)]
    pub output: serde_json::Value,
}

/// Reviewer feedback attached to a thread.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskFeedback {
    pub user: String,
    pub timestamp: DateTime<Utc>,
    pub comment: String,
}

/// The recorded execution trail of one process run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessThread {
    #[serde(default)]
    pub id: String,
    pub process_name: String,
    pub process_version: u32,
    #[serde(default)]
    pub status: ThreadStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub tasks: Vec<ServiceTaskContext>,
    #[serde(default)]
    pub feedback: Vec<TaskFeedback>,
}

impl Default for ProcessThread {
    fn default() -> Self {
        Self {
            id: String::new(),
            process_name: String::new(),
            process_version: 1,
            status: ThreadStatus::Pending,
            created_at: Utc::now(),
            tasks: Vec::new(),
            feedback: Vec::new(),
        }
    }
}

impl Record for ProcessThread {
    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }

    fn field_text(&self, field: &str) -> Option<String> {
        match field {
            "process_name" => Some(self.process_name.clone()),
            "process_version" => Some(self.process_version.to_string()),
            "status" => Some(self.status.slug().to_string()),
            _ => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Impact Analysis
// ─────────────────────────────────────────────────────────────────

/// Severity bucket derived from a similarity score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactLevel {
    High,
    Medium,
    #[default]
    Low,
}

impl ImpactLevel {
    /// Scores of 0.8 and above are high impact, 0.6 and above medium,
    /// everything else low.
    pub fn from_score(score: f32) -> Self {
        if score >= 0.8 {
            ImpactLevel::High
        } else if score >= 0.6 {
            ImpactLevel::Medium
        } else {
            ImpactLevel::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ImpactLevel::High => "High",
            ImpactLevel::Medium => "Medium",
            ImpactLevel::Low => "Low",
        }
    }
}

impl fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One historical task flagged as affected by a proposed change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImpactedTask {
    pub thread_id: String,
    pub process_name: String,
    pub process_version: u32,
    pub task_id: String,
    pub task_name: String,
    pub impact_score: f32,
    #[serde(default)]
    pub explanation: String,
}

impl ImpactedTask {
    pub fn level(&self) -> ImpactLevel {
        ImpactLevel::from_score(self.impact_score)
    }
}

/// Rolled-up results of an impact analysis run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisMetrics {
    pub total_threads_analyzed: usize,
    pub high_impact_tasks: usize,
    pub medium_impact_tasks: usize,
    pub low_impact_tasks: usize,
    pub average_similarity_score: f32,
    pub risk_level: ImpactLevel,
}

impl AnalysisMetrics {
    /// Summarize a set of impacted tasks. Overall risk follows the
    /// average score through the same thresholds as individual tasks.
    pub fn summarize(threads_analyzed: usize, tasks: &[ImpactedTask]) -> Self {
        let mut high = 0;
        let mut medium = 0;
        let mut low = 0;
        let mut score_sum = 0.0f32;

        for task in tasks {
            match task.level() {
                ImpactLevel::High => high += 1,
                ImpactLevel::Medium => medium += 1,
                ImpactLevel::Low => low += 1,
            }
            score_sum += task.impact_score;
        }

        let average = if tasks.is_empty() {
            0.0
        } else {
            score_sum / tasks.len() as f32
        };

        Self {
            total_threads_analyzed: threads_analyzed,
            high_impact_tasks: high,
            medium_impact_tasks: medium,
            low_impact_tasks: low,
            average_similarity_score: average,
            risk_level: ImpactLevel::from_score(average),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────
