//! Process definition and instance records
//!
//! Definitions are versioned deployments grouped by key; instances are
//! running or finished executions of a definition. The process board
//! summarizes active/completed counts and per-instance durations.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::store::view::aggregate;
use crate::store::Record;

// ─────────────────────────────────────────────────────────────────
// Instance Status
// ─────────────────────────────────────────────────────────────────

/// Engine-reported state of a process instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstanceStatus {
    #[default]
    Active,
    Completed,
    ExternallyTerminated,
    InternallyTerminated,
}

impl InstanceStatus {
    pub fn slug(&self) -> &'static str {
        match self {
            InstanceStatus::Active => "ACTIVE",
            InstanceStatus::Completed => "COMPLETED",
            InstanceStatus::ExternallyTerminated => "EXTERNALLY_TERMINATED",
            InstanceStatus::InternallyTerminated => "INTERNALLY_TERMINATED",
        }
    }

    pub fn is_terminated(&self) -> bool {
        matches!(
            self,
            InstanceStatus::ExternallyTerminated | InstanceStatus::InternallyTerminated
        )
    }
}

impl fmt::Display for InstanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for InstanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ACTIVE" => Ok(InstanceStatus::Active),
            "COMPLETED" => Ok(InstanceStatus::Completed),
            "EXTERNALLY_TERMINATED" => Ok(InstanceStatus::ExternallyTerminated),
            "INTERNALLY_TERMINATED" => Ok(InstanceStatus::InternallyTerminated),
            _ => Err(format!("Unknown instance status '{}'", s)),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Process Definition
// ─────────────────────────────────────────────────────────────────

/// One deployed version of a process model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessDefinition {
    #[serde(default)]
    pub id: String,
    pub key: String,
    pub name: String,
    pub version: u32,
    pub resource: String,
    pub deployment_id: String,
}

impl Record for ProcessDefinition {
    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }

    fn field_text(&self, field: &str) -> Option<String> {
        match field {
            "key" => Some(self.key.clone()),
            "name" => Some(self.name.clone()),
            "version" => Some(self.version.to_string()),
            _ => None,
        }
    }
}

/// Group definitions by key, versions sorted ascending within each group.
pub fn group_by_key(definitions: &[ProcessDefinition]) -> BTreeMap<String, Vec<ProcessDefinition>> {
    let mut grouped: BTreeMap<String, Vec<ProcessDefinition>> = BTreeMap::new();
    for def in definitions {
        grouped.entry(def.key.clone()).or_default().push(def.clone());
    }
    for versions in grouped.values_mut() {
        versions.sort_by_key(|d| d.version);
    }
    grouped
}

/// The highest version within one definition group.
pub fn latest_version(versions: &[ProcessDefinition]) -> Option<&ProcessDefinition> {
    versions.iter().max_by_key(|d| d.version)
}

// ─────────────────────────────────────────────────────────────────
// Process Instance
// ─────────────────────────────────────────────────────────────────

/// A running or finished execution of a process definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessInstance {
    #[serde(default)]
    pub id: String,
    pub definition_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition_version: Option<u32>,
    pub start_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: InstanceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_key: Option<String>,
}

impl Default for ProcessInstance {
    fn default() -> Self {
        Self {
            id: String::new(),
            definition_key: String::new(),
            definition_name: None,
            definition_version: None,
            start_time: Utc::now(),
            end_time: None,
            status: InstanceStatus::Active,
            business_key: None,
        }
    }
}

impl ProcessInstance {
    pub fn is_active(&self) -> bool {
        self.status == InstanceStatus::Active
    }

    /// Display name falls back to the definition key.
    pub fn display_name(&self) -> &str {
        self.definition_name
            .as_deref()
            .unwrap_or(&self.definition_key)
    }

    /// Elapsed time; open-ended instances run until `now`.
    pub fn duration(&self, now: DateTime<Utc>) -> Duration {
        self.end_time.unwrap_or(now) - self.start_time
    }
}

impl Record for ProcessInstance {
    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }

    fn field_text(&self, field: &str) -> Option<String> {
        match field {
            "definition_key" => Some(self.definition_key.clone()),
            "status" => Some(self.status.slug().to_string()),
            "business_key" => self.business_key.clone(),
            _ => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Process Counts
// ─────────────────────────────────────────────────────────────────

/// Summary-card counts for the process board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessCounts {
    pub active: usize,
    pub completed: usize,
    pub total: usize,
}

impl ProcessCounts {
    pub fn from_instances(instances: &[ProcessInstance]) -> Self {
        let counts = aggregate(instances, |i| i.status.slug().to_string());
        Self {
            active: counts.bucket("ACTIVE"),
            completed: counts.bucket("COMPLETED"),
            total: counts.total,
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn def(id: &str, key: &str, version: u32) -> ProcessDefinition {
        ProcessDefinition {
            id: id.to_string(),
            key: key.to_string(),
            name: format!("{} Process", key),
            version,
            resource: format!("{}.bpmn", key),
            deployment_id: format!("dep-{}", id),
        }
    }

    #[test]
    fn test_group_by_key_sorts_versions() {
        let defs = vec![
            def("d2", "invoice", 2),
            def("d1", "invoice", 1),
            def("d3", "approval", 1),
        ];

        let grouped = group_by_key(&defs);
        assert_eq!(grouped.len(), 2);

        let invoice = &grouped["invoice"];
        let versions: Vec<u32> = invoice.iter().map(|d| d.version).collect();
        assert_eq!(versions, vec![1, 2]);

        assert_eq!(latest_version(invoice).unwrap().id, "d2");
    }

    #[test]
    fn test_instance_duration() {
        let start = Utc::now();
        let instance = ProcessInstance {
            id: "inst1".to_string(),
            definition_key: "invoice".to_string(),
            start_time: start,
            end_time: Some(start + Duration::minutes(90)),
            status: InstanceStatus::Completed,
            ..Default::default()
        };

        assert_eq!(instance.duration(start).num_minutes(), 90);

        // Open-ended instance measures against now
        let open = ProcessInstance {
            end_time: None,
            ..instance
        };
        assert_eq!(open.duration(start + Duration::hours(2)).num_hours(), 2);
    }

    #[test]
    fn test_process_counts() {
        let instances = vec![
            ProcessInstance {
                id: "1".to_string(),
                status: InstanceStatus::Active,
                ..Default::default()
            },
            ProcessInstance {
                id: "2".to_string(),
                status: InstanceStatus::Completed,
                ..Default::default()
            },
            ProcessInstance {
                id: "3".to_string(),
                status: InstanceStatus::ExternallyTerminated,
                ..Default::default()
            },
        ];

        let counts = ProcessCounts::from_instances(&instances);
        assert_eq!(counts.active, 1);
        assert_eq!(counts.completed, 1);
        assert_eq!(counts.total, 3);
    }

    #[test]
    fn test_status_serde_screaming_case() {
        let json = serde_json::to_string(&InstanceStatus::ExternallyTerminated).unwrap();
        assert_eq!(json, "\"EXTERNALLY_TERMINATED\"");
    }

    #[test]
    fn test_display_name_falls_back_to_key() {
        let instance = ProcessInstance {
            definition_key: "invoice".to_string(),
            ..Default::default()
        };
        assert_eq!(instance.display_name(), "invoice");
    }
}
