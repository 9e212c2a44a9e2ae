//! Seed data for offline operation
//!
//! When the console runs without a reachable backend it seeds the stores
//! with this data so every board renders. The records mirror the kinds of
//! content the backend serves.

use chrono::{Duration, Utc};

use crate::entities::process::InstanceStatus;
use crate::entities::thread::{ServiceTaskContext, ThreadStatus};
use crate::entities::{
    ApprovalState, DecisionMethod, ImpactedTask, Persona, ProcessDefinition, ProcessInstance,
    ProcessThread, Prompt, TaskStatus, Team, Tool, UserTask,
};

pub fn seed_personas() -> Vec<Persona> {
    vec![
        Persona {
            id: "1".to_string(),
            name: "Risk Analyst".to_string(),
            role: "Analyst".to_string(),
            expertise: vec!["Risk".to_string(), "Finance".to_string()],
            guidelines: "Be thorough and cautious.".to_string(),
            tags: vec!["finance".to_string(), "analysis".to_string()],
            tool_ids: vec!["2".to_string()],
        },
        Persona {
            id: "2".to_string(),
            name: "Mission Simulation Expert".to_string(),
            role: "Simulation Expert".to_string(),
            expertise: vec!["Simulation".to_string(), "Mission Planning".to_string()],
            guidelines: "Use all available simulation tools.".to_string(),
            tags: vec!["simulation".to_string()],
            tool_ids: vec!["1".to_string(), "3".to_string()],
        },
    ]
}

pub fn seed_tools() -> Vec<Tool> {
    vec![
        Tool {
            id: "1".to_string(),
            name: "Sicilab API".to_string(),
            description: "Scientific simulation API.".to_string(),
            api_spec: Some("OpenAPI 3.0".to_string()),
            tags: vec!["simulation".to_string(), "external API".to_string()],
        },
        Tool {
            id: "2".to_string(),
            name: "Calculator".to_string(),
            description: "Basic math operations.".to_string(),
            api_spec: None,
            tags: vec!["analysis".to_string()],
        },
        Tool {
            id: "3".to_string(),
            name: "AFSIM".to_string(),
            description: "Mission-level simulation framework.".to_string(),
            api_spec: None,
            tags: vec!["simulation".to_string()],
        },
    ]
}

pub fn seed_prompts() -> Vec<Prompt> {
    vec![
        Prompt {
            id: "101".to_string(),
            name: "Business Decision Analysis".to_string(),
            description: "Analyze business options and recommend the best course of action."
                .to_string(),
            template:
                "Given the following options: {{options}}, analyze the pros and cons and recommend the best choice."
                    .to_string(),
            persona_id: "1".to_string(),
            tags: vec!["finance".to_string(), "analysis".to_string()],
            approval_state: ApprovalState::Approved,
        },
        Prompt {
            id: "102".to_string(),
            name: "Risk Assessment".to_string(),
            description: "Evaluate potential risks and mitigation strategies.".to_string(),
            template:
                "Assess the risks associated with {{scenario}} and provide mitigation recommendations."
                    .to_string(),
            persona_id: "1".to_string(),
            tags: vec!["finance".to_string(), "analysis".to_string()],
            approval_state: ApprovalState::Draft,
        },
    ]
}

pub fn seed_teams() -> Vec<Team> {
    vec![
        Team {
            id: "t1".to_string(),
            name: "AI Experts".to_string(),
            description: "LLM and AI specialists for technical decisions".to_string(),
            persona_ids: vec!["1".to_string(), "2".to_string()],
            decision_method: DecisionMethod::Voting,
        },
        Team {
            id: "t2".to_string(),
            name: "Risk Assessment Team".to_string(),
            description: "Financial and operational risk evaluation".to_string(),
            persona_ids: vec!["1".to_string()],
            decision_method: DecisionMethod::Consensus,
        },
    ]
}

pub fn seed_definitions() -> Vec<ProcessDefinition> {
    vec![
        ProcessDefinition {
            id: "def1".to_string(),
            key: "invoice".to_string(),
            name: "Invoice Process".to_string(),
            version: 1,
            resource: "invoice.bpmn".to_string(),
            deployment_id: "dep1".to_string(),
        },
        ProcessDefinition {
            id: "def2".to_string(),
            key: "invoice".to_string(),
            name: "Invoice Process".to_string(),
            version: 2,
            resource: "invoice.bpmn".to_string(),
            deployment_id: "dep2".to_string(),
        },
        ProcessDefinition {
            id: "def3".to_string(),
            key: "approval".to_string(),
            name: "Approval Process".to_string(),
            version: 1,
            resource: "approval.bpmn".to_string(),
            deployment_id: "dep3".to_string(),
        },
    ]
}

pub fn seed_instances() -> Vec<ProcessInstance> {
    let now = Utc::now();
    vec![
        ProcessInstance {
            id: "inst1".to_string(),
            definition_key: "invoice".to_string(),
            definition_name: Some("Invoice Process".to_string()),
            definition_version: Some(2),
            start_time: now - Duration::minutes(12),
            end_time: None,
            status: InstanceStatus::Active,
            business_key: Some("INV-001".to_string()),
        },
        ProcessInstance {
            id: "inst2".to_string(),
            definition_key: "approval".to_string(),
            definition_name: Some("Approval Process".to_string()),
            definition_version: Some(1),
            start_time: now - Duration::hours(1),
            end_time: Some(now),
            status: InstanceStatus::Completed,
            business_key: Some("APP-123".to_string()),
        },
    ]
}

pub fn seed_tasks() -> Vec<UserTask> {
    let now = Utc::now();
    vec![
        UserTask {
            id: "task1".to_string(),
            name: "Review Invoice INV-001".to_string(),
            description: Some("Check amounts and cost center.".to_string()),
            process_instance_id: "inst1".to_string(),
            process_definition_key: "invoice".to_string(),
            assignee: Some("analyst".to_string()),
            created: now - Duration::hours(2),
            due: Some(now + Duration::hours(22)),
            priority: 50,
            status: TaskStatus::Pending,
        },
        UserTask {
            id: "task2".to_string(),
            name: "Approve Purchase Request".to_string(),
            description: None,
            process_instance_id: "inst2".to_string(),
            process_definition_key: "approval".to_string(),
            assignee: None,
            created: now - Duration::days(3),
            due: Some(now - Duration::days(1)),
            priority: 80,
            status: TaskStatus::InProgress,
        },
        UserTask {
            id: "task3".to_string(),
            name: "Archive Completed Invoice".to_string(),
            description: None,
            process_instance_id: "inst2".to_string(),
            process_definition_key: "invoice".to_string(),
            assignee: Some("analyst".to_string()),
            created: now - Duration::days(5),
            due: None,
            priority: 20,
            status: TaskStatus::Completed,
        },
    ]
}

pub fn seed_threads() -> Vec<ProcessThread> {
    vec![ProcessThread {
        id: "thread-001".to_string(),
        process_name: "Strategic Planning Process".to_string(),
        process_version: 2,
        status: ThreadStatus::Completed,
        created_at: "2024-01-15T10:30:00Z"
            .parse()
            .unwrap_or_else(|_| Utc::now()),
        tasks: vec![ServiceTaskContext {
            task_id: "task-001".to_string(),
            task_name: "Requirements Analysis".to_string(),
            input: serde_json::json!({ "requirements": ["scalability", "security"] }),
            output: serde_json::json!({ "analysis_complete": true }),
        }],
        feedback: Vec::new(),
    }]
}

pub fn seed_impacted_tasks() -> Vec<ImpactedTask> {
    vec![
        ImpactedTask {
            thread_id: "thread-001".to_string(),
            process_name: "Strategic Planning Process".to_string(),
            process_version: 2,
            task_id: "task-001".to_string(),
            task_name: "Requirements Analysis".to_string(),
            impact_score: 0.87,
            explanation: "Shares the same input schema as the proposed change.".to_string(),
        },
        ImpactedTask {
            thread_id: "thread-001".to_string(),
            process_name: "Strategic Planning Process".to_string(),
            process_version: 2,
            task_id: "task-002".to_string(),
            task_name: "Stakeholder Review".to_string(),
            impact_score: 0.42,
            explanation: "Only downstream of the changed task.".to_string(),
        },
    ]
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::resolve_names;
    use crate::store::EntityStore;

    #[test]
    fn test_persona_tool_refs_resolve() {
        let tools = EntityStore::seeded(seed_tools());
        let personas = seed_personas();

        let names = resolve_names(&tools, &personas[1].tool_ids);
        assert_eq!(names, vec!["Sicilab API", "AFSIM"]);
    }

    #[test]
    fn test_team_persona_refs_resolve() {
        let personas = EntityStore::seeded(seed_personas());
        let teams = seed_teams();

        let names = resolve_names(&personas, &teams[0].persona_ids);
        assert_eq!(names, vec!["Risk Analyst", "Mission Simulation Expert"]);
    }

    #[test]
    fn test_seed_ids_are_unique_per_kind() {
        let tasks = seed_tasks();
        let mut ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), tasks.len());
    }

    #[test]
    fn test_instance_counts_match_mock() {
        let counts =
            crate::entities::ProcessCounts::from_instances(&seed_instances());
        assert_eq!(counts.active, 1);
        assert_eq!(counts.completed, 1);
        assert_eq!(counts.total, 2);
    }
}
