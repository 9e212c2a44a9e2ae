//! Console dashboard rendering
//!
//! Pure renderers that turn store contents into printable board text.
//! Rendering is side-effect free and deterministic for a given input, so
//! the boards are safe to redraw on every refresh tick.

use chrono::{DateTime, Duration, Utc};

use crate::entities::process::{group_by_key, latest_version, ProcessCounts, ProcessDefinition};
use crate::entities::{
    resolve_names, AnalysisMetrics, ImpactedTask, Persona, ProcessInstance, Prompt, TaskCounts,
    Team, Tool, UserTask,
};
use crate::store::forms::join_csv;
use crate::store::view::{filter, FilterCriteria};
use crate::store::EntityStore;

// ─────────────────────────────────────────────────────────────────
// Durations
// ─────────────────────────────────────────────────────────────────

/// Human-readable elapsed time: the two most significant units, down to
/// bare seconds.
pub fn format_duration(duration: Duration) -> String {
    let seconds = duration.num_seconds().max(0);
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        format!("{}d {}h", days, hours % 24)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes % 60)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds % 60)
    } else {
        format!("{}s", seconds)
    }
}

// ─────────────────────────────────────────────────────────────────
// Task Board
// ─────────────────────────────────────────────────────────────────

/// Render the task board: status summary cards plus the filtered task
/// rows.
pub fn render_task_board(
    tasks: &[UserTask],
    criteria: &FilterCriteria,
    now: DateTime<Utc>,
) -> String {
    let counts = TaskCounts::from_tasks(tasks, now);
    let visible = filter(tasks, criteria);

    let mut out = String::new();
    out.push_str("Tasks\n");
    out.push_str(&format!(
        "  Pending: {}  In Progress: {}  Completed: {}  Overdue: {}  (total {})\n",
        counts.pending, counts.in_progress, counts.completed, counts.overdue, counts.total
    ));

    if visible.is_empty() {
        out.push_str("  No tasks match the current filters.\n");
        return out;
    }

    for task in visible {
        let assignee = task.assignee.as_deref().unwrap_or("unassigned");
        let due = match task.due {
            Some(due) => format!("due {}", due.format("%Y-%m-%d %H:%M")),
            None => "no due date".to_string(),
        };
        out.push_str(&format!(
            "  [{}] {} ({}, priority {}, {})\n",
            task.effective_status(now),
            task.name,
            assignee,
            task.priority,
            due
        ));
    }
    out
}

// ─────────────────────────────────────────────────────────────────
// Process Board
// ─────────────────────────────────────────────────────────────────

/// Render the process board: instance counts, deployed definitions
/// grouped by key with their latest version, and the instance list with
/// running durations.
pub fn render_process_board(
    definitions: &[ProcessDefinition],
    instances: &[ProcessInstance],
    now: DateTime<Utc>,
) -> String {
    let counts = ProcessCounts::from_instances(instances);

    let mut out = String::new();
    out.push_str("Processes\n");
    out.push_str(&format!(
        "  Active: {}  Completed: {}  (total {})\n",
        counts.active, counts.completed, counts.total
    ));

    out.push_str("  Definitions:\n");
    let grouped = group_by_key(definitions);
    if grouped.is_empty() {
        out.push_str("    (none deployed)\n");
    }
    for (key, versions) in &grouped {
        if let Some(latest) = latest_version(versions) {
            out.push_str(&format!(
                "    {}: {} (v{}, {} version{})\n",
                key,
                latest.name,
                latest.version,
                versions.len(),
                if versions.len() == 1 { "" } else { "s" }
            ));
        }
    }

    out.push_str("  Instances:\n");
    if instances.is_empty() {
        out.push_str("    (none)\n");
    }
    for instance in instances {
        out.push_str(&format!(
            "    [{}] {} running {}\n",
            instance.status,
            instance.display_name(),
            format_duration(instance.duration(now))
        ));
    }
    out
}

// ─────────────────────────────────────────────────────────────────
// Context Board
// ─────────────────────────────────────────────────────────────────

/// Render the context configuration board: personas, prompts, tools, and
/// teams with their weak references resolved to name chips. Ids that no
/// longer resolve are simply omitted from the chip list.
pub fn render_context_board(
    personas: &EntityStore<Persona>,
    prompts: &EntityStore<Prompt>,
    tools: &EntityStore<Tool>,
    teams: &EntityStore<Team>,
) -> String {
    let mut out = String::new();
    out.push_str("Context\n");

    out.push_str("  Personas:\n");
    if personas.is_empty() {
        out.push_str("    (none)\n");
    }
    for persona in personas.list() {
        out.push_str(&format!(
            "    {} ({}) expertise: {}\n",
            persona.name,
            persona.role,
            join_csv(&persona.expertise)
        ));
        let tool_names = resolve_names(tools, &persona.tool_ids);
        if !tool_names.is_empty() {
            out.push_str(&format!("      tools: {}\n", join_csv(&tool_names)));
        }
    }

    out.push_str("  Prompts:\n");
    if prompts.is_empty() {
        out.push_str("    (none)\n");
    }
    for prompt in prompts.list() {
        let persona_ids = [prompt.persona_id.clone()];
        let persona_names = resolve_names(personas, &persona_ids);
        match persona_names.first() {
            Some(name) => out.push_str(&format!(
                "    [{}] {} (persona: {})\n",
                prompt.approval_state, prompt.name, name
            )),
            None => out.push_str(&format!("    [{}] {}\n", prompt.approval_state, prompt.name)),
        }
    }

    out.push_str("  Tools:\n");
    if tools.is_empty() {
        out.push_str("    (none)\n");
    }
    for tool in tools.list() {
        match &tool.api_spec {
            Some(spec) => out.push_str(&format!(
                "    {} ({}): {}\n",
                tool.name, spec, tool.description
            )),
            None => out.push_str(&format!("    {}: {}\n", tool.name, tool.description)),
        }
    }

    out.push_str("  Teams:\n");
    if teams.is_empty() {
        out.push_str("    (none)\n");
    }
    for team in teams.list() {
        let members = resolve_names(personas, &team.persona_ids);
        if members.is_empty() {
            out.push_str(&format!("    {} [{}]\n", team.name, team.decision_method));
        } else {
            out.push_str(&format!(
                "    {} [{}] members: {}\n",
                team.name,
                team.decision_method,
                join_csv(&members)
            ));
        }
    }
    out
}

// ─────────────────────────────────────────────────────────────────
// Impact Report
// ─────────────────────────────────────────────────────────────────

/// Render the impact analysis report: rolled-up metrics followed by the
/// flagged tasks, highest score first.
pub fn render_impact_report(metrics: &AnalysisMetrics, tasks: &[ImpactedTask]) -> String {
    let mut out = String::new();
    out.push_str("Impact Analysis\n");
    out.push_str(&format!(
        "  Threads analyzed: {}\n",
        metrics.total_threads_analyzed
    ));
    out.push_str(&format!(
        "  High: {}  Medium: {}  Low: {}\n",
        metrics.high_impact_tasks, metrics.medium_impact_tasks, metrics.low_impact_tasks
    ));
    out.push_str(&format!(
        "  Average similarity: {:.2}  Overall risk: {}\n",
        metrics.average_similarity_score, metrics.risk_level
    ));

    let mut sorted: Vec<&ImpactedTask> = tasks.iter().collect();
    sorted.sort_by(|a, b| {
        b.impact_score
            .partial_cmp(&a.impact_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    for task in sorted {
        out.push_str(&format!(
            "  [{}] {} in {} v{} (score {:.2})\n",
            task.level(),
            task.task_name,
            task.process_name,
            task.process_version,
            task.impact_score
        ));
        if !task.explanation.is_empty() {
            out.push_str(&format!("      {}\n", task.explanation));
        }
    }
    out
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────
