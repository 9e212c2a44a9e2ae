//! Entity models for the console screens
//!
//! One module per record kind. Each defines the serde model, its closed
//! enumerations with declared defaults, the [`Record`](crate::store::Record)
//! implementation, and (for the kinds with modal editors) the field specs
//! driving the generic editor.

pub mod persona;
pub mod process;
pub mod prompt;
pub mod task;
pub mod team;
pub mod thread;
pub mod tool;

pub use persona::Persona;
pub use process::{ProcessCounts, ProcessDefinition, ProcessInstance};
pub use prompt::{ApprovalState, Prompt};
pub use task::{TaskCounts, TaskStatus, UserTask};
pub use team::{DecisionMethod, Team};
pub use thread::{AnalysisMetrics, ImpactLevel, ImpactedTask, ProcessThread};
pub use tool::Tool;

use crate::store::{EntityStore, Record};

/// Resolve a list of weak id references to display names.
///
/// Ids that no longer resolve are omitted, never an error; the UI renders
/// the remaining chips only.
pub fn resolve_names<R: Record>(store: &EntityStore<R>, ids: &[String]) -> Vec<String> {
    ids.iter()
        .filter_map(|id| store.get(id))
        .filter_map(|record| record.field_text("name"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_names_omits_missing_refs() {
        let store = EntityStore::seeded(vec![
            Tool::new("1", "Sicilab API", "Scientific simulation API."),
            Tool::new("2", "Calculator", "Basic math operations."),
        ]);

        let ids = vec!["1".to_string(), "gone".to_string(), "2".to_string()];
        let names = resolve_names(&store, &ids);

        assert_eq!(names, vec!["Sicilab API", "Calculator"]);
    }

    #[test]
    fn test_resolve_names_empty_store() {
        let store: EntityStore<Tool> = EntityStore::new();
        assert!(resolve_names(&store, &["1".to_string()]).is_empty());
    }
}
