//! In-memory entity stores
//!
//! Each screen of the console owns one `EntityStore` per record kind
//! (personas, prompts, tools, teams, tasks, process instances). The store
//! is the single authority for that kind: ordered, id-unique, mutated
//! synchronously from event handlers or the refresh task.

pub mod confirm;
pub mod editor;
pub mod forms;
pub mod view;

use uuid::Uuid;

/// A record that can live in an [`EntityStore`].
///
/// Records expose their fields as text by name so the generic filter and
/// the editor validation can work without per-entity plumbing. Multi-valued
/// fields join with ", "; absent optional fields return `None`.
pub trait Record {
    /// Stable opaque identifier, unique within a store. Empty until the
    /// store assigns one at creation time; never reassigned after that.
    fn id(&self) -> &str;

    /// Called exactly once by the store when inserting a new record.
    fn assign_id(&mut self, id: String);

    /// Text view of a named field, used by filters and validators.
    fn field_text(&self, field: &str) -> Option<String>;
}

/// Ordered, id-unique collection of records of one entity kind.
#[derive(Debug, Clone, Default)]
pub struct EntityStore<R: Record> {
    records: Vec<R>,
}

impl<R: Record> EntityStore<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Seed a store from fixture or fetched data. Records without ids get
    /// one assigned, in order.
    pub fn seeded(records: Vec<R>) -> Self {
        let mut store = Self::new();
        for record in records {
            store.upsert(record);
        }
        store
    }

    /// All records, in insertion order.
    pub fn list(&self) -> &[R] {
        &self.records
    }

    /// Look up a record by id. Missing ids are not an error.
    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Insert or replace by id, returning the record's id.
    ///
    /// A record with an empty or unknown id is appended (an id is assigned
    /// when empty). A record whose id already exists replaces the existing
    /// record in place, keeping its position and id.
    pub fn upsert(&mut self, mut record: R) -> String {
        if record.id().is_empty() {
            record.assign_id(Uuid::new_v4().to_string());
        }
        let id = record.id().to_string();

        match self.records.iter().position(|r| r.id() == id) {
            Some(pos) => self.records[pos] = record,
            None => self.records.push(record),
        }
        id
    }

    /// Delete by id. Returns false (no-op) when the id is absent.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.records.iter().position(|r| r.id() == id) {
            Some(pos) => {
                self.records.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Replace the whole collection, e.g. from a poll result.
    pub fn replace_all(&mut self, records: Vec<R>) {
        self.records = records;
    }
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Minimal record used across the store test modules.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Note {
        pub id: String,
        pub title: String,
        pub status: String,
    }

    impl Note {
        pub fn new(id: &str, title: &str, status: &str) -> Self {
            Self {
                id: id.to_string(),
                title: title.to_string(),
                status: status.to_string(),
            }
        }
    }

    impl Record for Note {
        fn id(&self) -> &str {
            &self.id
        }

        fn assign_id(&mut self, id: String) {
            self.id = id;
        }

        fn field_text(&self, field: &str) -> Option<String> {
            match field {
                "title" => Some(self.title.clone()),
                "status" => Some(self.status.clone()),
                _ => None,
            }
        }
    }

    #[test]
    fn test_upsert_assigns_id_on_create() {
        let mut store = EntityStore::new();
        let id = store.upsert(Note::new("", "first", "pending"));

        assert!(!id.is_empty());
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&id).unwrap().title, "first");
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut store = EntityStore::new();
        store.upsert(Note::new("a", "first", "pending"));
        store.upsert(Note::new("b", "second", "pending"));

        store.upsert(Note::new("a", "first edited", "completed"));

        // Position and id preserved, fields replaced
        assert_eq!(store.len(), 2);
        assert_eq!(store.list()[0].id, "a");
        assert_eq!(store.list()[0].title, "first edited");
        assert_eq!(store.list()[1].id, "b");
    }

    #[test]
    fn test_upsert_idempotent() {
        let mut store = EntityStore::new();
        let note = Note::new("a", "same", "pending");
        store.upsert(note.clone());
        store.upsert(note.clone());
        store.upsert(note);

        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].title, "same");
    }

    #[test]
    fn test_remove() {
        let mut store = EntityStore::new();
        store.upsert(Note::new("a", "first", "pending"));

        assert!(store.remove("a"));
        assert!(store.get("a").is_none());
        assert!(store.is_empty());

        // Removing an absent id is a no-op
        assert!(!store.remove("a"));
        assert!(!store.remove("never-existed"));
    }

    #[test]
    fn test_seeded_keeps_order() {
        let store = EntityStore::seeded(vec![
            Note::new("a", "first", "pending"),
            Note::new("b", "second", "completed"),
            Note::new("c", "third", "pending"),
        ]);

        let ids: Vec<&str> = store.list().iter().map(|n| n.id()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_replace_all() {
        let mut store = EntityStore::seeded(vec![Note::new("a", "first", "pending")]);
        store.replace_all(vec![
            Note::new("x", "poll result", "completed"),
            Note::new("y", "poll result 2", "pending"),
        ]);

        assert_eq!(store.len(), 2);
        assert!(store.get("a").is_none());
        assert!(store.get("x").is_some());
    }

    #[test]
    fn test_assigned_ids_are_unique() {
        let mut store = EntityStore::new();
        let id1 = store.upsert(Note::new("", "one", "pending"));
        let id2 = store.upsert(Note::new("", "two", "pending"));

        assert_ne!(id1, id2);
        assert_eq!(store.len(), 2);
    }
}
