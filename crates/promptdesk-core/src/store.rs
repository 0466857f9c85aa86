//! In-memory record store
//!
//! [`RecordStore`] is the authoritative collection for one entity type and the
//! only mutation surface for it. Identifiers are assigned here: a new id is one
//! greater than the highest id the store has ever held, so ids are never reused
//! within a session, even after the newest record is deleted.
//!
//! [`RecordStorage`] is the seam a persistence backend would implement. The
//! in-memory store implements it so callers can commit drafts without caring
//! which backend sits behind it.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::records::{Entity, RecordId};

/// Ordered in-memory collection of records of one entity type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordStore<R> {
    records: Vec<R>,
    /// Highest id ever issued or seeded
    high_water: RecordId,
}

impl<R> Default for RecordStore<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            high_water: 0,
        }
    }
}

impl<R: Entity> RecordStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `records`, keeping their ids.
    pub fn seeded(records: Vec<R>) -> Self {
        let high_water = records.iter().map(Entity::id).max().unwrap_or(0);
        Self {
            records,
            high_water,
        }
    }

    /// Current records in insertion order
    pub fn list(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    /// The id the next `add` will assign
    pub fn next_id(&self) -> RecordId {
        let max_existing = self.records.iter().map(Entity::id).max().unwrap_or(0);
        max_existing.max(self.high_water) + 1
    }

    /// Append a record built from `draft` with a freshly assigned id.
    pub fn add(&mut self, draft: R::Draft) -> R {
        let id = self.next_id();
        let record = R::from_draft(id, draft);
        self.records.push(record.clone());
        self.high_water = id;
        info!("created {} id={}", R::KIND, id);
        record
    }

    /// Replace the record with `id` in place, keeping its id and position.
    ///
    /// Returns false (and changes nothing) when no such record exists.
    pub fn update(&mut self, id: RecordId, draft: R::Draft) -> bool {
        match self.records.iter_mut().find(|r| r.id() == id) {
            Some(slot) => {
                *slot = R::from_draft(id, draft);
                info!("updated {} id={}", R::KIND, id);
                true
            }
            None => {
                debug!("update ignored: no {} with id={}", R::KIND, id);
                false
            }
        }
    }

    /// Remove the record with `id`, returning it. No-op when absent.
    pub fn remove(&mut self, id: RecordId) -> Option<R> {
        match self.position(id) {
            Some(index) => {
                let removed = self.records.remove(index);
                info!("deleted {} id={}", R::KIND, id);
                Some(removed)
            }
            None => {
                debug!("remove ignored: no {} with id={}", R::KIND, id);
                None
            }
        }
    }
}

/// Storage backend for one entity type.
///
/// Drafts passed to `create` and `replace` are validated again here, so a
/// backend never holds a record with a blank required field.
pub trait RecordStorage<R: Entity> {
    fn list_all(&self) -> Vec<R>;

    fn create(&mut self, draft: R::Draft) -> Result<R>;

    fn replace(&mut self, id: RecordId, draft: R::Draft) -> Result<R>;

    fn delete(&mut self, id: RecordId) -> Result<()>;
}

fn ensure_valid<R: Entity>(draft: &R::Draft) -> Result<()> {
    let errors = R::validate_draft(draft);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(Error::validation(R::KIND, errors.labels()))
    }
}

impl<R: Entity> RecordStorage<R> for RecordStore<R> {
    fn list_all(&self) -> Vec<R> {
        self.records.clone()
    }

    fn create(&mut self, draft: R::Draft) -> Result<R> {
        ensure_valid::<R>(&draft)?;
        Ok(self.add(draft))
    }

    fn replace(&mut self, id: RecordId, draft: R::Draft) -> Result<R> {
        ensure_valid::<R>(&draft)?;
        if !self.update(id, draft) {
            return Err(Error::not_found(R::KIND, id));
        }
        self.get(id)
            .cloned()
            .ok_or_else(|| Error::not_found(R::KIND, id))
    }

    fn delete(&mut self, id: RecordId) -> Result<()> {
        self.remove(id)
            .map(|_| ())
            .ok_or_else(|| Error::not_found(R::KIND, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{Parameter, PromptDraft, PromptRecord, ToolDraft, ToolRecord};

    fn prompt_draft(industry: &str, scenario: &str) -> PromptDraft {
        PromptDraft {
            industry: industry.to_string(),
            scenario: scenario.to_string(),
            bg_klg_prompt: format!("{industry}/{scenario}"),
        }
    }

    fn tool_draft(name: &str) -> ToolDraft {
        ToolDraft {
            tool_name: name.to_string(),
            tool_type: "function".to_string(),
            tool_desc: "desc".to_string(),
            industry_affiliation: "汽车行业".to_string(),
            application_scenario: "市场分析".to_string(),
            tool_parameters: vec![Parameter::new("brand", "string", "品牌")],
        }
    }

    #[test]
    fn test_empty_store_assigns_id_one() {
        let mut store: RecordStore<PromptRecord> = RecordStore::new();
        let record = store.add(prompt_draft("金融行业", "风险评估"));
        assert_eq!(record.id, 1);
    }

    #[test]
    fn test_ids_unique_across_adds() {
        let mut store = RecordStore::seeded(vec![PromptRecord::from_draft(
            5,
            prompt_draft("汽车行业", "质量把控"),
        )]);
        for i in 0..10 {
            store.add(prompt_draft("互联网", &format!("s{i}")));
        }

        let mut ids: Vec<_> = store.list().iter().map(|r| r.id).collect();
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), before);
        assert_eq!(store.list()[1].id, 6);
    }

    #[test]
    fn test_add_then_list_keeps_existing_records() {
        let mut store: RecordStore<ToolRecord> = RecordStore::new();
        let first = store.add(tool_draft("a"));
        let second = store.add(tool_draft("b"));

        assert_eq!(store.list(), &[first.clone(), second.clone()]);
        assert_eq!(store.list().iter().filter(|r| **r == second).count(), 1);
    }

    #[test]
    fn test_update_preserves_id_and_position() {
        let mut store: RecordStore<ToolRecord> = RecordStore::new();
        store.add(tool_draft("a"));
        let target = store.add(tool_draft("b"));
        store.add(tool_draft("c"));

        let replacement = tool_draft("b2");
        assert!(store.update(target.id, replacement.clone()));

        let updated = &store.list()[1];
        assert_eq!(updated.id, target.id);
        assert_eq!(updated.to_draft(), replacement);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let mut store: RecordStore<ToolRecord> = RecordStore::new();
        store.add(tool_draft("a"));
        let snapshot = store.clone();

        assert!(!store.update(99, tool_draft("zzz")));
        assert_eq!(store, snapshot);
    }

    #[test]
    fn test_remove_deletes_exactly_one() {
        let mut store: RecordStore<ToolRecord> = RecordStore::new();
        let a = store.add(tool_draft("a"));
        let b = store.add(tool_draft("b"));

        let removed = store.remove(a.id);

        assert_eq!(removed, Some(a.clone()));
        assert_eq!(store.len(), 1);
        assert!(store.get(a.id).is_none());
        assert_eq!(store.list()[0], b);
        assert!(store.remove(a.id).is_none());
    }

    #[test]
    fn test_ids_not_reused_after_deleting_newest() {
        let mut store: RecordStore<ToolRecord> = RecordStore::new();
        store.add(tool_draft("a"));
        let b = store.add(tool_draft("b"));
        store.remove(b.id);

        let c = store.add(tool_draft("c"));
        assert_eq!(c.id, 3);
    }

    #[test]
    fn test_storage_create_rejects_invalid_draft() {
        let mut store: RecordStore<ToolRecord> = RecordStore::new();
        let mut draft = tool_draft("a");
        draft.tool_desc = "  ".to_string();

        let err = store.create(draft).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
        assert!(store.is_empty());
    }

    #[test]
    fn test_storage_replace_and_delete_report_not_found() {
        let mut store: RecordStore<PromptRecord> = RecordStore::new();

        let err = store.replace(3, prompt_draft("农业", "x")).unwrap_err();
        assert!(matches!(err, Error::NotFound { id: 3, .. }));

        let err = store.delete(3).unwrap_err();
        assert!(matches!(err, Error::NotFound { id: 3, .. }));
    }

    #[test]
    fn test_storage_replace_returns_new_record() {
        let mut store: RecordStore<PromptRecord> = RecordStore::new();
        let created = store.create(prompt_draft("农业", "a")).unwrap();

        let replaced = store.replace(created.id, prompt_draft("农业", "b")).unwrap();
        assert_eq!(replaced.id, created.id);
        assert_eq!(replaced.scenario, "b");
        assert_eq!(store.list_all(), vec![replaced]);
    }
}
