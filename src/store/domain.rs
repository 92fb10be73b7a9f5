//! The domain store: owns the Sprint and DailyLog collections.
//!
//! Both collections are loaded once at construction and persisted in full on
//! every mutation, through the injected [`StorageBackend`]. Reads between
//! mutations are plain slice accessors; there is no caching layer to drift.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::backend::StorageBackend;
use super::ids::{IdSource, SequentialIds};
use crate::errors::{AppError, AppResult};
use crate::models::daily_log::{DailyLog, NewDailyLog};
use crate::models::sprint::{NewSprint, Sprint};
use crate::ui::messages::warning;

pub const SPRINTS_KEY: &str = "sprints";
pub const DAILY_LOGS_KEY: &str = "dailyLogs";

pub struct DomainStore<B: StorageBackend> {
    backend: B,
    ids: Box<dyn IdSource>,
    sprints: Vec<Sprint>,
    daily_logs: Vec<DailyLog>,
}

impl<B: StorageBackend> DomainStore<B> {
    /// Load both collections from the backend, seeding the default id
    /// generator above any ids already present.
    pub fn open(backend: B) -> AppResult<Self> {
        let sprints: Vec<Sprint> = load_slot(&backend, SPRINTS_KEY)?;
        let daily_logs: Vec<DailyLog> = load_slot(&backend, DAILY_LOGS_KEY)?;

        let ids = SequentialIds::seeded_from(
            sprints
                .iter()
                .map(|s| s.id.as_str())
                .chain(daily_logs.iter().map(|l| l.id.as_str())),
        );

        Ok(Self {
            backend,
            ids: Box::new(ids),
            sprints,
            daily_logs,
        })
    }

    /// Same as [`open`](Self::open) but with an explicit id strategy.
    pub fn open_with_ids(backend: B, ids: Box<dyn IdSource>) -> AppResult<Self> {
        let mut store = Self::open(backend)?;
        store.ids = ids;
        Ok(store)
    }

    pub fn sprints(&self) -> &[Sprint] {
        &self.sprints
    }

    pub fn daily_logs(&self) -> &[DailyLog] {
        &self.daily_logs
    }

    pub fn sprint_by_id(&self, id: &str) -> Option<&Sprint> {
        self.sprints.iter().find(|s| s.id == id)
    }

    pub fn log_by_id(&self, id: &str) -> Option<&DailyLog> {
        self.daily_logs.iter().find(|l| l.id == id)
    }

    /// First sprint (insertion order) whose date range contains `on`.
    pub fn current_sprint(&self, on: NaiveDate) -> Option<&Sprint> {
        self.sprints.iter().find(|s| s.contains(on))
    }

    /// Append a sprint and persist the whole collection.
    ///
    /// The store is deliberately permissive: date ordering and name checks
    /// happen at the CLI boundary, so anything that reaches this point is
    /// appended as-is.
    pub fn add_sprint(&mut self, data: NewSprint) -> AppResult<Sprint> {
        let sprint = Sprint {
            id: self.ids.next_id(),
            name: data.name,
            goal: data.goal,
            start_date: data.start_date,
            end_date: data.end_date,
        };

        self.sprints.push(sprint.clone());
        persist_slot(&mut self.backend, SPRINTS_KEY, &self.sprints)?;
        Ok(sprint)
    }

    /// Append a daily log and persist the whole collection.
    ///
    /// `sprint_id` is not checked against the sprint collection and the date
    /// is not checked for uniqueness; both behaviors are tolerated
    /// downstream (dangling references render as "unknown sprint", duplicate
    /// dates resolve first-inserted-wins in the analytics).
    pub fn add_daily_log(&mut self, data: NewDailyLog) -> AppResult<DailyLog> {
        let log = DailyLog {
            id: self.ids.next_id(),
            sprint_id: data.sprint_id,
            date: data.date,
            tasks_completed: data.tasks_completed,
            blockers: data.blockers,
            reflections: data.reflections,
        };

        self.daily_logs.push(log.clone());
        persist_slot(&mut self.backend, DAILY_LOGS_KEY, &self.daily_logs)?;
        Ok(log)
    }
}

/// Read a collection slot. Absent or unparsable slots yield an empty
/// collection; a parse failure is reported but never fatal.
fn load_slot<B: StorageBackend, T: DeserializeOwned>(backend: &B, key: &str) -> AppResult<Vec<T>> {
    match backend.get(key)? {
        None => Ok(Vec::new()),
        Some(value) => match serde_json::from_value(value) {
            Ok(items) => Ok(items),
            Err(e) => {
                warning(format!(
                    "Stored collection '{key}' is unreadable ({e}); starting empty"
                ));
                Ok(Vec::new())
            }
        },
    }
}

fn persist_slot<B: StorageBackend, T: Serialize>(
    backend: &mut B,
    key: &str,
    items: &[T],
) -> AppResult<()> {
    let value = serde_json::to_value(items).map_err(|e| AppError::Storage(e.to_string()))?;
    backend.put(key, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::backend::MemoryStorage;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_sprint(name: &str, start: NaiveDate, end: NaiveDate) -> NewSprint {
        NewSprint {
            name: name.to_string(),
            goal: "ship it".to_string(),
            start_date: start,
            end_date: end,
        }
    }

    #[test]
    fn added_sprint_is_immediately_visible() {
        let mut store = DomainStore::open(MemoryStorage::new()).unwrap();
        let created = store
            .add_sprint(new_sprint("Sprint A", ymd(2024, 1, 1), ymd(2024, 1, 11)))
            .unwrap();

        assert_eq!(store.sprints().len(), 1);
        assert_eq!(store.sprints()[0], created);
        assert_eq!(store.sprint_by_id(&created.id), Some(&created));
    }

    #[test]
    fn persisted_snapshot_matches_memory() {
        let mut store = DomainStore::open(MemoryStorage::new()).unwrap();
        store
            .add_sprint(new_sprint("Sprint A", ymd(2024, 1, 1), ymd(2024, 1, 11)))
            .unwrap();
        store
            .add_sprint(new_sprint("Sprint B", ymd(2024, 2, 1), ymd(2024, 2, 14)))
            .unwrap();

        let snapshot = store.backend.get(SPRINTS_KEY).unwrap().unwrap();
        let reloaded: Vec<Sprint> = serde_json::from_value(snapshot).unwrap();
        assert_eq!(reloaded, store.sprints());
    }

    #[test]
    fn collections_survive_reopen() {
        let mut backend = MemoryStorage::new();
        {
            let mut store = DomainStore::open(&mut backend).unwrap();
            for i in 0..5 {
                store
                    .add_sprint(new_sprint(
                        &format!("Sprint {i}"),
                        ymd(2024, 1, 1),
                        ymd(2024, 1, 11),
                    ))
                    .unwrap();
            }
        }

        let store = DomainStore::open(&mut backend).unwrap();
        assert_eq!(store.sprints().len(), 5);
        assert_eq!(store.sprints()[3].name, "Sprint 3");
        assert_eq!(store.sprints()[3].goal, "ship it");
        assert_eq!(store.sprints()[3].start_date, ymd(2024, 1, 1));
    }

    #[test]
    fn reopen_never_reuses_ids() {
        let mut backend = MemoryStorage::new();
        let first_id = {
            let mut store = DomainStore::open(&mut backend).unwrap();
            store
                .add_sprint(new_sprint("Sprint A", ymd(2024, 1, 1), ymd(2024, 1, 11)))
                .unwrap()
                .id
        };

        let mut store = DomainStore::open(&mut backend).unwrap();
        let second_id = store
            .add_sprint(new_sprint("Sprint B", ymd(2024, 2, 1), ymd(2024, 2, 14)))
            .unwrap()
            .id;
        assert_ne!(first_id, second_id);
    }

    #[test]
    fn current_sprint_first_match_wins() {
        let mut store = DomainStore::open(MemoryStorage::new()).unwrap();
        store
            .add_sprint(new_sprint("First", ymd(2024, 1, 1), ymd(2024, 1, 20)))
            .unwrap();
        store
            .add_sprint(new_sprint("Second", ymd(2024, 1, 5), ymd(2024, 1, 25)))
            .unwrap();

        let current = store.current_sprint(ymd(2024, 1, 10)).unwrap();
        assert_eq!(current.name, "First");
        assert!(store.current_sprint(ymd(2025, 6, 1)).is_none());
    }

    #[test]
    fn dangling_sprint_reference_is_tolerated() {
        let mut store = DomainStore::open(MemoryStorage::new()).unwrap();
        let log = store
            .add_daily_log(NewDailyLog {
                sprint_id: "999".to_string(),
                date: ymd(2024, 3, 1),
                tasks_completed: vec!["write tests".to_string()],
                blockers: vec![],
                reflections: "fine".to_string(),
            })
            .unwrap();

        assert_eq!(store.daily_logs().len(), 1);
        assert!(store.sprint_by_id(&log.sprint_id).is_none());
    }

    #[test]
    fn injected_id_strategy_is_used() {
        struct PrefixedIds(u64);
        impl crate::store::ids::IdSource for PrefixedIds {
            fn next_id(&mut self) -> String {
                self.0 += 1;
                format!("sp-{}", self.0)
            }
        }

        let mut store =
            DomainStore::open_with_ids(MemoryStorage::new(), Box::new(PrefixedIds(0))).unwrap();
        let sprint = store
            .add_sprint(new_sprint("Sprint A", ymd(2024, 1, 1), ymd(2024, 1, 11)))
            .unwrap();
        assert_eq!(sprint.id, "sp-1");
    }

    #[test]
    fn corrupted_collection_starts_empty() {
        let mut backend = MemoryStorage::new();
        backend
            .put(SPRINTS_KEY, serde_json::json!({"not": "an array"}))
            .unwrap();

        let store = DomainStore::open(&mut backend).unwrap();
        assert!(store.sprints().is_empty());
    }
}
