//! In-memory record storage behind the REST handlers.

use chrono::{NaiveDateTime, Timelike, Utc};
use common::{Goal, Note, RecordId, Task};
use std::sync::atomic::{AtomicI64, Ordering};
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: RecordId },
}

/// A record kept in a [`Collection`].
pub trait StoredRecord: Clone + Send + Sync + 'static {
    /// Singular name used in errors and logs.
    const KIND: &'static str;

    fn id(&self) -> RecordId;
}

impl StoredRecord for Task {
    const KIND: &'static str = "task";

    fn id(&self) -> RecordId {
        self.id
    }
}

impl StoredRecord for Note {
    const KIND: &'static str = "note";

    fn id(&self) -> RecordId {
        self.id
    }
}

impl StoredRecord for Goal {
    const KIND: &'static str = "goal";

    fn id(&self) -> RecordId {
        self.id
    }
}

/// Records of one kind, newest first. Ids start at 1 and are never reused.
#[derive(Debug)]
pub struct Collection<T> {
    records: RwLock<Vec<T>>,
    next_id: AtomicI64,
}

impl<T: StoredRecord> Collection<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub async fn list(&self) -> Vec<T> {
        self.records.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Build a record with a fresh id and creation time and store it first.
    /// The id is taken under the write lock so list order follows id order.
    pub async fn insert(&self, build: impl FnOnce(RecordId, NaiveDateTime) -> T) -> RecordId {
        let mut records = self.records.write().await;
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        records.insert(0, build(id, now()));
        drop(records);
        tracing::debug!("Inserted {} {}", T::KIND, id);
        id
    }

    pub async fn update(&self, id: RecordId, apply: impl FnOnce(&mut T)) -> Result<T, StoreError> {
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or(StoreError::NotFound { kind: T::KIND, id })?;
        apply(record);
        Ok(record.clone())
    }

    pub async fn remove(&self, id: RecordId) -> Result<T, StoreError> {
        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|record| record.id() == id)
            .ok_or(StoreError::NotFound { kind: T::KIND, id })?;
        Ok(records.remove(index))
    }
}

impl<T: StoredRecord> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The three collections served under `/api`.
#[derive(Debug, Default)]
pub struct Store {
    pub tasks: Collection<Task>,
    pub notes: Collection<Note>,
    pub goals: Collection<Goal>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Creation time at second precision, in UTC.
fn now() -> NaiveDateTime {
    let now = Utc::now().naive_utc();
    now.with_nanosecond(0).unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{DEFAULT_CATEGORY, Priority};
    use std::sync::Arc;

    fn task(title: &str) -> impl FnOnce(RecordId, NaiveDateTime) -> Task + '_ {
        move |id, created_at| Task {
            id,
            title: title.to_string(),
            description: None,
            priority: Priority::Medium,
            category: DEFAULT_CATEGORY.to_string(),
            completed: false,
            created_at,
        }
    }

    #[tokio::test]
    async fn newest_records_come_first() {
        let tasks = Collection::<Task>::new();
        let first = tasks.insert(task("first")).await;
        let second = tasks.insert(task("second")).await;

        let ids: Vec<RecordId> = tasks.list().await.iter().map(|task| task.id).collect();
        assert_eq!(ids, vec![second, first]);
        assert_eq!(first, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_inserts_keep_newest_first_order() {
        let tasks = Arc::new(Collection::<Task>::new());
        let handles: Vec<_> = (0..64)
            .map(|n| {
                let tasks = Arc::clone(&tasks);
                tokio::spawn(async move {
                    let title = format!("task {n}");
                    tasks.insert(task(&title)).await
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        let ids: Vec<RecordId> = tasks.list().await.iter().map(|task| task.id).collect();
        let expected: Vec<RecordId> = (1..=64).rev().collect();
        assert_eq!(ids, expected);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_removal() {
        let tasks = Collection::<Task>::new();
        let id = tasks.insert(task("gone")).await;
        tasks.remove(id).await.unwrap();
        let next = tasks.insert(task("new")).await;
        assert!(next > id);
        assert_eq!(tasks.len().await, 1);
    }

    #[tokio::test]
    async fn unknown_ids_are_reported() {
        let tasks = Collection::<Task>::new();
        assert_eq!(
            tasks.update(3, |task| task.completed = true).await,
            Err(StoreError::NotFound { kind: "task", id: 3 })
        );
        assert_eq!(
            tasks.remove(3).await.unwrap_err().to_string(),
            "task 3 not found"
        );
    }
}
