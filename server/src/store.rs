//! In-memory todo collection.
//!
//! # Design
//! `TodoStore` owns the only copy of the todo list for the lifetime of the
//! process. It is built once at startup and shared with request handlers
//! through axum state, so nothing else ever holds a live reference to a
//! record: every operation hands back clones.
//!
//! The list is a `Vec` kept in insertion order. Lookups are linear scans,
//! which is fine for a personal todo list. A single `RwLock` guards the
//! whole collection so concurrent handlers cannot interleave mutations.
//!
//! The store checks identity and ordering only. Content validation (empty
//! titles and the like) happens in the API layer before a call gets here.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Opaque todo identifier, rendered as a hyphenated lowercase UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for TodoId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl From<Uuid> for TodoId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

/// A single todo record.
///
/// Only `completed` changes after creation; see [`TodoPatch`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
    #[serde(with = "iso8601_millis")]
    pub created_at: DateTime<Utc>,
}

/// Fields an update may overwrite. Anything absent is left alone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub completed: Option<bool>,
}

impl TodoPatch {
    fn apply(self, todo: &mut Todo) {
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
    }
}

#[derive(Debug, Default)]
pub struct TodoStore {
    todos: RwLock<Vec<Todo>>,
}

impl TodoStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// All todos in insertion order.
    pub async fn list(&self) -> Vec<Todo> {
        self.todos.read().await.clone()
    }

    /// Look up a single todo by id.
    pub async fn get(&self, id: TodoId) -> Option<Todo> {
        let todos = self.todos.read().await;
        todos.iter().find(|t| t.id == id).cloned()
    }

    /// Append a new, not-yet-completed todo and return it.
    ///
    /// The title is stored as given. Callers are expected to have rejected
    /// empty titles already.
    pub async fn create(&self, title: impl Into<String>) -> Todo {
        let todo = Todo {
            id: TodoId::generate(),
            title: title.into(),
            completed: false,
            created_at: Utc::now().trunc_subsecs(3),
        };
        self.todos.write().await.push(todo.clone());
        tracing::debug!(id = %todo.id, "todo created");
        todo
    }

    /// Apply `patch` to the todo with `id`. Returns `None` when no such todo
    /// exists, in which case the collection is untouched.
    pub async fn update(&self, id: TodoId, patch: TodoPatch) -> Option<Todo> {
        let mut todos = self.todos.write().await;
        let todo = todos.iter_mut().find(|t| t.id == id)?;
        patch.apply(todo);
        tracing::debug!(id = %id, completed = todo.completed, "todo updated");
        Some(todo.clone())
    }

    /// Remove the todo with `id`, keeping the remaining order. Returns
    /// `false` when no such todo exists.
    pub async fn delete(&self, id: TodoId) -> bool {
        let mut todos = self.todos.write().await;
        match todos.iter().position(|t| t.id == id) {
            Some(index) => {
                todos.remove(index);
                tracing::debug!(id = %id, "todo deleted");
                true
            }
            None => false,
        }
    }

    pub async fn len(&self) -> usize {
        self.todos.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.todos.read().await.is_empty()
    }
}

/// `createdAt` wire format: RFC 3339 in UTC with millisecond precision,
/// e.g. `2026-10-18T09:30:00.123Z`.
mod iso8601_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        DateTime::<Utc>::deserialize(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> TodoPatch {
        TodoPatch {
            completed: Some(true),
        }
    }

    #[tokio::test]
    async fn new_store_is_empty() {
        let store = TodoStore::new();
        assert!(store.is_empty().await);
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn create_sets_defaults() {
        let store = TodoStore::new();
        let before = Utc::now().trunc_subsecs(3);
        let todo = store.create("Buy milk").await;

        assert_eq!(todo.title, "Buy milk");
        assert!(!todo.completed);
        assert!(todo.created_at >= before);
        assert_eq!(store.list().await, vec![todo]);
    }

    #[tokio::test]
    async fn list_preserves_insertion_order_with_unique_ids() {
        let store = TodoStore::new();
        let mut created = Vec::new();
        for i in 0..20 {
            created.push(store.create(format!("todo {i}")).await);
        }

        let listed = store.list().await;
        assert_eq!(listed, created);

        let mut ids: Vec<_> = listed.iter().map(|t| t.id).collect();
        ids.sort_by_key(|id| *id.as_uuid());
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }

    #[tokio::test]
    async fn create_does_not_validate_title() {
        let store = TodoStore::new();
        let todo = store.create("").await;
        assert_eq!(todo.title, "");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn get_finds_existing_and_misses_unknown() {
        let store = TodoStore::new();
        let todo = store.create("Walk dog").await;

        assert_eq!(store.get(todo.id).await, Some(todo));
        assert_eq!(store.get(TodoId::generate()).await, None);
    }

    #[tokio::test]
    async fn update_changes_only_completed() {
        let store = TodoStore::new();
        let first = store.create("first").await;
        let second = store.create("second").await;

        let updated = store.update(second.id, complete()).await.unwrap();
        assert!(updated.completed);
        assert_eq!(updated.id, second.id);
        assert_eq!(updated.title, second.title);
        assert_eq!(updated.created_at, second.created_at);

        let listed = store.list().await;
        assert_eq!(listed, vec![first, updated]);
    }

    #[tokio::test]
    async fn empty_patch_leaves_todo_unchanged() {
        let store = TodoStore::new();
        let todo = store.create("idle").await;

        let same = store.update(todo.id, TodoPatch::default()).await.unwrap();
        assert_eq!(same, todo);
    }

    #[tokio::test]
    async fn update_unknown_id_leaves_collection_unchanged() {
        let store = TodoStore::new();
        store.create("a").await;
        store.create("b").await;
        let before = store.list().await;

        assert!(store.update(TodoId::generate(), complete()).await.is_none());
        assert_eq!(store.list().await, before);
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_and_keeps_order() {
        let store = TodoStore::new();
        let a = store.create("a").await;
        let b = store.create("b").await;
        let c = store.create("c").await;

        assert!(store.delete(b.id).await);
        assert_eq!(store.list().await, vec![a, c]);
        assert!(store.get(b.id).await.is_none());
    }

    #[tokio::test]
    async fn delete_unknown_id_returns_false() {
        let store = TodoStore::new();
        let a = store.create("a").await;

        assert!(!store.delete(TodoId::generate()).await);
        assert_eq!(store.list().await, vec![a.clone()]);

        assert!(store.delete(a.id).await);
        assert!(!store.delete(a.id).await);
        assert!(store.is_empty().await);
    }

    #[test]
    fn todo_serializes_with_camel_case_and_millis() {
        let todo = Todo {
            id: TodoId::from(Uuid::nil()),
            title: "Test".to_string(),
            completed: false,
            created_at: DateTime::parse_from_rfc3339("2026-10-18T09:30:00.123456Z")
                .unwrap()
                .with_timezone(&Utc),
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["title"], "Test");
        assert_eq!(json["completed"], false);
        assert_eq!(json["createdAt"], "2026-10-18T09:30:00.123Z");
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn todo_id_parses_and_displays() {
        let id: TodoId = "6f9619ff-8b86-d011-b42d-00cf4fc964ff".parse().unwrap();
        assert_eq!(id.to_string(), "6f9619ff-8b86-d011-b42d-00cf4fc964ff");
        assert!("not-a-uuid".parse::<TodoId>().is_err());
    }
}
