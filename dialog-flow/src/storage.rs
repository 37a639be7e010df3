use async_trait::async_trait;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{Context, dialog::Dialog, error::Result};

/// One user's dialog session: the active state plus the accumulator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub dialog_id: String,
    pub current_state_id: String,
    pub status_message: Option<String>,
    #[serde(skip)]
    pub context: Context,
}

impl Session {
    pub fn new_from_state(id: impl Into<String>, state_id: &str) -> Self {
        Self {
            id: id.into(),
            dialog_id: "default".to_string(),
            current_state_id: state_id.to_string(),
            status_message: None,
            context: Context::new(),
        }
    }
}

/// Trait for storing and retrieving dialogs.
#[async_trait]
pub trait DialogStorage: Send + Sync {
    async fn save(&self, id: String, dialog: Arc<Dialog>) -> Result<()>;
    async fn get(&self, id: &str) -> Result<Option<Arc<Dialog>>>;
    async fn delete(&self, id: &str) -> Result<()>;
}

/// Trait for storing and retrieving sessions.
#[async_trait]
pub trait SessionStorage: Send + Sync {
    async fn save(&self, session: Session) -> Result<()>;
    async fn get(&self, id: &str) -> Result<Option<Session>>;
    async fn delete(&self, id: &str) -> Result<()>;
}

/// In-memory implementation of DialogStorage.
pub struct InMemoryDialogStorage {
    dialogs: Arc<DashMap<String, Arc<Dialog>>>,
}

impl InMemoryDialogStorage {
    pub fn new() -> Self {
        Self {
            dialogs: Arc::new(DashMap::new()),
        }
    }
}

impl Default for InMemoryDialogStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DialogStorage for InMemoryDialogStorage {
    async fn save(&self, id: String, dialog: Arc<Dialog>) -> Result<()> {
        self.dialogs.insert(id, dialog);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Arc<Dialog>>> {
        Ok(self.dialogs.get(id).map(|entry| entry.clone()))
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.dialogs.remove(id);
        Ok(())
    }
}

/// In-memory implementation of SessionStorage. Sessions are independent per
/// id; the map is the only shared structure, so no extra locking is needed.
pub struct InMemorySessionStorage {
    sessions: Arc<DashMap<String, Session>>,
}

impl InMemorySessionStorage {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
        }
    }
}

impl Default for InMemorySessionStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStorage for InMemorySessionStorage {
    async fn save(&self, session: Session) -> Result<()> {
        self.sessions.insert(session.id.clone(), session);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Session>> {
        Ok(self.sessions.get(id).map(|entry| entry.clone()))
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.sessions.remove(id);
        Ok(())
    }
}
