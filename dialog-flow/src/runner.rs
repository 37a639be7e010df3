//! DialogRunner – convenience wrapper that loads a session, executes exactly
//! one dialog step, and persists the updated session back to storage.
//!
//! Interactive services usually want to run one step per inbound message,
//! send the reply back, and have the session saved for the next roundtrip;
//! `DialogRunner` makes that a one-liner. Use `Dialog::execute_session`
//! directly when you need custom persistence or want to inspect the session
//! between steps.

use std::sync::Arc;

use crate::{
    dialog::{Dialog, ExecutionResult},
    error::{FlowError, Result},
    storage::SessionStorage,
};

/// High-level helper that orchestrates the common load → execute → save
/// pattern.
#[derive(Clone)]
pub struct DialogRunner {
    dialog: Arc<Dialog>,
    storage: Arc<dyn SessionStorage>,
}

impl DialogRunner {
    pub fn new(dialog: Arc<Dialog>, storage: Arc<dyn SessionStorage>) -> Self {
        Self { dialog, storage }
    }

    /// Execute exactly one step for the given `session_id` and persist the
    /// updated session.
    pub async fn run(&self, session_id: &str) -> Result<ExecutionResult> {
        let mut session = self
            .storage
            .get(session_id)
            .await?
            .ok_or_else(|| FlowError::SessionNotFound(session_id.to_string()))?;

        let result = self.dialog.execute_session(&mut session).await?;

        // Persist the new state so the next call starts where we left off.
        self.storage.save(session).await?;

        Ok(result)
    }
}
