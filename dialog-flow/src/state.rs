use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{context::Context, error::Result};

/// Button labels offered to the user, laid out in rows.
///
/// The flattened label set of a state's keyboard is exactly the set of
/// inputs that state accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyboard(pub Vec<Vec<String>>);

impl Keyboard {
    pub fn new(rows: &[&[&str]]) -> Self {
        Self(
            rows.iter()
                .map(|row| row.iter().map(|label| label.to_string()).collect())
                .collect(),
        )
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().flatten().map(String::as_str)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels().any(|l| l == label)
    }
}

/// A message for the user together with the buttons for the next input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    pub keyboard: Option<Keyboard>,
}

impl Reply {
    pub fn new(text: impl Into<String>, keyboard: Keyboard) -> Self {
        Self {
            text: text.into(),
            keyboard: Some(keyboard),
        }
    }

    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
        }
    }
}

/// What the dialog should do after a state has handled one input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Next {
    /// Stay at the current state and wait for another input.
    Stay,
    /// Follow the outgoing edge, then wait for input at the target.
    Advance,
    /// Follow the outgoing edge and execute the target immediately.
    AdvanceNow,
    /// Jump to a specific state by id, then wait for input.
    GoTo(String),
    /// The dialog is finished.
    End,
}

/// Result of handling one user input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateResult {
    /// Reply to send to the user. When `None`, the engine falls back to the
    /// prompt of the state the session lands on.
    pub reply: Option<Reply>,
    pub next: Next,
    /// Short progress note, persisted on the session for observability.
    pub status_message: Option<String>,
}

impl StateResult {
    pub fn new(reply: Option<Reply>, next: Next) -> Self {
        Self {
            reply,
            next,
            status_message: None,
        }
    }

    pub fn with_status(reply: Option<Reply>, next: Next, status_message: impl Into<String>) -> Self {
        Self {
            reply,
            next,
            status_message: Some(status_message.into()),
        }
    }
}

/// One state of a dialog.
#[async_trait]
pub trait DialogState: Send + Sync {
    /// Unique id of this state within its dialog.
    fn id(&self) -> &str;

    /// The question (and buttons) presented when the dialog arrives here.
    fn prompt(&self) -> Reply;

    /// Handle the pending user input found in the context: validate it,
    /// record at most one field, and pick the next action.
    async fn handle(&self, context: Context) -> Result<StateResult>;
}
