use std::sync::{Arc, Mutex};

use dashmap::DashMap;
use tracing::debug;

use crate::{
    context::Context,
    error::{FlowError, Result},
    state::{DialogState, Next, Reply, StateResult},
    storage::Session,
};

/// Predicate evaluated against the session context to pick a branch.
pub type EdgeCondition = Arc<dyn Fn(&Context) -> bool + Send + Sync>;

#[derive(Clone)]
enum Edge {
    Direct {
        from: String,
        to: String,
    },
    Conditional {
        from: String,
        condition: EdgeCondition,
        yes_to: String,
        else_to: String,
    },
}

/// A dialog: a set of states plus the edges between them.
pub struct Dialog {
    pub id: String,
    states: DashMap<String, Arc<dyn DialogState>>,
    edges: Mutex<Vec<Edge>>,
    start_state_id: Mutex<Option<String>>,
}

impl Dialog {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            states: DashMap::new(),
            edges: Mutex::new(Vec::new()),
            start_state_id: Mutex::new(None),
        }
    }

    /// Add a state to the dialog. The first state added becomes the start
    /// state unless `set_start_state` overrides it.
    pub fn add_state(&self, state: Arc<dyn DialogState>) -> &Self {
        let state_id = state.id().to_string();
        let is_first = self.states.is_empty();
        self.states.insert(state_id.clone(), state);

        if is_first {
            *self.start_state_id.lock().unwrap() = Some(state_id);
        }

        self
    }

    pub fn set_start_state(&self, state_id: impl Into<String>) -> &Self {
        let state_id = state_id.into();
        if self.states.contains_key(&state_id) {
            *self.start_state_id.lock().unwrap() = Some(state_id);
        }
        self
    }

    pub fn add_edge(&self, from: impl Into<String>, to: impl Into<String>) -> &Self {
        self.edges.lock().unwrap().push(Edge::Direct {
            from: from.into(),
            to: to.into(),
        });
        self
    }

    /// Add a branching edge: when the dialog advances past `from`, the
    /// predicate decides between `yes_to` and `else_to`.
    pub fn add_conditional_edge<F>(
        &self,
        from: impl Into<String>,
        condition: F,
        yes_to: impl Into<String>,
        else_to: impl Into<String>,
    ) -> &Self
    where
        F: Fn(&Context) -> bool + Send + Sync + 'static,
    {
        self.edges.lock().unwrap().push(Edge::Conditional {
            from: from.into(),
            condition: Arc::new(condition),
            yes_to: yes_to.into(),
            else_to: else_to.into(),
        });
        self
    }

    /// Execute exactly one step of the dialog for this session.
    ///
    /// Runs the current state's handler on the session context, moves the
    /// session according to the returned [`Next`], and reports whether the
    /// dialog is waiting for input or has completed. Unless the handler
    /// supplied its own reply, the reply is the prompt of the state the
    /// session landed on.
    pub async fn execute_session(&self, session: &mut Session) -> Result<ExecutionResult> {
        let current_id = session.current_state_id.clone();
        let result = self.run_state(&current_id, session.context.clone()).await?;

        session.status_message = result.status_message.clone();

        match &result.next {
            Next::Stay => Ok(ExecutionResult {
                reply: self.reply_or_prompt(result.reply, &current_id),
                status: ExecutionStatus::WaitingForInput,
            }),
            Next::Advance | Next::AdvanceNow => {
                let advance_now = matches!(result.next, Next::AdvanceNow);
                match self.next_state(&current_id, &session.context) {
                    Some(next_id) => {
                        debug!(from = %current_id, to = %next_id, "dialog transition");
                        session.current_state_id = next_id.clone();
                        if advance_now {
                            return Box::pin(self.execute_session(session)).await;
                        }
                        Ok(ExecutionResult {
                            reply: self.reply_or_prompt(result.reply, &next_id),
                            status: ExecutionStatus::WaitingForInput,
                        })
                    }
                    // No outgoing edge: stay where we are.
                    None => Ok(ExecutionResult {
                        reply: self.reply_or_prompt(result.reply, &current_id),
                        status: ExecutionStatus::WaitingForInput,
                    }),
                }
            }
            Next::GoTo(target_id) => {
                if !self.states.contains_key(target_id) {
                    return Err(FlowError::StateNotFound(target_id.clone()));
                }
                debug!(from = %current_id, to = %target_id, "dialog jump");
                session.current_state_id = target_id.clone();
                Ok(ExecutionResult {
                    reply: self.reply_or_prompt(result.reply, target_id),
                    status: ExecutionStatus::WaitingForInput,
                })
            }
            Next::End => Ok(ExecutionResult {
                reply: result.reply,
                status: ExecutionStatus::Completed,
            }),
        }
    }

    async fn run_state(&self, state_id: &str, context: Context) -> Result<StateResult> {
        let state = self
            .get_state(state_id)
            .ok_or_else(|| FlowError::StateNotFound(state_id.to_string()))?;

        state.handle(context).await
    }

    fn reply_or_prompt(&self, reply: Option<Reply>, state_id: &str) -> Option<Reply> {
        reply.or_else(|| self.states.get(state_id).map(|state| state.prompt()))
    }

    /// Resolve the outgoing edge of `current_id` against the context.
    pub fn next_state(&self, current_id: &str, context: &Context) -> Option<String> {
        let edges = self.edges.lock().unwrap();

        for edge in edges.iter() {
            match edge {
                Edge::Direct { from, to } if from.as_str() == current_id => {
                    return Some(to.clone());
                }
                Edge::Conditional {
                    from,
                    condition,
                    yes_to,
                    else_to,
                } if from.as_str() == current_id => {
                    return Some(if condition(context) {
                        yes_to.clone()
                    } else {
                        else_to.clone()
                    });
                }
                _ => {}
            }
        }
        None
    }

    pub fn start_state_id(&self) -> Option<String> {
        self.start_state_id.lock().unwrap().clone()
    }

    pub fn get_state(&self, state_id: &str) -> Option<Arc<dyn DialogState>> {
        self.states.get(state_id).map(|entry| entry.clone())
    }
}

/// Builder for wiring dialogs.
pub struct DialogBuilder {
    dialog: Dialog,
}

impl DialogBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            dialog: Dialog::new(id),
        }
    }

    pub fn add_state(self, state: Arc<dyn DialogState>) -> Self {
        self.dialog.add_state(state);
        self
    }

    pub fn add_edge(self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.dialog.add_edge(from, to);
        self
    }

    pub fn add_conditional_edge<F>(
        self,
        from: impl Into<String>,
        condition: F,
        yes_to: impl Into<String>,
        else_to: impl Into<String>,
    ) -> Self
    where
        F: Fn(&Context) -> bool + Send + Sync + 'static,
    {
        self.dialog.add_conditional_edge(from, condition, yes_to, else_to);
        self
    }

    pub fn set_start_state(self, state_id: impl Into<String>) -> Self {
        self.dialog.set_start_state(state_id);
        self
    }

    pub fn build(self) -> Dialog {
        self.dialog
    }
}

/// Outcome of one dialog step.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    pub reply: Option<Reply>,
    pub status: ExecutionStatus,
}

#[derive(Debug, Clone)]
pub enum ExecutionStatus {
    /// Waiting for the next user input.
    WaitingForInput,
    /// The dialog reached its end.
    Completed,
}
