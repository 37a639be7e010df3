pub mod context;
pub mod dialog;
pub mod error;
pub mod runner;
pub mod state;
pub mod storage;

// Re-export commonly used types
pub use context::Context;
pub use dialog::{Dialog, DialogBuilder, EdgeCondition, ExecutionResult, ExecutionStatus};
pub use error::{FlowError, Result};
pub use runner::DialogRunner;
pub use state::{DialogState, Keyboard, Next, Reply, StateResult};
pub use storage::{
    DialogStorage, InMemoryDialogStorage, InMemorySessionStorage, Session, SessionStorage,
};
