use async_trait::async_trait;
use dialog_flow::{Context, DialogState, Next, Reply, Result, StateResult};
use tracing::info;

use super::{ids, take_input};
use crate::texts;

/// Entry state. Reacts to /start (or the restart button) by advancing into
/// the main menu; everything else is rejected.
pub struct StartState;

#[async_trait]
impl DialogState for StartState {
    fn id(&self) -> &str {
        ids::START
    }

    fn prompt(&self) -> Reply {
        Reply::new(texts::START_HINT, texts::restart_keyboard())
    }

    async fn handle(&self, context: Context) -> Result<StateResult> {
        let input = take_input(&context).await?;

        if input == texts::START_COMMAND || input == texts::buttons::START_OVER {
            info!(state = %self.id(), "conversation started");
            return Ok(StateResult::with_status(
                None,
                Next::Advance,
                "conversation started",
            ));
        }

        Ok(StateResult::new(
            Some(texts::invalid_choice(texts::restart_keyboard())),
            Next::Stay,
        ))
    }
}
