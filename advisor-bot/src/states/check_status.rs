use async_trait::async_trait;
use dialog_flow::{Context, DialogState, Next, Reply, Result, StateResult};
use tracing::info;

use super::{ids, take_input, types::session_keys};
use crate::texts;

/// Confirmation step. "All correct" routes straight into the summary;
/// "Change" sends the user back to the main menu without discarding any
/// previously collected answers.
pub struct CheckStatusState;

#[async_trait]
impl DialogState for CheckStatusState {
    fn id(&self) -> &str {
        ids::CHECK_STATUS
    }

    fn prompt(&self) -> Reply {
        Reply::new(texts::CONFIRMATION, texts::confirmation_keyboard())
    }

    async fn handle(&self, context: Context) -> Result<StateResult> {
        let input = take_input(&context).await?;

        match input.as_str() {
            texts::buttons::ALL_CORRECT => {
                context.set(session_keys::CONFIRMED, true).await;
                info!(state = %self.id(), "answers confirmed");
                Ok(StateResult::with_status(
                    None,
                    Next::AdvanceNow,
                    "answers confirmed",
                ))
            }
            texts::buttons::CHANGE => {
                context.set(session_keys::CONFIRMED, false).await;
                info!(state = %self.id(), "user wants to change answers");
                Ok(StateResult::with_status(
                    Some(Reply::new(texts::RESTART, texts::main_menu_keyboard())),
                    Next::Advance,
                    "returning to main menu",
                ))
            }
            _ => Ok(StateResult::new(
                Some(texts::invalid_choice(texts::confirmation_keyboard())),
                Next::Stay,
            )),
        }
    }
}
