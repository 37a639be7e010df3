use async_trait::async_trait;
use dialog_flow::{Context, DialogState, Next, Reply, Result, StateResult};
use tracing::info;

use super::{ids, take_input};
use crate::texts;

/// Main menu: start the questionnaire or read about the service.
pub struct MainMenuState;

#[async_trait]
impl DialogState for MainMenuState {
    fn id(&self) -> &str {
        ids::MAIN_MENU
    }

    fn prompt(&self) -> Reply {
        Reply::new(texts::WELCOME, texts::main_menu_keyboard())
    }

    async fn handle(&self, context: Context) -> Result<StateResult> {
        let input = take_input(&context).await?;

        match input.as_str() {
            texts::buttons::START => {
                info!(state = %self.id(), "questionnaire started");
                Ok(StateResult::with_status(
                    None,
                    Next::Advance,
                    "questionnaire started",
                ))
            }
            texts::buttons::LEARN_MORE => Ok(StateResult::with_status(
                Some(Reply::new(texts::ABOUT, texts::restart_keyboard())),
                Next::GoTo(ids::START.to_string()),
                "shown service description",
            )),
            _ => Ok(StateResult::new(
                Some(texts::invalid_choice(texts::main_menu_keyboard())),
                Next::Stay,
            )),
        }
    }
}
