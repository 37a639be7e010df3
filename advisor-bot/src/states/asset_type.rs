use async_trait::async_trait;
use dialog_flow::{Context, DialogState, Next, Reply, Result, StateResult};
use tracing::info;

use super::{ids, take_input};
use crate::texts;

/// Asset type choice. Only low-risk assets continue the questionnaire;
/// stocks are a dead end that sends the user back to the start.
pub struct AssetTypeSelectionState;

#[async_trait]
impl DialogState for AssetTypeSelectionState {
    fn id(&self) -> &str {
        ids::ASSET_TYPE_SELECTION
    }

    fn prompt(&self) -> Reply {
        Reply::new(texts::ASSET_SELECTION, texts::asset_types_keyboard())
    }

    async fn handle(&self, context: Context) -> Result<StateResult> {
        let input = take_input(&context).await?;

        match input.as_str() {
            texts::buttons::LOW_RISK => {
                info!(state = %self.id(), "low-risk assets selected");
                Ok(StateResult::with_status(
                    None,
                    Next::Advance,
                    "low-risk assets selected",
                ))
            }
            texts::buttons::STOCKS => {
                info!(state = %self.id(), "stocks requested, rebuffing");
                Ok(StateResult::with_status(
                    Some(Reply::new(texts::STOCKS_REBUFF, texts::restart_keyboard())),
                    Next::GoTo(ids::START.to_string()),
                    "stocks rebuffed",
                ))
            }
            _ => Ok(StateResult::new(
                Some(texts::invalid_choice(texts::asset_types_keyboard())),
                Next::Stay,
            )),
        }
    }
}
