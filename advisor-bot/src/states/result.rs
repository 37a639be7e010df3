use async_trait::async_trait;
use dialog_flow::{Context, DialogState, Next, Reply, Result, StateResult};
use tracing::info;

use super::{
    ids,
    types::{Preferences, session_keys},
};
use crate::texts;

/// Terminal state: echoes every collected answer back to the user and ends
/// the session. Reached from the confirmation step without further input.
pub struct ResultState;

#[async_trait]
impl DialogState for ResultState {
    fn id(&self) -> &str {
        ids::RESULT
    }

    fn prompt(&self) -> Reply {
        Reply::new(texts::RESULT_HEADER, texts::final_keyboard())
    }

    async fn handle(&self, context: Context) -> Result<StateResult> {
        let preferences: Preferences = context
            .get(session_keys::PREFERENCES)
            .await
            .unwrap_or_default();

        let summary = render_summary(&preferences);

        info!(state = %self.id(), "questionnaire completed");
        Ok(StateResult::with_status(
            Some(Reply::new(summary, texts::final_keyboard())),
            Next::End,
            "questionnaire completed",
        ))
    }
}

/// Collected answers are echoed verbatim; missing ones fall back to the
/// fixed "not specified" literal.
fn render_summary(preferences: &Preferences) -> String {
    let amount = preferences
        .investment_amount
        .as_deref()
        .unwrap_or(texts::NOT_SPECIFIED);
    let period = preferences
        .investment_period
        .as_deref()
        .unwrap_or(texts::NOT_SPECIFIED);
    let withdraw = preferences
        .is_withdraw
        .as_deref()
        .unwrap_or(texts::NOT_SPECIFIED);
    let increase = preferences
        .is_increase
        .as_deref()
        .unwrap_or(texts::NOT_SPECIFIED);
    let warranty = preferences
        .is_warranty
        .as_deref()
        .unwrap_or(texts::NOT_SPECIFIED);

    format!(
        "{}\n\
         Investment amount: {}\n\
         Investment period: {}\n\
         Withdraw anytime: {}\n\
         Top-up available: {}\n\
         Capital guarantee: {}\n\n\
         {}",
        texts::RESULT_HEADER,
        amount,
        period,
        withdraw,
        increase,
        warranty,
        texts::RESULT_FOOTER,
    )
}
