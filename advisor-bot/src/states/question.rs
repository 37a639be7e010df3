use async_trait::async_trait;
use dialog_flow::{Context, DialogState, Keyboard, Next, Reply, Result, StateResult};
use tracing::info;

use super::{
    take_input,
    types::{Preferences, session_keys},
};
use crate::texts;

/// One scripted questionnaire step: offer a fixed keyboard, store the chosen
/// label into its `Preferences` field verbatim, move on to the next step.
pub struct QuestionState {
    id: &'static str,
    question: &'static str,
    options: fn() -> Keyboard,
    assign: fn(&mut Preferences, String),
}

impl QuestionState {
    pub fn new(
        id: &'static str,
        question: &'static str,
        options: fn() -> Keyboard,
        assign: fn(&mut Preferences, String),
    ) -> Self {
        Self {
            id,
            question,
            options,
            assign,
        }
    }
}

#[async_trait]
impl DialogState for QuestionState {
    fn id(&self) -> &str {
        self.id
    }

    fn prompt(&self) -> Reply {
        Reply::new(self.question, (self.options)())
    }

    async fn handle(&self, context: Context) -> Result<StateResult> {
        let input = take_input(&context).await?;
        let options = (self.options)();

        if !options.contains(&input) {
            return Ok(StateResult::new(
                Some(texts::invalid_choice(options)),
                Next::Stay,
            ));
        }

        let mut preferences: Preferences = context
            .get(session_keys::PREFERENCES)
            .await
            .unwrap_or_default();
        (self.assign)(&mut preferences, input.clone());
        context.set(session_keys::PREFERENCES, preferences).await;

        info!(state = %self.id, choice = %input, "answer recorded");
        Ok(StateResult::with_status(
            None,
            Next::Advance,
            format!("recorded answer at {}", self.id),
        ))
    }
}
