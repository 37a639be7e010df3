pub mod states;
pub mod texts;

use std::sync::Arc;

use dialog_flow::{Dialog, DialogBuilder};

use states::{
    AssetTypeSelectionState, CheckStatusState, MainMenuState, QuestionState, ResultState,
    StartState, ids, session_keys,
};

/// Wire the ten questionnaire states into a dialog.
///
/// The flow is linear from the asset choice to the confirmation; the only
/// branch decided by collected data is the confirmation edge, which routes
/// to the summary or back to the main menu.
pub fn build_dialog() -> Dialog {
    let amount = QuestionState::new(
        ids::AMOUNT_SELECTION,
        texts::AMOUNT_SELECTION,
        texts::amount_keyboard,
        |preferences, choice| preferences.investment_amount = Some(choice),
    );
    let period = QuestionState::new(
        ids::INVESTMENT_PERIOD,
        texts::PERIOD_SELECTION,
        texts::period_keyboard,
        |preferences, choice| preferences.investment_period = Some(choice),
    );
    let withdraw = QuestionState::new(
        ids::WITHDRAW,
        texts::WITHDRAW_QUESTION,
        texts::yes_no_keyboard,
        |preferences, choice| preferences.is_withdraw = Some(choice),
    );
    let increase = QuestionState::new(
        ids::INCREASE_INVESTMENT,
        texts::INCREASE_QUESTION,
        texts::yes_no_keyboard,
        |preferences, choice| preferences.is_increase = Some(choice),
    );
    let warranty = QuestionState::new(
        ids::WARRANTY_INFO,
        texts::WARRANTY_QUESTION,
        texts::yes_no_keyboard,
        |preferences, choice| preferences.is_warranty = Some(choice),
    );

    DialogBuilder::new("investment_questionnaire")
        .add_state(Arc::new(StartState))
        .add_state(Arc::new(MainMenuState))
        .add_state(Arc::new(AssetTypeSelectionState))
        .add_state(Arc::new(amount))
        .add_state(Arc::new(period))
        .add_state(Arc::new(withdraw))
        .add_state(Arc::new(increase))
        .add_state(Arc::new(warranty))
        .add_state(Arc::new(CheckStatusState))
        .add_state(Arc::new(ResultState))
        .add_edge(ids::START, ids::MAIN_MENU)
        .add_edge(ids::MAIN_MENU, ids::ASSET_TYPE_SELECTION)
        .add_edge(ids::ASSET_TYPE_SELECTION, ids::AMOUNT_SELECTION)
        .add_edge(ids::AMOUNT_SELECTION, ids::INVESTMENT_PERIOD)
        .add_edge(ids::INVESTMENT_PERIOD, ids::WITHDRAW)
        .add_edge(ids::WITHDRAW, ids::INCREASE_INVESTMENT)
        .add_edge(ids::INCREASE_INVESTMENT, ids::WARRANTY_INFO)
        .add_edge(ids::WARRANTY_INFO, ids::CHECK_STATUS)
        .add_conditional_edge(
            ids::CHECK_STATUS,
            |ctx| ctx.get_sync::<bool>(session_keys::CONFIRMED).unwrap_or(false),
            ids::RESULT,
            ids::MAIN_MENU,
        )
        .set_start_state(ids::START)
        .build()
}
