// Questionnaire states, one handler per dialog state.
pub mod asset_type;
pub mod check_status;
pub mod main_menu;
pub mod question;
pub mod result;
pub mod start;
pub mod types;

pub use asset_type::AssetTypeSelectionState;
pub use check_status::CheckStatusState;
pub use main_menu::MainMenuState;
pub use question::QuestionState;
pub use result::ResultState;
pub use start::StartState;

pub use types::{Preferences, session_keys};

use dialog_flow::{Context, FlowError, Result};

/// State ids, used for edges and session bookkeeping.
pub mod ids {
    pub const START: &str = "start";
    pub const MAIN_MENU: &str = "main_menu";
    pub const ASSET_TYPE_SELECTION: &str = "asset_type_selection";
    pub const AMOUNT_SELECTION: &str = "amount_selection";
    pub const INVESTMENT_PERIOD: &str = "investment_period";
    pub const WITHDRAW: &str = "withdraw";
    pub const INCREASE_INVESTMENT: &str = "increase_investment";
    pub const WARRANTY_INFO: &str = "warranty_info";
    pub const CHECK_STATUS: &str = "check_status";
    pub const RESULT: &str = "result";
}

/// Fetch the pending user input for the current step.
pub(crate) async fn take_input(context: &Context) -> Result<String> {
    context
        .get::<String>(session_keys::USER_INPUT)
        .await
        .ok_or_else(|| FlowError::ContextError("user_input not found".to_string()))
}
