use serde::{Deserialize, Serialize};

/// Everything the questionnaire has collected so far. Values are the raw
/// button labels the user selected; no numeric interpretation happens here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub investment_amount: Option<String>,
    pub investment_period: Option<String>,
    pub is_withdraw: Option<String>,
    pub is_increase: Option<String>,
    pub is_warranty: Option<String>,
}

pub mod session_keys {
    pub const USER_INPUT: &str = "user_input";
    pub const PREFERENCES: &str = "preferences";
    pub const CONFIRMED: &str = "confirmed";
}
