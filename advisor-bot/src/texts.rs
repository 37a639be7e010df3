//! Fixed prompt texts and button keyboards for the questionnaire.
//!
//! The label set of a keyboard is the accepted-input set of the state that
//! offers it.

use dialog_flow::{Keyboard, Reply};

pub const WELCOME: &str = "Welcome! Would you like to start or learn more?";
pub const ABOUT: &str = "We match your preferences against a curated set of \
investment products and prepare a personal offer.";
pub const ASSET_SELECTION: &str = "Choose an investment type:";
pub const STOCKS_REBUFF: &str = "Stock advisory is not available yet. Let's start over.";
pub const AMOUNT_SELECTION: &str = "Choose an investment amount:";
pub const PERIOD_SELECTION: &str = "Choose an investment period:";
pub const WITHDRAW_QUESTION: &str = "Is it important for you to withdraw money at any moment?";
pub const INCREASE_QUESTION: &str = "Would you like to be able to top up the investment?";
pub const WARRANTY_QUESTION: &str = "Do you need a capital preservation guarantee?";
pub const CONFIRMATION: &str = "Is everything correct?";
pub const RESTART: &str = "Let's start over.";
pub const START_HINT: &str = "Send /start or press \"Start over\" to begin.";
pub const RESULT_HEADER: &str = "Your preferences:";
pub const RESULT_FOOTER: &str = "Thank you for using our advisor!";
pub const INVALID_CHOICE: &str = "Please use the provided buttons.";
pub const NOT_SPECIFIED: &str = "not specified";

pub const START_COMMAND: &str = "/start";

pub mod buttons {
    pub const START: &str = "Start";
    pub const LEARN_MORE: &str = "Learn more";
    pub const LOW_RISK: &str = "Low-risk assets";
    pub const STOCKS: &str = "Stocks";
    pub const YES: &str = "Yes";
    pub const NO: &str = "No";
    pub const ALL_CORRECT: &str = "All correct";
    pub const CHANGE: &str = "Change";
    pub const START_OVER: &str = "Start over";
}

pub fn main_menu_keyboard() -> Keyboard {
    Keyboard::new(&[&[buttons::START, buttons::LEARN_MORE]])
}

pub fn asset_types_keyboard() -> Keyboard {
    Keyboard::new(&[&[buttons::LOW_RISK, buttons::STOCKS]])
}

pub fn amount_keyboard() -> Keyboard {
    Keyboard::new(&[&["up to 50k", "50-100k"], &["100-500k", "over 500k"]])
}

pub fn period_keyboard() -> Keyboard {
    Keyboard::new(&[&["up to 6 months", "6 months - 1 year"], &["1-3 years", "over 3 years"]])
}

pub fn yes_no_keyboard() -> Keyboard {
    Keyboard::new(&[&[buttons::YES, buttons::NO]])
}

pub fn confirmation_keyboard() -> Keyboard {
    Keyboard::new(&[&[buttons::ALL_CORRECT, buttons::CHANGE]])
}

pub fn restart_keyboard() -> Keyboard {
    Keyboard::new(&[&[buttons::START_OVER]])
}

pub fn final_keyboard() -> Keyboard {
    Keyboard::new(&[&[START_COMMAND]])
}

/// The fixed rejection reply: same buttons, "use the buttons" text.
pub fn invalid_choice(keyboard: Keyboard) -> Reply {
    Reply::new(INVALID_CHOICE, keyboard)
}
