use advisor_bot::states::{Preferences, ids, session_keys};
use advisor_bot::{build_dialog, texts};
use dialog_flow::{Dialog, ExecutionResult, ExecutionStatus, Session};

async fn step(dialog: &Dialog, session: &mut Session, input: &str) -> ExecutionResult {
    session
        .context
        .set(session_keys::USER_INPUT, input.to_string())
        .await;
    dialog
        .execute_session(session)
        .await
        .expect("dialog step failed")
}

async fn preferences(session: &Session) -> Preferences {
    session
        .context
        .get(session_keys::PREFERENCES)
        .await
        .unwrap_or_default()
}

/// Inputs that walk a fresh session up to (but not into) the given state.
fn path_to(state_id: &str) -> Vec<&'static str> {
    let full = [
        "/start",
        "Start",
        "Low-risk assets",
        "up to 50k",
        "up to 6 months",
        "Yes",
        "No",
        "Yes",
    ];
    let depth = match state_id {
        ids::START => 0,
        ids::MAIN_MENU => 1,
        ids::ASSET_TYPE_SELECTION => 2,
        ids::AMOUNT_SELECTION => 3,
        ids::INVESTMENT_PERIOD => 4,
        ids::WITHDRAW => 5,
        ids::INCREASE_INVESTMENT => 6,
        ids::WARRANTY_INFO => 7,
        ids::CHECK_STATUS => 8,
        other => panic!("no scripted path to state {other}"),
    };
    full[..depth].to_vec()
}

#[tokio::test]
async fn full_questionnaire_reaches_summary() {
    let dialog = build_dialog();
    let mut session = Session::new_from_state("s1", ids::START);

    let result = step(&dialog, &mut session, "/start").await;
    assert_eq!(session.current_state_id, ids::MAIN_MENU);
    assert_eq!(result.reply.unwrap().text, texts::WELCOME);

    let result = step(&dialog, &mut session, "Start").await;
    assert_eq!(session.current_state_id, ids::ASSET_TYPE_SELECTION);
    assert_eq!(result.reply.unwrap().text, texts::ASSET_SELECTION);

    step(&dialog, &mut session, "Low-risk assets").await;
    step(&dialog, &mut session, "up to 50k").await;
    step(&dialog, &mut session, "up to 6 months").await;
    step(&dialog, &mut session, "Yes").await;
    step(&dialog, &mut session, "No").await;
    let result = step(&dialog, &mut session, "Yes").await;
    assert_eq!(session.current_state_id, ids::CHECK_STATUS);
    assert_eq!(result.reply.unwrap().text, texts::CONFIRMATION);

    let result = step(&dialog, &mut session, "All correct").await;
    assert!(matches!(result.status, ExecutionStatus::Completed));
    assert_eq!(session.current_state_id, ids::RESULT);

    let summary = result.reply.unwrap().text;
    assert!(summary.contains("up to 50k"));
    assert!(summary.contains("up to 6 months"));
    assert!(summary.contains("Withdraw anytime: Yes"));
    assert!(summary.contains("Top-up available: No"));
    assert!(summary.contains("Capital guarantee: Yes"));
}

#[tokio::test]
async fn unknown_input_reprompts_without_touching_answers() {
    let reachable = [
        ids::START,
        ids::MAIN_MENU,
        ids::ASSET_TYPE_SELECTION,
        ids::AMOUNT_SELECTION,
        ids::INVESTMENT_PERIOD,
        ids::WITHDRAW,
        ids::INCREASE_INVESTMENT,
        ids::WARRANTY_INFO,
        ids::CHECK_STATUS,
    ];

    for state_id in reachable {
        let dialog = build_dialog();
        let mut session = Session::new_from_state("s1", ids::START);
        for input in path_to(state_id) {
            step(&dialog, &mut session, input).await;
        }
        assert_eq!(session.current_state_id, state_id, "setup walk failed");

        let before = preferences(&session).await;
        let result = step(&dialog, &mut session, "certainly not a button").await;

        assert_eq!(session.current_state_id, state_id, "state {state_id} moved");
        let reply = result.reply.expect("rejection reply missing");
        assert_eq!(reply.text, texts::INVALID_CHOICE, "state {state_id}");
        assert!(reply.keyboard.is_some(), "state {state_id} lost its buttons");
        assert_eq!(preferences(&session).await, before, "state {state_id}");
    }
}

#[tokio::test]
async fn learn_more_shows_about_and_returns_to_start() {
    let dialog = build_dialog();
    let mut session = Session::new_from_state("s1", ids::START);

    step(&dialog, &mut session, "/start").await;
    let result = step(&dialog, &mut session, "Learn more").await;

    assert_eq!(session.current_state_id, ids::START);
    assert_eq!(result.reply.unwrap().text, texts::ABOUT);

    // The restart button picks the flow back up at the welcome screen.
    let result = step(&dialog, &mut session, "Start over").await;
    assert_eq!(session.current_state_id, ids::MAIN_MENU);
    assert_eq!(result.reply.unwrap().text, texts::WELCOME);
}

#[tokio::test]
async fn stocks_selection_is_rebuffed_back_to_start() {
    let dialog = build_dialog();
    let mut session = Session::new_from_state("s1", ids::START);

    step(&dialog, &mut session, "/start").await;
    step(&dialog, &mut session, "Start").await;
    let result = step(&dialog, &mut session, "Stocks").await;

    assert_eq!(session.current_state_id, ids::START);
    assert_eq!(result.reply.unwrap().text, texts::STOCKS_REBUFF);
    assert_eq!(preferences(&session).await, Preferences::default());
}

#[tokio::test]
async fn change_returns_to_menu_and_keeps_collected_answers() {
    let dialog = build_dialog();
    let mut session = Session::new_from_state("s1", ids::START);
    for input in path_to(ids::CHECK_STATUS) {
        step(&dialog, &mut session, input).await;
    }

    let before = preferences(&session).await;
    assert_eq!(before.investment_amount.as_deref(), Some("up to 50k"));

    let result = step(&dialog, &mut session, "Change").await;
    assert_eq!(session.current_state_id, ids::MAIN_MENU);
    assert_eq!(result.reply.unwrap().text, texts::RESTART);
    assert_eq!(preferences(&session).await, before);

    // A second pass overwrites the answers it revisits.
    step(&dialog, &mut session, "Start").await;
    step(&dialog, &mut session, "Low-risk assets").await;
    step(&dialog, &mut session, "over 500k").await;
    let after = preferences(&session).await;
    assert_eq!(after.investment_amount.as_deref(), Some("over 500k"));
    assert_eq!(after.investment_period, before.investment_period);
}

#[tokio::test]
async fn summary_reports_missing_answers_as_not_specified() {
    let dialog = build_dialog();
    let mut session = Session::new_from_state("s1", ids::CHECK_STATUS);
    session
        .context
        .set(
            session_keys::PREFERENCES,
            Preferences {
                investment_amount: Some("100-500k".to_string()),
                ..Preferences::default()
            },
        )
        .await;

    let result = step(&dialog, &mut session, "All correct").await;
    assert!(matches!(result.status, ExecutionStatus::Completed));

    let summary = result.reply.unwrap().text;
    assert!(summary.contains("Investment amount: 100-500k"));
    assert!(summary.contains(&format!("Investment period: {}", texts::NOT_SPECIFIED)));
    assert!(summary.contains(&format!("Capital guarantee: {}", texts::NOT_SPECIFIED)));
}
