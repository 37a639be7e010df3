use std::sync::Arc;

use advisor_bot::{
    build_dialog,
    states::{ids, session_keys},
    texts,
};
use axum::{
    Router,
    extract::{Path, State},
    http::{HeaderValue, Request, StatusCode},
    middleware::{Next, from_fn},
    response::Json,
    routing::{get, post},
};
use dialog_flow::{
    DialogRunner, DialogStorage, ExecutionStatus, InMemoryDialogStorage, InMemorySessionStorage,
    Keyboard, Session, SessionStorage,
};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{Instrument, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

const DIALOG_ID: &str = "investment_questionnaire";

#[derive(Clone)]
struct AppState {
    runner: Arc<DialogRunner>,
    session_storage: Arc<dyn SessionStorage>,
}

#[derive(Debug, Deserialize)]
struct ChatRequest {
    session_id: Option<String>,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatResponse {
    session_id: String,
    reply: Option<String>,
    keyboard: Option<Keyboard>,
    status: String,
}

/// Initialize structured tracing based on environment variables.
fn init_tracing() {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "advisor_bot=debug,dialog_flow=debug,tower_http=debug".into());

    match log_format.as_str() {
        "pretty" => {
            // Human-readable logging for development
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        _ => {
            // Structured JSON logging for production
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_target(true)
                        .with_level(true),
                )
                .init();
        }
    }
}

/// Middleware that tags every request with a correlation id.
async fn correlation_id_middleware(
    mut request: Request<axum::body::Body>,
    next: Next,
) -> axum::response::Response {
    let correlation_id = Uuid::new_v4().to_string();

    request.headers_mut().insert(
        "x-correlation-id",
        HeaderValue::from_str(&correlation_id).unwrap(),
    );

    let span = tracing::info_span!("http_request", correlation_id = %correlation_id);
    let mut response = next.run(request).instrument(span).await;

    response.headers_mut().insert(
        "x-correlation-id",
        HeaderValue::from_str(&correlation_id).unwrap(),
    );
    response
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let dialog_storage: Arc<dyn DialogStorage> = Arc::new(InMemoryDialogStorage::new());
    let session_storage: Arc<dyn SessionStorage> = Arc::new(InMemorySessionStorage::new());

    dialog_storage
        .save(DIALOG_ID.to_string(), Arc::new(build_dialog()))
        .await
        .map_err(|e| anyhow::anyhow!("failed to store dialog: {e}"))?;

    let dialog = dialog_storage
        .get(DIALOG_ID)
        .await
        .map_err(|e| anyhow::anyhow!("failed to load dialog: {e}"))?
        .ok_or_else(|| anyhow::anyhow!("dialog {DIALOG_ID} not found"))?;

    let runner = Arc::new(DialogRunner::new(dialog, session_storage.clone()));

    let app_state = AppState {
        runner,
        session_storage,
    };

    let app = Router::new()
        .route("/health", get(health_check))
        .route("/chat", post(chat))
        .route("/session/{id}", get(get_session))
        .layer(from_fn(correlation_id_middleware))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state);

    // All configuration comes from the environment; nothing is baked in.
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!("Server running on http://{}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}

async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, StatusCode> {
    let session_id_provided = request.session_id.is_some();
    let session_id = request
        .session_id
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    if session_id_provided && Uuid::parse_str(&session_id).is_err() {
        error!(session_id = %session_id, "invalid session id format");
        return Err(StatusCode::BAD_REQUEST);
    }

    let mut session = match state.session_storage.get(&session_id).await {
        Ok(Some(session)) => session,
        Ok(None) => {
            // A supplied id must refer to an existing session.
            if session_id_provided {
                error!(session_id = %session_id, "session not found");
                return Err(StatusCode::NOT_FOUND);
            }
            info!(session_id = %session_id, "creating new session");
            Session::new_from_state(session_id.clone(), ids::START)
        }
        Err(e) => {
            error!(session_id = %session_id, error = %e, "failed to load session");
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let content = request.content.trim().to_string();

    // /start works from anywhere, keeping whatever was already collected.
    if content == texts::START_COMMAND {
        session.current_state_id = ids::START.to_string();
    }

    session
        .context
        .set(session_keys::USER_INPUT, content)
        .await;

    if let Err(e) = state.session_storage.save(session).await {
        error!(session_id = %session_id, error = %e, "failed to save session");
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }

    let result = match state.runner.run(&session_id).await {
        Ok(result) => result,
        Err(e) => {
            error!(session_id = %session_id, error = %e, "failed to execute dialog");
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    info!(
        session_id = %session_id,
        status = ?result.status,
        "request completed"
    );

    let completed = matches!(result.status, ExecutionStatus::Completed);
    let (reply, keyboard) = match result.reply {
        Some(reply) => (Some(reply.text), reply.keyboard),
        None => (None, None),
    };

    Ok(Json(ChatResponse {
        session_id,
        reply,
        keyboard,
        status: if completed {
            "completed".to_string()
        } else {
            "waiting_for_input".to_string()
        },
    }))
}

async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<Session>, StatusCode> {
    match state.session_storage.get(&session_id).await {
        Ok(Some(session)) => Ok(Json(session)),
        Ok(None) => {
            info!(session_id = %session_id, "session not found");
            Err(StatusCode::NOT_FOUND)
        }
        Err(e) => {
            error!(session_id = %session_id, error = %e, "failed to get session");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
