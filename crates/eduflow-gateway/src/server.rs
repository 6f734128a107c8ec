//! HTTP gateway: one route family per agent, all backed by the engine registry

use crate::error::ApiError;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use eduflow_core::{
    ContentSource, GatewayConfig, Metadata, ProcessRequest, ProcessResponse, StepRecord,
    SUPPORTED_GRADES, SUPPORTED_LANGUAGES,
};
use eduflow_engine::{
    chat_request, lesson_plan_request, performance_request, Engine, EngineRegistry,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

pub struct AppState {
    pub registry: EngineRegistry,
}

#[derive(Debug, Serialize)]
pub struct AgentResponse {
    pub agent_type: String,
    pub content: String,
    pub metadata: Metadata,
    pub workflow_steps: Vec<StepRecord>,
}

impl AgentResponse {
    fn new(agent_type: &str, response: ProcessResponse) -> Self {
        Self {
            agent_type: agent_type.to_string(),
            content: response.content,
            metadata: response.metadata,
            workflow_steps: response.workflow_steps,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CreatePlanBody {
    topic: String,
    grades: Vec<u32>,
    duration: String,
    #[serde(default = "english")]
    languages: Vec<String>,
    #[serde(default)]
    content_source: ContentSource,
}

#[derive(Debug, Deserialize)]
struct AnalyzeBody {
    student_data: Value,
    grades: Vec<u32>,
    subject: String,
}

fn english() -> Vec<String> {
    vec!["English".to_string()]
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route(
            "/agents/:agent_type/:action",
            get(status_handler).post(action_handler),
        )
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_gateway(config: &GatewayConfig, registry: EngineRegistry) -> anyhow::Result<()> {
    let agents = registry.len();
    let app = router(Arc::new(AppState { registry }));

    let bind_addr: SocketAddr = format!("{}:{}", config.bind.to_addr(), config.port).parse()?;

    info!("Eduflow Gateway v{} starting", env!("CARGO_PKG_VERSION"));
    info!("  Listening on: {}", bind_addr);
    info!("  Agents:       {}", agents);
    info!("  Bind mode:    {:?}", config.bind);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn index_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "message": "Eduflow - educational content agents",
        "available_agents": state.registry.ids(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "agents": state.registry.len(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn status_handler(
    Path((agent_type, action)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, ApiError> {
    let engine = state.registry.resolve(&agent_type)?;
    if action != "status" {
        return Err(unknown_route(&agent_type, &action));
    }
    Ok(Json(json!({
        "agent_type": engine.id(),
        "status": "active",
        "capabilities": engine.capabilities(),
        "supported_languages": SUPPORTED_LANGUAGES,
        "supported_grades": SUPPORTED_GRADES.collect::<Vec<_>>(),
    })))
}

async fn action_handler(
    Path((agent_type, action)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AgentResponse>, ApiError> {
    let engine = state.registry.resolve(&agent_type)?;
    let Json(body) = body.map_err(|e| ApiError::InvalidBody(e.body_text()))?;
    let request = match (engine.id(), action.as_str()) {
        (_, "generate") => parse::<ProcessRequest>(body)?,
        ("lesson-planner", "create-plan") => {
            let plan: CreatePlanBody = parse(body)?;
            lesson_plan_request(
                &plan.topic,
                plan.grades,
                &plan.duration,
                plan.languages,
                plan.content_source,
            )
        }
        ("performance-analysis", "analyze") => {
            let analyze: AnalyzeBody = parse(body)?;
            performance_request(analyze.student_data, analyze.grades, &analyze.subject)
        }
        ("master-chatbot", "chat") => {
            let chat: ProcessRequest = parse(body)?;
            chat_request(&chat.prompt, chat.grades, chat.languages, chat.metadata)
        }
        _ => return Err(unknown_route(&agent_type, &action)),
    };
    run(&engine, request).await
}

async fn run(engine: &Engine, request: ProcessRequest) -> Result<Json<AgentResponse>, ApiError> {
    let response = engine.process(request).await?;
    Ok(Json(AgentResponse::new(engine.id(), response)))
}

fn parse<T: DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    serde_json::from_value(body).map_err(|e| ApiError::InvalidBody(e.to_string()))
}

fn unknown_route(agent_type: &str, action: &str) -> ApiError {
    ApiError::NotFound(format!("Agent {} has no '{}' endpoint", agent_type, action))
}
