use axum::{routing::post, Json, Router};
use tracing::{debug, instrument};

use super::dto::{ChatRequest, ChatResponse};
use super::services::reply_to;
use crate::{extract::AppJson, state::AppState};

pub fn chat_routes() -> Router<AppState> {
    Router::new().route("/chat", post(chat))
}

#[instrument(skip(body))]
pub async fn chat(AppJson(body): AppJson<ChatRequest>) -> Json<ChatResponse> {
    let reply = reply_to(&body.message);
    debug!(len = body.message.len(), "chat message answered");
    Json(ChatResponse { reply })
}
