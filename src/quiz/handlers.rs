use axum::{routing::get, Json, Router};
use tracing::{info, instrument};

use super::dto::{CategoryCount, QuestionView, QuizResult, QuizSubmission};
use super::services::{parse_answers, tally, winner, QUESTIONS};
use crate::{
    auth::AuthUser,
    error::{AppError, AppResult},
    extract::AppJson,
    state::AppState,
};

pub fn quiz_routes() -> Router<AppState> {
    Router::new().route("/quiz", get(questions).post(submit))
}

pub async fn questions() -> Json<Vec<QuestionView>> {
    Json(QUESTIONS.iter().map(QuestionView::from).collect())
}

#[instrument(skip(body))]
pub async fn submit(
    AuthUser(user_id): AuthUser,
    AppJson(body): AppJson<QuizSubmission>,
) -> AppResult<Json<QuizResult>> {
    let votes = parse_answers(body.answers.as_slice())?;
    let counts = tally(&votes);
    let category = winner(&counts)
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("quiz produced no votes")))?;

    info!(%user_id, ?category, "quiz completed");
    Ok(Json(QuizResult {
        category,
        label: category.label(),
        description: category.description(),
        suggested_goal: category.suggested_goal(),
        tally: counts
            .into_iter()
            .map(|(category, count)| CategoryCount { category, count })
            .collect(),
    }))
}
