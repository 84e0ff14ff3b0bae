use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::domain::types::RedemptionState;
use crate::error::ListingsServiceError;
use crate::pages;
use crate::state::AppState;
use crate::usecase::code::{CheckCodeUseCase, IssueCodeInput, IssueCodeUseCase};

// ── POST /codes ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct IssueCodeRequest {
    #[serde(default)]
    pub demo: bool,
}

#[derive(Serialize)]
pub struct IssueCodeResponse {
    pub code: String,
    pub redemption_url: String,
}

pub async fn issue_code(
    State(state): State<AppState>,
    body: Option<Json<IssueCodeRequest>>,
) -> Result<(StatusCode, Json<IssueCodeResponse>), ListingsServiceError> {
    let demo = body.map(|Json(b)| b.demo).unwrap_or(false);
    let usecase = IssueCodeUseCase {
        codes: state.code_repo(),
    };
    let code = usecase.execute(IssueCodeInput { demo }).await?;
    Ok((
        StatusCode::CREATED,
        Json(IssueCodeResponse {
            redemption_url: format!("{}/qr/{}", state.public_base_url, code.code),
            code: code.code,
        }),
    ))
}

// ── GET /qr/{code} ───────────────────────────────────────────────────────────

/// Browser-facing: every outcome renders as HTML with the mapped status.
pub async fn redeem_page(State(state): State<AppState>, Path(code): Path<String>) -> Response {
    let usecase = CheckCodeUseCase {
        codes: state.code_repo(),
    };
    match usecase.execute(&code).await {
        Ok(RedemptionState::Open) => {
            (StatusCode::OK, Html(pages::submission_form(&code))).into_response()
        }
        Ok(RedemptionState::AlreadyUsed) => (
            ListingsServiceError::CodeAlreadyUsed.status(),
            Html(pages::message_page(
                "Code already used",
                "Sorry, this code has already been used.",
            )),
        )
            .into_response(),
        Ok(RedemptionState::NotFound) => (
            ListingsServiceError::CodeNotFound.status(),
            Html(pages::message_page(
                "Invalid code",
                "This code does not exist. Check the link and try again.",
            )),
        )
            .into_response(),
        Err(err) => {
            err.log_server_error();
            (
                err.status(),
                Html(pages::message_page("Something went wrong", &err.to_string())),
            )
                .into_response()
        }
    }
}
