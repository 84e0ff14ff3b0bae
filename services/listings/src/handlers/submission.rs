use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::types::Submission;
use crate::error::ListingsServiceError;
use crate::pages;
use crate::state::AppState;
use crate::usecase::submission::{
    AttachmentUpload, ListSubmissionsUseCase, RecordSubmissionInput, RecordSubmissionUseCase,
};

// ── POST /submit/{code} ──────────────────────────────────────────────────────

fn some_nonempty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Collect form fields and image parts. Malformed parts surface as
/// `MissingData`; count, type, and size limits are the recorder's job.
async fn parse_submission_form(
    code: String,
    mut multipart: Multipart,
) -> Result<RecordSubmissionInput, ListingsServiceError> {
    let mut input = RecordSubmissionInput {
        code,
        name: String::new(),
        phone: String::new(),
        address: None,
        owner_name: None,
        price: None,
        size: None,
        bedrooms: None,
        baths: None,
        condition: None,
        attachments: Vec::new(),
    };

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ListingsServiceError::MissingData)?
    {
        let Some(name) = field.name().map(ToOwned::to_owned) else {
            continue;
        };
        if name == "images" {
            let file_name = field.file_name().unwrap_or("").to_owned();
            let content_type = field.content_type().unwrap_or("").to_owned();
            let bytes = field
                .bytes()
                .await
                .map_err(|_| ListingsServiceError::MissingData)?;
            // A file input with no selection still posts one empty part.
            if file_name.is_empty() && bytes.is_empty() {
                continue;
            }
            input.attachments.push(AttachmentUpload {
                content_type,
                bytes: bytes.to_vec(),
            });
            continue;
        }
        let value = field
            .text()
            .await
            .map_err(|_| ListingsServiceError::MissingData)?;
        match name.as_str() {
            "name" => input.name = value,
            "phone" => input.phone = value,
            "address" => input.address = some_nonempty(value),
            "owner_name" => input.owner_name = some_nonempty(value),
            "price" => input.price = some_nonempty(value),
            "size" => {
                input.size = match some_nonempty(value) {
                    Some(v) => Some(v.parse().map_err(|_| ListingsServiceError::MissingData)?),
                    None => None,
                }
            }
            "bedrooms" => input.bedrooms = some_nonempty(value),
            "baths" => input.baths = some_nonempty(value),
            "condition" => input.condition = some_nonempty(value),
            _ => {}
        }
    }

    Ok(input)
}

/// Browser-facing: both outcomes render as HTML with the mapped status.
pub async fn submit_listing(
    State(state): State<AppState>,
    Path(code): Path<String>,
    multipart: Multipart,
) -> (StatusCode, Html<String>) {
    let outcome = async {
        let input = parse_submission_form(code, multipart).await?;
        let usecase = RecordSubmissionUseCase {
            codes: state.code_repo(),
            submissions: state.submission_repo(),
            attachments: state.attachment_store(),
        };
        usecase.execute(input).await
    }
    .await;

    match outcome {
        Ok(_) => (
            StatusCode::OK,
            Html(pages::message_page(
                "Thank you!",
                "Your listing has been submitted.",
            )),
        ),
        Err(err) => {
            err.log_server_error();
            (
                err.status(),
                Html(pages::message_page("Submission failed", &err.to_string())),
            )
        }
    }
}

// ── GET /listings ────────────────────────────────────────────────────────────

pub async fn get_listings_page(State(state): State<AppState>) -> Response {
    let usecase = ListSubmissionsUseCase {
        submissions: state.submission_repo(),
    };
    match usecase.execute().await {
        Ok(submissions) => Html(pages::listings_page(&submissions)).into_response(),
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

// ── GET /api/listings ────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct SubmissionResponse {
    pub id: String,
    pub code: String,
    pub name: String,
    pub phone: String,
    pub address: Option<String>,
    pub owner_name: Option<String>,
    pub price: Option<String>,
    pub size: Option<i32>,
    pub bedrooms: Option<String>,
    pub baths: Option<String>,
    pub condition: Option<String>,
    pub images: Vec<String>,
    #[serde(serialize_with = "doorcode_core::serde::to_rfc3339_ms")]
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}

fn submission_response(s: Submission) -> SubmissionResponse {
    SubmissionResponse {
        id: s.id.to_string(),
        code: s.code,
        name: s.name,
        phone: s.phone,
        address: s.address,
        owner_name: s.owner_name,
        price: s.price,
        size: s.size,
        bedrooms: s.bedrooms,
        baths: s.baths,
        condition: s.condition,
        images: s.images,
        submitted_at: s.submitted_at,
    }
}

pub async fn get_listings(
    State(state): State<AppState>,
) -> Result<Json<Vec<SubmissionResponse>>, ListingsServiceError> {
    let usecase = ListSubmissionsUseCase {
        submissions: state.submission_repo(),
    };
    let submissions = usecase.execute().await?;
    Ok(Json(
        submissions.into_iter().map(submission_response).collect(),
    ))
}
