use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::{AttachmentStore, CodeRepository, SubmissionRepository};
use crate::domain::types::Submission;
use crate::error::ListingsServiceError;

/// Upper bound on images per submission.
pub const MAX_ATTACHMENTS: usize = 5;

/// Upper bound on a single image body (5 MiB).
pub const MAX_ATTACHMENT_BYTES: usize = 5 * 1024 * 1024;

/// Accepted image content types and the file extension stored for each.
/// `image/jpg` is a nonstandard alias some clients still send.
const ALLOWED_IMAGE_TYPES: &[(&str, &str)] = &[
    ("image/jpeg", "jpg"),
    ("image/jpg", "jpg"),
    ("image/png", "png"),
];

/// One uploaded image parsed out of the multipart body.
#[derive(Debug, Clone)]
pub struct AttachmentUpload {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

fn extension_for(content_type: &str) -> Option<&'static str> {
    ALLOWED_IMAGE_TYPES
        .iter()
        .find(|(ct, _)| *ct == content_type)
        .map(|(_, ext)| *ext)
}

fn validate_attachments(attachments: &[AttachmentUpload]) -> Result<(), ListingsServiceError> {
    if attachments.len() > MAX_ATTACHMENTS {
        return Err(ListingsServiceError::TooManyAttachments);
    }
    for upload in attachments {
        if extension_for(&upload.content_type).is_none() {
            return Err(ListingsServiceError::UnsupportedMediaType);
        }
        if upload.bytes.len() > MAX_ATTACHMENT_BYTES {
            return Err(ListingsServiceError::PayloadTooLarge);
        }
    }
    Ok(())
}

// ── RecordSubmission ─────────────────────────────────────────────────────────

pub struct RecordSubmissionInput {
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
    pub attachments: Vec<AttachmentUpload>,
}

pub struct RecordSubmissionUseCase<C, S, A>
where
    C: CodeRepository,
    S: SubmissionRepository,
    A: AttachmentStore,
{
    pub codes: C,
    pub submissions: S,
    pub attachments: A,
}

impl<C, S, A> RecordSubmissionUseCase<C, S, A>
where
    C: CodeRepository,
    S: SubmissionRepository,
    A: AttachmentStore,
{
    pub async fn execute(
        &self,
        input: RecordSubmissionInput,
    ) -> Result<Submission, ListingsServiceError> {
        // 1. Validate input before any I/O.
        if input.name.trim().is_empty() || input.phone.trim().is_empty() {
            return Err(ListingsServiceError::MissingData);
        }
        validate_attachments(&input.attachments)?;

        // 2. The code must exist and still be redeemable at write time.
        let code = self
            .codes
            .find_by_code(&input.code)
            .await?
            .ok_or(ListingsServiceError::InvalidOrUsedCode)?;
        if !code.is_redeemable() {
            return Err(ListingsServiceError::InvalidOrUsedCode);
        }

        // 3. Persist image bodies, collecting references in upload order.
        let mut images = Vec::with_capacity(input.attachments.len());
        for upload in &input.attachments {
            let ext = extension_for(&upload.content_type)
                .ok_or(ListingsServiceError::UnsupportedMediaType)?;
            let filename = format!("{}.{ext}", Uuid::new_v4());
            images.push(self.attachments.save(&filename, &upload.bytes).await?);
        }

        let submission = Submission {
            id: Uuid::new_v4(),
            code: input.code,
            name: input.name,
            phone: input.phone,
            address: input.address,
            owner_name: input.owner_name,
            price: input.price,
            size: input.size,
            bedrooms: input.bedrooms,
            baths: input.baths,
            condition: input.condition,
            images,
            submitted_at: Utc::now(),
        };

        // 4. Demo codes take the submission without consuming anything.
        if code.is_demo {
            self.submissions.create(&submission).await?;
            return Ok(submission);
        }

        // 4'. One transaction stores the submission and flips the code; the
        //     loser of a concurrent race rolls back and leaves no record.
        if !self.submissions.create_consuming_code(&submission).await? {
            return Err(ListingsServiceError::InvalidOrUsedCode);
        }
        Ok(submission)
    }
}

// ── ListSubmissions ──────────────────────────────────────────────────────────

pub struct ListSubmissionsUseCase<S: SubmissionRepository> {
    pub submissions: S,
}

impl<S: SubmissionRepository> ListSubmissionsUseCase<S> {
    /// Whole collection, newest first. No pagination.
    pub async fn execute(&self) -> Result<Vec<Submission>, ListingsServiceError> {
        self.submissions.list_newest_first().await
    }
}
