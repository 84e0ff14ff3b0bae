use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::CodeRepository;
use crate::domain::types::{
    CODE_ISSUE_ATTEMPTS, CODE_TOKEN_LEN, Code, RedemptionState, generate_token,
};
use crate::error::ListingsServiceError;

// ── IssueCode ────────────────────────────────────────────────────────────────

pub struct IssueCodeInput {
    /// Demo codes are reusable and never lock.
    pub demo: bool,
}

pub struct IssueCodeUseCase<C: CodeRepository> {
    pub codes: C,
}

impl<C: CodeRepository> IssueCodeUseCase<C> {
    pub async fn execute(&self, input: IssueCodeInput) -> Result<Code, ListingsServiceError> {
        // The unique index on `code` is the allocation authority; a collision
        // gets a fresh token rather than failing the request outright.
        for _ in 0..CODE_ISSUE_ATTEMPTS {
            let code = Code {
                id: Uuid::new_v4(),
                code: generate_token(CODE_TOKEN_LEN),
                used: false,
                is_demo: input.demo,
                created_at: Utc::now(),
            };
            if self.codes.insert(&code).await? {
                return Ok(code);
            }
        }
        Err(ListingsServiceError::DuplicateCode)
    }
}

// ── CheckCode ────────────────────────────────────────────────────────────────

pub struct CheckCodeUseCase<C: CodeRepository> {
    pub codes: C,
}

impl<C: CodeRepository> CheckCodeUseCase<C> {
    /// Pure read: reports whether a submission against `code` may proceed.
    pub async fn execute(&self, code: &str) -> Result<RedemptionState, ListingsServiceError> {
        match self.codes.find_by_code(code).await? {
            None => Ok(RedemptionState::NotFound),
            Some(c) if c.is_redeemable() => Ok(RedemptionState::Open),
            Some(_) => Ok(RedemptionState::AlreadyUsed),
        }
    }
}

// ── ListCodes ────────────────────────────────────────────────────────────────

pub struct ListCodesUseCase<C: CodeRepository> {
    pub codes: C,
}

impl<C: CodeRepository> ListCodesUseCase<C> {
    pub async fn execute(&self) -> Result<Vec<Code>, ListingsServiceError> {
        self.codes.list_newest_first().await
    }
}
