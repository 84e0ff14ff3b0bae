use anyhow::Context as _;
use chrono::Utc;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, QueryFilter, QueryOrder, TransactionError, TransactionTrait,
};

use doorcode_listings_schema::{admin_sessions, codes, submissions};

use crate::domain::repository::{AdminSessionRepository, CodeRepository, SubmissionRepository};
use crate::domain::types::{AdminSession, Code, Submission};
use crate::error::ListingsServiceError;

// ── Code repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCodeRepository {
    pub db: DatabaseConnection,
}

impl CodeRepository for DbCodeRepository {
    async fn insert(&self, code: &Code) -> Result<bool, ListingsServiceError> {
        // DO NOTHING on a token collision; zero rows written reports the
        // clash to the issuer instead of erroring.
        let rows = codes::Entity::insert(codes::ActiveModel {
            id: Set(code.id),
            code: Set(code.code.clone()),
            used: Set(code.used),
            is_demo: Set(code.is_demo),
            created_at: Set(code.created_at),
        })
        .on_conflict(
            OnConflict::column(codes::Column::Code)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(&self.db)
        .await
        .context("insert code")?;
        Ok(rows > 0)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Code>, ListingsServiceError> {
        let model = codes::Entity::find()
            .filter(codes::Column::Code.eq(code))
            .one(&self.db)
            .await
            .context("find code by token")?;
        Ok(model.map(code_from_model))
    }

    async fn list_newest_first(&self) -> Result<Vec<Code>, ListingsServiceError> {
        let models = codes::Entity::find()
            .order_by_desc(codes::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list codes")?;
        Ok(models.into_iter().map(code_from_model).collect())
    }
}

fn code_from_model(model: codes::Model) -> Code {
    Code {
        id: model.id,
        code: model.code,
        used: model.used,
        is_demo: model.is_demo,
        created_at: model.created_at,
    }
}

// ── Submission repository ────────────────────────────────────────────────────

/// Error used inside the submission transaction so that losing the code race
/// rolls the whole write back.
#[derive(Debug, thiserror::Error)]
enum ConsumeCodeTxError {
    #[error("code already consumed")]
    CodeConsumed,
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
}

#[derive(Clone)]
pub struct DbSubmissionRepository {
    pub db: DatabaseConnection,
}

impl SubmissionRepository for DbSubmissionRepository {
    async fn create_consuming_code(
        &self,
        submission: &Submission,
    ) -> Result<bool, ListingsServiceError> {
        let result = self
            .db
            .transaction::<_, (), ConsumeCodeTxError>(|txn| {
                let submission = submission.clone();
                Box::pin(async move {
                    insert_submission(txn, &submission).await?;
                    // Conditional flip: only one transaction can move `used`
                    // from false to true for a given token.
                    let update = codes::Entity::update_many()
                        .col_expr(codes::Column::Used, Expr::value(true))
                        .filter(codes::Column::Code.eq(submission.code.clone()))
                        .filter(codes::Column::Used.eq(false))
                        .exec(txn)
                        .await?;
                    if update.rows_affected == 0 {
                        return Err(ConsumeCodeTxError::CodeConsumed);
                    }
                    Ok(())
                })
            })
            .await;
        match result {
            Ok(()) => Ok(true),
            Err(TransactionError::Transaction(ConsumeCodeTxError::CodeConsumed)) => Ok(false),
            Err(err) => Err(anyhow::Error::new(err)
                .context("create submission consuming code")
                .into()),
        }
    }

    async fn create(&self, submission: &Submission) -> Result<(), ListingsServiceError> {
        insert_submission(&self.db, submission)
            .await
            .context("create submission")?;
        Ok(())
    }

    async fn list_newest_first(&self) -> Result<Vec<Submission>, ListingsServiceError> {
        let models = submissions::Entity::find()
            .order_by_desc(submissions::Column::SubmittedAt)
            .all(&self.db)
            .await
            .context("list submissions")?;
        Ok(models.into_iter().map(submission_from_model).collect())
    }
}

async fn insert_submission<C: ConnectionTrait>(
    conn: &C,
    submission: &Submission,
) -> Result<(), sea_orm::DbErr> {
    submissions::ActiveModel {
        id: Set(submission.id),
        code: Set(submission.code.clone()),
        name: Set(submission.name.clone()),
        phone: Set(submission.phone.clone()),
        address: Set(submission.address.clone()),
        owner_name: Set(submission.owner_name.clone()),
        price: Set(submission.price.clone()),
        size: Set(submission.size),
        bedrooms: Set(submission.bedrooms.clone()),
        baths: Set(submission.baths.clone()),
        condition: Set(submission.condition.clone()),
        images: Set(serde_json::json!(submission.images)),
        submitted_at: Set(submission.submitted_at),
    }
    .insert(conn)
    .await?;
    Ok(())
}

fn submission_from_model(model: submissions::Model) -> Submission {
    Submission {
        id: model.id,
        code: model.code,
        name: model.name,
        phone: model.phone,
        address: model.address,
        owner_name: model.owner_name,
        price: model.price,
        size: model.size,
        bedrooms: model.bedrooms,
        baths: model.baths,
        condition: model.condition,
        images: serde_json::from_value(model.images).unwrap_or_default(),
        submitted_at: model.submitted_at,
    }
}

// ── Admin session repository ─────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAdminSessionRepository {
    pub db: DatabaseConnection,
}

impl AdminSessionRepository for DbAdminSessionRepository {
    async fn create(&self, session: &AdminSession) -> Result<(), ListingsServiceError> {
        admin_sessions::ActiveModel {
            id: Set(session.id),
            token: Set(session.token.clone()),
            expires_at: Set(session.expires_at),
            created_at: Set(session.created_at),
        }
        .insert(&self.db)
        .await
        .context("create admin session")?;
        Ok(())
    }

    async fn find_valid(&self, token: &str) -> Result<Option<AdminSession>, ListingsServiceError> {
        let now = Utc::now();
        let model = admin_sessions::Entity::find()
            .filter(admin_sessions::Column::Token.eq(token))
            .filter(admin_sessions::Column::ExpiresAt.gt(now))
            .one(&self.db)
            .await
            .context("find valid admin session")?;
        Ok(model.map(session_from_model))
    }

    async fn delete(&self, token: &str) -> Result<bool, ListingsServiceError> {
        let result = admin_sessions::Entity::delete_many()
            .filter(admin_sessions::Column::Token.eq(token))
            .exec(&self.db)
            .await
            .context("delete admin session")?;
        Ok(result.rows_affected > 0)
    }
}

fn session_from_model(model: admin_sessions::Model) -> AdminSession {
    AdminSession {
        id: model.id,
        token: model.token,
        expires_at: model.expires_at,
        created_at: model.created_at,
    }
}
