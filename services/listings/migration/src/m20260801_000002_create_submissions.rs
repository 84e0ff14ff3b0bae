use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Submissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Submissions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Submissions::Code).string().not_null())
                    .col(ColumnDef::new(Submissions::Name).string().not_null())
                    .col(ColumnDef::new(Submissions::Phone).string().not_null())
                    .col(ColumnDef::new(Submissions::Address).string())
                    .col(ColumnDef::new(Submissions::OwnerName).string())
                    .col(ColumnDef::new(Submissions::Price).string())
                    .col(ColumnDef::new(Submissions::Size).integer())
                    .col(ColumnDef::new(Submissions::Bedrooms).string())
                    .col(ColumnDef::new(Submissions::Baths).string())
                    .col(ColumnDef::new(Submissions::Condition).string())
                    .col(
                        ColumnDef::new(Submissions::Images)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Submissions::SubmittedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Index for the newest-first listing query.
        manager
            .create_index(
                Index::create()
                    .table(Submissions::Table)
                    .col(Submissions::SubmittedAt)
                    .name("idx_submissions_submitted_at")
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Submissions::Table)
                    .col(Submissions::Code)
                    .name("idx_submissions_code")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Submissions::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Submissions {
    Table,
    Id,
    Code,
    Name,
    Phone,
    Address,
    OwnerName,
    Price,
    Size,
    Bedrooms,
    Baths,
    Condition,
    Images,
    SubmittedAt,
}
