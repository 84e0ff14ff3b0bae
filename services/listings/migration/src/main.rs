use sea_orm_migration::prelude::*;

use doorcode_listings_migration::Migrator;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
