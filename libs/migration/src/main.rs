//! Standalone migration runner (`up`, `down`, `status`, `fresh`), for
//! operating on a database without booting the API.

use migration::Migrator;
use sea_orm_migration::cli;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
