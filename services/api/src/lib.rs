mod cli;
mod infra;
mod prompt;
mod render;
mod routes;
mod server;

use card_advisor::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
