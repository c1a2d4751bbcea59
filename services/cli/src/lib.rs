mod cli;
mod commands;
mod infra;
mod wizard;

use trustscore::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
