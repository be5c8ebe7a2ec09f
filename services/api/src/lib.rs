mod cli;
mod infra;
mod routes;
mod server;

use course_api::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
