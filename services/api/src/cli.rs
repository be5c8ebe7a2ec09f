use clap::{Args, Parser, Subcommand};

use course_api::catalog::filter_modules;
use course_api::error::AppError;

use crate::server;

#[derive(Parser, Debug)]
#[command(
    name = "SDET Course API",
    about = "Serve the course catalog, enrollment, and contact form backend",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the course catalog as JSON, optionally filtered
    Courses(CoursesArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug)]
pub(crate) struct CoursesArgs {
    /// Keep only courses at this level (Beginner, Intermediate, Advanced)
    #[arg(long)]
    level: Option<String>,
    /// Keep only courses whose duration contains this text
    #[arg(long)]
    duration: Option<String>,
}

fn print_courses(args: &CoursesArgs) -> Result<(), AppError> {
    let modules = filter_modules(args.level.as_deref(), args.duration.as_deref());
    let rendered = serde_json::to_string_pretty(&modules)
        .map_err(|err| AppError::Io(std::io::Error::new(std::io::ErrorKind::Other, err)))?;
    println!("{rendered}");
    Ok(())
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Courses(args) => print_courses(&args),
    }
}
