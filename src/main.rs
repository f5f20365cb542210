use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use originai::client::DEFAULT_BASE_URL;
use originai::store::SettingsStore;

mod commands;
mod output;

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

#[derive(Parser)]
#[command(
    name = "originai",
    about = "Check whether text is human-written, AI-generated, or LLM-rewritten",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Text to analyze (shorthand for `originai analyze <text>`).
    text: Option<String>,

    /// Output format: pretty, text, or json.
    #[arg(long, default_value = "pretty", requires = "text")]
    format: String,

    /// Base URL of the classification service.
    #[arg(long, default_value = DEFAULT_BASE_URL, requires = "text")]
    server: String,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze text, a single file, or a folder of files.
    Analyze(AnalyzeArgs),

    /// Show past analyses from the service's history feed.
    History(HistoryArgs),

    /// Log in with the demo credentials and cache the user id.
    Login(LoginArgs),

    /// Show the cached login and system information.
    Settings,
}

#[derive(Args)]
struct AnalyzeArgs {
    /// Text to analyze.
    text: Option<String>,

    /// Analyze a single file instead of text.
    #[arg(long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Analyze a folder of files (only the first file is submitted).
    #[arg(long, conflicts_with_all = ["text", "file"])]
    folder: Option<PathBuf>,

    #[arg(long, default_value = "pretty")]
    format: String,

    /// Base URL of the classification service.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    server: String,
}

#[derive(Args)]
struct HistoryArgs {
    /// Base URL of the classification service.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    server: String,
}

#[derive(Args)]
struct LoginArgs {
    /// User ID.
    user_id: String,

    /// Password.
    password: String,
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let store = SettingsStore::open(SettingsStore::default_path());

    match cli.command {
        Some(Command::Analyze(a)) => {
            commands::analyze::run(a.text, a.file, a.folder, &a.format, &a.server).await
        }

        Some(Command::History(a)) => commands::history::run(&a.server).await,

        Some(Command::Login(a)) => commands::login::run(&a.user_id, &a.password, &store),

        Some(Command::Settings) => commands::settings::run(&store),

        None => match cli.text {
            Some(text) => {
                commands::analyze::run(Some(text), None, None, &cli.format, &cli.server).await
            }
            None => {
                use clap::CommandFactory;
                Cli::command().print_help()?;
                Ok(())
            }
        },
    }
}
